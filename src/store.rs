//! Content-addressed pool of replayable ship layouts.
//!
//! Each entry is a 400-byte blob (100 little-endian `i32` cells in `[x][y]`
//! order) stored as `<MD5 hex>.gr`. Saving the same layout twice rewrites
//! the same file. Loading picks an entry at random and deletes it, so every
//! stored layout is replayed at most once.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info};
use md5::{Digest, Md5};
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{GRID_BLOB_LEN, GRID_FILE_EXT};

/// Errors surfaced by the layout pool. Callers treat all of them as
/// "persistence unavailable" and fall back to random placement.
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Encoding(bincode::Error),
    /// Entry does not hold exactly one layout blob.
    Corrupt { path: PathBuf, len: usize },
    /// Entry decoded but is not a valid fleet layout.
    InvalidLayout(BoardError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "layout pool I/O error: {}", e),
            StoreError::Encoding(e) => write!(f, "layout encoding error: {}", e),
            StoreError::Corrupt { path, len } => write!(
                f,
                "corrupt layout file {}: {} bytes, expected {}",
                path.display(),
                len,
                GRID_BLOB_LEN
            ),
            StoreError::InvalidLayout(e) => write!(f, "stored layout rejected: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Encoding(e) => Some(e),
            StoreError::InvalidLayout(e) => Some(e),
            StoreError::Corrupt { .. } => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<bincode::Error> for StoreError {
    fn from(err: bincode::Error) -> Self {
        StoreError::Encoding(err)
    }
}

/// File-backed layout pool rooted at one directory.
///
/// Operations on one `GridStore` are serialized internally; share it between
/// games with an `Arc`. Separate processes using the same directory are not
/// coordinated.
#[derive(Debug)]
pub struct GridStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl GridStore {
    /// Open the pool at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist `board` and return the path of its entry.
    pub fn save(&self, board: &Board) -> Result<PathBuf, StoreError> {
        let bytes = encode(board)?;
        let path = self.dir.join(format!("{}.{}", digest(&bytes), GRID_FILE_EXT));
        let _guard = self.guard();
        fs::write(&path, &bytes)?;
        info!("saved layout {}", path.display());
        Ok(path)
    }

    /// Take a random entry out of the pool. `Ok(None)` means the pool is
    /// empty. The entry is removed before it is decoded, so a corrupt file
    /// is discarded along with the error.
    pub fn load<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<Board>, StoreError> {
        let _guard = self.guard();
        let entries = self.list()?;
        if entries.is_empty() {
            debug!("layout pool {} is empty", self.dir.display());
            return Ok(None);
        }
        let path = &entries[rng.random_range(0..entries.len())];
        let bytes = fs::read(path)?;
        fs::remove_file(path)?;
        let board = decode(&bytes).map_err(|e| match e {
            StoreError::Corrupt { len, .. } => StoreError::Corrupt {
                path: path.clone(),
                len,
            },
            other => other,
        })?;
        board.validate().map_err(StoreError::InvalidLayout)?;
        info!("loaded layout {}", path.display());
        Ok(Some(board))
    }

    /// Paths of all entries, sorted.
    pub fn entries(&self) -> Result<Vec<PathBuf>, StoreError> {
        let _guard = self.guard();
        self.list()
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.entries()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Delete every entry, returning how many were removed.
    pub fn clear(&self) -> Result<usize, StoreError> {
        let _guard = self.guard();
        let entries = self.list()?;
        for path in &entries {
            fs::remove_file(path)?;
        }
        Ok(entries.len())
    }

    fn list(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut out = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let is_grid = path.extension().is_some_and(|ext| ext == GRID_FILE_EXT);
            if is_grid && path.is_file() {
                out.push(path);
            }
        }
        out.sort();
        Ok(out)
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The lock protects no data, so a poisoned guard is still usable.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Serialize a board into its fixed-size blob.
pub fn encode(board: &Board) -> Result<Vec<u8>, StoreError> {
    let bytes = bincode::serialize(board)?;
    if bytes.len() != GRID_BLOB_LEN {
        return Err(StoreError::Corrupt {
            path: PathBuf::new(),
            len: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Parse a blob written by [`encode`]. The cells are not validated.
pub fn decode(bytes: &[u8]) -> Result<Board, StoreError> {
    if bytes.len() != GRID_BLOB_LEN {
        return Err(StoreError::Corrupt {
            path: PathBuf::new(),
            len: bytes.len(),
        });
    }
    Ok(bincode::deserialize(bytes)?)
}

/// Upper-case hex MD5 of `bytes`, used as the entry name.
pub fn digest(bytes: &[u8]) -> String {
    hex::encode_upper(Md5::digest(bytes))
}
