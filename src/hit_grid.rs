//! Per-cell record of attack outcomes against one side.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::common::{BoardError, Coord};
use crate::config::BOARD_SIZE;

const GRID: usize = BOARD_SIZE as usize;

/// Outcome recorded for a single cell. The integer encoding is `0`
/// (unattacked), `1` (miss) and `-1` (hit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Unknown,
    Miss,
    Hit,
}

impl Mark {
    pub fn value(self) -> i32 {
        match self {
            Mark::Unknown => 0,
            Mark::Miss => 1,
            Mark::Hit => -1,
        }
    }
}

impl TryFrom<i32> for Mark {
    type Error = BoardError;

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Mark::Unknown),
            1 => Ok(Mark::Miss),
            -1 => Ok(Mark::Hit),
            other => Err(BoardError::InvalidMark(other)),
        }
    }
}

/// 10×10 hit/miss grid indexed `[x][y]`. Once a cell is marked it never
/// changes again.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitGrid {
    marks: [[Mark; GRID]; GRID],
}

impl HitGrid {
    pub fn new() -> Self {
        HitGrid {
            marks: [[Mark::Unknown; GRID]; GRID],
        }
    }

    /// Build a grid from the integer encoding.
    pub fn from_values(values: &[[i32; GRID]; GRID]) -> Result<Self, BoardError> {
        let mut grid = HitGrid::new();
        for c in Coord::all() {
            grid.marks[c.x][c.y] = Mark::try_from(values[c.x][c.y])?;
        }
        Ok(grid)
    }

    /// The integer encoding of the whole grid.
    pub fn values(&self) -> [[i32; GRID]; GRID] {
        let mut out = [[0; GRID]; GRID];
        for c in Coord::all() {
            out[c.x][c.y] = self.marks[c.x][c.y].value();
        }
        out
    }

    pub fn get(&self, coord: Coord) -> Result<Mark, BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds);
        }
        Ok(self.marks[coord.x][coord.y])
    }

    /// `true` for on-board cells nobody has attacked yet.
    pub fn is_unattacked(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Ok(Mark::Unknown))
    }

    /// Mark `coord` as a hit or a miss.
    pub fn record(&mut self, coord: Coord, hit: bool) -> Result<Mark, BoardError> {
        if self.get(coord)? != Mark::Unknown {
            return Err(BoardError::AlreadyGuessed);
        }
        let mark = if hit { Mark::Hit } else { Mark::Miss };
        self.marks[coord.x][coord.y] = mark;
        Ok(mark)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().flatten().filter(|&&m| m == mark).count()
    }

    /// Number of cells still open for attack.
    pub fn unattacked(&self) -> usize {
        self.count(Mark::Unknown)
    }
}

impl Default for HitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HitGrid:")?;
        for y in 0..GRID {
            for x in 0..GRID {
                let ch = match self.marks[x][y] {
                    Mark::Unknown => '.',
                    Mark::Miss => 'o',
                    Mark::Hit => 'X',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
