use std::env;
use std::path::PathBuf;

use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Fleet table indexed by `ship_id - 1`.
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Destroyer", ship_length(1)),
    ShipType::new("Submarine", ship_length(2)),
    ShipType::new("Cruiser", ship_length(3)),
    ShipType::new("Battleship", ship_length(4)),
    ShipType::new("Carrier", ship_length(5)),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 3 + 4 + 5;

/// Extension of persisted layout files.
pub const GRID_FILE_EXT: &str = "gr";
/// Size in bytes of one persisted layout: 100 little-endian `i32` cells.
pub const GRID_BLOB_LEN: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize) * 4;
pub const DEFAULT_GRID_DIR: &str = "grids";
/// Environment variable overriding [`DEFAULT_GRID_DIR`].
pub const GRID_DIR_ENV: &str = "GRIDHUNT_GRIDS";

/// Length of ship `ship_id` (1-based): 2, 3, 3, 4, 5.
pub const fn ship_length(ship_id: u8) -> usize {
    if ship_id >= 3 {
        ship_id as usize
    } else {
        ship_id as usize + 1
    }
}

/// Fleet entry for a 1-based ship id, if the id is part of the fleet.
pub fn ship_type(ship_id: u8) -> Option<ShipType> {
    if ship_id == 0 {
        return None;
    }
    SHIPS.get(ship_id as usize - 1).copied()
}

/// Directory of the shared layout pool, taken from `GRIDHUNT_GRIDS` when set.
pub fn grid_dir() -> PathBuf {
    env::var_os(GRID_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GRID_DIR))
}
