//! Ship occupancy board.
//!
//! Cells hold `0` for water or the 1-based id of the ship occupying them.
//! The grid is indexed `[x][y]`, which is also the order persisted layouts
//! are written in.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::common::{BoardError, Coord};
use crate::config::{ship_type, BOARD_SIZE, NUM_SHIPS};
use crate::hit_grid::HitGrid;
use crate::ship::{Orientation, Placement};

const GRID: usize = BOARD_SIZE as usize;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[i32; GRID]; GRID],
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            cells: [[0; GRID]; GRID],
        }
    }

    /// Wrap raw cell values without checking them. Use [`Board::validate`]
    /// before trusting data from outside the process.
    pub fn from_cells(cells: [[i32; GRID]; GRID]) -> Self {
        Board { cells }
    }

    /// Raw cell values, indexed `[x][y]`.
    pub fn cells(&self) -> &[[i32; GRID]; GRID] {
        &self.cells
    }

    /// Value at `coord`: `0` for water, otherwise a ship id.
    pub fn get(&self, coord: Coord) -> Result<i32, BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds);
        }
        Ok(self.cells[coord.x][coord.y])
    }

    /// Ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<u8> {
        match self.get(coord) {
            Ok(v) if v > 0 => u8::try_from(v).ok(),
            _ => None,
        }
    }

    /// Returns `true` when no cell is occupied.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v == 0)
    }

    /// Remove every ship.
    pub fn clear(&mut self) {
        self.cells = [[0; GRID]; GRID];
    }

    /// Whether `ship_id` is already on the board.
    pub fn is_placed(&self, ship_id: u8) -> bool {
        self.cells.iter().flatten().any(|&v| v == i32::from(ship_id))
    }

    /// Returns `true` if every cell of `placement` is currently water.
    pub fn fits(&self, placement: &Placement) -> bool {
        placement.cells().all(|c| self.cells[c.x][c.y] == 0)
    }

    /// Place ship `ship_id` at `origin`, extending towards positive `x` or `y`.
    pub fn place(
        &mut self,
        ship_id: u8,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<Placement, BoardError> {
        let placement = Placement::new(ship_id, origin, orientation)?;
        if self.is_placed(ship_id) {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        if !self.fits(&placement) {
            return Err(BoardError::ShipOverlaps);
        }
        self.put(&placement);
        Ok(placement)
    }

    /// Write `placement` without checking for overlap.
    pub(crate) fn put(&mut self, placement: &Placement) {
        let id = i32::from(placement.ship_id());
        for c in placement.cells() {
            self.cells[c.x][c.y] = id;
        }
    }

    /// Cells occupied by `ship_id`, column by column.
    pub fn ship_cells(&self, ship_id: u8) -> impl Iterator<Item = Coord> + '_ {
        let id = i32::from(ship_id);
        Coord::all().filter(move |c| self.cells[c.x][c.y] == id)
    }

    /// A ship is sunk once none of its cells remains unattacked.
    pub fn is_sunk(&self, ship_id: u8, hits: &HitGrid) -> bool {
        self.ship_cells(ship_id).all(|c| !hits.is_unattacked(c))
    }

    /// Returns `true` when every occupied cell has been attacked.
    pub fn all_sunk(&self, hits: &HitGrid) -> bool {
        Coord::all()
            .filter(|c| self.cells[c.x][c.y] != 0)
            .all(|c| !hits.is_unattacked(c))
    }

    /// Check that the board holds exactly the standard fleet: ids `1..=5`,
    /// each a straight contiguous run of its fleet length, and nothing else.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self
            .cells
            .iter()
            .flatten()
            .any(|&v| v < 0 || v > NUM_SHIPS as i32)
        {
            return Err(BoardError::InvalidLayout("cell holds an unknown ship id"));
        }
        for ship_id in 1..=NUM_SHIPS as u8 {
            let def = ship_type(ship_id).ok_or(BoardError::InvalidIndex)?;
            let mut cells = self.ship_cells(ship_id);
            let origin = cells
                .next()
                .ok_or(BoardError::InvalidLayout("ship is missing"))?;
            let count = 1 + cells.count();
            if count != def.length() {
                return Err(BoardError::InvalidLayout("ship has the wrong length"));
            }
            // Cells are visited column by column, so the first one is the
            // top-left end of the run.
            let below = Coord::new(origin.x, origin.y + 1);
            let orientation = if self.ship_at(below) == Some(ship_id) {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let placement = Placement::new(ship_id, origin, orientation)
                .map_err(|_| BoardError::InvalidLayout("ship is not a straight run"))?;
            if !placement
                .cells()
                .all(|c| self.cells[c.x][c.y] == i32::from(ship_id))
            {
                return Err(BoardError::InvalidLayout("ship is not a straight run"));
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        for y in 0..GRID {
            for x in 0..GRID {
                match self.cells[x][y] {
                    0 => write!(f, ". ")?,
                    v => write!(f, "{} ", v)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
