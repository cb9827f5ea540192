//! Ship definitions and the cells a placed ship covers.

use serde::{Deserialize, Serialize};

use crate::common::{BoardError, Coord};
use crate::config::{ship_type, BOARD_SIZE};

/// Orientation of a ship on the board. Ships grow towards positive `x`
/// (horizontal) or positive `y` (vertical) from their origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A single ship laid on the board, described by its id, origin and
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    ship_id: u8,
    ship_type: ShipType,
    origin: Coord,
    orientation: Orientation,
}

impl Placement {
    /// Describe ship `ship_id` starting at `origin`. Fails if the id is not
    /// part of the fleet or the ship would leave the board.
    pub fn new(ship_id: u8, origin: Coord, orientation: Orientation) -> Result<Self, BoardError> {
        let ship_type = ship_type(ship_id).ok_or(BoardError::InvalidIndex)?;
        let n = BOARD_SIZE as usize;
        let len = ship_type.length();
        if origin.x >= n || origin.y >= n {
            return Err(BoardError::OutOfBounds);
        }
        let end = match orientation {
            Orientation::Horizontal => origin.x + len,
            Orientation::Vertical => origin.y + len,
        };
        if end > n {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Self {
            ship_id,
            ship_type,
            origin,
            orientation,
        })
    }

    pub fn ship_id(&self) -> u8 {
        self.ship_id
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn cells(self) -> impl Iterator<Item = Coord> {
        (0..self.ship_type.length()).map(move |i| match self.orientation {
            Orientation::Horizontal => Coord::new(self.origin.x + i, self.origin.y),
            Orientation::Vertical => Coord::new(self.origin.x, self.origin.y + i),
        })
    }
}
