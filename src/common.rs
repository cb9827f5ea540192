//! Common types: coordinates, guess results and board errors.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::config::BOARD_SIZE;

/// A board coordinate. `x` is the column, `y` the row; `(0, 0)` is the
/// top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns `true` if the coordinate lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE as usize && self.y < BOARD_SIZE as usize
    }

    /// Neighbouring cell in `dir`, or `None` past the board edge.
    pub fn step(self, dir: Direction) -> Option<Coord> {
        let n = BOARD_SIZE as usize;
        let next = match dir {
            Direction::Up => Coord::new(self.x, self.y.checked_sub(1)?),
            Direction::Down => Coord::new(self.x, self.y.checked_add(1)?),
            Direction::Left => Coord::new(self.x.checked_sub(1)?, self.y),
            Direction::Right => Coord::new(self.x.checked_add(1)?, self.y),
        };
        (next.x < n && next.y < n).then_some(next)
    }

    /// Iterate every coordinate of the board, column by column.
    pub fn all() -> impl Iterator<Item = Coord> {
        let n = BOARD_SIZE as usize;
        (0..n).flat_map(move |x| (0..n).map(move |y| Coord::new(x, y)))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord::new(x, y)
    }
}

/// Probe directions used while hunting a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `y - 1`
    Up,
    /// `y + 1`
    Down,
    /// `x - 1`
    Left,
    /// `x + 1`
    Right,
}

/// Result of a guess attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess hit an undepleted ship segment.
    Hit,
    /// Guess missed all ships.
    Miss,
    /// Guess sank a ship, carrying its name.
    Sink(&'static str),
}

impl GuessResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

/// Errors returned by board and hit grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Ship id is not part of the fleet.
    InvalidIndex,
    /// Coordinate is outside the board.
    OutOfBounds,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship would extend past the board edge.
    ShipOutOfBounds,
    /// Guess was already made at this position.
    AlreadyGuessed,
    /// A hit landed on a cell that holds no ship.
    UnknownShipHit,
    /// A hit grid cell holds a value other than -1, 0 or 1.
    InvalidMark(i32),
    /// Board contents do not form a valid fleet layout.
    InvalidLayout(&'static str),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidIndex => write!(f, "Ship id is not part of the fleet"),
            BoardError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::AlreadyGuessed => write!(f, "Guess was already made at this position"),
            BoardError::UnknownShipHit => write!(f, "Hit recorded on a cell without a ship"),
            BoardError::InvalidMark(v) => write!(f, "Invalid hit grid value {}", v),
            BoardError::InvalidLayout(why) => write!(f, "Invalid layout: {}", why),
        }
    }
}

impl std::error::Error for BoardError {}
