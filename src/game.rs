use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    common::{BoardError, Coord, GuessResult},
    config::{ship_type, TOTAL_SHIP_CELLS},
    hit_grid::{HitGrid, Mark},
};

/// Serializable snapshot of one side of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    /// Opponent attacks against `board`.
    pub incoming: HitGrid,
    /// Our attacks against the opponent.
    pub outgoing: HitGrid,
}

/// Current status of a game, from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Game logic for one side: its own board, the attacks it received and the
/// attacks it made.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    incoming: HitGrid,
    outgoing: HitGrid,
}

impl GameEngine {
    /// Create a new engine with an empty board and no guesses recorded.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            incoming: HitGrid::new(),
            outgoing: HitGrid::new(),
        }
    }

    /// Mutable reference to the player's board for ship placement.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Opponent attacks against our board.
    pub fn incoming(&self) -> &HitGrid {
        &self.incoming
    }

    /// Our attacks against the opponent; this is what target selection reads.
    pub fn outgoing(&self) -> &HitGrid {
        &self.outgoing
    }

    /// Handle an opponent guess on the player's board.
    pub fn opponent_guess(&mut self, coord: Coord) -> Result<GuessResult, BoardError> {
        let ship = self.board.ship_at(coord);
        self.incoming.record(coord, ship.is_some())?;
        let Some(ship_id) = ship else {
            return Ok(GuessResult::Miss);
        };
        if self.board.is_sunk(ship_id, &self.incoming) {
            let def = ship_type(ship_id).ok_or(BoardError::UnknownShipHit)?;
            Ok(GuessResult::Sink(def.name()))
        } else {
            Ok(GuessResult::Hit)
        }
    }

    /// Record the result of a guess made against the opponent.
    pub fn record_guess(&mut self, coord: Coord, result: GuessResult) -> Result<(), BoardError> {
        self.outgoing.record(coord, result.is_hit())?;
        Ok(())
    }

    /// Number of attacks made so far.
    pub fn guess_count(&self) -> usize {
        self.outgoing.count(Mark::Hit) + self.outgoing.count(Mark::Miss)
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.board.all_sunk(&self.incoming) {
            GameStatus::Lost
        } else if self.outgoing.count(Mark::Hit) >= TOTAL_SHIP_CELLS {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board,
            incoming: self.incoming,
            outgoing: self.outgoing,
        }
    }

    /// Restore an engine from a previously saved state.
    pub fn from_state(state: GameState) -> Self {
        Self {
            board: state.board,
            incoming: state.incoming,
            outgoing: state.outgoing,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
