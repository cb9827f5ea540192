//! Player trait and implementations
//!
//! - AiPlayer: the scripted opponent (hunt/target attacks, layout pool)
//! - CliPlayer: interactive command-line player

use crate::{
    board::Board,
    common::{BoardError, Coord, GuessResult},
    game::GameStatus,
    hit_grid::HitGrid,
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing ships on the board
/// - Selecting targets to attack
/// - Handling feedback from guesses and the end of the game
pub trait Player: Send {
    /// Place all ships onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next target given our record of attacks on the opponent.
    /// Returning `None` forfeits the game.
    fn select_target(&mut self, rng: &mut SmallRng, attacks: &HitGrid) -> Option<Coord>;

    /// Inform the player of the result of its last guess.
    fn handle_guess_result(&mut self, _coord: Coord, _result: GuessResult) {}

    /// Inform the player of an opponent guess against its board.
    fn handle_opponent_guess(&mut self, _coord: Coord, _result: GuessResult) {}

    /// Called once when the game ends, with both layouts revealed.
    fn handle_game_over(&mut self, _status: GameStatus, _own: &Board, _opponent: &Board) {}
}

mod ai;
pub use ai::AiPlayer;

mod cli;
pub use cli::{coord_to_string, parse_coord, parse_placement, print_player_view, CliPlayer};
