//! Synchronous turn loop between two local players.

use log::{debug, info};
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::{
    common::BoardError,
    config::BOARD_SIZE,
    game::{GameEngine, GameStatus},
    player::Player,
};

/// Which seat a player occupies. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub winner: Seat,
    /// `true` when the loser resigned instead of being sunk.
    pub forfeit: bool,
    pub first_guesses: usize,
    pub second_guesses: usize,
}

struct Side {
    player: Box<dyn Player>,
    engine: GameEngine,
}

/// Two players, each with their own engine, taking turns on one thread.
pub struct LocalGame {
    first: Side,
    second: Side,
}

impl LocalGame {
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self {
            first: Side {
                player: first,
                engine: GameEngine::new(),
            },
            second: Side {
                player: second,
                engine: GameEngine::new(),
            },
        }
    }

    pub fn engine(&self, seat: Seat) -> &GameEngine {
        match seat {
            Seat::First => &self.first.engine,
            Seat::Second => &self.second.engine,
        }
    }

    /// Both players lay out their fleets; each layout must be valid.
    pub fn setup(&mut self, rng: &mut SmallRng) -> Result<(), BoardError> {
        for side in [&mut self.first, &mut self.second] {
            side.player.place_ships(rng, side.engine.board_mut())?;
            side.engine.board().validate()?;
        }
        Ok(())
    }

    /// Play until one fleet is sunk or a player resigns. Call [`setup`]
    /// first.
    ///
    /// [`setup`]: LocalGame::setup
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<MatchOutcome, BoardError> {
        let max_turns = 2 * (BOARD_SIZE as usize) * (BOARD_SIZE as usize);
        let mut turn = Seat::First;
        let mut forfeit = false;
        for _ in 0..max_turns {
            let (attacker, defender) = match turn {
                Seat::First => (&mut self.first, &mut self.second),
                Seat::Second => (&mut self.second, &mut self.first),
            };
            let Some(target) = attacker.player.select_target(rng, attacker.engine.outgoing())
            else {
                info!("{:?} resigned", turn);
                forfeit = true;
                break;
            };
            let result = defender.engine.opponent_guess(target)?;
            attacker.engine.record_guess(target, result)?;
            debug!("{:?} fired at {}: {:?}", turn, target, result);
            attacker.player.handle_guess_result(target, result);
            defender.player.handle_opponent_guess(target, result);
            if defender.engine.status() == GameStatus::Lost {
                break;
            }
            turn = turn.other();
        }

        // Whoever acted last either won or resigned.
        let winner = if forfeit { turn.other() } else { turn };
        let outcome = MatchOutcome {
            winner,
            forfeit,
            first_guesses: self.first.engine.guess_count(),
            second_guesses: self.second.engine.guess_count(),
        };
        info!("game over: {:?}", outcome);

        let first_board = *self.first.engine.board();
        let second_board = *self.second.engine.board();
        let (first_status, second_status) = match winner {
            Seat::First => (GameStatus::Won, GameStatus::Lost),
            Seat::Second => (GameStatus::Lost, GameStatus::Won),
        };
        self.first
            .player
            .handle_game_over(first_status, &first_board, &second_board);
        self.second
            .player
            .handle_game_over(second_status, &second_board, &first_board);
        Ok(outcome)
    }
}
