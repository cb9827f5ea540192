use std::sync::Arc;

use log::warn;
use rand::rngs::SmallRng;

use crate::{
    ai::Hunter,
    board::Board,
    common::{BoardError, Coord, GuessResult},
    game::GameStatus,
    hit_grid::HitGrid,
    placement,
    store::GridStore,
};

use super::Player;

/// The scripted opponent: directional hunt attacks and, when a layout pool
/// is attached, replay of layouts that won earlier games.
pub struct AiPlayer {
    hunter: Hunter,
    pool: Option<Arc<GridStore>>,
}

impl AiPlayer {
    /// Opponent without a layout pool; it always places ships at random.
    pub fn new() -> Self {
        Self {
            hunter: Hunter::new(),
            pool: None,
        }
    }

    /// Opponent that reads and feeds the shared layout pool.
    pub fn with_pool(pool: Arc<GridStore>) -> Self {
        Self {
            hunter: Hunter::new(),
            pool: Some(pool),
        }
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn pool(&self) -> Option<&GridStore> {
        self.pool.as_deref()
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        self.hunter.reset();
        placement::place_ships(rng, board, self.pool.as_deref());
        board.validate()
    }

    fn select_target(&mut self, rng: &mut SmallRng, attacks: &HitGrid) -> Option<Coord> {
        Some(self.hunter.attack(rng, attacks))
    }

    fn handle_guess_result(&mut self, coord: Coord, result: GuessResult) {
        self.hunter.record_outcome(coord, result);
    }

    fn handle_game_over(&mut self, status: GameStatus, own: &Board, opponent: &Board) {
        let Some(pool) = self.pool.as_deref() else {
            return;
        };
        let winner = match status {
            GameStatus::Won => own,
            GameStatus::Lost => opponent,
            GameStatus::InProgress => return,
        };
        if let Err(e) = pool.save(winner) {
            warn!("could not store winning layout: {}", e);
        }
    }
}
