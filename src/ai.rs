//! Attack decision engine for the scripted opponent.
//!
//! The engine alternates between two modes. Without an open hunt it fires at
//! random unattacked cells. Once the caller reports a hit it walks outwards
//! from that hit: up, then down, then left, then right, always continuing a
//! line while shots keep landing and only turning when a direction runs into
//! the board edge or an already attacked cell. When all four directions are
//! exhausted the hunt is abandoned and random fire resumes.

use log::debug;
use rand::Rng;

use crate::common::{Coord, Direction, GuessResult};
use crate::config::BOARD_SIZE;
use crate::hit_grid::HitGrid;

/// Working memory of the current hunt. Meaningful only within one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackState {
    /// Last coordinate the engine fired at.
    pub last_attempt: Option<Coord>,
    /// Most recent hit on a ship that is not yet sunk. `None` means no hunt
    /// is open and the next shot is random.
    pub last_hit: Option<Coord>,
    /// First hit of the current hunt.
    pub ship_start: Option<Coord>,
    pub is_vertical: bool,
    pub is_forward: bool,
}

impl Default for AttackState {
    fn default() -> Self {
        Self {
            last_attempt: None,
            last_hit: None,
            ship_start: None,
            is_vertical: true,
            is_forward: true,
        }
    }
}

/// Hunt/target attack engine. One instance per active game.
#[derive(Debug, Clone, Default)]
pub struct Hunter {
    state: AttackState,
}

impl Hunter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an explicit state.
    pub fn with_state(state: AttackState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AttackState {
        &self.state
    }

    /// Forget everything; used at the start of a game.
    pub fn reset(&mut self) {
        self.state = AttackState::default();
    }

    /// Set or clear the hit the next directional probe continues from.
    pub fn set_last_hit(&mut self, coord: Option<Coord>) {
        self.state.last_hit = coord;
    }

    /// Drop the open hunt, e.g. after the targeted ship was sunk.
    pub fn clear_hunt(&mut self) {
        self.state.last_hit = None;
    }

    /// Adopt a shot the caller chose itself. Any open hunt is dropped and
    /// `coord` becomes the origin of the next one, so a hit reported for it
    /// through [`record_outcome`] is followed up from that cell.
    ///
    /// [`record_outcome`]: Hunter::record_outcome
    pub fn note_shot(&mut self, coord: Coord) {
        self.state = AttackState {
            last_attempt: Some(coord),
            ship_start: Some(coord),
            ..AttackState::default()
        };
    }

    /// Feed back the result of the shot at `coord`. A hit continues the hunt
    /// from that cell, a sinking ends it, a miss leaves it untouched.
    pub fn record_outcome(&mut self, coord: Coord, result: GuessResult) {
        match result {
            GuessResult::Hit => self.state.last_hit = Some(coord),
            GuessResult::Sink(_) => self.state.last_hit = None,
            GuessResult::Miss => {}
        }
    }

    /// Choose the next cell to attack. The returned cell is unattacked in
    /// `hits`; at least one such cell must exist.
    pub fn attack<R: Rng + ?Sized>(&mut self, rng: &mut R, hits: &HitGrid) -> Coord {
        if self.state.last_hit.is_some() {
            if let Some(target) = self.follow_up(hits) {
                self.state.last_attempt = Some(target);
                return target;
            }
            debug!(
                "hunt from {:?} exhausted in every direction, back to random fire",
                self.state.ship_start
            );
            self.state.last_hit = None;
        }
        self.random_target(rng, hits)
    }

    fn random_target<R: Rng + ?Sized>(&mut self, rng: &mut R, hits: &HitGrid) -> Coord {
        debug_assert!(hits.unattacked() > 0, "no unattacked cell left");
        self.state.is_vertical = true;
        self.state.is_forward = true;
        let n = BOARD_SIZE as usize;
        let target = loop {
            let c = Coord::new(rng.random_range(0..n), rng.random_range(0..n));
            if hits.is_unattacked(c) {
                break c;
            }
        };
        self.state.last_attempt = Some(target);
        self.state.ship_start = Some(target);
        target
    }

    /// Directional phase. Returns `None` once all four directions around the
    /// hunt origin are exhausted.
    fn follow_up(&mut self, hits: &HitGrid) -> Option<Coord> {
        let last_hit = self.state.last_hit?;
        // A hit seeded by the caller without a preceding random shot starts
        // its own hunt.
        let start = *self.state.ship_start.get_or_insert(last_hit);
        let last_attempt = *self.state.last_attempt.get_or_insert(last_hit);

        if self.state.is_vertical {
            if self.state.is_forward {
                if last_attempt == last_hit {
                    if let Some(c) = probe(hits, last_hit, Direction::Up) {
                        return Some(c);
                    }
                }
                self.state.is_forward = false;
                self.state.last_hit = Some(start);
            }

            if let Some(c) = probe(hits, self.state.last_hit?, Direction::Down) {
                return Some(c);
            }

            self.state.is_vertical = false;
            self.state.is_forward = true;
            self.state.last_attempt = Some(start);
            self.state.last_hit = Some(start);
        }

        if self.state.is_forward {
            if self.state.last_attempt == self.state.last_hit {
                if let Some(c) = probe(hits, self.state.last_hit?, Direction::Left) {
                    return Some(c);
                }
            }
            self.state.is_forward = false;
            self.state.last_hit = Some(start);
        }

        probe(hits, self.state.last_hit?, Direction::Right)
    }
}

fn probe(hits: &HitGrid, from: Coord, dir: Direction) -> Option<Coord> {
    from.step(dir).filter(|&c| hits.is_unattacked(c))
}
