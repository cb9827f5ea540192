//! Ship placement for the scripted opponent.

use log::{debug, info, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord};
use crate::config::{ship_type, BOARD_SIZE, NUM_SHIPS};
use crate::ship::{Orientation, Placement};
use crate::store::GridStore;

/// Fill `board` with a layout: half of the time a layout is taken from
/// `pool`, otherwise (or when the pool has nothing usable) a random one is
/// generated. Pool failures are logged and never reach the caller.
pub fn place_ships<R: Rng + ?Sized>(rng: &mut R, board: &mut Board, pool: Option<&GridStore>) {
    if rng.random_bool(0.5) {
        if let Some(store) = pool {
            match store.load(rng) {
                Ok(Some(layout)) => {
                    info!("replaying stored layout from {}", store.dir().display());
                    *board = layout;
                    return;
                }
                Ok(None) => debug!("no stored layout available"),
                Err(e) => warn!("layout pool unavailable, generating instead: {}", e),
            }
        }
    }
    random_layout(rng, board);
}

/// Generate a random non-overlapping layout, placing ships `1..=5` in order.
pub fn random_layout<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) {
    board.clear();
    for ship_id in 1..=NUM_SHIPS as u8 {
        let placement = sample_placement(rng, board, ship_id);
        board.put(&placement);
    }
}

/// Sample origins and orientations until ship `ship_id` fits on empty water.
/// There is no retry limit; the fleet is small enough for a 10×10 board.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    ship_id: u8,
) -> Result<Placement, BoardError> {
    ship_type(ship_id).ok_or(BoardError::InvalidIndex)?;
    Ok(sample_placement(rng, board, ship_id))
}

/// Rejection sampler behind [`random_placement`]. `ship_id` must name a
/// ship of the fleet.
fn sample_placement<R: Rng + ?Sized>(rng: &mut R, board: &Board, ship_id: u8) -> Placement {
    let n = BOARD_SIZE as usize;
    loop {
        let origin = Coord::new(rng.random_range(0..n), rng.random_range(0..n));
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        if let Ok(placement) = Placement::new(ship_id, origin, orientation) {
            if board.fits(&placement) {
                return placement;
            }
        }
    }
}
