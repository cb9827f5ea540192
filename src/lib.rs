//! Battleship opponent: hunt/target attack engine, random fleet placement
//! and a content-addressed pool of layouts that beat it before.

mod ai;
mod board;
mod common;
mod config;
mod game;
mod hit_grid;
mod logging;
pub mod placement;
mod player;
mod session;
mod ship;
pub mod store;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use hit_grid::*;
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
pub use session::*;
pub use ship::*;
pub use store::{GridStore, StoreError};
