#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod eval;
mod movegen;
mod ship;
pub mod search;
pub mod state;
#[cfg(feature = "std")]
pub mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player;
#[cfg(feature = "std")]
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod ui;
#[cfg(feature = "std")]
pub mod prelude;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use eval::*;
pub use movegen::moves;
pub use search::{decide, search, SearchOutcome};
pub use ship::*;
pub use state::{apply, Played, SearchNode};
#[cfg(feature = "std")]
pub use game::{Game, GameMode, Side, TurnReport};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use player::*;
#[cfg(feature = "std")]
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
