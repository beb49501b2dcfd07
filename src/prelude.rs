//! Commonly used types and utilities for ease of import.

pub use crate::{
    decide, init_logging, AiPlayer, Board, Cell, CliPlayer, Coordinate, Game, GameMode,
    GuessResult, HitSet, MissSet, Player, SearchConfig, BOARD_SIZE, FLEET,
};
