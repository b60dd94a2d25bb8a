//! Commonly used types and utilities for ease of import.

pub use crate::{
    run_session, Command, Controller, Coordinate, Fleet, Game, GameConfig, GameError,
    GameStatus, GuessOutcome, GuessReport, Player,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliController};
