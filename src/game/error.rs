//! Configuration errors that abort a simulation run.
//!
//! All of these fire at `play` entry, before any round executes or any
//! scoreboard event is emitted. None are recoverable mid-game: the caller
//! fixes the setup and re-invokes.

use thiserror::Error;

use crate::board::DiceError;

/// Player-count configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlayerCountError {
    #[error("too few players: {count} added, at least 2 required")]
    TooFew { count: usize },

    #[error("too many players: {count} added, at most 11 allowed")]
    TooMany { count: usize },
}

/// Anything that can abort a `play` call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    PlayerCount(#[from] PlayerCountError),

    #[error(transparent)]
    Dice(#[from] DiceError),
}
