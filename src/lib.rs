//! # worldcup
//!
//! A turn-based, Monopoly-style "World Cup" board game simulator.
//!
//! Players move around a cyclic board of special squares, gaining and losing
//! money from square effects, until at most one player remains solvent or
//! the round limit is reached.
//!
//! ## Design
//!
//! - **Closed square set**: board content is fixed game data, so squares are
//!   a tagged enum behind one effect surface (`stay_on`, `go_through`,
//!   `try_leave`), not an open trait hierarchy.
//! - **Index cursors**: players hold plain indices into the board's square
//!   array; the board itself is read-only during play, square-internal
//!   counters are the only board-side mutable state.
//! - **External randomness**: dice are a caller-supplied trait. `SeededDie`
//!   ships as a deterministic default.
//! - **Observer boundary**: progress is reported through the `ScoreBoard`
//!   trait; player status is an enum internally and text only at that seam.
//!
//! ## Modules
//!
//! - `squares`: square variants and their landing/passing/gating effects
//! - `board`: the cyclic board and the dice set
//! - `player`: per-player turn-resolution state machine
//! - `game`: round orchestration, termination, winner selection, scoreboard
//!
//! ## Example
//!
//! ```
//! use worldcup::{Game, SeededDie};
//!
//! let mut game = Game::world_cup_2022();
//! game.add_die(Box::new(SeededDie::new(1)));
//! game.add_die(Box::new(SeededDie::new(2)));
//! game.add_player("Lewandowski");
//! game.add_player("Messi");
//!
//! game.play(100).unwrap();
//! ```

pub mod board;
pub mod game;
pub mod player;
pub mod squares;

// Re-export commonly used types
pub use crate::board::{Board, DiceError, DiceSet, Die, SeededDie, REQUIRED_DICE};
pub use crate::game::{
    world_cup_2022, Game, GameError, LogScoreBoard, NoopScoreBoard, PlayerCountError, ScoreBoard,
    MAX_PLAYERS, MIN_PLAYERS,
};
pub use crate::player::{Player, PlayerStatus, INITIAL_MONEY};
pub use crate::squares::{Importance, Square, SquareKind};
