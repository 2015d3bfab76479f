//! The cyclic board.
//!
//! A board is an ordered sequence of squares - fixed after construction and
//! never empty - plus the set of configured dice. Positions on the board are
//! plain indices into the square array; [`Board::advance`] moves a cursor one
//! square forward, wrapping past the last square back to the first.
//!
//! Squares carry the only board-side mutable state (rotation counters, match
//! pots, waiting ledgers), so effect application goes through
//! [`Board::square_mut`].

pub mod dice;

pub use dice::{Die, DiceError, DiceSet, SeededDie, REQUIRED_DICE};

use crate::squares::Square;

/// Ordered cyclic sequence of squares plus the configured dice.
#[derive(Debug)]
pub struct Board {
    squares: Vec<Square>,
    dice: DiceSet,
}

impl Board {
    /// Create a board over the given squares. Dice are added separately.
    ///
    /// Panics if `squares` is empty: a cyclic board has no meaningful empty
    /// state.
    #[must_use]
    pub fn new(squares: Vec<Square>) -> Self {
        assert!(!squares.is_empty(), "a board needs at least one square");
        Self {
            squares,
            dice: DiceSet::new(),
        }
    }

    /// Add a die to the board's dice set.
    pub fn add_die(&mut self, die: Box<dyn Die>) {
        self.dice.add(die);
    }

    /// Number of configured dice.
    #[must_use]
    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }

    /// Verify the dice configuration without rolling.
    pub fn check_dice(&self) -> Result<(), DiceError> {
        self.dice.check()
    }

    /// Roll the configured dice and return the summed score.
    pub fn roll_score(&mut self) -> Result<u16, DiceError> {
        self.dice.roll()
    }

    /// Number of squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// A board is never empty; kept for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// The square at `index`.
    ///
    /// Panics if `index` is out of bounds; cursors produced by
    /// [`Board::advance`] always stay in bounds.
    #[must_use]
    pub fn square(&self, index: usize) -> &Square {
        &self.squares[index]
    }

    /// Mutable access to the square at `index`, for effect application.
    pub fn square_mut(&mut self, index: usize) -> &mut Square {
        &mut self.squares[index]
    }

    /// Read-only iteration from the first square.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    /// Move a cursor one square forward, wrapping at the end.
    #[must_use]
    pub fn advance(&self, cursor: usize) -> usize {
        (cursor + 1) % self.squares.len()
    }
}
