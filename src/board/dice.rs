//! Dice: the roll contract and the configured dice set.
//!
//! The `Die` trait is the caller-supplied randomness seam - the simulator
//! never assumes a distribution, only that a roll yields a small unsigned
//! score. `SeededDie` is the bundled deterministic implementation so
//! simulations are reproducible out of the box.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use thiserror::Error;

/// Number of dice a board must be configured with before play.
pub const REQUIRED_DICE: usize = 2;

/// Dice configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("too few dice: {count} configured, exactly 2 required")]
    TooFew { count: usize },

    #[error("too many dice: {count} configured, exactly 2 required")]
    TooMany { count: usize },
}

/// A single die.
///
/// `roll` takes `&mut self` so stateful implementations (seeded RNGs,
/// scripted test dice) are expressible.
pub trait Die {
    /// Produce one roll.
    fn roll(&mut self) -> u16;
}

/// Deterministic die backed by a seeded ChaCha8 stream.
///
/// Same seed, same roll sequence.
#[derive(Clone, Debug)]
pub struct SeededDie {
    rng: ChaCha8Rng,
    sides: u16,
}

impl SeededDie {
    /// Six-sided die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_sides(seed, 6)
    }

    /// Die with an arbitrary number of sides (at least 1).
    #[must_use]
    pub fn with_sides(seed: u64, sides: u16) -> Self {
        assert!(sides >= 1, "a die needs at least one side");
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            sides,
        }
    }
}

impl Die for SeededDie {
    fn roll(&mut self) -> u16 {
        self.rng.gen_range(1..=self.sides)
    }
}

/// The set of dice configured on a board.
///
/// Rolling requires exactly [`REQUIRED_DICE`] dice; any other count is a
/// configuration error surfaced before play begins.
#[derive(Default)]
pub struct DiceSet {
    dice: SmallVec<[Box<dyn Die>; REQUIRED_DICE]>,
}

impl DiceSet {
    /// Empty dice set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a die.
    pub fn add(&mut self, die: Box<dyn Die>) {
        self.dice.push(die);
    }

    /// Number of configured dice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Whether no dice are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Verify the configured count without rolling.
    pub fn check(&self) -> Result<(), DiceError> {
        match self.dice.len() {
            count if count < REQUIRED_DICE => Err(DiceError::TooFew { count }),
            count if count > REQUIRED_DICE => Err(DiceError::TooMany { count }),
            _ => Ok(()),
        }
    }

    /// Roll all dice and sum their scores.
    pub fn roll(&mut self) -> Result<u16, DiceError> {
        self.check()?;
        Ok(self.dice.iter_mut().map(|die| die.roll()).sum())
    }
}

impl std::fmt::Debug for DiceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiceSet").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_die_is_deterministic() {
        let mut die1 = SeededDie::new(42);
        let mut die2 = SeededDie::new(42);

        for _ in 0..100 {
            assert_eq!(die1.roll(), die2.roll());
        }
    }

    #[test]
    fn test_seeded_die_stays_in_range() {
        let mut die = SeededDie::new(7);
        for _ in 0..1000 {
            let roll = die.roll();
            assert!((1..=6).contains(&roll));
        }
    }

    #[test]
    fn test_roll_requires_exactly_two_dice() {
        let mut dice = DiceSet::new();
        assert_eq!(dice.roll(), Err(DiceError::TooFew { count: 0 }));

        dice.add(Box::new(SeededDie::new(1)));
        assert_eq!(dice.roll(), Err(DiceError::TooFew { count: 1 }));

        dice.add(Box::new(SeededDie::new(2)));
        assert!(dice.roll().is_ok());

        dice.add(Box::new(SeededDie::new(3)));
        assert_eq!(dice.roll(), Err(DiceError::TooMany { count: 3 }));
    }

    #[test]
    fn test_roll_sums_both_dice() {
        struct Fixed(u16);
        impl Die for Fixed {
            fn roll(&mut self) -> u16 {
                self.0
            }
        }

        let mut dice = DiceSet::new();
        dice.add(Box::new(Fixed(3)));
        dice.add(Box::new(Fixed(4)));
        assert_eq!(dice.roll(), Ok(7));
    }
}
