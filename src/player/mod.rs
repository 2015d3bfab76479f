//! Players and the per-turn resolution state machine.
//!
//! A player owns a cursor into the board's square array plus money, status
//! and an alive flag. One call to [`Player::play`] resolves one turn:
//!
//! 1. If the current square gates the player (yellow card), the turn is
//!    consumed waiting - no roll happens.
//! 2. Otherwise the dice are rolled and the cursor advances square by
//!    square, applying `go_through` on every intermediate square and
//!    `stay_on` on the landing square.
//! 3. Landing re-queries the gate so next turn's wait status is primed
//!    immediately.
//!
//! A negative delta larger than the player's money forces bankruptcy:
//! money drops to exactly 0, the player is permanently inert, and the
//! cursor still fast-forwards to the intended destination square without
//! applying further effects.

use serde::{Deserialize, Serialize};

use crate::board::{Board, DiceError};

/// Money every player starts with.
pub const INITIAL_MONEY: u32 = 1000;

/// Turn-resolution state, rendered to text only at the reporting boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Playing normally.
    InPlay,
    /// Gated on a square; the count is the rounds still to wait.
    Waiting(u32),
    /// Out of money. Terminal.
    Bankrupt,
}

impl std::fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerStatus::InPlay => write!(f, "in play"),
            PlayerStatus::Waiting(left) => write!(f, "*** waiting: {left} ***"),
            PlayerStatus::Bankrupt => write!(f, "*** bankrupt ***"),
        }
    }
}

/// A participant in the game.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    money: u32,
    status: PlayerStatus,
    alive: bool,
    /// Cursor into the board's square array.
    position: usize,
}

impl Player {
    /// Create a player at the first square with the initial money.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            money: INITIAL_MONEY,
            status: PlayerStatus::InPlay,
            alive: true,
            position: 0,
        }
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current money. Never negative by construction.
    #[must_use]
    pub fn money(&self) -> u32 {
        self.money
    }

    /// Current turn-resolution status.
    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Whether the player is still solvent.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Cursor into the board's square array.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Name of the square the player currently occupies.
    #[must_use]
    pub fn square_name<'a>(&self, board: &'a Board) -> &'a str {
        board.square(self.position).name()
    }

    /// Resolve one turn against the board.
    ///
    /// A bankrupt player is permanently inert: calling this is a no-op.
    /// The only error is a misconfigured dice set, surfaced unchanged from
    /// the roll.
    pub fn play(&mut self, board: &mut Board) -> Result<(), DiceError> {
        if !self.alive {
            return Ok(());
        }

        // Gate check on the square the player starts the turn on.
        let wait = board.square_mut(self.position).try_leave(&self.name);
        if wait > 0 {
            self.status = PlayerStatus::Waiting(wait);
            return Ok(());
        }

        self.status = PlayerStatus::InPlay;
        let score = board.roll_score()?;
        log::debug!("{} rolled {}", self.name, score);

        if score == 0 {
            // No movement: the landing effect applies where the player stands.
            let delta = board.square_mut(self.position).stay_on(self.money);
            self.apply(delta);
            return Ok(());
        }

        let mut step = 0;
        while step < score {
            self.position = board.advance(self.position);
            step += 1;
            let landing = step == score;

            let delta = if landing {
                board.square_mut(self.position).stay_on(self.money)
            } else {
                board.square_mut(self.position).go_through(self.money)
            };

            if !self.apply(delta) {
                // Bankrupt mid-move: fast-forward to the intended
                // destination without applying further effects.
                while step < score {
                    self.position = board.advance(self.position);
                    step += 1;
                }
                return Ok(());
            }

            if landing {
                // Prime next turn's wait status if the landing square gates.
                let wait = board.square_mut(self.position).try_leave(&self.name);
                if wait > 0 {
                    self.status = PlayerStatus::Waiting(wait);
                }
            }
        }

        Ok(())
    }

    /// Apply a signed money delta. Returns false if it bankrupted the player.
    ///
    /// Paying down to exactly zero is survivable; bankruptcy requires the
    /// charge to exceed the available money.
    fn apply(&mut self, delta: i64) -> bool {
        if delta < 0 && i64::from(self.money) < -delta {
            self.money = 0;
            self.alive = false;
            self.status = PlayerStatus::Bankrupt;
            log::debug!("{} went bankrupt", self.name);
            false
        } else {
            self.money = (i64::from(self.money) + delta) as u32;
            true
        }
    }
}
