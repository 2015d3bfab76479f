//! Board squares and their effects.
//!
//! A square is a named cell of the cyclic board. Squares are a closed set
//! of variants - the board content is fixed game data, so no open extension
//! point is needed.
//!
//! ## Effect contract
//!
//! Every effect call returns a signed money delta for the acting player:
//!
//! - `stay_on`: applied when a move ends on the square. May mutate square
//!   state (bookmaker rotation, match pot reset).
//! - `go_through`: applied when a move passes over the square. Match squares
//!   accrue their pot here.
//! - `try_leave`: occupancy gate. Zero for every square except yellow cards,
//!   which track a per-player waiting ledger.
//!
//! Effects that depend on affordability receive the player's current money.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

/// Payout scaling for match squares.
///
/// Stored as an enum rather than a float so pot arithmetic stays integral;
/// the multiplier is applied only at payout, never at accrual.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    /// Friendly match: payout x1.0.
    Friendly,
    /// Points match: payout x2.5.
    Points,
    /// Final match: payout x4.0.
    Final,
}

impl Importance {
    /// Multiplier in fixed-point tenths (10 = x1.0).
    #[must_use]
    pub const fn tenths(self) -> u64 {
        match self {
            Importance::Friendly => 10,
            Importance::Points => 25,
            Importance::Final => 40,
        }
    }
}

/// Behavior variant of a square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareKind {
    /// Fixed deltas for landing and passing.
    Simple {
        stay: i64,
        pass: i64,
    },

    /// Deterministic 3-cycle: one win, then two losses, shared across all
    /// players (the counter is global to the square, not per player).
    Bookmaker {
        win: i64,
        lose: i64,
        counter: u8,
    },

    /// Occupancy gate. Landing and passing are free; a player who lands must
    /// sit out the configured number of turns before rolling again.
    YellowCard {
        wait_rounds: u32,
        /// Remaining wait per player name. Instance state - every yellow
        /// card square keeps its own ledger.
        waiting: FxHashMap<String, u32>,
    },

    /// Match square: every pass-through pays a fee into the pot, landing
    /// collects the pot scaled by importance and resets it.
    Match {
        fee: u32,
        importance: Importance,
        pot: u64,
    },
}

/// A named cell of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    name: String,
    kind: SquareKind,
}

impl Square {
    /// Create a square with explicit stay/pass deltas.
    pub fn simple(name: impl Into<String>, stay: i64, pass: i64) -> Self {
        Self {
            name: name.into(),
            kind: SquareKind::Simple { stay, pass },
        }
    }

    /// Season opener: +50 both on landing and passing.
    pub fn season_opener(name: impl Into<String>) -> Self {
        Self::simple(name, 50, 50)
    }

    /// Day off: no effect.
    pub fn day_off(name: impl Into<String>) -> Self {
        Self::simple(name, 0, 0)
    }

    /// Goal: bonus on landing, passing free.
    pub fn goal(name: impl Into<String>, bonus: i64) -> Self {
        Self::simple(name, bonus, 0)
    }

    /// Penalty kick: goalkeeper salary charged on landing, passing free.
    pub fn penalty_kick(name: impl Into<String>, goalkeeper_salary: i64) -> Self {
        Self::simple(name, -goalkeeper_salary, 0)
    }

    /// Bookmaker with the given win/lose stakes.
    pub fn bookmaker(name: impl Into<String>, win: i64, lose: i64) -> Self {
        Self {
            name: name.into(),
            kind: SquareKind::Bookmaker {
                win,
                lose,
                counter: 0,
            },
        }
    }

    /// Yellow card forcing `wait_rounds` turns of waiting after landing.
    pub fn yellow_card(name: impl Into<String>, wait_rounds: u32) -> Self {
        Self {
            name: name.into(),
            kind: SquareKind::YellowCard {
                wait_rounds,
                waiting: FxHashMap::default(),
            },
        }
    }

    /// Friendly match (importance x1.0).
    pub fn friendly_match(name: impl Into<String>, fee: u32) -> Self {
        Self::match_square(name, fee, Importance::Friendly)
    }

    /// Points match (importance x2.5).
    pub fn points_match(name: impl Into<String>, fee: u32) -> Self {
        Self::match_square(name, fee, Importance::Points)
    }

    /// Final match (importance x4.0).
    pub fn final_match(name: impl Into<String>, fee: u32) -> Self {
        Self::match_square(name, fee, Importance::Final)
    }

    /// Match square with explicit importance.
    pub fn match_square(name: impl Into<String>, fee: u32, importance: Importance) -> Self {
        Self {
            name: name.into(),
            kind: SquareKind::Match {
                fee,
                importance,
                pot: 0,
            },
        }
    }

    /// Square name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Behavior variant.
    #[must_use]
    pub fn kind(&self) -> &SquareKind {
        &self.kind
    }

    /// Effect of ending a move on this square.
    ///
    /// `money` is the acting player's current money, consulted by effects
    /// that depend on affordability.
    pub fn stay_on(&mut self, _money: u32) -> i64 {
        match &mut self.kind {
            SquareKind::Simple { stay, .. } => *stay,
            SquareKind::Bookmaker { win, lose, counter } => {
                *counter = (*counter + 1) % 3;
                // First landing of each cycle wins, the next two lose.
                if *counter == 1 {
                    *win
                } else {
                    -*lose
                }
            }
            SquareKind::YellowCard { .. } => 0,
            SquareKind::Match { importance, pot, .. } => {
                let payout = *pot * importance.tenths() / 10;
                *pot = 0;
                payout as i64
            }
        }
    }

    /// Effect of passing over this square without stopping.
    ///
    /// A match square charges the full nominal fee, but the pot accrues at
    /// most what the player could actually pay.
    pub fn go_through(&mut self, money: u32) -> i64 {
        match &mut self.kind {
            SquareKind::Simple { pass, .. } => *pass,
            SquareKind::Bookmaker { .. } => 0,
            SquareKind::YellowCard { .. } => 0,
            SquareKind::Match { fee, pot, .. } => {
                *pot += u64::from((*fee).min(money));
                -i64::from(*fee)
            }
        }
    }

    /// Occupancy gate: rounds the player still has to wait, 0 if free.
    ///
    /// On a yellow card square an unknown player is registered with the full
    /// wait count (and may not act that turn); a registered player is
    /// decremented, the entry removed once it reaches zero.
    pub fn try_leave(&mut self, player: &str) -> u32 {
        match &mut self.kind {
            SquareKind::YellowCard {
                wait_rounds,
                waiting,
            } => match waiting.entry(player.to_string()) {
                Entry::Vacant(entry) => {
                    // A zero-wait card never detains anyone.
                    if *wait_rounds > 0 {
                        entry.insert(*wait_rounds);
                    }
                    *wait_rounds
                }
                Entry::Occupied(mut entry) => {
                    *entry.get_mut() -= 1;
                    let left = *entry.get();
                    if left == 0 {
                        entry.remove();
                    }
                    left
                }
            },
            _ => 0,
        }
    }
}
