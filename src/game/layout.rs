//! The canonical World Cup 2022 board.
//!
//! Fixed game-content data: square names and money constants come straight
//! from the original rules, they are not behavioral logic.

use crate::board::Board;
use crate::squares::Square;

/// The standard 12-square World Cup 2022 board. Dice are added separately.
#[must_use]
pub fn world_cup_2022() -> Board {
    Board::new(vec![
        Square::season_opener("Season opener"),
        Square::friendly_match("Friendly match with San Marino", 160),
        Square::day_off("Day off from training"),
        Square::friendly_match("Friendly match with Liechtenstein", 220),
        Square::yellow_card("Yellow card", 3),
        Square::points_match("Points match with Mexico", 300),
        Square::points_match("Points match with Saudi Arabia", 280),
        Square::bookmaker("Bookmaker", 100, 100),
        Square::points_match("Points match with Argentina", 250),
        Square::goal("Goal", 120),
        Square::final_match("Final match with France", 400),
        Square::penalty_kick("Penalty kick", 180),
    ])
}
