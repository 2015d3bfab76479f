//! Game orchestration.
//!
//! The game owns the board and the players (turn order is insertion order)
//! and drives rounds until at most one player remains solvent or the round
//! limit is reached, reporting progress to a [`ScoreBoard`].
//!
//! ## Termination
//!
//! Elimination is checked after every single turn, not just at round
//! boundaries, so a game can end mid-round. Winner selection always runs,
//! even when the round limit expires with everyone still solvent: the
//! player with strictly greatest money wins, ties going to whoever was
//! added first.

pub mod error;
pub mod layout;
pub mod scoreboard;

pub use error::{GameError, PlayerCountError};
pub use layout::world_cup_2022;
pub use scoreboard::{LogScoreBoard, NoopScoreBoard, ScoreBoard};

use crate::board::{Board, Die};
use crate::player::Player;

/// Minimum number of players required to start.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players allowed.
pub const MAX_PLAYERS: usize = 11;

/// A configured simulation run.
pub struct Game {
    board: Board,
    players: Vec<Player>,
    scoreboard: Box<dyn ScoreBoard>,
}

impl Game {
    /// Create a game over the given board with a no-op scoreboard.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            players: Vec::new(),
            scoreboard: Box::new(NoopScoreBoard),
        }
    }

    /// Create a game over the canonical World Cup 2022 board.
    #[must_use]
    pub fn world_cup_2022() -> Self {
        Self::new(layout::world_cup_2022())
    }

    /// Add a die to the board.
    pub fn add_die(&mut self, die: Box<dyn Die>) {
        self.board.add_die(die);
    }

    /// Add a player. Turn order is insertion order.
    pub fn add_player(&mut self, name: impl Into<String>) {
        self.players.push(Player::new(name));
    }

    /// Replace the scoreboard sink.
    pub fn set_scoreboard(&mut self, scoreboard: Box<dyn ScoreBoard>) {
        self.scoreboard = scoreboard;
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Run at most `max_rounds` rounds.
    ///
    /// Fails before any round executes (and before any scoreboard event) if
    /// the player count is outside [[`MIN_PLAYERS`], [`MAX_PLAYERS`]] or the
    /// dice count is not exactly two. Ends early as soon as at most one
    /// player remains solvent; reports the winner exactly once either way.
    pub fn play(&mut self, max_rounds: u32) -> Result<(), GameError> {
        let total = self.players.len();
        if total < MIN_PLAYERS {
            return Err(PlayerCountError::TooFew { count: total }.into());
        }
        if total > MAX_PLAYERS {
            return Err(PlayerCountError::TooMany { count: total }.into());
        }
        self.board.check_dice()?;

        let mut dead = self.players.iter().filter(|p| !p.is_alive()).count();

        for round in 0..max_rounds {
            if dead >= total - 1 {
                break;
            }
            self.scoreboard.on_round(round);

            for index in 0..total {
                if !self.players[index].is_alive() {
                    continue;
                }

                self.players[index].play(&mut self.board)?;

                let player = &self.players[index];
                let status = player.status().to_string();
                self.scoreboard.on_turn(
                    player.name(),
                    &status,
                    player.square_name(&self.board),
                    player.money(),
                );

                if !player.is_alive() {
                    dead += 1;
                }
                if dead >= total - 1 {
                    self.report_winner();
                    return Ok(());
                }
            }
        }

        self.report_winner();
        Ok(())
    }

    /// Player with strictly greatest money; earliest-added wins ties.
    fn winner(&self) -> &Player {
        let mut winner = &self.players[0];
        for player in &self.players[1..] {
            if player.money() > winner.money() {
                winner = player;
            }
        }
        winner
    }

    fn report_winner(&mut self) {
        let name = self.winner().name().to_string();
        log::debug!("{} wins", name);
        self.scoreboard.on_win(&name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{DiceError, SeededDie};
    use crate::squares::Square;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Fixed(u16);
    impl Die for Fixed {
        fn roll(&mut self) -> u16 {
            self.0
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl ScoreBoard for Recorder {
        fn on_round(&mut self, round: u32) {
            self.0.borrow_mut().push(format!("round {round}"));
        }
        fn on_turn(&mut self, player: &str, status: &str, square: &str, money: u32) {
            self.0
                .borrow_mut()
                .push(format!("turn {player} {status} {square} {money}"));
        }
        fn on_win(&mut self, player: &str) {
            self.0.borrow_mut().push(format!("win {player}"));
        }
    }

    fn neutral_game(players: usize) -> (Game, Rc<RefCell<Vec<String>>>) {
        let mut game = Game::new(Board::new(vec![
            Square::day_off("a"),
            Square::day_off("b"),
            Square::day_off("c"),
        ]));
        game.add_die(Box::new(Fixed(1)));
        game.add_die(Box::new(Fixed(0)));
        for i in 0..players {
            game.add_player(format!("player {i}"));
        }
        let recorder = Recorder::default();
        let events = Rc::clone(&recorder.0);
        game.set_scoreboard(Box::new(recorder));
        (game, events)
    }

    #[test]
    fn test_too_few_players_rejected_before_any_event() {
        let (mut game, events) = neutral_game(1);

        let result = game.play(10);

        assert_eq!(
            result,
            Err(GameError::PlayerCount(PlayerCountError::TooFew {
                count: 1
            }))
        );
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_too_many_players_rejected() {
        let (mut game, _) = neutral_game(12);
        assert_eq!(
            game.play(10),
            Err(GameError::PlayerCount(PlayerCountError::TooMany {
                count: 12
            }))
        );
    }

    #[test]
    fn test_bad_dice_count_rejected_before_any_event() {
        let mut game = Game::world_cup_2022();
        game.add_die(Box::new(SeededDie::new(1)));
        game.add_player("a");
        game.add_player("b");
        let recorder = Recorder::default();
        let events = Rc::clone(&recorder.0);
        game.set_scoreboard(Box::new(recorder));

        assert_eq!(
            game.play(10),
            Err(GameError::Dice(DiceError::TooFew { count: 1 }))
        );
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_winner_tie_break_goes_to_first_added() {
        let (mut game, events) = neutral_game(3);

        // Day-off squares only: everyone ends on the starting money.
        game.play(4).unwrap();

        assert_eq!(events.borrow().last().unwrap(), "win player 0");
    }

    #[test]
    fn test_zero_rounds_still_reports_a_winner() {
        let (mut game, events) = neutral_game(2);

        game.play(0).unwrap();

        assert_eq!(*events.borrow(), ["win player 0"]);
    }

    #[test]
    fn test_event_ordering() {
        let (mut game, events) = neutral_game(2);

        game.play(2).unwrap();

        assert_eq!(
            *events.borrow(),
            [
                "round 0",
                "turn player 0 in play b 1000",
                "turn player 1 in play b 1000",
                "round 1",
                "turn player 0 in play c 1000",
                "turn player 1 in play c 1000",
                "win player 0",
            ]
        );
    }
}
