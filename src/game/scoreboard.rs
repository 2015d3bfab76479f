//! The scoreboard observer.
//!
//! The game reports progress through this seam: one `on_round` before each
//! round's turns, one `on_turn` snapshot after every executed turn, and
//! exactly one `on_win` at game end. Status and square names arrive as
//! already-formatted text; the internal status representation stays an enum
//! up to this boundary.

/// Consumer of game progress events.
pub trait ScoreBoard {
    /// A round is about to start. Round indices are 0-based.
    fn on_round(&mut self, round: u32);

    /// A player's turn finished; the arguments are the post-turn snapshot.
    fn on_turn(&mut self, player: &str, status: &str, square: &str, money: u32);

    /// The game ended; `player` is the winner.
    fn on_win(&mut self, player: &str);
}

/// Scoreboard that ignores every event. The default until one is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopScoreBoard;

impl ScoreBoard for NoopScoreBoard {
    fn on_round(&mut self, _round: u32) {}
    fn on_turn(&mut self, _player: &str, _status: &str, _square: &str, _money: u32) {}
    fn on_win(&mut self, _player: &str) {}
}

/// Scoreboard that forwards events to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogScoreBoard;

impl ScoreBoard for LogScoreBoard {
    fn on_round(&mut self, round: u32) {
        log::info!("round {round}");
    }

    fn on_turn(&mut self, player: &str, status: &str, square: &str, money: u32) {
        log::info!("{player}: {status}, at {square}, {money}");
    }

    fn on_win(&mut self, player: &str) {
        log::info!("{player} wins");
    }
}
