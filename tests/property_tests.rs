//! Property tests for the board and bankruptcy invariants.

use proptest::prelude::*;

use worldcup::{Board, Die, Player, PlayerStatus, Square, INITIAL_MONEY};

struct ConstDie(u16);

impl Die for ConstDie {
    fn roll(&mut self) -> u16 {
        self.0
    }
}

fn board_of(len: usize) -> Board {
    Board::new(
        (0..len)
            .map(|i| Square::day_off(format!("square {i}")))
            .collect(),
    )
}

proptest! {
    /// Advancing N times on a board of size N returns to the start square,
    /// from any starting position.
    #[test]
    fn cyclic_advance_returns_to_start(
        (len, start) in (1usize..40).prop_flat_map(|len| (Just(len), 0..len))
    ) {
        let board = board_of(len);

        let mut cursor = start;
        for _ in 0..len {
            cursor = board.advance(cursor);
        }

        prop_assert_eq!(cursor, start);
    }

    /// A charge up to the player's money is paid in full; anything beyond it
    /// bankrupts the player at exactly zero, permanently.
    #[test]
    fn bankruptcy_threshold(cost in 0i64..5000) {
        let mut board = Board::new(vec![
            Square::day_off("start"),
            Square::penalty_kick("penalty", cost),
        ]);
        board.add_die(Box::new(ConstDie(1)));
        board.add_die(Box::new(ConstDie(0)));

        let mut player = Player::new("p");
        player.play(&mut board).unwrap();

        if cost <= i64::from(INITIAL_MONEY) {
            prop_assert!(player.is_alive());
            prop_assert_eq!(i64::from(player.money()), i64::from(INITIAL_MONEY) - cost);
        } else {
            prop_assert!(!player.is_alive());
            prop_assert_eq!(player.money(), 0);
            prop_assert_eq!(player.status(), PlayerStatus::Bankrupt);
        }
    }

    /// The match pot accrues at most what the passing player could pay,
    /// while the full nominal fee is always charged.
    #[test]
    fn match_accrual_is_capped_by_player_money(
        fee in 0u32..3000,
        money in 0u32..3000,
    ) {
        let mut square = Square::friendly_match("match", fee);

        let charged = square.go_through(money);
        prop_assert_eq!(charged, -i64::from(fee));

        let payout = square.stay_on(INITIAL_MONEY);
        prop_assert_eq!(payout, i64::from(fee.min(money)));
    }
}
