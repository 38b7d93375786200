//! Property tests over generated legal roll sequences.

use pinfall::{Game, ScoreError};
use proptest::prelude::*;

/// Build a legal standard-rules game from raw pair material.
///
/// Each pair feeds one frame: the first value is the first roll, the
/// second is clamped to the pins left standing. The last frame draws an
/// extra pair for its bonus rolls when it closes as a strike or spare.
fn legal_rolls(seed: &[(u8, u8)]) -> Vec<i64> {
    let mut feed = seed.iter().copied().chain(std::iter::repeat((4, 3)));
    let mut rolls: Vec<i64> = Vec::new();

    for frame in 0..10 {
        let (a, b) = feed.next().unwrap_or((4, 3));
        let first = i64::from(a.min(10));
        rolls.push(first);

        let mut cleared_in = 0;
        if first == 10 {
            cleared_in = 1;
        } else {
            let second = i64::from(b).min(10 - first);
            rolls.push(second);
            if first + second == 10 {
                cleared_in = 2;
            }
        }

        if frame == 9 && cleared_in > 0 {
            let (c, d) = feed.next().unwrap_or((4, 3));
            let bonus1 = i64::from(c.min(10));
            rolls.push(bonus1);
            if cleared_in == 1 {
                // Strike: a second bonus roll against whatever the first
                // one left standing (fresh rack if it cleared).
                let cap = if bonus1 == 10 { 10 } else { 10 - bonus1 };
                rolls.push(i64::from(d).min(cap));
            }
        }
    }
    rolls
}

proptest! {
    /// The total equals the sum of per-frame scores, every frame score is
    /// bounded by the bonus multiplier, and running totals land on the
    /// final score.
    #[test]
    fn prop_total_is_sum_of_frame_scores(
        seed in proptest::collection::vec((0u8..=10, 0u8..=10), 12..=16)
    ) {
        let rolls = legal_rolls(&seed);
        let mut game = Game::default();
        let total = game.play_from_list(&rolls).unwrap();

        let report = game.report().unwrap();
        prop_assert_eq!(report.total, total);
        prop_assert_eq!(
            report.frames.iter().map(|f| f.score).sum::<u32>(),
            total
        );
        // pins_per_frame * (1 + strike_bonus_rolls)
        for frame in &report.frames {
            prop_assert!(frame.score <= 30);
        }
        prop_assert_eq!(
            report.frames.last().map(|f| f.running_total),
            Some(total)
        );
    }

    /// Completed games read back the same report every time.
    #[test]
    fn prop_report_is_idempotent(
        seed in proptest::collection::vec((0u8..=10, 0u8..=10), 12..=16)
    ) {
        let rolls = legal_rolls(&seed);
        let mut game = Game::default();
        game.play_from_list(&rolls).unwrap();

        let first = game.report().unwrap();
        let second = game.report().unwrap();
        prop_assert_eq!(first, second);
    }

    /// Any sequence containing an oversized roll fails with
    /// `InvalidRollValue` and produces no score.
    #[test]
    fn prop_oversized_roll_rejected(value in 11i64..1000) {
        let mut game = Game::default();
        let err = game.play_from_list(&[value; 21]).unwrap_err();
        prop_assert!(
            matches!(err, ScoreError::InvalidRollValue { .. }),
            "expected InvalidRollValue, got {:?}",
            err
        );
        prop_assert_eq!(game.score(), None);
    }

    /// Truncating a legal game below its required roll count fails with
    /// `InsufficientRolls`.
    #[test]
    fn prop_truncated_game_rejected(
        seed in proptest::collection::vec((0u8..=10, 0u8..=10), 12..=16),
        cut in 1usize..10
    ) {
        let mut rolls = legal_rolls(&seed);
        let keep = rolls.len().saturating_sub(cut);
        rolls.truncate(keep);

        let mut game = Game::default();
        let err = game.play_from_list(&rolls).unwrap_err();
        prop_assert!(
            matches!(err, ScoreError::InsufficientRolls { .. }),
            "expected InsufficientRolls, got {:?}",
            err
        );
        prop_assert_eq!(game.score(), None);
    }
}
