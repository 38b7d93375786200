//! Scoring errors.

use thiserror::Error;

/// Errors raised while a game plays.
///
/// Both kinds abort `play` immediately and no score is produced; recorded
/// rolls are never revised or retried. A frame whose bonus rolls simply
/// have not been played yet is not an error - see
/// [`FrameScore::Incomplete`](crate::game::FrameScore).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// A supplied roll is negative, above the rack size, or above the pins
    /// currently live in its accounting window.
    #[error("invalid roll of {value}: between 0 and {live_pins} pins can fall")]
    InvalidRollValue { value: i64, live_pins: u32 },

    /// The roll source ran out before the frame could play its required
    /// rolls. The frame number is 1-based.
    #[error("not enough rolls to finish frame {frame}")]
    InsufficientRolls { frame: usize },
}
