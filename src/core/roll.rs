//! A single pin-fall event.
//!
//! A roll starts `Pending` and moves to `Scored` exactly once, through a
//! validated transition. Once recorded, a score is never revised - the
//! correctness of look-ahead bonus scoring depends on it.

use serde::{Deserialize, Serialize};

use super::error::ScoreError;
use super::frame::FrameKind;
use super::rules::RuleSet;

/// Score lifecycle of a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollState {
    /// Created, not yet scored.
    Pending,
    /// Scored with a validated pin count.
    Scored(u32),
}

/// One delivery down the lane.
///
/// Rolls are owned by their frame; the game additionally indexes them in
/// chronological order under `game_index` for bonus look-ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    game_index: usize,
    frame_index: usize,
    state: RollState,
    is_extra: bool,
    is_strike: bool,
    is_spare: bool,
}

impl Roll {
    pub(crate) fn new(game_index: usize, frame_index: usize, is_extra: bool) -> Self {
        Self {
            game_index,
            frame_index,
            state: RollState::Pending,
            is_extra,
            is_strike: false,
            is_spare: false,
        }
    }

    /// Position in the game-wide chronological sequence.
    #[must_use]
    pub const fn game_index(&self) -> usize {
        self.game_index
    }

    /// 0-based position within the owning frame.
    #[must_use]
    pub const fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Is this a bonus roll appended after the final regular frame?
    #[must_use]
    pub const fn is_extra(&self) -> bool {
        self.is_extra
    }

    /// Did this roll close its frame as a strike?
    #[must_use]
    pub const fn is_strike(&self) -> bool {
        self.is_strike
    }

    /// Did this roll close its frame as a spare?
    #[must_use]
    pub const fn is_spare(&self) -> bool {
        self.is_spare
    }

    /// The recorded pin count, `None` while pending.
    #[must_use]
    pub const fn score(&self) -> Option<u32> {
        match self.state {
            RollState::Pending => None,
            RollState::Scored(pins) => Some(pins),
        }
    }

    /// Validate `value` against the live pins and record it.
    ///
    /// `dead_pins` is the number of pins already down in the accounting
    /// window this roll plays into - the frame so far for regular rolls,
    /// the running bonus rack for extra rolls.
    ///
    /// Rejects values that are negative, above `pins_per_frame`, or above
    /// the live pins; nothing is recorded on failure. Returns the recorded
    /// pin count on success.
    pub(crate) fn set_score(
        &mut self,
        value: i64,
        dead_pins: u32,
        rules: &RuleSet,
    ) -> Result<u32, ScoreError> {
        assert_eq!(
            self.state,
            RollState::Pending,
            "roll {} has already been scored",
            self.game_index
        );

        let live_pins = rules.pins_per_frame.saturating_sub(dead_pins);
        if value < 0 || value > i64::from(rules.pins_per_frame) || value > i64::from(live_pins) {
            return Err(ScoreError::InvalidRollValue { value, live_pins });
        }

        let pins = value as u32;
        self.state = RollState::Scored(pins);
        Ok(pins)
    }

    /// Cache the owning frame's classification on this roll.
    ///
    /// Called by the frame after each regular roll lands; extra rolls are
    /// never marked.
    pub(crate) fn mark(&mut self, kind: FrameKind) {
        if kind != FrameKind::Open {
            assert!(!self.is_extra, "bonus rolls carry no strike/spare flags");
        }
        match kind {
            FrameKind::Strike => self.is_strike = true,
            FrameKind::Spare => self.is_spare = true,
            FrameKind::Open => {}
        }
    }
}
