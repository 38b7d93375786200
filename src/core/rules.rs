//! Game rule configuration.
//!
//! A `RuleSet` is plain data plus two classification predicates. Rule
//! variants (shorter games, different pin counts, different bonus windows)
//! are expressed as alternate configurations built from the standard one -
//! never by subclassing or by modifying the engine.

use serde::{Deserialize, Serialize};

use super::frame::{Frame, FrameKind};

/// Numeric parameters of a bowling variant.
///
/// The defaults describe standard ten-pin bowling. Build variants with the
/// `with_*` methods:
///
/// ```
/// use pinfall::RuleSet;
///
/// // A half-length game: five frames, otherwise standard rules.
/// let short = RuleSet::default().with_frames(5);
/// assert_eq!(short.frames, 5);
/// assert_eq!(short.pins_per_frame, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Number of frames in a game.
    pub frames: u32,

    /// Pins standing on a fresh rack.
    pub pins_per_frame: u32,

    /// Regular rolls allowed per frame.
    pub rolls_per_frame: u32,

    /// Maximum roll count for a full rack to qualify as a strike.
    pub strike_min_rolls: u32,

    /// Bonus rolls awarded to a strike.
    pub strike_bonus_rolls: u32,

    /// Bonus rolls awarded to a spare.
    pub spare_bonus_rolls: u32,

    /// Points scored per fallen pin.
    pub points_per_pin: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            frames: 10,
            pins_per_frame: 10,
            rolls_per_frame: 2,
            strike_min_rolls: 1,
            strike_bonus_rolls: 2,
            spare_bonus_rolls: 1,
            points_per_pin: 1,
        }
    }
}

impl RuleSet {
    /// Set the frame count.
    #[must_use]
    pub fn with_frames(mut self, frames: u32) -> Self {
        assert!(frames > 0, "A game needs at least one frame");
        self.frames = frames;
        self
    }

    /// Set the number of pins on a fresh rack.
    #[must_use]
    pub fn with_pins_per_frame(mut self, pins: u32) -> Self {
        assert!(pins > 0, "A rack needs at least one pin");
        self.pins_per_frame = pins;
        self
    }

    /// Set the regular rolls allowed per frame.
    #[must_use]
    pub fn with_rolls_per_frame(mut self, rolls: u32) -> Self {
        assert!(rolls > 0, "A frame needs at least one roll");
        assert!(
            self.strike_min_rolls <= rolls,
            "strike_min_rolls cannot exceed rolls_per_frame"
        );
        self.rolls_per_frame = rolls;
        self
    }

    /// Set the maximum roll count that still qualifies a full rack as a
    /// strike.
    #[must_use]
    pub fn with_strike_min_rolls(mut self, rolls: u32) -> Self {
        assert!(rolls > 0, "A strike takes at least one roll");
        assert!(
            rolls <= self.rolls_per_frame,
            "strike_min_rolls cannot exceed rolls_per_frame"
        );
        self.strike_min_rolls = rolls;
        self
    }

    /// Set the bonus rolls awarded to a strike.
    #[must_use]
    pub fn with_strike_bonus_rolls(mut self, rolls: u32) -> Self {
        assert!(rolls > 0, "A strike bonus needs at least one roll");
        self.strike_bonus_rolls = rolls;
        self
    }

    /// Set the bonus rolls awarded to a spare.
    #[must_use]
    pub fn with_spare_bonus_rolls(mut self, rolls: u32) -> Self {
        assert!(rolls > 0, "A spare bonus needs at least one roll");
        self.spare_bonus_rolls = rolls;
        self
    }

    /// Set the points scored per fallen pin.
    #[must_use]
    pub fn with_points_per_pin(mut self, points: u32) -> Self {
        assert!(points > 0, "Pins must be worth at least one point");
        self.points_per_pin = points;
        self
    }

    /// Classify a frame from the rolls it holds so far.
    ///
    /// Classification is dynamic: a frame that is `Open` mid-way may close
    /// as a strike or spare once its final roll lands. Bonus rolls on the
    /// last frame never count toward classification.
    #[must_use]
    pub fn classify(&self, frame: &Frame) -> FrameKind {
        let rolls = frame.regular_roll_count() as u32;
        if rolls == 0 || frame.regular_dead_pins() != self.pins_per_frame {
            return FrameKind::Open;
        }
        if rolls <= self.strike_min_rolls {
            FrameKind::Strike
        } else {
            FrameKind::Spare
        }
    }

    /// Did the frame clear the rack within the strike roll limit?
    #[must_use]
    pub fn is_strike(&self, frame: &Frame) -> bool {
        self.classify(frame) == FrameKind::Strike
    }

    /// Did the frame clear the rack, but only after more rolls than a
    /// strike allows?
    #[must_use]
    pub fn is_spare(&self, frame: &Frame) -> bool {
        self.classify(frame) == FrameKind::Spare
    }

    /// Bonus rolls a closed frame is owed.
    #[must_use]
    pub fn bonus_rolls(&self, kind: FrameKind) -> u32 {
        match kind {
            FrameKind::Strike => self.strike_bonus_rolls,
            FrameKind::Spare => self.spare_bonus_rolls,
            FrameKind::Open => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rules() {
        let rules = RuleSet::default();
        assert_eq!(rules.frames, 10);
        assert_eq!(rules.pins_per_frame, 10);
        assert_eq!(rules.rolls_per_frame, 2);
        assert_eq!(rules.strike_min_rolls, 1);
        assert_eq!(rules.strike_bonus_rolls, 2);
        assert_eq!(rules.spare_bonus_rolls, 1);
        assert_eq!(rules.points_per_pin, 1);
    }

    #[test]
    fn test_variant_builder() {
        let rules = RuleSet::default()
            .with_frames(5)
            .with_pins_per_frame(5)
            .with_strike_bonus_rolls(3);

        assert_eq!(rules.frames, 5);
        assert_eq!(rules.pins_per_frame, 5);
        assert_eq!(rules.strike_bonus_rolls, 3);
        // Untouched parameters keep their standard values.
        assert_eq!(rules.spare_bonus_rolls, 1);
    }

    #[test]
    #[should_panic(expected = "at least one frame")]
    fn test_zero_frames_rejected() {
        let _ = RuleSet::default().with_frames(0);
    }

    #[test]
    #[should_panic(expected = "cannot exceed rolls_per_frame")]
    fn test_strike_min_rolls_above_rolls_per_frame() {
        let _ = RuleSet::default().with_strike_min_rolls(3);
    }

    #[test]
    fn test_classify_empty_frame_is_open() {
        let rules = RuleSet::default();
        let frame = Frame::new(0, &rules);
        assert_eq!(rules.classify(&frame), FrameKind::Open);
        assert!(!rules.is_strike(&frame));
        assert!(!rules.is_spare(&frame));
    }

    #[test]
    fn test_classify_strike() {
        let rules = RuleSet::default();
        let mut frame = Frame::new(0, &rules);
        frame.take_roll(0, 10, &rules).unwrap();
        assert!(rules.is_strike(&frame));
        assert!(!rules.is_spare(&frame));
    }

    #[test]
    fn test_classify_spare_by_roll_count() {
        let rules = RuleSet::default();
        let mut frame = Frame::new(0, &rules);
        frame.take_roll(0, 9, &rules).unwrap();
        assert_eq!(rules.classify(&frame), FrameKind::Open);
        frame.take_roll(1, 1, &rules).unwrap();
        assert!(rules.is_spare(&frame));
        assert!(!rules.is_strike(&frame));
    }

    #[test]
    fn test_classify_open_frame() {
        let rules = RuleSet::default();
        let mut frame = Frame::new(0, &rules);
        frame.take_roll(0, 3, &rules).unwrap();
        frame.take_roll(1, 4, &rules).unwrap();
        assert_eq!(rules.classify(&frame), FrameKind::Open);
    }

    #[test]
    fn test_bonus_rolls_per_kind() {
        let rules = RuleSet::default();
        assert_eq!(rules.bonus_rolls(FrameKind::Strike), 2);
        assert_eq!(rules.bonus_rolls(FrameKind::Spare), 1);
        assert_eq!(rules.bonus_rolls(FrameKind::Open), 0);
    }

    #[test]
    fn test_multi_roll_strike_window() {
        // A variant where clearing the rack in up to two rolls still counts
        // as a strike.
        let rules = RuleSet::default()
            .with_rolls_per_frame(3)
            .with_strike_min_rolls(2);

        let mut frame = Frame::new(0, &rules);
        frame.take_roll(0, 6, &rules).unwrap();
        frame.take_roll(1, 4, &rules).unwrap();
        assert!(rules.is_strike(&frame));
    }
}
