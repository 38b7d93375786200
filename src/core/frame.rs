//! One frame of play and its state machine.
//!
//! A frame moves through explicit phases instead of an implicit play loop:
//!
//! ```text
//! AwaitingRolls { remaining }
//!     |  strike/spare on any frame but the last
//!     |  or regular rolls exhausted
//!     v
//! Resolved { kind }
//!
//! AwaitingRolls { remaining }
//!     |  strike/spare on the last frame
//!     v
//! AwaitingBonus { kind, remaining, dead_pins }
//!     |  bonus rolls exhausted
//!     v
//! Resolved { kind }
//! ```
//!
//! The game drives the transitions by feeding rolls through `take_roll`
//! and `take_bonus_roll`; the frame owns the rolls and the rack
//! bookkeeping.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::ScoreError;
use super::roll::Roll;
use super::rules::RuleSet;

/// How a frame closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameKind {
    /// Rack cleared within the strike roll limit.
    Strike,
    /// Rack cleared, but over more rolls than a strike allows.
    Spare,
    /// Pins left standing.
    Open,
}

impl std::fmt::Display for FrameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FrameKind::Strike => "Strike",
            FrameKind::Spare => "Spare",
            FrameKind::Open => "Open",
        };
        write!(f, "{name}")
    }
}

/// Progress of a frame through its rolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FramePhase {
    /// Regular rolls are still due.
    AwaitingRolls { remaining: u32 },
    /// The last frame closed as `kind` and is owed bonus rolls.
    ///
    /// `dead_pins` is the running bonus rack: it resets to zero whenever a
    /// bonus roll clears the full rack, otherwise it carries that roll's
    /// pins forward as dead wood.
    AwaitingBonus {
        kind: FrameKind,
        remaining: u32,
        dead_pins: u32,
    },
    /// All rolls (and any bonus rolls) are in.
    Resolved { kind: FrameKind },
}

/// An ordered group of rolls, played as one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    index: usize,
    rolls: SmallVec<[Roll; 4]>,
    phase: FramePhase,
}

impl Frame {
    pub(crate) fn new(index: usize, rules: &RuleSet) -> Self {
        Self {
            index,
            rolls: SmallVec::new(),
            phase: FramePhase::AwaitingRolls {
                remaining: rules.rolls_per_frame,
            },
        }
    }

    /// 0-based position within the game.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current phase of the frame's state machine.
    #[must_use]
    pub const fn phase(&self) -> FramePhase {
        self.phase
    }

    /// The rolls played so far, in play order.
    #[must_use]
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    /// Is this the final frame of the game?
    #[must_use]
    pub fn is_last(&self, rules: &RuleSet) -> bool {
        self.index + 1 == rules.frames as usize
    }

    /// The frame's classification, `None` while regular rolls are due.
    #[must_use]
    pub const fn kind(&self) -> Option<FrameKind> {
        match self.phase {
            FramePhase::AwaitingRolls { .. } => None,
            FramePhase::AwaitingBonus { kind, .. } | FramePhase::Resolved { kind } => Some(kind),
        }
    }

    /// Are regular rolls still due?
    #[must_use]
    pub const fn awaiting_rolls(&self) -> bool {
        matches!(self.phase, FramePhase::AwaitingRolls { .. })
    }

    /// Are bonus rolls still due?
    #[must_use]
    pub const fn awaiting_bonus(&self) -> bool {
        matches!(self.phase, FramePhase::AwaitingBonus { .. })
    }

    /// Has the frame played everything it is owed?
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self.phase, FramePhase::Resolved { .. })
    }

    /// Total rolls played, bonus rolls included.
    #[must_use]
    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    /// Rolls played excluding bonus rolls.
    #[must_use]
    pub fn regular_roll_count(&self) -> usize {
        self.rolls.iter().filter(|roll| !roll.is_extra()).count()
    }

    /// Pins down across every roll in the frame, bonus rolls included.
    ///
    /// This is the raw score of the last frame.
    #[must_use]
    pub fn dead_pins(&self) -> u32 {
        self.rolls.iter().filter_map(Roll::score).sum()
    }

    /// Pins down across regular rolls only.
    ///
    /// This is the count strike/spare classification runs against, and the
    /// base score of every frame but the last.
    #[must_use]
    pub fn regular_dead_pins(&self) -> u32 {
        self.rolls
            .iter()
            .filter(|roll| !roll.is_extra())
            .filter_map(Roll::score)
            .sum()
    }

    /// Chronological index of the frame's most recent roll.
    #[must_use]
    pub fn last_game_index(&self) -> Option<usize> {
        self.rolls.last().map(Roll::game_index)
    }

    /// The recorded pin counts, in play order.
    #[must_use]
    pub fn roll_scores(&self) -> Vec<u32> {
        self.rolls.iter().filter_map(Roll::score).collect()
    }

    /// Play one regular roll into the frame.
    ///
    /// Validates the value against the frame's live pins, records it,
    /// caches strike/spare flags on the roll, and advances the phase:
    /// closing early on a strike or spare, into the bonus phase on a
    /// closed last frame, and to `Resolved` once regular rolls run out.
    pub(crate) fn take_roll(
        &mut self,
        game_index: usize,
        value: i64,
        rules: &RuleSet,
    ) -> Result<(), ScoreError> {
        let FramePhase::AwaitingRolls { remaining } = self.phase else {
            panic!("frame {} is not awaiting regular rolls", self.index + 1);
        };

        let mut roll = Roll::new(game_index, self.rolls.len(), false);
        roll.set_score(value, self.dead_pins(), rules)?;
        self.rolls.push(roll);

        let kind = rules.classify(self);
        if let Some(last) = self.rolls.last_mut() {
            last.mark(kind);
        }

        self.phase = if kind != FrameKind::Open {
            self.closed_phase(kind, rules)
        } else if remaining <= 1 {
            FramePhase::Resolved {
                kind: FrameKind::Open,
            }
        } else {
            FramePhase::AwaitingRolls {
                remaining: remaining - 1,
            }
        };
        Ok(())
    }

    /// Play one bonus roll into a closed last frame.
    ///
    /// Bonus rolls validate against the running bonus rack rather than the
    /// frame's own pins, and never carry strike/spare flags.
    pub(crate) fn take_bonus_roll(
        &mut self,
        game_index: usize,
        value: i64,
        rules: &RuleSet,
    ) -> Result<(), ScoreError> {
        let FramePhase::AwaitingBonus {
            kind,
            remaining,
            dead_pins,
        } = self.phase
        else {
            panic!("frame {} is not awaiting bonus rolls", self.index + 1);
        };

        let mut roll = Roll::new(game_index, self.rolls.len(), true);
        let pins = roll.set_score(value, dead_pins, rules)?;
        self.rolls.push(roll);

        // A cleared rack is reset before the next bonus roll; anything
        // less stays down as dead wood.
        let dead_pins = if pins == rules.pins_per_frame { 0 } else { pins };

        self.phase = if remaining <= 1 {
            FramePhase::Resolved { kind }
        } else {
            FramePhase::AwaitingBonus {
                kind,
                remaining: remaining - 1,
                dead_pins,
            }
        };
        Ok(())
    }

    /// Phase a frame enters once it closes as a strike or spare.
    fn closed_phase(&self, kind: FrameKind, rules: &RuleSet) -> FramePhase {
        if self.is_last(rules) {
            FramePhase::AwaitingBonus {
                kind,
                remaining: rules.bonus_rolls(kind),
                dead_pins: 0,
            }
        } else {
            FramePhase::Resolved { kind }
        }
    }
}
