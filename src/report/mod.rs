//! Per-frame breakdown and reporting sinks.
//!
//! The game emits structured data; rendering it is the caller's concern.
//! A `Reporter` is an injected observer the game notifies once per frame
//! and once at game completion - there is no process-wide logger state.

use serde::{Deserialize, Serialize};

use crate::core::FrameKind;

/// Scoring summary of a single frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameReport {
    /// 1-based frame number.
    pub number: usize,

    /// The frame's final score, bonus pins included.
    pub score: u32,

    /// How the frame closed.
    pub kind: FrameKind,

    /// Individual roll scores in play order, bonus rolls included.
    pub rolls: Vec<u32>,

    /// Game total up to and including this frame.
    pub running_total: u32,
}

impl FrameReport {
    /// The roll scores joined with commas, e.g. `"9,1"`.
    #[must_use]
    pub fn roll_list(&self) -> String {
        let scores: Vec<String> = self.rolls.iter().map(u32::to_string).collect();
        scores.join(",")
    }
}

impl std::fmt::Display for FrameReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Frame {} score is {} ({}) [{}]",
            self.number,
            self.score,
            self.kind,
            self.roll_list()
        )
    }
}

/// Full end-of-game breakdown.
///
/// The running total of the last frame equals `total`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// One entry per frame, in play order.
    pub frames: Vec<FrameReport>,

    /// Final game score.
    pub total: u32,
}

/// Observer the game notifies as scoring concludes.
///
/// Called once per frame, in order, then once with the final total.
pub trait Reporter {
    /// A frame's score has been settled.
    fn on_frame(&mut self, frame: &FrameReport);

    /// The game is over; `total` is the final score.
    fn on_game_complete(&mut self, total: u32);
}

/// Reporter that emits the breakdown through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn on_frame(&mut self, frame: &FrameReport) {
        tracing::info!(
            frame = frame.number,
            score = frame.score,
            kind = %frame.kind,
            rolls = %frame.roll_list(),
            "frame scored"
        );
    }

    fn on_game_complete(&mut self, total: u32) {
        tracing::info!(total, "final game score");
    }
}
