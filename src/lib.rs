//! # pinfall
//!
//! A rule-configurable bowling scoring engine.
//!
//! ## Design Principles
//!
//! 1. **Configuration Over Convention**: Rule variants (frame counts, pin
//!    counts, bonus windows) are alternate [`RuleSet`] values, constructed
//!    with builders - never subclassed.
//!
//! 2. **Arena Ownership**: The [`Game`] owns its frames, frames own their
//!    rolls, and the chronological roll sequence is an index into that
//!    arena. Bonus look-ahead walks the index; no back-pointers, no
//!    cycles.
//!
//! 3. **Explicit States**: A roll is `Pending` or `Scored`, with a single
//!    validated transition. A frame is a small state machine:
//!    `AwaitingRolls` -> `AwaitingBonus` (closed last frame only) ->
//!    `Resolved`.
//!
//! ## Architecture
//!
//! Play is synchronous and strictly sequential. The game pulls pin counts
//! from an injected [`RollSource`], validates each against the live pins,
//! and aborts immediately on bad input - recorded rolls are never revised.
//! At game end an optional [`Reporter`] receives the per-frame breakdown
//! and final total.
//!
//! ## Modules
//!
//! - `core`: Rules, rolls, frames, errors
//! - `game`: Orchestration, roll sources, per-frame scoring
//! - `report`: Breakdown types and reporting sinks
//!
//! ## Example
//!
//! ```
//! use pinfall::{Game, RuleSet};
//!
//! // Twelve strikes: a perfect game.
//! let mut game = Game::default();
//! let score = game.play_from_list(&[10; 12]).unwrap();
//! assert_eq!(score, 300);
//!
//! // A half-length variant is just different configuration.
//! let mut short = Game::new(RuleSet::default().with_frames(5));
//! assert_eq!(short.play_from_list(&[10; 7]).unwrap(), 150);
//! ```

pub mod core;
pub mod game;
pub mod report;

// Re-export commonly used types
pub use crate::core::{Frame, FrameKind, FramePhase, Roll, RollState, RuleSet, ScoreError};

pub use crate::game::source::{ListSource, RollSource};
pub use crate::game::{FrameScore, Game};

pub use crate::report::{FrameReport, GameReport, LogReporter, Reporter};
