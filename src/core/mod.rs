//! Core scoring types: rules, rolls, frames, errors.
//!
//! These are the building blocks the game orchestrates. Rule variants are
//! configured through `RuleSet` rather than by modifying the core.

pub mod error;
pub mod frame;
pub mod roll;
pub mod rules;

pub use error::ScoreError;
pub use frame::{Frame, FrameKind, FramePhase};
pub use roll::{Roll, RollState};
pub use rules::RuleSet;
