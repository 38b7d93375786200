//! Game orchestration: frame-by-frame play, validation, scoring, reporting.
//!
//! ## Ownership
//!
//! The game is the single owner of everything played: frames live in a
//! `Vec<Frame>`, each frame owns its rolls, and the chronological roll
//! sequence is an index of (frame, roll) positions into that arena. Bonus
//! look-ahead walks the index; nothing holds a back-pointer.
//!
//! ## Lifecycle
//!
//! Frames play strictly in order, each pulling rolls from the supplied
//! `RollSource` until its state machine resolves. A validation failure
//! aborts play immediately with no score. Once the last frame lands the
//! game is terminal: the reporter fires, the final score is fixed, and all
//! reads are idempotent.

pub mod source;

use tracing::debug;

use crate::core::error::ScoreError;
use crate::core::frame::{Frame, FrameKind};
use crate::core::roll::Roll;
use crate::core::rules::RuleSet;
use crate::report::{FrameReport, GameReport, Reporter};
use source::{ListSource, RollSource};

/// Result of scoring a single frame.
///
/// `Incomplete` is the expected mid-game state of a closed frame whose
/// bonus window reaches past the rolls played so far. It is not a fault;
/// live scoreboards poll until the window fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameScore {
    /// The frame's score is settled.
    Complete(u32),
    /// Bonus rolls are still outstanding.
    Incomplete,
}

/// Position of a roll within the frames arena.
#[derive(Clone, Copy, Debug)]
struct RollRef {
    frame: usize,
    roll: usize,
}

/// A single game of bowling.
pub struct Game {
    rules: RuleSet,
    frames: Vec<Frame>,
    /// Chronological roll order across all frames.
    roll_refs: Vec<RollRef>,
    reporter: Option<Box<dyn Reporter>>,
    final_score: Option<u32>,
}

impl Default for Game {
    /// A game under standard ten-pin rules, with no reporter.
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl Game {
    /// Create a game under the given rules.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            frames: Vec::new(),
            roll_refs: Vec::new(),
            reporter: None,
            final_score: None,
        }
    }

    /// Create a game that notifies `reporter` as scoring concludes.
    #[must_use]
    pub fn with_reporter(rules: RuleSet, reporter: Box<dyn Reporter>) -> Self {
        let mut game = Self::new(rules);
        game.reporter = Some(reporter);
        game
    }

    /// The rules this game plays under.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The frames played so far, in play order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Look up a roll by its position in the chronological sequence.
    #[must_use]
    pub fn roll(&self, game_index: usize) -> Option<&Roll> {
        let at = self.roll_refs.get(game_index)?;
        Some(&self.frames[at.frame].rolls()[at.roll])
    }

    /// Total rolls played so far, bonus rolls included.
    #[must_use]
    pub fn rolls_played(&self) -> usize {
        self.roll_refs.len()
    }

    /// Have all frames been played?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.frames.len() == self.rules.frames as usize
    }

    /// The final score, `None` while the game is in progress.
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        self.final_score
    }

    /// Play an entire game from a list of pin counts.
    ///
    /// Equivalent to wrapping the slice in a [`ListSource`] and calling
    /// [`play`](Self::play).
    pub fn play_from_list(&mut self, rolls: &[i64]) -> Result<u32, ScoreError> {
        let mut source = ListSource::new(rolls);
        self.play(&mut source)
    }

    /// Play every frame from `source` and return the final score.
    ///
    /// Fails with [`ScoreError::InvalidRollValue`] on a bad pin count and
    /// [`ScoreError::InsufficientRolls`] if the source runs dry; either
    /// way play stops immediately and no score is produced.
    ///
    /// ## Panics
    ///
    /// Panics if any frame has already been played; a game plays once.
    pub fn play(&mut self, source: &mut dyn RollSource) -> Result<u32, ScoreError> {
        assert!(self.frames.is_empty(), "a game plays exactly once");

        while !self.is_complete() {
            self.play_next_frame(source)?;
        }

        let Some(total) = self.final_score else {
            unreachable!("a complete game has a final score");
        };
        Ok(total)
    }

    /// Play the next frame from `source`.
    ///
    /// This is the stepping primitive [`play`](Self::play) loops over,
    /// public so a live scoreboard can interleave play with
    /// [`frame_score`](Self::frame_score) queries. When the last frame
    /// lands, the final score is fixed and the reporter notified.
    ///
    /// ## Panics
    ///
    /// Panics if the game is already complete.
    pub fn play_next_frame(&mut self, source: &mut dyn RollSource) -> Result<(), ScoreError> {
        assert!(
            !self.is_complete(),
            "all {} frames have been played",
            self.rules.frames
        );

        let index = self.frames.len();
        let number = index + 1;
        debug!(frame = number, "playing frame");

        let mut frame = Frame::new(index, &self.rules);
        let mut game_index = self.roll_refs.len();

        while frame.awaiting_rolls() {
            debug!(frame = number, roll = frame.roll_count() + 1, "requesting roll");
            let value = Self::pull(source, number)?;
            frame.take_roll(game_index, value, &self.rules)?;
            game_index += 1;
        }
        while frame.awaiting_bonus() {
            debug!(
                frame = number,
                roll = frame.roll_count() + 1,
                "requesting bonus roll"
            );
            let value = Self::pull(source, number)?;
            frame.take_bonus_roll(game_index, value, &self.rules)?;
            game_index += 1;
        }

        for roll in 0..frame.roll_count() {
            self.roll_refs.push(RollRef { frame: index, roll });
        }
        self.frames.push(frame);

        if self.is_complete() {
            self.finalize();
        }
        Ok(())
    }

    /// Score a single frame, with bonus look-ahead.
    ///
    /// The last frame scores its own pins, bonus rolls included. Any other
    /// closed frame adds the next `strike_bonus_rolls` or
    /// `spare_bonus_rolls` roll scores from the chronological sequence;
    /// while those rolls are outstanding the result is
    /// [`FrameScore::Incomplete`].
    #[must_use]
    pub fn frame_score(&self, index: usize) -> FrameScore {
        let Some(frame) = self.frames.get(index) else {
            return FrameScore::Incomplete;
        };
        let Some(kind) = frame.kind() else {
            return FrameScore::Incomplete;
        };

        if frame.is_last(&self.rules) {
            if !frame.is_resolved() {
                return FrameScore::Incomplete;
            }
            // The last frame folds its bonus rolls into its own pin count.
            return FrameScore::Complete(frame.dead_pins() * self.rules.points_per_pin);
        }

        let (bonus, complete) = self.bonus_pins(frame, self.rules.bonus_rolls(kind));
        if complete {
            FrameScore::Complete((frame.regular_dead_pins() + bonus) * self.rules.points_per_pin)
        } else {
            FrameScore::Incomplete
        }
    }

    /// Per-frame breakdown with the final total.
    ///
    /// `None` until every frame has been played. Reading the report
    /// mutates nothing; repeated calls yield identical results.
    #[must_use]
    pub fn report(&self) -> Option<GameReport> {
        if !self.is_complete() {
            return None;
        }
        Some(self.build_report())
    }

    fn pull(source: &mut dyn RollSource, frame: usize) -> Result<i64, ScoreError> {
        source
            .next_roll()
            .ok_or(ScoreError::InsufficientRolls { frame })
    }

    /// Sum of the next `count` roll scores after `frame`'s last roll.
    ///
    /// The second element is false if the chronological sequence does not
    /// reach that far yet.
    fn bonus_pins(&self, frame: &Frame, count: u32) -> (u32, bool) {
        let Some(last) = frame.last_game_index() else {
            return (0, count == 0);
        };

        let mut pins = 0;
        for offset in 1..=count as usize {
            match self.roll(last + offset).and_then(Roll::score) {
                Some(score) => pins += score,
                None => return (pins, false),
            }
        }
        (pins, true)
    }

    /// Fix the final score and notify the reporter. Runs exactly once,
    /// when the last frame lands.
    fn finalize(&mut self) {
        let report = self.build_report();
        if let Some(reporter) = self.reporter.as_mut() {
            for frame in &report.frames {
                reporter.on_frame(frame);
            }
            reporter.on_game_complete(report.total);
        }
        self.final_score = Some(report.total);
    }

    fn build_report(&self) -> GameReport {
        let mut frames = Vec::with_capacity(self.frames.len());
        let mut total = 0;

        for (index, frame) in self.frames.iter().enumerate() {
            let kind = frame.kind().unwrap_or(FrameKind::Open);
            let score = match self.frame_score(index) {
                FrameScore::Complete(points) => points,
                // A bonus window can outrun the roll sequence when the
                // rules award more bonus rolls than the remaining frames
                // supply. Score the pins that actually fell.
                FrameScore::Incomplete => {
                    let (bonus, _) = self.bonus_pins(frame, self.rules.bonus_rolls(kind));
                    (frame.regular_dead_pins() + bonus) * self.rules.points_per_pin
                }
            };
            total += score;
            frames.push(FrameReport {
                number: index + 1,
                score,
                kind,
                rolls: frame.roll_scores(),
                running_total: total,
            });
        }

        GameReport { frames, total }
    }
}
