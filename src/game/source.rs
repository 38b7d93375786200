//! Roll input sources.
//!
//! The game pulls pin counts on demand through `RollSource`. Values are
//! `i64` so that out-of-domain input (negative, oversized) reaches the
//! validation layer as data instead of being unrepresentable.

/// Supplies pin counts, one roll at a time.
pub trait RollSource {
    /// The next pin count, or `None` once the source is exhausted.
    ///
    /// Exhaustion mid-frame is translated by the game into
    /// [`ScoreError::InsufficientRolls`](crate::core::ScoreError).
    fn next_roll(&mut self) -> Option<i64>;
}

/// A source over a pre-recorded list of rolls.
#[derive(Clone, Copy, Debug)]
pub struct ListSource<'a> {
    rolls: &'a [i64],
    cursor: usize,
}

impl<'a> ListSource<'a> {
    /// Wrap a slice of pin counts.
    #[must_use]
    pub const fn new(rolls: &'a [i64]) -> Self {
        Self { rolls, cursor: 0 }
    }

    /// Rolls not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.rolls.len() - self.cursor
    }
}

impl RollSource for ListSource<'_> {
    fn next_roll(&mut self) -> Option<i64> {
        let value = self.rolls.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_source_yields_in_order() {
        let rolls = [3, 7, 10];
        let mut source = ListSource::new(&rolls);

        assert_eq!(source.remaining(), 3);
        assert_eq!(source.next_roll(), Some(3));
        assert_eq!(source.next_roll(), Some(7));
        assert_eq!(source.next_roll(), Some(10));
        assert_eq!(source.remaining(), 0);
        assert_eq!(source.next_roll(), None);
        // Stays exhausted.
        assert_eq!(source.next_roll(), None);
    }

    #[test]
    fn test_empty_list_source() {
        let mut source = ListSource::new(&[]);
        assert_eq!(source.next_roll(), None);
    }
}
