//! Ordered-list numbering across the six supported nesting depths.

use deltapdf_style::{IndicatorAlphabet, LIST_DEPTHS};

use crate::error::BuildError;

/// Items seen at each depth since the last reset.
///
/// Advancing depth `d` leaves shallower counters alone, increments `d` by one
/// and zeroes every deeper counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCounters {
    levels: [usize; LIST_DEPTHS],
}

impl ListCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_levels(levels: [usize; LIST_DEPTHS]) -> Self {
        Self { levels }
    }

    pub fn levels(&self) -> [usize; LIST_DEPTHS] {
        self.levels
    }

    pub fn reset(&mut self) {
        self.levels = [0; LIST_DEPTHS];
    }

    fn advance(&mut self, depth: usize) {
        self.levels[depth] += 1;
        for deeper in &mut self.levels[depth + 1..] {
            *deeper = 0;
        }
    }

    /// Returns the indicator for the next item at `depth` and advances the counters.
    ///
    /// Fails on depths beyond 5 and once the depth's alphabet is used up; the
    /// counters are unchanged on failure.
    pub fn next_indicator(&mut self, depth: usize) -> Result<String, BuildError> {
        let alphabet =
            IndicatorAlphabet::for_depth(depth).ok_or(BuildError::ListDepthExceeded { depth })?;
        let index = self.levels[depth];
        let indicator = alphabet
            .indicator(index)
            .ok_or(BuildError::IndicatorExhausted { depth, index })?;
        self.advance(depth);
        Ok(indicator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_items_at_top_level() {
        let mut counters = ListCounters::new();
        let got: Vec<String> = (0..3).map(|_| counters.next_indicator(0).unwrap()).collect();
        assert_eq!(got, ["1", "2", "3"]);
    }

    #[test]
    fn advancing_resets_deeper_levels_only() {
        let mut counters = ListCounters::from_levels([3, 2, 2, 5, 2, 1]);
        assert_eq!(counters.next_indicator(2).unwrap(), "iii");
        assert_eq!(counters.levels(), [3, 2, 3, 0, 0, 0]);
    }

    #[test]
    fn letters_at_depth_one() {
        let mut counters = ListCounters::from_levels([2, 1, 0, 0, 0, 0]);
        assert_eq!(counters.next_indicator(1).unwrap(), "b");
        assert_eq!(counters.levels(), [2, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn nested_numbering_restarts_under_new_parent() {
        let mut counters = ListCounters::new();
        assert_eq!(counters.next_indicator(0).unwrap(), "1");
        assert_eq!(counters.next_indicator(1).unwrap(), "a");
        assert_eq!(counters.next_indicator(1).unwrap(), "b");
        assert_eq!(counters.next_indicator(0).unwrap(), "2");
        assert_eq!(counters.next_indicator(1).unwrap(), "a");
        assert_eq!(counters.next_indicator(3).unwrap(), "1");
        assert_eq!(counters.next_indicator(5).unwrap(), "i");
    }

    #[test]
    fn depth_beyond_five_fails() {
        let mut counters = ListCounters::new();
        let err = counters.next_indicator(6).unwrap_err();
        assert!(matches!(err, BuildError::ListDepthExceeded { depth: 6 }));
    }

    #[test]
    fn exhausted_alphabet_fails_without_advancing() {
        let mut counters = ListCounters::from_levels([0, 52, 0, 0, 0, 0]);
        let err = counters.next_indicator(1).unwrap_err();
        assert!(matches!(err, BuildError::IndicatorExhausted { depth: 1, index: 52 }));
        assert_eq!(counters.levels(), [0, 52, 0, 0, 0, 0]);

        let mut counters = ListCounters::from_levels([99, 0, 0, 0, 0, 0]);
        assert_eq!(counters.next_indicator(0).unwrap(), "100");
        assert!(counters.next_indicator(0).is_err());
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut counters = ListCounters::from_levels([1, 2, 3, 4, 5, 6]);
        counters.reset();
        assert_eq!(counters, ListCounters::new());
    }
}
