//! Aligned regions grouped by sequence name.

use std::collections::HashMap;

use nonempty::NonEmpty;
use omics::coordinate::position::Number;

use crate::core::Interval;
use crate::core::interval;

/// The aligned intervals observed on each sequence.
///
/// A sequence only has an entry once at least one interval has been pushed for
/// it. Intervals are never merged across sequences.
#[derive(Clone, Debug, Default)]
pub struct Regions {
    /// The intervals for each sequence, in the order they were pushed.
    inner: HashMap<String, NonEmpty<Interval>>,
}

impl Regions {
    /// Adds an interval to the sequence named `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::core::Interval;
    /// use deltafile::core::Regions;
    ///
    /// let mut regions = Regions::default();
    /// regions.push("seq0", Interval::new(1, 10));
    /// regions.push("seq0", Interval::new(5, 12));
    /// regions.push("seq1", Interval::new(1, 10));
    ///
    /// assert_eq!(regions.len(), 2);
    /// assert_eq!(regions.get("seq0").map(|intervals| intervals.len()), Some(2));
    /// ```
    pub fn push(&mut self, name: &str, interval: Interval) {
        match self.inner.get_mut(name) {
            Some(intervals) => intervals.push(interval),
            None => {
                self.inner.insert(name.to_string(), NonEmpty::new(interval));
            }
        }
    }

    /// Gets the intervals recorded for a sequence.
    pub fn get(&self, name: &str) -> Option<&NonEmpty<Interval>> {
        self.inner.get(name)
    }

    /// Gets the number of sequences with at least one interval.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns whether no intervals have been recorded.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over each sequence name and its intervals in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NonEmpty<Interval>)> {
        self.inner
            .iter()
            .map(|(name, intervals)| (name.as_str(), intervals))
    }

    /// Gets the number of positions covered on each sequence after merging,
    /// summed across all sequences.
    ///
    /// Returns [`None`] when the sum does not fit within a [`Number`].
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::core::Interval;
    /// use deltafile::core::Regions;
    ///
    /// let mut regions = Regions::default();
    /// regions.push("seq0", Interval::new(1, 10));
    /// regions.push("seq0", Interval::new(8, 20));
    ///
    /// // The same coordinates on a different sequence are not merged.
    /// regions.push("seq1", Interval::new(1, 10));
    ///
    /// assert_eq!(regions.merged_length(), Some(30));
    /// ```
    pub fn merged_length(&self) -> Option<Number> {
        self.inner.values().try_fold(0 as Number, |sum, intervals| {
            sum.checked_add(interval::merged_length(intervals.iter().copied())?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_starts_empty() {
        let regions = Regions::default();

        assert!(regions.is_empty());
        assert_eq!(regions.len(), 0);
        assert_eq!(regions.merged_length(), Some(0));
    }

    #[test]
    fn it_merges_each_sequence_independently() {
        let mut regions = Regions::default();
        regions.push("ref", Interval::new(1, 10));
        regions.push("ref", Interval::new(11, 20));
        regions.push("other", Interval::new(15, 20));
        regions.push("other", Interval::new(20, 15));

        assert_eq!(regions.len(), 2);
        assert_eq!(regions.get("ref").map(|intervals| intervals.len()), Some(2));
        assert_eq!(regions.merged_length(), Some(20 + 6));

        let mut names = regions.iter().map(|(name, _)| name).collect::<Vec<_>>();
        names.sort();
        assert_eq!(names, vec!["other", "ref"]);
    }

    #[test]
    fn sums_that_do_not_fit_are_reported() {
        let mut regions = Regions::default();
        regions.push("seq0", Interval::new(1, Number::MAX));
        assert_eq!(regions.merged_length(), Some(Number::MAX));

        regions.push("seq1", Interval::new(1, 1));
        assert_eq!(regions.merged_length(), None);
    }
}
