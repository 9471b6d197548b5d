//! A 1-based, fully-closed interval over a single sequence.
//!
//! Delta files report each aligned region as a pair of 1-based, inclusive
//! coordinates. When a fragment aligns to the reverse complement, the start
//! coordinate on that axis is greater than the end coordinate. An [`Interval`]
//! always stores its bounds in ascending order, so both orientations describe
//! the same set of positions.
//!
//! ```text
//! ================ seq0 ===============
//!
//! | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 |
//! -------------------------------------
//! |   |   | X | X | X | X | X |   |   |  <= 3 7
//! |   |   | X | X | X | X | X |   |   |  <= 7 3
//! ```
//!
//! Both rows above become the interval `3-7`, which spans five positions.
//!
//! ## Merging
//!
//! Fragments frequently overlap on a sequence when a region aligns more than
//! once. [`merge()`] collapses a collection of intervals into the minimal set
//! of disjoint intervals covering the same positions, and [`merged_length()`]
//! reports how many positions that set covers. Intervals that merely touch
//! (e.g., `1-10` and `11-20`) are merged as well.

use omics::coordinate::position::Number;

/// A 1-based, fully-closed interval.
///
/// The invariant `low <= high` always holds.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Interval {
    /// The lowest position contained in the interval.
    low: Number,

    /// The highest position contained in the interval.
    high: Number,
}

impl Interval {
    /// Creates a new [`Interval`] from two coordinates in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::core::Interval;
    ///
    /// let forward = Interval::new(3, 7);
    /// let reverse = Interval::new(7, 3);
    ///
    /// assert_eq!(forward, reverse);
    /// assert_eq!(forward.low(), 3);
    /// assert_eq!(forward.high(), 7);
    /// ```
    pub fn new(a: Number, b: Number) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    /// Gets the lowest position within the interval.
    pub fn low(&self) -> Number {
        self.low
    }

    /// Gets the highest position within the interval.
    pub fn high(&self) -> Number {
        self.high
    }

    /// Gets the number of positions covered by the interval.
    ///
    /// Because both bounds are inclusive, this is never zero. Returns [`None`]
    /// when the count does not fit within a [`Number`], which only happens for
    /// an interval covering every position from zero to [`Number::MAX`].
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::core::Interval;
    /// use omics::coordinate::position::Number;
    ///
    /// assert_eq!(Interval::new(1, 10).len(), Some(10));
    /// assert_eq!(Interval::new(30, 25).len(), Some(6));
    /// assert_eq!(Interval::new(4, 4).len(), Some(1));
    /// assert_eq!(Interval::new(0, Number::MAX).len(), None);
    /// ```
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> Option<Number> {
        (self.high - self.low).checked_add(1)
    }

    /// Returns whether `other` shares at least one position with `self` or
    /// begins immediately after `self` ends.
    ///
    /// `other` is assumed to not start before `self`.
    fn reaches(&self, other: &Interval) -> bool {
        other.low <= self.high.saturating_add(1)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Merges a collection of intervals into disjoint, non-adjacent intervals
/// sorted by their lower bound.
///
/// The input may be in any order and may contain duplicate, nested, or
/// overlapping intervals.
///
/// # Examples
///
/// ```
/// use deltafile::core::Interval;
/// use deltafile::core::interval::merge;
///
/// let merged = merge(vec![
///     Interval::new(8, 20),
///     Interval::new(1, 10),
///     Interval::new(25, 30),
/// ]);
///
/// assert_eq!(merged, vec![Interval::new(1, 20), Interval::new(25, 30)]);
/// ```
pub fn merge<I>(intervals: I) -> Vec<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    let mut intervals = intervals.into_iter().collect::<Vec<_>>();
    intervals.sort_unstable_by_key(|interval| interval.low);

    let mut merged = Vec::new();
    let mut intervals = intervals.into_iter();

    let mut current = match intervals.next() {
        Some(interval) => interval,
        None => return merged,
    };

    for next in intervals {
        if current.reaches(&next) {
            current.high = current.high.max(next.high);
        } else {
            merged.push(current);
            current = next;
        }
    }

    merged.push(current);
    merged
}

/// Gets the number of positions covered by a collection of intervals, counting
/// each position once no matter how many intervals contain it.
///
/// An empty collection covers zero positions. Returns [`None`] when the count
/// does not fit within a [`Number`].
///
/// # Examples
///
/// ```
/// use deltafile::core::Interval;
/// use deltafile::core::interval::merged_length;
///
/// // Disjoint.
/// assert_eq!(
///     merged_length([Interval::new(1, 10), Interval::new(15, 20)]),
///     Some(16)
/// );
///
/// // Overlapping.
/// assert_eq!(
///     merged_length([Interval::new(1, 10), Interval::new(8, 20)]),
///     Some(20)
/// );
///
/// // Empty.
/// assert_eq!(merged_length(Vec::new()), Some(0));
/// ```
pub fn merged_length<I>(intervals: I) -> Option<Number>
where
    I: IntoIterator<Item = Interval>,
{
    merge(intervals)
        .iter()
        .try_fold(0 as Number, |sum, interval| sum.checked_add(interval.len()?))
}
