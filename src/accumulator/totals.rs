//! Aligned lengths, total alignment length, and error counts.
//!
//! Two strategies are available for the aligned lengths of each axis:
//!
//! - [`Strategy::Naive`] sums the span of every fragment. Positions covered by
//!   more than one fragment are counted once per fragment.
//! - [`Strategy::Merge`] collects the span of every fragment per sequence and
//!   merges overlapping or touching spans before summing, so each aligned
//!   position is counted once.
//!
//! The total alignment length and the error count do not depend on the
//! strategy.
//!
//! ## Total alignment length
//!
//! The total alignment length is the number of alignment columns. For each
//! fragment it starts at the reference span and grows by one for every
//! negative indel (a query base opposite a gap in the reference). Positive
//! indels are not counted: each one is a reference base opposite a gap in the
//! query, which the reference span already includes.
//!
//! ```text
//! reference  ABC.DACBDCAC    span 11
//! query      .BCCDAC.DCAC    indels 1, -3, 4, 0
//!
//! columns = 11 + 1 (one negative indel) = 12
//! ```

use omics::coordinate::position::Number;

use crate::accumulator::Accumulate;
use crate::accumulator::Error;
use crate::accumulator::Result;
use crate::accumulator::add;
use crate::core::Regions;
use crate::record::alignment;
use crate::record::header;
use crate::record::indel;
use crate::record::indel::Kind;

/// How aligned lengths are reduced.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Strategy {
    /// Sum every fragment's span.
    Naive,

    /// Merge overlapping spans on each sequence, then sum.
    #[default]
    Merge,
}

/// The running aligned lengths for a [`Strategy`].
#[derive(Clone, Debug)]
enum Coverage {
    /// Running sums of fragment spans.
    Naive {
        /// The summed reference spans.
        reference: Number,

        /// The summed query spans.
        query: Number,
    },

    /// Fragment spans grouped by sequence.
    Merge {
        /// The reference spans.
        reference: Regions,

        /// The query spans.
        query: Regions,
    },
}

/// The totals for a delta file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Totals {
    /// The number of aligned query positions.
    pub query_aligned_length: Number,

    /// The number of aligned reference positions.
    pub reference_aligned_length: Number,

    /// The number of alignment columns across all fragments.
    pub total_alignment_length: Number,

    /// The summed error counts (non-identities plus indels) across all
    /// fragments.
    pub similarity_errors: Number,
}

impl From<Totals> for (Number, Number, Number, Number) {
    fn from(totals: Totals) -> Self {
        (
            totals.query_aligned_length,
            totals.reference_aligned_length,
            totals.total_alignment_length,
            totals.similarity_errors,
        )
    }
}

/// An accumulator for [`Totals`].
#[derive(Clone, Debug)]
pub struct Accumulator {
    /// The aligned lengths.
    coverage: Coverage,

    /// The running number of alignment columns.
    total_alignment_length: Number,

    /// The running error count.
    similarity_errors: Number,
}

impl Accumulator {
    /// Creates an empty accumulator that reduces aligned lengths with
    /// `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        let coverage = match strategy {
            Strategy::Naive => Coverage::Naive {
                reference: 0,
                query: 0,
            },
            Strategy::Merge => Coverage::Merge {
                reference: Regions::default(),
                query: Regions::default(),
            },
        };

        Self {
            coverage,
            total_alignment_length: 0,
            similarity_errors: 0,
        }
    }

    /// Gets the strategy used to reduce aligned lengths.
    pub fn strategy(&self) -> Strategy {
        match self.coverage {
            Coverage::Naive { .. } => Strategy::Naive,
            Coverage::Merge { .. } => Strategy::Merge,
        }
    }

    /// Consumes `self` to produce the [`Totals`].
    ///
    /// Fails if merged aligned lengths summed across sequences do not fit
    /// within a [`Number`].
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::accumulator::Accumulate as _;
    /// use deltafile::accumulator::totals::Accumulator;
    /// use deltafile::accumulator::totals::Strategy;
    ///
    /// let header = ">ref qry 100 100".parse()?;
    ///
    /// let mut naive = Accumulator::new(Strategy::Naive);
    /// let mut merge = Accumulator::new(Strategy::Merge);
    ///
    /// for record in ["1 10 1 10 0 0 0", "5 20 5 20 0 0 0"] {
    ///     let record = record.parse()?;
    ///     naive.alignment(&header, &record)?;
    ///     merge.alignment(&header, &record)?;
    /// }
    ///
    /// assert_eq!(naive.finish()?.reference_aligned_length, 26);
    /// assert_eq!(merge.finish()?.reference_aligned_length, 20);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn finish(self) -> Result<Totals> {
        let (reference_aligned_length, query_aligned_length) = match self.coverage {
            Coverage::Naive { reference, query } => (reference, query),
            Coverage::Merge { reference, query } => (
                reference
                    .merged_length()
                    .ok_or(Error::Overflow("reference aligned length"))?,
                query
                    .merged_length()
                    .ok_or(Error::Overflow("query aligned length"))?,
            ),
        };

        Ok(Totals {
            query_aligned_length,
            reference_aligned_length,
            total_alignment_length: self.total_alignment_length,
            similarity_errors: self.similarity_errors,
        })
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

impl Accumulate for Accumulator {
    fn alignment(&mut self, header: &header::Record, record: &alignment::Record) -> Result<()> {
        match &mut self.coverage {
            Coverage::Naive { reference, query } => {
                add(reference, record.reference_len(), "reference aligned length")?;
                add(query, record.query_len(), "query aligned length")?;
            }
            Coverage::Merge { reference, query } => {
                reference.push(
                    header.reference_sequence().name(),
                    record.reference_interval(),
                );
                query.push(header.query_sequence().name(), record.query_interval());
            }
        }

        add(
            &mut self.total_alignment_length,
            record.reference_len(),
            "total alignment length",
        )?;
        add(&mut self.similarity_errors, record.errors(), "similarity errors")
    }

    fn indel(&mut self, record: &indel::Record) -> Result<()> {
        match record.kind() {
            Kind::Deletion => add(&mut self.total_alignment_length, 1, "total alignment length"),
            Kind::Insertion | Kind::Terminator => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(s: &str) -> header::Record {
        s.parse().unwrap()
    }

    fn alignment(s: &str) -> alignment::Record {
        s.parse().unwrap()
    }

    fn indel(s: &str) -> indel::Record {
        s.parse().unwrap()
    }

    #[test]
    fn positive_indels_do_not_extend_the_alignment() {
        let header = header(">ref qry 20 20");

        // reference  ABC.DACBDCAC
        // query      .BCCDAC.DCAC
        let mut accumulator = Accumulator::new(Strategy::Naive);
        accumulator
            .alignment(&header, &alignment("1 11 1 10 3 3 0"))
            .unwrap();
        for value in ["1", "-3", "4", "0"] {
            accumulator.indel(&indel(value)).unwrap();
        }

        let totals = accumulator.finish().unwrap();
        assert_eq!(totals.total_alignment_length, 12);
        assert_eq!(totals.reference_aligned_length, 11);
        assert_eq!(totals.query_aligned_length, 10);
        assert_eq!(totals.similarity_errors, 3);
    }

    #[test]
    fn naive_and_merge_agree_without_overlaps() {
        let first = header(">a b 100 100");
        let second = header(">c d 100 100");

        let mut naive = Accumulator::new(Strategy::Naive);
        let mut merge = Accumulator::new(Strategy::Merge);

        for accumulator in [&mut naive, &mut merge] {
            accumulator
                .alignment(&first, &alignment("1 10 1 11 5 5 0"))
                .unwrap();
            accumulator.indel(&indel("-1")).unwrap();
            accumulator.indel(&indel("0")).unwrap();
            accumulator
                .alignment(&second, &alignment("15 20 25 30 0 0 0"))
                .unwrap();
            accumulator.indel(&indel("0")).unwrap();
        }

        assert_eq!(naive.strategy(), Strategy::Naive);
        assert_eq!(merge.strategy(), Strategy::Merge);

        let expected = Totals {
            query_aligned_length: 17,
            reference_aligned_length: 16,
            total_alignment_length: 17,
            similarity_errors: 5,
        };

        assert_eq!(naive.finish().unwrap(), expected);
        assert_eq!(merge.finish().unwrap(), expected);
    }

    #[test]
    fn merge_counts_overlapping_positions_once() {
        let header = header(">a b 100 100");

        let mut naive = Accumulator::new(Strategy::Naive);
        let mut merge = Accumulator::default();

        for accumulator in [&mut naive, &mut merge] {
            // Overlapping on the reference, touching on the query.
            accumulator
                .alignment(&header, &alignment("1 10 1 10 0 0 0"))
                .unwrap();
            accumulator.indel(&indel("0")).unwrap();
            accumulator
                .alignment(&header, &alignment("8 20 11 20 1 1 0"))
                .unwrap();
            accumulator.indel(&indel("0")).unwrap();
        }

        let naive = naive.finish().unwrap();
        let merge = merge.finish().unwrap();

        assert_eq!(naive.reference_aligned_length, 23);
        assert_eq!(merge.reference_aligned_length, 20);
        assert_eq!(naive.query_aligned_length, 20);
        assert_eq!(merge.query_aligned_length, 20);
        assert_eq!(naive.total_alignment_length, merge.total_alignment_length);
        assert_eq!(merge.similarity_errors, 1);
    }

    #[test]
    fn merge_keeps_sequences_apart() {
        let mut merge = Accumulator::new(Strategy::Merge);

        // Identical coordinates on different sequences are not overlaps.
        merge
            .alignment(&header(">a b 100 100"), &alignment("1 10 1 10 0 0 0"))
            .unwrap();
        merge
            .alignment(&header(">c d 100 100"), &alignment("1 10 1 10 0 0 0"))
            .unwrap();

        let totals = merge.finish().unwrap();
        assert_eq!(totals.reference_aligned_length, 20);
        assert_eq!(totals.query_aligned_length, 20);
    }

    #[test]
    fn running_totals_that_do_not_fit_are_reported() {
        let header = header(">a b 100 100");
        let widest = alignment("1 18446744073709551615 1 2 0 0 0");

        // The span of a single fragment fits, but one more column does not.
        let mut accumulator = Accumulator::new(Strategy::Naive);
        accumulator.alignment(&header, &widest).unwrap();
        accumulator.indel(&indel("1")).unwrap();

        let err = accumulator.indel(&indel("-1")).unwrap_err();
        assert!(matches!(err, Error::Overflow("total alignment length")));

        // Summed spans overflow under the naive strategy.
        let mut accumulator = Accumulator::new(Strategy::Naive);
        accumulator.alignment(&header, &widest).unwrap();

        let err = accumulator.alignment(&header, &widest).unwrap_err();
        assert!(matches!(err, Error::Overflow("reference aligned length")));
    }

    #[test]
    fn merged_totals_that_do_not_fit_are_reported() {
        let widest = alignment("1 2 1 18446744073709551615 0 0 0");
        let mut accumulator = Accumulator::new(Strategy::Merge);

        // Overlapping spans on one sequence still fit once merged.
        let first = header(">a b 100 100");
        accumulator.alignment(&first, &widest).unwrap();
        accumulator.indel(&indel("0")).unwrap();
        accumulator
            .alignment(&first, &alignment("3 4 1 10 0 0 0"))
            .unwrap();
        accumulator.indel(&indel("0")).unwrap();

        let totals = accumulator.clone().finish().unwrap();
        assert_eq!(totals.query_aligned_length, Number::MAX);
        assert_eq!(totals.reference_aligned_length, 4);

        // The same span on a second sequence does not.
        let second = header(">a c 100 100");
        accumulator.alignment(&second, &widest).unwrap();
        accumulator.indel(&indel("0")).unwrap();

        let err = accumulator.finish().unwrap_err();
        assert!(matches!(err, Error::Overflow("query aligned length")));
    }

    #[test]
    fn it_converts_into_a_tuple() {
        let totals = Totals {
            query_aligned_length: 1,
            reference_aligned_length: 2,
            total_alignment_length: 3,
            similarity_errors: 4,
        };

        assert_eq!(<(Number, Number, Number, Number)>::from(totals), (1, 2, 3, 4));
    }
}
