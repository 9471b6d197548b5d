//! Average nucleotide identity.
//!
//! Identity is weighted by the span of each fragment on both axes. A fragment
//! spanning `r` reference positions and `q` query positions with `e` errors
//! contributes `r + q - 2e` weighted identical bases out of `r + q` aligned
//! bases, and the average identity is the ratio of the two sums across all
//! fragments:
//!
//! ```text
//! 1 10 1 11 5 5 0      (10 + 11) - 2 * 5 = 11 of 21
//! 15 20 25 30 0 0 0    (6 + 6) - 2 * 0   = 12 of 12
//!
//! identity = (11 + 12) / (21 + 12) = 0.6969...
//! ```
//!
//! Spans are never merged here: a position covered by several fragments
//! contributes once per fragment.

use omics::coordinate::position::Number;

use crate::accumulator::Accumulate;
use crate::accumulator::Result;
use crate::accumulator::add;
use crate::record::alignment;
use crate::record::header;

/// An accumulator for the average identity across all fragments.
#[derive(Clone, Debug, Default)]
pub struct Accumulator {
    /// The summed spans of every fragment on both axes.
    aligned_bases: Number,

    /// The summed error counts of every fragment.
    errors: Number,
}

impl Accumulator {
    /// Gets the summed spans of every fragment on both axes.
    pub fn aligned_bases(&self) -> Number {
        self.aligned_bases
    }

    /// Gets the summed weighted identical bases of every fragment.
    ///
    /// This is negative only for fragments reporting more errors than half of
    /// their aligned bases.
    pub fn weighted_identical_bases(&self) -> i128 {
        i128::from(self.aligned_bases) - 2 * i128::from(self.errors)
    }

    /// Consumes `self` to produce the average identity.
    ///
    /// Returns [`None`] if no fragments were observed, as the average is
    /// undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::accumulator::Accumulate as _;
    /// use deltafile::accumulator::identity::Accumulator;
    ///
    /// let mut accumulator = Accumulator::default();
    /// assert!(accumulator.clone().finish().is_none());
    ///
    /// let header = ">ref qry 40 40".parse()?;
    /// accumulator.alignment(&header, &"1 10 1 11 5 5 0".parse()?)?;
    /// accumulator.alignment(&header, &"15 20 25 30 0 0 0".parse()?)?;
    ///
    /// let identity = accumulator.finish().unwrap();
    /// assert!((identity - 23.0 / 33.0).abs() < 1e-9);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn finish(self) -> Option<f64> {
        match self.aligned_bases {
            0 => None,
            aligned => Some(self.weighted_identical_bases() as f64 / aligned as f64),
        }
    }
}

impl Accumulate for Accumulator {
    fn alignment(&mut self, _: &header::Record, record: &alignment::Record) -> Result<()> {
        add(&mut self.aligned_bases, record.reference_len(), "aligned bases")?;
        add(&mut self.aligned_bases, record.query_len(), "aligned bases")?;
        add(&mut self.errors, record.errors(), "error count")
    }
}
