//! Accumulators that reduce a stream of records into statistics.

pub mod identity;
pub mod totals;

use omics::coordinate::position::Number;

use crate::record::alignment;
use crate::record::header;
use crate::record::indel;

/// An error related to accumulating records.
#[derive(Debug)]
pub enum Error {
    /// The named running total no longer fits within a [`Number`].
    Overflow(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Overflow(total) => write!(f, "the {total} overflowed"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// A reduction over the records of a delta file.
///
/// The scanner calls [`Accumulate::alignment()`] once per alignment record, in
/// file order, along with the header of the block the record belongs to.
/// [`Accumulate::indel()`] is then called for each record of the indel run
/// that follows, including the terminating zero.
///
/// An error stops the scan.
pub trait Accumulate {
    /// Observes an alignment record.
    fn alignment(&mut self, header: &header::Record, record: &alignment::Record) -> Result<()>;

    /// Observes an indel record belonging to the most recent alignment record.
    fn indel(&mut self, _record: &indel::Record) -> Result<()> {
        Ok(())
    }
}

impl<A, B> Accumulate for (A, B)
where
    A: Accumulate,
    B: Accumulate,
{
    fn alignment(&mut self, header: &header::Record, record: &alignment::Record) -> Result<()> {
        self.0.alignment(header, record)?;
        self.1.alignment(header, record)
    }

    fn indel(&mut self, record: &indel::Record) -> Result<()> {
        self.0.indel(record)?;
        self.1.indel(record)
    }
}

/// Adds `value` to the running total named `total`.
fn add(sum: &mut Number, value: Number, total: &'static str) -> Result<()> {
    *sum = sum.checked_add(value).ok_or(Error::Overflow(total))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_reports_the_total_that_overflowed() {
        let mut sum = Number::MAX - 1;

        add(&mut sum, 1, "test total").unwrap();
        assert_eq!(sum, Number::MAX);

        let err = add(&mut sum, 1, "test total").unwrap_err();
        assert!(matches!(err, Error::Overflow("test total")));
        assert_eq!(err.to_string(), "the test total overflowed");
        assert_eq!(sum, Number::MAX);
    }
}
