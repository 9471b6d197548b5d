//! An alignment record.
//!
//! Alignment records hold seven whitespace-delimited integers describing a
//! single aligned fragment:
//!
//! 1. start on the reference,
//! 2. end on the reference,
//! 3. start on the query,
//! 4. end on the query,
//! 5. the number of errors (non-identities plus indels),
//! 6. the number of similarity errors (non-positive match scores; equal to the
//!    number of errors for nucleotide alignments), and
//! 7. the number of stop codons (always zero for nucleotide alignments).
//!
//! Coordinates are 1-based and inclusive, so a coordinate of zero is invalid.
//! A start greater than its end means the fragment aligns to the reverse
//! complement on that axis.

use std::num::ParseIntError;
use std::str::FromStr;

use omics::coordinate::Strand;
use omics::coordinate::position::Number;

use crate::core::Interval;

/// The number of expected fields in an alignment record.
pub const NUM_ALIGNMENT_FIELDS: usize = 7;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to the parsing of an alignment record.
#[derive(Debug)]
pub enum ParseError {
    /// An incorrect number of fields in the alignment line.
    IncorrectNumberOfFields(usize),

    /// An invalid reference start.
    InvalidReferenceStart(ParseIntError),

    /// An invalid reference end.
    InvalidReferenceEnd(ParseIntError),

    /// An invalid query start.
    InvalidQueryStart(ParseIntError),

    /// An invalid query end.
    InvalidQueryEnd(ParseIntError),

    /// An invalid error count.
    InvalidErrors(ParseIntError),

    /// An invalid similarity error count.
    InvalidSimilarityErrors(ParseIntError),

    /// An invalid stop codon count.
    InvalidStopCodons(ParseIntError),

    /// A coordinate of zero, named by the field it was found in.
    ZeroCoordinate(&'static str),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(n) => write!(
                f,
                "invalid number of fields in alignment record: expected \
                 {NUM_ALIGNMENT_FIELDS} fields, found {n} fields"
            ),
            ParseError::InvalidReferenceStart(err) => write!(f, "invalid reference start: {err}"),
            ParseError::InvalidReferenceEnd(err) => write!(f, "invalid reference end: {err}"),
            ParseError::InvalidQueryStart(err) => write!(f, "invalid query start: {err}"),
            ParseError::InvalidQueryEnd(err) => write!(f, "invalid query end: {err}"),
            ParseError::InvalidErrors(err) => write!(f, "invalid error count: {err}"),
            ParseError::InvalidSimilarityErrors(err) => {
                write!(f, "invalid similarity error count: {err}")
            }
            ParseError::InvalidStopCodons(err) => write!(f, "invalid stop codon count: {err}"),
            ParseError::ZeroCoordinate(field) => {
                write!(f, "invalid {field}: coordinates are 1-based")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// An error related to a [`Record`].
#[derive(Debug)]
pub enum Error {
    /// A parse error.
    Parse(ParseError),
}

impl Error {
    /// Returns whether the error was caused by a field that should have held
    /// an integer.
    pub fn is_non_integer(&self) -> bool {
        !matches!(
            self,
            Error::Parse(ParseError::IncorrectNumberOfFields(_) | ParseError::ZeroCoordinate(_))
        )
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "parse error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Record
////////////////////////////////////////////////////////////////////////////////////////

/// An alignment record within a delta file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The start of the fragment on the reference.
    reference_start: Number,

    /// The end of the fragment on the reference.
    reference_end: Number,

    /// The start of the fragment on the query.
    query_start: Number,

    /// The end of the fragment on the query.
    query_end: Number,

    /// The number of non-identities plus indels.
    errors: Number,

    /// The number of non-positive match scores.
    similarity_errors: Number,

    /// The number of stop codons.
    stop_codons: Number,
}

/// An alignment record (an alias for [`Record`]).
pub type AlignmentRecord = Record;

impl Record {
    /// Gets the aligned interval on the reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::core::Interval;
    /// use deltafile::record::alignment;
    ///
    /// let record = "1 10 11 1 5 5 0".parse::<alignment::Record>()?;
    ///
    /// assert_eq!(record.reference_interval(), Interval::new(1, 10));
    /// assert_eq!(record.query_interval(), Interval::new(1, 11));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn reference_interval(&self) -> Interval {
        Interval::new(self.reference_start, self.reference_end)
    }

    /// Gets the aligned interval on the query.
    pub fn query_interval(&self) -> Interval {
        Interval::new(self.query_start, self.query_end)
    }

    /// Gets the number of reference positions within the fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::record::alignment;
    ///
    /// let record = "15 20 30 25 0 0 0".parse::<alignment::Record>()?;
    ///
    /// assert_eq!(record.reference_len(), 6);
    /// assert_eq!(record.query_len(), 6);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn reference_len(&self) -> Number {
        span(self.reference_start, self.reference_end)
    }

    /// Gets the number of query positions within the fragment.
    pub fn query_len(&self) -> Number {
        span(self.query_start, self.query_end)
    }

    /// Gets the strand the fragment aligns to on the reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::record::alignment;
    /// use omics::coordinate::Strand;
    ///
    /// let record = "15 20 30 25 0 0 0".parse::<alignment::Record>()?;
    ///
    /// assert_eq!(record.reference_strand(), Strand::Positive);
    /// assert_eq!(record.query_strand(), Strand::Negative);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn reference_strand(&self) -> Strand {
        strand(self.reference_start, self.reference_end)
    }

    /// Gets the strand the fragment aligns to on the query.
    pub fn query_strand(&self) -> Strand {
        strand(self.query_start, self.query_end)
    }

    /// Gets the number of errors (non-identities plus indels).
    pub fn errors(&self) -> Number {
        self.errors
    }

    /// Gets the number of similarity errors (non-positive match scores).
    pub fn similarity_errors(&self) -> Number {
        self.similarity_errors
    }

    /// Gets the number of stop codons.
    pub fn stop_codons(&self) -> Number {
        self.stop_codons
    }
}

/// Gets the number of positions between two nonzero coordinates, inclusive.
///
/// With both coordinates at least one, this is at most [`Number::MAX`].
fn span(start: Number, end: Number) -> Number {
    start.abs_diff(end) + 1
}

/// Gets the strand implied by the order of two coordinates.
fn strand(start: Number, end: Number) -> Strand {
    if start <= end {
        Strand::Positive
    } else {
        Strand::Negative
    }
}

impl FromStr for Record {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts = s.split_ascii_whitespace().collect::<Vec<_>>();
        if parts.len() != NUM_ALIGNMENT_FIELDS {
            return Err(Error::Parse(ParseError::IncorrectNumberOfFields(
                parts.len(),
            )));
        }

        let field = |i: usize, f: fn(ParseIntError) -> ParseError| {
            parts[i].parse::<Number>().map_err(|err| Error::Parse(f(err)))
        };

        let coordinate =
            |i: usize, f: fn(ParseIntError) -> ParseError, name: &'static str| -> Result<Number> {
                match field(i, f)? {
                    0 => Err(Error::Parse(ParseError::ZeroCoordinate(name))),
                    value => Ok(value),
                }
            };

        Ok(Record {
            reference_start: coordinate(0, ParseError::InvalidReferenceStart, "reference start")?,
            reference_end: coordinate(1, ParseError::InvalidReferenceEnd, "reference end")?,
            query_start: coordinate(2, ParseError::InvalidQueryStart, "query start")?,
            query_end: coordinate(3, ParseError::InvalidQueryEnd, "query end")?,
            errors: field(4, ParseError::InvalidErrors)?,
            similarity_errors: field(5, ParseError::InvalidSimilarityErrors)?,
            stop_codons: field(6, ParseError::InvalidStopCodons)?,
        })
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.reference_start,
            self.reference_end,
            self.query_start,
            self.query_end,
            self.errors,
            self.similarity_errors,
            self.stop_codons
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let record = "1 10 1 11 5 4 0".parse::<Record>().unwrap();

        assert_eq!(record.reference_interval(), Interval::new(1, 10));
        assert_eq!(record.query_interval(), Interval::new(1, 11));
        assert_eq!(record.reference_len(), 10);
        assert_eq!(record.query_len(), 11);
        assert_eq!(record.errors(), 5);
        assert_eq!(record.similarity_errors(), 4);
        assert_eq!(record.stop_codons(), 0);
        assert_eq!(record.reference_strand(), Strand::Positive);
        assert_eq!(record.query_strand(), Strand::Positive);
    }

    #[test]
    fn reverse_complement_spans_match_forward_spans() {
        let forward = "100 200 300 400 0 0 0".parse::<Record>().unwrap();
        let reverse = "200 100 400 300 0 0 0".parse::<Record>().unwrap();

        assert_eq!(forward.reference_len(), reverse.reference_len());
        assert_eq!(forward.query_len(), reverse.query_len());
        assert_eq!(reverse.reference_strand(), Strand::Negative);
        assert_eq!(reverse.query_strand(), Strand::Negative);
    }

    #[test]
    fn single_position_fragment() {
        let record = "7 7 9 9 0 0 0".parse::<Record>().unwrap();
        assert_eq!(record.reference_len(), 1);
        assert_eq!(record.query_len(), 1);
    }

    #[test]
    fn incorrect_number_of_fields() {
        let err = "1 10 1 11 5 5".parse::<Record>().unwrap_err();

        assert!(matches!(
            err,
            Error::Parse(ParseError::IncorrectNumberOfFields(6))
        ));
        assert!(!err.is_non_integer());
        assert_eq!(
            err.to_string(),
            "parse error: invalid number of fields in alignment record: expected 7 fields, \
             found 6 fields"
        );
    }

    #[test]
    fn invalid_fields() {
        let err = "1 x 1 11 5 5 0".parse::<Record>().unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::InvalidReferenceEnd(_))
        ));
        assert!(err.is_non_integer());

        let err = "1 10 1 11 5 5 -1".parse::<Record>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error: invalid stop codon count: invalid digit found in string"
        );
    }

    #[test]
    fn zero_coordinates() {
        let err = "0 10 1 11 5 5 0".parse::<Record>().unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::ZeroCoordinate("reference start"))
        ));
        assert!(!err.is_non_integer());
        assert_eq!(
            err.to_string(),
            "parse error: invalid reference start: coordinates are 1-based"
        );

        let err = "1 10 11 0 5 5 0".parse::<Record>().unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::ZeroCoordinate("query end"))
        ));

        // Counts are not coordinates.
        assert!("1 10 1 11 0 0 0".parse::<Record>().is_ok());
    }

    #[test]
    fn widest_fragment() {
        let record = "1 18446744073709551615 18446744073709551615 1 0 0 0"
            .parse::<Record>()
            .unwrap();

        assert_eq!(record.reference_len(), Number::MAX);
        assert_eq!(record.query_len(), Number::MAX);
        assert_eq!(record.query_strand(), Strand::Negative);
    }

    #[test]
    fn display() {
        let record = "1\t10  1 11 5 5 0".parse::<Record>().unwrap();
        assert_eq!(record.to_string(), "1 10 1 11 5 5 0");
    }
}
