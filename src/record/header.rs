//! A header record.
//!
//! Header records begin with `>` and name the pair of sequences that all
//! following alignment records refer to, until the next header record.

pub mod sequence;

use std::str::FromStr;

pub use sequence::Sequence;

/// The prefix for a header record.
pub const HEADER_PREFIX: char = '>';

/// The number of expected fields in a header record.
pub const NUM_HEADER_FIELDS: usize = 4;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with parsing a header record.
#[derive(Debug)]
pub enum ParseError {
    /// An incorrect number of fields in the header line.
    IncorrectNumberOfFields(usize),

    /// An invalid prefix.
    InvalidPrefix(String),

    /// An invalid reference sequence.
    InvalidReferenceSequence(sequence::Error),

    /// An invalid query sequence.
    InvalidQuerySequence(sequence::Error),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(fields) => write!(
                f,
                "invalid number of fields in header: expected {} fields, found {} fields",
                NUM_HEADER_FIELDS, fields
            ),
            ParseError::InvalidPrefix(value) => write!(
                f,
                "invalid prefix: expected \"{}\", found \"{}\"",
                HEADER_PREFIX, value
            ),
            ParseError::InvalidReferenceSequence(err) => {
                write!(f, "invalid reference sequence: {}", err)
            }
            ParseError::InvalidQuerySequence(err) => write!(f, "invalid query sequence: {}", err),
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
        matches!(
            self,
            Error::Parse(ParseError::InvalidReferenceSequence(sequence::Error::Parse(
                sequence::ParseError::InvalidLength(_)
            ))) | Error::Parse(ParseError::InvalidQuerySequence(sequence::Error::Parse(
                sequence::ParseError::InvalidLength(_)
            )))
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

/// A header record within a delta file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The reference sequence.
    reference_sequence: Sequence,

    /// The query sequence.
    query_sequence: Sequence,
}

/// A header record (an alias for [`Record`]).
pub type HeaderRecord = Record;

impl Record {
    /// Gets the reference sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::record::header;
    ///
    /// let header = ">ref_seq_A qry_seq_B 40 50".parse::<header::Record>()?;
    ///
    /// assert_eq!(header.reference_sequence().name(), "ref_seq_A");
    /// assert_eq!(header.reference_sequence().length(), 40);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn reference_sequence(&self) -> &Sequence {
        &self.reference_sequence
    }

    /// Gets the query sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::record::header;
    ///
    /// let header = ">ref_seq_A qry_seq_B 40 50".parse::<header::Record>()?;
    ///
    /// assert_eq!(header.query_sequence().name(), "qry_seq_B");
    /// assert_eq!(header.query_sequence().length(), 50);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn query_sequence(&self) -> &Sequence {
        &self.query_sequence
    }
}

impl FromStr for Record {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts = s.split_ascii_whitespace().collect::<Vec<_>>();
        if parts.len() != NUM_HEADER_FIELDS {
            return Err(Error::Parse(ParseError::IncorrectNumberOfFields(
                parts.len(),
            )));
        }

        let reference_name = parts[0]
            .strip_prefix(HEADER_PREFIX)
            .ok_or_else(|| Error::Parse(ParseError::InvalidPrefix(parts[0].into())))?;

        let reference_sequence = Sequence::try_new(reference_name, parts[2])
            .map_err(|err| Error::Parse(ParseError::InvalidReferenceSequence(err)))?;
        let query_sequence = Sequence::try_new(parts[1], parts[3])
            .map_err(|err| Error::Parse(ParseError::InvalidQuerySequence(err)))?;

        Ok(Record {
            reference_sequence,
            query_sequence,
        })
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} {} {} {}",
            HEADER_PREFIX,
            self.reference_sequence.name(),
            self.query_sequence.name(),
            self.reference_sequence.length(),
            self.query_sequence.length()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn parse() {
        let header = ">ref_seq_A qry_seq_B 40 50".parse::<Record>().unwrap();

        assert_eq!(header.reference_sequence().name(), "ref_seq_A");
        assert_eq!(header.reference_sequence().length(), 40);
        assert_eq!(header.query_sequence().name(), "qry_seq_B");
        assert_eq!(header.query_sequence().length(), 50);
    }

    #[test]
    fn incorrect_number_of_fields() {
        let err = ">ref_seq_A qry_seq_B 40".parse::<Record>().unwrap_err();

        assert!(matches!(
            err,
            Error::Parse(ParseError::IncorrectNumberOfFields(3))
        ));
        assert!(!err.is_non_integer());
        assert_eq!(
            err.to_string(),
            "parse error: invalid number of fields in header: expected 4 fields, found 3 fields"
        );
    }

    #[test]
    fn invalid_prefix() {
        let err = "ref_seq_A qry_seq_B 40 50".parse::<Record>().unwrap_err();

        assert!(matches!(err, Error::Parse(ParseError::InvalidPrefix(_))));
        assert_eq!(
            err.to_string(),
            "parse error: invalid prefix: expected \">\", found \"ref_seq_A\""
        );
    }

    #[test]
    fn missing_reference_name() {
        let err = "> qry_seq_B 40 50".parse::<Record>().unwrap_err();

        assert!(!err.is_non_integer());
        assert_eq!(
            err.to_string(),
            "parse error: invalid reference sequence: parse error: missing sequence name"
        );
    }

    #[test]
    fn invalid_reference_length() {
        let err = ">ref_seq_A qry_seq_B ? 50".parse::<Record>().unwrap_err();

        assert!(err.is_non_integer());
        assert_eq!(
            err.to_string(),
            "parse error: invalid reference sequence: parse error: invalid sequence length: \
             invalid digit found in string"
        );
    }

    #[test]
    fn invalid_query_length() {
        let err = ">ref_seq_A qry_seq_B 40 ?".parse::<Record>().unwrap_err();

        assert!(err.is_non_integer());
        assert_eq!(
            err.to_string(),
            "parse error: invalid query sequence: parse error: invalid sequence length: \
             invalid digit found in string"
        );
    }

    #[test]
    pub fn display() {
        let header = ">ref_seq_A\tqry_seq_B  40 50".parse::<Record>().unwrap();
        assert_eq!(header.to_string(), ">ref_seq_A qry_seq_B 40 50");
    }
}
