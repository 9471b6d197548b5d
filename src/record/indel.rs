//! An indel record.
//!
//! Each alignment record is followed by a run of single-integer lines that
//! locate the indels within the fragment, terminated by a `0`. The magnitude of
//! a value is the distance to the next indel. A positive value marks an
//! insertion in the reference (a reference base aligned to a gap in the
//! query), and a negative value marks a deletion in the reference (a query
//! base aligned to a gap in the reference).

use std::num::ParseIntError;
use std::str::FromStr;

/// The number of expected fields in an indel record.
pub const NUM_INDEL_FIELDS: usize = 1;

/// An error related to the parsing of an indel record.
#[derive(Debug)]
pub enum ParseError {
    /// An incorrect number of fields in the indel line.
    IncorrectNumberOfFields(usize),

    /// An invalid offset.
    InvalidOffset(ParseIntError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(n) => write!(
                f,
                "invalid number of fields in indel record: expected {NUM_INDEL_FIELDS} field, \
                 found {n} fields"
            ),
            ParseError::InvalidOffset(err) => write!(f, "invalid offset: {err}"),
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
        matches!(self, Error::Parse(ParseError::InvalidOffset(_)))
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

/// The kind of an indel record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// An insertion in the reference (a positive value).
    Insertion,

    /// A deletion in the reference, i.e. an insertion in the query (a negative
    /// value).
    Deletion,

    /// The end of the indel run for the current alignment record (a zero).
    Terminator,
}

/// An indel record within a delta file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Record(i64);

/// An indel record (an alias for [`Record`]).
pub type IndelRecord = Record;

impl Record {
    /// Gets the signed offset to the indel.
    pub fn offset(&self) -> i64 {
        self.0
    }

    /// Gets the kind of the record.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::record::indel;
    /// use deltafile::record::indel::Kind;
    ///
    /// assert_eq!("4".parse::<indel::Record>()?.kind(), Kind::Insertion);
    /// assert_eq!("-3".parse::<indel::Record>()?.kind(), Kind::Deletion);
    /// assert_eq!("0".parse::<indel::Record>()?.kind(), Kind::Terminator);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn kind(&self) -> Kind {
        match self.0 {
            0 => Kind::Terminator,
            n if n > 0 => Kind::Insertion,
            _ => Kind::Deletion,
        }
    }

    /// Returns whether this record ends the indel run.
    pub fn is_terminator(&self) -> bool {
        self.kind() == Kind::Terminator
    }
}

impl FromStr for Record {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split_ascii_whitespace().collect::<Vec<_>>();

        match parts[..] {
            [offset] => offset
                .parse()
                .map(Record)
                .map_err(|err| Error::Parse(ParseError::InvalidOffset(err))),
            _ => Err(Error::Parse(ParseError::IncorrectNumberOfFields(
                parts.len(),
            ))),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let record = "-12".parse::<Record>().unwrap();
        assert_eq!(record.offset(), -12);
        assert_eq!(record.kind(), Kind::Deletion);
        assert!(!record.is_terminator());

        let record = "0".parse::<Record>().unwrap();
        assert!(record.is_terminator());
    }

    #[test]
    fn invalid_offset() {
        let err = "1.5".parse::<Record>().unwrap_err();
        assert!(err.is_non_integer());
        assert_eq!(
            err.to_string(),
            "parse error: invalid offset: invalid digit found in string"
        );
    }

    #[test]
    fn incorrect_number_of_fields() {
        let err = "1 2 3".parse::<Record>().unwrap_err();
        assert!(!err.is_non_integer());
        assert_eq!(
            err.to_string(),
            "parse error: invalid number of fields in indel record: expected 1 field, found 3 \
             fields"
        );
    }
}
