//! The files line at the top of a delta file.

use std::str::FromStr;

/// The number of expected fields in a files line.
pub const NUM_FILES_FIELDS: usize = 2;

/// An error associated with parsing a files line.
#[derive(Debug)]
pub enum ParseError {
    /// An incorrect number of fields in the files line.
    IncorrectNumberOfFields(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(n) => write!(
                f,
                "invalid number of fields in files line: expected {NUM_FILES_FIELDS} fields, \
                 found {n} fields"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// The paths to the two sequence files that were aligned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The path to the reference sequence file.
    reference: String,

    /// The path to the query sequence file.
    query: String,
}

/// A files record (an alias for [`Record`]).
pub type FilesRecord = Record;

impl Record {
    /// Gets the path to the reference sequence file.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::record::files;
    ///
    /// let record = "/data/ref.fasta /data/qry.fasta".parse::<files::Record>()?;
    /// assert_eq!(record.reference(), "/data/ref.fasta");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Gets the path to the query sequence file.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::record::files;
    ///
    /// let record = "/data/ref.fasta /data/qry.fasta".parse::<files::Record>()?;
    /// assert_eq!(record.query(), "/data/qry.fasta");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl FromStr for Record {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split_ascii_whitespace().collect::<Vec<_>>();

        match parts[..] {
            [reference, query] => Ok(Self {
                reference: reference.into(),
                query: query.into(),
            }),
            _ => Err(ParseError::IncorrectNumberOfFields(parts.len())),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.reference, self.query)
    }
}
