//! A sequence named within a header record.

use std::num::ParseIntError;

use omics::coordinate::position::Number;

/// Errors associated with parsing a sequence.
#[derive(Debug)]
pub enum ParseError {
    /// A missing sequence name.
    MissingName,

    /// An invalid sequence length.
    InvalidLength(ParseIntError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingName => write!(f, "missing sequence name"),
            ParseError::InvalidLength(err) => write!(f, "invalid sequence length: {err}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// An error related to a [`Sequence`].
#[derive(Debug)]
pub enum Error {
    /// A parse error.
    Parse(ParseError),
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

/// One of the two sequences aligned within a block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sequence {
    /// The sequence name.
    name: String,

    /// The sequence length.
    length: Number,
}

impl Sequence {
    /// Attempts to create a new sequence from its textual parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::record::header::Sequence;
    ///
    /// let sequence = Sequence::try_new("seq0", "40")?;
    ///
    /// assert_eq!(sequence.name(), "seq0");
    /// assert_eq!(sequence.length(), 40);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(name: &str, length: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::Parse(ParseError::MissingName));
        }

        Ok(Self {
            name: name.into(),
            length: length
                .parse()
                .map_err(|err| Error::Parse(ParseError::InvalidLength(err)))?,
        })
    }

    /// Gets the sequence name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the sequence length.
    pub fn length(&self) -> Number {
        self.length
    }
}
