//! The kinds of errors that can occur while computing statistics.

/// A category of error.
///
/// Every error produced while reading a delta file falls into exactly one of
/// these categories, regardless of where within the crate it originated.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The file does not exist.
    FileNotFound,

    /// The file exists but could not be read.
    Unreadable,

    /// A line could not be classified or appeared where it is not allowed.
    MalformedRecord,

    /// A field that should hold an integer did not.
    NonIntegerField,

    /// No alignment records were present, so identity is undefined.
    EmptyAlignmentSet,

    /// A length or count grew too large to represent.
    Overflow,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::FileNotFound => write!(f, "file not found"),
            ErrorKind::Unreadable => write!(f, "unreadable"),
            ErrorKind::MalformedRecord => write!(f, "malformed record"),
            ErrorKind::NonIntegerField => write!(f, "non-integer field"),
            ErrorKind::EmptyAlignmentSet => write!(f, "empty alignment set"),
            ErrorKind::Overflow => write!(f, "overflow"),
        }
    }
}
