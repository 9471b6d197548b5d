//! The program line of a delta file.

use std::str::FromStr;

/// The literal naming the nucleotide aligner.
pub const NUCMER: &str = "NUCMER";

/// The literal naming the translated (amino acid) aligner.
pub const PROMER: &str = "PROMER";

/// An error associated with parsing a program line.
#[derive(Debug)]
pub enum ParseError {
    /// The line did not name a known program.
    InvalidProgram(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidProgram(value) => write!(
                f,
                "invalid program: expected \"{NUCMER}\" or \"{PROMER}\", found \"{value}\""
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// The program that produced the alignments.
///
/// Only nucleotide semantics are applied when computing statistics. For
/// `PROMER` output this means the similarity error count is treated exactly
/// like the error count, and stop codons are ignored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Program {
    /// Nucleotide alignments from `nucmer`.
    Nucmer,

    /// Translated alignments from `promer`.
    Promer,
}

impl FromStr for Program {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            NUCMER => Ok(Program::Nucmer),
            PROMER => Ok(Program::Promer),
            value => Err(ParseError::InvalidProgram(value.into())),
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Program::Nucmer => write!(f, "{NUCMER}"),
            Program::Promer => write!(f, "{PROMER}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("NUCMER".parse::<Program>().unwrap(), Program::Nucmer);
        assert_eq!("PROMER".parse::<Program>().unwrap(), Program::Promer);

        let err = "nucmer".parse::<Program>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid program: expected \"NUCMER\" or \"PROMER\", found \"nucmer\""
        );
    }
}
