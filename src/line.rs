//! A line within a delta file.

use std::str::FromStr;

use crate::error::ErrorKind;
use crate::record::Program;
use crate::record::alignment;
use crate::record::alignment::AlignmentRecord;
use crate::record::alignment::NUM_ALIGNMENT_FIELDS;
use crate::record::files;
use crate::record::files::FilesRecord;
use crate::record::files::NUM_FILES_FIELDS;
use crate::record::header;
use crate::record::header::HEADER_PREFIX;
use crate::record::header::HeaderRecord;
use crate::record::indel;
use crate::record::indel::IndelRecord;
use crate::record::indel::NUM_INDEL_FIELDS;

/// An error associated with parsing a line within a delta file.
#[derive(Debug)]
pub enum ParseError {
    /// An invalid files record.
    InvalidFilesRecord(files::ParseError, String),

    /// An invalid header record.
    InvalidHeaderRecord(header::Error, String),

    /// An invalid alignment record.
    InvalidAlignmentRecord(alignment::Error, String),

    /// An invalid indel record.
    InvalidIndelRecord(indel::Error, String),

    /// A line whose number of fields matches no kind of record.
    Unrecognized(usize, String),
}

impl ParseError {
    /// Gets the [`ErrorKind`] for this error.
    pub fn kind(&self) -> ErrorKind {
        let non_integer = match self {
            ParseError::InvalidHeaderRecord(err, _) => err.is_non_integer(),
            ParseError::InvalidAlignmentRecord(err, _) => err.is_non_integer(),
            ParseError::InvalidIndelRecord(err, _) => err.is_non_integer(),
            ParseError::InvalidFilesRecord(_, _) | ParseError::Unrecognized(_, _) => false,
        };

        match non_integer {
            true => ErrorKind::NonIntegerField,
            false => ErrorKind::MalformedRecord,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidFilesRecord(err, line) => {
                write!(f, "invalid files record: {}\n\nline: {}", err, line)
            }
            ParseError::InvalidHeaderRecord(err, line) => {
                write!(f, "invalid header record: {}\n\nline: {}", err, line)
            }
            ParseError::InvalidAlignmentRecord(err, line) => {
                write!(f, "invalid alignment record: {}\n\nline: {}", err, line)
            }
            ParseError::InvalidIndelRecord(err, line) => {
                write!(f, "invalid indel record: {}\n\nline: {}", err, line)
            }
            ParseError::Unrecognized(fields, line) => write!(
                f,
                "unrecognized line: expected {NUM_INDEL_FIELDS}, {NUM_FILES_FIELDS}, or \
                 {NUM_ALIGNMENT_FIELDS} fields, found {fields} fields\n\nline: {line}"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// A line within a delta file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// An empty line.
    Empty,

    /// The files line naming the aligned sequence files.
    Files(FilesRecord),

    /// The program line.
    Program(Program),

    /// A header line naming the sequences for the following alignments.
    Header(HeaderRecord),

    /// An alignment line describing one aligned fragment.
    Alignment(AlignmentRecord),

    /// A single indel within the current fragment, or the terminator.
    Indel(IndelRecord),
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Empty => write!(f, ""),
            Line::Files(record) => write!(f, "{}", record),
            Line::Program(program) => write!(f, "{}", program),
            Line::Header(record) => write!(f, "{}", record),
            Line::Alignment(record) => write!(f, "{}", record),
            Line::Indel(record) => write!(f, "{}", record),
        }
    }
}

impl FromStr for Line {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Ok(Self::Empty);
        }

        if trimmed.starts_with(HEADER_PREFIX) {
            return s
                .parse::<HeaderRecord>()
                .map(Line::Header)
                .map_err(|e| ParseError::InvalidHeaderRecord(e, s.into()));
        }

        match trimmed.split_ascii_whitespace().count() {
            NUM_INDEL_FIELDS => match trimmed.parse::<Program>() {
                Ok(program) => Ok(Line::Program(program)),
                Err(_) => s
                    .parse::<IndelRecord>()
                    .map(Line::Indel)
                    .map_err(|e| ParseError::InvalidIndelRecord(e, s.into())),
            },
            NUM_FILES_FIELDS => s
                .parse::<FilesRecord>()
                .map(Line::Files)
                .map_err(|e| ParseError::InvalidFilesRecord(e, s.into())),
            NUM_ALIGNMENT_FIELDS => s
                .parse::<AlignmentRecord>()
                .map(Line::Alignment)
                .map_err(|e| ParseError::InvalidAlignmentRecord(e, s.into())),
            fields => Err(ParseError::Unrecognized(fields, s.into())),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::record::indel::Kind;

    #[test]
    pub fn test_valid_files_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = "/data/ref.fasta /data/qry.fasta".parse::<Line>()?;
        assert!(matches!(line, Line::Files(_)));
        Ok(())
    }

    #[test]
    pub fn test_valid_program_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = "NUCMER".parse::<Line>()?;
        assert_eq!(line, Line::Program(Program::Nucmer));
        Ok(())
    }

    #[test]
    pub fn test_valid_header_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = ">ref_seq_A qry_seq_B 40 40".parse::<Line>()?;
        assert!(matches!(line, Line::Header(_)));
        Ok(())
    }

    #[test]
    pub fn test_valid_alignment_line() -> Result<(), Box<dyn std::error::Error>> {
        let line = "1 10 1 11 5 5 0".parse::<Line>()?;
        assert!(matches!(line, Line::Alignment(_)));
        Ok(())
    }

    #[test]
    pub fn test_valid_indel_lines() -> Result<(), Box<dyn std::error::Error>> {
        let line = "-1".parse::<Line>()?;
        assert!(matches!(line, Line::Indel(record) if record.kind() == Kind::Deletion));

        let line = "0".parse::<Line>()?;
        assert!(matches!(line, Line::Indel(record) if record.kind() == Kind::Terminator));
        Ok(())
    }

    #[test]
    pub fn test_empty_line() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!("".parse::<Line>()?, Line::Empty);
        assert_eq!("  \t".parse::<Line>()?, Line::Empty);
        Ok(())
    }

    #[test]
    pub fn test_unrecognized_line() {
        let err = "1 10 1 11 5 5".parse::<Line>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRecord);
        assert_eq!(
            err.to_string(),
            "unrecognized line: expected 1, 2, or 7 fields, found 6 fields\n\nline: 1 10 1 11 5 5"
        );
    }

    #[test]
    pub fn test_non_integer_fields() {
        let err = "1 10 1 eleven 5 5 0".parse::<Line>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NonIntegerField);

        let err = "minus-one".parse::<Line>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NonIntegerField);

        let err = ">ref qry forty 40".parse::<Line>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NonIntegerField);
    }

    #[test]
    pub fn test_invalid_header_line() {
        let err = ">ref qry 40".parse::<Line>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRecord);
        assert_eq!(
            err.to_string(),
            "invalid header record: parse error: invalid number of fields in header: expected 4 \
             fields, found 3 fields\n\nline: >ref qry 40"
        );
    }
}
