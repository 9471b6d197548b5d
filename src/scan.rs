//! Scanning a delta file into an accumulator.
//!
//! The scanner reads every line of a delta file exactly once, in order, and
//! tracks where it is within the file:
//!
//! ```text
//! ref.fasta qry.fasta     <= Preamble
//! NUCMER                  <= Preamble
//! >ref qry 40 40          <= BeforeAlignment
//! 1 10 1 11 5 5 0         <= InAlignment
//! -1                      <= InAlignment
//! 0                       <= BeforeAlignment
//! ```
//!
//! A header line may appear in any state after the preamble. It only changes
//! the pair of sequence names that subsequent alignment records are attributed
//! to: an alignment is closed solely by the zero that terminates its indel run.

use std::io::BufRead;

use crate::Line;
use crate::Reader;
use crate::accumulator;
use crate::accumulator::Accumulate;
use crate::error::ErrorKind;
use crate::event::Event;
use crate::event::Sink;
use crate::reader;
use crate::record::header;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to the structure of a delta file.
#[derive(Debug)]
pub enum ParseError {
    /// The file ended before the indel run of an alignment was terminated.
    AbruptEndInAlignment,

    /// A blank line was found before the indel run of an alignment was
    /// terminated.
    BlankLineInAlignment(usize),

    /// A files or program line was found after the first header line.
    MisplacedPreamble(usize),

    /// An alignment record was found before any header line.
    RecordOutsideBlock(usize),

    /// An alignment record was found before the indel run of the previous
    /// alignment was terminated.
    RecordInAlignment(usize),

    /// An indel record was found outside of an alignment.
    IndelOutsideAlignment(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::AbruptEndInAlignment => write!(
                f,
                "the file abruptly ended before the indel run of an alignment was terminated"
            ),
            ParseError::BlankLineInAlignment(line_no) => {
                write!(f, "found blank line within an alignment: line {line_no}")
            }
            ParseError::MisplacedPreamble(line_no) => write!(
                f,
                "found files or program line after the first header: line {line_no}"
            ),
            ParseError::RecordOutsideBlock(line_no) => write!(
                f,
                "found alignment record before any header: line {line_no}"
            ),
            ParseError::RecordInAlignment(line_no) => write!(
                f,
                "found alignment record before the previous indel run was terminated: line \
                 {line_no}"
            ),
            ParseError::IndelOutsideAlignment(line_no) => {
                write!(f, "found indel record outside of an alignment: line {line_no}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// An error related to scanning a delta file.
#[derive(Debug)]
pub enum Error {
    /// An error reading or parsing a line, along with its 1-based line number.
    Reader(usize, reader::Error),

    /// A parse error.
    Parse(ParseError),

    /// An accumulator rejected a record, along with its 1-based line number.
    Accumulate(usize, accumulator::Error),
}

impl Error {
    /// Gets the [`ErrorKind`] for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Reader(_, reader::Error::Io(_)) => ErrorKind::Unreadable,
            Error::Reader(_, reader::Error::Line(err)) => err.kind(),
            Error::Parse(_) => ErrorKind::MalformedRecord,
            Error::Accumulate(_, accumulator::Error::Overflow(_)) => ErrorKind::Overflow,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Reader(line_no, err) => write!(f, "reader error at line {line_no}: {err}"),
            Error::Parse(err) => write!(f, "parse error: {err}"),
            Error::Accumulate(line_no, err) => {
                write!(f, "accumulator error at line {line_no}: {err}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Scanning
////////////////////////////////////////////////////////////////////////////////////////

/// The state of the scanner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// No header line has been read yet.
    Preamble,

    /// Between alignments, with an active header.
    BeforeAlignment,

    /// Within the indel run of an alignment.
    InAlignment,
}

/// A tally of what was read during a scan.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    /// The number of lines read.
    pub lines: usize,

    /// The number of alignment records read.
    pub alignments: usize,
}

/// Scans every line of `reader`, feeding each alignment and indel record to
/// `accumulator` and reporting progress to `sink`.
///
/// The scan stops at the first error. No partial results are meaningful after
/// an error, so the accumulator should be discarded in that case.
///
/// # Examples
///
/// ```
/// use deltafile::accumulator::totals;
/// use deltafile::event::Discard;
/// use deltafile::scan::scan;
///
/// let data = b"NUCMER\n>ref qry 40 40\n1 10 1 11 5 5 0\n-1\n0\n";
/// let mut reader = deltafile::Reader::new(&data[..]);
///
/// let mut accumulator = totals::Accumulator::new(totals::Strategy::Naive);
/// let tally = scan(&mut reader, &mut accumulator, &mut Discard)?;
///
/// assert_eq!(tally.alignments, 1);
/// assert_eq!(accumulator.finish()?.total_alignment_length, 11);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn scan<T, A, S>(reader: &mut Reader<T>, accumulator: &mut A, sink: &mut S) -> Result<Tally>
where
    T: BufRead,
    A: Accumulate,
    S: Sink,
{
    let mut buffer = String::new();
    let mut state = State::Preamble;
    let mut header: Option<header::Record> = None;
    let mut tally = Tally::default();
    let mut indels = 0;

    loop {
        let line_no = tally.lines + 1;

        let line = match reader
            .read_line(&mut buffer)
            .map_err(|err| Error::Reader(line_no, err))?
        {
            Some(line) => line,
            None => break,
        };

        tally.lines = line_no;
        state = get_state(state, &line, line_no)?;

        match line {
            Line::Empty => {}
            Line::Files(record) => sink.event(Event::Files(&record)),
            Line::Program(program) => sink.event(Event::Program(program)),
            Line::Header(record) => {
                sink.event(Event::Header {
                    line_no,
                    record: &record,
                });
                header = Some(record);
            }
            Line::Alignment(record) => {
                // `get_state()` rejects alignment records in the preamble, and
                // the preamble is only left by reading a header.
                let header = header
                    .as_ref()
                    .unwrap_or_else(|| unreachable!("alignment record without a header"));

                accumulator
                    .alignment(header, &record)
                    .map_err(|err| Error::Accumulate(line_no, err))?;
                tally.alignments += 1;
                indels = 0;

                sink.event(Event::Alignment {
                    line_no,
                    header,
                    record: &record,
                });
            }
            Line::Indel(record) => {
                accumulator
                    .indel(&record)
                    .map_err(|err| Error::Accumulate(line_no, err))?;

                if record.is_terminator() {
                    sink.event(Event::AlignmentClosed { line_no, indels });
                } else {
                    indels += 1;
                }
            }
        }
    }

    if state == State::InAlignment {
        return Err(Error::Parse(ParseError::AbruptEndInAlignment));
    }

    sink.event(Event::Finished {
        lines: tally.lines,
        alignments: tally.alignments,
    });

    Ok(tally)
}

/// Gets the current state given the previous state and the line that was just
/// read in from the [`Reader`].
fn get_state(last: State, line: &Line, line_no: usize) -> Result<State> {
    match (last, line) {
        (State::InAlignment, Line::Empty) => {
            // The indel run must continue until its terminator.
            Err(Error::Parse(ParseError::BlankLineInAlignment(line_no)))
        }
        (state, Line::Empty) => Ok(state),
        (State::Preamble, Line::Files(_) | Line::Program(_)) => Ok(State::Preamble),
        (_, Line::Files(_) | Line::Program(_)) => {
            Err(Error::Parse(ParseError::MisplacedPreamble(line_no)))
        }
        (State::Preamble, Line::Header(_)) => Ok(State::BeforeAlignment),
        (state, Line::Header(_)) => {
            // A header only swaps the active sequence names; it does not close
            // an alignment in progress.
            Ok(state)
        }
        (State::Preamble, Line::Alignment(_)) => {
            Err(Error::Parse(ParseError::RecordOutsideBlock(line_no)))
        }
        (State::BeforeAlignment, Line::Alignment(_)) => Ok(State::InAlignment),
        (State::InAlignment, Line::Alignment(_)) => {
            Err(Error::Parse(ParseError::RecordInAlignment(line_no)))
        }
        (State::InAlignment, Line::Indel(record)) => match record.is_terminator() {
            true => Ok(State::BeforeAlignment),
            false => Ok(State::InAlignment),
        },
        (_, Line::Indel(_)) => Err(Error::Parse(ParseError::IndelOutsideAlignment(line_no))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Discard;
    use crate::record::alignment;
    use crate::record::indel;

    /// Records the sequence of calls made by the scanner.
    #[derive(Debug, Default)]
    struct Calls(Vec<String>);

    impl Accumulate for Calls {
        fn alignment(
            &mut self,
            header: &header::Record,
            record: &alignment::Record,
        ) -> accumulator::Result<()> {
            self.0.push(format!(
                "{}/{}: {}",
                header.reference_sequence().name(),
                header.query_sequence().name(),
                record
            ));

            Ok(())
        }

        fn indel(&mut self, record: &indel::Record) -> accumulator::Result<()> {
            self.0.push(record.to_string());
            Ok(())
        }
    }

    /// Collects a short description of each event.
    #[derive(Debug, Default)]
    struct Events(Vec<String>);

    impl Sink for Events {
        fn event(&mut self, event: Event<'_>) {
            let description = match event {
                Event::Files(_) => String::from("files"),
                Event::Program(program) => program.to_string(),
                Event::Header { line_no, .. } => format!("header@{line_no}"),
                Event::Alignment { line_no, .. } => format!("alignment@{line_no}"),
                Event::AlignmentClosed { line_no, indels } => {
                    format!("closed@{line_no}({indels})")
                }
                Event::Finished { lines, alignments } => format!("finished({lines},{alignments})"),
            };

            self.0.push(description);
        }
    }

    fn run(data: &str) -> Result<(Calls, Events)> {
        let mut reader = Reader::new(data.as_bytes());
        let mut calls = Calls::default();
        let mut events = Events::default();
        scan(&mut reader, &mut calls, &mut events)?;
        Ok((calls, events))
    }

    #[test]
    fn it_attributes_records_to_the_active_header()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let (calls, events) = run(
            "ref.fa qry.fa\nNUCMER\n>a b 40 40\n1 10 1 11 5 5 0\n-1\n0\n\
             >c d 40 40\n15 20 25 30 0 0 0\n0\n",
        )?;

        assert_eq!(
            calls.0,
            vec![
                "a/b: 1 10 1 11 5 5 0",
                "-1",
                "0",
                "c/d: 15 20 25 30 0 0 0",
                "0"
            ]
        );

        assert_eq!(
            events.0,
            vec![
                "files",
                "NUCMER",
                "header@3",
                "alignment@4",
                "closed@6(1)",
                "header@7",
                "alignment@8",
                "closed@9(0)",
                "finished(9,2)"
            ]
        );

        Ok(())
    }

    #[test]
    fn a_header_within_an_alignment_does_not_close_it()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let (calls, _) = run("NUCMER\n>a b 40 40\n1 10 1 11 5 5 0\n>c d 40 40\n0\n")?;
        assert_eq!(calls.0, vec!["a/b: 1 10 1 11 5 5 0", "0"]);

        let err = run("NUCMER\n>a b 40 40\n1 10 1 11 5 5 0\n>c d 40 40\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::AbruptEndInAlignment)
        ));

        Ok(())
    }

    #[test]
    fn the_preamble_is_optional() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let (calls, _) = run(">a b 40 40\n1 10 1 11 5 5 0\n0\n")?;
        assert_eq!(calls.0.len(), 2);
        Ok(())
    }

    #[test]
    fn blank_lines_are_ignored_between_alignments()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let (calls, _) = run("NUCMER\n\n>a b 40 40\n\n1 10 1 11 5 5 0\n0\n\n")?;
        assert_eq!(calls.0.len(), 2);
        Ok(())
    }

    #[test]
    fn it_rejects_misplaced_lines() {
        let cases = [
            ("NUCMER\n>a b 40 40\n1 10 1 11 5 5 0\n\n0\n", "blank line"),
            ("NUCMER\n>a b 40 40\nNUCMER\n", "program line"),
            ("NUCMER\n1 10 1 11 5 5 0\n0\n", "record before header"),
            ("NUCMER\n>a b 40 40\n1 10 1 11 5 5 0\n1 10 1 11 5 5 0\n0\n", "record in alignment"),
            ("NUCMER\n>a b 40 40\n-1\n", "indel outside alignment"),
            ("NUCMER\n>a b 40 40\n1 10 1 11 5 5 0\n0\n0\n", "second terminator"),
        ];

        for (data, description) in cases {
            let err = run(data).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedRecord, "{description}");
        }
    }

    #[test]
    fn it_reports_the_line_of_a_bad_record() {
        let err = run("NUCMER\n>a b 40 40\n1 10 1 11 5 5\n0\n").unwrap_err();

        assert!(matches!(err, Error::Reader(3, _)));
        assert_eq!(err.kind(), ErrorKind::MalformedRecord);

        let err = run("NUCMER\n>a b 40 40\n1 10 1 11 x 5 0\n0\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NonIntegerField);
    }

    #[test]
    fn it_reports_the_line_of_a_rejected_record() {
        let mut reader = Reader::new(
            &b"NUCMER\n>a b 40 40\n1 18446744073709551615 1 2 0 0 0\n1\n-1\n0\n"[..],
        );

        let mut accumulator = crate::accumulator::totals::Accumulator::default();
        let err = scan(&mut reader, &mut accumulator, &mut Discard).unwrap_err();

        assert!(matches!(err, Error::Accumulate(5, _)));
        assert_eq!(err.kind(), ErrorKind::Overflow);
        assert_eq!(
            err.to_string(),
            "accumulator error at line 5: the total alignment length overflowed"
        );
    }

    #[test]
    fn it_reports_the_number_of_lines_and_alignments()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut reader = Reader::new(&b"NUCMER\n"[..]);
        let tally = scan(&mut reader, &mut Calls::default(), &mut Discard)?;

        assert_eq!(
            tally,
            Tally {
                lines: 1,
                alignments: 0
            }
        );

        Ok(())
    }
}
