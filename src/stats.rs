//! Alignment statistics for whole delta files.
//!
//! [`parse()`] reports the merged aligned lengths on both axes along with the
//! average identity, which together make up the average nucleotide identity
//! (ANI) of the two aligned genomes. [`parse_with_totals()`] reports the
//! aligned lengths, total alignment length, and error count, reducing the
//! aligned lengths with the [`Strategy`] selected in its [`Options`].
//!
//! Both functions read the file in a single pass and report events to the
//! [`Tracing`] sink. Use [`summarize()`] or [`totals()`] to read from any
//! [`BufRead`] and choose a different [`Sink`].

use std::io::BufRead;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;

use omics::coordinate::position::Number;

use crate::Reader;
use crate::accumulator;
use crate::accumulator::identity;
use crate::accumulator::totals;
use crate::accumulator::totals::Strategy;
use crate::accumulator::totals::Totals;
use crate::error::ErrorKind;
use crate::event::Sink;
use crate::event::Tracing;
use crate::reader;
use crate::scan;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to computing statistics for a delta file.
#[derive(Debug)]
pub enum Error {
    /// The file could not be opened.
    Open(PathBuf, io::Error),

    /// The file could not be scanned.
    Scan(scan::Error),

    /// The totals could not be produced after scanning.
    Accumulate(accumulator::Error),

    /// The file contained no alignment records.
    EmptyAlignmentSet,
}

impl Error {
    /// Gets the [`ErrorKind`] for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::ErrorKind;
    ///
    /// let err = deltafile::parse("does/not/exist.delta").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::FileNotFound);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Open(_, err) if err.kind() == io::ErrorKind::NotFound => {
                ErrorKind::FileNotFound
            }
            Error::Open(_, _) => ErrorKind::Unreadable,
            Error::Scan(err) => err.kind(),
            Error::Accumulate(accumulator::Error::Overflow(_)) => ErrorKind::Overflow,
            Error::EmptyAlignmentSet => ErrorKind::EmptyAlignmentSet,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Open(path, err) => write!(f, "unable to open `{}`: {err}", path.display()),
            Error::Scan(err) => write!(f, "scan error: {err}"),
            Error::Accumulate(err) => write!(f, "accumulator error: {err}"),
            Error::EmptyAlignmentSet => write!(
                f,
                "no alignment records were found, so average identity is undefined"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Options
////////////////////////////////////////////////////////////////////////////////////////

/// Options for [`parse_with_totals()`] and [`totals()`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Options {
    /// The strategy used to reduce aligned lengths.
    strategy: Strategy,
}

impl Options {
    /// Sets whether overlapping fragments are merged before aligned lengths
    /// are summed.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::Options;
    /// use deltafile::accumulator::totals::Strategy;
    ///
    /// assert_eq!(Options::default().strategy(), Strategy::Merge);
    /// assert_eq!(Options::default().use_merge(false).strategy(), Strategy::Naive);
    /// ```
    pub fn use_merge(mut self, value: bool) -> Self {
        self.strategy = match value {
            true => Strategy::Merge,
            false => Strategy::Naive,
        };

        self
    }

    /// Gets the strategy used to reduce aligned lengths.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Summary
////////////////////////////////////////////////////////////////////////////////////////

/// The aligned lengths and average identity for a delta file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// The number of aligned reference positions, with overlaps merged.
    pub reference_aligned_length: Number,

    /// The number of aligned query positions, with overlaps merged.
    pub query_aligned_length: Number,

    /// The average identity across all fragments.
    pub average_identity: f64,
}

impl From<Summary> for (Number, Number, f64) {
    fn from(summary: Summary) -> Self {
        (
            summary.reference_aligned_length,
            summary.query_aligned_length,
            summary.average_identity,
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Entry points
////////////////////////////////////////////////////////////////////////////////////////

/// Computes the [`Summary`] of the delta file at `path`.
///
/// # Examples
///
/// ```no_run
/// let summary = deltafile::parse("genome_1_vs_genome_2.delta")?;
/// println!("ANI: {:.4}", summary.average_identity);
///
/// # Ok::<(), deltafile::stats::Error>(())
/// ```
pub fn parse<P>(path: P) -> Result<Summary>
where
    P: AsRef<Path>,
{
    let mut reader = open(path.as_ref())?;
    summarize(&mut reader, Tracing)
}

/// Computes the [`Totals`] of the delta file at `path`.
///
/// A file without alignment records has all-zero totals.
///
/// # Examples
///
/// ```no_run
/// use deltafile::Options;
///
/// let totals =
///     deltafile::parse_with_totals("genome_1_vs_genome_2.delta", Options::default())?;
/// println!("{}", totals.total_alignment_length);
///
/// # Ok::<(), deltafile::stats::Error>(())
/// ```
pub fn parse_with_totals<P>(path: P, options: Options) -> Result<Totals>
where
    P: AsRef<Path>,
{
    let mut reader = open(path.as_ref())?;
    totals(&mut reader, options, Tracing)
}

/// Computes the [`Summary`] of a delta file from `reader`, reporting events to
/// `sink`.
///
/// # Examples
///
/// ```
/// use deltafile::event::Discard;
/// use deltafile::stats::summarize;
///
/// let data = b"ref.fasta qry.fasta
/// NUCMER
/// >ref_seq_A qry_seq_B 40 40
/// 1 10 1 11 5 5 0
/// -1
/// 0
/// 15 20 25 30 0 0 0
/// 0
/// ";
///
/// let mut reader = deltafile::Reader::new(&data[..]);
/// let summary = summarize(&mut reader, Discard)?;
///
/// assert_eq!(summary.reference_aligned_length, 16);
/// assert_eq!(summary.query_aligned_length, 17);
/// assert!((summary.average_identity - 0.696969696969697).abs() < 1e-9);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn summarize<T, S>(reader: &mut Reader<T>, mut sink: S) -> Result<Summary>
where
    T: BufRead,
    S: Sink,
{
    let mut accumulator = (
        totals::Accumulator::new(Strategy::Merge),
        identity::Accumulator::default(),
    );

    scan::scan(reader, &mut accumulator, &mut sink).map_err(Error::Scan)?;

    let (totals, identity) = accumulator;
    let average_identity = identity.finish().ok_or(Error::EmptyAlignmentSet)?;
    let totals = totals.finish().map_err(Error::Accumulate)?;

    Ok(Summary {
        reference_aligned_length: totals.reference_aligned_length,
        query_aligned_length: totals.query_aligned_length,
        average_identity,
    })
}

/// Computes the [`Totals`] of a delta file from `reader`, reporting events to
/// `sink`.
///
/// # Examples
///
/// ```
/// use deltafile::Options;
/// use deltafile::event::Discard;
/// use deltafile::stats::totals;
///
/// let data = b"NUCMER\n>ref qry 40 40\n1 10 1 11 5 5 0\n-1\n0\n";
///
/// let mut reader = deltafile::Reader::new(&data[..]);
/// let totals = totals(&mut reader, Options::default(), Discard)?;
///
/// assert_eq!(totals.query_aligned_length, 11);
/// assert_eq!(totals.reference_aligned_length, 10);
/// assert_eq!(totals.total_alignment_length, 11);
/// assert_eq!(totals.similarity_errors, 5);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn totals<T, S>(reader: &mut Reader<T>, options: Options, mut sink: S) -> Result<Totals>
where
    T: BufRead,
    S: Sink,
{
    let mut accumulator = totals::Accumulator::new(options.strategy());
    scan::scan(reader, &mut accumulator, &mut sink).map_err(Error::Scan)?;
    accumulator.finish().map_err(Error::Accumulate)
}

/// Opens the delta file at `path`.
fn open(path: &Path) -> Result<Reader<Box<dyn BufRead>>> {
    reader::open(path).map_err(|err| Error::Open(path.to_path_buf(), err))
}
