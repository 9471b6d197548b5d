//! A delta file reader.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::{self};
use std::iter;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::Line;
use crate::line;

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// The extension marking a gzip-compressed file.
const GZIP_EXTENSION: &str = "gz";

/// An error related to a [`Reader`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// A line error.
    Line(line::ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Line(err) => write!(f, "line error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A delta file reader.
#[derive(Clone, Debug)]
pub struct Reader<T>(T)
where
    T: BufRead;

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates a delta file reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"NUCMER\n>ref qry 40 40\n1 10 1 11 5 5 0\n0";
    /// let reader = deltafile::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a reference to the inner reader.
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Gets a mutable reference to the inner reader.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consumes self and returns the inner reader.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Reads a raw, textual line from the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"NUCMER\r\n>ref qry 40 40\n0";
    /// let mut reader = deltafile::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 8);
    /// assert_eq!(buffer, "NUCMER");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 15);
    /// assert_eq!(buffer, ">ref qry 40 40");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 1);
    /// assert_eq!(buffer, "0");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        read_line(self.inner_mut(), buffer)
    }

    /// Attempts to read a [`Line`] from the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use deltafile::Line;
    ///
    /// let data = b"NUCMER\n>ref qry 40 40\n1 10 1 11 5 5 0\n0";
    /// let mut reader = deltafile::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    /// assert!(matches!(reader.read_line(&mut buffer)?, Some(Line::Program(_))));
    /// assert!(matches!(reader.read_line(&mut buffer)?, Some(Line::Header(_))));
    /// assert!(matches!(reader.read_line(&mut buffer)?, Some(Line::Alignment(_))));
    /// assert!(matches!(reader.read_line(&mut buffer)?, Some(Line::Indel(_))));
    /// assert!(reader.read_line(&mut buffer)?.is_none());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_line(&mut self, buffer: &mut String) -> Result<Option<Line>, Error> {
        let read = self.read_line_raw(buffer).map_err(Error::Io)?;

        match read {
            0 => Ok(None),
            _ => {
                let line = buffer.parse::<Line>().map_err(Error::Line)?;
                Ok(Some(line))
            }
        }
    }

    /// Returns an iterator over the `Line`s in the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"NUCMER\n>ref qry 40 40\n1 10 1 11 5 5 0\n0";
    /// let mut reader = deltafile::Reader::new(&data[..]);
    ///
    /// let lines = reader.lines().collect::<Vec<_>>();
    /// assert_eq!(lines.len(), 4);
    /// ```
    pub fn lines(&mut self) -> impl Iterator<Item = io::Result<Line>> + '_ {
        let mut buffer = String::new();

        iter::from_fn(move || {
            buffer.clear();

            match self.read_line_raw(&mut buffer) {
                Ok(0) => None,
                Ok(_) => Some(
                    buffer
                        .parse()
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
                ),
                Err(e) => Some(Err(e)),
            }
        })
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

/// Opens the delta file at `path` for reading.
///
/// Files whose name ends in `.gz` are decompressed as they are read.
pub fn open<P>(path: P) -> io::Result<Reader<Box<dyn BufRead>>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)?;

    let inner: Box<dyn BufRead> = match path.extension().and_then(|ext| ext.to_str()) {
        Some(GZIP_EXTENSION) => Box::new(BufReader::new(GzDecoder::new(file))),
        _ => Box::new(BufReader::new(file)),
    };

    Ok(Reader::new(inner))
}

/// Reads a line from a buffered reader.
///
/// This method is copied almost directly from noodles-gtf.
fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}
