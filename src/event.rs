//! Structured events emitted while scanning a delta file.
//!
//! The scanner never logs on its own. Instead, callers hand it a [`Sink`] that
//! receives an [`Event`] for each notable step. [`Tracing`] forwards events to
//! the [`tracing`] facade, while [`Discard`] drops them.

use crate::record::Program;
use crate::record::alignment;
use crate::record::files;
use crate::record::header;

/// A notable step taken while scanning a delta file.
#[derive(Clone, Copy, Debug)]
pub enum Event<'a> {
    /// The files line was read.
    Files(&'a files::Record),

    /// The program line was read.
    Program(Program),

    /// A header record changed the active pair of sequences.
    Header {
        /// The 1-based line number.
        line_no: usize,

        /// The header record.
        record: &'a header::Record,
    },

    /// An alignment record was read.
    Alignment {
        /// The 1-based line number.
        line_no: usize,

        /// The header record the alignment belongs to.
        header: &'a header::Record,

        /// The alignment record.
        record: &'a alignment::Record,
    },

    /// The indel run for the current alignment record was terminated.
    AlignmentClosed {
        /// The 1-based line number of the terminator.
        line_no: usize,

        /// The number of nonzero indel records in the run.
        indels: usize,
    },

    /// The end of the input was reached without error.
    Finished {
        /// The number of lines read.
        lines: usize,

        /// The number of alignment records read.
        alignments: usize,
    },
}

/// A destination for [`Event`]s.
pub trait Sink {
    /// Receives a single event.
    fn event(&mut self, event: Event<'_>);
}

impl<S> Sink for &mut S
where
    S: Sink + ?Sized,
{
    fn event(&mut self, event: Event<'_>) {
        (**self).event(event)
    }
}

/// A [`Sink`] that forwards events to [`tracing`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Tracing;

impl Sink for Tracing {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Files(record) => tracing::debug!(
                reference = record.reference(),
                query = record.query(),
                "read files line"
            ),
            Event::Program(program) => tracing::debug!(%program, "read program line"),
            Event::Header { line_no, record } => tracing::debug!(
                line_no,
                reference = record.reference_sequence().name(),
                query = record.query_sequence().name(),
                "entered alignment block"
            ),
            Event::Alignment {
                line_no, record, ..
            } => tracing::trace!(line_no, %record, "read alignment record"),
            Event::AlignmentClosed { line_no, indels } => {
                tracing::trace!(line_no, indels, "closed alignment")
            }
            Event::Finished { lines, alignments } => {
                tracing::debug!(lines, alignments, "finished reading delta file")
            }
        }
    }
}

/// A [`Sink`] that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl Sink for Discard {
    fn event(&mut self, _: Event<'_>) {}
}
