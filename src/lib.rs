//! `deltafile` is a crate for reading MUMmer delta files and computing the
//! statistics needed to estimate average nucleotide identity (ANI).
//!
//! A delta file describes the alignments between a reference genome and a
//! query genome. Each alignment block is introduced by a header naming one
//! reference sequence and one query sequence and is followed by any number of
//! alignment records. Every alignment record is, in turn, followed by a run of
//! indel offsets closed by a `0`.
//!
//! The crate provides two main points of entry:
//!
//! - Computing statistics for a whole delta file via [`parse()`] and
//!   [`parse_with_totals()`].
//! - Parsing and reading delta files directly via the [`Reader`] facility.
//!
//! ## Statistics
//!
//! Most users will want the merged aligned lengths on each axis alongside the
//! average identity of all alignment records. This is what [`parse()`]
//! provides. Overlapping alignments on the same sequence are merged before
//! their lengths are summed, so no aligned position is counted twice.
//!
//! ```no_run
//! let (reference, query, identity) = deltafile::parse("genome.delta")?.into();
//! println!("{reference}\t{query}\t{identity:.4}");
//!
//! # Ok::<(), deltafile::stats::Error>(())
//! ```
//!
//! Alternatively, [`parse_with_totals()`] reports the aligned lengths along
//! with the total alignment length (including deletions) and the number of
//! similarity errors. The reduction of aligned lengths is selected by the
//! [`Options`] that are passed in.
//!
//! Both functions accept gzip-compressed files (detected by a `.gz`
//! extension) and emit [`tracing`] events as they read. To read from any
//! other source or to handle events differently, use [`stats::summarize()`]
//! and [`stats::totals()`] with an [`event::Sink`] of your choosing.
//!
//! ```
//! use deltafile::Options;
//! use deltafile::event::Discard;
//!
//! let data = b"ref.fasta qry.fasta
//! NUCMER
//! >ref_seq_A qry_seq_B 40 40
//! 1 10 1 11 5 5 0
//! -1
//! 0
//! >ref_seq_C qry_seq_D 40 40
//! 15 20 25 30 0 0 0
//! 0
//! ";
//!
//! let mut reader = deltafile::Reader::new(&data[..]);
//! let totals = deltafile::stats::totals(&mut reader, Options::default(), Discard)?;
//!
//! assert_eq!(totals.reference_aligned_length, 16);
//! assert_eq!(totals.query_aligned_length, 17);
//! assert_eq!(totals.total_alignment_length, 17);
//! assert_eq!(totals.similarity_errors, 5);
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Parsing and reading delta files
//!
//! If you're interested in the records themselves, the [`Reader`] facility
//! yields each [`Line`] in turn. Note that the reader checks each line in
//! isolation: whether a line is valid _where it appears_ is decided by
//! [`scan::scan()`], which drives an [`accumulator::Accumulate`] with each
//! alignment record and the header it belongs to.
//!
//! ```
//! use deltafile::Line;
//!
//! let data = b"NUCMER\n>ref qry 40 40\n1 10 1 11 5 5 0\n0";
//! let mut reader = deltafile::Reader::new(&data[..]);
//!
//! for result in reader.lines() {
//!     if let Line::Alignment(record) = result? {
//!         println!("{}", record.reference_interval());
//!     }
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod accumulator;
pub mod core;
pub mod error;
pub mod event;
pub mod line;
pub mod reader;
pub mod record;
pub mod scan;
pub mod stats;

pub use accumulator::totals::Strategy;
pub use accumulator::totals::Totals;
pub use error::ErrorKind;
pub use line::Line;
pub use stats::Options;
pub use stats::Summary;
pub use stats::parse;
pub use stats::parse_with_totals;

pub use self::reader::Reader;
