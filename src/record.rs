//! Records within a delta file.
//!
//! Each kind of line in a delta file parses into its own record type:
//!
//! ```text
//! /path/to/reference.fasta /path/to/query.fasta   <= files::Record
//! NUCMER                                          <= Program
//! >ref_seq_A qry_seq_B 40 40                      <= header::Record
//! 1 10 1 11 5 5 0                                 <= alignment::Record
//! -1                                              <= indel::Record
//! 0                                               <= indel::Record (terminator)
//! ```

pub mod alignment;
pub mod files;
pub mod header;
pub mod indel;
pub mod program;

pub use alignment::AlignmentRecord;
pub use files::FilesRecord;
pub use header::HeaderRecord;
pub use indel::IndelRecord;
pub use program::Program;
