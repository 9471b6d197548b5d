//! Core functionality used across the crate.

pub mod interval;
pub mod regions;

pub use interval::Interval;
pub use regions::Regions;
