//! Parsers for bulk seed inputs.
//!
//! Seed files are header-less, comma-delimited text, one file per table.

pub mod delimited;

pub use delimited::{SeedParseError, SeedParser, SeedSet};
