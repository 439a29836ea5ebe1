//! Builds a terminal display width table from the Unicode
//! East Asian Width data (`EastAsianWidth.txt`) and compresses it
//! into a list of breakpoints suitable for a chain of range checks.
//!
//! The table covers [0, 0x10000); supplementary plane entries in
//! the data file are skipped.
use std::path::Path;

pub mod blocks;
mod breakpoint;
pub mod emit;
mod error;
mod record;
mod table;
mod width;

pub use breakpoint::{Breakpoint, Breakpoints, SCAN_END};
pub use error::{Error, Result};
pub use record::RangeRecord;
pub use table::{default_width, OverrideMode, OverrideStats, WidthTable, TABLE_SIZE};
pub use width::Width;

/// Reads the data file at `path` and returns its breakpoints.
pub fn breakpoints_from_path<P: AsRef<Path>>(path: P, mode: OverrideMode) -> Result<Breakpoints> {
    let (table, stats) = WidthTable::from_path(path.as_ref(), mode)?;
    log::info!(
        "{}: applied {} records, skipped {} out of range",
        path.as_ref().display(),
        stats.applied,
        stats.out_of_range
    );
    Ok(Breakpoints::compress(&table))
}
