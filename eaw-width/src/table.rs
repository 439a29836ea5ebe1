use crate::{Error, RangeRecord, Width};
use log::{debug, trace};
use std::io::BufRead;
use std::ops::RangeInclusive;
use std::path::Path;

/// The table covers the 16-bit code points, [0, 0x10000).
pub const TABLE_SIZE: usize = 0x10000;

/// CJK ideograph blocks which default to wide even when the
/// data file has no entry for a code point:
/// CJK Unified Ideographs Extension A, CJK Unified Ideographs
/// and CJK Compatibility Ideographs.
pub const WIDE_BY_DEFAULT: [RangeInclusive<u32>; 3] =
    [0x3400..=0x4dbf, 0x4e00..=0x9fff, 0xf900..=0xfaff];

/// The width a code point has before any data file entries
/// are applied.
pub fn default_width(c: u32) -> Width {
    if WIDE_BY_DEFAULT.iter().any(|range| range.contains(&c)) {
        Width::Wide
    } else {
        Width::Narrow
    }
}

/// Controls which data file lines are applied to the table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OverrideMode {
    /// Only `XXXX;c` lines are applied. Range lines do not
    /// match the pattern and are skipped entirely.
    #[default]
    SingleOnly,
    /// `XXXX..YYYY;c` lines are applied to every code point
    /// in the range that falls inside the table.
    ExpandRanges,
}

impl OverrideMode {
    pub fn parse_line(self, line: &str) -> Option<RangeRecord> {
        match self {
            Self::SingleOnly => RangeRecord::parse(line),
            Self::ExpandRanges => RangeRecord::parse_range(line),
        }
    }
}

/// Counts of what happened to the lines fed to `WidthTable::apply_lines`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OverrideStats {
    /// Records that updated at least one table entry
    pub applied: usize,
    /// Records that start beyond the end of the table
    pub out_of_range: usize,
    /// Lines that didn't match the record pattern
    pub ignored: usize,
}

/// Dense map from code point to display width.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WidthTable {
    widths: Vec<Width>,
}

impl Default for WidthTable {
    fn default() -> Self {
        Self::new()
    }
}

impl WidthTable {
    /// Builds the table with every entry set to its `default_width`.
    pub fn new() -> Self {
        let widths = (0..TABLE_SIZE as u32).map(default_width).collect();
        Self { widths }
    }

    /// Builds the default table and applies the records read from `reader`.
    pub fn from_reader<R: BufRead>(
        reader: R,
        mode: OverrideMode,
    ) -> std::io::Result<(Self, OverrideStats)> {
        let mut table = Self::new();
        let mut stats = OverrideStats::default();
        // Lines are split as bytes: a stray non-UTF-8 byte, typically
        // in a comment, must only affect its own line.
        for line in reader.split(b'\n') {
            let line = line?;
            let line = String::from_utf8_lossy(&line);
            table.apply_line(line.trim_end_matches('\r'), mode, &mut stats);
        }
        debug!("{stats:?}");
        Ok((table, stats))
    }

    /// Builds the table from the data file at `path`.
    /// The file is closed before this returns.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        mode: OverrideMode,
    ) -> Result<(Self, OverrideStats), Error> {
        let path = path.as_ref();
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = std::fs::File::open(path).map_err(io_err)?;
        Self::from_reader(std::io::BufReader::new(file), mode).map_err(io_err)
    }

    pub fn get(&self, c: u32) -> Option<Width> {
        self.widths.get(c as usize).copied()
    }

    /// Sets the width of `c`. Returns false, leaving the table
    /// untouched, if `c` is outside the table.
    pub fn set(&mut self, c: u32, width: Width) -> bool {
        match self.widths.get_mut(c as usize) {
            Some(slot) => {
                *slot = width;
                true
            }
            None => false,
        }
    }

    /// Applies a single record. For `OverrideMode::SingleOnly` only
    /// `record.start` is assigned, even if the record carries an end.
    /// Returns false if the record starts outside the table.
    pub fn apply(&mut self, record: &RangeRecord, mode: OverrideMode) -> bool {
        if record.start as usize >= TABLE_SIZE {
            return false;
        }
        let width = record.width();
        let last = match mode {
            OverrideMode::SingleOnly => record.start,
            OverrideMode::ExpandRanges => record.last().min(TABLE_SIZE as u32 - 1),
        };
        trace!("{:04x}..={:04x} -> {}", record.start, last, width);
        for slot in &mut self.widths[record.start as usize..=last as usize] {
            *slot = width;
        }
        true
    }

    fn apply_line(&mut self, line: &str, mode: OverrideMode, stats: &mut OverrideStats) {
        match mode.parse_line(line) {
            Some(record) => {
                if self.apply(&record, mode) {
                    stats.applied += 1;
                } else {
                    stats.out_of_range += 1;
                }
            }
            None => stats.ignored += 1,
        }
    }

    /// Applies each line in turn; later lines win over earlier ones.
    pub fn apply_lines<I, S>(&mut self, lines: I, mode: OverrideMode) -> OverrideStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = OverrideStats::default();
        for line in lines {
            self.apply_line(line.as_ref(), mode, &mut stats);
        }
        stats
    }

    /// Iterates `(code point, width)` in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Width)> + '_ {
        self.widths
            .iter()
            .enumerate()
            .map(|(c, &width)| (c as u32, width))
    }

    pub fn as_slice(&self) -> &[Width] {
        &self.widths
    }
}
