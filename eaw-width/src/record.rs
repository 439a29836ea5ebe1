use crate::Width;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A single code point entry, eg: `3000;F`.
    /// The `;` must immediately follow the hex digits, so range
    /// entries and space padded entries never match.
    static ref SINGLE_RE: Regex = Regex::new(r"^([0-9a-fA-F]+);(\S)").unwrap();
    /// A single code point or a range, with optional padding
    /// around the separator, eg: `3001..3003 ; W`.
    static ref RANGE_RE: Regex =
        Regex::new(r"^([0-9a-fA-F]+)(?:\.\.([0-9a-fA-F]+))?\s*;\s*(\S)").unwrap();
}

/// One entry from an EastAsianWidth.txt style data file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RangeRecord {
    pub start: u32,
    /// The inclusive end of a `start..end` entry.
    pub end: Option<u32>,
    /// The first character of the classification field.
    pub class: char,
}

/// `s` is a non-empty run of hex digits, so the only possible
/// failure is overflow. Such values saturate to `u32::MAX`, which
/// lies past the end of any table and is skipped as out of range.
fn parse_codepoint(s: &str) -> u32 {
    u32::from_str_radix(s, 16).unwrap_or(u32::MAX)
}

impl RangeRecord {
    /// Parses a line of the form `XXXX;c...`. Anything after the
    /// classification character is ignored. Returns `None` for
    /// comments, blank lines, ranges and anything else.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = SINGLE_RE.captures(line)?;
        let start = parse_codepoint(&caps[1]);
        let class = caps[2].chars().next()?;
        Some(Self {
            start,
            end: None,
            class,
        })
    }

    /// Like `parse`, but also accepts `XXXX..YYYY;c` ranges and
    /// whitespace around the `;`.
    pub fn parse_range(line: &str) -> Option<Self> {
        let caps = RANGE_RE.captures(line)?;
        let start = parse_codepoint(&caps[1]);
        let end = caps.get(2).map(|end| parse_codepoint(end.as_str()));
        let class = caps[3].chars().next()?;
        Some(Self { start, end, class })
    }

    /// The last code point covered by this record.
    pub fn last(&self) -> u32 {
        self.end.unwrap_or(self.start).max(self.start)
    }

    pub fn width(&self) -> Width {
        Width::from_class(self.class)
    }
}
