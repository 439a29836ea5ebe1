use crate::{Width, WidthTable};

/// Code points in [0, SCAN_END) are examined when compressing a table.
/// 0xffff itself is never examined: it always falls into the trailing run.
pub const SCAN_END: u32 = 0xffff;

/// Marks the end of a run of constant width:
/// code points below `threshold` (and at or above the previous
/// breakpoint's threshold) have width `width`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Breakpoint {
    pub threshold: u32,
    pub width: Width,
}

/// The run-length compressed form of a `WidthTable`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Breakpoints {
    points: Vec<Breakpoint>,
    /// The width of the final run, which has no breakpoint of its own.
    tail: Width,
    /// The width of `SCAN_END` itself, which may differ from `tail`.
    scan_end: Width,
}

impl Breakpoints {
    /// Walks the table in ascending order and records a breakpoint each
    /// time the width changes. The walk starts out assuming narrow.
    pub fn compress(table: &WidthTable) -> Self {
        let mut points = vec![];
        let mut current = Width::Narrow;
        for (c, width) in table.iter().take(SCAN_END as usize) {
            if width != current {
                points.push(Breakpoint {
                    threshold: c,
                    width: current,
                });
                current = width;
            }
        }
        log::debug!("compressed table to {} breakpoints", points.len());
        Self {
            points,
            tail: current,
            scan_end: table.get(SCAN_END).unwrap_or(current),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Breakpoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn tail(&self) -> Width {
        self.tail
    }

    /// The width of 0xffff, which the breakpoints don't describe.
    pub fn scan_end(&self) -> Width {
        self.scan_end
    }

    pub fn as_slice(&self) -> &[Breakpoint] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a Breakpoints {
    type Item = &'a Breakpoint;
    type IntoIter = std::slice::Iter<'a, Breakpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::OverrideMode;
    use k9::assert_equal as assert_eq;

    fn bp(threshold: u32, columns: u8) -> Breakpoint {
        Breakpoint {
            threshold,
            width: if columns == 2 {
                Width::Wide
            } else {
                Width::Narrow
            },
        }
    }

    /// Expands the breakpoints back into a width for `c`
    fn width_of(points: &Breakpoints, c: u32) -> Width {
        points
            .iter()
            .find(|p| c < p.threshold)
            .map(|p| p.width)
            .unwrap_or(points.tail())
    }

    #[test]
    fn default_table() {
        let points = Breakpoints::compress(&WidthTable::new());
        assert_eq!(
            points.as_slice(),
            &[
                bp(0x3400, 1),
                bp(0x4dc0, 2),
                bp(0x4e00, 1),
                bp(0xa000, 2),
                bp(0xf900, 1),
                bp(0xfb00, 2),
            ][..]
        );
        assert_eq!(points.tail(), Width::Narrow);
    }

    #[test]
    fn all_narrow() {
        let mut table = WidthTable::new();
        table.apply_lines(
            ["3400..4DBF;N", "4E00..9FFF;N", "F900..FAFF;N"],
            OverrideMode::ExpandRanges,
        );
        let points = Breakpoints::compress(&table);
        assert!(points.is_empty());
        assert_eq!(points.tail(), Width::Narrow);
    }

    #[test]
    fn minimal_data() {
        let mut table = WidthTable::new();
        table.apply_lines(["00A0;N", "1100;W"], OverrideMode::SingleOnly);
        let points = Breakpoints::compress(&table);
        // 00A0 is already narrow so it produces no breakpoint
        assert_eq!(
            &points.as_slice()[..2],
            &[bp(0x1100, 1), bp(0x1101, 2)][..]
        );
        assert_eq!(points.len(), 8);
    }

    #[test]
    fn wide_at_zero() {
        let mut table = WidthTable::new();
        table.apply_lines(["0000;W"], OverrideMode::SingleOnly);
        let points = Breakpoints::compress(&table);
        assert_eq!(&points.as_slice()[..2], &[bp(0, 1), bp(1, 2)][..]);
    }

    #[test]
    fn last_code_point_is_not_scanned() {
        let mut table = WidthTable::new();
        table.apply_lines(["FFFE;W", "FFFF;W"], OverrideMode::SingleOnly);
        let points = Breakpoints::compress(&table);
        assert_eq!(points.as_slice().last(), Some(&bp(0xfffe, 1)));
        assert_eq!(points.tail(), Width::Wide);
        assert_eq!(points.scan_end(), Width::Wide);

        let mut table = WidthTable::new();
        table.apply_lines(["FFFF;W"], OverrideMode::SingleOnly);
        let points = Breakpoints::compress(&table);
        assert_eq!(points.as_slice().last(), Some(&bp(0xfb00, 2)));
        assert_eq!(points.tail(), Width::Narrow);
        assert_eq!(points.scan_end(), Width::Wide);
    }

    #[test]
    fn runs_alternate_and_increase() {
        let mut table = WidthTable::new();
        for c in (0..0x3000).step_by(7) {
            table.set(c, Width::Wide);
            table.set(c + 1, Width::Wide);
        }
        table.apply_lines(["4000..4100;N", "E000..E0FF;F"], OverrideMode::ExpandRanges);
        let points = Breakpoints::compress(&table);

        for pair in points.as_slice().windows(2) {
            assert!(pair[0].threshold < pair[1].threshold, "{pair:?}");
            assert!(pair[0].width != pair[1].width, "{pair:?}");
        }
        assert!(points.tail() != points.as_slice().last().unwrap().width);

        for (c, width) in table.iter().take(SCAN_END as usize) {
            assert!(width_of(&points, c) == width, "{c:04x}");
        }
    }
}
