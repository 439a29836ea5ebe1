//! Renders `Breakpoints` as source code.
use crate::{Breakpoints, Width, SCAN_END};
use std::io::Write;

/// The shape of the generated code.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Style {
    /// Just the `} else if` branches, for pasting into the middle of
    /// a hand written C lookup function. The final run is left implicit.
    #[default]
    Fragment,
    /// A complete C function named `name`.
    CFunction { name: String },
    /// A complete Rust function named `name`.
    RustFn { name: String },
}

/// The conditions of a complete lookup function, ahead of its
/// final `else`. 0xffff is never covered by a breakpoint, so it
/// gets a branch of its own when it differs from the final run.
fn function_branches(points: &Breakpoints) -> Vec<(String, Width)> {
    let mut branches: Vec<(String, Width)> = points
        .iter()
        .map(|point| (format!("wc < 0x{:04x}", point.threshold), point.width))
        .collect();
    if points.scan_end() != points.tail() {
        branches.push((format!("wc < 0x{SCAN_END:04x}"), points.tail()));
        branches.push((format!("wc == 0x{SCAN_END:04x}"), points.scan_end()));
    }
    branches
}

/// Writes `points` to `out` in the requested style.
/// `source` names the data file in the header comment that
/// precedes the function styles; it is unused for fragments.
pub fn write_breakpoints<W: Write + ?Sized>(
    out: &mut W,
    points: &Breakpoints,
    style: &Style,
    source: Option<&str>,
) -> std::io::Result<()> {
    match style {
        Style::Fragment => {
            for point in points {
                writeln!(out, "    }} else if (wc < 0x{:04x}) {{", point.threshold)?;
                writeln!(out, "        return {};", point.width)?;
            }
        }
        Style::CFunction { name } => {
            if let Some(source) = source {
                writeln!(out, "/* Generated from {source} by make-wcwidth */")?;
            }
            writeln!(out, "int {name}(uint32_t wc)")?;
            writeln!(out, "{{")?;
            let branches = function_branches(points);
            if branches.is_empty() {
                writeln!(out, "    return {};", points.tail())?;
            } else {
                for (idx, (cond, width)) in branches.iter().enumerate() {
                    if idx == 0 {
                        writeln!(out, "    if ({cond}) {{")?;
                    } else {
                        writeln!(out, "    }} else if ({cond}) {{")?;
                    }
                    writeln!(out, "        return {width};")?;
                }
                writeln!(out, "    }} else {{")?;
                writeln!(out, "        return {};", points.tail())?;
                writeln!(out, "    }}")?;
            }
            writeln!(out, "}}")?;
        }
        Style::RustFn { name } => {
            if let Some(source) = source {
                writeln!(out, "// Generated from {source} by make-wcwidth")?;
            }
            writeln!(out, "pub fn {name}(wc: u32) -> u8 {{")?;
            let branches = function_branches(points);
            if branches.is_empty() {
                writeln!(out, "    {}", points.tail())?;
            } else {
                for (idx, (cond, width)) in branches.iter().enumerate() {
                    if idx == 0 {
                        writeln!(out, "    if {cond} {{")?;
                    } else {
                        writeln!(out, "    }} else if {cond} {{")?;
                    }
                    writeln!(out, "        {width}")?;
                }
                writeln!(out, "    }} else {{")?;
                writeln!(out, "        {}", points.tail())?;
                writeln!(out, "    }}")?;
            }
            writeln!(out, "}}")?;
        }
    }
    Ok(())
}

/// Convenience for `write_breakpoints` into a `String`.
pub fn render(points: &Breakpoints, style: &Style, source: Option<&str>) -> String {
    let mut buf = vec![];
    // Writing to a Vec cannot fail
    let _ = write_breakpoints(&mut buf, points, style, source);
    String::from_utf8_lossy(&buf).into_owned()
}
