//! A diagnostic view of a `WidthTable` split into 256 code point
//! blocks by high byte, showing which blocks need per-code-point
//! data and which have a single width throughout.
use crate::{Width, WidthTable};
use std::io::Write;

pub const BLOCK_SIZE: usize = 0x100;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Block {
    /// Every code point in the block has this width
    Uniform(Width),
    /// The widths of each code point in the block
    Mixed(Vec<Width>),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlockSummary {
    pub high_byte: u8,
    pub block: Block,
}

pub fn summarize(table: &WidthTable) -> Vec<BlockSummary> {
    table
        .as_slice()
        .chunks(BLOCK_SIZE)
        .enumerate()
        .map(|(high_byte, widths)| {
            let first = widths[0];
            let block = if widths.iter().all(|&w| w == first) {
                Block::Uniform(first)
            } else {
                Block::Mixed(widths.to_vec())
            };
            BlockSummary {
                high_byte: high_byte as u8,
                block,
            }
        })
        .collect()
}

/// Uniform blocks print as `HH00: W`. Mixed blocks print
/// `HH00:` followed by a `XXXX;W` line per code point.
pub fn write_blocks<W: Write + ?Sized>(out: &mut W, blocks: &[BlockSummary]) -> std::io::Result<()> {
    for summary in blocks {
        match &summary.block {
            Block::Uniform(width) => writeln!(out, "{:02x}00: {}", summary.high_byte, width)?,
            Block::Mixed(widths) => {
                writeln!(out, "{:02x}00:", summary.high_byte)?;
                let base = (summary.high_byte as u32) << 8;
                for (lo, width) in widths.iter().enumerate() {
                    writeln!(out, "{:04x};{}", base + lo as u32, width)?;
                }
            }
        }
    }
    Ok(())
}
