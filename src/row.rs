//! Tiling month blocks side by side into one printable row.

use crate::text::is_blank;
use crate::types::Layout;

/// Join line `i` of every block with `column_gap` spaces, drop combined lines
/// that are entirely blank, then append `row_gap` empty lines.
///
/// Only the blocks given are tiled: a short final row gets no filler blocks.
pub fn format_row(blocks: &[Vec<String>], layout: &Layout) -> Vec<String> {
    let gap = " ".repeat(layout.column_gap);
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);

    let mut lines: Vec<String> = (0..height)
        .map(|i| {
            blocks
                .iter()
                .map(|block| {
                    block
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| " ".repeat(layout.block_width()))
                })
                .collect::<Vec<_>>()
                .join(&gap)
        })
        .filter(|line| !is_blank(line))
        .collect();

    lines.extend(std::iter::repeat_n(String::new(), layout.row_gap));
    lines
}
