// SPDX-License-Identifier: MIT
//
// Centering arithmetic.
//
// Pure integer math, no I/O. Every padding computation clamps at zero:
// on a terminal smaller than the clock block the content is emitted
// flush against the top-left edge instead of feeding a negative repeat
// count to the writer.
//
// Integer division floors, so fractional centering biases the block one
// cell toward the top-left. That matches what the eye expects from a
// terminal clock and keeps the math branch-free.

use crate::font::GLYPH_WIDTH;

/// Symbols on the clock face (HH:MM).
pub const SYMBOLS_PER_FACE: u16 = 5;

/// Terminal columns per glyph cell. Block cells are two characters wide
/// so they come out roughly square in a typical monospace font.
pub const CELL_WIDTH: u16 = 2;

/// Columns between adjacent glyphs.
///
/// The historical renderer padded asymmetrically around the colon (an
/// extra trailing double-space after some groups but not others). One
/// consistent 2-column gap after every glyph keeps the face visually
/// even and the width arithmetic honest.
pub const GLYPH_GAP: u16 = 2;

/// Total width of the rendered clock face in terminal columns:
/// 5 glyphs × 6 cells × 2 columns + 4 gaps × 2 columns = 68.
pub const CLOCK_WIDTH: u16 =
    SYMBOLS_PER_FACE * GLYPH_WIDTH as u16 * CELL_WIDTH + (SYMBOLS_PER_FACE - 1) * GLYPH_GAP;

/// Height of the full block: 5 glyph rows + 1 blank + 2 for the date
/// section.
pub const BLOCK_HEIGHT: u16 = 8;

/// Leading space needed to center `content` columns (or rows) inside
/// `extent`, clamped at zero when the content does not fit.
#[inline]
#[must_use]
pub const fn centered(extent: u16, content: u16) -> u16 {
    extent.saturating_sub(content) / 2
}

/// Blank lines above the clock block for a terminal of `rows` rows.
#[inline]
#[must_use]
pub const fn vertical_padding(rows: u16) -> u16 {
    centered(rows, BLOCK_HEIGHT)
}

/// Indent columns before each glyph row for a terminal of `cols` columns.
#[inline]
#[must_use]
pub const fn horizontal_padding(cols: u16) -> u16 {
    centered(cols, CLOCK_WIDTH)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
