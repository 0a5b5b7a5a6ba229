// SPDX-License-Identifier: MIT
//
// The square block-digit font.
//
// Eleven glyphs — the ten digits and the colon separator — each a fixed
// 5×6 grid of filled/empty cells. The patterns are parsed from `#`/space
// art at compile time, so a malformed row is a build error, not a runtime
// surprise.
//
// Lookup is keyed by a closed `Symbol` enum rather than an array index.
// A digit value can't silently read past the table, and an unsupported
// character fails with a typed error instead of garbage.

use thiserror::Error;

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 5;
/// Cells per glyph row.
pub const GLYPH_WIDTH: usize = 6;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// A symbol the font can draw: one of the ten digits or the colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Colon,
}

impl Symbol {
    /// The symbol for a decimal digit. Takes the value modulo 10, so any
    /// `u8` maps to a digit — callers splitting a two-digit value into
    /// tens and units never leave the symbol set.
    #[must_use]
    pub const fn digit(n: u8) -> Self {
        match n % 10 {
            0 => Self::Zero,
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            6 => Self::Six,
            7 => Self::Seven,
            8 => Self::Eight,
            _ => Self::Nine,
        }
    }
}

/// Glyph requested for a character outside the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no glyph for {0:?}: supported symbols are '0'-'9' and ':'")]
pub struct UnsupportedSymbol(pub char);

impl TryFrom<char> for Symbol {
    type Error = UnsupportedSymbol;

    fn try_from(c: char) -> Result<Self, UnsupportedSymbol> {
        match c {
            '0'..='9' => Ok(Self::digit(c as u8 - b'0')),
            ':' => Ok(Self::Colon),
            other => Err(UnsupportedSymbol(other)),
        }
    }
}

// ─── Glyph ───────────────────────────────────────────────────────────────────

/// A fixed 5-row-by-6-column grid of filled/empty cells.
///
/// Glyphs are immutable statics built once at compile time; lookup hands
/// out `&'static` references, never copies.
#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: [[bool; GLYPH_WIDTH]; GLYPH_HEIGHT],
}

impl Glyph {
    /// Parse a glyph from `#`/space row art. `#` is a filled cell,
    /// anything else is empty.
    ///
    /// # Panics
    ///
    /// Panics (at compile time, since all callers are `static`
    /// initializers) if a row is not exactly [`GLYPH_WIDTH`] bytes.
    const fn from_pattern(pattern: [&str; GLYPH_HEIGHT]) -> Self {
        let mut rows = [[false; GLYPH_WIDTH]; GLYPH_HEIGHT];
        let mut r = 0;
        while r < GLYPH_HEIGHT {
            let bytes = pattern[r].as_bytes();
            assert!(bytes.len() == GLYPH_WIDTH, "glyph row must be 6 cells");
            let mut c = 0;
            while c < GLYPH_WIDTH {
                rows[r][c] = bytes[c] == b'#';
                c += 1;
            }
            r += 1;
        }
        Self { rows }
    }

    /// One row of cells, top to bottom. `true` is a filled cell.
    #[inline]
    #[must_use]
    pub const fn row(&self, r: usize) -> &[bool; GLYPH_WIDTH] {
        &self.rows[r]
    }
}

// ─── Font Table ──────────────────────────────────────────────────────────────

static ZERO: Glyph = Glyph::from_pattern([
    " #### ", //
    "#    #", //
    "#    #", //
    "#    #", //
    " #### ",
]);

static ONE: Glyph = Glyph::from_pattern([
    "   #  ", //
    "  ##  ", //
    "   #  ", //
    "   #  ", //
    " #####",
]);

static TWO: Glyph = Glyph::from_pattern([
    " #### ", //
    "     #", //
    " #### ", //
    "#     ", //
    " #####",
]);

static THREE: Glyph = Glyph::from_pattern([
    " #### ", //
    "     #", //
    " #### ", //
    "     #", //
    " #### ",
]);

static FOUR: Glyph = Glyph::from_pattern([
    "#    #", //
    "#    #", //
    " #####", //
    "     #", //
    "     #",
]);

static FIVE: Glyph = Glyph::from_pattern([
    " #####", //
    "#     ", //
    " #### ", //
    "     #", //
    " #### ",
]);

static SIX: Glyph = Glyph::from_pattern([
    " #### ", //
    "#     ", //
    " #### ", //
    "#    #", //
    " #### ",
]);

static SEVEN: Glyph = Glyph::from_pattern([
    " #####", //
    "     #", //
    "    # ", //
    "   #  ", //
    "   #  ",
]);

static EIGHT: Glyph = Glyph::from_pattern([
    " #### ", //
    "#    #", //
    " #### ", //
    "#    #", //
    " #### ",
]);

static NINE: Glyph = Glyph::from_pattern([
    " #### ", //
    "#    #", //
    " #### ", //
    "     #", //
    " #### ",
]);

static COLON: Glyph = Glyph::from_pattern([
    "      ", //
    "  ##  ", //
    "      ", //
    "  ##  ", //
    "      ",
]);

/// Look up the glyph for a symbol. Total — every [`Symbol`] has a glyph.
#[must_use]
pub fn glyph(symbol: Symbol) -> &'static Glyph {
    match symbol {
        Symbol::Zero => &ZERO,
        Symbol::One => &ONE,
        Symbol::Two => &TWO,
        Symbol::Three => &THREE,
        Symbol::Four => &FOUR,
        Symbol::Five => &FIVE,
        Symbol::Six => &SIX,
        Symbol::Seven => &SEVEN,
        Symbol::Eight => &EIGHT,
        Symbol::Nine => &NINE,
        Symbol::Colon => &COLON,
    }
}

/// Look up the glyph for a character.
///
/// # Errors
///
/// Returns [`UnsupportedSymbol`] for anything outside `'0'..='9'` and `':'`.
pub fn glyph_for_char(c: char) -> Result<&'static Glyph, UnsupportedSymbol> {
    Symbol::try_from(c).map(glyph)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
