// SPDX-License-Identifier: MIT
//
// Frame rendering — one full redraw of the clock face.
//
// The renderer writes a complete frame to any `impl Write`: clear, vertical
// padding, five glyph rows, then the centered date line. It owns no state
// and never flushes — the loop flushes once per frame so the terminal sees
// a single burst of bytes.
//
// A filled glyph cell is a background-highlighted double space; an empty
// cell is two plain spaces. Geometry is taken as a parameter, re-queried
// by the caller each frame, so a resize recenters the next frame.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use asel_term::ansi::{self, Color};
use asel_term::terminal::Size;

use crate::clock::TimeSample;
use crate::font::{self, GLYPH_HEIGHT};
use crate::layout;

/// Background color of a filled glyph cell — the classic ANSI blue the
/// original face used.
pub const FILL: Color = Color::Ansi(4);

/// Write `n` spaces.
pub(crate) fn pad(w: &mut impl Write, n: usize) -> io::Result<()> {
    write!(w, "{:n$}", "")
}

/// Write row `r` of one glyph: filled cells as highlighted double spaces,
/// empty cells as plain double spaces.
fn glyph_row(w: &mut impl Write, symbol: font::Symbol, r: usize) -> io::Result<()> {
    for &filled in font::glyph(symbol).row(r) {
        if filled {
            ansi::bg(w, FILL)?;
            w.write_all(b"  ")?;
            ansi::reset(w)?;
        } else {
            w.write_all(b"  ")?;
        }
    }
    Ok(())
}

/// Render one complete frame: clear the screen, center the HH:MM glyph
/// block, and put the `day.month.year` line two rows below it.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn render_clock(w: &mut impl Write, sample: &TimeSample, size: Size) -> io::Result<()> {
    ansi::clear_screen(w)?;
    ansi::cursor_home(w)?;
    ansi::cursor_hide(w)?;

    for _ in 0..layout::vertical_padding(size.rows) {
        w.write_all(b"\n")?;
    }

    let indent = usize::from(layout::horizontal_padding(size.cols));
    let symbols = sample.symbols();
    for r in 0..GLYPH_HEIGHT {
        pad(w, indent)?;
        for (i, &symbol) in symbols.iter().enumerate() {
            if i > 0 {
                pad(w, usize::from(layout::GLYPH_GAP))?;
            }
            glyph_row(w, symbol, r)?;
        }
        w.write_all(b"\n")?;
    }

    let date = sample.date_line();
    #[allow(clippy::cast_possible_truncation)]
    let date_indent = layout::centered(size.cols, date.width() as u16);
    w.write_all(b"\n\n")?;
    pad(w, usize::from(date_indent))?;
    w.write_all(date.as_bytes())?;
    w.write_all(b"\n")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Expand `#`/space row art into the rendered cell bytes, independent
    /// of the font module.
    fn cells(pattern: &str) -> String {
        pattern
            .chars()
            .map(|c| {
                if c == '#' {
                    "\x1b[44m  \x1b[0m".to_owned()
                } else {
                    "  ".to_owned()
                }
            })
            .collect()
    }

    /// One rendered glyph row line from five patterns, gap of two spaces.
    fn face_row(patterns: [&str; 5]) -> String {
        patterns.map(cells).join("  ")
    }

    fn render_to_string(sample: &TimeSample, size: Size) -> String {
        let mut buf = Vec::new();
        render_clock(&mut buf, sample, size).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn frame_for_0905_at_exact_fit() {
        // 68×8 terminal: zero padding everywhere, so the frame is the
        // prelude, five face rows, two blanks, and the centered date.
        let sample = TimeSample::new(9, 5, 1, 3, 2024);
        let got = render_to_string(&sample, Size { cols: 68, rows: 8 });

        let mut want = String::from("\x1b[2J\x1b[1;1H\x1b[?25l");
        // Symbols: 0 9 : 0 5.
        let rows = [
            [" #### ", " #### ", "      ", " #### ", " #####"],
            ["#    #", "#    #", "  ##  ", "#    #", "#     "],
            ["#    #", " #### ", "      ", "#    #", " #### "],
            ["#    #", "     #", "  ##  ", "#    #", "     #"],
            [" #### ", " #### ", "      ", " #### ", " #### "],
        ];
        for row in rows {
            want.push_str(&face_row(row));
            want.push('\n');
        }
        want.push_str("\n\n");
        // Date "1.3.2024" is 8 columns wide: (68 - 8) / 2 = 30.
        want.push_str(&" ".repeat(30));
        want.push_str("1.3.2024\n");

        assert_eq!(got, want);
    }

    #[test]
    fn frame_centers_on_larger_terminal() {
        let sample = TimeSample::new(12, 0, 15, 6, 2024);
        let got = render_to_string(&sample, Size { cols: 80, rows: 24 });

        // (24 - 8) / 2 = 8 blank lines after the prelude.
        assert!(got.starts_with(&format!("\x1b[2J\x1b[1;1H\x1b[?25l{}", "\n".repeat(8))));
        // (80 - 68) / 2 = 6 columns of indent, then the top row of `1`
        // ("   #  ") contributes three empty cells before its first
        // highlighted cell: 6 + 6 = 12 plain spaces.
        let after_padding = &got["\x1b[2J\x1b[1;1H\x1b[?25l".len() + 8..];
        assert!(after_padding.starts_with(&format!("{}\x1b[44m", " ".repeat(12))));
    }

    #[test]
    fn frame_survives_tiny_terminal() {
        // Smaller than the block in both axes: no negative repeat counts,
        // content flush against the top-left.
        let sample = TimeSample::new(23, 59, 31, 12, 2024);
        let got = render_to_string(&sample, Size { cols: 10, rows: 3 });
        // No vertical padding or indent: the first glyph row follows the
        // prelude directly — one empty cell of `2`, then a highlight.
        // The date (10 columns wide) gets zero indent.
        assert!(got.starts_with("\x1b[2J\x1b[1;1H\x1b[?25l  \x1b[44m"));
        assert!(got.ends_with("\n\n31.12.2024\n"));
    }

    #[test]
    fn frame_has_five_glyph_rows_and_date() {
        let sample = TimeSample::new(9, 5, 1, 3, 2024);
        let got = render_to_string(&sample, Size { cols: 68, rows: 8 });
        // 5 face rows + 2 blanks + 1 date line.
        assert_eq!(got.lines().count() - 1, 7); // prelude shares line 1
        assert!(got.ends_with("1.3.2024\n"));
    }

    #[test]
    fn date_line_recenters_with_width() {
        let sample = TimeSample::new(9, 5, 1, 3, 2024);
        let narrow = render_to_string(&sample, Size { cols: 68, rows: 8 });
        let wide = render_to_string(&sample, Size { cols: 100, rows: 8 });
        // (100 - 8) / 2 = 46 spaces before the date on the wide terminal.
        assert!(narrow.ends_with(&format!("{}1.3.2024\n", " ".repeat(30))));
        assert!(wide.ends_with(&format!("{}1.3.2024\n", " ".repeat(46))));
    }

    #[test]
    fn pad_writes_exactly_n_spaces() {
        let mut buf = Vec::new();
        pad(&mut buf, 7).unwrap();
        assert_eq!(buf, b"       ");
        buf.clear();
        pad(&mut buf, 0).unwrap();
        assert!(buf.is_empty());
    }
}
