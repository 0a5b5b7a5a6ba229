// SPDX-License-Identifier: MIT
//
// Splash screen — the one-shot centered welcome.
//
// Shown exactly once, before the clock loop starts: clear, center the
// welcome line, hold for a fixed pause, clear again and hand the cursor
// back. The pause is a parameter so tests can pass `Duration::ZERO` and
// assert on the bytes without sleeping.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use unicode_width::UnicodeWidthStr;

use asel_term::ansi;
use asel_term::terminal::Size;

use crate::layout;
use crate::render::pad;

/// The fixed welcome line.
pub const WELCOME_TEXT: &str = "Welcome to Aselerada";

/// How long the splash stays on screen in production.
pub const SPLASH_PAUSE: Duration = Duration::from_secs(2);

/// Show the splash screen and hold it for `pause`.
///
/// Clears the screen, hides the cursor, centers [`WELCOME_TEXT`] at
/// `(rows − 1) / 2`, sleeps, then clears again and shows the cursor so
/// the clock loop starts from a clean screen.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn show_splash(w: &mut impl Write, size: Size, pause: Duration) -> io::Result<()> {
    ansi::clear_screen(w)?;
    ansi::cursor_home(w)?;
    ansi::cursor_hide(w)?;

    for _ in 0..layout::centered(size.rows, 1) {
        w.write_all(b"\n")?;
    }
    #[allow(clippy::cast_possible_truncation)]
    let indent = layout::centered(size.cols, WELCOME_TEXT.width() as u16);
    pad(w, usize::from(indent))?;
    w.write_all(WELCOME_TEXT.as_bytes())?;
    w.write_all(b"\n")?;
    w.flush()?;

    if !pause.is_zero() {
        thread::sleep(pause);
    }

    ansi::clear_screen(w)?;
    ansi::cursor_home(w)?;
    ansi::cursor_show(w)?;
    w.flush()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
