// SPDX-License-Identifier: MIT
//
// Terminal geometry and the cursor-restoring screen guard.
//
// Safety: This module necessarily uses `unsafe` for ioctl (TIOCGWINSZ)
// and the raw fd write in the panic hook. These are the standard POSIX
// interfaces for terminal control — there is no safe alternative. Each
// unsafe block is minimal and documented.
#![allow(unsafe_code)]
//
// Geometry is re-queried from the OS on every call, never cached here:
// the clock recenters itself each frame, so a live resize is picked up
// at most one second later with no signal plumbing.
//
// The panic hook bypasses Rust's stdout lock entirely, writing a
// pre-built restore sequence directly to fd 1. This prevents deadlock
// if the panic happened while holding the stdout lock (likely during a
// frame write). One raw write, cursor back, then the original panic
// handler prints its message to a usable terminal.

use std::io::{self, Write};
use std::sync::Once;

use crate::ansi;

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

/// Fallback size when the host cannot report geometry.
pub const DEFAULT_SIZE: Size = Size { cols: 80, rows: 24 };

// ─── Terminal Queries ───────────────────────────────────────────────────────

/// Query the current terminal size via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal, the query fails, or the
/// reported dimensions are not positive.
#[cfg(unix)]
#[must_use]
pub fn size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn size() -> Option<Size> {
    None
}

/// The current terminal size, or [`DEFAULT_SIZE`] (80×24) if the host
/// cannot report one (e.g., piped output or a test environment).
///
/// Padding math downstream assumes sane positive dimensions; a failed
/// query must never feed garbage into the layout.
#[must_use]
pub fn size_or_default() -> Size {
    size().unwrap_or(DEFAULT_SIZE)
}

// ─── Panic-Safe Cursor Restore ──────────────────────────────────────────────

/// Restore sequence for emergency use: reset SGR attributes, show cursor.
const EMERGENCY_RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";

/// Panic hook guard — ensures the hook is installed at most once per process.
static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Install a panic hook that restores the cursor before printing the error.
///
/// Without this, a panic mid-frame leaves the user's cursor hidden. The
/// hook writes [`EMERGENCY_RESTORE`] directly to fd 1 (bypassing Rust's
/// stdout lock to avoid deadlock), then delegates to the original panic
/// handler so the error prints normally.
fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let original = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            emergency_restore();
            original(info);
        }));
    });
}

/// Write the restore sequence directly to stdout's file descriptor.
fn emergency_restore() {
    #[cfg(unix)]
    unsafe {
        let _ = libc::write(
            libc::STDOUT_FILENO,
            EMERGENCY_RESTORE.as_ptr().cast::<libc::c_void>(),
            EMERGENCY_RESTORE.len(),
        );
    }

    #[cfg(not(unix))]
    {
        let _ = io::stdout().write_all(EMERGENCY_RESTORE);
        let _ = io::stdout().flush();
    }
}

// ─── Screen ─────────────────────────────────────────────────────────────────

/// Screen handle with RAII cursor restore.
///
/// Call [`acquire`](Self::acquire) before the first frame: it hides the
/// cursor and arms the panic hook. The cursor is shown again when the
/// handle is dropped — even on panic.
///
/// # Example
///
/// ```no_run
/// use asel_term::terminal::Screen;
///
/// let screen = Screen::acquire()?;
/// // ... render frames ...
/// // Cursor is restored automatically on drop.
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Screen {
    /// Whether we currently own the screen (cursor hidden).
    active: bool,
}

impl Screen {
    /// Take over the screen: install the panic hook and hide the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn acquire() -> io::Result<Self> {
        install_panic_hook();

        let stdout = io::stdout();
        let mut lock = stdout.lock();
        ansi::cursor_hide(&mut lock)?;
        lock.flush()?;

        Ok(Self { active: true })
    }

    /// Whether the cursor is currently hidden by this handle.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Give the screen back: reset attributes and show the cursor.
    ///
    /// Idempotent: calling `release()` while inactive is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn release(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }

        let stdout = io::stdout();
        let mut lock = stdout.lock();
        ansi::reset(&mut lock)?;
        ansi::cursor_show(&mut lock)?;
        lock.flush()?;

        self.active = false;
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if self.active {
            let _ = self.release();
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
