// SPDX-License-Identifier: MIT
//
// The clock loop — splash once, then render forever.
//
// Two states, one transition: `Splash` runs exactly once, then the loop
// samples the local time, re-queries the terminal size, renders a frame,
// and sleeps until the next tick. No threads, no channels — the only
// suspension point is the sleep.
//
// The loop takes an external stop flag instead of running unconditionally.
// The binary wires it to SIGINT/SIGTERM; tests set it directly and the
// loop winds down deterministically. Sleep happens in short slices so a
// stop request is honored within ~100ms rather than a full tick.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use asel_term::terminal;

use crate::clock::TimeSample;
use crate::render::render_clock;
use crate::splash::{show_splash, SPLASH_PAUSE};

/// Upper bound on one sleep slice between stop-flag checks.
const SLEEP_SLICE: Duration = Duration::from_millis(100);

// ─── Config ─────────────────────────────────────────────────────────────────

/// Timing configuration for the clock loop.
#[derive(Debug, Clone, Copy)]
pub struct ClockConfig {
    /// Delay between frames. Default: 1 second.
    pub tick_interval: Duration,
    /// How long the splash screen stays up. Default: 2 seconds.
    pub splash_pause: Duration,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            splash_pause: SPLASH_PAUSE,
        }
    }
}

// ─── ClockApp ───────────────────────────────────────────────────────────────

/// The clock application: owns the loop timing, borrows everything else.
///
/// # Example
///
/// ```no_run
/// use std::io;
/// use std::sync::atomic::AtomicBool;
/// use asel_clock::app::ClockApp;
///
/// let stop = AtomicBool::new(false);
/// let mut stdout = io::stdout();
/// ClockApp::new().run(&mut stdout, &stop)?;
/// # Ok::<(), io::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ClockApp {
    config: ClockConfig,
}

impl ClockApp {
    /// A clock with the default cadence (1s frames, 2s splash).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClockConfig::default())
    }

    /// A clock with custom timing.
    #[must_use]
    pub const fn with_config(config: ClockConfig) -> Self {
        Self { config }
    }

    /// Show the splash once, then render frames until `stop` is set.
    ///
    /// Terminal geometry is re-queried before every frame, so resizing
    /// the terminal recenters the clock on the next tick. Returns
    /// `Ok(())` when stopped — the graceful shutdown path.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying writer.
    pub fn run(&self, w: &mut impl Write, stop: &AtomicBool) -> io::Result<()> {
        show_splash(w, terminal::size_or_default(), self.config.splash_pause)?;

        while !stop.load(Ordering::Relaxed) {
            let sample = TimeSample::now();
            render_clock(w, &sample, terminal::size_or_default())?;
            w.flush()?;
            self.sleep_until_next_frame(stop);
        }

        Ok(())
    }

    /// Sleep one tick interval, waking early if `stop` is set.
    fn sleep_until_next_frame(&self, stop: &AtomicBool) {
        let mut remaining = self.config.tick_interval;
        while !remaining.is_zero() && !stop.load(Ordering::Relaxed) {
            let slice = remaining.min(SLEEP_SLICE);
            thread::sleep(slice);
            remaining -= slice;
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
