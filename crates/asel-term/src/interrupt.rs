// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Interrupt flag — clean shutdown on SIGINT/SIGTERM.
//
// Ctrl-C must not leave the terminal with a hidden cursor. Instead of
// letting the default disposition kill the process mid-frame, we install
// handlers that set an `AtomicBool`. The clock loop checks the flag once
// per tick slice and unwinds normally, so the screen guard's Drop runs
// and the cursor comes back.
//
// Writing to an atomic is one of the few operations permitted inside
// signal handlers, which is all the handler does.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag set by the SIGINT/SIGTERM handlers.
static INTERRUPT_RECEIVED: AtomicBool = AtomicBool::new(false);

/// Install signal handlers for SIGINT and SIGTERM.
///
/// The handlers simply set the interrupt flag; the render loop polls it
/// via [`stop_flag`] and exits between frames.
#[cfg(unix)]
pub fn install_interrupt_handler() {
    unsafe {
        let mut sa: libc::sigaction = std::mem::zeroed();
        sa.sa_sigaction = interrupt_handler as *const () as usize;
        sa.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&raw mut sa.sa_mask);
        libc::sigaction(libc::SIGINT, &raw const sa, std::ptr::null_mut());
        libc::sigaction(libc::SIGTERM, &raw const sa, std::ptr::null_mut());
    }
}

#[cfg(unix)]
extern "C" fn interrupt_handler(_sig: libc::c_int) {
    INTERRUPT_RECEIVED.store(true, Ordering::Relaxed);
}

#[cfg(not(unix))]
pub fn install_interrupt_handler() {
    // No-op on non-unix platforms; use `request_interrupt` instead.
}

/// The shared stop flag polled by the render loop.
#[must_use]
pub fn stop_flag() -> &'static AtomicBool {
    &INTERRUPT_RECEIVED
}

/// Whether an interrupt has been requested.
#[must_use]
pub fn interrupt_requested() -> bool {
    INTERRUPT_RECEIVED.load(Ordering::Relaxed)
}

/// Request a stop from ordinary code (tests, embedders, non-unix hosts).
pub fn request_interrupt() {
    INTERRUPT_RECEIVED.store(true, Ordering::Relaxed);
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // The flag is process-global, so the whole lifecycle runs in one test
    // to avoid cross-test interference.

    #[test]
    fn flag_lifecycle() {
        INTERRUPT_RECEIVED.store(false, Ordering::Relaxed);
        assert!(!interrupt_requested());

        request_interrupt();
        assert!(interrupt_requested());
        assert!(stop_flag().load(Ordering::Relaxed));

        // stop_flag aliases the same global the handler writes.
        stop_flag().store(false, Ordering::Relaxed);
        assert!(!interrupt_requested());
    }
}
