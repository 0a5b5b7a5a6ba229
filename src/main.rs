// SPDX-License-Identifier: MIT
//
// aselerada — a terminal clock that draws the time in big block digits.
//
// This is the main binary that wires together the crates:
//
//   asel-term  → ANSI output, terminal geometry, cursor restore, interrupts
//   asel-clock → block-digit font, time sampling, layout, frame rendering
//
// Startup flow:
//
//   install SIGINT/SIGTERM flag → acquire screen guard → splash (once)
//     → loop: sample local time → query size → render frame → sleep 1s
//
// The loop exits when the interrupt flag is set; the screen guard then
// restores the cursor on the way out (and the panic hook covers crashes
// mid-frame). Graceful shutdown is exit code 0.

use std::io;

use asel_clock::app::ClockApp;
use asel_term::interrupt;
use asel_term::terminal::Screen;

fn main() -> io::Result<()> {
    interrupt::install_interrupt_handler();

    let mut screen = Screen::acquire()?;

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let result = ClockApp::new().run(&mut lock, interrupt::stop_flag());
    drop(lock);

    screen.release()?;
    result
}
