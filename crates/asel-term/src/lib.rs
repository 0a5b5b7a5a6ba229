// SPDX-License-Identifier: MIT
//
// asel-term — Terminal control layer for aselerada.
//
// The small set of terminal primitives a full-screen clock needs:
// escape sequence generation, live geometry queries via ioctl, a
// cursor-restoring screen guard, and an interrupt flag for clean
// shutdown on SIGINT/SIGTERM.
//
// This crate intentionally avoids external TUI frameworks (ratatui,
// crossterm) in favor of direct terminal control via ANSI escape
// sequences. The clock repaints one fixed layout once per second —
// every escape code it needs fits in one small module.

pub mod ansi;
pub mod interrupt;
pub mod terminal;
