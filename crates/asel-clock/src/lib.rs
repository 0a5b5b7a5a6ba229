// SPDX-License-Identifier: MIT
//
// asel-clock — Clock core for aselerada.
//
// Everything between the wall clock and the terminal bytes: the square
// block-digit font, local time sampling, centering arithmetic, the
// frame renderer, the splash screen, and the once-per-second loop that
// ties them together.
//
// The layering mirrors the data flow. `font` and `layout` are pure and
// know nothing about I/O; `render` and `splash` write one frame to any
// `impl Write`; `app` owns the loop and is the only module that sleeps.

pub mod app;
pub mod clock;
pub mod font;
pub mod layout;
pub mod render;
pub mod splash;
