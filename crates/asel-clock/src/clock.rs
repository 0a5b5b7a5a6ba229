// SPDX-License-Identifier: MIT
//
// Time sampling.
//
// One `TimeSample` is captured per frame from the local wall clock,
// consumed synchronously by the renderer, and discarded. Nothing here
// caches or ticks — the loop's cadence lives in `app`.

use chrono::{Datelike, Local, Timelike};

use crate::font::Symbol;

/// A snapshot of the local time, precise to the minute plus the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    /// Hour of day, 0–23.
    pub hour: u8,
    /// Minute of hour, 0–59.
    pub minute: u8,
    /// Day of month, 1-based.
    pub day: u8,
    /// Month, 1-based (January = 1).
    pub month: u8,
    /// Four-digit year.
    pub year: u16,
}

impl TimeSample {
    /// Build a sample from explicit fields.
    #[must_use]
    pub fn new(hour: u8, minute: u8, day: u8, month: u8, year: u16) -> Self {
        debug_assert!(hour < 24, "hour out of range");
        debug_assert!(minute < 60, "minute out of range");
        Self {
            hour,
            minute,
            day,
            month,
            year,
        }
    }

    /// Capture the current local time.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn now() -> Self {
        let now = Local::now();
        Self::new(
            now.hour() as u8,
            now.minute() as u8,
            now.day() as u8,
            now.month() as u8,
            now.year() as u16,
        )
    }

    /// The five symbols of the clock face, left to right:
    /// hour tens, hour units, colon, minute tens, minute units.
    ///
    /// The tens/units split is what zero-pads single-digit values —
    /// hour 5 comes out as `[Zero, Five, ..]`.
    #[must_use]
    pub const fn symbols(&self) -> [Symbol; 5] {
        [
            Symbol::digit(self.hour / 10),
            Symbol::digit(self.hour % 10),
            Symbol::Colon,
            Symbol::digit(self.minute / 10),
            Symbol::digit(self.minute % 10),
        ]
    }

    /// The date line under the clock: `day.month.year`, no zero padding
    /// on day or month (e.g. `1.3.2024`).
    #[must_use]
    pub fn date_line(&self) -> String {
        format!("{}.{}.{}", self.day, self.month, self.year)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn symbols_zero_pad_single_digits() {
        let sample = TimeSample::new(5, 7, 1, 1, 2024);
        assert_eq!(
            sample.symbols(),
            [
                Symbol::Zero,
                Symbol::Five,
                Symbol::Colon,
                Symbol::Zero,
                Symbol::Seven
            ]
        );
    }

    #[test]
    fn symbols_two_digit_values() {
        let sample = TimeSample::new(23, 59, 31, 12, 2024);
        assert_eq!(
            sample.symbols(),
            [
                Symbol::Two,
                Symbol::Three,
                Symbol::Colon,
                Symbol::Five,
                Symbol::Nine
            ]
        );
    }

    #[test]
    fn symbols_split_is_exact_for_every_hour_and_minute() {
        for hour in 0..24u8 {
            for minute in 0..60u8 {
                let sample = TimeSample::new(hour, minute, 15, 6, 2024);
                let syms = sample.symbols();
                assert_eq!(syms[0], Symbol::digit(hour / 10));
                assert_eq!(syms[1], Symbol::digit(hour % 10));
                assert_eq!(syms[2], Symbol::Colon);
                assert_eq!(syms[3], Symbol::digit(minute / 10));
                assert_eq!(syms[4], Symbol::digit(minute % 10));
            }
        }
    }

    #[test]
    fn date_line_has_no_zero_padding() {
        let sample = TimeSample::new(9, 5, 1, 3, 2024);
        assert_eq!(sample.date_line(), "1.3.2024");
    }

    #[test]
    fn date_line_two_digit_day_and_month() {
        let sample = TimeSample::new(0, 0, 25, 12, 1999);
        assert_eq!(sample.date_line(), "25.12.1999");
    }

    #[test]
    fn now_is_in_range() {
        let sample = TimeSample::now();
        assert!(sample.hour < 24);
        assert!(sample.minute < 60);
        assert!((1..=31).contains(&sample.day));
        assert!((1..=12).contains(&sample.month));
        assert!(sample.year >= 2024);
    }
}
