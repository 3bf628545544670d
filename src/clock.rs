//! Wall-clock sampling and the derived date record.
//!
//! The renderer never reads the OS clock directly: it goes through the
//! [`Clock`] trait so tests can inject fixed or scripted clocks and drive
//! calendar rollovers deterministically.
//!
//! # Fail-soft contract
//!
//! A clock read failure must never take down the tick loop. On error the
//! sampler keeps the last known [`DateInfo`] and reports a zeroed time
//! (hands at 12:00:00) for that frame.

use core::fmt::Write as _;

use chrono::{Datelike, Local, Timelike};
use heapless::String;
use log::warn;

use crate::error::FaceError;

/// Weekday abbreviations indexed by `weekday_index` (0 = Sunday).
pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month abbreviations indexed by `month_index` (0 = January).
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One decomposed local calendar reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub day_of_month: u8,
    /// 0-based month, `0..=11`.
    pub month_index: u8,
    /// Days since Sunday, `0..=6`.
    pub weekday_index: u8,
}

/// Source of local calendar time.
pub trait Clock {
    fn now(&self) -> Result<WallTime, FaceError>;
}

/// The real OS clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<WallTime, FaceError> {
        let now = Local::now();
        Ok(WallTime {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
            day_of_month: now.day() as u8,
            month_index: now.month0() as u8,
            weekday_index: now.weekday().num_days_from_sunday() as u8,
        })
    }
}

/// Date readout state: zero-padded day text plus month/weekday indices.
///
/// All three fields are refreshed together when the calendar day changes;
/// the record is never partially updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInfo {
    pub day_text: String<2>,
    pub month_index: u8,
    pub weekday_index: u8,
}

impl DateInfo {
    fn from_wall_time(time: &WallTime) -> Self {
        Self {
            day_text: format_day(time.day_of_month),
            month_index: time.month_index,
            weekday_index: time.weekday_index,
        }
    }

    /// Placeholder used when the clock is unavailable at startup. Replaced
    /// by the first successful sample.
    fn startup_default() -> Self {
        Self {
            day_text: format_day(1),
            month_index: 0,
            weekday_index: 0,
        }
    }

    /// Whether this record still describes the day of `time`.
    fn matches(&self, time: &WallTime) -> bool {
        self.day_text == format_day(time.day_of_month)
            && self.month_index == time.month_index
            && self.weekday_index == time.weekday_index
    }

    pub fn weekday_abbrev(&self) -> &'static str {
        WEEKDAYS[self.weekday_index as usize % WEEKDAYS.len()]
    }

    pub fn month_abbrev(&self) -> &'static str {
        MONTHS[self.month_index as usize % MONTHS.len()]
    }
}

fn format_day(day_of_month: u8) -> String<2> {
    let mut text: String<2> = String::new();
    write!(text, "{:02}", day_of_month.min(99)).ok();
    text
}

/// Time fields handed to the renderer on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Set when this sample crossed a calendar-day boundary and the
    /// sampler's [`DateInfo`] was refreshed.
    pub day_changed: bool,
}

impl TimeSample {
    /// Fallback sample for a failed clock read: hands at 12:00:00.
    const fn zeroed() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            day_changed: false,
        }
    }
}

/// Reads the clock once per tick and maintains the [`DateInfo`] record.
#[derive(Debug)]
pub struct TimeSampler<C: Clock> {
    clock: C,
    date: DateInfo,
}

impl<C: Clock> TimeSampler<C> {
    /// Create the sampler and initialize [`DateInfo`] from the current time.
    pub fn new(clock: C) -> Self {
        let date = match clock.now() {
            Ok(time) => DateInfo::from_wall_time(&time),
            Err(err) => {
                warn!("{err} at startup, date block starts from placeholder");
                DateInfo::startup_default()
            }
        };
        Self { clock, date }
    }

    /// Read the clock and decompose it into hour/minute/second plus a
    /// day-changed signal. Refreshes [`DateInfo`] atomically when the
    /// calendar day rolled over.
    pub fn sample(&mut self) -> TimeSample {
        match self.clock.now() {
            Ok(time) => {
                let day_changed = !self.date.matches(&time);
                if day_changed {
                    self.date = DateInfo::from_wall_time(&time);
                }
                TimeSample {
                    hour: time.hour,
                    minute: time.minute,
                    second: time.second,
                    day_changed,
                }
            }
            Err(err) => {
                warn!("{err}, reusing last known date");
                TimeSample::zeroed()
            }
        }
    }

    pub fn date_info(&self) -> &DateInfo {
        &self.date
    }
}

// =============================================================================
// Test Clocks
// =============================================================================


// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::testing::{FixedClock, ScriptClock, wall};
    use super::*;

    // -------------------------------------------------------------------------
    // DateInfo Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_day_text_is_zero_padded() {
        let date = DateInfo::from_wall_time(&wall(9, 0, 0, 5, 2, 3));
        assert_eq!(date.day_text.as_str(), "05", "Single-digit days are zero-padded");

        let date = DateInfo::from_wall_time(&wall(9, 0, 0, 31, 11, 0));
        assert_eq!(date.day_text.as_str(), "31");
    }

    #[test]
    fn test_abbreviation_lookup() {
        let date = DateInfo::from_wall_time(&wall(9, 0, 0, 5, 2, 3));
        assert_eq!(date.weekday_abbrev(), "Wed");
        assert_eq!(date.month_abbrev(), "Mar");
    }

    #[test]
    fn test_string_tables_cover_calendar() {
        assert_eq!(WEEKDAYS.len(), 7);
        assert_eq!(MONTHS.len(), 12);
        assert_eq!(WEEKDAYS[0], "Sun", "Index 0 is Sunday");
        assert_eq!(MONTHS[0], "Jan", "Index 0 is January");
    }

    // -------------------------------------------------------------------------
    // Sampling Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_sample_extracts_time_fields() {
        let mut sampler = TimeSampler::new(FixedClock(wall(3, 15, 30, 5, 2, 3)));
        let sample = sampler.sample();
        assert_eq!((sample.hour, sample.minute, sample.second), (3, 15, 30));
    }

    #[test]
    fn test_same_day_samples_are_idempotent() {
        let mut sampler = TimeSampler::new(FixedClock(wall(3, 15, 30, 5, 2, 3)));
        let before = sampler.date_info().clone();

        for _ in 0..10 {
            let sample = sampler.sample();
            assert!(!sample.day_changed, "No rollover within the same day");
        }
        assert_eq!(*sampler.date_info(), before, "DateInfo must be untouched");
    }

    #[test]
    fn test_midnight_rollover_updates_all_fields_atomically() {
        // 23:59:59 Sat Jan 31 -> 00:00:00 Sun Feb 01.
        let clock = ScriptClock::new(vec![
            Ok(wall(23, 59, 59, 31, 0, 6)),
            Ok(wall(23, 59, 59, 31, 0, 6)),
            Ok(wall(0, 0, 0, 1, 1, 0)),
        ]);
        let mut sampler = TimeSampler::new(clock);

        assert!(!sampler.sample().day_changed);

        let rollover = sampler.sample();
        assert!(rollover.day_changed, "Midnight crossing must signal a day change");

        let date = sampler.date_info();
        assert_eq!(date.day_text.as_str(), "01");
        assert_eq!(date.month_index, 1);
        assert_eq!(date.weekday_index, 0);
    }

    #[test]
    fn test_rollover_happens_exactly_once() {
        let clock = ScriptClock::new(vec![
            Ok(wall(23, 59, 59, 4, 2, 2)),
            Ok(wall(0, 0, 0, 5, 2, 3)),
            Ok(wall(0, 0, 1, 5, 2, 3)),
            Ok(wall(0, 0, 2, 5, 2, 3)),
        ]);
        let mut sampler = TimeSampler::new(clock);

        let changes: Vec<bool> = (0..3).map(|_| sampler.sample().day_changed).collect();
        assert_eq!(
            changes,
            vec![true, false, false],
            "DateInfo updates exactly once per calendar day"
        );
    }

    // -------------------------------------------------------------------------
    // Fail-Soft Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_clock_failure_reuses_last_date_and_zeroes_time() {
        let clock = ScriptClock::new(vec![Ok(wall(18, 45, 12, 24, 11, 4))]);
        let mut sampler = TimeSampler::new(clock);
        let before = sampler.date_info().clone();

        // The script is exhausted: every further read fails.
        let sample = sampler.sample();
        assert_eq!(sample, TimeSample::zeroed(), "Failed reads report 12:00:00");
        assert_eq!(*sampler.date_info(), before, "Last known DateInfo survives");
    }

    #[test]
    fn test_startup_with_dead_clock_uses_placeholder() {
        let sampler = TimeSampler::new(ScriptClock::new(vec![]));
        let date = sampler.date_info();
        assert_eq!(date.day_text.as_str(), "01");
        assert_eq!(date.weekday_abbrev(), "Sun");
        assert_eq!(date.month_abbrev(), "Jan");
    }

    #[test]
    fn test_recovery_after_clock_failure() {
        let clock = ScriptClock::new(vec![
            Ok(wall(10, 0, 0, 5, 2, 3)),
            Err(FaceError::ClockUnavailable),
            Ok(wall(10, 0, 2, 5, 2, 3)),
        ]);
        let mut sampler = TimeSampler::new(clock);

        assert_eq!(sampler.sample(), TimeSample::zeroed());

        let recovered = sampler.sample();
        assert_eq!((recovered.hour, recovered.minute, recovered.second), (10, 0, 2));
        assert!(!recovered.day_changed, "Same day after recovery");
    }
}
