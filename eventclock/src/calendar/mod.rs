//! Restricted-range wall-clock time.
//!
//! [`WallTime`] is a broken-down calendar time in the layout of a C `struct tm`
//! (year counted from 1900, month `0..=11`).  It carries no timezone: whether a
//! value is local or UTC is decided by the caller.
//!
//! # Invariants
//!
//! | Field | Guaranteed range |
//! |-------|------------------|
//! | `year` | `1..=199` (1901–2099) |
//! | `month` | `0..=11` |
//! | `day`, `hour`, `minute`, `second` | any `i32`, may be denormalized |
//!
//! Denormalized fields are what make "event at hour 24" or "minute − offset"
//! cheap: the epoch conversion is linear in them.  Call
//! [`WallTime::normalized`] to fold them back into their nominal ranges.

pub mod math;

use thiserror::Error;

use math::{civil_from_seconds, epoch_seconds};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Seconds in one calendar day.
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Smallest supported year offset from 1900 (1901).
pub const MIN_YEAR_OFFSET: i32 = 1;

/// Largest supported year offset from 1900 (2099).
pub const MAX_YEAR_OFFSET: i32 = 199;

// ── Error type ────────────────────────────────────────────────────────────────

/// Errors raised when a calendar value leaves the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Year offset (from 1900) outside `1..=199`.
    #[error("year offset {0} (from 1900) is outside the supported range 1901-2099")]
    YearOutOfRange(i32),

    /// Month outside `0..=11`.
    #[error("month index {0} is outside 0..=11")]
    MonthOutOfRange(i32),
}

// ── WallTime ──────────────────────────────────────────────────────────────────

/// Broken-down calendar time, 1901–2099.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
}

impl WallTime {
    /// Build a wall time from `struct tm`-style fields.
    ///
    /// `year` is the offset from 1900 and `month` is zero-based.  Only the year
    /// and month are range-checked; the remaining fields are taken as-is.
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> Result<Self, CalendarError> {
        if !(MIN_YEAR_OFFSET..=MAX_YEAR_OFFSET).contains(&year) {
            return Err(CalendarError::YearOutOfRange(year));
        }
        if !(0..=11).contains(&month) {
            return Err(CalendarError::MonthOutOfRange(month));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Normalized wall time for `secs` seconds since the Unix epoch.
    pub fn from_epoch_seconds(secs: i64) -> Result<Self, CalendarError> {
        let (year, month, day, hour, minute, second) = civil_from_seconds(secs)?;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Seconds since the Unix epoch.
    pub fn to_epoch_seconds(&self) -> i64 {
        epoch_seconds(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Fold every field back into its nominal range.
    ///
    /// Fails only if the carry pushes the year outside 1901–2099.
    pub fn normalized(&self) -> Result<Self, CalendarError> {
        Self::from_epoch_seconds(self.to_epoch_seconds())
    }

    /// Same date with the time of day replaced.
    pub fn with_time_of_day(&self, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            hour,
            minute,
            second,
            ..*self
        }
    }

    /// Shift by `minutes` without normalizing.
    pub fn plus_minutes(&self, minutes: i32) -> Self {
        Self {
            minute: self.minute + minutes,
            ..*self
        }
    }

    /// Shift by `hours` without normalizing.
    pub fn plus_hours(&self, hours: i32) -> Self {
        Self {
            hour: self.hour + hours,
            ..*self
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn hour(&self) -> i32 {
        self.hour
    }

    pub fn minute(&self) -> i32 {
        self.minute
    }

    pub fn second(&self) -> i32 {
        self.second
    }
}

impl std::fmt::Display for WallTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            1900 + self.year,
            self.month + 1,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}

/// `a - b` in seconds.
pub fn difference(a: &WallTime, b: &WallTime) -> i64 {
    a.to_epoch_seconds() - b.to_epoch_seconds()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn wt(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> WallTime {
        WallTime::new(year, month, day, hour, minute, second).unwrap()
    }

    #[test]
    fn new_rejects_bad_year() {
        assert_eq!(
            WallTime::new(0, 0, 1, 0, 0, 0),
            Err(CalendarError::YearOutOfRange(0))
        );
        assert_eq!(
            WallTime::new(200, 0, 1, 0, 0, 0),
            Err(CalendarError::YearOutOfRange(200))
        );
    }

    #[test]
    fn new_rejects_bad_month() {
        assert_eq!(
            WallTime::new(114, 12, 1, 0, 0, 0),
            Err(CalendarError::MonthOutOfRange(12))
        );
        assert_eq!(
            WallTime::new(114, -1, 1, 0, 0, 0),
            Err(CalendarError::MonthOutOfRange(-1))
        );
    }

    #[test]
    fn difference_is_signed() {
        let a = wt(114, 5, 17, 12, 0, 0);
        let b = wt(114, 5, 17, 11, 59, 30);
        assert_eq!(difference(&a, &b), 30);
        assert_eq!(difference(&b, &a), -30);
    }

    #[test]
    fn minute_overflow_cascades_into_next_year() {
        // 2013-12-31 23:30 + 45 minutes → 2014-01-01 00:15
        let t = wt(113, 11, 31, 23, 30, 0).plus_minutes(45).normalized().unwrap();
        assert_eq!(t, wt(114, 0, 1, 0, 15, 0));
    }

    #[test]
    fn minute_underflow_cascades_into_previous_month() {
        // 2016-03-01 00:10 − 20 minutes → 2016-02-29 23:50 (leap year)
        let t = wt(116, 2, 1, 0, 10, 0).plus_minutes(-20).normalized().unwrap();
        assert_eq!(t, wt(116, 1, 29, 23, 50, 0));
    }

    #[test]
    fn hour_24_is_next_day() {
        let t = wt(114, 5, 30, 0, 0, 0).plus_hours(24).normalized().unwrap();
        assert_eq!(t, wt(114, 6, 1, 0, 0, 0));
    }

    #[test]
    fn normalized_fails_past_2099() {
        let t = wt(199, 11, 31, 23, 59, 0).plus_minutes(1);
        assert_eq!(t.normalized(), Err(CalendarError::YearOutOfRange(200)));
    }

    #[test]
    fn display_is_iso_like() {
        assert_eq!(wt(114, 5, 17, 9, 5, 3).to_string(), "2014-06-17 09:05:03");
    }
}
