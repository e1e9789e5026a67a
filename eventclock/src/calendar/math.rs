/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Pure calendar arithmetic: wall-clock fields ⇄ seconds since the Unix epoch.
//!
//! These are free functions rather than methods so they can be used and tested
//! independently of [`WallTime`](super::WallTime).  The supported range is
//! 1901–2099, where "divisible by 4" is the exact Gregorian leap-year rule.

use super::{CalendarError, MAX_YEAR_OFFSET, MIN_YEAR_OFFSET, SECONDS_PER_DAY};

/// Cumulative day count before the first of each month in a common year.
const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Returns `true` if `year` (full year, e.g. `2024`) is a leap year.
///
/// Only valid for 1901–2099.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0
}

/// Days from 1970-01-01 to January 1st of `year` (negative before 1970).
pub fn days_before_year(year: i32) -> i64 {
    days_before(i64::from(year))
}

/// Same count over `i64` years, so out-of-range estimates cannot wrap.
fn days_before(year: i64) -> i64 {
    // One leap day for every multiple of 4 in [1970, year); `div_euclid` keeps
    // the count correct for years before 1970 as well.
    (year - 1970) * 365 + (year - 1969).div_euclid(4)
}

/// Seconds since the epoch for the given fields.
///
/// `month` must already be in `0..=11`; every other field may lie outside its
/// nominal range (hour 24+, negative minutes, ...) and is folded in linearly.
///
/// # Panics
/// If `month` is outside `0..=11`.  [`WallTime`](super::WallTime) checks it on
/// construction, which is the only caller.
pub(super) fn epoch_seconds(
    year_offset: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
) -> i64 {
    debug_assert!((0..=11).contains(&month), "month {month} outside 0..=11");
    let year = 1900 + year_offset;
    let leap_day = i64::from(is_leap_year(year) && month >= 2);

    let days = days_before_year(year)
        + DAYS_BEFORE_MONTH[month as usize]
        + leap_day
        + i64::from(day)
        - 1;

    days * SECONDS_PER_DAY
        + i64::from(hour) * 3_600
        + i64::from(minute) * 60
        + i64::from(second)
}

/// Normalized fields `(year_offset, month, day, hour, minute, second)` for
/// `secs` seconds since the epoch.
///
/// Returns [`CalendarError::YearOutOfRange`] when the result falls outside
/// 1901–2099.
pub fn civil_from_seconds(secs: i64) -> Result<(i32, i32, i32, i32, i32, i32), CalendarError> {
    let days = secs.div_euclid(SECONDS_PER_DAY);
    let rem = secs.rem_euclid(SECONDS_PER_DAY);

    // Estimate, then correct by at most one year in either direction.  All in
    // i64: `days` spans about ±2.9e11 years for extreme inputs.
    let mut year = 1970 + (days * 4).div_euclid(1_461);
    while days_before(year) > days {
        year -= 1;
    }
    while days_before(year + 1) <= days {
        year += 1;
    }

    let year_offset = year - 1900;
    if !(i64::from(MIN_YEAR_OFFSET)..=i64::from(MAX_YEAR_OFFSET)).contains(&year_offset) {
        let reported = i32::try_from(year_offset)
            .unwrap_or(if year_offset < 0 { i32::MIN } else { i32::MAX });
        return Err(CalendarError::YearOutOfRange(reported));
    }
    let year = year as i32;
    let year_offset = year_offset as i32;

    let leap = is_leap_year(year);
    let yday = days - days_before_year(year);

    let mut month = 11;
    while month > 0 {
        let start = DAYS_BEFORE_MONTH[month] + i64::from(leap && month >= 2);
        if yday >= start {
            break;
        }
        month -= 1;
    }
    let month_start = DAYS_BEFORE_MONTH[month] + i64::from(leap && month >= 2);

    Ok((
        year_offset,
        month as i32,
        (yday - month_start + 1) as i32,
        (rem / 3_600) as i32,
        ((rem / 60) % 60) as i32,
        (rem % 60) as i32,
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    // ── is_leap_year ──────────────────────────────────────────────────────────

    #[test]
    fn leap_years_in_range() {
        assert!(is_leap_year(1904));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1970));
        assert!(!is_leap_year(2099));
    }

    // ── days_before_year ──────────────────────────────────────────────────────

    #[test]
    fn days_before_year_around_epoch() {
        assert_eq!(days_before_year(1970), 0);
        assert_eq!(days_before_year(1971), 365);
        assert_eq!(days_before_year(1973), 3 * 365 + 1);
        assert_eq!(days_before_year(1969), -365);
        assert_eq!(days_before_year(1968), -731);
    }

    // ── epoch_seconds ─────────────────────────────────────────────────────────

    #[test]
    fn epoch_is_zero() {
        assert_eq!(epoch_seconds(70, 0, 1, 0, 0, 0), 0);
    }

    #[test]
    fn known_timestamps() {
        // 2000-02-29 12:00:00 UTC
        assert_eq!(epoch_seconds(100, 1, 29, 12, 0, 0), 951_825_600);
        // 2014-06-17 00:00:00 UTC
        assert_eq!(epoch_seconds(114, 5, 17, 0, 0, 0), 1_402_963_200);
    }

    #[test]
    fn matches_chrono_for_every_day_in_range() {
        let mut date = NaiveDate::from_ymd_opt(1901, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2099, 12, 31).unwrap();
        while date <= last {
            let expected = date.and_hms_opt(13, 37, 42).unwrap().and_utc().timestamp();
            let actual = epoch_seconds(
                date.year() - 1900,
                date.month0() as i32,
                date.day() as i32,
                13,
                37,
                42,
            );
            assert_eq!(actual, expected, "mismatch on {date}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn out_of_range_fields_fold_in_linearly() {
        let base = epoch_seconds(114, 5, 17, 23, 0, 0);
        // hour 24 on the 17th == hour 0 on the 18th
        assert_eq!(epoch_seconds(114, 5, 17, 24, 0, 0), epoch_seconds(114, 5, 18, 0, 0, 0));
        assert_eq!(epoch_seconds(114, 5, 17, 23, 90, 0), base + 90 * 60);
        assert_eq!(epoch_seconds(114, 5, 17, 23, -30, 0), base - 30 * 60);
    }

    #[test]
    #[should_panic]
    fn month_past_december_panics() {
        epoch_seconds(114, 12, 1, 0, 0, 0);
    }

    // ── civil_from_seconds ────────────────────────────────────────────────────

    #[test]
    fn civil_from_epoch_zero() {
        assert_eq!(civil_from_seconds(0).unwrap(), (70, 0, 1, 0, 0, 0));
    }

    #[test]
    fn civil_handles_leap_day_and_new_year() {
        assert_eq!(civil_from_seconds(951_825_600).unwrap(), (100, 1, 29, 12, 0, 0));
        // 1999-12-31 23:59:59
        assert_eq!(civil_from_seconds(946_684_799).unwrap(), (99, 11, 31, 23, 59, 59));
        // 2000-01-01 00:00:00
        assert_eq!(civil_from_seconds(946_684_800).unwrap(), (100, 0, 1, 0, 0, 0));
    }

    #[test]
    fn civil_before_epoch() {
        // 1969-12-31 23:59:59
        assert_eq!(civil_from_seconds(-1).unwrap(), (69, 11, 31, 23, 59, 59));
    }

    #[test]
    fn civil_inverts_epoch_seconds_for_every_day_in_range() {
        let mut date = NaiveDate::from_ymd_opt(1901, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2099, 12, 31).unwrap();
        while date <= last {
            let secs = date.and_hms_opt(6, 5, 4).unwrap().and_utc().timestamp();
            let fields = civil_from_seconds(secs).unwrap();
            assert_eq!(
                fields,
                (
                    date.year() - 1900,
                    date.month0() as i32,
                    date.day() as i32,
                    6,
                    5,
                    4
                ),
                "mismatch on {date}"
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn civil_rejects_years_outside_range() {
        // 1900-12-31 23:59:59
        let before = epoch_seconds(1, 0, 1, 0, 0, 0) - 1;
        assert_eq!(civil_from_seconds(before), Err(CalendarError::YearOutOfRange(0)));
        // 2100-01-01 00:00:00
        let after = epoch_seconds(199, 11, 31, 23, 59, 59) + 1;
        assert_eq!(civil_from_seconds(after), Err(CalendarError::YearOutOfRange(200)));
    }

    #[test]
    fn civil_rejects_extreme_inputs() {
        assert_eq!(
            civil_from_seconds(i64::MAX),
            Err(CalendarError::YearOutOfRange(i32::MAX))
        );
        assert_eq!(
            civil_from_seconds(i64::MIN),
            Err(CalendarError::YearOutOfRange(i32::MIN))
        );
        assert_eq!(
            civil_from_seconds(i64::MAX / 2),
            Err(CalendarError::YearOutOfRange(i32::MAX))
        );
        // A few thousand years out still reports the actual year
        let far = days_before_year(5000) * SECONDS_PER_DAY;
        assert_eq!(civil_from_seconds(far), Err(CalendarError::YearOutOfRange(3100)));
    }
}
