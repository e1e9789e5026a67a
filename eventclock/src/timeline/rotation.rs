/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Rotation-point arithmetic over a circular countdown table.
//!
//! After a recompute the countdowns of a time-ordered schedule ascend along
//! the table except at one place: the boundary between events that already
//! started today (wrapped to tomorrow, large countdowns) and events still due
//! today (small countdowns).  That boundary is the *pivot*.
//!
//! ```text
//! index      0     1    ...   p-1     p     p+1   ...   N-1
//! countdown  big   big  ...   big  │ small  small  ...  small
//!                                  └─ pivot: countdown[p] < countdown[p-1]
//! ```
//!
//! The functions here are free and take plain slices so they can be tested
//! without building a schedule.

use super::{ActiveWindow, Section, SECONDS_PER_DAY};

/// Index of the rotation point.
///
/// Scans from the last index backward and returns the first `i > 0` with
/// `countdowns[i] < countdowns[i - 1]`.  When no such break exists the table
/// is ascending from index 0 and the pivot is `0`.
pub fn find_pivot(countdowns: &[i32]) -> usize {
    (1..countdowns.len())
        .rev()
        .find(|&i| countdowns[i] < countdowns[i - 1])
        .unwrap_or(0)
}

/// Number of events currently judged in progress.
///
/// * [`ActiveWindow::Single`]: exactly one (the event just before the pivot),
///   or zero for an empty table.
/// * [`ActiveWindow::Duration`]: every event whose countdown exceeds
///   `86400 − duration`, i.e. that started less than `duration` seconds ago.
pub fn active_count(countdowns: &[i32], window: ActiveWindow) -> usize {
    match window {
        ActiveWindow::Single => usize::from(!countdowns.is_empty()),
        ActiveWindow::Duration { secs } => {
            let threshold = SECONDS_PER_DAY - i64::from(secs);
            countdowns
                .iter()
                .filter(|&&c| i64::from(c) > threshold)
                .count()
        }
    }
}

/// Absolute table index for row `offset` of `section`.
///
/// Active rows run backward from the pivot (`pivot − active + offset`),
/// upcoming rows forward from it (`pivot + offset`); both wrap modulo `len`.
/// Returns `None` when `offset` is past the end of the section.
pub fn resolve(
    pivot: usize,
    len: usize,
    active: usize,
    section: Section,
    offset: usize,
) -> Option<usize> {
    let active = active.min(len);
    match section {
        Section::Active if offset < active => Some((pivot + len - active + offset) % len),
        Section::Upcoming if offset < len - active => Some((pivot + offset) % len),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
