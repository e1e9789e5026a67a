//! Text rendering helpers for timeline rows.

use std::fmt::Write as _;

use crate::schedule::EventTemplate;

/// Formats a countdown as `H:MM:SS` from one hour up, `M:SS` below.
///
/// Negative values are clamped to zero.
pub fn format_countdown(secs: i32) -> String {
    let secs = secs.max(0);
    let (hours, minutes, seconds) = (secs / 3600, secs / 60 % 60, secs % 60);
    if secs >= 3600 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// One menu row: `"<countdown>  <name> (<zone>)"`, with a bell marker when
/// the reminder is on.  Rows for events in progress pass `None` and show no
/// countdown.
pub fn format_row(event: &EventTemplate, countdown: Option<i32>, reminder: bool) -> String {
    let mut row = countdown.map(format_countdown).unwrap_or_default();
    if !row.is_empty() {
        row.push_str("  ");
    }
    let _ = write!(row, "{} ({})", event.name, event.zone);
    if reminder {
        row.push_str(" [*]");
    }
    row
}
