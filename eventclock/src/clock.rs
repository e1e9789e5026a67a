/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Top-level clock: one persistent store, the timezone state and the
//! timeline, wired together the way a device app drives them.
//!
//! ```text
//!  start() ─► load reminders
//!  every second: on_second_tick(local) ─► local→UTC ─► Timeline::recompute
//!  companion:    on_peer_message(msg)  ─► TimezoneState::set_offset
//!  UI select:    toggle_reminder(section, row)
//!  exit:         shutdown() ─► save reminders
//! ```

use tracing::{debug, error, info, warn};

use crate::calendar::{CalendarError, WallTime};
use crate::display::format_row;
use crate::peer::{parse_tz_offset, PeerMessage};
use crate::reminders::ReminderStore;
use crate::schedule::{EventTemplate, DATA_VERSION, DEFAULT_SCHEDULE, EVENT_COUNT};
use crate::storage::PersistentStore;
use crate::timeline::{ActiveWindow, AlertSink, Section, Timeline};
use crate::timezone::{Offset, TimezoneError, TimezoneState};

/// Result of one second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No timezone offset is known; timers must not be shown.
    AwaitingTimezone,
    /// Countdowns were recomputed.
    Updated { pivot: usize },
    /// The local time could not be converted (outside 1901-2099).
    ClockOutOfRange,
}

/// Device-app state for a schedule of `N` events.
#[derive(Debug)]
pub struct EventClock<S: PersistentStore, const N: usize> {
    store: S,
    timezone: TimezoneState,
    timeline: Timeline<N>,
    reminders: ReminderStore,
}

impl<S: PersistentStore> EventClock<S, EVENT_COUNT> {
    /// Clock over [`DEFAULT_SCHEDULE`].
    pub fn with_default_schedule(store: S, window: ActiveWindow) -> Self {
        Self::new(store, &DEFAULT_SCHEDULE, DATA_VERSION, window)
    }
}

impl<S: PersistentStore, const N: usize> EventClock<S, N> {
    /// Clock over `templates`, whose saved reminders are tagged `data_version`.
    pub fn new(
        store: S,
        templates: &'static [EventTemplate; N],
        data_version: i32,
        window: ActiveWindow,
    ) -> Self {
        Self {
            store,
            timezone: TimezoneState::new(),
            timeline: Timeline::new(templates, window),
            reminders: ReminderStore::new(data_version),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    /// Restore saved reminders.  Called once before the first tick.
    pub fn start(&mut self) {
        let flags = self.reminders.load(&self.store);
        self.timeline.set_reminders(flags);
        info!(
            events = N,
            window = ?self.timeline.window(),
            have_offset = self.timezone.have_offset(&self.store),
            "Event clock started"
        );
    }

    /// Recompute the timeline for the device's local time.
    pub fn on_second_tick<A: AlertSink + ?Sized>(
        &mut self,
        local: &WallTime,
        sink: &mut A,
    ) -> TickOutcome {
        match self.timezone.convert_local_to_utc(&self.store, local) {
            Ok(utc) => match self.timeline.recompute(&utc, sink) {
                Ok(pivot) => TickOutcome::Updated { pivot },
                Err(e) => {
                    warn!(%utc, "Skipping tick: {e}");
                    TickOutcome::ClockOutOfRange
                }
            },
            Err(TimezoneError::NotReady) => {
                debug!(%local, "Waiting for timezone offset");
                TickOutcome::AwaitingTimezone
            }
            Err(TimezoneError::Calendar(e)) => {
                warn!(%local, "Skipping tick: {e}");
                TickOutcome::ClockOutOfRange
            }
        }
    }

    /// Recompute for a host that already supplies UTC.  Needs no offset.
    ///
    /// # Errors
    /// [`CalendarError::YearOutOfRange`] if `utc` normalizes outside 1901–2099.
    pub fn on_utc_tick<A: AlertSink + ?Sized>(
        &mut self,
        utc: &WallTime,
        sink: &mut A,
    ) -> Result<usize, CalendarError> {
        self.timeline.recompute(utc, sink)
    }

    /// Apply a message from the companion.
    ///
    /// Returns the offset that was applied, or `None` if the message was
    /// dropped.  A failed write keeps the new offset for this session.
    pub fn on_peer_message(&mut self, msg: &PeerMessage) -> Option<i16> {
        let minutes = match parse_tz_offset(msg) {
            Ok(minutes) => minutes,
            Err(e) => {
                warn!("Dropping peer message: {e}");
                return None;
            }
        };
        if let Err(e) = self.timezone.set_offset(&mut self.store, i32::from(minutes)) {
            error!(minutes, "Timezone offset not persisted: {e}");
        }
        Some(minutes)
    }

    /// Flip the reminder for a row.  Memory only; see [`save_reminders`](Self::save_reminders).
    pub fn toggle_reminder(&mut self, section: Section, offset: usize) -> Option<bool> {
        self.timeline.toggle_reminder(section, offset)
    }

    /// Persist the current reminder flags.  Returns `false` if the write failed.
    pub fn save_reminders(&mut self) -> bool {
        match self.reminders.save(&mut self.store, self.timeline.reminders()) {
            Ok(()) => true,
            Err(e) => {
                error!("Reminders not saved: {e}");
                false
            }
        }
    }

    /// Save reminders before exit.
    pub fn shutdown(&mut self) -> bool {
        info!("Event clock shutting down");
        self.save_reminders()
    }

    // ── Read access ───────────────────────────────────────────────────────────

    pub fn offset(&mut self) -> Offset {
        self.timezone.get_offset(&self.store)
    }

    pub fn timeline(&self) -> &Timeline<N> {
        &self.timeline
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the clock and hand back its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Rendered text of one row, `None` past the end of the section.
    ///
    /// Active rows carry no countdown; their timer already points at
    /// tomorrow's occurrence.
    pub fn row_text(&self, section: Section, offset: usize) -> Option<String> {
        let event = self.timeline.get_info(section, offset)?;
        let reminder = self.timeline.get_reminder(section, offset)?;
        let countdown = match section {
            Section::Active => None,
            Section::Upcoming => Some(self.timeline.get_timer(section, offset)?),
        };
        Some(format_row(event, countdown, reminder))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
