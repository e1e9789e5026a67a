//! Event-timeline engine.
//!
//! [`Timeline`] owns one countdown and one reminder flag per schedule entry
//! and is driven once per second with the current UTC time:
//!
//! ```text
//!  tick(now) ──► recompute countdowns ──► fire lead-time alerts
//!                        │
//!  UI row (section, offset) ──► find_pivot ──► resolve ──► template/state
//! ```
//!
//! Every tick is a full recomputation, never an accumulation, so a late or
//! missed tick corrects itself on the next one.  The one exception is the
//! lead-time alerts: they fire on exact countdown values (600, 300, 1), so a
//! host clock that skips a second can skip an alert.
//!
//! # Example
//! ```rust
//! use eventclock::calendar::WallTime;
//! use eventclock::schedule::DEFAULT_SCHEDULE;
//! use eventclock::timeline::{ActiveWindow, Alert, Section, Timeline};
//!
//! let mut timeline = Timeline::new(&DEFAULT_SCHEDULE, ActiveWindow::Single);
//! let now = WallTime::new(114, 5, 17, 12, 7, 0).unwrap();
//! let mut alerts: Vec<Alert> = Vec::new();
//! timeline.recompute(&now, &mut alerts).unwrap();
//!
//! // 12:15 is the next event, 8 minutes away
//! assert_eq!(timeline.get_timer(Section::Upcoming, 0), Some(480));
//! ```

pub mod rotation;

use tracing::{debug, info};

use crate::calendar::{difference, CalendarError, WallTime};
use crate::schedule::{is_well_formed, EventTemplate};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Seconds in a day, as used for countdown wraparound.
pub const SECONDS_PER_DAY: i64 = crate::calendar::SECONDS_PER_DAY;

/// Active-event duration assumed by the duration window (15 minutes).
pub const DEFAULT_EVENT_DURATION_SECS: u32 = 15 * 60;

// ── Sections ──────────────────────────────────────────────────────────────────

/// The two row groups the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Events in progress ("Happening Now").
    Active,
    /// Events not yet started, nearest first ("Coming Up").
    Upcoming,
}

impl Section {
    /// Header text for the section.
    pub fn title(self) -> &'static str {
        match self {
            Section::Active => "Happening Now",
            Section::Upcoming => "Coming Up",
        }
    }
}

/// How many events count as "active" at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveWindow {
    /// Exactly one: the event immediately before the pivot.
    #[default]
    Single,
    /// Every event that started less than `secs` seconds ago.
    Duration { secs: u32 },
}

// ── Alerts ────────────────────────────────────────────────────────────────────

/// Haptic feedback pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    /// Single short vibration.
    Short,
    /// Two short vibrations.
    Double,
}

/// Fixed reminder lead times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadTime {
    TenMinutes,
    FiveMinutes,
    Starting,
}

impl LeadTime {
    /// All lead times, earliest first.
    pub const ALL: [LeadTime; 3] = [LeadTime::TenMinutes, LeadTime::FiveMinutes, LeadTime::Starting];

    /// Countdown value at which this reminder fires.
    pub fn seconds(self) -> i32 {
        match self {
            LeadTime::TenMinutes => 600,
            LeadTime::FiveMinutes => 300,
            LeadTime::Starting => 1,
        }
    }

    /// Pulse pattern for this reminder.
    pub fn pulse(self) -> Pulse {
        match self {
            LeadTime::TenMinutes | LeadTime::FiveMinutes => Pulse::Short,
            LeadTime::Starting => Pulse::Double,
        }
    }

    /// The lead time whose threshold equals `countdown`, if any.
    pub fn matching(countdown: i32) -> Option<LeadTime> {
        Self::ALL.into_iter().find(|l| l.seconds() == countdown)
    }
}

/// A reminder that fired during a recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    /// Absolute schedule index.
    pub index: usize,
    /// Template of the event the reminder is for.
    pub event: EventTemplate,
    pub lead: LeadTime,
}

impl Alert {
    pub fn pulse(&self) -> Pulse {
        self.lead.pulse()
    }
}

/// Receiver for fired reminders (the haptics driver on a device).
pub trait AlertSink {
    fn alert(&mut self, alert: Alert);
}

/// Sink that writes each pulse to the log; used by the host binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlerts {
    fired: usize,
}

impl LogAlerts {
    pub fn fired(&self) -> usize {
        self.fired
    }
}

impl AlertSink for LogAlerts {
    fn alert(&mut self, alert: Alert) {
        self.fired += 1;
        info!(
            index = alert.index,
            event = alert.event.name,
            zone = alert.event.zone,
            lead_secs = alert.lead.seconds(),
            pulse = ?alert.pulse(),
            "Reminder"
        );
    }
}

impl AlertSink for Vec<Alert> {
    fn alert(&mut self, alert: Alert) {
        self.push(alert);
    }
}

// ── Timeline ──────────────────────────────────────────────────────────────────

/// Countdown and reminder state for a schedule of `N` events.
///
/// Countdowns start zeroed and reminders all off; the caller loads reminders
/// from storage and then drives [`recompute`](Self::recompute) every second.
#[derive(Debug, Clone)]
pub struct Timeline<const N: usize> {
    templates: &'static [EventTemplate; N],
    countdowns: [i32; N],
    reminders: [bool; N],
    window: ActiveWindow,
}

impl<const N: usize> Timeline<N> {
    /// Creates a timeline over `templates`, which must be time-ordered.
    pub fn new(templates: &'static [EventTemplate; N], window: ActiveWindow) -> Self {
        debug_assert!(
            is_well_formed(templates),
            "schedule must be valid and in ascending time order"
        );
        Self {
            templates,
            countdowns: [0; N],
            reminders: [false; N],
            window,
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────────

    /// Recompute every countdown against `now` (UTC) and fire reminders.
    ///
    /// Each countdown lands in `1..=86400`: an event whose start time is `now`
    /// or earlier today is moved to tomorrow.  Returns the new pivot.
    ///
    /// `now` may carry denormalized fields; "today" is the date it normalizes
    /// to.  Fails, leaving every countdown untouched, if that date is outside
    /// 1901–2099.
    pub fn recompute<S: AlertSink + ?Sized>(
        &mut self,
        now: &WallTime,
        sink: &mut S,
    ) -> Result<usize, CalendarError> {
        let now = &now.normalized()?;
        let templates = self.templates;
        for (index, template) in templates.iter().enumerate() {
            let mut event =
                now.with_time_of_day(i32::from(template.hour), i32::from(template.minute), 0);

            if difference(&event, now) <= 0 {
                event = event.plus_hours(24);
            }

            let countdown = difference(&event, now) as i32;
            self.countdowns[index] = countdown;

            if !self.reminders[index] {
                continue;
            }
            if let Some(lead) = LeadTime::matching(countdown) {
                debug!(
                    event = template.name,
                    zone = template.zone,
                    countdown,
                    pulse = ?lead.pulse(),
                    "Reminder"
                );
                sink.alert(Alert {
                    index,
                    event: *template,
                    lead,
                });
            }
        }

        let pivot = self.find_pivot();
        debug!(%now, pivot, active = self.active_count(), "Recomputed countdowns");
        Ok(pivot)
    }

    // ── Rotation ──────────────────────────────────────────────────────────────

    /// Index of the first event still due today (see [`rotation::find_pivot`]).
    pub fn find_pivot(&self) -> usize {
        rotation::find_pivot(&self.countdowns)
    }

    fn active_count(&self) -> usize {
        rotation::active_count(&self.countdowns, self.window)
    }

    /// Absolute index of row `offset` in `section`, `None` past the end.
    pub fn resolve(&self, section: Section, offset: usize) -> Option<usize> {
        rotation::resolve(self.find_pivot(), N, self.active_count(), section, offset)
    }

    /// Number of rows in `section`.  Zero means the section is empty.
    pub fn get_count(&self, section: Section) -> usize {
        let active = self.active_count();
        match section {
            Section::Active => active,
            Section::Upcoming => N - active,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn get_info(&self, section: Section, offset: usize) -> Option<&'static EventTemplate> {
        let templates = self.templates;
        self.resolve(section, offset).map(|i| &templates[i])
    }

    /// Seconds until the row's next start.
    pub fn get_timer(&self, section: Section, offset: usize) -> Option<i32> {
        self.resolve(section, offset).map(|i| self.countdowns[i])
    }

    pub fn get_reminder(&self, section: Section, offset: usize) -> Option<bool> {
        self.resolve(section, offset).map(|i| self.reminders[i])
    }

    /// Flip the reminder for a row and return the new value.
    ///
    /// Only memory changes; persisting is up to the caller.
    pub fn toggle_reminder(&mut self, section: Section, offset: usize) -> Option<bool> {
        let index = self.resolve(section, offset)?;
        self.reminders[index] = !self.reminders[index];
        debug!(
            index,
            event = self.templates[index].name,
            enabled = self.reminders[index],
            "Toggled reminder"
        );
        Some(self.reminders[index])
    }

    // ── Raw state ─────────────────────────────────────────────────────────────

    pub fn countdowns(&self) -> &[i32; N] {
        &self.countdowns
    }

    pub fn reminders(&self) -> &[bool; N] {
        &self.reminders
    }

    /// Replace all reminder flags (after a load).
    pub fn set_reminders(&mut self, reminders: [bool; N]) {
        self.reminders = reminders;
    }

    pub fn window(&self) -> ActiveWindow {
        self.window
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
