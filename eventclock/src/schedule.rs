/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! The fixed daily event schedule.
//!
//! A schedule is a `'static` array of [`EventTemplate`]s authored in ascending
//! time-of-day order.  The timeline engine relies on that order to find the
//! today/tomorrow rotation point with a single backward scan, so any table
//! passed to it must satisfy [`is_time_ordered`].
//!
//! # Changing the table
//! The reminder record on the device is one byte per entry.  Whenever the
//! table changes, bump [`DATA_VERSION`] so old reminder records are discarded
//! instead of being applied to the wrong events.

// ── Constants ─────────────────────────────────────────────────────────────────

/// Reminder format tag for [`DEFAULT_SCHEDULE`].
pub const DATA_VERSION: i32 = 201_406_170;

/// Number of entries in [`DEFAULT_SCHEDULE`].
pub const EVENT_COUNT: usize = 96;

// ── EventTemplate ─────────────────────────────────────────────────────────────

/// One recurring daily event.
///
/// Times are UTC.  Templates are immutable; per-tick state (countdown,
/// reminder flag) lives in the timeline engine at the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTemplate {
    /// Start hour, `0..=23`.
    pub hour: u8,
    /// Start minute, one of `0`, `15`, `30`, `45`.
    pub minute: u8,
    /// Event name shown on the first line of a row.
    pub name: &'static str,
    /// Map the event happens in, shown on the second line.
    pub zone: &'static str,
}

impl EventTemplate {
    pub const fn new(hour: u8, minute: u8, name: &'static str, zone: &'static str) -> Self {
        Self {
            hour,
            minute,
            name,
            zone,
        }
    }

    /// Minutes since midnight.
    pub fn minute_of_day(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// `true` if hour and minute are inside their allowed values.
    pub fn is_valid(&self) -> bool {
        self.hour < 24 && self.minute % 15 == 0 && self.minute < 60
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

/// `true` if `(hour, minute)` never decreases along the table.
pub fn is_time_ordered(table: &[EventTemplate]) -> bool {
    table
        .windows(2)
        .all(|w| w[0].minute_of_day() <= w[1].minute_of_day())
}

/// `true` if every entry is valid and the table is time-ordered.
pub fn is_well_formed(table: &[EventTemplate]) -> bool {
    table.iter().all(EventTemplate::is_valid) && is_time_ordered(table)
}

// ── Default schedule ──────────────────────────────────────────────────────────

/// World-boss rotation, one event every 15 minutes (UTC).
///
/// Keep this in ascending time order.
pub static DEFAULT_SCHEDULE: [EventTemplate; EVENT_COUNT] = [
    EventTemplate::new(0, 0, "Taidha Covington", "Bloodtide Coast"),
    EventTemplate::new(0, 15, "Svanir Shaman", "Wayfarer Foothills"),
    EventTemplate::new(0, 30, "Megadestroyer", "Mount Maelstrom"),
    EventTemplate::new(0, 45, "Fire Elemental", "Metrica Province"),
    EventTemplate::new(1, 0, "The Shatterer", "Blazeridge Steppes"),
    EventTemplate::new(1, 15, "Great Jungle Wurm", "Caledon Forest"),
    EventTemplate::new(1, 30, "Modniir Ulgoth", "Hirathi Hinterlands"),
    EventTemplate::new(1, 45, "Shadow Behemoth", "Queensdale"),
    EventTemplate::new(2, 0, "Golem Mark II", "Mount Maelstrom"),
    EventTemplate::new(2, 15, "Svanir Shaman", "Wayfarer Foothills"),
    EventTemplate::new(2, 30, "Claw of Jormag", "Frostgorge Sound"),
    EventTemplate::new(2, 45, "Fire Elemental", "Metrica Province"),
    EventTemplate::new(3, 0, "Taidha Covington", "Bloodtide Coast"),
    EventTemplate::new(3, 15, "Great Jungle Wurm", "Caledon Forest"),
    EventTemplate::new(3, 30, "Megadestroyer", "Mount Maelstrom"),
    EventTemplate::new(3, 45, "Shadow Behemoth", "Queensdale"),
    EventTemplate::new(4, 0, "The Shatterer", "Blazeridge Steppes"),
    EventTemplate::new(4, 15, "Svanir Shaman", "Wayfarer Foothills"),
    EventTemplate::new(4, 30, "Modniir Ulgoth", "Hirathi Hinterlands"),
    EventTemplate::new(4, 45, "Fire Elemental", "Metrica Province"),
    EventTemplate::new(5, 0, "Golem Mark II", "Mount Maelstrom"),
    EventTemplate::new(5, 15, "Great Jungle Wurm", "Caledon Forest"),
    EventTemplate::new(5, 30, "Claw of Jormag", "Frostgorge Sound"),
    EventTemplate::new(5, 45, "Shadow Behemoth", "Queensdale"),
    EventTemplate::new(6, 0, "Taidha Covington", "Bloodtide Coast"),
    EventTemplate::new(6, 15, "Svanir Shaman", "Wayfarer Foothills"),
    EventTemplate::new(6, 30, "Megadestroyer", "Mount Maelstrom"),
    EventTemplate::new(6, 45, "Fire Elemental", "Metrica Province"),
    EventTemplate::new(7, 0, "The Shatterer", "Blazeridge Steppes"),
    EventTemplate::new(7, 15, "Great Jungle Wurm", "Caledon Forest"),
    EventTemplate::new(7, 30, "Modniir Ulgoth", "Hirathi Hinterlands"),
    EventTemplate::new(7, 45, "Shadow Behemoth", "Queensdale"),
    EventTemplate::new(8, 0, "Golem Mark II", "Mount Maelstrom"),
    EventTemplate::new(8, 15, "Svanir Shaman", "Wayfarer Foothills"),
    EventTemplate::new(8, 30, "Claw of Jormag", "Frostgorge Sound"),
    EventTemplate::new(8, 45, "Fire Elemental", "Metrica Province"),
    EventTemplate::new(9, 0, "Taidha Covington", "Bloodtide Coast"),
    EventTemplate::new(9, 15, "Great Jungle Wurm", "Caledon Forest"),
    EventTemplate::new(9, 30, "Megadestroyer", "Mount Maelstrom"),
    EventTemplate::new(9, 45, "Shadow Behemoth", "Queensdale"),
    EventTemplate::new(10, 0, "The Shatterer", "Blazeridge Steppes"),
    EventTemplate::new(10, 15, "Svanir Shaman", "Wayfarer Foothills"),
    EventTemplate::new(10, 30, "Modniir Ulgoth", "Hirathi Hinterlands"),
    EventTemplate::new(10, 45, "Fire Elemental", "Metrica Province"),
    EventTemplate::new(11, 0, "Golem Mark II", "Mount Maelstrom"),
    EventTemplate::new(11, 15, "Great Jungle Wurm", "Caledon Forest"),
    EventTemplate::new(11, 30, "Claw of Jormag", "Frostgorge Sound"),
    EventTemplate::new(11, 45, "Shadow Behemoth", "Queensdale"),
    EventTemplate::new(12, 0, "Taidha Covington", "Bloodtide Coast"),
    EventTemplate::new(12, 15, "Svanir Shaman", "Wayfarer Foothills"),
    EventTemplate::new(12, 30, "Megadestroyer", "Mount Maelstrom"),
    EventTemplate::new(12, 45, "Fire Elemental", "Metrica Province"),
    EventTemplate::new(13, 0, "The Shatterer", "Blazeridge Steppes"),
    EventTemplate::new(13, 15, "Great Jungle Wurm", "Caledon Forest"),
    EventTemplate::new(13, 30, "Modniir Ulgoth", "Hirathi Hinterlands"),
    EventTemplate::new(13, 45, "Shadow Behemoth", "Queensdale"),
    EventTemplate::new(14, 0, "Golem Mark II", "Mount Maelstrom"),
    EventTemplate::new(14, 15, "Svanir Shaman", "Wayfarer Foothills"),
    EventTemplate::new(14, 30, "Claw of Jormag", "Frostgorge Sound"),
    EventTemplate::new(14, 45, "Fire Elemental", "Metrica Province"),
    EventTemplate::new(15, 0, "Taidha Covington", "Bloodtide Coast"),
    EventTemplate::new(15, 15, "Great Jungle Wurm", "Caledon Forest"),
    EventTemplate::new(15, 30, "Megadestroyer", "Mount Maelstrom"),
    EventTemplate::new(15, 45, "Shadow Behemoth", "Queensdale"),
    EventTemplate::new(16, 0, "The Shatterer", "Blazeridge Steppes"),
    EventTemplate::new(16, 15, "Svanir Shaman", "Wayfarer Foothills"),
    EventTemplate::new(16, 30, "Modniir Ulgoth", "Hirathi Hinterlands"),
    EventTemplate::new(16, 45, "Fire Elemental", "Metrica Province"),
    EventTemplate::new(17, 0, "Golem Mark II", "Mount Maelstrom"),
    EventTemplate::new(17, 15, "Great Jungle Wurm", "Caledon Forest"),
    EventTemplate::new(17, 30, "Claw of Jormag", "Frostgorge Sound"),
    EventTemplate::new(17, 45, "Shadow Behemoth", "Queensdale"),
    EventTemplate::new(18, 0, "Taidha Covington", "Bloodtide Coast"),
    EventTemplate::new(18, 15, "Svanir Shaman", "Wayfarer Foothills"),
    EventTemplate::new(18, 30, "Megadestroyer", "Mount Maelstrom"),
    EventTemplate::new(18, 45, "Fire Elemental", "Metrica Province"),
    EventTemplate::new(19, 0, "The Shatterer", "Blazeridge Steppes"),
    EventTemplate::new(19, 15, "Great Jungle Wurm", "Caledon Forest"),
    EventTemplate::new(19, 30, "Modniir Ulgoth", "Hirathi Hinterlands"),
    EventTemplate::new(19, 45, "Shadow Behemoth", "Queensdale"),
    EventTemplate::new(20, 0, "Golem Mark II", "Mount Maelstrom"),
    EventTemplate::new(20, 15, "Svanir Shaman", "Wayfarer Foothills"),
    EventTemplate::new(20, 30, "Claw of Jormag", "Frostgorge Sound"),
    EventTemplate::new(20, 45, "Fire Elemental", "Metrica Province"),
    EventTemplate::new(21, 0, "Taidha Covington", "Bloodtide Coast"),
    EventTemplate::new(21, 15, "Great Jungle Wurm", "Caledon Forest"),
    EventTemplate::new(21, 30, "Megadestroyer", "Mount Maelstrom"),
    EventTemplate::new(21, 45, "Shadow Behemoth", "Queensdale"),
    EventTemplate::new(22, 0, "The Shatterer", "Blazeridge Steppes"),
    EventTemplate::new(22, 15, "Svanir Shaman", "Wayfarer Foothills"),
    EventTemplate::new(22, 30, "Modniir Ulgoth", "Hirathi Hinterlands"),
    EventTemplate::new(22, 45, "Fire Elemental", "Metrica Province"),
    EventTemplate::new(23, 0, "Golem Mark II", "Mount Maelstrom"),
    EventTemplate::new(23, 15, "Great Jungle Wurm", "Caledon Forest"),
    EventTemplate::new(23, 30, "Claw of Jormag", "Frostgorge Sound"),
    EventTemplate::new(23, 45, "Shadow Behemoth", "Queensdale"),
];

// ── Tests ─────────────────────────────────────────────────────────────────────
