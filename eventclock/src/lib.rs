/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! eventclock – countdown timeline for a fixed daily event schedule
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── calendar/       – wall-time fields ⇄ epoch seconds, 1901–2099
//! ├── timezone        – persisted local−UTC offset, conversions
//! ├── schedule        – event templates and the default 96-entry table
//! ├── timeline/       – countdowns, pivot, section rows, reminder alerts
//! ├── reminders       – versioned reminder-flag persistence
//! ├── storage/        – key/value persistence (memory, files)
//! ├── peer            – companion-device messages
//! ├── display         – countdown and row text
//! ├── clock           – EventClock: everything wired together
//! └── config/         – YAML host configuration
//! ```

pub mod calendar;
pub mod clock;
pub mod config;
pub mod display;
pub mod peer;
pub mod reminders;
pub mod schedule;
pub mod storage;
pub mod timeline;
pub mod timezone;
