/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Timezone offset state and local ⇄ UTC conversion.
//!
//! The device clock only knows local time.  The companion phone tells us the
//! offset once, we persist it, and every later run picks it up lazily from
//! storage on first use.
//!
//! The offset is **local minus UTC** in minutes (UTC+2 → `120`, UTC−5 →
//! `-300`).  Until an offset is known every conversion returns
//! [`TimezoneError::NotReady`] and the UI must not render timers.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::calendar::{CalendarError, WallTime};
use crate::storage::{PersistKey, PersistentStore, StorageError};

// ── Offset ────────────────────────────────────────────────────────────────────

/// Known or unknown timezone offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Offset {
    /// No offset received or stored yet.
    #[default]
    Unset,
    /// Minutes to add to UTC to get local time.
    Minutes(i32),
}

impl Offset {
    pub fn minutes(self) -> Option<i32> {
        match self {
            Offset::Unset => None,
            Offset::Minutes(m) => Some(m),
        }
    }
}

// ── Error type ────────────────────────────────────────────────────────────────

/// Failure converting between local and UTC wall time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimezoneError {
    /// No offset is known yet.
    #[error("timezone offset is not available yet")]
    NotReady,

    /// The shifted time fell outside the supported calendar range.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

// ── TimezoneState ─────────────────────────────────────────────────────────────

/// Process-wide timezone offset with lazy load from storage.
#[derive(Debug, Default)]
pub struct TimezoneState {
    offset: Offset,
    load_attempted: bool,
}

impl TimezoneState {
    /// Creates an unset state; nothing is read until the first query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset, loading it from `store` on the first call.
    ///
    /// A missing or malformed record leaves the offset [`Offset::Unset`].
    pub fn get_offset<S: PersistentStore + ?Sized>(&mut self, store: &S) -> Offset {
        if !self.load_attempted {
            self.load_attempted = true;
            match store.read_int(PersistKey::TzOffset) {
                Ok(minutes) => {
                    info!(minutes, "Got timezone offset from storage");
                    self.offset = Offset::Minutes(minutes);
                }
                Err(StorageError::Missing(_)) => {
                    debug!("No timezone offset in storage");
                }
                Err(e) => {
                    warn!("Ignoring stored timezone offset: {e}");
                }
            }
        }
        self.offset
    }

    /// `true` once an offset is known.
    pub fn have_offset<S: PersistentStore + ?Sized>(&mut self, store: &S) -> bool {
        self.get_offset(store) != Offset::Unset
    }

    /// Record a new offset and persist it.
    ///
    /// Does nothing when `minutes` equals the current offset.  The in-memory
    /// value is updated before the write, so a storage failure still leaves
    /// the offset usable for the rest of the session.
    pub fn set_offset<S: PersistentStore + ?Sized>(
        &mut self,
        store: &mut S,
        minutes: i32,
    ) -> Result<(), StorageError> {
        if self.get_offset(store) == Offset::Minutes(minutes) {
            return Ok(());
        }
        self.offset = Offset::Minutes(minutes);
        info!(minutes, "Writing timezone offset to storage");
        store.write_int(PersistKey::TzOffset, minutes)
    }

    /// Convert a local wall time to UTC.
    pub fn convert_local_to_utc<S: PersistentStore + ?Sized>(
        &mut self,
        store: &S,
        local: &WallTime,
    ) -> Result<WallTime, TimezoneError> {
        let minutes = self.get_offset(store).minutes().ok_or(TimezoneError::NotReady)?;
        Ok(local.plus_minutes(-minutes).normalized()?)
    }

    /// Convert a UTC wall time to local.
    pub fn convert_utc_to_local<S: PersistentStore + ?Sized>(
        &mut self,
        store: &S,
        utc: &WallTime,
    ) -> Result<WallTime, TimezoneError> {
        let minutes = self.get_offset(store).minutes().ok_or(TimezoneError::NotReady)?;
        Ok(utc.plus_minutes(minutes).normalized()?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn wt(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> WallTime {
        WallTime::new(year, month, day, hour, minute, second).unwrap()
    }

    #[test]
    fn unset_until_something_is_stored() {
        let store = MemoryStore::new();
        let mut tz = TimezoneState::new();
        assert_eq!(tz.get_offset(&store), Offset::Unset);
        assert!(!tz.have_offset(&store));
    }

    #[test]
    fn lazily_loads_from_storage() {
        let mut store = MemoryStore::new();
        store.write_int(PersistKey::TzOffset, -300).unwrap();
        let mut tz = TimezoneState::new();
        assert_eq!(tz.get_offset(&store), Offset::Minutes(-300));
    }

    #[test]
    fn load_happens_once_per_lifetime() {
        let mut store = MemoryStore::new();
        let mut tz = TimezoneState::new();
        assert_eq!(tz.get_offset(&store), Offset::Unset);
        // Written behind the state's back after the first query
        store.write_int(PersistKey::TzOffset, 60).unwrap();
        assert_eq!(tz.get_offset(&store), Offset::Unset);
    }

    #[test]
    fn malformed_record_is_unset() {
        let mut store = MemoryStore::new();
        store.write_data(PersistKey::TzOffset, &[0xBE, 0xEF]).unwrap();
        let mut tz = TimezoneState::new();
        assert_eq!(tz.get_offset(&store), Offset::Unset);
    }

    #[test]
    fn set_offset_persists_and_overwrites() {
        let mut store = MemoryStore::new();
        let mut tz = TimezoneState::new();
        tz.set_offset(&mut store, 60).unwrap();
        assert_eq!(store.read_int(PersistKey::TzOffset).unwrap(), 60);
        tz.set_offset(&mut store, -420).unwrap();
        assert_eq!(store.read_int(PersistKey::TzOffset).unwrap(), -420);
        assert_eq!(tz.get_offset(&store), Offset::Minutes(-420));
    }

    #[test]
    fn set_offset_unchanged_does_not_write() {
        let mut store = MemoryStore::new();
        store.write_int(PersistKey::TzOffset, 60).unwrap();
        // Any write would now be short, so Ok proves nothing was written
        store.set_write_limit(Some(0));

        let mut tz = TimezoneState::new();
        assert!(tz.set_offset(&mut store, 60).is_ok());
        assert!(tz.set_offset(&mut store, 61).is_err());
    }

    #[test]
    fn set_offset_keeps_memory_value_on_write_failure() {
        let mut store = MemoryStore::with_write_limit(2);
        let mut tz = TimezoneState::new();
        let err = tz.set_offset(&mut store, 90).unwrap_err();
        assert!(matches!(err, StorageError::ShortWrite { .. }));
        assert_eq!(tz.get_offset(&store), Offset::Minutes(90));
    }

    #[test]
    fn conversions_fail_while_unset() {
        let store = MemoryStore::new();
        let mut tz = TimezoneState::new();
        let t = wt(114, 5, 17, 12, 0, 0);
        assert_eq!(
            tz.convert_local_to_utc(&store, &t),
            Err(TimezoneError::NotReady)
        );
        assert_eq!(
            tz.convert_utc_to_local(&store, &t),
            Err(TimezoneError::NotReady)
        );
    }

    #[test]
    fn local_to_utc_subtracts_offset_across_midnight() {
        let mut store = MemoryStore::new();
        let mut tz = TimezoneState::new();
        tz.set_offset(&mut store, 120).unwrap();
        // 2014-01-01 01:30 at UTC+2 → 2013-12-31 23:30 UTC
        let utc = tz
            .convert_local_to_utc(&store, &wt(114, 0, 1, 1, 30, 0))
            .unwrap();
        assert_eq!(utc, wt(113, 11, 31, 23, 30, 0));
    }

    #[test]
    fn utc_to_local_adds_offset() {
        let mut store = MemoryStore::new();
        let mut tz = TimezoneState::new();
        tz.set_offset(&mut store, -300).unwrap();
        // 2014-03-01 02:00 UTC at UTC−5 → 2014-02-28 21:00
        let local = tz
            .convert_utc_to_local(&store, &wt(114, 2, 1, 2, 0, 0))
            .unwrap();
        assert_eq!(local, wt(114, 1, 28, 21, 0, 0));
    }

    #[test]
    fn round_trip_is_identity() {
        let mut store = MemoryStore::new();
        let mut tz = TimezoneState::new();
        for offset in [-720, -570, -300, 0, 45, 330, 840] {
            tz.set_offset(&mut store, offset).unwrap();
            for t in [
                wt(114, 0, 1, 0, 0, 0),
                wt(116, 1, 29, 23, 59, 59),
                wt(99, 11, 31, 12, 30, 15),
            ] {
                let utc = tz.convert_local_to_utc(&store, &t).unwrap();
                let back = tz.convert_utc_to_local(&store, &utc).unwrap();
                assert_eq!(back, t, "offset {offset}, time {t}");
            }
        }
    }
}
