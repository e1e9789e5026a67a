/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Persisted reminder flags.
//!
//! Two records make up a saved reminder set: the data-format version tag and
//! the flags themselves (one byte per schedule entry, `0` or `1`, in table
//! order).  Loading is all-or-nothing: if anything about the saved data does
//! not match this build, every reminder starts off instead.

use thiserror::Error;
use tracing::{error, info, warn};

use crate::storage::{PersistKey, PersistentStore, StorageError};

// ── Error type ────────────────────────────────────────────────────────────────

/// Why a saved reminder set was discarded.
#[derive(Debug, Error)]
pub enum ReminderLoadError {
    /// A record is missing, mis-sized or unreadable.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The saved set belongs to a different schedule revision.
    #[error("reminder data version {found} does not match expected {expected}")]
    VersionMismatch { found: i32, expected: i32 },

    /// A flag byte is neither 0 nor 1.
    #[error("reminder flag {index} has invalid value {value:#04x}")]
    InvalidFlag { index: usize, value: u8 },
}

// ── ReminderStore ─────────────────────────────────────────────────────────────

/// Saves and loads reminder flags tagged with a schedule data version.
#[derive(Debug, Clone, Copy)]
pub struct ReminderStore {
    version: i32,
}

impl ReminderStore {
    /// A store for reminder sets tagged `version`.
    pub fn new(version: i32) -> Self {
        Self { version }
    }

    /// Write the version tag and the flags.
    ///
    /// # Errors
    /// Any failed or short write.  The caller's in-memory flags remain the
    /// source of truth; the next save point tries again.
    pub fn save<S: PersistentStore + ?Sized, const N: usize>(
        &self,
        store: &mut S,
        flags: &[bool; N],
    ) -> Result<(), StorageError> {
        let bytes: Vec<u8> = flags.iter().map(|&f| u8::from(f)).collect();
        store.write_int(PersistKey::DataVersion, self.version)?;
        store.write_data(PersistKey::Reminders, &bytes)?;
        info!(
            enabled = flags.iter().filter(|&&f| f).count(),
            "Saved reminders to storage"
        );
        Ok(())
    }

    /// Load flags, failing on any mismatch.
    pub fn try_load<S: PersistentStore + ?Sized, const N: usize>(
        &self,
        store: &S,
    ) -> Result<[bool; N], ReminderLoadError> {
        let found = store.read_int(PersistKey::DataVersion)?;
        if found != self.version {
            return Err(ReminderLoadError::VersionMismatch {
                found,
                expected: self.version,
            });
        }

        let bytes = store.read_exact(PersistKey::Reminders, N)?;
        let mut flags = [false; N];
        for (index, (&value, flag)) in bytes.iter().zip(flags.iter_mut()).enumerate() {
            *flag = match value {
                0 => false,
                1 => true,
                _ => return Err(ReminderLoadError::InvalidFlag { index, value }),
            };
        }
        Ok(flags)
    }

    /// Load flags, falling back to all-off on any problem.
    pub fn load<S: PersistentStore + ?Sized, const N: usize>(&self, store: &S) -> [bool; N] {
        match self.try_load(store) {
            Ok(flags) => {
                info!(
                    enabled = flags.iter().filter(|&&f| f).count(),
                    "Loaded reminders from storage"
                );
                flags
            }
            Err(ReminderLoadError::Storage(StorageError::Missing(key))) => {
                info!(%key, "No saved reminders");
                [false; N]
            }
            Err(ReminderLoadError::Storage(e @ StorageError::Io { .. })) => {
                error!("Reminder list could not be read: {e}");
                [false; N]
            }
            Err(e) => {
                warn!("Reminder format mismatch; discarding: {e}");
                [false; N]
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{DATA_VERSION, EVENT_COUNT};
    use crate::storage::MemoryStore;

    fn some_flags() -> [bool; 8] {
        [true, false, false, true, false, false, false, true]
    }

    #[test]
    fn save_then_load_restores_flags() {
        let mut store = MemoryStore::new();
        let reminders = ReminderStore::new(DATA_VERSION);
        reminders.save(&mut store, &some_flags()).unwrap();
        let loaded: [bool; 8] = reminders.load(&store);
        assert_eq!(loaded, some_flags());
    }

    #[test]
    fn saved_bytes_are_one_per_entry() {
        let mut store = MemoryStore::new();
        ReminderStore::new(7).save(&mut store, &some_flags()).unwrap();
        assert_eq!(
            store.read(PersistKey::Reminders).unwrap().unwrap(),
            vec![1, 0, 0, 1, 0, 0, 0, 1]
        );
        assert_eq!(store.read_int(PersistKey::DataVersion).unwrap(), 7);
    }

    #[test]
    fn nothing_saved_loads_all_false() {
        let store = MemoryStore::new();
        let loaded: [bool; EVENT_COUNT] = ReminderStore::new(DATA_VERSION).load(&store);
        assert!(loaded.iter().all(|&f| !f));
    }

    #[test]
    fn old_version_is_discarded() {
        let mut store = MemoryStore::new();
        ReminderStore::new(201_401_010)
            .save(&mut store, &[true; EVENT_COUNT])
            .unwrap();

        let current = ReminderStore::new(DATA_VERSION);
        assert!(matches!(
            current.try_load::<_, EVENT_COUNT>(&store),
            Err(ReminderLoadError::VersionMismatch {
                found: 201_401_010,
                expected: DATA_VERSION
            })
        ));
        let loaded: [bool; EVENT_COUNT] = current.load(&store);
        assert!(loaded.iter().all(|&f| !f));
    }

    #[test]
    fn size_mismatch_is_discarded() {
        let mut store = MemoryStore::new();
        let reminders = ReminderStore::new(DATA_VERSION);
        // Saved by a build with a 4-entry table but the same tag
        reminders.save(&mut store, &[true; 4]).unwrap();
        assert!(matches!(
            reminders.try_load::<_, 8>(&store),
            Err(ReminderLoadError::Storage(StorageError::SizeMismatch { .. }))
        ));
        let loaded: [bool; 8] = reminders.load(&store);
        assert_eq!(loaded, [false; 8]);
    }

    #[test]
    fn malformed_version_record_is_discarded() {
        let mut store = MemoryStore::new();
        store.write_data(PersistKey::DataVersion, &[1, 2, 3]).unwrap();
        store.write_data(PersistKey::Reminders, &[1; 8]).unwrap();
        let loaded: [bool; 8] = ReminderStore::new(DATA_VERSION).load(&store);
        assert_eq!(loaded, [false; 8]);
    }

    #[test]
    fn garbage_flag_byte_is_discarded() {
        let mut store = MemoryStore::new();
        store.write_int(PersistKey::DataVersion, DATA_VERSION).unwrap();
        store
            .write_data(PersistKey::Reminders, &[0, 1, 0xFF, 0])
            .unwrap();
        let reminders = ReminderStore::new(DATA_VERSION);
        assert!(matches!(
            reminders.try_load::<_, 4>(&store),
            Err(ReminderLoadError::InvalidFlag {
                index: 2,
                value: 0xFF
            })
        ));
        let loaded: [bool; 4] = reminders.load(&store);
        assert_eq!(loaded, [false; 4]);
    }

    #[test]
    fn truncated_save_is_reported() {
        let mut store = MemoryStore::with_write_limit(4);
        let err = ReminderStore::new(DATA_VERSION)
            .save(&mut store, &some_flags())
            .unwrap_err();
        assert!(matches!(
            err,
            StorageError::ShortWrite {
                key: PersistKey::Reminders,
                expected: 8,
                written: 4
            }
        ));
        // The partial record does not load back as valid data
        let loaded: [bool; 8] = ReminderStore::new(DATA_VERSION).load(&store);
        assert_eq!(loaded, [false; 8]);
    }
}
