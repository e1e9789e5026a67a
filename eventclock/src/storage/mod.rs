/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Small key → bytes persistent store.
//!
//! The device keeps three records:
//!
//! | Key | Content |
//! |-----|---------|
//! | [`PersistKey::TzOffset`] | `i32` LE, minutes local − UTC |
//! | [`PersistKey::DataVersion`] | `i32` LE, reminder format tag |
//! | [`PersistKey::Reminders`] | one byte (0/1) per schedule entry |
//!
//! Backends only implement raw [`read`](PersistentStore::read) and
//! [`write_bytes`](PersistentStore::write_bytes); the typed helpers are
//! provided methods so every backend sizes and encodes records the same way.

pub mod error;
pub mod file;

pub use error::StorageError;
pub use file::FileStore;

use std::collections::BTreeMap;

use tracing::debug;

// ── Keys ──────────────────────────────────────────────────────────────────────

/// Identifier of a persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PersistKey {
    TzOffset,
    DataVersion,
    Reminders,
}

impl PersistKey {
    /// Numeric key id as used on the device.
    pub fn id(self) -> u32 {
        match self {
            PersistKey::TzOffset => 1,
            PersistKey::DataVersion => 2,
            PersistKey::Reminders => 3,
        }
    }

    /// Stable name, also used as the file stem by [`FileStore`].
    pub fn name(self) -> &'static str {
        match self {
            PersistKey::TzOffset => "tz_offset",
            PersistKey::DataVersion => "data_version",
            PersistKey::Reminders => "reminders",
        }
    }
}

impl std::fmt::Display for PersistKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.id())
    }
}

// ── PersistentStore ───────────────────────────────────────────────────────────

/// Synchronous record storage.
pub trait PersistentStore {
    /// Full contents of `key`, or `None` if it was never written.
    fn read(&self, key: PersistKey) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace `key` with `data`.  Returns the number of bytes actually stored,
    /// which may be less than `data.len()` on a constrained medium.
    fn write_bytes(&mut self, key: PersistKey, data: &[u8]) -> Result<usize, StorageError>;

    /// `true` if `key` holds a record.
    fn exists(&self, key: PersistKey) -> bool {
        matches!(self.read(key), Ok(Some(_)))
    }

    /// Size of the record in bytes, `None` if absent or unreadable.
    fn size(&self, key: PersistKey) -> Option<usize> {
        self.read(key).ok().flatten().map(|v| v.len())
    }

    /// Read `key` and require it to be exactly `expected` bytes long.
    fn read_exact(&self, key: PersistKey, expected: usize) -> Result<Vec<u8>, StorageError> {
        let data = self.read(key)?.ok_or(StorageError::Missing(key))?;
        if data.len() != expected {
            return Err(StorageError::SizeMismatch {
                key,
                expected,
                actual: data.len(),
            });
        }
        Ok(data)
    }

    /// Write `data` and treat a short write as an error.
    fn write_data(&mut self, key: PersistKey, data: &[u8]) -> Result<(), StorageError> {
        let written = self.write_bytes(key, data)?;
        if written != data.len() {
            return Err(StorageError::ShortWrite {
                key,
                expected: data.len(),
                written,
            });
        }
        debug!(%key, bytes = written, "record written");
        Ok(())
    }

    /// Read a 4-byte little-endian signed integer.
    fn read_int(&self, key: PersistKey) -> Result<i32, StorageError> {
        let data = self.read_exact(key, 4)?;
        Ok(i32::from_le_bytes([data[0], data[1], data[2], data[3]]))
    }

    /// Write a 4-byte little-endian signed integer.
    fn write_int(&mut self, key: PersistKey, value: i32) -> Result<(), StorageError> {
        self.write_data(key, &value.to_le_bytes())
    }
}

// ── MemoryStore ───────────────────────────────────────────────────────────────

/// In-process store.
///
/// An optional write limit truncates every write to at most that many bytes,
/// which is how a nearly-full device medium behaves.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: BTreeMap<PersistKey, Vec<u8>>,
    write_limit: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes are cut off after `limit` bytes.
    pub fn with_write_limit(limit: usize) -> Self {
        Self {
            records: BTreeMap::new(),
            write_limit: Some(limit),
        }
    }

    /// Change or drop (`None`) the write limit.
    pub fn set_write_limit(&mut self, limit: Option<usize>) {
        self.write_limit = limit;
    }

    /// Remove `key`.
    pub fn remove(&mut self, key: PersistKey) {
        self.records.remove(&key);
    }
}

impl PersistentStore for MemoryStore {
    fn read(&self, key: PersistKey) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.records.get(&key).cloned())
    }

    fn write_bytes(&mut self, key: PersistKey, data: &[u8]) -> Result<usize, StorageError> {
        let n = self.write_limit.map_or(data.len(), |l| l.min(data.len()));
        self.records.insert(key, data[..n].to_vec());
        Ok(n)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
