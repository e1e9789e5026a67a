/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error type for the persistent store.
//!
//! None of these are fatal to the clock: callers log them and fall back to a
//! safe default (unset timezone, all reminders off).  The variants still carry
//! the key and byte counts so the log line says exactly which record was bad.

use thiserror::Error;

use super::PersistKey;

/// Failure reading or writing one persisted record.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing medium reported an I/O failure.
    #[error("I/O error on record {key}: {source}")]
    Io {
        key: PersistKey,
        #[source]
        source: std::io::Error,
    },

    /// The data directory could not be created.
    #[error("cannot create data directory {}: {source}", path.display())]
    CreateDir {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record does not exist.
    #[error("record {0} is not present")]
    Missing(PersistKey),

    /// The record exists but has the wrong length for its type.
    #[error("record {key} holds {actual} bytes, expected {expected}")]
    SizeMismatch {
        key: PersistKey,
        expected: usize,
        actual: usize,
    },

    /// Fewer bytes were written than requested.
    #[error("short write on record {key}: {written} of {expected} bytes")]
    ShortWrite {
        key: PersistKey,
        expected: usize,
        written: usize,
    },
}
