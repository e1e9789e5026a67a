/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Inbound messages from the paired companion device.
//!
//! A message is a small dictionary of numbered tuples.  The only one the clock
//! understands is [`TZ_OFFSET_KEY`], a signed 16-bit minute offset (local −
//! UTC).  Anything else (a missing key, a string, an integer that does not
//! fit in 16 bits) is rejected with a [`PeerError`]; the caller logs it and
//! leaves the timezone untouched.

use std::collections::BTreeMap;

use thiserror::Error;

/// Dictionary key carrying the timezone offset.
pub const TZ_OFFSET_KEY: u32 = 0;

// ── Message model ─────────────────────────────────────────────────────────────

/// One typed value in a peer message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TupleValue {
    Int(i32),
    UInt(u32),
    CString(String),
    ByteArray(Vec<u8>),
}

impl TupleValue {
    fn type_name(&self) -> &'static str {
        match self {
            TupleValue::Int(_) => "int",
            TupleValue::UInt(_) => "uint",
            TupleValue::CString(_) => "cstring",
            TupleValue::ByteArray(_) => "bytes",
        }
    }
}

/// A received dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerMessage {
    tuples: BTreeMap<u32, TupleValue>,
}

impl PeerMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: u32, value: TupleValue) -> Self {
        self.tuples.insert(key, value);
        self
    }

    /// Convenience constructor for the timezone message the companion sends.
    pub fn tz_offset(minutes: i16) -> Self {
        Self::new().with(TZ_OFFSET_KEY, TupleValue::Int(i32::from(minutes)))
    }

    pub fn get(&self, key: u32) -> Option<&TupleValue> {
        self.tuples.get(&key)
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Why a peer message was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeerError {
    #[error("message has no tuple with key {0}")]
    MissingKey(u32),

    #[error("tuple {key} has type {found}, expected int")]
    WrongType { key: u32, found: &'static str },

    #[error("tuple {key} value {value} does not fit in 16 bits")]
    OutOfRange { key: u32, value: i32 },
}

/// Extract the timezone offset (minutes, local − UTC) from `msg`.
pub fn parse_tz_offset(msg: &PeerMessage) -> Result<i16, PeerError> {
    let value = msg
        .get(TZ_OFFSET_KEY)
        .ok_or(PeerError::MissingKey(TZ_OFFSET_KEY))?;
    match value {
        TupleValue::Int(v) => i16::try_from(*v).map_err(|_| PeerError::OutOfRange {
            key: TZ_OFFSET_KEY,
            value: *v,
        }),
        other => Err(PeerError::WrongType {
            key: TZ_OFFSET_KEY,
            found: other.type_name(),
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offset() {
        assert_eq!(parse_tz_offset(&PeerMessage::tz_offset(-300)), Ok(-300));
        assert_eq!(parse_tz_offset(&PeerMessage::tz_offset(330)), Ok(330));
    }

    #[test]
    fn missing_key_is_rejected() {
        let msg = PeerMessage::new().with(7, TupleValue::Int(60));
        assert_eq!(parse_tz_offset(&msg), Err(PeerError::MissingKey(TZ_OFFSET_KEY)));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let msg = PeerMessage::new().with(TZ_OFFSET_KEY, TupleValue::CString("60".into()));
        assert_eq!(
            parse_tz_offset(&msg),
            Err(PeerError::WrongType {
                key: TZ_OFFSET_KEY,
                found: "cstring"
            })
        );

        let msg = PeerMessage::new().with(TZ_OFFSET_KEY, TupleValue::UInt(60));
        assert!(matches!(
            parse_tz_offset(&msg),
            Err(PeerError::WrongType { found: "uint", .. })
        ));
    }

    #[test]
    fn oversized_int_is_rejected() {
        let msg = PeerMessage::new().with(TZ_OFFSET_KEY, TupleValue::Int(70_000));
        assert_eq!(
            parse_tz_offset(&msg),
            Err(PeerError::OutOfRange {
                key: TZ_OFFSET_KEY,
                value: 70_000
            })
        );
    }

    #[test]
    fn extra_tuples_are_ignored() {
        let msg = PeerMessage::tz_offset(60).with(9, TupleValue::ByteArray(vec![1, 2]));
        assert_eq!(parse_tz_offset(&msg), Ok(60));
    }
}
