// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selected timestamp, clamped to the wall clock.

/// Owner of the selected timestamp.
///
/// The cursor never points into the future: every write is clamped to the
/// `now_ms` supplied by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeCursor {
    timestamp_ms: i64,
}

impl TimeCursor {
    /// Creates a cursor at `min(timestamp_ms, now_ms)`.
    #[must_use]
    pub fn new(timestamp_ms: i64, now_ms: i64) -> Self {
        Self {
            timestamp_ms: timestamp_ms.min(now_ms),
        }
    }

    /// Current timestamp.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.timestamp_ms
    }

    /// Sets the cursor to `min(timestamp_ms, now_ms)`; returns `true` if it moved.
    pub fn set(&mut self, timestamp_ms: i64, now_ms: i64) -> bool {
        let clamped = timestamp_ms.min(now_ms);
        if clamped == self.timestamp_ms {
            return false;
        }
        self.timestamp_ms = clamped;
        true
    }
}
