// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pluggable timestamp formatting for labels.

use alloc::string::{String, ToString};

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Turns timestamps into label text.
///
/// The timeline only ever asks for strings; locale, calendar and time-zone
/// decisions belong to the implementation. [`TimeFormatter::utc_offset_ms`]
/// tells the ruler where local midnight is so day ticks can be emphasized.
pub trait TimeFormatter {
    /// Time of day for the header, for example `"17:22:42"`.
    fn format_time(&self, timestamp_ms: i64) -> String;

    /// Calendar date for the header, for example `"Nov 1, 2025"`.
    fn format_date(&self, timestamp_ms: i64) -> String;

    /// Ruler label for a regular tick. Defaults to [`Self::format_time`].
    fn format_tick(&self, timestamp_ms: i64) -> String {
        self.format_time(timestamp_ms)
    }

    /// Ruler label for a tick on local midnight. Defaults to [`Self::format_date`].
    fn format_day(&self, timestamp_ms: i64) -> String {
        self.format_date(timestamp_ms)
    }

    /// Offset of local time from UTC at `timestamp_ms`.
    fn utc_offset_ms(&self, timestamp_ms: i64) -> i64 {
        let _ = timestamp_ms;
        0
    }
}

/// Chrono-backed formatter using a fixed UTC offset.
///
/// Header time is `HH:MM:SS`, header date is `Mon D, YYYY`, ruler ticks are
/// `HH:MM` and day ticks are `Mon D`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultFormatter {
    offset: FixedOffset,
}

impl Default for DefaultFormatter {
    #[cfg(feature = "std")]
    fn default() -> Self {
        Self::local()
    }

    #[cfg(not(feature = "std"))]
    fn default() -> Self {
        Self::utc()
    }
}

impl DefaultFormatter {
    /// Formats in UTC.
    #[must_use]
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    /// Formats with a fixed offset.
    #[must_use]
    pub const fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Formats with the system's current local offset, sampled once.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn local() -> Self {
        use chrono::Local;

        Self {
            offset: Local::now().offset().fix(),
        }
    }

    /// The offset in use.
    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    fn format(&self, timestamp_ms: i64, pattern: &str) -> String {
        match DateTime::from_timestamp_millis(timestamp_ms) {
            Some(utc) => utc.with_timezone(&self.offset).format(pattern).to_string(),
            None => String::new(),
        }
    }
}

impl TimeFormatter for DefaultFormatter {
    fn format_time(&self, timestamp_ms: i64) -> String {
        self.format(timestamp_ms, "%H:%M:%S")
    }

    fn format_date(&self, timestamp_ms: i64) -> String {
        self.format(timestamp_ms, "%b %-d, %Y")
    }

    fn format_tick(&self, timestamp_ms: i64) -> String {
        self.format(timestamp_ms, "%H:%M")
    }

    fn format_day(&self, timestamp_ms: i64) -> String {
        self.format(timestamp_ms, "%b %-d")
    }

    fn utc_offset_ms(&self, _timestamp_ms: i64) -> i64 {
        i64::from(self.offset.local_minus_utc()) * 1000
    }
}
