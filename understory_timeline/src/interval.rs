// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visible interval ("zoom level") and its fixed ladder of named sizes.

/// 1 minute.
pub const INTERVAL_MIN_1: i64 = 60 * 1000;
/// 5 minutes.
pub const INTERVAL_MIN_5: i64 = 5 * INTERVAL_MIN_1;
/// 15 minutes.
pub const INTERVAL_MIN_15: i64 = 15 * INTERVAL_MIN_1;
/// 30 minutes.
pub const INTERVAL_MIN_30: i64 = 30 * INTERVAL_MIN_1;
/// 1 hour.
pub const INTERVAL_HOUR_1: i64 = 60 * INTERVAL_MIN_1;
/// 6 hours.
pub const INTERVAL_HOUR_6: i64 = 6 * INTERVAL_HOUR_1;
/// 12 hours.
pub const INTERVAL_HOUR_12: i64 = 12 * INTERVAL_HOUR_1;
/// 1 day.
pub const INTERVAL_DAY_1: i64 = 24 * INTERVAL_HOUR_1;
/// 7 days.
pub const INTERVAL_DAY_7: i64 = 7 * INTERVAL_DAY_1;

/// Smallest allowed interval.
pub const MIN_INTERVAL_MS: i64 = INTERVAL_MIN_1;
/// Largest allowed interval.
pub const MAX_INTERVAL_MS: i64 = INTERVAL_DAY_7;

/// Canonical interval sizes, ascending.
pub const INTERVAL_LADDER: [i64; 9] = [
    INTERVAL_MIN_1,
    INTERVAL_MIN_5,
    INTERVAL_MIN_15,
    INTERVAL_MIN_30,
    INTERVAL_HOUR_1,
    INTERVAL_HOUR_6,
    INTERVAL_HOUR_12,
    INTERVAL_DAY_1,
    INTERVAL_DAY_7,
];

const LADDER_NAMES: [&str; 9] = [
    "1 min", "5 min", "15 min", "30 min", "1 hour", "6 hours", "12 hours", "1 day", "7 days",
];

/// Clamps `ms` into `[MIN_INTERVAL_MS, MAX_INTERVAL_MS]`.
#[must_use]
pub const fn clamp_interval(ms: i64) -> i64 {
    if ms < MIN_INTERVAL_MS {
        MIN_INTERVAL_MS
    } else if ms > MAX_INTERVAL_MS {
        MAX_INTERVAL_MS
    } else {
        ms
    }
}

// Index of the largest ladder entry that `current` has reached. A value one
// millisecond short of an entry counts as "not there yet".
fn rung(current: i64) -> Option<usize> {
    INTERVAL_LADDER.iter().rposition(|&v| current > v - 1)
}

/// Target of a zoom-out step from `current`.
///
/// The next ladder entry above the largest one `current` has reached; values
/// below the ladder go to its first entry and the top entry stays put.
#[must_use]
pub fn step_up_target(current: i64) -> i64 {
    match rung(current) {
        Some(i) => INTERVAL_LADDER[(i + 1).min(INTERVAL_LADDER.len() - 1)],
        None => INTERVAL_LADDER[0],
    }
}

/// Target of a zoom-in step from `current`, or `None` when already below the
/// second ladder entry (there is nothing finer to go to).
#[must_use]
pub fn step_down_target(current: i64) -> Option<i64> {
    match rung(current) {
        Some(i) if i > 0 => Some(INTERVAL_LADDER[i - 1]),
        _ => None,
    }
}

/// Human-readable name of the largest ladder entry `current` has reached,
/// for example `"30 min"`. Empty below one minute.
#[must_use]
pub fn scale_label(current: i64) -> &'static str {
    rung(current).map_or("", |i| LADDER_NAMES[i])
}

/// Owner of the current interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntervalController {
    interval_ms: i64,
}

impl Default for IntervalController {
    fn default() -> Self {
        Self::new(INTERVAL_HOUR_1)
    }
}

impl IntervalController {
    /// Creates a controller holding `clamp_interval(interval_ms)`.
    #[must_use]
    pub const fn new(interval_ms: i64) -> Self {
        Self {
            interval_ms: clamp_interval(interval_ms),
        }
    }

    /// Current interval.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.interval_ms
    }

    /// Sets the interval after clamping; returns `true` if it changed.
    pub fn set(&mut self, interval_ms: i64) -> bool {
        let clamped = clamp_interval(interval_ms);
        if clamped == self.interval_ms {
            return false;
        }
        self.interval_ms = clamped;
        true
    }

    /// Returns `true` at the finest zoom level.
    #[must_use]
    pub const fn is_min(&self) -> bool {
        self.interval_ms <= MIN_INTERVAL_MS
    }

    /// Returns `true` at the coarsest zoom level.
    #[must_use]
    pub const fn is_max(&self) -> bool {
        self.interval_ms >= MAX_INTERVAL_MS
    }
}
