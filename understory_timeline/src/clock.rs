// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall-clock sources.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;

/// Source of wall-clock time in milliseconds since the Unix epoch.
pub trait Clock {
    /// Current time.
    fn now_ms(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

/// The operating system's real-time clock.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        use std::time::{SystemTime, UNIX_EPOCH};

        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => i64::try_from(since.as_millis()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
        }
    }
}

/// A clock that only moves when told to.
///
/// Share it with a timeline through `&ManualClock` or `Rc<ManualClock>` and
/// advance it from tests or from an external frame loop.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<i64>,
}

impl ManualClock {
    /// Creates a clock reading `now_ms`.
    #[must_use]
    pub const fn new(now_ms: i64) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    /// Jumps to `now_ms`.
    pub fn set(&self, now_ms: i64) {
        self.now_ms.set(now_ms);
    }

    /// Moves forward by `delta_ms`.
    pub fn advance(&self, delta_ms: i64) {
        self.now_ms.set(self.now_ms.get().saturating_add(delta_ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.get()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;

    use super::{Clock, ManualClock};

    #[test]
    fn manual_clock_is_shared_through_references() {
        let clock = Rc::new(ManualClock::new(10));
        let shared = Rc::clone(&clock);
        clock.advance(5);
        assert_eq!(shared.now_ms(), 15);
        clock.set(3);
        assert_eq!((&*shared).now_ms(), 3);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_clock_is_after_2020() {
        assert!(super::SystemClock.now_ms() > 1_577_836_800_000);
    }
}
