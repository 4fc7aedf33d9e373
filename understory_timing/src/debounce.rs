// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Re-armable delayed triggers.

/// A cancellable delayed trigger.
///
/// `Debounce` replaces "post a callback after N ms, removing any pending one
/// first" in hosts that do not have (or do not want) a real timer queue.
/// Arming while already armed cancels the previous deadline and starts a new
/// one. The owner calls [`Debounce::poll`] from its frame loop; the trigger
/// reports `true` exactly once per arming.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debounce {
    deadline_ms: Option<i64>,
}

impl Debounce {
    /// Creates a disarmed trigger.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline_ms: None }
    }

    /// Arms (or re-arms) the trigger to fire `delay_ms` after `now_ms`.
    pub fn arm(&mut self, now_ms: i64, delay_ms: u32) {
        self.deadline_ms = Some(now_ms.saturating_add(i64::from(delay_ms)));
    }

    /// Disarms the trigger without firing.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// The pending deadline, if any.
    #[must_use]
    pub const fn deadline_ms(&self) -> Option<i64> {
        self.deadline_ms
    }

    /// Fires if the deadline has passed, disarming the trigger.
    pub fn poll(&mut self, now_ms: i64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Debounce;

    #[test]
    fn fresh_trigger_never_fires() {
        let mut d = Debounce::new();
        assert!(!d.is_armed());
        assert!(!d.poll(i64::MAX));
    }

    #[test]
    fn fires_once_at_deadline() {
        let mut d = Debounce::new();
        d.arm(1_000, 500);
        assert_eq!(d.deadline_ms(), Some(1_500));
        assert!(!d.poll(1_499));
        assert!(d.poll(1_500));
        assert!(!d.is_armed());
        assert!(!d.poll(2_000));
    }

    #[test]
    fn rearm_restarts_the_delay() {
        let mut d = Debounce::new();
        d.arm(0, 500);
        d.arm(400, 500);
        assert!(!d.poll(500), "original deadline was replaced");
        assert!(d.poll(900));
    }

    #[test]
    fn cancel_disarms() {
        let mut d = Debounce::new();
        d.arm(0, 10);
        d.cancel();
        assert!(!d.poll(100));
    }
}
