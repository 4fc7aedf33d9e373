// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal pointer tracking: raw pointer positions to scroll distances,
//! tap detection and release velocity.
//!
//! ## Usage
//!
//! 1) Call [`PointerTracker::down`] with the press position and time.
//! 2) On each move, call [`PointerTracker::move_to`] to get the scroll distance
//!    since the previous position (positive when the pointer moves left).
//! 3) Call [`PointerTracker::up`] on release to learn whether the gesture was a
//!    tap or a drag, and how fast the pointer was moving.
//!
//! ```
//! use understory_timeline::gesture::{PointerTracker, Release};
//!
//! let mut tracker = PointerTracker::new(8.0);
//! tracker.down(100.0, 0);
//! assert_eq!(tracker.move_to(70.0, 10), Some(30.0));
//! match tracker.up(70.0, 10) {
//!     Release::Drag { velocity } => assert_eq!(velocity, -3000.0),
//!     Release::Tap { .. } | Release::None => unreachable!(),
//! }
//! assert!(!tracker.is_dragging());
//! ```

/// How a tracked gesture ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// The pointer never left the slop radius.
    Tap {
        /// Release position.
        x: f64,
    },
    /// The pointer moved; `velocity` is in pixels per second, positive to
    /// the right.
    Drag {
        /// Velocity over the last move sample.
        velocity: f64,
    },
    /// No gesture was in progress.
    None,
}

/// Tracks a single horizontal pointer gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    slop: f64,
    start_x: Option<f64>,
    last_x: f64,
    last_ms: i64,
    velocity: f64,
    moved: bool,
}

impl PointerTracker {
    /// Creates a tracker that treats movement within `slop` pixels as a tap.
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            slop,
            ..Self::default()
        }
    }

    /// Starts tracking at `x`.
    pub fn down(&mut self, x: f64, now_ms: i64) {
        self.start_x = Some(x);
        self.last_x = x;
        self.last_ms = now_ms;
        self.velocity = 0.0;
        self.moved = false;
    }

    /// Moves the pointer to `x`, returning the scroll distance `last - x`.
    ///
    /// Returns `None` when no gesture is active or while the pointer is still
    /// inside the slop radius.
    pub fn move_to(&mut self, x: f64, now_ms: i64) -> Option<f64> {
        let start = self.start_x?;
        if !self.moved && (x - start).abs() <= self.slop {
            return None;
        }
        self.moved = true;
        let distance = self.last_x - x;
        let elapsed = now_ms.saturating_sub(self.last_ms);
        if elapsed > 0 {
            self.velocity = (x - self.last_x) * 1000.0 / elapsed as f64;
        }
        self.last_x = x;
        self.last_ms = now_ms;
        Some(distance)
    }

    /// Ends the gesture at `x`.
    pub fn up(&mut self, x: f64, now_ms: i64) -> Release {
        if self.start_x.is_none() {
            return Release::None;
        }
        let release = if self.moved {
            // A pause before release means the pointer was at rest.
            let idle = now_ms.saturating_sub(self.last_ms) > 100 || x != self.last_x;
            Release::Drag {
                velocity: if idle { 0.0 } else { self.velocity },
            }
        } else {
            Release::Tap { x }
        };
        self.start_x = None;
        self.moved = false;
        release
    }

    /// Abandons the gesture without reporting a release.
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.moved = false;
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{PointerTracker, Release};

    #[test]
    fn idle_tracker_ignores_moves() {
        let mut tracker = PointerTracker::new(8.0);
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.move_to(10.0, 0), None);
        assert_eq!(tracker.up(10.0, 0), Release::None);
    }

    #[test]
    fn small_movements_are_taps() {
        let mut tracker = PointerTracker::new(8.0);
        tracker.down(100.0, 0);
        assert_eq!(tracker.move_to(105.0, 5), None);
        assert_eq!(tracker.up(105.0, 10), Release::Tap { x: 105.0 });
    }

    #[test]
    fn distances_accumulate_from_last_position() {
        let mut tracker = PointerTracker::new(8.0);
        tracker.down(100.0, 0);
        assert_eq!(tracker.move_to(120.0, 16), Some(-20.0));
        assert_eq!(tracker.move_to(110.0, 32), Some(10.0));
        assert!(tracker.is_dragging());
    }

    #[test]
    fn release_velocity_uses_last_sample() {
        let mut tracker = PointerTracker::new(0.0);
        tracker.down(0.0, 0);
        tracker.move_to(10.0, 10);
        tracker.move_to(30.0, 20);
        assert_eq!(tracker.up(30.0, 20), Release::Drag { velocity: 2000.0 });
    }

    #[test]
    fn resting_before_release_has_no_velocity() {
        let mut tracker = PointerTracker::new(0.0);
        tracker.down(0.0, 0);
        tracker.move_to(50.0, 10);
        assert_eq!(tracker.up(50.0, 500), Release::Drag { velocity: 0.0 });
    }

    #[test]
    fn cancel_drops_the_gesture() {
        let mut tracker = PointerTracker::new(8.0);
        tracker.down(0.0, 0);
        tracker.cancel();
        assert_eq!(tracker.up(0.0, 0), Release::None);
    }
}
