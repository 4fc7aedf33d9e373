// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-duration tweens of an integer offset.

use crate::Easing;

/// A fixed-duration interpolation of an integer offset from `0` to `delta`.
///
/// A `Tween` only stores its start time, duration, target offset and curve.
/// It has no notion of the value being animated: callers keep the base value
/// themselves and apply `base + sample.value` on every frame, re-running any
/// clamping they need at each step.
///
/// Sampled values are truncated towards zero, so an in-flight sample never
/// overshoots `delta`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    start_ms: i64,
    duration_ms: u32,
    delta: i64,
    easing: Easing,
}

/// One frame's worth of [`Tween`] output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TweenSample {
    /// Interpolated offset in `[0, delta]`.
    pub value: i64,
    /// `true` once the tween has reached its end time.
    pub finished: bool,
}

impl Tween {
    /// Creates a tween starting at `start_ms` that moves from `0` to `delta`
    /// over `duration_ms`.
    ///
    /// A zero duration finishes on the first sample.
    #[must_use]
    pub const fn new(start_ms: i64, duration_ms: u32, delta: i64, easing: Easing) -> Self {
        Self {
            start_ms,
            duration_ms,
            delta,
            easing,
        }
    }

    /// Time at which the tween was started.
    #[must_use]
    pub const fn start_ms(&self) -> i64 {
        self.start_ms
    }

    /// Total duration.
    #[must_use]
    pub const fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Time at which the tween reaches `delta`.
    #[must_use]
    pub const fn end_ms(&self) -> i64 {
        self.start_ms.saturating_add(self.duration_ms as i64)
    }

    /// Final offset.
    #[must_use]
    pub const fn delta(&self) -> i64 {
        self.delta
    }

    /// Curve used for interpolation.
    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear progress in `[0, 1]` at `now_ms`.
    #[must_use]
    pub fn progress(&self, now_ms: i64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed <= 0 {
            return 0.0;
        }
        (elapsed as f64 / f64::from(self.duration_ms)).min(1.0)
    }

    /// Samples the interpolated offset at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: i64) -> TweenSample {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return TweenSample {
                value: self.delta,
                finished: true,
            };
        }
        let eased = self.easing.apply(t);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "eased progress is within [0, 1], so the product stays within delta"
        )]
        let value = (eased * self.delta as f64) as i64;
        TweenSample {
            value,
            finished: false,
        }
    }
}
