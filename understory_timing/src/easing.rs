// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves.

use core::f64::consts::PI;

/// Interpolation curve applied to linear animation progress.
///
/// All curves map `0.0` to `0.0` and `1.0` to `1.0`. Input outside `[0, 1]`
/// is clamped first.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Easing {
    /// Identity curve.
    Linear,
    /// Starts and ends slowly, fastest through the middle.
    ///
    /// Computed as `cos((t + 1) * PI) / 2 + 0.5`.
    #[default]
    AccelerateDecelerate,
    /// Starts quickly and decelerates towards the end.
    ///
    /// The factor controls how pronounced the deceleration is; `1.0` yields a
    /// quadratic ease-out, larger values decelerate harder. Computed as
    /// `1 - (1 - t)^(2 * factor)`.
    Decelerate(f64),
}

impl Easing {
    /// Maps linear progress `t` to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => libm::cos((t + 1.0) * PI) / 2.0 + 0.5,
            Self::Decelerate(factor) => {
                let inv = 1.0 - t;
                if factor == 1.0 {
                    1.0 - inv * inv
                } else {
                    1.0 - libm::pow(inv, 2.0 * factor)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    fn close(a: f64, b: f64) -> bool {
        libm::fabs(a - b) < 1e-9
    }

    #[test]
    fn endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::AccelerateDecelerate,
            Easing::Decelerate(1.0),
            Easing::Decelerate(1.4),
        ] {
            assert!(close(easing.apply(0.0), 0.0), "{easing:?} at 0");
            assert!(close(easing.apply(1.0), 1.0), "{easing:?} at 1");
        }
    }

    #[test]
    fn accelerate_decelerate_is_symmetric_around_midpoint() {
        let e = Easing::AccelerateDecelerate;
        assert!(close(e.apply(0.5), 0.5), "midpoint maps to itself");
        assert!(
            close(e.apply(0.25) + e.apply(0.75), 1.0),
            "curve is point-symmetric"
        );
        assert!(e.apply(0.1) < 0.1, "slow start");
    }

    #[test]
    fn decelerate_front_loads_progress() {
        let soft = Easing::Decelerate(1.0);
        let hard = Easing::Decelerate(1.4);
        assert!(close(soft.apply(0.5), 0.75), "quadratic ease-out");
        assert!(hard.apply(0.5) > soft.apply(0.5), "larger factor decelerates harder");
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        let e = Easing::Linear;
        assert!(close(e.apply(-3.0), 0.0), "negative clamps to start");
        assert!(close(e.apply(7.0), 1.0), "overshoot clamps to end");
        assert!(close(e.apply(f64::NAN), 0.0), "nan treated as start");
    }
}
