// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline configuration.

use kurbo::Size;

use crate::interval::INTERVAL_HOUR_1;
use crate::record::Tier;

/// Device orientation, which changes how much vertical room each tier gets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Taller than wide; tiers get larger top/bottom insets.
    #[default]
    Portrait,
    /// Wider than tall; tiers get smaller top/bottom insets.
    Landscape,
}

impl Orientation {
    /// Landscape when the viewport is strictly wider than it is tall.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        if size.width > size.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// Tunables for a [`Timeline`](crate::Timeline).
///
/// All durations are in milliseconds. Use [`TimelineConfig::validate`] (or
/// [`Timeline::with_config`](crate::Timeline::with_config), which calls it)
/// before handing a hand-built config to a timeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimelineConfig {
    /// Display density (device pixels per density-independent pixel).
    pub density: f64,
    /// Orientation used for tier insets.
    pub orientation: Orientation,
    /// Base top/bottom inset in density-independent pixels.
    pub offset_top_bottom: f64,
    /// Interval shown before any zoom step.
    pub initial_interval_ms: i64,
    /// Duration of interval and tap-to-select transitions.
    pub animation_duration_ms: u32,
    /// Inactivity delay before the "selected" notification fires.
    pub settle_delay_ms: u32,
    /// The header reads "Now" while the cursor is less than this far behind
    /// the wall clock.
    pub now_threshold_ms: i64,
    /// Look-back subtracted from the cursor before searching for the
    /// previous major record, so the record under the cursor is skipped.
    pub prev_lookback_ms: i64,
    /// Fling duration per unit of velocity (`|v| * k` ms).
    pub fling_duration_multiplier: f64,
    /// Fling travel per unit of velocity, as a fraction of the interval.
    pub fling_distance_multiplier: f64,
    /// Deceleration factor of the fling curve.
    pub fling_deceleration: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            orientation: Orientation::Portrait,
            offset_top_bottom: 7.0,
            initial_interval_ms: INTERVAL_HOUR_1,
            animation_duration_ms: 150,
            settle_delay_ms: 500,
            now_threshold_ms: 5_000,
            prev_lookback_ms: 30_000,
            fling_duration_multiplier: 0.15,
            fling_distance_multiplier: 0.000_18,
            fling_deceleration: 1.4,
        }
    }
}

/// Reasons a [`TimelineConfig`] is rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Density must be finite and strictly positive.
    #[error("density must be a finite positive number, got {0}")]
    InvalidDensity(f64),
    /// The top/bottom inset must be finite and not negative.
    #[error("top/bottom offset must be finite and non-negative, got {0}")]
    InvalidOffset(f64),
    /// Transitions need a non-zero duration.
    #[error("animation duration must be greater than zero")]
    ZeroAnimationDuration,
    /// The settle notification needs a non-zero delay.
    #[error("settle delay must be greater than zero")]
    ZeroSettleDelay,
    /// A fling multiplier is negative or not finite.
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidFlingMultiplier {
        /// Name of the offending field.
        name: &'static str,
        /// Value that was supplied.
        value: f64,
    },
    /// The fling deceleration factor must be finite and strictly positive.
    #[error("fling deceleration must be a finite positive number, got {0}")]
    InvalidDeceleration(f64),
}

impl TimelineConfig {
    /// Checks every field, reporting the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        if !self.offset_top_bottom.is_finite() || self.offset_top_bottom < 0.0 {
            return Err(ConfigError::InvalidOffset(self.offset_top_bottom));
        }
        if self.animation_duration_ms == 0 {
            return Err(ConfigError::ZeroAnimationDuration);
        }
        if self.settle_delay_ms == 0 {
            return Err(ConfigError::ZeroSettleDelay);
        }
        for (name, value) in [
            ("fling_duration_multiplier", self.fling_duration_multiplier),
            ("fling_distance_multiplier", self.fling_distance_multiplier),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidFlingMultiplier { name, value });
            }
        }
        if !self.fling_deceleration.is_finite() || self.fling_deceleration <= 0.0 {
            return Err(ConfigError::InvalidDeceleration(self.fling_deceleration));
        }
        Ok(())
    }

    /// Base inset scaled by density, in device pixels.
    #[must_use]
    pub fn base_offset(&self) -> f64 {
        self.offset_top_bottom * self.density
    }

    /// Whole-pixel top/bottom inset for `tier`.
    ///
    /// Background and Major1 use `2.6` (landscape) or `3.4` (portrait) times
    /// the base offset; Major2 sits in a narrower band using `3.0` or `4.0`.
    #[must_use]
    pub fn tier_inset(&self, tier: Tier) -> f64 {
        let landscape = self.orientation == Orientation::Landscape;
        let factor = match (tier, landscape) {
            (Tier::Major1 | Tier::Background, true) => 2.6,
            (Tier::Major1 | Tier::Background, false) => 3.4,
            (Tier::Major2, true) => 3.0,
            (Tier::Major2, false) => 4.0,
        };
        crate::trunc_px(factor * self.base_offset())
    }
}
