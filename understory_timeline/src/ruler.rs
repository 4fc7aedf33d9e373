// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ruler layout: label granularity, tick positions and tick labels.

use alloc::string::String;

use smallvec::SmallVec;
use understory_axis::LinearAxis;

use crate::format::TimeFormatter;
use crate::interval::{
    INTERVAL_DAY_1, INTERVAL_HOUR_1, INTERVAL_HOUR_6, INTERVAL_HOUR_12, INTERVAL_MIN_1,
    INTERVAL_MIN_5, INTERVAL_MIN_15, INTERVAL_MIN_30,
};
use crate::projector::Window;

/// Candidate label steps, finest first.
pub const RULER_LADDER: [i64; 8] = [
    INTERVAL_MIN_1,
    INTERVAL_MIN_5,
    INTERVAL_MIN_15,
    INTERVAL_MIN_30,
    INTERVAL_HOUR_1,
    INTERVAL_HOUR_6,
    INTERVAL_HOUR_12,
    INTERVAL_DAY_1,
];

/// Text whose measured width is the per-label budget when choosing a step.
pub const RULER_SAMPLE_TEXT: &str = "__00:00__";

/// A labelled ruler tick.
#[derive(Clone, Debug, PartialEq)]
pub struct RulerTick {
    /// Timestamp of the tick.
    pub timestamp_ms: i64,
    /// Horizontal pixel position.
    pub x: f64,
    /// Label text.
    pub label: String,
    /// `true` on local midnight; such ticks carry a day label and are
    /// drawn emphasized.
    pub is_day: bool,
}

/// Ruler layout for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ruler {
    step_ms: Option<i64>,
    ticks: SmallVec<[RulerTick; 16]>,
    minor_ticks: SmallVec<[f64; 16]>,
}

impl Ruler {
    /// Lays out the ruler for `window` across `width` pixels.
    ///
    /// `label_width` is the measured width of [`RULER_SAMPLE_TEXT`]. Ticks
    /// align to local time as reported by `formatter`. When no step fits the
    /// ruler is empty.
    pub fn layout(
        window: Window,
        width: f64,
        label_width: f64,
        cursor_ms: i64,
        formatter: &dyn TimeFormatter,
    ) -> Self {
        let mut ruler = Self::default();
        if !(width > 0.0 && width.is_finite()) {
            return ruler;
        }
        let offset = formatter.utc_offset_ms(cursor_ms);
        let axis = LinearAxis::new(window.min_ms, window.max_ms - window.min_ms, width)
            .with_origin_offset(offset);
        let Some(step) = axis.choose_step(&RULER_LADDER, label_width, cursor_ms) else {
            log::trace!("no ruler step fits {width}px with {label_width}px labels");
            return ruler;
        };
        ruler.step_ms = Some(step);

        let half_step = axis.step_extent(step) / 2.0;
        for tick in axis.ticks(step) {
            let is_day = (tick.value + offset).rem_euclid(INTERVAL_DAY_1) == 0;
            let label = if is_day {
                formatter.format_day(tick.value)
            } else {
                formatter.format_tick(tick.value)
            };
            if tick.x - half_step > 0.0 {
                ruler.minor_ticks.push(tick.x - half_step);
            }
            ruler.ticks.push(RulerTick {
                timestamp_ms: tick.value,
                x: tick.x,
                label,
                is_day,
            });
        }
        if let Some(last) = ruler.ticks.last() {
            let trailing = last.x + half_step;
            if trailing <= width {
                ruler.minor_ticks.push(trailing);
            }
        }
        ruler
    }

    /// Step chosen for the labels, or `None` when nothing fits.
    #[must_use]
    pub const fn step_ms(&self) -> Option<i64> {
        self.step_ms
    }

    /// Labelled ticks, left to right.
    #[must_use]
    pub fn ticks(&self) -> &[RulerTick] {
        &self.ticks
    }

    /// Positions of the unlabelled half-step ticks, left to right.
    #[must_use]
    pub fn minor_ticks(&self) -> &[f64] {
        &self.minor_ticks
    }
}
