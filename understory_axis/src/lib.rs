// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_axis --heading-base-level=0

//! Understory Axis: headless stepping and tick placement for integer axes.
//!
//! This crate answers two questions for a horizontal axis whose world values
//! are integers (typically milliseconds since the Unix epoch):
//!
//! - Which step from a fixed, ascending **ladder** of step sizes is the finest
//!   one whose labels still fit side by side in the available pixels?
//! - Where do the ticks for that step land, both in world units and in view
//!   (pixel) space?
//!
//! Ticks are aligned to multiples of the step after shifting the axis by an
//! optional **origin offset**. For time axes this is the local UTC offset, so
//! that hourly ticks land on local hours and daily ticks on local midnight.
//!
//! It does **not** format labels or draw anything; callers turn [`Tick`]
//! values into text with whatever formatter they use.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_axis::LinearAxis;
//!
//! const MIN: i64 = 60_000;
//! const LADDER: [i64; 3] = [MIN, 5 * MIN, 15 * MIN];
//!
//! // One hour visible across 720 pixels, starting at 11:30 UTC.
//! let start = (11 * 60 + 30) * MIN;
//! let axis = LinearAxis::new(start, 60 * MIN, 720.0);
//!
//! // 60 one-minute labels of 40px do not fit into 720px; 12 five-minute labels do.
//! let step = axis.choose_step(&LADDER, 40.0, start).unwrap();
//! assert_eq!(step, 5 * MIN);
//!
//! let ticks: Vec<_> = axis.ticks(step).collect();
//! assert_eq!(ticks.len(), 12);
//! assert_eq!(ticks[0].value, start + 5 * MIN);
//! assert_eq!(ticks[0].x, 60.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// A linear mapping from a window of integer world values onto a pixel extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearAxis {
    start: i64,
    span: i64,
    extent: f64,
    origin_offset: i64,
}

/// A single tick produced by [`LinearAxis::ticks`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Position of the tick in world units (without the origin offset).
    pub value: i64,
    /// Position of the tick in view units, relative to the start of the extent.
    pub x: f64,
    /// Zero-based index of the tick within the window.
    pub index: usize,
}

impl LinearAxis {
    /// Creates an axis mapping `[start, start + span]` onto `[0, extent]`.
    ///
    /// A non-positive `span` is treated as `1` so that conversions stay finite.
    #[must_use]
    pub const fn new(start: i64, span: i64, extent: f64) -> Self {
        Self {
            start,
            span: if span > 0 { span } else { 1 },
            extent,
            origin_offset: 0,
        }
    }

    /// Returns a copy whose ticks align to multiples of the step after adding
    /// `offset` to world values.
    #[must_use]
    pub const fn with_origin_offset(mut self, offset: i64) -> Self {
        self.origin_offset = offset;
        self
    }

    /// First visible world value.
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Visible world span.
    #[must_use]
    pub const fn span(&self) -> i64 {
        self.span
    }

    /// Last visible world value.
    #[must_use]
    pub const fn end(&self) -> i64 {
        self.start.saturating_add(self.span)
    }

    /// View extent in pixels.
    #[must_use]
    pub const fn extent(&self) -> f64 {
        self.extent
    }

    /// Offset applied before aligning ticks.
    #[must_use]
    pub const fn origin_offset(&self) -> i64 {
        self.origin_offset
    }

    /// Converts a world value into view units.
    ///
    /// The multiplication happens before the division so that values lying on
    /// exact pixel boundaries map to exact pixel coordinates.
    #[must_use]
    pub fn to_view(&self, value: i64) -> f64 {
        (value.saturating_sub(self.start)) as f64 * self.extent / self.span as f64
    }

    /// Converts a view offset (in pixels) into a world delta.
    #[must_use]
    pub fn view_delta_to_world(&self, dx: f64) -> f64 {
        self.span as f64 / self.extent * dx
    }

    /// Width in view units covered by a single step.
    #[must_use]
    pub fn step_extent(&self, step: i64) -> f64 {
        step as f64 * self.extent / self.span as f64
    }

    /// Number of whole steps in the window.
    #[must_use]
    pub const fn step_count(&self, step: i64) -> i64 {
        if step <= 0 { 0 } else { self.span / step }
    }

    /// Returns `true` if the window holds at least one step and
    /// `step_count(step)` labels of `label_width` pixels fit into the extent
    /// without overlapping.
    #[must_use]
    pub fn fits(&self, step: i64, label_width: f64) -> bool {
        let count = self.step_count(step);
        count > 0 && (count as f64) * label_width < self.extent
    }

    /// Returns `true` if `anchor`'s phase within `step` (after the origin
    /// offset) lies inside the window span.
    ///
    /// Steps much larger than the window fail this check when the anchor sits
    /// late in its step, which lets callers fall through to a coarser entry.
    #[must_use]
    pub const fn phase_within_span(&self, step: i64, anchor: i64) -> bool {
        if step <= 0 {
            return false;
        }
        anchor.saturating_add(self.origin_offset).rem_euclid(step) < self.span
    }

    /// Picks the first (finest) ladder entry that both passes
    /// [`Self::phase_within_span`] for `anchor` and [`Self::fits`] for
    /// `label_width`.
    ///
    /// `ladder` is expected in ascending order. Returns `None` when no entry
    /// fits, in which case nothing should be drawn.
    #[must_use]
    pub fn choose_step(&self, ladder: &[i64], label_width: f64, anchor: i64) -> Option<i64> {
        ladder
            .iter()
            .copied()
            .find(|&step| self.phase_within_span(step, anchor) && self.fits(step, label_width))
    }

    /// Iterates over the ticks for `step` inside the window.
    ///
    /// The first tick is the first aligned value strictly after the window
    /// start; exactly [`Self::step_count`] ticks are produced.
    #[must_use]
    pub fn ticks(&self, step: i64) -> Ticks {
        let count = self.step_count(step);
        let first = if count > 0 {
            let local_start = self.start.saturating_add(self.origin_offset);
            local_start - local_start.rem_euclid(step) + step - self.origin_offset
        } else {
            self.start
        };
        Ticks {
            axis: *self,
            step,
            next: first,
            index: 0,
            remaining: usize::try_from(count).unwrap_or(0),
        }
    }
}

/// Iterator returned by [`LinearAxis::ticks`].
#[derive(Clone, Debug)]
pub struct Ticks {
    axis: LinearAxis,
    step: i64,
    next: i64,
    index: usize,
    remaining: usize,
}

impl Iterator for Ticks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.next;
        let tick = Tick {
            value,
            x: self.axis.to_view(value),
            index: self.index,
        };
        self.remaining -= 1;
        self.index += 1;
        self.next = value.saturating_add(self.step);
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Ticks {}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec;
    use std::vec::Vec;

    use super::LinearAxis;

    const MIN: i64 = 60_000;
    const HOUR: i64 = 60 * MIN;

    #[test]
    fn zero_span_is_sanitized() {
        let axis = LinearAxis::new(0, 0, 100.0);
        assert_eq!(axis.span(), 1);
        assert!(axis.to_view(1).is_finite());
    }

    #[test]
    fn to_view_is_exact_on_pixel_boundaries() {
        let axis = LinearAxis::new(0, HOUR, 720.0);
        assert_eq!(axis.to_view(10 * MIN), 120.0);
        assert_eq!(axis.to_view(HOUR), 720.0);
        assert_eq!(axis.to_view(-10 * MIN), -120.0);
    }

    #[test]
    fn view_delta_round_trips_through_world() {
        let axis = LinearAxis::new(0, HOUR, 720.0);
        assert_eq!(axis.view_delta_to_world(120.0), (10 * MIN) as f64);
    }

    #[test]
    fn step_larger_than_span_has_no_ticks() {
        let axis = LinearAxis::new(0, MIN, 720.0);
        assert_eq!(axis.step_count(HOUR), 0);
        assert_eq!(axis.ticks(HOUR).count(), 0);
    }

    #[test]
    fn steps_wider_than_the_window_never_fit() {
        let axis = LinearAxis::new(0, HOUR, 720.0);
        assert!(axis.fits(HOUR, 1.0));
        assert!(!axis.fits(2 * HOUR, 0.0));
        assert!(!axis.fits(0, 0.0));
    }

    #[test]
    fn phase_guard_rejects_late_anchor() {
        let axis = LinearAxis::new(0, MIN, 720.0);
        // Anchor 30s into a 5 min step: inside the 1 min span.
        assert!(axis.phase_within_span(5 * MIN, 30_000));
        // Anchor 4 min into a 5 min step: outside.
        assert!(!axis.phase_within_span(5 * MIN, 4 * MIN));
        assert!(!axis.phase_within_span(0, 0));
    }

    #[test]
    fn choose_step_falls_back_to_coarser_entries() {
        let ladder = [MIN, 5 * MIN, 15 * MIN, 30 * MIN, HOUR];
        let axis = LinearAxis::new(0, 6 * HOUR, 720.0);
        // 6h: 1 min -> 360 labels, 5 min -> 72, 15 min -> 24, 30 min -> 12, 1h -> 6.
        assert_eq!(axis.choose_step(&ladder, 50.0, 0), Some(30 * MIN));
        assert_eq!(axis.choose_step(&ladder, 100.0, 0), Some(HOUR));
        assert_eq!(axis.choose_step(&ladder, 29.0, 0), Some(15 * MIN));
        assert_eq!(axis.choose_step(&ladder, 1_000.0, 0), None);
    }

    #[test]
    fn ticks_align_to_origin_offset() {
        // Two hours starting at 00:10 UTC, with a +30 min local offset.
        let axis = LinearAxis::new(10 * MIN, 2 * HOUR, 240.0).with_origin_offset(30 * MIN);
        let values: Vec<i64> = axis.ticks(HOUR).map(|t| t.value).collect();
        // Local start is 00:40, so local ticks are 01:00 and 02:00, i.e. 00:30 and 01:30 UTC.
        assert_eq!(values, vec![30 * MIN, 90 * MIN]);
        let first = axis.ticks(HOUR).next().unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.x, 40.0);
    }

    #[test]
    fn aligned_start_skips_to_next_step() {
        let axis = LinearAxis::new(HOUR, HOUR, 600.0);
        let ticks: Vec<_> = axis.ticks(15 * MIN).collect();
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[0].value, HOUR + 15 * MIN);
        assert_eq!(ticks[3].value, 2 * HOUR);
        assert_eq!(ticks[3].x, 600.0);
    }

    #[test]
    fn negative_values_align_with_euclidean_remainder() {
        let axis = LinearAxis::new(-90 * MIN, 2 * HOUR, 120.0);
        let first = axis.ticks(HOUR).next().unwrap();
        assert_eq!(first.value, -HOUR);
    }
}
