// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timeline --heading-base-level=0

//! Understory Timeline: a headless, zoomable and scrollable timeline.
//!
//! A timeline shows a window of time centered on a **cursor** (the selected
//! timestamp, never in the future). The window's width is the **interval**,
//! which zooms through a fixed ladder from one minute to seven days. Records
//! live in three independent **tiers**: two "major" event tiers drawn as
//! bands, and a "background" coverage tier drawn underneath them.
//!
//! This crate owns the state and the math. It decides which records are
//! visible and where their pixel rectangles are, which record sits under the
//! cursor, where a tap should snap to, which ruler labels fit, and how
//! gestures and animations move the cursor and interval. It does not draw:
//! [`Timeline::paint`] emits geometry plus style tags to a [`RenderSurface`].
//!
//! - [`Timeline`]: the controller. Holds records, cursor, interval, dirty
//!   flags, animations and the settle timer; dispatches gestures.
//! - [`Geometry`]: one projection pass, recomputed lazily when dirty.
//! - [`resolve`]: tap snapping (Major2 first, then Major1 and its gaps).
//! - [`Ruler`]: label step, tick positions and day labels.
//! - [`TimelineListener`]: selecting/selected notifications and backfill
//!   requests for tiers whose loaded data starts after the visible window.
//! - [`Clock`] and [`TimeFormatter`]: injected wall clock and label text.
//!
//! Time only moves when the host says so. Call [`Timeline::on_frame`] from the
//! frame loop while it returns `true`; use [`ManualClock`] in tests.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_timeline::{ManualClock, Tier, TimeRecord, Timeline};
//!
//! const MIN: i64 = 60_000;
//! // 2025-11-01T12:00:00Z
//! let noon = 1_761_998_400_000;
//!
//! let clock = ManualClock::new(noon);
//! let mut timeline: Timeline<&str, _> = Timeline::new(&clock);
//! timeline.set_viewport_size(Size::new(720.0, 200.0));
//! timeline.set_records(
//!     Tier::Major1,
//!     vec![TimeRecord::new(noon - 30 * MIN, 10 * MIN, "doorbell")],
//! );
//!
//! // One hour across 720px: the record covers the first 120px.
//! let rect = timeline.geometry().tier(Tier::Major1).visible[0].rect;
//! assert_eq!((rect.x0, rect.x1), (0.0, 120.0));
//!
//! // A tap inside the record snaps to its start once the glide finishes.
//! timeline.on_single_tap(60.0);
//! clock.advance(150);
//! timeline.on_frame();
//! assert_eq!(timeline.cursor_ms(), noon - 30 * MIN);
//! assert_eq!(timeline.current_record(Tier::Major1).map(|r| *r.payload()), Some("doorbell"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`. The default `std` feature adds
//! [`SystemClock`] and local-time label formatting.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod clock;
mod config;
mod cursor;
mod format;
pub mod gesture;
mod interval;
mod listener;
mod paint;
mod projector;
mod record;
mod resolver;
mod ruler;
mod timeline;

#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock};
pub use config::{ConfigError, Orientation, TimelineConfig};
pub use cursor::TimeCursor;
pub use format::{DefaultFormatter, TimeFormatter};
pub use interval::{
    INTERVAL_DAY_1, INTERVAL_DAY_7, INTERVAL_HOUR_1, INTERVAL_HOUR_6, INTERVAL_HOUR_12,
    INTERVAL_LADDER, INTERVAL_MIN_1, INTERVAL_MIN_5, INTERVAL_MIN_15, INTERVAL_MIN_30,
    IntervalController, MAX_INTERVAL_MS, MIN_INTERVAL_MS, clamp_interval, scale_label,
    step_down_target, step_up_target,
};
pub use listener::TimelineListener;
pub use paint::{DisplayList, DrawCommand, RenderSurface, Style, TextStyle};
pub use projector::{Geometry, ProjectedRecord, TierGeometry, TierSet, Viewport, Window};
pub use record::{RecordStore, Tier, TimeRecord, next_record, prev_record, record_at};
pub use resolver::{Resolved, Snap, offset_ms_for_pixels, resolve, tap_candidate};
pub use ruler::{RULER_LADDER, RULER_SAMPLE_TEXT, Ruler, RulerTick};
pub use timeline::{Dirty, Timeline};

/// Drops the fractional part of a pixel coordinate.
#[expect(
    clippy::cast_possible_truncation,
    reason = "pixel coordinates are far inside the i64 range"
)]
pub(crate) fn trunc_px(v: f64) -> f64 {
    v as i64 as f64
}
