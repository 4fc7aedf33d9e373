// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry projection: records in, pixel rectangles out.
//!
//! The projector is a pure function of the viewport, the interval, the cursor,
//! the wall clock and the record store. [`Geometry::recompute`] reuses the
//! buffers of the previous pass, so a timeline that recomputes every frame
//! does not allocate once its tiers have reached their working size.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::config::TimelineConfig;
use crate::record::{RecordStore, Tier, TimeRecord};

bitflags::bitflags! {
    /// A set of [`Tier`]s.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TierSet: u8 {
        /// [`Tier::Major1`].
        const MAJOR1 = 0b001;
        /// [`Tier::Major2`].
        const MAJOR2 = 0b010;
        /// [`Tier::Background`].
        const BACKGROUND = 0b100;
    }
}

impl TierSet {
    /// The set holding only `tier`.
    #[must_use]
    pub const fn of(tier: Tier) -> Self {
        match tier {
            Tier::Major1 => Self::MAJOR1,
            Tier::Major2 => Self::MAJOR2,
            Tier::Background => Self::BACKGROUND,
        }
    }

    /// Returns `true` if `tier` is in the set.
    #[must_use]
    pub const fn has(self, tier: Tier) -> bool {
        self.contains(Self::of(tier))
    }

    /// Iterates the tiers in the set, in [`Tier::ALL`] order.
    pub fn tiers(self) -> impl Iterator<Item = Tier> {
        Tier::ALL.into_iter().filter(move |&t| self.has(t))
    }
}

/// The visible time window `[cursor - interval / 2, cursor + interval / 2]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Window {
    /// First visible timestamp.
    pub min_ms: i64,
    /// Last visible timestamp.
    pub max_ms: i64,
}

impl Window {
    /// Window centered on `cursor_ms`.
    #[must_use]
    pub const fn around(cursor_ms: i64, interval_ms: i64) -> Self {
        let half = interval_ms / 2;
        Self {
            min_ms: cursor_ms.saturating_sub(half),
            max_ms: cursor_ms.saturating_add(half),
        }
    }
}

/// Everything the projector reads besides the records.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Pixel size of the timeline area.
    pub size: Size,
    /// Visible interval.
    pub interval_ms: i64,
    /// Selected timestamp, at the horizontal center.
    pub cursor_ms: i64,
    /// Wall clock.
    pub now_ms: i64,
}

/// A record that survived the visibility test, with its pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedRecord {
    /// Index of the record in its tier's slice.
    pub index: usize,
    /// Pixel rectangle, horizontally within `[0, width]`.
    pub rect: Rect,
}

/// Projection output for one tier.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TierGeometry {
    /// The first visible record under the cursor, if any.
    pub selected: Option<ProjectedRecord>,
    /// Every other visible record, in stored (newest first) order.
    pub visible: Vec<ProjectedRecord>,
}

impl TierGeometry {
    fn clear(&mut self) {
        self.selected = None;
        self.visible.clear();
    }
}

/// Result of one projection pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    window: Window,
    no_data: Rect,
    tiers: [TierGeometry; 3],
    backfill: TierSet,
}

impl Geometry {
    /// Creates an empty geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Window used by the last pass.
    #[must_use]
    pub const fn window(&self) -> Window {
        self.window
    }

    /// Region from the left edge up to the wall clock.
    ///
    /// It is drawn underneath the records so that any part of the past not
    /// covered by a record reads as "no data".
    #[must_use]
    pub const fn no_data(&self) -> Rect {
        self.no_data
    }

    /// Projection of `tier`.
    #[must_use]
    pub fn tier(&self, tier: Tier) -> &TierGeometry {
        &self.tiers[tier.index()]
    }

    /// Tiers whose oldest loaded record starts after the window.
    #[must_use]
    pub const fn backfill(&self) -> TierSet {
        self.backfill
    }

    /// Recomputes everything from `viewport` and `store`.
    pub fn recompute<P>(
        &mut self,
        viewport: &Viewport,
        store: &RecordStore<P>,
        config: &TimelineConfig,
    ) {
        let window = Window::around(viewport.cursor_ms, viewport.interval_ms);
        self.window = window;
        self.backfill = TierSet::empty();
        for tier in &mut self.tiers {
            tier.clear();
        }

        for tier in Tier::ALL {
            if let Some(oldest) = store.oldest(tier) {
                if window.min_ms < oldest.timestamp_ms() {
                    self.backfill |= TierSet::of(tier);
                }
            }
        }
        if !self.backfill.is_empty() {
            log::debug!("backfill needed for {:?} before {}", self.backfill, window.min_ms);
        }

        let width = viewport.size.width;
        if !(width > 0.0 && width.is_finite()) {
            self.no_data = Rect::ZERO;
            return;
        }
        let interval = viewport.interval_ms as f64;
        let x_of = |t: i64| {
            let offset = t.saturating_sub(window.min_ms) as f64;
            crate::trunc_px(offset * width / interval)
        };
        let band = |tier: Tier| {
            let top = config.tier_inset(tier);
            (top, (viewport.size.height - top).max(top))
        };

        let (top, bottom) = band(Tier::Major1);
        self.no_data = Rect::new(0.0, top, x_of(viewport.now_ms).clamp(0.0, width), bottom);

        for tier in Tier::ALL {
            let (top, bottom) = band(tier);
            let out = &mut self.tiers[tier.index()];
            for (index, record) in store.get(tier).iter().enumerate() {
                if !record.overlaps(window.min_ms, window.max_ms) {
                    continue;
                }
                let left = x_of(record.timestamp_ms()).max(0.0);
                let right = x_of(record.end_ms()).min(width);
                let projected = ProjectedRecord {
                    index,
                    rect: Rect::new(left, top, right, bottom),
                };
                if out.selected.is_none() && under_cursor(tier, record, viewport.cursor_ms) {
                    out.selected = Some(projected);
                } else {
                    out.visible.push(projected);
                }
            }
        }
    }
}

pub(crate) fn under_cursor<P>(tier: Tier, record: &TimeRecord<P>, cursor_ms: i64) -> bool {
    if tier.selection_includes_end() {
        record.contains_inclusive(cursor_ms)
    } else {
        record.contains(cursor_ms)
    }
}
