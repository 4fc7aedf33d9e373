// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap and scroll resolution: pixel offsets to timestamps.

use crate::record::{RecordStore, Tier};

/// Why a resolved timestamp ended up where it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Snap {
    /// Inside the Major2 record at this index; snapped to its start.
    Major2(usize),
    /// Inside the Major1 record at this index; snapped to its start.
    Major1(usize),
    /// In the gap just before the Major1 record at this index (the newer
    /// neighbour); snapped forward to its start.
    Major1Gap(usize),
    /// No record matched; the raw candidate was kept.
    None,
}

/// Outcome of [`resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved {
    /// Timestamp to move the cursor to.
    pub timestamp_ms: i64,
    /// How it was obtained.
    pub snap: Snap,
}

/// Converts a pixel distance into a whole-millisecond offset at the given
/// interval and viewport width. Zero width yields zero.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "pixel offsets within a viewport map to a bounded number of intervals"
)]
pub fn offset_ms_for_pixels(interval_ms: i64, width: f64, pixels: f64) -> i64 {
    if !(width > 0.0 && width.is_finite()) {
        return 0;
    }
    (interval_ms as f64 / width * pixels) as i64
}

/// Timestamp under a tap at `x`, before any snapping.
///
/// The tap is measured from the viewport center in whole pixels.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "a tap inside the viewport is at most half an interval away"
)]
pub fn tap_candidate(cursor_ms: i64, interval_ms: i64, width: f64, x: f64) -> i64 {
    if !(width > 0.0 && width.is_finite()) {
        return cursor_ms;
    }
    let from_center = crate::trunc_px(x - width / 2.0);
    cursor_ms.saturating_add((interval_ms as f64 * from_center / width) as i64)
}

/// Snaps `candidate_ms` to a record boundary.
///
/// Major2 records win over Major1 records; both match inclusively at either
/// end. Between two Major1 records the candidate snaps forward to the newer
/// one. Anything else is returned unchanged.
#[must_use]
pub fn resolve<P>(store: &RecordStore<P>, candidate_ms: i64) -> Resolved {
    let major2 = store.get(Tier::Major2);
    if let Some(i) = major2.iter().position(|r| r.contains_inclusive(candidate_ms)) {
        return Resolved {
            timestamp_ms: major2[i].timestamp_ms(),
            snap: Snap::Major2(i),
        };
    }

    let major1 = store.get(Tier::Major1);
    for (i, record) in major1.iter().enumerate() {
        if record.contains_inclusive(candidate_ms) {
            return Resolved {
                timestamp_ms: record.timestamp_ms(),
                snap: Snap::Major1(i),
            };
        }
        if let Some(newer) = i.checked_sub(1).map(|n| &major1[n]) {
            if candidate_ms > record.end_ms() && candidate_ms < newer.timestamp_ms() {
                return Resolved {
                    timestamp_ms: newer.timestamp_ms(),
                    snap: Snap::Major1Gap(i - 1),
                };
            }
        }
    }

    Resolved {
        timestamp_ms: candidate_ms,
        snap: Snap::None,
    }
}
