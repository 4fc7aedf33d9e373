// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time records, tiers, and the per-tier record store.
//!
//! Every tier holds its records **newest first** (descending by start time).
//! The store does not validate this order; the lookup helpers here and the
//! backfill check in the projector rely on it.

use alloc::vec::Vec;

/// One of the three independent record channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Primary events, drawn in the middle band.
    Major1,
    /// Secondary events, drawn in a narrower band on top of [`Tier::Major1`].
    Major2,
    /// Coverage records (for example, continuous recordings) drawn underneath.
    Background,
}

impl Tier {
    /// All tiers, in projection order.
    pub const ALL: [Self; 3] = [Self::Major1, Self::Major2, Self::Background];

    /// Index of this tier into per-tier arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Major1 => 0,
            Self::Major2 => 1,
            Self::Background => 2,
        }
    }

    /// Returns `true` if the cursor counts as "inside" a record of this tier
    /// when it sits exactly on the record's end.
    ///
    /// Only [`Tier::Major2`] uses an inclusive end, so that touching events
    /// stay highlighted at their shared boundary.
    #[must_use]
    pub const fn selection_includes_end(self) -> bool {
        matches!(self, Self::Major2)
    }
}

/// An immutable, time-stamped record with an opaque payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeRecord<P> {
    timestamp_ms: i64,
    duration_ms: i64,
    payload: P,
}

impl<P> TimeRecord<P> {
    /// Creates a record starting at `timestamp_ms` (absolute) lasting
    /// `duration_ms`.
    ///
    /// Negative durations are clamped to zero; a zero duration is valid and
    /// means "instant or unknown length".
    #[must_use]
    pub fn new(timestamp_ms: i64, duration_ms: i64, payload: P) -> Self {
        Self {
            timestamp_ms,
            duration_ms: duration_ms.max(0),
            payload,
        }
    }

    /// Absolute start time.
    #[must_use]
    pub const fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    /// Duration, never negative.
    #[must_use]
    pub const fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    /// Absolute end time (`timestamp + duration`).
    #[must_use]
    pub const fn end_ms(&self) -> i64 {
        self.timestamp_ms.saturating_add(self.duration_ms)
    }

    /// Borrow the payload.
    #[must_use]
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// Consume the record, returning the payload.
    #[must_use]
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Half-open containment: `start <= t < end`.
    #[must_use]
    pub const fn contains(&self, t: i64) -> bool {
        t >= self.timestamp_ms && t < self.end_ms()
    }

    /// Closed containment: `start <= t <= end`.
    #[must_use]
    pub const fn contains_inclusive(&self, t: i64) -> bool {
        t >= self.timestamp_ms && t <= self.end_ms()
    }

    /// Returns `true` if any part of the record lies within `[min, max]`.
    #[must_use]
    pub const fn overlaps(&self, min: i64, max: i64) -> bool {
        self.end_ms() >= min && self.timestamp_ms <= max
    }
}

/// Three independently ordered record collections, one per [`Tier`].
#[derive(Clone, Debug)]
pub struct RecordStore<P> {
    tiers: [Vec<TimeRecord<P>>; 3],
}

impl<P> Default for RecordStore<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> RecordStore<P> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tiers: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// Replaces the records of `tier` wholesale, returning the previous ones.
    pub fn replace(&mut self, tier: Tier, records: Vec<TimeRecord<P>>) -> Vec<TimeRecord<P>> {
        core::mem::replace(&mut self.tiers[tier.index()], records)
    }

    /// Records of `tier`, newest first.
    #[must_use]
    pub fn get(&self, tier: Tier) -> &[TimeRecord<P>] {
        &self.tiers[tier.index()]
    }

    /// The oldest loaded record of `tier` (its last element).
    #[must_use]
    pub fn oldest(&self, tier: Tier) -> Option<&TimeRecord<P>> {
        self.get(tier).last()
    }

    /// The newest loaded record of `tier` (its first element).
    #[must_use]
    pub fn newest(&self, tier: Tier) -> Option<&TimeRecord<P>> {
        self.get(tier).first()
    }

    /// Returns `true` if no tier holds any record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.iter().all(Vec::is_empty)
    }
}

/// The first record (in stored order) whose half-open span contains `t`.
#[must_use]
pub fn record_at<P>(records: &[TimeRecord<P>], t: i64) -> Option<&TimeRecord<P>> {
    records.iter().find(|r| r.contains(t))
}

/// The nearest record starting strictly after `t`.
///
/// Walks the newest-first list until it finds the pair where `t` moves from
/// "before the newer record" to "at or after the older record", and returns
/// the newer one. Returns `None` when `t` is newer than every record or older
/// than the oldest one.
#[must_use]
pub fn next_record<P>(records: &[TimeRecord<P>], t: i64) -> Option<&TimeRecord<P>> {
    records
        .windows(2)
        .find(|pair| t < pair[0].timestamp_ms && t >= pair[1].timestamp_ms)
        .map(|pair| &pair[0])
}

/// The newest record starting strictly before `t`.
#[must_use]
pub fn prev_record<P>(records: &[TimeRecord<P>], t: i64) -> Option<&TimeRecord<P>> {
    records.iter().find(|r| r.timestamp_ms < t)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{RecordStore, Tier, TimeRecord, next_record, prev_record, record_at};

    fn rec(ts: i64, dur: i64) -> TimeRecord<()> {
        TimeRecord::new(ts, dur, ())
    }

    #[test]
    fn negative_duration_is_clamped() {
        let r = rec(100, -5);
        assert_eq!(r.duration_ms(), 0);
        assert_eq!(r.end_ms(), 100);
    }

    #[test]
    fn containment_bounds() {
        let r = rec(100, 10);
        assert!(r.contains(100));
        assert!(!r.contains(110), "end is exclusive");
        assert!(r.contains_inclusive(110));
        assert!(!r.contains_inclusive(111));
        assert!(!r.contains(99));
    }

    #[test]
    fn zero_length_record_is_never_contained_half_open() {
        let r = rec(100, 0);
        assert!(!r.contains(100));
        assert!(r.contains_inclusive(100));
    }

    #[test]
    fn overlap_touching_edges_counts() {
        let r = rec(100, 10);
        assert!(r.overlaps(110, 200));
        assert!(r.overlaps(0, 100));
        assert!(!r.overlaps(111, 200));
        assert!(!r.overlaps(0, 99));
    }

    #[test]
    fn store_replaces_wholesale_and_reports_ends() {
        let mut store = RecordStore::new();
        assert!(store.is_empty());
        store.replace(Tier::Major1, vec![rec(300, 1), rec(200, 1), rec(100, 1)]);
        assert_eq!(store.newest(Tier::Major1).map(TimeRecord::timestamp_ms), Some(300));
        assert_eq!(store.oldest(Tier::Major1).map(TimeRecord::timestamp_ms), Some(100));
        assert!(store.get(Tier::Major2).is_empty());

        let old = store.replace(Tier::Major1, Vec::new());
        assert_eq!(old.len(), 3);
        assert!(store.is_empty());
        assert!(store.oldest(Tier::Major1).is_none());
    }

    #[test]
    fn record_at_returns_first_match() {
        let records = vec![rec(150, 100), rec(100, 100), rec(0, 10)];
        assert_eq!(record_at(&records, 160).map(TimeRecord::timestamp_ms), Some(150));
        assert_eq!(record_at(&records, 120).map(TimeRecord::timestamp_ms), Some(100));
        assert!(record_at(&records, 50).is_none());
    }

    #[test]
    fn next_record_scans_for_sign_change() {
        let records = vec![rec(300, 10), rec(200, 10), rec(100, 10)];
        assert_eq!(next_record(&records, 250).map(TimeRecord::timestamp_ms), Some(300));
        assert_eq!(next_record(&records, 200).map(TimeRecord::timestamp_ms), Some(300));
        assert_eq!(next_record(&records, 150).map(TimeRecord::timestamp_ms), Some(200));
        assert!(next_record(&records, 300).is_none(), "nothing newer");
        assert!(next_record(&records, 50).is_none(), "older than the oldest record");
        assert!(next_record(&records[..1], 0).is_none(), "single record has no pairs");
    }

    #[test]
    fn prev_record_is_strictly_older() {
        let records = vec![rec(300, 10), rec(200, 10), rec(100, 10)];
        assert_eq!(prev_record(&records, 300).map(TimeRecord::timestamp_ms), Some(200));
        assert_eq!(prev_record(&records, 301).map(TimeRecord::timestamp_ms), Some(300));
        assert!(prev_record(&records, 100).is_none());
    }

    #[test]
    fn tier_metadata() {
        assert_eq!(Tier::ALL.map(Tier::index), [0, 1, 2]);
        assert!(Tier::Major2.selection_includes_end());
        assert!(!Tier::Major1.selection_includes_end());
        assert!(!Tier::Background.selection_includes_end());
    }
}
