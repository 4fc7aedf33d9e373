// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event sink for timeline notifications.

use crate::record::{Tier, TimeRecord};

/// Receives notifications from a [`Timeline`](crate::Timeline).
///
/// Every method has an empty default so implementors only override what they
/// care about. Calls are synchronous and happen from inside the timeline
/// method that triggered them.
pub trait TimelineListener<P> {
    /// The cursor is moving under direct manipulation (drag or scroll).
    fn on_time_selecting(&mut self) {}

    /// The cursor has settled on `timestamp_ms`.
    ///
    /// `background` is the background record under the cursor, if any.
    fn on_time_selected(&mut self, timestamp_ms: i64, background: Option<&TimeRecord<P>>) {
        let _ = (timestamp_ms, background);
    }

    /// The oldest loaded background record starts after the visible window.
    fn on_request_more_background_data(&mut self) {}

    /// The oldest loaded Major1 record starts after the visible window.
    fn on_request_more_major1_data(&mut self) {}

    /// The oldest loaded Major2 record starts after the visible window.
    fn on_request_more_major2_data(&mut self) {}
}

/// Dispatches the backfill request matching `tier`.
pub(crate) fn request_more<P, L: TimelineListener<P> + ?Sized>(listener: &mut L, tier: Tier) {
    match tier {
        Tier::Major1 => listener.on_request_more_major1_data(),
        Tier::Major2 => listener.on_request_more_major2_data(),
        Tier::Background => listener.on_request_more_background_data(),
    }
}

#[cfg(test)]
mod tests {
    use super::{TimelineListener, request_more};
    use crate::record::Tier;

    #[derive(Default)]
    struct Counts {
        major1: u32,
        major2: u32,
        background: u32,
    }

    impl TimelineListener<()> for Counts {
        fn on_request_more_major1_data(&mut self) {
            self.major1 += 1;
        }

        fn on_request_more_major2_data(&mut self) {
            self.major2 += 1;
        }

        fn on_request_more_background_data(&mut self) {
            self.background += 1;
        }
    }

    #[test]
    fn backfill_requests_route_by_tier() {
        let mut counts = Counts::default();
        for tier in Tier::ALL {
            request_more(&mut counts, tier);
        }
        request_more(&mut counts, Tier::Major2);
        assert_eq!((counts.major1, counts.major2, counts.background), (1, 2, 1));
    }

    #[test]
    fn defaults_are_no_ops() {
        struct Silent;
        impl TimelineListener<()> for Silent {}
        let mut s = Silent;
        s.on_time_selecting();
        s.on_time_selected(0, None);
        request_more(&mut s, Tier::Background);
    }
}
