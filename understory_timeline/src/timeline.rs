// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The timeline controller.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;
use understory_timing::{Debounce, Easing, Tween};

use crate::clock::Clock;
use crate::config::{ConfigError, Orientation, TimelineConfig};
use crate::cursor::TimeCursor;
use crate::format::{DefaultFormatter, TimeFormatter};
use crate::gesture::{PointerTracker, Release};
use crate::interval::{self, IntervalController};
use crate::listener::{self, TimelineListener};
use crate::paint::{RenderSurface, Scene, TextStyle};
use crate::projector::{Geometry, Viewport, Window, under_cursor};
use crate::record::{self, RecordStore, Tier, TimeRecord};
use crate::resolver::{self, Resolved};
use crate::ruler::{RULER_SAMPLE_TEXT, Ruler};

bitflags::bitflags! {
    /// What changed since the last geometry pass.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Dirty: u8 {
        /// A tier's records were replaced.
        const RECORDS  = 0b0001;
        /// The cursor moved.
        const CURSOR   = 0b0010;
        /// The interval changed.
        const INTERVAL = 0b0100;
        /// The viewport was resized or re-oriented.
        const VIEWPORT = 0b1000;
    }
}

// Movement a pointer may make before a press stops being a tap.
const TAP_SLOP: f64 = 8.0;
// Release speed, in pixels per second, below which a drag does not fling.
const MIN_FLING_VELOCITY: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CursorMotion {
    /// Tap-to-select or [`Timeline::set_cursor_animated`].
    Glide,
    /// Momentum after a fling.
    Fling,
}

#[derive(Clone, Copy, Debug)]
struct CursorAnimation {
    motion: CursorMotion,
    base_ms: i64,
    tween: Tween,
}

#[derive(Clone, Copy, Debug)]
struct IntervalAnimation {
    base_ms: i64,
    tween: Tween,
}

/// A zoomable, scrollable timeline.
///
/// `Timeline` owns the cursor, the interval, the three record tiers and every
/// piece of transient input state. Mutations mark it dirty; geometry is
/// recomputed lazily the next time it is read. Animations and the settle
/// notification advance only inside [`Timeline::on_frame`], which the host
/// calls once per frame while [`Timeline::on_frame`] keeps returning `true`.
///
/// `P` is the record payload type and `C` the wall-clock source.
pub struct Timeline<P, C: Clock> {
    clock: C,
    config: TimelineConfig,
    size: Size,
    store: RecordStore<P>,
    cursor: TimeCursor,
    interval: IntervalController,
    dirty: Dirty,
    geometry: Geometry,
    interval_animation: Option<IntervalAnimation>,
    cursor_animation: Option<CursorAnimation>,
    settle: Debounce,
    touched: bool,
    wait_for_touch_up: bool,
    pointer: PointerTracker,
    formatter: Box<dyn TimeFormatter>,
    listener: Option<Box<dyn TimelineListener<P>>>,
}

impl<P, C: Clock> fmt::Debug for Timeline<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timeline")
            .field("size", &self.size)
            .field("cursor_ms", &self.cursor.get())
            .field("interval_ms", &self.interval.get())
            .field("dirty", &self.dirty)
            .field("interval_animation", &self.interval_animation)
            .field("cursor_animation", &self.cursor_animation)
            .field("settle", &self.settle)
            .field("touched", &self.touched)
            .field("wait_for_touch_up", &self.wait_for_touch_up)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl<P, C: Clock> Timeline<P, C> {
    /// Creates a timeline with the default configuration, its cursor at the
    /// clock's current time.
    pub fn new(clock: C) -> Self {
        Self::build(clock, TimelineConfig::default())
    }

    /// Creates a timeline with `config`, rejecting invalid configurations.
    pub fn with_config(clock: C, config: TimelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(clock, config))
    }

    fn build(clock: C, config: TimelineConfig) -> Self {
        let now = clock.now_ms();
        Self {
            cursor: TimeCursor::new(now, now),
            interval: IntervalController::new(config.initial_interval_ms),
            clock,
            config,
            size: Size::ZERO,
            store: RecordStore::new(),
            dirty: Dirty::all(),
            geometry: Geometry::new(),
            interval_animation: None,
            cursor_animation: None,
            settle: Debounce::new(),
            touched: false,
            wait_for_touch_up: false,
            pointer: PointerTracker::default(),
            formatter: Box::new(DefaultFormatter::default()),
            listener: None,
        }
    }

    fn now(&self) -> i64 {
        self.clock.now_ms()
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// The wall-clock source.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Sets the pixel size of the timeline area.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.dirty |= Dirty::VIEWPORT;
        }
    }

    /// Pixel size of the timeline area.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.size
    }

    /// Switches between portrait and landscape tier insets.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.config.orientation != orientation {
            self.config.orientation = orientation;
            self.dirty |= Dirty::VIEWPORT;
        }
    }

    /// Replaces every record of `tier`, returning the previous ones.
    ///
    /// `records` must be sorted newest first.
    pub fn set_records(
        &mut self,
        tier: Tier,
        records: Vec<TimeRecord<P>>,
    ) -> Vec<TimeRecord<P>> {
        self.dirty |= Dirty::RECORDS;
        self.store.replace(tier, records)
    }

    /// Records of `tier`, newest first.
    #[must_use]
    pub fn records(&self, tier: Tier) -> &[TimeRecord<P>] {
        self.store.get(tier)
    }

    /// The selected timestamp.
    #[must_use]
    pub fn cursor_ms(&self) -> i64 {
        self.cursor.get()
    }

    /// The visible interval.
    #[must_use]
    pub fn interval_ms(&self) -> i64 {
        self.interval.get()
    }

    /// The visible window around the cursor.
    #[must_use]
    pub fn window(&self) -> Window {
        Window::around(self.cursor.get(), self.interval.get())
    }

    /// Moves the cursor to `min(timestamp_ms, now)` immediately.
    pub fn set_cursor(&mut self, timestamp_ms: i64) {
        let now = self.now();
        if self.cursor.set(timestamp_ms, now) {
            self.dirty |= Dirty::CURSOR;
        }
    }

    /// Glides the cursor to `min(timestamp_ms, now)`.
    ///
    /// The target is fixed when the animation starts, but every frame clamps
    /// to the wall clock again. Replaces any cursor animation in flight.
    pub fn set_cursor_animated(&mut self, timestamp_ms: i64) {
        let now = self.now();
        let base = self.cursor.get();
        let delta = timestamp_ms.min(now).saturating_sub(base);
        log::debug!("cursor glide from {base} by {delta}ms");
        self.cursor_animation = Some(CursorAnimation {
            motion: CursorMotion::Glide,
            base_ms: base,
            tween: Tween::new(
                now,
                self.config.animation_duration_ms,
                delta,
                Easing::AccelerateDecelerate,
            ),
        });
    }

    /// Sets the interval immediately, clamped to the ladder bounds, and
    /// cancels any interval animation.
    pub fn set_interval(&mut self, interval_ms: i64) {
        self.interval_animation = None;
        if self.interval.set(interval_ms) {
            self.dirty |= Dirty::INTERVAL;
        }
    }

    /// Zooms out one ladder step, animated. No-op at the largest interval.
    pub fn step_up(&mut self) {
        let target = interval::step_up_target(self.interval.get());
        self.animate_interval_to(target);
    }

    /// Zooms in one ladder step, animated. No-op at the smallest interval.
    pub fn step_down(&mut self) {
        if let Some(target) = interval::step_down_target(self.interval.get()) {
            self.animate_interval_to(target);
        }
    }

    fn animate_interval_to(&mut self, target_ms: i64) {
        let base = self.interval.get();
        if target_ms == base {
            return;
        }
        log::debug!("interval {base} -> {target_ms}");
        self.interval_animation = Some(IntervalAnimation {
            base_ms: base,
            tween: Tween::new(
                self.now(),
                self.config.animation_duration_ms,
                target_ms - base,
                Easing::AccelerateDecelerate,
            ),
        });
    }

    /// Returns `true` at the smallest interval.
    #[must_use]
    pub fn is_min_interval(&self) -> bool {
        self.interval.is_min()
    }

    /// Returns `true` at the largest interval.
    #[must_use]
    pub fn is_max_interval(&self) -> bool {
        self.interval.is_max()
    }

    /// Advances animations and the settle timer to the clock's current time.
    ///
    /// Returns `true` while the host should keep scheduling frames.
    pub fn on_frame(&mut self) -> bool {
        let now = self.now();

        if let Some(animation) = self.interval_animation {
            let sample = animation.tween.sample(now);
            log::trace!("interval sample {sample:?}");
            if self.interval.set(animation.base_ms.saturating_add(sample.value)) {
                self.dirty |= Dirty::INTERVAL;
            }
            if sample.finished {
                self.interval_animation = None;
            }
        }

        if let Some(animation) = self.cursor_animation {
            let sample = animation.tween.sample(now);
            log::trace!("cursor sample {sample:?}");
            if self
                .cursor
                .set(animation.base_ms.saturating_add(sample.value), now)
            {
                self.dirty |= Dirty::CURSOR;
            }
            if sample.finished {
                self.cursor_animation = None;
                if animation.motion == CursorMotion::Fling {
                    self.notify_selected();
                }
            }
        }

        if self.settle.poll(now) {
            self.notify_selected();
        }

        self.is_animating() || self.settle.is_armed()
    }

    fn notify_selected(&mut self) {
        let timestamp = self.cursor.get();
        log::debug!("time selected: {timestamp}");
        if let Some(listener) = self.listener.as_deref_mut() {
            let background = record::record_at(self.store.get(Tier::Background), timestamp);
            listener.on_time_selected(timestamp, background);
        }
    }

    fn notify_selecting(&mut self) {
        if let Some(listener) = self.listener.as_deref_mut() {
            listener.on_time_selecting();
        }
    }

    /// What changed since the last geometry pass.
    #[must_use]
    pub fn dirty(&self) -> Dirty {
        self.dirty
    }

    /// Returns `true` if the next read of [`Timeline::geometry`] recomputes.
    #[must_use]
    pub fn needs_update(&self) -> bool {
        !self.dirty.is_empty()
    }

    fn refresh(&mut self) {
        if self.dirty.is_empty() {
            return;
        }
        let viewport = Viewport {
            size: self.size,
            interval_ms: self.interval.get(),
            cursor_ms: self.cursor.get(),
            now_ms: self.now(),
        };
        self.geometry.recompute(&viewport, &self.store, &self.config);
        self.dirty = Dirty::empty();
        if let Some(listener) = self.listener.as_deref_mut() {
            for tier in self.geometry.backfill().tiers() {
                listener::request_more(listener, tier);
            }
        }
    }

    /// Current geometry, recomputed first if anything changed.
    ///
    /// Each recompute re-sends backfill requests for every tier that still
    /// needs older data.
    pub fn geometry(&mut self) -> &Geometry {
        self.refresh();
        &self.geometry
    }

    /// Ruler layout for the current window, given the measured width of
    /// [`RULER_SAMPLE_TEXT`].
    #[must_use]
    pub fn ruler(&self, label_width: f64) -> Ruler {
        Ruler::layout(
            self.window(),
            self.size.width,
            label_width,
            self.cursor.get(),
            &*self.formatter,
        )
    }

    /// Name of the current interval, for example `"1 hour"`.
    #[must_use]
    pub fn scale_label(&self) -> &'static str {
        interval::scale_label(self.interval.get())
    }

    /// Returns `true` while the cursor is close enough to the wall clock for
    /// the header to read "Now".
    #[must_use]
    pub fn is_now(&self) -> bool {
        self.now().saturating_sub(self.cursor.get()) < self.config.now_threshold_ms
    }

    /// Header time text: `"Now"` or the formatted cursor time.
    #[must_use]
    pub fn time_label(&self) -> String {
        if self.is_now() {
            String::from("Now")
        } else {
            self.formatter.format_time(self.cursor.get())
        }
    }

    /// Header date text.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.formatter.format_date(self.cursor.get())
    }

    /// Paints the whole timeline into `surface`.
    pub fn paint<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) {
        self.refresh();
        let label_width = surface
            .measure_text(RULER_SAMPLE_TEXT, TextStyle::RulerLabel)
            .width;
        let ruler = self.ruler(label_width);
        let time_label = self.time_label();
        let date_label = self.date_label();
        Scene {
            size: self.size,
            density: self.config.density,
            base_offset: self.config.base_offset(),
            geometry: &self.geometry,
            ruler: &ruler,
            scale_label: self.scale_label(),
            time_label: &time_label,
            is_now: self.is_now(),
            date_label: &date_label,
        }
        .paint(surface);
        log::trace!("painted header {time_label:?} with {} ticks", ruler.ticks().len());
    }

    /// The first record of `tier` under the cursor (Major2 includes the
    /// record's end).
    #[must_use]
    pub fn current_record(&self, tier: Tier) -> Option<&TimeRecord<P>> {
        let cursor = self.cursor.get();
        self.store
            .get(tier)
            .iter()
            .find(|r| under_cursor(tier, r, cursor))
    }

    /// The nearest record of `tier` starting after the cursor.
    #[must_use]
    pub fn next_record(&self, tier: Tier) -> Option<&TimeRecord<P>> {
        record::next_record(self.store.get(tier), self.cursor.get())
    }

    /// The newest record of `tier` starting before the cursor.
    #[must_use]
    pub fn prev_record(&self, tier: Tier) -> Option<&TimeRecord<P>> {
        record::prev_record(self.store.get(tier), self.cursor.get())
    }

    /// The nearest Major1 record starting after the cursor.
    #[must_use]
    pub fn next_major_record(&self) -> Option<&TimeRecord<P>> {
        self.next_record(Tier::Major1)
    }

    /// The newest Major1 record starting before the cursor minus the
    /// configured look-back, which skips the record the cursor sits on.
    #[must_use]
    pub fn prev_major_record(&self) -> Option<&TimeRecord<P>> {
        let reference = self
            .cursor
            .get()
            .saturating_sub(self.config.prev_lookback_ms);
        record::prev_record(self.store.get(Tier::Major1), reference)
    }

    /// The nearest background record starting after the cursor.
    #[must_use]
    pub fn next_background_record(&self) -> Option<&TimeRecord<P>> {
        self.next_record(Tier::Background)
    }

    /// The background record under the cursor.
    #[must_use]
    pub fn current_background_record(&self) -> Option<&TimeRecord<P>> {
        self.current_record(Tier::Background)
    }

    /// Replaces the label formatter.
    pub fn set_formatter(&mut self, formatter: impl TimeFormatter + 'static) {
        self.formatter = Box::new(formatter);
    }

    /// Installs the event sink, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl TimelineListener<P> + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the event sink.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// A finger or button went down.
    ///
    /// During a fling this only stops the fling, reports the position it
    /// stopped at as selected, and ignores further scrolling until the next
    /// touch-down.
    pub fn on_touch_down(&mut self) {
        self.touched = true;
        if self.is_flinging() {
            log::debug!("touch stopped fling");
            self.cursor_animation = None;
            self.wait_for_touch_up = true;
            self.notify_selected();
            return;
        }
        self.wait_for_touch_up = false;
    }

    /// The finger or button was released.
    pub fn on_touch_up(&mut self) {
        self.touched = false;
    }

    /// Drags the timeline by `distance_px` (positive moves the cursor later).
    ///
    /// Returns `false` if the scroll was ignored because a fling is running or
    /// a fling was just stopped by this touch.
    pub fn on_scroll(&mut self, distance_px: f64) -> bool {
        if self.is_flinging() || self.wait_for_touch_up {
            return false;
        }
        let now = self.now();
        let offset =
            resolver::offset_ms_for_pixels(self.interval.get(), self.size.width, distance_px);
        self.cursor_animation = None;
        if self
            .cursor
            .set(self.cursor.get().saturating_add(offset), now)
        {
            self.dirty |= Dirty::CURSOR;
        }
        self.notify_selecting();
        self.settle.arm(now, self.config.settle_delay_ms);
        true
    }

    /// Selects the time under a tap at `x`, snapping to record boundaries.
    pub fn on_single_tap(&mut self, x: f64) -> Resolved {
        let candidate = resolver::tap_candidate(
            self.cursor.get(),
            self.interval.get(),
            self.size.width,
            x,
        );
        let resolved = resolver::resolve(&self.store, candidate);
        log::debug!("tap at {x} resolved to {resolved:?}");
        self.set_cursor_animated(resolved.timestamp_ms);
        self.settle.arm(self.now(), self.config.settle_delay_ms);
        resolved
    }

    /// Starts momentum scrolling for a release at `velocity` pixels per
    /// second (positive to the right, which moves back in time).
    pub fn on_fling(&mut self, velocity: f64) {
        if self.wait_for_touch_up {
            return;
        }
        let interval = self.interval.get() as f64;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "fling duration and travel are bounded by realistic pointer velocities"
        )]
        let (duration, delta) = (
            (velocity.abs() * self.config.fling_duration_multiplier) as u32,
            (-velocity * self.config.fling_distance_multiplier * interval) as i64,
        );
        log::debug!("fling {velocity}px/s: {delta}ms over {duration}ms");
        self.settle.cancel();
        self.cursor_animation = Some(CursorAnimation {
            motion: CursorMotion::Fling,
            base_ms: self.cursor.get(),
            tween: Tween::new(
                self.now(),
                duration,
                delta,
                Easing::Decelerate(self.config.fling_deceleration),
            ),
        });
    }

    /// Ends a pinch: spreading (`scale_factor > 1`) zooms in, pinching zooms
    /// out.
    pub fn on_scale_end(&mut self, scale_factor: f64) {
        if scale_factor > 1.0 {
            self.step_down();
        } else {
            self.step_up();
        }
    }

    /// Raw pointer press at `x`.
    pub fn pointer_down(&mut self, x: f64) {
        self.pointer = PointerTracker::new(TAP_SLOP * self.config.density);
        self.pointer.down(x, self.now());
        self.on_touch_down();
    }

    /// Raw pointer move to `x`; scrolls once the pointer leaves the tap slop.
    pub fn pointer_move(&mut self, x: f64) {
        if let Some(distance) = self.pointer.move_to(x, self.now()) {
            self.on_scroll(distance);
        }
    }

    /// Raw pointer release at `x`; taps select, fast drags fling.
    pub fn pointer_up(&mut self, x: f64) {
        match self.pointer.up(x, self.now()) {
            Release::Tap { x } if !self.wait_for_touch_up => {
                self.on_single_tap(x);
            }
            Release::Drag { velocity }
                if velocity.abs() > MIN_FLING_VELOCITY * self.config.density =>
            {
                self.on_fling(velocity);
            }
            _ => {}
        }
        self.on_touch_up();
    }

    /// Returns `true` between a touch-down and the matching touch-up.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Returns `true` while any animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.interval_animation.is_some() || self.cursor_animation.is_some()
    }

    /// Returns `true` while a fling is running.
    #[must_use]
    pub fn is_flinging(&self) -> bool {
        matches!(
            self.cursor_animation,
            Some(CursorAnimation {
                motion: CursorMotion::Fling,
                ..
            })
        )
    }

    /// Returns `true` while a settle notification is pending.
    #[must_use]
    pub fn is_settle_pending(&self) -> bool {
        self.settle.is_armed()
    }

    /// Stops everything in flight without notifying, for when the host view
    /// goes away.
    pub fn detach(&mut self) {
        self.settle.cancel();
        self.interval_animation = None;
        self.cursor_animation = None;
        self.pointer.cancel();
        self.touched = false;
        self.wait_for_touch_up = false;
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;

    use kurbo::Size;

    use super::{Dirty, Timeline};
    use crate::clock::{Clock, ManualClock};
    use crate::config::{ConfigError, TimelineConfig};
    use crate::interval::{INTERVAL_DAY_7, INTERVAL_HOUR_1, INTERVAL_HOUR_6, INTERVAL_MIN_30};

    const NOW: i64 = 1_761_955_200_000;

    fn timeline() -> (Rc<ManualClock>, Timeline<(), Rc<ManualClock>>) {
        let clock = Rc::new(ManualClock::new(NOW));
        let mut t = Timeline::new(Rc::clone(&clock));
        t.set_viewport_size(Size::new(720.0, 200.0));
        (clock, t)
    }

    #[test]
    fn starts_at_now_and_dirty() {
        let (_, t) = timeline();
        assert_eq!(t.cursor_ms(), NOW);
        assert_eq!(t.interval_ms(), INTERVAL_HOUR_1);
        assert_eq!(t.dirty(), Dirty::all());
    }

    #[test]
    fn with_config_rejects_invalid() {
        let config = TimelineConfig {
            density: 0.0,
            ..TimelineConfig::default()
        };
        assert!(matches!(
            Timeline::<(), _>::with_config(ManualClock::new(0), config),
            Err(ConfigError::InvalidDensity(_))
        ));
    }

    #[test]
    fn mutations_coalesce_into_one_recompute() {
        let (_, mut t) = timeline();
        t.geometry();
        assert!(!t.needs_update());
        t.set_cursor(NOW - 1_000);
        t.set_interval(INTERVAL_MIN_30);
        assert_eq!(t.dirty(), Dirty::CURSOR | Dirty::INTERVAL);
        t.geometry();
        assert!(!t.needs_update());
    }

    #[test]
    fn unchanged_values_do_not_dirty() {
        let (_, mut t) = timeline();
        t.geometry();
        t.set_cursor(NOW + 5_000);
        t.set_interval(INTERVAL_HOUR_1);
        t.set_viewport_size(Size::new(720.0, 200.0));
        assert!(!t.needs_update());
    }

    #[test]
    fn interval_animation_settles_on_ladder() {
        let (clock, mut t) = timeline();
        t.step_up();
        assert!(t.is_animating());
        clock.advance(75);
        assert!(t.on_frame());
        let mid = t.interval_ms();
        assert!(mid > INTERVAL_HOUR_1 && mid < INTERVAL_HOUR_6, "mid-flight {mid}");
        clock.advance(75);
        t.on_frame();
        assert_eq!(t.interval_ms(), INTERVAL_HOUR_6);
        assert!(!t.is_animating());
    }

    #[test]
    fn step_up_at_max_is_a_no_op() {
        let (_, mut t) = timeline();
        t.set_interval(i64::MAX);
        assert!(t.is_max_interval());
        t.step_up();
        assert!(!t.is_animating());
    }

    #[test]
    fn huge_flings_saturate_and_stay_in_the_past() {
        let (clock, mut t) = timeline();
        t.set_interval(INTERVAL_DAY_7);
        for velocity in [f64::NEG_INFINITY, -1.0e14] {
            t.on_fling(velocity);
            assert!(t.is_flinging());
            clock.advance(16);
            t.on_frame();
            assert!(t.cursor_ms() <= clock.now_ms(), "cursor moved past now");
        }
        t.on_fling(f64::INFINITY);
        clock.advance(16);
        t.on_frame();
        assert!(t.cursor_ms() < NOW);
    }

    #[test]
    fn detach_cancels_everything() {
        let (_, mut t) = timeline();
        t.on_scroll(10.0);
        t.step_down();
        t.detach();
        assert!(!t.is_animating());
        assert!(!t.is_settle_pending());
        assert!(!t.on_frame());
    }
}
