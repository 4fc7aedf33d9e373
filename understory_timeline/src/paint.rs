// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw command emission.
//!
//! The timeline never touches pixels. A paint pass hands geometry plus a
//! style tag to a [`RenderSurface`]; mapping tags to colors, fonts and
//! strokes is the surface's job. [`DisplayList`] is a recording surface for
//! tests and for hosts that replay commands later.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect, RoundedRect, Size, Vec2};

use crate::projector::Geometry;
use crate::record::Tier;
use crate::ruler::Ruler;

/// Style tag for shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    /// Past time without any record.
    NoData,
    /// A background record.
    Background,
    /// A Major1 record.
    Major1,
    /// Left edge of a Major1 record.
    Major1Edge,
    /// A Major2 record.
    Major2,
    /// Left edge of a Major2 record.
    Major2Edge,
    /// The background record under the cursor.
    SelectedBackground,
    /// The Major1 record under the cursor.
    SelectedMajor1,
    /// The Major2 record under the cursor.
    SelectedMajor2,
    /// A labelled ruler tick.
    RulerTick,
    /// A half-step ruler tick.
    RulerMinorTick,
    /// The fixed center pointer.
    Pointer,
    /// Badge behind the current-time text.
    HeaderBadge,
}

/// Style tag for text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Regular ruler label.
    RulerLabel,
    /// Ruler label on local midnight.
    RulerDayLabel,
    /// Name of the current interval.
    ScaleLabel,
    /// Current time (or "Now") in the header badge.
    HeaderTime,
    /// Current date in the header.
    HeaderDate,
}

/// Something the timeline can paint into.
///
/// Text origins are the left end of the baseline.
pub trait RenderSurface {
    /// Size of `text` when drawn with `style`.
    fn measure_text(&mut self, text: &str, style: TextStyle) -> Size;
    /// Fills `rect`.
    fn fill_rect(&mut self, rect: Rect, style: Style);
    /// Strokes `line`.
    fn line(&mut self, line: Line, style: Style);
    /// Draws `text` at `origin`.
    fn text(&mut self, origin: Point, text: &str, style: TextStyle);
    /// Fills `rect`.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, style: Style);
}

/// One recorded call on a [`DisplayList`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`RenderSurface::fill_rect`].
    FillRect {
        /// Filled area.
        rect: Rect,
        /// Style tag.
        style: Style,
    },
    /// [`RenderSurface::line`].
    Line {
        /// Stroked segment.
        line: Line,
        /// Style tag.
        style: Style,
    },
    /// [`RenderSurface::text`].
    Text {
        /// Baseline origin.
        origin: Point,
        /// Drawn text.
        text: String,
        /// Style tag.
        style: TextStyle,
    },
    /// [`RenderSurface::fill_rounded_rect`].
    FillRoundedRect {
        /// Filled area.
        rect: RoundedRect,
        /// Style tag.
        style: Style,
    },
}

/// A [`RenderSurface`] that records commands and measures text with a fixed
/// advance per character.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    char_width: f64,
    line_height: f64,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new(8.0, 12.0)
    }
}

impl DisplayList {
    /// Creates an empty list measuring every character as `char_width` by
    /// `line_height`.
    #[must_use]
    pub const fn new(char_width: f64, line_height: f64) -> Self {
        Self {
            commands: Vec::new(),
            char_width,
            line_height,
        }
    }

    /// Recorded commands, in call order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drops all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderSurface for DisplayList {
    fn measure_text(&mut self, text: &str, _style: TextStyle) -> Size {
        Size::new(text.chars().count() as f64 * self.char_width, self.line_height)
    }

    fn fill_rect(&mut self, rect: Rect, style: Style) {
        self.commands.push(DrawCommand::FillRect { rect, style });
    }

    fn line(&mut self, line: Line, style: Style) {
        self.commands.push(DrawCommand::Line { line, style });
    }

    fn text(&mut self, origin: Point, text: &str, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            style,
        });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, style: Style) {
        self.commands.push(DrawCommand::FillRoundedRect { rect, style });
    }
}

/// Sample text giving the header badge its minimum width.
pub(crate) const HEADER_SAMPLE_TEXT: &str = "00:00:00";

/// Everything a paint pass draws, already computed.
pub(crate) struct Scene<'a> {
    pub(crate) size: Size,
    pub(crate) density: f64,
    pub(crate) base_offset: f64,
    pub(crate) geometry: &'a Geometry,
    pub(crate) ruler: &'a Ruler,
    pub(crate) scale_label: &'a str,
    pub(crate) time_label: &'a str,
    pub(crate) is_now: bool,
    pub(crate) date_label: &'a str,
}

impl Scene<'_> {
    pub(crate) fn paint<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        let g = self.geometry;
        surface.fill_rect(g.no_data(), Style::NoData);

        let background = g.tier(Tier::Background);
        for p in &background.visible {
            surface.fill_rect(p.rect, Style::Background);
        }
        if let Some(p) = background.selected {
            surface.fill_rect(p.rect, Style::SelectedBackground);
        }
        for (tier, fill, edge) in [
            (Tier::Major1, Style::Major1, Style::Major1Edge),
            (Tier::Major2, Style::Major2, Style::Major2Edge),
        ] {
            for p in &g.tier(tier).visible {
                surface.fill_rect(p.rect, fill);
                surface.line(left_edge(p.rect), edge);
            }
        }
        for (tier, style) in [
            (Tier::Major1, Style::SelectedMajor1),
            (Tier::Major2, Style::SelectedMajor2),
        ] {
            if let Some(p) = g.tier(tier).selected {
                surface.fill_rect(p.rect, style);
            }
        }

        self.paint_ruler(surface);
        self.paint_header(surface);
    }

    fn paint_ruler<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        let h = self.size.height;
        let o = self.base_offset;
        for tick in self.ruler.ticks() {
            let style = if tick.is_day {
                TextStyle::RulerDayLabel
            } else {
                TextStyle::RulerLabel
            };
            let text = surface.measure_text(&tick.label, style);
            surface.line(
                Line::new((tick.x, h - o / 3.0), (tick.x, h - o)),
                Style::RulerTick,
            );
            surface.text(
                Point::new(tick.x - text.width / 2.0, h - text.height),
                &tick.label,
                style,
            );
        }
        for &x in self.ruler.minor_ticks() {
            surface.line(
                Line::new((x, h - o / 1.5), (x, h - o / 2.0)),
                Style::RulerMinorTick,
            );
        }

        let d = self.density;
        let scale = surface.measure_text(self.scale_label, TextStyle::ScaleLabel);
        surface.text(
            Point::new(2.0 * d, d + scale.height),
            self.scale_label,
            TextStyle::ScaleLabel,
        );
    }

    fn paint_header<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        let d = self.density;
        let center = self.size.width / 2.0;
        surface.line(
            Line::new((center, 0.0), (center, self.size.height)),
            Style::Pointer,
        );

        let text = surface.measure_text(self.time_label, TextStyle::HeaderTime);
        let mut badge_width = text.width;
        if !self.is_now {
            let sample = surface.measure_text(HEADER_SAMPLE_TEXT, TextStyle::HeaderTime);
            badge_width = badge_width.max(sample.width);
        }
        let nudge = Vec2::new(0.0, 3.0 * d);
        let badge = Rect::new(
            center - badge_width / 2.0,
            0.0,
            center + badge_width / 2.0,
            text.height,
        )
        .inflate(4.0 * d, 3.0 * d)
            + nudge;
        surface.fill_rounded_rect(RoundedRect::from_rect(badge, 3.0 * d), Style::HeaderBadge);
        surface.text(
            Point::new(center - text.width / 2.0, text.height) + nudge,
            self.time_label,
            TextStyle::HeaderTime,
        );

        let date = surface.measure_text(self.date_label, TextStyle::HeaderDate);
        surface.text(
            Point::new(self.size.width - date.width - 2.0 * d, date.height + d),
            self.date_label,
            TextStyle::HeaderDate,
        );
    }
}

fn left_edge(rect: Rect) -> Line {
    Line::new((rect.x0, rect.y0), (rect.x0, rect.y1))
}

#[cfg(test)]
mod tests {
    use kurbo::{Line, Point, Rect, RoundedRect, Size};

    use super::{DisplayList, DrawCommand, RenderSurface, Scene, Style, TextStyle};
    use crate::projector::Geometry;
    use crate::ruler::Ruler;

    #[test]
    fn display_list_records_in_order() {
        let mut list = DisplayList::default();
        assert_eq!(list.measure_text("abc", TextStyle::RulerLabel), Size::new(24.0, 12.0));
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Style::NoData);
        list.line(Line::new((0.0, 0.0), (0.0, 1.0)), Style::Pointer);
        list.text(Point::ORIGIN, "x", TextStyle::HeaderDate);
        list.fill_rounded_rect(
            RoundedRect::new(0.0, 0.0, 1.0, 1.0, 0.5),
            Style::HeaderBadge,
        );
        assert_eq!(list.commands().len(), 4);
        assert!(matches!(
            list.commands()[2],
            DrawCommand::Text {
                style: TextStyle::HeaderDate,
                ..
            }
        ));
        list.clear();
        assert!(list.commands().is_empty());
    }

    fn header_scene<'a>(
        geometry: &'a Geometry,
        ruler: &'a Ruler,
        time: &'a str,
        is_now: bool,
    ) -> Scene<'a> {
        Scene {
            size: Size::new(400.0, 100.0),
            density: 1.0,
            base_offset: 7.0,
            geometry,
            ruler,
            scale_label: "1 hour",
            time_label: time,
            is_now,
            date_label: "Nov 1, 2025",
        }
    }

    fn badge(list: &DisplayList) -> RoundedRect {
        list.commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::FillRoundedRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn badge_keeps_minimum_width_unless_now() {
        let geometry = Geometry::new();
        let ruler = Ruler::default();

        let mut list = DisplayList::default();
        header_scene(&geometry, &ruler, "1:02", false).paint(&mut list);
        // "00:00:00" is 64px wide, plus 4px on each side.
        assert_eq!(badge(&list).rect().width(), 72.0);
        assert_eq!(badge(&list).rect().y0, 0.0);

        let mut list = DisplayList::default();
        header_scene(&geometry, &ruler, "Now", true).paint(&mut list);
        assert_eq!(badge(&list).rect().width(), 32.0);
    }

    #[test]
    fn header_text_positions() {
        let geometry = Geometry::new();
        let ruler = Ruler::default();
        let mut list = DisplayList::default();
        header_scene(&geometry, &ruler, "Now", true).paint(&mut list);
        let texts: alloc::vec::Vec<_> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { origin, text, .. } => Some((text.as_str(), *origin)),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            alloc::vec![
                ("1 hour", Point::new(2.0, 13.0)),
                ("Now", Point::new(188.0, 15.0)),
                ("Nov 1, 2025", Point::new(310.0, 13.0)),
            ]
        );
    }
}
