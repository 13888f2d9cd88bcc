//! Dial chrome: tick marks, progress arcs, center dots.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, Line, PrimitiveStyle};

use crate::colors::{BATTERY_FILL, BATTERY_TRACK, DARK_GRAY, STEPS_FILL, STEPS_TRACK};
use crate::config::{
    CENTER_DOT_COUNT,
    CENTER_DOT_DIAMETER,
    CENTER_DOT_OFFSET_Y,
    CENTER_DOT_SPACING,
    DialStyle,
};
use crate::geometry::{self, ArcRange, ProgressArc};

/// Draw the 31 tick marks as 1px radial lines.
pub fn draw_ticks<D>(
    display: &mut D,
    center: Point,
    radius: i32,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let style = PrimitiveStyle::with_stroke(DARK_GRAY, 1);
    for mark in geometry::tick_marks(center, radius) {
        Line::new(mark.inner, mark.outer).into_styled(style).draw(display).ok();
    }
}

/// Draw both progress arcs: track at full window width, fill on top.
pub fn draw_progress_arcs<D>(
    display: &mut D,
    center: Point,
    dial_radius: i32,
    battery_percent: u8,
    steps_percent: u8,
    style: &DialStyle,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let radius = geometry::arc_radius(dial_radius);

    let battery = geometry::battery_arc(battery_percent, style);
    draw_progress_arc(display, center, radius, &battery, BATTERY_TRACK, BATTERY_FILL);

    let steps = geometry::steps_arc(steps_percent, style);
    draw_progress_arc(display, center, radius, &steps, STEPS_TRACK, STEPS_FILL);
}

fn draw_progress_arc<D>(
    display: &mut D,
    center: Point,
    radius: i32,
    arc: &ProgressArc,
    track_color: Rgb888,
    fill_color: Rgb888,
) where
    D: DrawTarget<Color = Rgb888>,
{
    draw_arc_range(display, center, radius, &arc.track, arc.width, track_color);
    if let Some(fill) = &arc.fill {
        draw_arc_range(display, center, radius, fill, arc.fill_width, fill_color);
    }
}

/// Stroke one angular range.
///
/// Dial angles run clockwise from 12 o'clock; the drawing backend
/// measures counterclockwise from 3 o'clock. A dial point at angle θ
/// sits at backend angle `90 − θ`, so the range `[start, end]` maps to
/// a sweep beginning at `90 − end`.
fn draw_arc_range<D>(
    display: &mut D,
    center: Point,
    radius: i32,
    range: &ArcRange,
    width: u32,
    color: Rgb888,
) where
    D: DrawTarget<Color = Rgb888>,
{
    if width == 0 {
        return;
    }
    let diameter = (radius * 2) as u32;
    let start = Angle::from_degrees(90.0 - range.end_deg);
    let sweep = Angle::from_degrees(range.span());
    Arc::with_center(center, diameter, start, sweep)
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
        .ok();
}

/// Three decorative dots below the dial center.
pub fn draw_center_dots<D>(
    display: &mut D,
    center: Point,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let style = PrimitiveStyle::with_fill(DARK_GRAY);
    let x0 = center.x - (CENTER_DOT_COUNT - 1) * CENTER_DOT_SPACING / 2;
    for i in 0..CENTER_DOT_COUNT {
        Circle::with_center(
            Point::new(x0 + i * CENTER_DOT_SPACING, center.y + CENTER_DOT_OFFSET_Y),
            CENTER_DOT_DIAMETER,
        )
        .into_styled(style)
        .draw(display)
        .ok();
    }
}
