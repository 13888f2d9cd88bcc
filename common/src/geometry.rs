//! Dial geometry: tick marks and progress arcs.
//!
//! Pure functions of the current state and the dial radius — no hidden
//! state, so everything here is testable without a draw target.
//!
//! # Angle Convention
//!
//! Angles are in degrees, measured clockwise from 12 o'clock. The
//! widgets convert to the drawing backend's convention at the last
//! moment; nothing in this module depends on it.

use embedded_graphics::prelude::Point;
use heapless::Vec;
use micromath::F32Ext;

use crate::config::{
    ARC_INSET,
    BATTERY_ARC_END_DEG,
    BATTERY_ARC_START_DEG,
    DialStyle,
    STEPS_ARC_END_DEG,
    STEPS_ARC_START_DEG,
    TICK_COUNT,
    TICK_MAJOR_EVERY,
    TICK_MAJOR_INSET,
    TICK_MINOR_INSET,
    TICK_SPAN,
};

// =============================================================================
// Polar Conversion
// =============================================================================

/// Convert a dial angle to screen coordinates.
///
/// Clockwise from top: `x = cx + r·sin θ`, `y = cy − r·cos θ`.
/// Truncates toward zero, matching integer rasterization.
pub fn polar_to_cartesian(
    center: Point,
    radius: i32,
    angle_deg: f32,
) -> Point {
    let rad = angle_deg * (core::f32::consts::PI / 180.0);
    let x = center.x as f32 + radius as f32 * rad.sin();
    let y = center.y as f32 - radius as f32 * rad.cos();
    Point::new(x as i32, y as i32)
}

// =============================================================================
// Tick Marks
// =============================================================================

/// One radial tick segment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TickMark {
    pub inner: Point,
    pub outer: Point,
    /// Five-minute positions get the longer tick.
    pub major: bool,
}

/// Tick marks for minute positions `-15..=15`, one per 6 degrees,
/// sweeping 180 degrees centered on 12 o'clock.
pub fn tick_marks(
    center: Point,
    radius: i32,
) -> Vec<TickMark, TICK_COUNT> {
    let mut marks = Vec::new();
    for i in -TICK_SPAN..=TICK_SPAN {
        let angle_deg = 360.0 * i as f32 / 60.0;
        let major = i % TICK_MAJOR_EVERY == 0;
        let inset = if major { TICK_MAJOR_INSET } else { TICK_MINOR_INSET };
        let _ = marks.push(TickMark {
            inner: polar_to_cartesian(center, radius - inset, angle_deg),
            outer: polar_to_cartesian(center, radius, angle_deg),
            major,
        });
    }
    marks
}

// =============================================================================
// Progress Arcs
// =============================================================================

/// An angular range on the dial, `start_deg <= end_deg`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ArcRange {
    pub start_deg: f32,
    pub end_deg: f32,
}

impl ArcRange {
    #[inline]
    pub fn span(&self) -> f32 { self.end_deg - self.start_deg }
}

/// A progress arc: full-window track plus an optional fill.
/// `fill` is `None` at 0% so no zero-length arc is drawn.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ProgressArc {
    pub track: ArcRange,
    pub fill: Option<ArcRange>,
    pub width: u32,
    pub fill_width: u32,
}

/// Radius of the progress arcs, inset from the tick circle.
#[inline]
pub const fn arc_radius(dial_radius: i32) -> i32 { dial_radius - ARC_INSET }

/// Battery arc. The fill grows from the window start, left to right
/// as charge increases.
pub fn battery_arc(
    percent: u8,
    style: &DialStyle,
) -> ProgressArc {
    let track = ArcRange {
        start_deg: BATTERY_ARC_START_DEG,
        end_deg: BATTERY_ARC_END_DEG,
    };
    let fill = (percent > 0).then(|| ArcRange {
        start_deg: track.start_deg,
        end_deg: track.start_deg + track.span() * f32::from(percent) / 100.0,
    });
    ProgressArc {
        track,
        fill,
        width: style.arc_width(),
        fill_width: style.fill_width(),
    }
}

/// Steps arc. The fill grows from the window end, right to left, so
/// the two fills advance toward each other at the bottom center.
pub fn steps_arc(
    percent: u8,
    style: &DialStyle,
) -> ProgressArc {
    let track = ArcRange {
        start_deg: STEPS_ARC_START_DEG,
        end_deg: STEPS_ARC_END_DEG,
    };
    let fill = (percent > 0).then(|| ArcRange {
        start_deg: track.end_deg - track.span() * f32::from(percent) / 100.0,
        end_deg: track.end_deg,
    });
    ProgressArc {
        track,
        fill,
        width: style.arc_width(),
        fill_width: style.fill_width(),
    }
}

// =============================================================================
// Tests
// =============================================================================
