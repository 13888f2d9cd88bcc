//! Layout constants and display style parameters for the watch face.
//!
//! All dial geometry constants live here so that [`crate::geometry`]
//! and the widgets agree on a single set of numbers. Angles use the
//! dial convention: degrees, measured clockwise from 12 o'clock.
//!
//! # Compile-Time Validation
//!
//! Constant groups include `const` assertions that verify ordering at
//! compile time. If the arc windows or tick insets are configured
//! inconsistently, compilation fails.

// =============================================================================
// Screen and Dial
// =============================================================================

/// Display width in pixels (simulator default; hosts may differ).
pub const SCREEN_WIDTH: u32 = 180;

/// Display height in pixels (simulator default; hosts may differ).
pub const SCREEN_HEIGHT: u32 = 180;

/// Margin between the screen edge and the tick-mark circle.
pub const DIAL_MARGIN: i32 = 8;

// =============================================================================
// Tick Marks
// =============================================================================

/// Tick marks cover minute positions `-TICK_SPAN..=TICK_SPAN`,
/// a 180-degree sweep centered on 12 o'clock.
pub const TICK_SPAN: i32 = 15;

/// Total number of tick marks on the dial.
pub const TICK_COUNT: usize = (2 * TICK_SPAN + 1) as usize;

/// Radial length of a minute tick.
pub const TICK_MINOR_INSET: i32 = 3;

/// Radial length of a five-minute tick.
pub const TICK_MAJOR_INSET: i32 = 6;

/// Every Nth minute position gets the longer tick.
pub const TICK_MAJOR_EVERY: i32 = 5;

const _: () = assert!(TICK_MINOR_INSET < TICK_MAJOR_INSET);
const _: () = assert!(TICK_COUNT == 31);

// =============================================================================
// Progress Arc Windows
// =============================================================================

/// Radial gap between the tick circle and the progress arcs.
pub const ARC_INSET: i32 = 4;

/// Battery window start angle. The fill grows from here toward the end.
pub const BATTERY_ARC_START_DEG: f32 = 200.0;

/// Battery window end angle.
pub const BATTERY_ARC_END_DEG: f32 = 250.0;

/// Steps window start angle.
pub const STEPS_ARC_START_DEG: f32 = 110.0;

/// Steps window end angle. The fill grows from here toward the start,
/// so the two arcs advance toward each other at the bottom center.
pub const STEPS_ARC_END_DEG: f32 = 160.0;

const _: () = assert!(BATTERY_ARC_START_DEG < BATTERY_ARC_END_DEG);
const _: () = assert!(STEPS_ARC_START_DEG < STEPS_ARC_END_DEG);
const _: () = assert!(STEPS_ARC_END_DEG < BATTERY_ARC_START_DEG);

// =============================================================================
// Center Dots
// =============================================================================

/// Number of decorative dots below the dial center.
pub const CENTER_DOT_COUNT: i32 = 3;

/// Horizontal spacing between dot centers.
pub const CENTER_DOT_SPACING: i32 = 4;

/// Vertical offset of the dot row from the dial center.
pub const CENTER_DOT_OFFSET_Y: i32 = 52;

/// Dot diameter in pixels.
pub const CENTER_DOT_DIAMETER: u32 = 3;

// =============================================================================
// Text Layout
// =============================================================================

/// Vertical offset of the date line from the dial center.
pub const TEXT_DATE_OFFSET_Y: i32 = -36;

/// Horizontal gap between the split hour/minute fields and the center.
pub const TEXT_TIME_SPLIT_GAP: i32 = 4;

/// Meridiem column offset from the dial center (combined layout only).
pub const TEXT_MERIDIEM_OFFSET_X: i32 = 42;
pub const TEXT_MERIDIEM_OFFSET_Y: i32 = 2;

/// Battery/steps label offsets from the dial center.
pub const TEXT_METRIC_OFFSET_X: i32 = 27;
pub const TEXT_METRIC_OFFSET_Y: i32 = 16;

// =============================================================================
// Display Style
// =============================================================================

/// Physical shape of the host display. Round displays get a wider arc
/// stroke; this is a host capability, never detected by the engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayShape {
    Rectangular,
    Round,
}

impl DisplayShape {
    /// Stroke width of the progress arc tracks.
    #[inline]
    pub const fn arc_stroke_width(self) -> u32 {
        match self {
            Self::Rectangular => 8,
            Self::Round => 14,
        }
    }
}

/// Time field arrangement. The two historical face variants differ
/// only in how the time text is placed; everything else is shared.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FaceLayout {
    /// Hour right-aligned left of center, minute left-aligned right of
    /// center, no meridiem column.
    SplitHourMinute,
    /// Single centered `HH:MM` field with a meridiem column beside it
    /// in 12-hour mode.
    CombinedWithMeridiem,
}

/// Style inputs fixed at session start by the host.
#[derive(Clone, Copy, Debug)]
pub struct DialStyle {
    pub shape: DisplayShape,
    pub layout: FaceLayout,
    /// How much narrower the fill arc stroke is than the track stroke.
    /// The two face variants shipped with 2 and 0 respectively.
    pub fill_inset: u32,
}

impl DialStyle {
    /// Track arc stroke width for this display shape.
    #[inline]
    pub const fn arc_width(&self) -> u32 { self.shape.arc_stroke_width() }

    /// Fill arc stroke width, never wider than the track.
    #[inline]
    pub const fn fill_width(&self) -> u32 { self.arc_width().saturating_sub(self.fill_inset) }
}

// =============================================================================
// Tests
// =============================================================================
