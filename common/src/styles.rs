//! Pre-built text styles for the face.
//!
//! Character styles carry a color, which is user-configurable, so they
//! are built per draw pass via [`text_style`]; the fonts and the
//! alignment-only [`TextStyle`]s are fixed.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_10_POINT, PROFONT_14_POINT, PROFONT_24_POINT};

/// Large font for the time fields.
pub const TIME_FONT: &MonoFont<'static> = &PROFONT_24_POINT;

/// Medium font for the date line and the meridiem column.
pub const DATE_FONT: &MonoFont<'static> = &PROFONT_14_POINT;

/// Small font for the battery and steps labels.
pub const LABEL_FONT: &MonoFont<'static> = &PROFONT_10_POINT;

/// Horizontally centered, anchored at the vertical middle.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Right-aligned (hour field in the split layout).
pub const RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned (minute field in the split layout, meridiem column).
pub const LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Character style for a fixed font in a configurable color.
#[inline]
pub fn text_style(
    font: &'static MonoFont<'static>,
    color: Rgb888,
) -> MonoTextStyle<'static, Rgb888> {
    MonoTextStyle::new(font, color)
}
