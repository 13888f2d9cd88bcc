//! Face rendering widgets.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb888>` for
//! platform independence. Draw errors are not actionable here and are
//! discarded.

mod dial;
mod text;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::config::DIAL_MARGIN;
use crate::state::WatchState;

pub use dial::{draw_center_dots, draw_progress_arcs, draw_ticks};
pub use text::draw_face_text;

/// Draw one complete frame of the face: background, tick marks,
/// progress arcs, center dots, and all text fields.
pub fn draw_face<D>(
    display: &mut D,
    state: &WatchState,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let bounds = display.bounding_box();
    let center = bounds.center();
    let radius = (bounds.size.width.min(bounds.size.height) / 2) as i32 - DIAL_MARGIN;

    display.clear(state.config.background).ok();
    draw_ticks(display, center, radius);
    draw_progress_arcs(
        display,
        center,
        radius,
        state.battery.percent(),
        state.steps.progress_percent(),
        &state.style,
    );
    draw_center_dots(display, center);
    draw_face_text(display, state, center);
}
