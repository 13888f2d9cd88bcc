//! Text fields: date, time, battery, steps.
//!
//! Positions are offsets from the dial center (see [`crate::config`]),
//! matching the face's original placement: date above the time, the
//! time across the center, battery and steps flanking the bottom.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::config::{
    FaceLayout,
    TEXT_DATE_OFFSET_Y,
    TEXT_MERIDIEM_OFFSET_X,
    TEXT_MERIDIEM_OFFSET_Y,
    TEXT_METRIC_OFFSET_X,
    TEXT_METRIC_OFFSET_Y,
    TEXT_TIME_SPLIT_GAP,
};
use crate::state::WatchState;
use crate::styles::{CENTERED, DATE_FONT, LABEL_FONT, LEFT, RIGHT, TIME_FONT, text_style};

/// Draw all text fields for the current state.
pub fn draw_face_text<D>(
    display: &mut D,
    state: &WatchState,
    center: Point,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let foreground = text_style(TIME_FONT, state.config.foreground);
    let secondary = text_style(TIME_FONT, state.config.secondary);
    let date_style = text_style(DATE_FONT, state.config.foreground);
    let label_style = text_style(LABEL_FONT, state.config.foreground);

    // Date above the time
    Text::with_text_style(
        state.time.date_text(),
        Point::new(center.x, center.y + TEXT_DATE_OFFSET_Y),
        date_style,
        CENTERED,
    )
    .draw(display)
    .ok();

    match state.style.layout {
        FaceLayout::SplitHourMinute => {
            Text::with_text_style(
                state.time.hour_text(),
                Point::new(center.x - TEXT_TIME_SPLIT_GAP, center.y),
                foreground,
                RIGHT,
            )
            .draw(display)
            .ok();
            Text::with_text_style(
                state.time.minute_text(),
                Point::new(center.x + TEXT_TIME_SPLIT_GAP, center.y),
                secondary,
                LEFT,
            )
            .draw(display)
            .ok();
        }
        FaceLayout::CombinedWithMeridiem => {
            let mut combined: String<12> = String::new();
            let _ = write!(combined, "{}:{}", state.time.hour_text(), state.time.minute_text());
            Text::with_text_style(&combined, Point::new(center.x, center.y), foreground, CENTERED)
                .draw(display)
                .ok();

            if !state.time.meridiem_text().is_empty() {
                Text::with_text_style(
                    state.time.meridiem_text(),
                    Point::new(
                        center.x + TEXT_MERIDIEM_OFFSET_X,
                        center.y + TEXT_MERIDIEM_OFFSET_Y,
                    ),
                    text_style(DATE_FONT, state.config.foreground),
                    LEFT,
                )
                .draw(display)
                .ok();
            }
        }
    }

    // Battery bottom-left, steps bottom-right
    Text::with_text_style(
        state.battery.battery_text().as_str(),
        Point::new(center.x - TEXT_METRIC_OFFSET_X, center.y + TEXT_METRIC_OFFSET_Y),
        label_style,
        CENTERED,
    )
    .draw(display)
    .ok();

    Text::with_text_style(
        state.steps.steps_text().as_str(),
        Point::new(center.x + TEXT_METRIC_OFFSET_X, center.y + TEXT_METRIC_OFFSET_Y),
        label_style,
        CENTERED,
    )
    .draw(display)
    .ok();
}
