//! Watch-face simulator for desktop.
//!
//! Runs the dial engine against the `embedded-graphics-simulator`
//! window and stands in for all four host event sources:
//!
//! - clock: one simulated minute per real second
//! - battery: slow drain, plus Up/Down to nudge the charge
//! - steps: steady accumulation, plus Space for a burst
//! - configuration pushes: keyboard-driven partial updates
//!
//! Keys: `T` toggles 12/24h, `B`/`F`/`S` cycle the background/
//! foreground/secondary colors (delivered as `0xRRGGBB` pushes, the
//! same encoding the real settings channel uses).

mod store;
mod timing;

use std::thread;
use std::time::Instant;

use chrono::Local;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use watchface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use watchface_common::widgets::draw_face;
use watchface_common::{ConfigUpdate, DialStyle, DisplayShape, FaceLayout, WatchState};

use crate::store::MemoryStore;
use crate::timing::{FRAME_TIME, SIMULATED_MINUTE};

/// Background colors offered on the `B` key.
const BACKGROUND_CYCLE: [u32; 4] = [0x000000, 0x000055, 0x550000, 0x005500];

/// Foreground colors offered on the `F` key.
const FOREGROUND_CYCLE: [u32; 4] = [0xFFFFFF, 0xFFFF00, 0x55FFAA, 0xFFAAAA];

/// Secondary colors offered on the `S` key.
const SECONDARY_CYCLE: [u32; 4] = [0xAAAAAA, 0x555555, 0xAAAAFF, 0xAAFFAA];

/// Minutes of simulated time between 1% battery drain steps.
const DRAIN_INTERVAL_MINUTES: u32 = 5;

/// Steps accumulated per simulated minute.
const STEPS_PER_MINUTE: u32 = 90;

fn main() {
    let mut display: SimulatorDisplay<Rgb888> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Watch Face Sim", &output_settings);

    let style = DialStyle {
        shape: DisplayShape::Round,
        layout: FaceLayout::SplitHourMinute,
        fill_inset: 2,
    };

    let mut store = MemoryStore::new();
    let mut state = WatchState::new(&store, style);

    // Simulated sensor state
    let mut sim_clock = Local::now().naive_local();
    let mut battery: u8 = 80;
    let mut steps: u32 = 2_500;
    let mut minute_count: u32 = 0;

    // Startup peek: same order the real face initializes in
    state.handle_battery(battery);
    state.handle_tick(sim_clock);
    state.handle_steps(steps, &mut store);

    // Color cycle positions
    let mut background_idx = 0usize;
    let mut foreground_idx = 0usize;
    let mut secondary_idx = 0usize;

    let mut next_minute = Instant::now() + SIMULATED_MINUTE;

    'running: loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::T => {
                            let push = ConfigUpdate::default().with_use_24h(!state.config.use_24h);
                            state.handle_config_push(&push, sim_clock, &mut store);
                        }
                        Keycode::B => {
                            background_idx = (background_idx + 1) % BACKGROUND_CYCLE.len();
                            let push = ConfigUpdate::default()
                                .with_background_hex(BACKGROUND_CYCLE[background_idx]);
                            state.handle_config_push(&push, sim_clock, &mut store);
                        }
                        Keycode::F => {
                            foreground_idx = (foreground_idx + 1) % FOREGROUND_CYCLE.len();
                            let push = ConfigUpdate::default()
                                .with_foreground_hex(FOREGROUND_CYCLE[foreground_idx]);
                            state.handle_config_push(&push, sim_clock, &mut store);
                        }
                        Keycode::S => {
                            secondary_idx = (secondary_idx + 1) % SECONDARY_CYCLE.len();
                            let push = ConfigUpdate::default()
                                .with_secondary_hex(SECONDARY_CYCLE[secondary_idx]);
                            state.handle_config_push(&push, sim_clock, &mut store);
                        }
                        Keycode::Up => {
                            battery = (battery + 5).min(100);
                            state.handle_battery(battery);
                        }
                        Keycode::Down => {
                            battery = battery.saturating_sub(5);
                            state.handle_battery(battery);
                        }
                        Keycode::Space => {
                            steps += 500;
                            state.handle_steps(steps, &mut store);
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Simulated minute tick drives the clock and the slow sensors
        if Instant::now() >= next_minute {
            next_minute += SIMULATED_MINUTE;
            sim_clock += chrono::Duration::minutes(1);
            minute_count += 1;

            state.handle_tick(sim_clock);

            steps += STEPS_PER_MINUTE;
            state.handle_steps(steps, &mut store);

            if minute_count % DRAIN_INTERVAL_MINUTES == 0 {
                battery = battery.saturating_sub(1);
                state.handle_battery(battery);
            }
        }

        // One draw pass per refresh cycle, only when something changed
        if state.scheduler.needs_redraw() {
            draw_face(&mut display, &state);
            state.scheduler.complete_redraw();
        }
        window.update(&display);

        while let Some(line) = state.log.pop() {
            println!("[watchface] {line}");
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
