// Crate-level lints: allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Analog dial clock for a small embedded display, hosted in the simulator.
//!
//! The face is rebuilt from scratch on every redraw: the current wall-clock
//! time and the live theme go through the pure layout engine into the
//! renderer, which issues background, tick, numeral, and hand draw calls in
//! a fixed stacking order. Nothing is drawn outside the dirty path; the
//! timer tick and the configuration channel only mark the display dirty.
//!
//! # Redraw cadence
//!
//! Once per minute. The loop reads absolute time fresh on each redraw
//! rather than incrementing state, so ticks skipped while the host was
//! suspended self-correct on the next frame. With fast-forward enabled the
//! cadence rises to once per second and each real second advances the
//! apparent time by a minute, for checking hand geometry without waiting.
//!
//! # Controls (simulator mode)
//!
//! | Key | Action |
//! |-----|--------|
//! | `1` | Send the classic palette over the configuration channel |
//! | `2` | Send the ember palette |
//! | `3` | Send the paper palette |
//! | `=` | Send a major-tick width increase |
//! | `-` | Send a major-tick width decrease |
//! | `P` | Cycle the face preset |
//! | `F` | Toggle the fast-forward time transform |
//!
//! Palette and width keys go through the same sparse-update path a paired
//! companion app would use; every applied message is persisted, so the
//! theme survives restarts. Key repeat is ignored to prevent message spam
//! when holding keys.

mod colors;
mod config;
mod layout;
mod presets;
mod render;
mod settings;
mod styles;
mod theme;

use std::thread;
use std::time::Instant;

use chrono::{Local, Timelike};
use config::{
    CAPABILITY, FAST_TICK_INTERVAL, PALETTE_CLASSIC, PALETTE_EMBER, PALETTE_PAPER, POLL_INTERVAL,
    SCREEN_HEIGHT, SCREEN_WIDTH, SETTINGS_DIR, SHAPE, TICK_INTERVAL,
};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use layout::{ClockReading, FaceGeometry};
use presets::PRESETS;
use render::FaceRenderer;
use settings::{FileStore, SettingsManager};
use theme::{ThemeField, ThemeUpdate};

fn main() {
    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Dial Clock", &output_settings);

    // Theme: defaults, then whatever a previous run persisted.
    let mut manager = SettingsManager::new(FileStore::new(SETTINGS_DIR), CAPABILITY);

    // Face variant, optionally picked by name on the command line.
    let mut preset_index = std::env::args()
        .nth(1)
        .and_then(|name| PRESETS.iter().position(|p| p.name == name))
        .unwrap_or(0);
    let mut fast_forward = false;
    let mut dirty = true;
    let mut last_tick = Instant::now();

    // First frame before entering the event pump.
    draw_face(&mut display, &manager, preset_index, fast_forward);
    window.update(&display);

    loop {
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent message spam when holding keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Num1 => {
                            dirty |= manager.apply(&ThemeUpdate::from_pairs(&PALETTE_CLASSIC));
                        }
                        Keycode::Num2 => {
                            dirty |= manager.apply(&ThemeUpdate::from_pairs(&PALETTE_EMBER));
                        }
                        Keycode::Num3 => {
                            dirty |= manager.apply(&ThemeUpdate::from_pairs(&PALETTE_PAPER));
                        }
                        Keycode::Equals => {
                            dirty |= manager.apply(&width_message(&manager, 1));
                        }
                        Keycode::Minus => {
                            dirty |= manager.apply(&width_message(&manager, -1));
                        }
                        Keycode::P => {
                            preset_index = (preset_index + 1) % PRESETS.len();
                            dirty = true;
                        }
                        Keycode::F => {
                            fast_forward = !fast_forward;
                            dirty = true;
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Timer tick: mark dirty, never draw from here.
        let interval = if fast_forward { FAST_TICK_INTERVAL } else { TICK_INTERVAL };
        if last_tick.elapsed() >= interval {
            last_tick = Instant::now();
            dirty = true;
        }

        if dirty {
            draw_face(&mut display, &manager, preset_index, fast_forward);
            window.update(&display);
            dirty = false;
        }

        thread::sleep(POLL_INTERVAL);
    }
}

/// Render the current time with the current theme and preset.
fn draw_face(
    display: &mut SimulatorDisplay<Rgb565>,
    manager: &SettingsManager<FileStore>,
    preset_index: usize,
    fast_forward: bool,
) {
    let preset = PRESETS[preset_index];
    let geometry = FaceGeometry::compute(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT), SHAPE, preset);
    let reading = current_reading(fast_forward);
    let renderer = FaceRenderer::new(preset, CAPABILITY);
    renderer.render(display, manager.theme(), &geometry, &reading).ok();
}

/// Read the wall clock, optionally through the fast-forward transform.
///
/// The transform compresses a half day into under half an hour by treating
/// the real minute as the apparent hour and the real second as the
/// apparent minute. It runs before the reading is built; the layout engine
/// never sees it.
fn current_reading(fast_forward: bool) -> ClockReading {
    let now = Local::now();
    if fast_forward {
        ClockReading::new((now.minute() % 24) as u8, now.second() as u8)
    } else {
        ClockReading::new(now.hour() as u8, now.minute() as u8)
    }
}

/// Build a width-change message relative to the current theme.
fn width_message(manager: &SettingsManager<FileStore>, delta: i32) -> ThemeUpdate {
    let width = i32::from(manager.theme().major_tick_width) + delta;
    ThemeUpdate::from_pairs(&[(ThemeField::MajorTickWidth as u32, width.clamp(1, 9))])
}
