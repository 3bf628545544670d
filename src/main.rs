// Crate-level lints: allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in geometry calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 is safe for our coordinate ranges

//! Analog watchface simulator.
//!
//! Renders a 144x168 analog clock face — hour/minute/second hands, tick
//! marks, and a date readout — once per second into an
//! `embedded-graphics-simulator` window. The face comes in two presets:
//!
//! - **Decorative**: composited background bitmap (tick marks baked into
//!   the artwork).
//! - **Minimalist**: flat fill with draw-then-mask tick stubs and a
//!   one-pixel center nudge.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `M` | Toggle sub-minute minute-hand granularity |
//! | `B` | Switch between Decorative and Minimalist presets |
//! | `R` | Force a redraw from the last sampled time |
//!
//! Set `WATCHFACE_PRESET=decorative|minimalist` to pick the startup preset.

mod clock;
mod colors;
mod config;
mod error;
mod face;
mod geometry;
mod paint;
mod projection;
mod scene;
mod styles;
mod widgets;

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{info, warn};

use crate::clock::SystemClock;
use crate::config::{FacePreset, SCREEN_HEIGHT, SCREEN_WIDTH, TICK_INTERVAL};
use crate::error::FaceError;
use crate::face::FaceRenderer;
use crate::paint::{Assets, paint_frame};

/// Raw RGB565 (big-endian) background for the decorative preset.
const BACKGROUND_ASSET_PATH: &str = "assets/background.raw";

/// How often the loop polls window events between 1 Hz ticks.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(20);

fn main() {
    init_logging();

    let mut preset = preset_from_env();
    let mut config = preset.config();
    info!("starting watchface with the {preset:?} preset");

    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("Analog Watchface", &output_settings);

    let assets = Assets::load(BACKGROUND_ASSET_PATH);
    let mut renderer = FaceRenderer::new(config, display.bounding_box(), SystemClock);

    // First frame before the window shows so the face is never blank.
    let frame = renderer.force_redraw();
    if let Err(err) = paint_frame(&mut display, frame, &assets) {
        warn!("{}: {err:?}", FaceError::SurfaceUnavailable);
    }
    window.update(&display);

    let mut next_tick = Instant::now() + TICK_INTERVAL;
    'run: loop {
        let mut force_redraw = false;

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'run,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam.
                    if repeat {
                        continue;
                    }
                    match keycode {
                        // M: minute hand granularity
                        Keycode::M => {
                            config.subminute_minute_hand = !config.subminute_minute_hand;
                            renderer.set_config(config);
                            force_redraw = true;
                            info!(
                                "minute hand: {}",
                                if config.subminute_minute_hand { "sub-minute" } else { "whole-minute" }
                            );
                        }
                        // B: background preset
                        Keycode::B => {
                            preset = preset.toggle();
                            let subminute = config.subminute_minute_hand;
                            config = preset.config();
                            config.subminute_minute_hand = subminute;
                            renderer.set_config(config);
                            force_redraw = true;
                            info!("switched to the {preset:?} preset");
                        }
                        // R: forced redraw from the last sampled time
                        Keycode::R => force_redraw = true,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if force_redraw {
            let frame = renderer.force_redraw();
            match paint_frame(&mut display, frame, &assets) {
                Ok(()) => window.update(&display),
                Err(err) => warn!("{}: {err:?}", FaceError::SurfaceUnavailable),
            }
        }

        // 1 Hz tick: sample, record, paint. A dropped frame is retried on
        // the next tick; the loop never stops over a bad frame.
        if Instant::now() >= next_tick {
            next_tick += TICK_INTERVAL;
            let frame = renderer.handle_tick();
            match paint_frame(&mut display, frame, &assets) {
                Ok(()) => window.update(&display),
                Err(err) => warn!("{}, dropping frame: {err:?}", FaceError::SurfaceUnavailable),
            }
        }

        thread::sleep(EVENT_POLL_INTERVAL);
    }

    info!(
        "watchface stopped after {} frames",
        renderer.state().frames_completed()
    );
}

/// Initialize the global logger once, defaulting to info-level visibility
/// when `RUST_LOG` is unset.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn preset_from_env() -> FacePreset {
    match std::env::var("WATCHFACE_PRESET") {
        Ok(name) => FacePreset::from_name(&name).unwrap_or_else(|| {
            warn!("unknown preset `{name}`, falling back to decorative");
            FacePreset::default()
        }),
        Err(_) => FacePreset::default(),
    }
}
