//! Frame orchestration.
//!
//! [`FaceRenderer`] turns a sampled time into one recorded frame, in a
//! fixed paint order (later elements occlude earlier ones):
//!
//! | Step | Element | Variant |
//! |------|---------|---------|
//! | 1 | background fill or bitmap composite | per config |
//! | 2 | tick spokes + mask | minimalist only |
//! | 3 | date block | always |
//! | 4 | hour, minute, second hand | always (second on top) |
//! | 5 | center pivot | always |
//!
//! [`RedrawState`] is the Idle -> Drawing -> Idle machine: a tick or a
//! forced redraw marks the surface dirty, which schedules exactly one
//! drawing pass; a pass never re-enters itself.

use embedded_graphics::primitives::Rectangle;
use log::{debug, info};

use crate::clock::{Clock, TimeSample, TimeSampler};
use crate::colors::{BACKGROUND, WHITE};
use crate::config::{FaceConfig, PIVOT_RADIUS};
use crate::geometry::FaceGeometry;
use crate::scene::{DrawCmd, Frame};
use crate::widgets::{hour_hand, minute_hand, push_date_block, push_hand, push_tick_marks, second_hand};

// =============================================================================
// Frame State Machine
// =============================================================================

/// Tracks the single-frame-at-a-time drawing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawState {
    dirty: bool,
    drawing: bool,
    frames_completed: u64,
}

impl RedrawState {
    pub const fn new() -> Self {
        Self {
            dirty: false,
            drawing: false,
            frames_completed: 0,
        }
    }

    /// Request a drawing pass on the next cycle.
    pub const fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub const fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Enter the Drawing state. Returns `false` when there is nothing to
    /// draw or a pass is already in flight (no re-entrant drawing).
    pub const fn begin_frame(&mut self) -> bool {
        if self.drawing || !self.dirty {
            return false;
        }
        self.drawing = true;
        true
    }

    /// Return to Idle; the dirty request is consumed by the completed pass.
    pub const fn end_frame(&mut self) {
        self.drawing = false;
        self.dirty = false;
        self.frames_completed += 1;
    }

    pub const fn frames_completed(&self) -> u64 {
        self.frames_completed
    }
}

impl Default for RedrawState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Face Renderer
// =============================================================================

/// Owns the sampling, geometry, and frame recording for one watchface.
#[derive(Debug)]
pub struct FaceRenderer<C: Clock> {
    config: FaceConfig,
    geometry: FaceGeometry,
    sampler: TimeSampler<C>,
    state: RedrawState,
    last_sample: TimeSample,
    frame: Frame,
}

impl<C: Clock> FaceRenderer<C> {
    pub fn new(config: FaceConfig, bounds: Rectangle, clock: C) -> Self {
        let geometry = FaceGeometry::new(bounds, config.center_nudge);
        let mut sampler = TimeSampler::new(clock);
        let last_sample = sampler.sample();
        Self {
            config,
            geometry,
            sampler,
            state: RedrawState::new(),
            last_sample,
            frame: Frame::new(),
        }
    }

    pub const fn geometry(&self) -> &FaceGeometry {
        &self.geometry
    }

    pub const fn state(&self) -> &RedrawState {
        &self.state
    }

    /// Swap the runtime configuration and re-derive the geometry. Takes
    /// effect on the next drawing pass.
    pub fn set_config(&mut self, config: FaceConfig) {
        self.config = config;
        self.geometry = FaceGeometry::new(self.geometry.bounds, config.center_nudge);
        self.state.mark_dirty();
    }

    /// Periodic tick: sample the clock and run one drawing pass. The date
    /// block picks up the refreshed [`DateInfo`](crate::clock::DateInfo)
    /// when the sample crossed midnight; hands are rebuilt every pass.
    pub fn handle_tick(&mut self) -> &Frame {
        let sample = self.sampler.sample();
        if sample.day_changed {
            let date = self.sampler.date_info();
            info!(
                "day rolled over to {} {} {}",
                date.weekday_abbrev(),
                date.month_abbrev(),
                date.day_text
            );
        }
        self.last_sample = sample;
        self.state.mark_dirty();
        self.redraw()
    }

    /// External redraw request (e.g. the surface just became visible).
    /// Rebuilds the frame from the last sampled time without touching the
    /// clock, so an unchanged time reproduces the previous frame exactly.
    pub fn force_redraw(&mut self) -> &Frame {
        self.state.mark_dirty();
        self.redraw()
    }

    fn redraw(&mut self) -> &Frame {
        if self.state.begin_frame() {
            self.record_frame();
            self.state.end_frame();
            debug!("frame {} recorded ({} cmds)", self.state.frames_completed(), self.frame.len());
        }
        &self.frame
    }

    fn record_frame(&mut self) {
        self.frame.clear();

        // 1. Background, 2. tick marks (flat variant only; the decorative
        // bitmap carries its own markings).
        if self.config.decorative_background {
            self.frame.push(DrawCmd::Background {
                top_left: self.geometry.bounds.top_left,
            });
        } else {
            self.frame.push_fill_rect(self.geometry.bounds, BACKGROUND);
            push_tick_marks(&mut self.frame, &self.geometry);
        }

        // 3. Date block.
        push_date_block(&mut self.frame, &self.geometry, self.sampler.date_info());

        // 4. Hands, hour first so the second hand lands on top.
        let sample = self.last_sample;
        push_hand(&mut self.frame, self.geometry.center, &hour_hand(sample.hour, sample.minute));
        push_hand(
            &mut self.frame,
            self.geometry.center,
            &minute_hand(sample.minute, sample.second, self.config.subminute_minute_hand),
        );
        push_hand(&mut self.frame, self.geometry.center, &second_hand(sample.second));

        // 5. Pivot screw.
        self.frame.push_fill_circle(self.geometry.center, PIVOT_RADIUS, WHITE);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
