//! Angle and endpoint math for clock hands.
//!
//! # Angle convention
//!
//! Positions around the face are expressed as a fraction of a full turn in
//! `[0, 1)`: fraction 0 is 12 o'clock, increasing clockwise, 1.0 is a full
//! revolution. Fractions are kept as exact rationals (`minute/60`, not a
//! float) and converted to a fixed-point angle in `FULL_TURN` units with
//! integer arithmetic only, so identical inputs always produce identical
//! pixel endpoints.
//!
//! # Trig scale
//!
//! `sin_lookup`/`cos_lookup` return values scaled to `TRIG_MAX_RATIO`.
//! Endpoint coordinates are then `center ± sin*len/TRIG_MAX_RATIO`, with
//! plain truncating integer division. Rounding error stays well under one
//! pixel at the reference face size.

use core::f32::consts::TAU;

use embedded_graphics::prelude::*;

/// One full revolution in fixed-point angle units.
pub const FULL_TURN: i32 = 0x10000;

/// Scale of the values returned by [`sin_lookup`] and [`cos_lookup`].
pub const TRIG_MAX_RATIO: i32 = 0x10000;

/// Exact position around the face as a rational fraction of a full turn.
///
/// Invariant: `0 <= num < den`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleFraction {
    num: i32,
    den: i32,
}

impl AngleFraction {
    pub fn new(num: i32, den: i32) -> Self {
        debug_assert!(den > 0, "fraction denominator must be positive");
        debug_assert!((0..den).contains(&num), "fraction must lie in [0, 1)");
        Self { num, den }
    }

    /// 12 o'clock.
    pub const fn zero() -> Self {
        Self { num: 0, den: 1 }
    }

    /// Fixed-point angle in [`FULL_TURN`] units, truncating division.
    pub fn angle(self) -> i32 {
        ((FULL_TURN as i64 * self.num as i64) / self.den as i64) as i32
    }

    /// Approximate value as a float, for range checks and diagnostics.
    pub fn as_f32(self) -> f32 {
        self.num as f32 / self.den as f32
    }
}

/// Sine of a fixed-point angle, scaled to [`TRIG_MAX_RATIO`].
pub fn sin_lookup(angle: i32) -> i32 {
    let radians = angle as f32 / FULL_TURN as f32 * TAU;
    (radians.sin() * TRIG_MAX_RATIO as f32) as i32
}

/// Cosine of a fixed-point angle, scaled to [`TRIG_MAX_RATIO`].
pub fn cos_lookup(angle: i32) -> i32 {
    let radians = angle as f32 / FULL_TURN as f32 * TAU;
    (radians.cos() * TRIG_MAX_RATIO as f32) as i32
}

/// Project a hand at `fraction` onto its tip and tail endpoints.
///
/// The tip extends `main_len` pixels from the center in the hand's
/// direction; the tail extends `tail_len` pixels the opposite way
/// (the counterweight). Screen y grows downward, hence the negated cosine
/// on the tip.
pub fn project(center: Point, fraction: AngleFraction, main_len: i32, tail_len: i32) -> (Point, Point) {
    let angle = fraction.angle();
    let sin = sin_lookup(angle);
    let cos = cos_lookup(angle);

    let tip = Point::new(
        center.x + sin * main_len / TRIG_MAX_RATIO,
        center.y - cos * main_len / TRIG_MAX_RATIO,
    );
    let tail = Point::new(
        center.x - sin * tail_len / TRIG_MAX_RATIO,
        center.y + cos * tail_len / TRIG_MAX_RATIO,
    );
    (tip, tail)
}

// =============================================================================
// Unit Tests
// =============================================================================
