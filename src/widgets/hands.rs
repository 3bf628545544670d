//! Hand descriptors and their draw commands.
//!
//! A hand is a stroked line from its counterweight tail to its tip, plus a
//! one-pixel white dot on the tip for visibility against the hand color.
//! Descriptors are built fresh each frame from the sampled time fields.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::{HAND_GRAY, SECOND_RED, WHITE};
use crate::config::{
    HAND_STROKE_WIDTH, HOUR_HAND_LENGTH, HOUR_TAIL_LENGTH, MINUTE_HAND_LENGTH,
    MINUTE_TAIL_LENGTH, SECOND_HAND_LENGTH, SECOND_TAIL_LENGTH, TIP_DOT_RADIUS,
};
use crate::projection::{AngleFraction, project};
use crate::scene::Frame;

/// Ephemeral description of one hand for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandShape {
    pub stroke_width: u32,
    pub main_len: i32,
    pub tail_len: i32,
    pub fraction: AngleFraction,
    pub color: Rgb565,
}

// =============================================================================
// Angle Fractions
// =============================================================================

/// Hour hand position: `(hour%12 * 60 + minute) / 720`. The minute term
/// makes the hand creep between hour marks.
pub fn hour_fraction(hour: u8, minute: u8) -> AngleFraction {
    AngleFraction::new(i32::from(hour % 12) * 60 + i32::from(minute), 12 * 60)
}

/// Minute hand position. Whole-minute granularity by default; with
/// `subminute` the hand also creeps with the second: `(minute*60+second)/3600`.
pub fn minute_fraction(minute: u8, second: u8, subminute: bool) -> AngleFraction {
    if subminute {
        AngleFraction::new(i32::from(minute) * 60 + i32::from(second), 3600)
    } else {
        AngleFraction::new(i32::from(minute), 60)
    }
}

/// Second hand position: `second / 60`.
pub fn second_fraction(second: u8) -> AngleFraction {
    AngleFraction::new(i32::from(second), 60)
}

// =============================================================================
// Hand Descriptors
// =============================================================================

pub fn hour_hand(hour: u8, minute: u8) -> HandShape {
    HandShape {
        stroke_width: HAND_STROKE_WIDTH,
        main_len: HOUR_HAND_LENGTH,
        tail_len: HOUR_TAIL_LENGTH,
        fraction: hour_fraction(hour, minute),
        color: HAND_GRAY,
    }
}

pub fn minute_hand(minute: u8, second: u8, subminute: bool) -> HandShape {
    HandShape {
        stroke_width: HAND_STROKE_WIDTH,
        main_len: MINUTE_HAND_LENGTH,
        tail_len: MINUTE_TAIL_LENGTH,
        fraction: minute_fraction(minute, second, subminute),
        color: HAND_GRAY,
    }
}

pub fn second_hand(second: u8) -> HandShape {
    HandShape {
        stroke_width: HAND_STROKE_WIDTH,
        main_len: SECOND_HAND_LENGTH,
        tail_len: SECOND_TAIL_LENGTH,
        fraction: second_fraction(second),
        color: SECOND_RED,
    }
}

/// Record one hand: the tail-to-tip stroke, then the tip dot on top.
pub fn push_hand(frame: &mut Frame, center: Point, hand: &HandShape) {
    let (tip, tail) = project(center, hand.fraction, hand.main_len, hand.tail_len);
    frame.push_line(tail, tip, hand.stroke_width, hand.color);
    frame.push_fill_circle(tip, TIP_DOT_RADIUS, WHITE);
}

// =============================================================================
// Unit Tests
// =============================================================================
