//! Watchface color palette.
//!
//! All colors are `const` Rgb565 values so styles built from them can also
//! be computed at compile time.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Face background fill (minimalist variant) and tick mask color.
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Hour and minute hand stroke.
pub const HAND_GRAY: Rgb565 = Rgb565::new(10, 21, 10);

/// Second hand stroke (dark red accent).
pub const SECOND_RED: Rgb565 = Rgb565::new(21, 0, 0);

/// Weekday and month abbreviation text.
pub const TEXT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// Day-of-month numeral accent (warm orange).
pub const DAY_ACCENT: Rgb565 = Rgb565::new(31, 42, 10);

/// Peripheral tick stubs.
pub const TICK_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// Hand tip dots and the center pivot.
pub const WHITE: Rgb565 = Rgb565::WHITE;
