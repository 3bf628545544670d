//! Face geometry: the fixed bounding rectangle and center point of the
//! circular display area. Computed once at surface creation, immutable
//! afterward.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::TICK_STUB_LENGTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceGeometry {
    pub bounds: Rectangle,
    pub center: Point,
}

impl FaceGeometry {
    /// Derive the geometry from the surface bounds.
    ///
    /// The center is `top_left + size/2`. With `center_nudge` set it moves
    /// one pixel toward the top-left (even-dimension centering parity).
    pub fn new(bounds: Rectangle, center_nudge: bool) -> Self {
        let mut center = bounds.top_left
            + Point::new((bounds.size.width / 2) as i32, (bounds.size.height / 2) as i32);
        if center_nudge {
            center -= Point::new(1, 1);
        }
        Self { bounds, center }
    }

    /// Radius long enough for a spoke from the center to span the visible
    /// square: the hypotenuse of the half-extents, rounded up.
    pub fn spoke_radius(&self) -> i32 {
        let half_width = (self.bounds.size.width / 2) as f32;
        let half_height = (self.bounds.size.height / 2) as f32;
        half_width.hypot(half_height).ceil() as i32
    }

    /// Anchor point of the date block: two thirds of the face width, half
    /// of the face height, shifted a couple of pixels up-left for optical
    /// centering of the text column.
    pub fn date_origin(&self) -> Point {
        self.bounds.top_left
            + Point::new(
                (self.bounds.size.width / 3 * 2) as i32 - 2,
                (self.bounds.size.height / 2) as i32 - 1,
            )
    }

    /// Centered inset rectangle overpainted after the tick spokes so only
    /// short peripheral stubs remain visible.
    pub fn tick_mask(&self) -> Rectangle {
        let inset = TICK_STUB_LENGTH;
        Rectangle::new(
            self.bounds.top_left + Point::new(inset as i32, inset as i32),
            Size::new(
                self.bounds.size.width.saturating_sub(2 * inset),
                self.bounds.size.height.saturating_sub(2 * inset),
            ),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
