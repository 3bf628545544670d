//! Tick marks for the minimalist face, drawn with the two-step
//! draw-then-mask technique: six long spokes radiate from the center past
//! the face corners, then a centered inset rectangle overpaints everything
//! but short stubs at the border. The stubs inherit perfect radial
//! alignment from the spokes without any per-stub geometry.

use crate::colors::{BACKGROUND, TICK_GRAY};
use crate::config::TICK_STROKE_WIDTH;
use crate::geometry::FaceGeometry;
use crate::projection::{AngleFraction, project};
use crate::scene::Frame;

/// Number of spokes; one every 60 degrees.
pub const TICK_SPOKES: i32 = 6;

/// Record the tick spokes followed by the mask rectangle. Must run after
/// the background fill and before the date block and hands.
pub fn push_tick_marks(frame: &mut Frame, geometry: &FaceGeometry) {
    let radius = geometry.spoke_radius();
    for spoke in 0..TICK_SPOKES {
        let (tip, _) = project(
            geometry.center,
            AngleFraction::new(spoke, TICK_SPOKES),
            radius,
            0,
        );
        frame.push_line(geometry.center, tip, TICK_STROKE_WIDTH, TICK_GRAY);
    }
    frame.push_fill_rect(geometry.tick_mask(), BACKGROUND);
}

// =============================================================================
// Unit Tests
// =============================================================================
