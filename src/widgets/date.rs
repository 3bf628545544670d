//! Date readout: weekday and month abbreviations stacked symmetrically
//! around the larger, accent-colored day-of-month numeral.
//!
//! Offsets are fixed relative to the face's date origin; see
//! [`FaceGeometry::date_origin`]. Anchors are block top-centers, matching
//! the paint module's centered-top text style.

use embedded_graphics::prelude::*;

use crate::clock::DateInfo;
use crate::colors::{DAY_ACCENT, TEXT_GRAY};
use crate::geometry::FaceGeometry;
use crate::scene::{FaceFont, Frame};

/// Width of each text block; anchors sit at its horizontal center.
const BLOCK_WIDTH: i32 = 30;

/// Height of the label blocks (weekday/month).
const LABEL_HEIGHT: i32 = 14;

/// Gap between the date origin and the day numeral's block top; the month
/// label starts the same distance below the origin.
const DAY_GAP: i32 = 10;

/// Record the three text blocks: weekday above, month below, day numeral
/// between them in the accent color.
pub fn push_date_block(frame: &mut Frame, geometry: &FaceGeometry, date: &DateInfo) {
    let origin = geometry.date_origin();
    let center_x = origin.x + BLOCK_WIDTH / 2;

    frame.push_text(
        date.weekday_abbrev(),
        FaceFont::Label,
        Point::new(center_x, origin.y - DAY_GAP - LABEL_HEIGHT),
        TEXT_GRAY,
    );
    frame.push_text(
        date.month_abbrev(),
        FaceFont::Label,
        Point::new(center_x, origin.y + DAY_GAP),
        TEXT_GRAY,
    );
    frame.push_text(
        date.day_text.as_str(),
        FaceFont::DayNumber,
        Point::new(center_x, origin.y - DAY_GAP),
        DAY_ACCENT,
    );
}

// =============================================================================
// Unit Tests
// =============================================================================
