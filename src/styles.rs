//! Shared text styling for the date block.
//!
//! Alignment is a compile-time constant; character styles are built at draw
//! time because the color comes from the draw command.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_18_POINT;

/// Horizontally centered text anchored at the top of its block. All date
/// text uses this: anchors are block top-centers.
pub const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Small font for weekday and month abbreviations.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Large numeral font for the day of month.
pub const DAY_FONT: &MonoFont = &PROFONT_18_POINT;
