//! Renderer-agnostic draw command stream.
//!
//! A frame is recorded as a list of [`DrawCmd`]s and executed later by the
//! paint module. Insertion order is paint order: later commands occlude
//! earlier ones. Commands compare with `==`, so a whole frame can be
//! checked for byte-identical reproduction in tests without golden images.
//!
//! Extending the scene: add a variant here, a push helper below, and a
//! matching arm in `paint::paint_frame`.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::String;

/// Capacity of text payloads. Date text is at most a three-character
/// abbreviation or a two-digit day.
pub const TEXT_CAPACITY: usize = 4;

/// Font selector carried by text commands, resolved by the paint module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceFont {
    /// Small label font for weekday/month abbreviations.
    Label,
    /// Large numeral font for the day of month.
    DayNumber,
}

/// One primitive drawing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCmd {
    /// Solid rectangle fill.
    FillRect { rect: Rectangle, color: Rgb565 },
    /// Stroked line.
    Line {
        start: Point,
        end: Point,
        width: u32,
        color: Rgb565,
    },
    /// Filled circle given by center and radius.
    FillCircle {
        center: Point,
        radius: u32,
        color: Rgb565,
    },
    /// Horizontally centered text; `anchor` is the top-center of the block.
    Text {
        text: String<TEXT_CAPACITY>,
        font: FaceFont,
        anchor: Point,
        color: Rgb565,
    },
    /// Composite the decorative background bitmap at `top_left`. Skipped
    /// by the executor when the asset failed to load.
    Background { top_left: Point },
}

/// Recorded draw stream for one frame.
///
/// The command buffer is cleared and refilled each frame; its allocation is
/// reused across frames.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Frame {
    cmds: Vec<DrawCmd>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands, keeping capacity for the next frame.
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    /// Commands in paint order.
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    // -------------------------------------------------------------------------
    // Push helpers
    // -------------------------------------------------------------------------

    pub fn push_fill_rect(&mut self, rect: Rectangle, color: Rgb565) {
        self.push(DrawCmd::FillRect { rect, color });
    }

    pub fn push_line(&mut self, start: Point, end: Point, width: u32, color: Rgb565) {
        self.push(DrawCmd::Line { start, end, width, color });
    }

    pub fn push_fill_circle(&mut self, center: Point, radius: u32, color: Rgb565) {
        self.push(DrawCmd::FillCircle { center, radius, color });
    }

    /// Record a centered text block. Text longer than [`TEXT_CAPACITY`] is
    /// truncated; face text never is.
    pub fn push_text(&mut self, text: &str, font: FaceFont, anchor: Point, color: Rgb565) {
        let mut payload: String<TEXT_CAPACITY> = String::new();
        for ch in text.chars().take(TEXT_CAPACITY) {
            payload.push(ch).ok();
        }
        self.push(DrawCmd::Text {
            text: payload,
            font,
            anchor,
            color,
        });
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
