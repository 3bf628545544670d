//! Frame execution against a display.
//!
//! `paint_frame` replays a recorded [`Frame`] onto any
//! `DrawTarget<Color = Rgb565>` — the simulator display in the binary, a
//! mock display in tests. Draw errors propagate to the caller, which drops
//! the frame and retries on the next tick; nothing here aborts the loop.

use embedded_graphics::image::{Image, ImageRawBE};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use log::{debug, warn};

use crate::colors::BACKGROUND;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::FaceError;
use crate::scene::{DrawCmd, FaceFont, Frame};
use crate::styles::{CENTERED_TOP, DAY_FONT, LABEL_FONT};

/// Bytes per pixel of the raw background image (RGB565, big-endian).
const BACKGROUND_BPP: usize = 2;

/// Resources loaded once at startup. A missing or malformed background is
/// reported and recorded as absent; the background draw step is then
/// skipped for the rest of the run.
#[derive(Debug, Default)]
pub struct Assets {
    background: Option<Vec<u8>>,
}

impl Assets {
    /// No assets at all; every optional draw step is skipped.
    pub const fn none() -> Self {
        Self { background: None }
    }

    /// Load the background image from a raw RGB565 (big-endian) dump sized
    /// to the reference face.
    pub fn load(background_path: &str) -> Self {
        match read_background(background_path) {
            Ok(data) => Self { background: Some(data) },
            Err(err) => {
                warn!("{err}, the background step will be skipped");
                Self { background: None }
            }
        }
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }
}

fn read_background(path: &str) -> Result<Vec<u8>, FaceError> {
    let resource = "background bitmap";
    let data =
        std::fs::read(path).map_err(|_| FaceError::ResourceLoadFailure { resource })?;
    let expected = SCREEN_WIDTH as usize * SCREEN_HEIGHT as usize * BACKGROUND_BPP;
    if data.len() != expected {
        return Err(FaceError::ResourceLoadFailure { resource });
    }
    Ok(data)
}

const fn font_for(font: FaceFont) -> &'static MonoFont<'static> {
    match font {
        FaceFont::Label => LABEL_FONT,
        FaceFont::DayNumber => DAY_FONT,
    }
}

/// Replay every command of `frame` in order.
pub fn paint_frame<D>(display: &mut D, frame: &Frame, assets: &Assets) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for cmd in frame.cmds() {
        match cmd {
            DrawCmd::FillRect { rect, color } => {
                rect.into_styled(PrimitiveStyle::with_fill(*color)).draw(display)?;
            }
            DrawCmd::Line { start, end, width, color } => {
                Line::new(*start, *end)
                    .into_styled(PrimitiveStyle::with_stroke(*color, *width))
                    .draw(display)?;
            }
            DrawCmd::FillCircle { center, radius, color } => {
                Circle::with_center(*center, 2 * *radius + 1)
                    .into_styled(PrimitiveStyle::with_fill(*color))
                    .draw(display)?;
            }
            DrawCmd::Text { text, font, anchor, color } => {
                let style = MonoTextStyle::new(font_for(*font), *color);
                Text::with_text_style(text.as_str(), *anchor, style, CENTERED_TOP)
                    .draw(display)?;
            }
            DrawCmd::Background { top_left } => match &assets.background {
                Some(data) => {
                    let raw = ImageRawBE::<Rgb565>::new(data, SCREEN_WIDTH);
                    Image::new(&raw, *top_left).draw(display)?;
                }
                None => {
                    // Composite skipped; a flat fill keeps the previous
                    // frame's hands from smearing.
                    debug!("no background asset, flat fill instead of composite");
                    Rectangle::new(*top_left, Size::new(SCREEN_WIDTH, SCREEN_HEIGHT))
                        .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
                        .draw(display)?;
                }
            },
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::colors::{BACKGROUND, WHITE};

    fn lenient_display() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    // -------------------------------------------------------------------------
    // Executor Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_paint_fill_rect_sets_pixels() {
        let mut display = lenient_display();
        let mut frame = Frame::new();
        frame.push_fill_rect(
            Rectangle::new(Point::new(2, 2), Size::new(4, 4)),
            WHITE,
        );

        paint_frame(&mut display, &frame, &Assets::none()).unwrap();
        assert_eq!(display.get_pixel(Point::new(3, 3)), Some(WHITE));
        assert_eq!(display.get_pixel(Point::new(10, 10)), None, "Outside the rect");
    }

    #[test]
    fn test_paint_respects_command_order() {
        // A later fill overpaints an earlier one, like the tick mask.
        let mut display = lenient_display();
        let mut frame = Frame::new();
        frame.push_fill_rect(Rectangle::new(Point::zero(), Size::new(8, 8)), WHITE);
        frame.push_fill_rect(Rectangle::new(Point::new(2, 2), Size::new(4, 4)), BACKGROUND);

        paint_frame(&mut display, &frame, &Assets::none()).unwrap();
        assert_eq!(display.get_pixel(Point::new(3, 3)), Some(BACKGROUND));
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(WHITE));
    }

    #[test]
    fn test_paint_line_and_circle() {
        let mut display = lenient_display();
        let mut frame = Frame::new();
        frame.push_line(Point::new(0, 5), Point::new(9, 5), 1, WHITE);
        frame.push_fill_circle(Point::new(20, 20), 2, WHITE);

        paint_frame(&mut display, &frame, &Assets::none()).unwrap();
        assert_eq!(display.get_pixel(Point::new(4, 5)), Some(WHITE));
        assert_eq!(display.get_pixel(Point::new(20, 20)), Some(WHITE));
        assert_eq!(display.get_pixel(Point::new(20, 18)), Some(WHITE), "Radius-2 circle");
    }

    #[test]
    fn test_missing_background_falls_back_to_flat_fill() {
        let mut display = lenient_display();
        let mut frame = Frame::new();
        frame.push(DrawCmd::Background { top_left: Point::zero() });
        frame.push_fill_circle(Point::new(5, 5), 1, WHITE);

        paint_frame(&mut display, &frame, &Assets::none()).unwrap();
        assert_eq!(
            display.get_pixel(Point::zero()),
            Some(BACKGROUND),
            "The skipped composite leaves a flat fill, not stale pixels"
        );
        assert_eq!(
            display.get_pixel(Point::new(5, 5)),
            Some(WHITE),
            "Commands after the skipped step still execute"
        );
    }

    // -------------------------------------------------------------------------
    // Asset Loading Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_load_missing_background_degrades() {
        let assets = Assets::load("/nonexistent/background.raw");
        assert!(!assets.has_background(), "Missing file degrades to no background");
    }

    #[test]
    fn test_load_rejects_wrong_sized_background() {
        let path = std::env::temp_dir().join("watchface-truncated-bg.raw");
        std::fs::write(&path, [0u8; 16]).unwrap();

        let assets = Assets::load(path.to_str().unwrap());
        assert!(!assets.has_background(), "Short image data is rejected");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_accepts_full_sized_background() {
        let path = std::env::temp_dir().join("watchface-full-bg.raw");
        let expected = SCREEN_WIDTH as usize * SCREEN_HEIGHT as usize * BACKGROUND_BPP;
        std::fs::write(&path, vec![0u8; expected]).unwrap();

        let assets = Assets::load(path.to_str().unwrap());
        assert!(assets.has_background());

        std::fs::remove_file(&path).ok();
    }
}
