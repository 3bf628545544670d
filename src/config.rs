//! Face layout constants and runtime configuration.
//!
//! Layout values like hand lengths are computed at compile time from the
//! reference face size, so the rendering code never repeats the arithmetic.
//! The two historical build variants of this face (decorative bitmap vs.
//! flat fill with tick marks) are expressed as runtime presets instead of
//! compile-time switches.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Reference face width in pixels (Pebble-class 144x168 display).
pub const SCREEN_WIDTH: u32 = 144;

/// Reference face height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Interval between ticks. Hands advance at second granularity, so the
/// renderer is paced at 1 Hz.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

// =============================================================================
// Hand Metrics (pre-computed from the reference face size)
// =============================================================================

/// Stroke width shared by all three hands.
pub const HAND_STROKE_WIDTH: u32 = 3;

/// Hour hand length from center to tip.
pub const HOUR_HAND_LENGTH: i32 = (SCREEN_WIDTH / 2) as i32 - 30;

/// Minute hand length from center to tip.
pub const MINUTE_HAND_LENGTH: i32 = (SCREEN_WIDTH / 2) as i32 - 15;

/// Second hand length from center to tip.
pub const SECOND_HAND_LENGTH: i32 = (SCREEN_WIDTH / 2) as i32 - 10;

/// Hour hand counterweight tail length.
pub const HOUR_TAIL_LENGTH: i32 = 7;

/// Minute hand counterweight tail length.
pub const MINUTE_TAIL_LENGTH: i32 = 9;

/// Second hand counterweight tail length.
pub const SECOND_TAIL_LENGTH: i32 = 11;

/// Radius of the white dot marking each hand tip.
pub const TIP_DOT_RADIUS: u32 = 1;

/// Radius of the center pivot ("screw").
pub const PIVOT_RADIUS: u32 = 3;

// =============================================================================
// Tick Mark Metrics (minimalist variant)
// =============================================================================

/// Stroke width of the tick spokes.
pub const TICK_STROKE_WIDTH: u32 = 2;

/// Length of the visible tick stubs at the face border. The mask rectangle
/// is inset by this amount on every side.
pub const TICK_STUB_LENGTH: u32 = 6;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Runtime flags selecting the face variant and minute-hand granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceConfig {
    /// When set, the minute hand advances every second instead of once per
    /// minute: fraction `(minute*60+second)/3600` instead of `minute/60`.
    pub subminute_minute_hand: bool,

    /// When set, the background is a composited bitmap and no tick marks
    /// are drawn (the artwork carries them). When clear, the face is a
    /// solid fill with masked tick spokes.
    pub decorative_background: bool,

    /// Shift the pivot one pixel toward the top-left. The reference face
    /// has even dimensions, so the true center falls between pixels; this
    /// preset-level bias picks the other rounding.
    pub center_nudge: bool,
}

impl Default for FaceConfig {
    fn default() -> Self {
        FacePreset::Decorative.config()
    }
}

/// The two shipped face variants, as named presets over [`FaceConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacePreset {
    /// Bitmap background, tick marks baked into the artwork.
    #[default]
    Decorative,
    /// Flat fill, draw-then-mask tick stubs, nudged center.
    Minimalist,
}

impl FacePreset {
    /// Resolve the preset to its configuration flags.
    pub const fn config(self) -> FaceConfig {
        match self {
            Self::Decorative => FaceConfig {
                subminute_minute_hand: false,
                decorative_background: true,
                center_nudge: false,
            },
            Self::Minimalist => FaceConfig {
                subminute_minute_hand: false,
                decorative_background: false,
                center_nudge: true,
            },
        }
    }

    /// Switch to the other preset.
    pub const fn toggle(self) -> Self {
        match self {
            Self::Decorative => Self::Minimalist,
            Self::Minimalist => Self::Decorative,
        }
    }

    /// Parse a preset name (as used by the `WATCHFACE_PRESET` env var).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "decorative" => Some(Self::Decorative),
            "minimalist" => Some(Self::Minimalist),
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_lengths_ordered() {
        // Second hand reaches furthest, hour hand shortest; tails the reverse.
        assert!(HOUR_HAND_LENGTH < MINUTE_HAND_LENGTH);
        assert!(MINUTE_HAND_LENGTH < SECOND_HAND_LENGTH);
        assert!(HOUR_TAIL_LENGTH < MINUTE_TAIL_LENGTH);
        assert!(MINUTE_TAIL_LENGTH < SECOND_TAIL_LENGTH);
    }

    #[test]
    fn test_hand_lengths_fit_face() {
        // No hand may leave the face horizontally.
        assert!(SECOND_HAND_LENGTH <= (SCREEN_WIDTH / 2) as i32);
        assert!(SECOND_TAIL_LENGTH <= (SCREEN_WIDTH / 2) as i32);
    }

    #[test]
    fn test_presets_are_mutually_exclusive_backgrounds() {
        // Exactly one background style per configuration, never both.
        assert!(FacePreset::Decorative.config().decorative_background);
        assert!(!FacePreset::Minimalist.config().decorative_background);
    }

    #[test]
    fn test_preset_toggle_round_trips() {
        assert_eq!(FacePreset::Decorative.toggle(), FacePreset::Minimalist);
        assert_eq!(FacePreset::Minimalist.toggle(), FacePreset::Decorative);
        assert_eq!(FacePreset::Decorative.toggle().toggle(), FacePreset::Decorative);
    }

    #[test]
    fn test_preset_from_name() {
        assert_eq!(FacePreset::from_name("decorative"), Some(FacePreset::Decorative));
        assert_eq!(FacePreset::from_name("Minimalist"), Some(FacePreset::Minimalist));
        assert_eq!(FacePreset::from_name("neon"), None, "Unknown names are rejected");
    }

    #[test]
    fn test_default_config_matches_decorative_preset() {
        assert_eq!(FaceConfig::default(), FacePreset::Decorative.config());
    }
}
