//! Failure taxonomy for the watchface.
//!
//! None of these are fatal: every failure is handled at the point it occurs
//! by degrading the current frame (skip an element, reuse stale time, drop
//! the frame) and the tick loop keeps running.

use core::fmt;

/// Everything that can go wrong while producing or presenting a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceError {
    /// The system clock could not be read. The renderer falls back to the
    /// last known date and a zeroed time.
    ClockUnavailable,
    /// A startup resource (the background bitmap) failed to load. The
    /// corresponding draw step is skipped.
    ResourceLoadFailure { resource: &'static str },
    /// No drawing surface accepted the frame. The frame is dropped and
    /// retried on the next tick.
    SurfaceUnavailable,
}

impl fmt::Display for FaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClockUnavailable => write!(f, "system clock unavailable"),
            Self::ResourceLoadFailure { resource } => {
                write!(f, "failed to load resource `{resource}`")
            }
            Self::SurfaceUnavailable => write!(f, "no drawing surface available"),
        }
    }
}

impl std::error::Error for FaceError {}
