//! # Camera Metadata Module
//!
//! This module provides the transient value types the estimator reads from camera metadata.
//! None of them are owned by this crate beyond the scope of a single call.

// -----------------------------------------------------------------------------------------------
// DATA STRUCTURES
// -----------------------------------------------------------------------------------------------

/// A width/height pair in pixels.
///
/// Used both for the sensor's active capture area and for the current preview frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizePx {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,
}

/// The hardware-reported active array rectangle, in pixels.
///
/// Accepted for interface compatibility with the delegate computation, but never read by the
/// fallback estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectPx {
    /// Left edge of the rectangle
    pub x: i32,

    /// Top edge of the rectangle
    pub y: i32,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,
}

// -----------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// -----------------------------------------------------------------------------------------------

impl SizePx {
    /// Create a new size from a width and height in pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A size is usable by the estimator only when its width is positive.
    pub fn has_usable_width(&self) -> bool {
        self.width > 0
    }
}

impl RectPx {
    /// Create a new rectangle from its top left corner and size in pixels.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------
