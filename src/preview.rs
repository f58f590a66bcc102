//! # Preview Geometry Capability
//!
//! This module defines the seam between the estimator and the external preview helper. The
//! original framework exposes these two operations on a base class and expects subclasses to
//! override the focal computation; here they are a trait, and the safe behaviour is layered on
//! top as a wrapper rather than through virtual dispatch.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use crate::error::Result;
use crate::metadata::{RectPx, SizePx};

// -----------------------------------------------------------------------------------------------
// TRAITS
// -----------------------------------------------------------------------------------------------

/// Geometry queries owned by the external preview helper.
///
/// Implementations are allowed to fail on either operation, for instance when the camera never
/// reported the relevant metadata. [`crate::SafeFocalEstimator`] tolerates any such failure.
pub trait PreviewGeometry {
    /// Compute the focal length in pixels from the camera-reported metadata.
    ///
    /// `focals_mm` is the ordered sequence of lens focal lengths in millimetres, `sensor_px` the
    /// active sensor region and `active_array` the hardware crop rectangle, all as reported by
    /// the camera and all possibly absent.
    fn focal_length_px(
        &self,
        focals_mm: Option<&[f32]>,
        sensor_px: Option<SizePx>,
        active_array: Option<RectPx>,
    ) -> Result<f64>;

    /// Get the size of the current preview frame in pixels.
    ///
    /// Returns `Err` when no frame size is currently available.
    fn frame_size(&self) -> Result<SizePx>;
}
