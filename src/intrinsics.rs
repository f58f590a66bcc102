//! # Pinhole Intrinsics Module
//!
//! This module bridges the estimated focal length into the `cv-pinhole` camera model used by
//! downstream geometry, which relates pixel coordinates to real-world angles.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use cv_core::{CameraModel, KeyPoint};
use cv_pinhole::{CameraIntrinsics, NormalizedKeyPoint};
use nalgebra::{Point2, Vector2};

use crate::metadata::SizePx;

// -----------------------------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Build a [`CameraIntrinsics`] struct from a focal length in pixels and a frame size.
///
/// The focal length is applied to both axes, the principal point is placed at the frame centre
/// and the skew is zero. This matches the assumptions of the field-of-view estimate, so the
/// result is only as accurate as that estimate when the focal length was not camera-reported.
pub fn intrinsics_from_focal(focal_px: f64, frame_px: SizePx) -> CameraIntrinsics {
    CameraIntrinsics {
        focals: Vector2::new(focal_px, focal_px),
        principal_point: Point2::new(
            f64::from(frame_px.width) / 2.0,
            f64::from(frame_px.height) / 2.0,
        ),
        skew: 0.0,
    }
}

/// Calibrate a pixel coordinate into a normalised keypoint using the given intrinsics.
pub fn calibrate_pixel(intrinsics: &CameraIntrinsics, x: f64, y: f64) -> NormalizedKeyPoint {
    intrinsics.calibrate(KeyPoint(Point2::new(x, y)))
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------
