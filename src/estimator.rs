//! # Focal Length Estimator Module
//!
//! This module provides [`SafeFocalEstimator`], a wrapper around a [`PreviewGeometry`] delegate
//! which always produces a focal length in pixels. When the camera metadata is complete the
//! delegate's own computation is used unchanged; when it is missing, malformed, or the delegate
//! faults, a conservative fixed field-of-view estimate is substituted instead.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use log::debug;
use serde::Deserialize;

use crate::metadata::{RectPx, SizePx};
use crate::preview::PreviewGeometry;
use crate::error::Result;

// -----------------------------------------------------------------------------------------------
// CONSTANTS
// -----------------------------------------------------------------------------------------------

/// Conservative default horizontal field of view, typical for webcams and phones.
pub const DEFAULT_HFOV_DEGREES: f64 = 60.0;

/// Reasonable portrait frame width used when no usable width is reported at all.
pub const DEFAULT_FALLBACK_WIDTH_PX: u32 = 1080;

// -----------------------------------------------------------------------------------------------
// DATA STRUCTURES
// -----------------------------------------------------------------------------------------------

/// Parameters of the fallback estimate.
///
/// The defaults reproduce the behaviour expected by downstream segmentation geometry; override
/// them only for cameras whose field of view is known to differ significantly from 60 degrees.
#[derive(Clone, Debug, Deserialize)]
pub struct EstimatorParams {
    /// Assumed horizontal field of view in degrees when focal lengths are missing
    #[serde(default = "default_hfov_degrees")]
    pub hfov_degrees: f64,

    /// Frame width in pixels used when neither the sensor nor the frame reports a positive width
    #[serde(default = "default_fallback_width_px")]
    pub fallback_width_px: u32,
}

/// A [`PreviewGeometry`] wrapper whose focal length computation cannot fail.
///
/// External webcams commonly omit lens focal-length metadata, which makes the delegate
/// computation fault. This wrapper catches every such fault and falls through to the estimate
/// `0.5 * width / tan(hfov / 2)`, clamped to a minimum of `1.0`.
pub struct SafeFocalEstimator<G> {
    delegate: G,

    params: EstimatorParams,
}

// -----------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// -----------------------------------------------------------------------------------------------

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            hfov_degrees: DEFAULT_HFOV_DEGREES,
            fallback_width_px: DEFAULT_FALLBACK_WIDTH_PX,
        }
    }
}

impl<G: PreviewGeometry> SafeFocalEstimator<G> {
    /// Wrap the given delegate using the default parameters.
    pub fn new(delegate: G) -> Self {
        Self::with_params(delegate, EstimatorParams::default())
    }

    /// Wrap the given delegate using the given parameters.
    pub fn with_params(delegate: G, params: EstimatorParams) -> Self {
        Self { delegate, params }
    }

    /// Compute the focal length in pixels, never failing.
    ///
    /// If the focal length sequence is non-empty and the sensor width is positive the delegate
    /// is consulted first and its result returned unchanged. Any delegate fault, as well as
    /// missing or malformed metadata, drops through to the fixed field-of-view estimate.
    pub fn focal_length_px(
        &self,
        focals_mm: Option<&[f32]>,
        sensor_px: Option<SizePx>,
        active_array: Option<RectPx>,
    ) -> f64 {
        if let (Some(focals), Some(sensor)) = (focals_mm, sensor_px) {
            if !focals.is_empty() && sensor.has_usable_width() {
                match self.delegate.focal_length_px(Some(focals), Some(sensor), active_array) {
                    Ok(focal_px) => return focal_px,
                    // fall through to the estimate
                    Err(_) => (),
                }
            }
        }

        self.estimate(sensor_px)
    }

    /// Estimate the focal length from an assumed field of view.
    fn estimate(&self, sensor_px: Option<SizePx>) -> f64 {
        // Sensor width takes priority, then the current frame width, then the fixed fallback
        let width_px = match sensor_px {
            Some(s) if s.has_usable_width() => s.width,
            _ => self.frame_width_or_fallback(),
        };

        debug!(
            "Estimating focal length from width {} px and {} deg HFOV",
            width_px, self.params.hfov_degrees
        );

        let fov_rad = self.params.hfov_degrees.to_radians();
        let focal_px = 0.5 * f64::from(width_px) / (fov_rad / 2.0).tan();

        focal_px.max(1.0)
    }

    /// Get the current frame width, substituting the fixed fallback if the query fails or the
    /// reported width is not positive.
    fn frame_width_or_fallback(&self) -> u32 {
        match self.delegate.frame_size() {
            Ok(s) if s.has_usable_width() => s.width,
            _ => self.params.fallback_width_px,
        }
    }
}

impl<G: PreviewGeometry> PreviewGeometry for SafeFocalEstimator<G> {
    /// Drop-in replacement for the delegate's computation which always succeeds.
    fn focal_length_px(
        &self,
        focals_mm: Option<&[f32]>,
        sensor_px: Option<SizePx>,
        active_array: Option<RectPx>,
    ) -> Result<f64> {
        Ok(SafeFocalEstimator::focal_length_px(
            self,
            focals_mm,
            sensor_px,
            active_array,
        ))
    }

    fn frame_size(&self) -> Result<SizePx> {
        self.delegate.frame_size()
    }
}

// -----------------------------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// -----------------------------------------------------------------------------------------------

fn default_hfov_degrees() -> f64 {
    DEFAULT_HFOV_DEGREES
}

fn default_fallback_width_px() -> u32 {
    DEFAULT_FALLBACK_WIDTH_PX
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------
