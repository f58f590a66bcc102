//! # Fault-tolerant focal length estimation for camera previews
//!
//! This crate provides a usable focal length in pixels for preview/segmentation geometry even
//! when the camera (commonly an external webcam) fails to report lens focal-length metadata.
//! It wraps a [`PreviewGeometry`] capability, delegating to it when metadata is complete and
//! substituting a conservative fixed field-of-view estimate when it is not, so the calling
//! pipeline can never crash on missing metadata.
//!
//! ## Installation
//!
//! Add the following to your project's `Cargo.toml`
//!
//! ```toml
//! [dependencies]
//! cv_focalest = "0.1"
//! ```
//!
//! ## Usage
//!
//! Wrap whatever implements [`PreviewGeometry`] in a [`SafeFocalEstimator`], either directly or
//! through the builder:
//!
//! ```rust,ignore
//! let estimator = FocalEstimatorBuilder::new()
//!     // Assumed horizontal field of view used when metadata is missing, defaults to 60 degrees
//!     .hfov_degrees(60.0)
//!     // Width used when neither the sensor size nor the frame size is usable
//!     .fallback_width(1080)
//!     // Wrap the underlying preview helper
//!     .build(preview_helper);
//!
//! // Never fails, regardless of what the camera reported
//! let focal_px = estimator.focal_length_px(focals_mm, sensor_px, active_array);
//! ```
//!
//! The returned value is always finite and `>= 1.0`. When the delegate succeeds its result is
//! returned unchanged, preserving the original accuracy whenever metadata is complete.

#[deny(missing_docs)]

// -----------------------------------------------------------------------------------------------
// EXPORTS
// -----------------------------------------------------------------------------------------------

pub use crate::builder::FocalEstimatorBuilder;
pub use crate::error::{Error, Result};
pub use crate::estimator::{
    EstimatorParams, SafeFocalEstimator, DEFAULT_FALLBACK_WIDTH_PX, DEFAULT_HFOV_DEGREES,
};
pub use crate::intrinsics::{calibrate_pixel, intrinsics_from_focal};
pub use crate::metadata::{RectPx, SizePx};
pub use crate::preview::PreviewGeometry;

// -----------------------------------------------------------------------------------------------
// MODULES
// -----------------------------------------------------------------------------------------------

mod builder;
mod error;
mod estimator;
mod intrinsics;
mod metadata;
mod preview;

pub mod prelude {
    pub use crate::{EstimatorParams, FocalEstimatorBuilder, SafeFocalEstimator};
    pub use crate::{PreviewGeometry, RectPx, SizePx};
}
