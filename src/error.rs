//! # `cv_focalest` Error module
//!
//! Provides abstractions over errors which can occur during this crate's use.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use std::path::PathBuf;

use serde_any;
use thiserror;

// -----------------------------------------------------------------------------------------------
// ENUMERATIONS
// -----------------------------------------------------------------------------------------------

/// Result type used by fallible functions inside the `cv_focalest` crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors which can occur during use of the `cv_focalest` crate.
///
/// Faults raised by a [`crate::PreviewGeometry`] delegate are caught inside
/// [`crate::SafeFocalEstimator`] and never reach the estimator's caller; the variants below exist
/// so that delegate implementations have something meaningful to return.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Cannot find file at {0:?}")]
    FileNotFound(PathBuf),

    #[error("Error deserialising data: {0}")]
    DeserialisationError(serde_any::Error),

    #[error("The camera did not report the metadata required to compute a focal length")]
    MetadataUnavailable,

    #[error("The current preview frame size is not available")]
    FrameSizeUnavailable,

    #[error("Error in the underlying preview helper: {0}")]
    PreviewHelperError(String),
}
