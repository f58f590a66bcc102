//! # `FocalEstimatorBuilder` implementation
//!
//! This module implements the builder for safe focal length estimators.

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use std::path::Path;

use serde_any;

use crate::error::{Error, Result};
use crate::estimator::{EstimatorParams, SafeFocalEstimator};
use crate::preview::PreviewGeometry;

// -----------------------------------------------------------------------------------------------
// DATA STRUCTURES
// -----------------------------------------------------------------------------------------------

/// Builder for [`SafeFocalEstimator`] objects.
pub struct FocalEstimatorBuilder {
    params: EstimatorParams,
}

// -----------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// -----------------------------------------------------------------------------------------------

impl FocalEstimatorBuilder {
    pub fn new() -> Self {
        Self {
            params: EstimatorParams::default(),
        }
    }

    /// Set the assumed horizontal field of view in degrees.
    ///
    /// Used only on the estimate path, default value is `60.0`.
    pub fn hfov_degrees(mut self, hfov_degrees: f64) -> Self {
        self.params.hfov_degrees = hfov_degrees;

        self
    }

    /// Set the frame width in pixels used when no usable width is reported at all.
    ///
    /// Default value is `1080`.
    pub fn fallback_width(mut self, width_px: u32) -> Self {
        self.params.fallback_width_px = width_px;

        self
    }

    /// Replace all parameters at once.
    pub fn params(mut self, params: EstimatorParams) -> Self {
        self.params = params;

        self
    }

    /// Load the estimator parameters from a file.
    ///
    /// The file type will be guessed at runtime, any file type supported by
    /// [`serde_any`](https://docs.rs/serde_any/0.5.0/serde_any/) is supported, but it must be
    /// deserialisable into [`EstimatorParams`].
    pub fn params_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        // Check the file exitsts
        if !path.as_ref().exists() {
            return Err(Error::FileNotFound(path.as_ref().to_path_buf()));
        }

        // Load the parameters from the file, guessing which format they're in using serde_any
        self.params = serde_any::from_file(path).map_err(|e| Error::DeserialisationError(e))?;

        Ok(self)
    }

    /// Build the estimator around the given delegate.
    pub fn build<G: PreviewGeometry>(self, delegate: G) -> SafeFocalEstimator<G> {
        SafeFocalEstimator::with_params(delegate, self.params)
    }
}

impl Default for FocalEstimatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------
