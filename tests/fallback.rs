//! # Fallback Behaviour Test
//!
//! Exercises the estimator end to end against a scripted preview helper, covering the full
//! priority chain from complete metadata down to the literal default width.

use cv_focalest::prelude::*;
use cv_focalest::{calibrate_pixel, intrinsics_from_focal, Error, Result};

// -----------------------------------------------------------------------------------------------
// MOCK PREVIEW HELPER
// -----------------------------------------------------------------------------------------------

/// Scripted stand-in for the external preview helper.
struct ScriptedHelper {
    /// Focal length the delegate computation reports, `None` makes it fault
    delegate_focal_px: Option<f64>,

    /// Frame size the helper reports, `None` makes the query fault
    frame: Option<SizePx>,
}

impl PreviewGeometry for ScriptedHelper {
    fn focal_length_px(
        &self,
        _focals_mm: Option<&[f32]>,
        _sensor_px: Option<SizePx>,
        _active_array: Option<RectPx>,
    ) -> Result<f64> {
        self.delegate_focal_px
            .ok_or_else(|| Error::PreviewHelperError(String::from("No focal length metadata")))
    }

    fn frame_size(&self) -> Result<SizePx> {
        self.frame.ok_or(Error::FrameSizeUnavailable)
    }
}

/// The default estimate, `0.5 * w / tan(30 deg)`.
fn estimate(width_px: f64) -> f64 {
    (0.5 * width_px / (30.0_f64).to_radians().tan()).max(1.0)
}

// -----------------------------------------------------------------------------------------------
// TESTS
// -----------------------------------------------------------------------------------------------

/// Complete metadata with a healthy delegate returns the delegate's value unchanged.
#[test]
fn delegate_path() {
    let est = SafeFocalEstimator::new(ScriptedHelper {
        delegate_focal_px: Some(1600.0),
        frame: Some(SizePx::new(1920, 1080)),
    });

    let focal = est.focal_length_px(
        Some(&[4.0]),
        Some(SizePx::new(1920, 1080)),
        Some(RectPx::new(0, 0, 1920, 1080)),
    );

    assert_eq!(focal, 1600.0);
}

/// Empty focal lengths and no sensor size fall back to the queried frame width.
#[test]
fn frame_width_path() {
    let est = SafeFocalEstimator::new(ScriptedHelper {
        delegate_focal_px: Some(1600.0),
        frame: Some(SizePx::new(1280, 720)),
    });

    let focal = est.focal_length_px(Some(&[]), None, None);

    assert!((focal - estimate(1280.0)).abs() < 1e-9);
}

/// Zero sensor width and a faulting frame query fall back to the literal 1080 default.
#[test]
fn default_width_path() {
    let est = SafeFocalEstimator::new(ScriptedHelper {
        delegate_focal_px: None,
        frame: None,
    });

    let focal = est.focal_length_px(None, Some(SizePx::new(0, 1920)), None);

    assert!((focal - estimate(1080.0)).abs() < 1e-9);
}

/// A faulting delegate with a positive sensor width estimates from that sensor width.
#[test]
fn delegate_fault_path() {
    let est = SafeFocalEstimator::new(ScriptedHelper {
        delegate_focal_px: None,
        frame: Some(SizePx::new(640, 480)),
    });

    let focal = est.focal_length_px(Some(&[3.5]), Some(SizePx::new(1000, 750)), None);

    assert!((focal - estimate(1000.0)).abs() < 1e-9);
}

/// Every combination of absent or zeroed inputs still yields a finite value of at least 1.0.
#[test]
fn never_faults() {
    let est = SafeFocalEstimator::new(ScriptedHelper {
        delegate_focal_px: None,
        frame: None,
    });

    let sensors = [None, Some(SizePx::new(0, 0)), Some(SizePx::new(640, 480))];
    let focal_seqs: [Option<&[f32]>; 3] = [None, Some(&[]), Some(&[4.0])];

    for sensor in sensors.iter() {
        for focals in focal_seqs.iter() {
            let focal = est.focal_length_px(*focals, *sensor, None);

            assert!(focal.is_finite());
            assert!(focal >= 1.0);
        }
    }
}

/// An estimated focal length plugs straight into the pinhole model used downstream.
#[test]
fn feeds_pinhole_model() {
    let est = SafeFocalEstimator::new(ScriptedHelper {
        delegate_focal_px: None,
        frame: Some(SizePx::new(1280, 720)),
    });

    let focal = est.focal_length_px(None, None, None);
    let intrinsics = intrinsics_from_focal(focal, SizePx::new(1280, 720));

    let centre = calibrate_pixel(&intrinsics, 640.0, 360.0);
    assert!(centre.0.x.abs() < 1e-9);
    assert!(centre.0.y.abs() < 1e-9);

    // The right frame edge sits half the assumed 60 degree HFOV from the axis
    let edge = calibrate_pixel(&intrinsics, 1280.0, 360.0);
    assert!((edge.0.x.atan().to_degrees() - 30.0).abs() < 1e-9);
}
