#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod threshold;

// Numeric building blocks used by the detectors.
pub mod edges;
pub mod histogram;
pub mod kernel;
pub mod ops;

// Tool configuration (JSON) and the tool entry point.
pub mod config;
pub mod tool;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{
    estimate_thresholds, sobel_edge_detection, CannyDetector, CannyEstimate, CannyOptions,
    DetectorMode, SobelDetector, SobelOptions, SobelOutput,
};
pub use crate::error::EdgeError;
pub use crate::threshold::{Threshold, ThresholdPair};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use edge_detector::prelude::*;
///
/// let img = ImageF32::from_fn(16, 16, |x, _| if x < 8 { 0.0 } else { 1.0 });
/// let out = SobelDetector::new(SobelOptions::default()).detect(&img).unwrap();
/// assert_eq!(out.edges.shape(), (16, 16));
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8, ImageView};
    pub use crate::{
        CannyDetector, CannyOptions, EdgeError, SobelDetector, SobelOptions, Threshold,
        ThresholdPair,
    };
}
