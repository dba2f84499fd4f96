//! Detector front-ends over the numeric core.
//!
//! - [`SobelDetector`]: full gradient-magnitude edge image with optional
//!   binarization.
//! - [`CannyDetector`]: histogram-based (high, low) threshold estimation for
//!   a hysteresis detector.

pub mod canny;
pub mod options;
pub mod sobel;

pub use canny::{estimate_thresholds, CannyDetector, CannyEstimate};
pub use options::{CannyOptions, DetectorMode, SobelOptions};
pub use sobel::{sobel_edge_detection, SobelDetector, SobelOutput};
