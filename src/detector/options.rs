//! Options for the two detector modes.
//!
//! Both are plain values; text parsing and range validation of thresholds
//! happens in `config`/`threshold` before a detector is built.
use crate::threshold::Threshold;

/// Sobel pipeline options.
///
/// `threshold == None` means the normalized magnitude is returned as is;
/// `Some(0.0)` still binarizes (every pixel on).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SobelOptions {
    pub threshold: Option<Threshold>,
}

impl SobelOptions {
    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// Adaptive-threshold ("canny") options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CannyOptions {
    /// Smoothing scale for the derivative-of-Gaussian stage. Accepted and
    /// reported, but no implemented stage reads it yet.
    pub sigma: i32,
}

/// Which detector to run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetectorMode {
    Sobel(SobelOptions),
    Canny(CannyOptions),
}

impl Default for DetectorMode {
    fn default() -> Self {
        Self::Sobel(SobelOptions::default())
    }
}

impl DetectorMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sobel(_) => "sobel",
            Self::Canny(_) => "canny",
        }
    }
}
