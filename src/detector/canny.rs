//! Adaptive threshold estimation for a hysteresis edge detector.
//!
//! The estimator rescales the unit-interval image to the byte range,
//! histograms the truncated samples, and takes the modal bucket as the high
//! threshold (`high = mode / 255`, `low = 0.35 * high`).
//!
//! The later stages of a full Canny detector (derivative-of-Gaussian
//! smoothing driven by `sigma`, non-maximum suppression, hysteresis linking
//! with the estimated pair) are not implemented. [`CannyEstimate`] is the
//! hand-off point for them.
use super::options::CannyOptions;
use crate::diagnostics::timing::{elapsed_ms, TimingBreakdown};
use crate::histogram::IntensityHistogram;
use crate::image::ImageF32;
use crate::ops::scale;
use crate::threshold::ThresholdPair;
use log::debug;
use std::time::Instant;

/// Thresholds derived from one image, plus the inputs that produced them.
#[derive(Clone, Debug)]
pub struct CannyEstimate {
    pub thresholds: ThresholdPair,
    pub modal_bucket: u8,
    pub sigma: i32,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Default)]
pub struct CannyDetector {
    options: CannyOptions,
}

impl CannyDetector {
    pub fn new(options: CannyOptions) -> Self {
        Self { options }
    }

    pub fn estimate(&self, image: &ImageF32) -> CannyEstimate {
        let start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let scaled = timings.time("rescale", || scale(image, 255.0));
        let hist = timings.time("histogram", || IntensityHistogram::from_image(&scaled));
        let modal_bucket = hist.mode();
        let thresholds = ThresholdPair::from_high(modal_bucket as f32 / 255.0);
        debug!(
            "CannyDetector::estimate {}x{} mode={} high={:.4} low={:.4} sigma={}",
            image.w, image.h, modal_bucket, thresholds.high, thresholds.low, self.options.sigma
        );

        timings.total_ms = elapsed_ms(start);
        CannyEstimate {
            thresholds,
            modal_bucket,
            sigma: self.options.sigma,
            timings,
        }
    }
}

/// Estimate the (high, low) pair for a unit-interval image.
pub fn estimate_thresholds(image: &ImageF32) -> ThresholdPair {
    CannyDetector::default().estimate(image).thresholds
}
