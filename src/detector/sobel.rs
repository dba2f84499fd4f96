//! Sobel pipeline: convolve (X, Y) → magnitude → unit normalization →
//! optional binarization.
//!
//! Stage timings are recorded as `convolve`, `magnitude`, `normalize` and,
//! when a threshold is configured, `threshold`.
use super::options::SobelOptions;
use crate::diagnostics::timing::{elapsed_ms, TimingBreakdown};
use crate::edges::{combine_magnitude, convolve};
use crate::error::EdgeError;
use crate::image::ImageF32;
use crate::kernel::Kernel;
use crate::ops::{scale, threshold};
use crate::threshold::Threshold;
use log::debug;
use std::time::Instant;

/// Result of one Sobel run.
#[derive(Clone, Debug)]
pub struct SobelOutput {
    /// Unit-interval edge image; binary {0, 1} when a threshold was applied.
    pub edges: ImageF32,
    /// Largest raw gradient magnitude, used as the normalization divisor.
    pub max_magnitude: f32,
    pub threshold: Option<Threshold>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Default)]
pub struct SobelDetector {
    options: SobelOptions,
}

impl SobelDetector {
    pub fn new(options: SobelOptions) -> Self {
        Self { options }
    }

    /// Run the pipeline on a unit-interval image.
    ///
    /// Returns [`EdgeError::NoGradient`] when the interior magnitude is zero
    /// everywhere (flat image, or no interior at all) instead of normalizing
    /// by zero.
    pub fn detect(&self, image: &ImageF32) -> Result<SobelOutput, EdgeError> {
        let start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let kernel_x = Kernel::sobel_x();
        let kernel_y = Kernel::sobel_y();
        let (gx, gy) = timings.time("convolve", || {
            (convolve(image, &kernel_x), convolve(image, &kernel_y))
        });
        let radius = kernel_x.radius().max(kernel_y.radius());
        let magnitude = timings.time("magnitude", || combine_magnitude(&[&gx, &gy], radius))?;
        debug!(
            "SobelDetector::detect {}x{} max_magnitude={:.4}",
            image.w, image.h, magnitude.max
        );
        if magnitude.max == 0.0 {
            debug!("SobelDetector::detect zero interior gradient");
            return Err(EdgeError::NoGradient);
        }

        let inv_max = 1.0 / magnitude.max;
        let mut edges = timings.time("normalize", || scale(&magnitude.mag, inv_max));

        if let Some(t) = self.options.threshold {
            edges = timings.time("threshold", || threshold(&edges, t, 1.0));
            debug!("SobelDetector::detect binarized at t={t}");
        }

        timings.total_ms = elapsed_ms(start);
        Ok(SobelOutput {
            edges,
            max_magnitude: magnitude.max,
            threshold: self.options.threshold,
            timings,
        })
    }
}

/// One-shot convenience wrapper around [`SobelDetector`].
pub fn sobel_edge_detection(
    image: &ImageF32,
    threshold: Option<Threshold>,
) -> Result<ImageF32, EdgeError> {
    SobelDetector::new(SobelOptions { threshold })
        .detect(image)
        .map(|out| out.edges)
}
