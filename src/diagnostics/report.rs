use super::timing::TimingBreakdown;
use crate::detector::{CannyEstimate, SobelOutput};
use crate::threshold::ThresholdPair;
use serde::Serialize;

/// Serializable summary of one run, written next to the output image.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeReport {
    pub input: InputDescriptor,
    pub mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_magnitude: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<ThresholdPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal_bucket: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigma: Option<i32>,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

impl EdgeReport {
    pub fn sobel(input: InputDescriptor, output: &SobelOutput) -> Self {
        Self {
            input,
            mode: "sobel",
            threshold: output.threshold.map(|t| t.value()),
            max_magnitude: Some(output.max_magnitude),
            thresholds: None,
            modal_bucket: None,
            sigma: None,
            timings: output.timings.clone(),
        }
    }

    pub fn canny(input: InputDescriptor, estimate: &CannyEstimate) -> Self {
        Self {
            input,
            mode: "canny",
            threshold: None,
            max_magnitude: None,
            thresholds: Some(estimate.thresholds),
            modal_bucket: Some(estimate.modal_bucket),
            sigma: Some(estimate.sigma),
            timings: estimate.timings.clone(),
        }
    }
}
