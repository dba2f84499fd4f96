use crate::detector::{CannyOptions, DetectorMode, SobelOptions};
use crate::error::EdgeError;
use crate::threshold::ThresholdSetting;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub mode: ModeConfig,
    #[serde(default)]
    pub output: EdgeOutputConfig,
}

/// `{"sobel": {...}}` or `{"canny": {...}}`.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ModeConfig {
    Sobel(SobelConfig),
    Canny(CannyConfig),
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self::Sobel(SobelConfig::default())
    }
}

impl ModeConfig {
    /// Validate thresholds and produce the detector mode.
    pub fn resolve(&self) -> Result<DetectorMode, EdgeError> {
        match self {
            Self::Sobel(cfg) => {
                let threshold = cfg.threshold.as_ref().map(|t| t.resolve()).transpose()?;
                Ok(DetectorMode::Sobel(SobelOptions { threshold }))
            }
            Self::Canny(cfg) => Ok(DetectorMode::Canny(CannyOptions { sigma: cfg.sigma })),
        }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SobelConfig {
    /// Fraction in [0, 1] or a preset name; absent means no binarization.
    pub threshold: Option<ThresholdSetting>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CannyConfig {
    pub sigma: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EdgeOutputConfig {
    /// Destination PGM for the edge image (required in Sobel mode).
    pub image: Option<PathBuf>,
    #[serde(rename = "report_json")]
    pub report_json: Option<PathBuf>,
}

pub fn parse_config(data: &str) -> Result<EdgeToolConfig, String> {
    serde_json::from_str(data).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threshold::Threshold;

    #[test]
    fn defaults_to_sobel_without_threshold() {
        let cfg = parse_config(r#"{"input": "in.pgm", "output": {"image": "out.pgm"}}"#).unwrap();
        assert_eq!(cfg.mode, ModeConfig::default());
        assert_eq!(
            cfg.mode.resolve().unwrap(),
            DetectorMode::Sobel(SobelOptions { threshold: None })
        );
        assert!(cfg.output.report_json.is_none());
    }

    #[test]
    fn sobel_threshold_accepts_preset_or_number() {
        let cfg = parse_config(
            r#"{"input": "a.pgm", "mode": {"sobel": {"threshold": "high"}}, "output": {"image": "b.pgm"}}"#,
        )
        .unwrap();
        let expected = Threshold::new(0.4314).unwrap();
        assert_eq!(
            cfg.mode.resolve().unwrap(),
            DetectorMode::Sobel(SobelOptions::default().with_threshold(expected))
        );

        let cfg = parse_config(r#"{"input": "a.pgm", "mode": {"sobel": {"threshold": 0}}}"#)
            .unwrap();
        let DetectorMode::Sobel(opts) = cfg.mode.resolve().unwrap() else {
            panic!("expected sobel mode");
        };
        assert_eq!(opts.threshold.map(Threshold::value), Some(0.0));
    }

    #[test]
    fn out_of_range_threshold_is_rejected_at_resolve() {
        let cfg = parse_config(r#"{"input": "a.pgm", "mode": {"sobel": {"threshold": 1.2}}}"#)
            .unwrap();
        assert_eq!(
            cfg.mode.resolve().unwrap_err(),
            EdgeError::ThresholdOutOfRange(1.2)
        );
    }

    #[test]
    fn canny_mode_carries_sigma() {
        let cfg = parse_config(
            r#"{"input": "a.pgm", "mode": {"canny": {"sigma": 2}}, "output": {"report_json": "r.json"}}"#,
        )
        .unwrap();
        assert_eq!(
            cfg.mode.resolve().unwrap(),
            DetectorMode::Canny(CannyOptions { sigma: 2 })
        );
        assert_eq!(cfg.output.report_json, Some(PathBuf::from("r.json")));
    }

    #[test]
    fn missing_input_is_an_error() {
        assert!(parse_config(r#"{"output": {}}"#).is_err());
    }
}
