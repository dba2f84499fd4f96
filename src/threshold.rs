//! Threshold scalars and the adaptive (high, low) pair.
//!
//! A [`Threshold`] is a fraction of some declared maximum and is validated
//! into `[0, 1]` when it is created, so the threshold engine never checks
//! ranges itself. Named presets resolve to fixed fractions.
use crate::error::EdgeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ratio of the low to the high hysteresis threshold.
pub const LOW_TO_HIGH_RATIO: f32 = 0.35;

/// Named presets accepted wherever a threshold is parsed from text.
pub const PRESETS: [(&str, f32); 6] = [
    ("high", 0.4314),
    ("low", 0.1568),
    ("pa1high", 0.4314),
    ("pa1low", 0.1568),
    ("pa2high", 100.0 / 255.0),
    ("pa2low", 35.0 / 255.0),
];

/// Fraction of a maximum, guaranteed to lie in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Threshold(f32);

impl Threshold {
    pub fn new(value: f32) -> Result<Self, EdgeError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(EdgeError::ThresholdOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Look up a preset by name (case-insensitive).
    pub fn preset(name: &str) -> Option<Self> {
        PRESETS
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|&(_, value)| Self(value))
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl FromStr for Threshold {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(preset) = Self::preset(s) {
            return Ok(preset);
        }
        let value: f32 = s
            .parse()
            .map_err(|_| EdgeError::UnknownThreshold(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Threshold as written in a config file: a number or a preset name.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ThresholdSetting {
    Value(f32),
    Named(String),
}

impl ThresholdSetting {
    pub fn resolve(&self) -> Result<Threshold, EdgeError> {
        match self {
            Self::Value(v) => Threshold::new(*v),
            Self::Named(name) => name.parse(),
        }
    }
}

/// High/low thresholds for a hysteresis edge linker, both in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThresholdPair {
    pub high: f32,
    pub low: f32,
}

impl ThresholdPair {
    /// Derive the pair from the high value; `low = high * 0.35`.
    pub fn from_high(high: f32) -> Self {
        Self {
            high,
            low: high * LOW_TO_HIGH_RATIO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_presets_and_numbers() {
        assert_eq!("high".parse::<Threshold>().unwrap().value(), 0.4314);
        assert_eq!("LOW".parse::<Threshold>().unwrap().value(), 0.1568);
        assert_eq!(
            "pa2low".parse::<Threshold>().unwrap().value(),
            35.0 / 255.0
        );
        assert_eq!(" 0.25 ".parse::<Threshold>().unwrap().value(), 0.25);
        assert_eq!("0".parse::<Threshold>().unwrap().value(), 0.0);
        assert_eq!("1".parse::<Threshold>().unwrap().value(), 1.0);
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert_eq!(
            "1.5".parse::<Threshold>(),
            Err(EdgeError::ThresholdOutOfRange(1.5))
        );
        assert_eq!(
            Threshold::new(-0.1),
            Err(EdgeError::ThresholdOutOfRange(-0.1))
        );
        assert!(Threshold::new(f32::NAN).is_err());
        assert_eq!(
            "medium".parse::<Threshold>(),
            Err(EdgeError::UnknownThreshold("medium".to_string()))
        );
    }

    #[test]
    fn setting_deserializes_number_or_name() {
        let v: ThresholdSetting = serde_json::from_str("0.3").unwrap();
        assert_eq!(v.resolve().unwrap().value(), 0.3);
        let n: ThresholdSetting = serde_json::from_str("\"pa1high\"").unwrap();
        assert_eq!(n.resolve().unwrap().value(), 0.4314);
        let bad: ThresholdSetting = serde_json::from_str("2").unwrap();
        assert!(bad.resolve().is_err());
    }

    #[test]
    fn pair_low_is_fraction_of_high() {
        let pair = ThresholdPair::from_high(0.5);
        assert_eq!(pair.low, 0.5 * LOW_TO_HIGH_RATIO);
        assert!(pair.high >= pair.low);
    }
}
