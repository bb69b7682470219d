use super::StemQuality;
use crate::error::InputError;
use serde::{Deserialize, Serialize};

pub const HEIGHT_FIELD: &str = "height";
pub const LEAF_WIDTH_FIELD: &str = "leaf width";

/// Number of features produced by the encoder.
pub const FEATURE_COUNT: usize = 3;

/// Feature names in vector order, as shown in the rule dump.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["height_cm", "leaf_width_cm", "stem_quality_code"];

/// A validated set of plant measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub height_cm: f64,
    pub leaf_width_cm: f64,
    pub stem_quality: StemQuality,
}

impl Measurements {
    /// Validates the raw values. Both lengths must be finite and strictly positive.
    pub fn new(
        height_cm: f64,
        leaf_width_cm: f64,
        stem_quality: StemQuality,
    ) -> Result<Self, InputError> {
        Ok(Self {
            height_cm: check_positive(HEIGHT_FIELD, height_cm)?,
            leaf_width_cm: check_positive(LEAF_WIDTH_FIELD, leaf_width_cm)?,
            stem_quality,
        })
    }

    /// Encodes the measurements into the fixed-order feature vector.
    pub fn encode(&self) -> FeatureVector {
        FeatureVector([
            self.height_cm,
            self.leaf_width_cm,
            f64::from(self.stem_quality.code()),
        ])
    }
}

/// The numeric input of the classifier: `[height_cm, leaf_width_cm, stem_quality_code]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(pub(crate) [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, feature: usize) -> Option<f64> {
        self.0.get(feature).copied()
    }
}

/// Accepted value ranges for the input form. Inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLimits {
    pub height_cm: (f64, f64),
    pub leaf_width_cm: (f64, f64),
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            height_cm: (10.0, 400.0),
            leaf_width_cm: (0.2, 20.0),
        }
    }
}

impl InputLimits {
    pub fn check(&self, measurements: &Measurements) -> Result<(), InputError> {
        check_range(HEIGHT_FIELD, measurements.height_cm, self.height_cm)?;
        check_range(LEAF_WIDTH_FIELD, measurements.leaf_width_cm, self.leaf_width_cm)
    }
}

/// Encodes raw form values into a feature vector.
///
/// `stem_quality` is matched case-insensitively against the closed set of
/// categories; anything else is rejected.
pub fn encode(
    height_cm: f64,
    leaf_width_cm: f64,
    stem_quality: &str,
) -> Result<FeatureVector, InputError> {
    let stem = stem_quality.parse::<StemQuality>()?;
    Measurements::new(height_cm, leaf_width_cm, stem).map(|m| m.encode())
}

/// Parses the text of a numeric form field.
pub fn parse_measurement(field: &'static str, raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber {
            field,
            raw: raw.to_string(),
        })
}

fn check_positive(field: &'static str, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    if value <= 0.0 {
        return Err(InputError::NonPositive { field, value });
    }
    Ok(value)
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), InputError> {
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
