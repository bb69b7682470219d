use crate::error::{DatasetError, InputError};
use crate::features::{Measurements, StemQuality};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const BUILTIN_TRAINING_SET: &str = include_str!("../../data/training_set.json");

/// A single training row: the three measurements plus the species they belong to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LabeledSample {
    pub height_cm: f64,
    pub leaf_width_cm: f64,
    pub stem_quality: StemQuality,
    pub species: String,
}

impl LabeledSample {
    pub fn new(
        height_cm: f64,
        leaf_width_cm: f64,
        stem_quality: StemQuality,
        species: impl Into<String>,
    ) -> Self {
        Self {
            height_cm,
            leaf_width_cm,
            stem_quality,
            species: species.into(),
        }
    }

    /// Validates the row's measurements.
    pub fn measurements(&self) -> Result<Measurements, InputError> {
        Measurements::new(self.height_cm, self.leaf_width_cm, self.stem_quality)
    }
}

/// An ordered collection of labeled samples, matching the dataset JSON format.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TrainingSet {
    pub samples: Vec<LabeledSample>,
}

impl TrainingSet {
    pub fn new(samples: Vec<LabeledSample>) -> Self {
        Self { samples }
    }

    /// The toy dataset shipped with the crate: four species, four samples each.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_json(BUILTIN_TRAINING_SET)
    }

    /// Parses and validates a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let set: TrainingSet = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    /// Loads a dataset from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Writes the dataset as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DatasetError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks every row's measurements.
    pub fn validate(&self) -> Result<(), DatasetError> {
        for (index, sample) in self.samples.iter().enumerate() {
            sample
                .measurements()
                .map_err(|source| DatasetError::InvalidSample { index, source })?;
        }
        Ok(())
    }

    pub fn push(&mut self, sample: LabeledSample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[LabeledSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Distinct species labels, sorted.
    pub fn labels(&self) -> Vec<String> {
        self.samples
            .iter()
            .map(|s| s.species.clone())
            .sorted()
            .dedup()
            .collect()
    }
}
