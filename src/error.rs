use std::path::PathBuf;
use thiserror::Error;

/// Errors caused by user-supplied measurements. These are surfaced directly to
/// the user with a corrective message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a positive number, but got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be a finite number, but got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be a number, but got '{raw}'")]
    NotANumber { field: &'static str, raw: String },

    #[error("{field} must be between {min} and {max}, but got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Unknown stem quality '{0}' (expected one of: thin, medium, thick)")]
    UnknownStemQuality(String),
}

/// Errors that can occur while inducing a decision tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainError {
    #[error("Cannot train a classifier on an empty training set")]
    EmptyTrainingSet,

    #[error("Training sample {index} is invalid: {source}")]
    InvalidSample {
        index: usize,
        #[source]
        source: InputError,
    },

    #[error("Training sample {index} has an empty species label")]
    EmptyLabel { index: usize },
}

/// Errors related to the availability and persistence of a trained model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("No trained model was provided; train or load a model before identifying plants")]
    NotTrained,

    #[error("Model artifact error: {0}")]
    Artifact(String),

    #[error("Unsupported model artifact version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors that can occur while loading or querying the species knowledge base.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("No species record for label '{0}'")]
    UnknownSpecies(String),

    #[error("Species label '{0}' is defined more than once")]
    DuplicateLabel(String),

    #[error("Failed to parse species knowledge base: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not read species file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while reading or writing a training dataset file.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to parse training dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not access dataset file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset sample {index} is invalid: {source}")]
    InvalidSample {
        index: usize,
        #[source]
        source: InputError,
    },
}
