//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the plantid crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use plantid::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let set = TrainingSet::from_file("path/to/training_set.json")?;
//! let model = TreeClassifier::new(TreeConfig::default()).train(&set)?;
//! let knowledge = KnowledgeBase::from_file("path/to/species.json")?;
//!
//! let identifier = Identifier::builder(knowledge).with_model(model).build()?;
//! let result = identifier.identify_raw(50.0, 5.0, "thick")?;
//! println!("Predicted: {}", result.species.display_name());
//! # Ok(())
//! # }
//! ```

// Pipeline
pub use crate::identify::{Identification, Identifier, IdentifierBuilder};

// Training and prediction
pub use crate::classifier::{TrainedModel, TreeClassifier};
pub use crate::data::{LabeledSample, TrainingSet};
pub use crate::features::{FeatureVector, InputLimits, Measurements, StemQuality, encode};
pub use crate::tree::{Criterion, TreeConfig};

// Knowledge base and presentation
pub use crate::knowledge::{ImageRef, KnowledgeBase, SpeciesRecord};
pub use crate::render::{RenderOptions, ReportFormatter};

// Error types
pub use crate::error::{DatasetError, InputError, KnowledgeError, ModelError, TrainError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
