//! # plantid - Plant Species Identification
//!
//! **plantid** predicts a plant species from three simple measurements (height,
//! leaf width and stem thickness) with a small decision-tree classifier, then
//! looks up a description, image and related species for the prediction in a
//! static knowledge base.
//!
//! ## Core Workflow
//!
//! 1.  **Train or Load**: Train a [`TrainedModel`](classifier::TrainedModel) with a
//!     [`TreeClassifier`](classifier::TreeClassifier) on a [`TrainingSet`](data::TrainingSet),
//!     or load one from a saved artifact.
//! 2.  **Assemble**: Combine the model with a [`KnowledgeBase`](knowledge::KnowledgeBase)
//!     into an [`Identifier`](identify::Identifier). Both are immutable from here on.
//! 3.  **Identify**: For each request, the identifier validates and encodes the
//!     measurements, runs one prediction and looks up the species record.
//! 4.  **Render**: Format the result with [`ReportFormatter`](render::ReportFormatter).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use plantid::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let set = TrainingSet::builtin()?;
//!     let model = TreeClassifier::new(TreeConfig::default()).train(&set)?;
//!     println!("{}", model.explain());
//!
//!     let identifier = Identifier::builder(KnowledgeBase::builtin()?)
//!         .with_model(model)
//!         .build()?;
//!
//!     let result = identifier.identify_raw(50.0, 5.0, "Thick")?;
//!     println!("-> Predicted species: {}", result.species.display_name());
//!     println!(
//!         "{}",
//!         ReportFormatter::format_identification(&result, &RenderOptions::default())
//!     );
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod data;
pub mod error;
pub mod features;
pub mod identify;
pub mod knowledge;
pub mod logging;
pub mod prelude;
pub mod render;
pub mod rules;
pub mod tree;

#[cfg(feature = "python-bindings")]
mod python;
