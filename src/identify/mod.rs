//! The per-request identification pipeline: encode, predict, look up.

use crate::classifier::{TrainedModel, TreeClassifier};
use crate::data::TrainingSet;
use crate::error::{InputError, ModelError};
use crate::features::{InputLimits, Measurements, StemQuality};
use crate::knowledge::{KnowledgeBase, SpeciesRecord};
use crate::tree::TreeConfig;
use tracing::{debug, warn};

/// The outcome of identifying one plant.
#[derive(Debug, Clone)]
pub struct Identification<'a> {
    pub measurements: Measurements,
    /// The label emitted by the classifier.
    pub label: &'a str,
    /// The display record, or the placeholder when `known` is false.
    pub species: &'a SpeciesRecord,
    pub known: bool,
    /// The rule dump of the model that produced the label.
    pub rules: &'a str,
}

/// Identifies plant species from measurements.
///
/// An `Identifier` is built once at startup and never mutated afterwards, so it
/// can be shared freely between threads and requests.
#[derive(Debug, Clone)]
pub struct Identifier {
    model: TrainedModel,
    knowledge: KnowledgeBase,
    limits: Option<InputLimits>,
    rules: String,
}

pub struct IdentifierBuilder {
    knowledge: KnowledgeBase,
    model: Option<TrainedModel>,
    limits: Option<InputLimits>,
}

impl IdentifierBuilder {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self {
            knowledge,
            model: None,
            limits: None,
        }
    }

    pub fn with_model(mut self, model: TrainedModel) -> Self {
        self.model = Some(model);
        self
    }

    /// Rejects measurements outside `limits` in addition to the encoder's checks.
    pub fn with_input_limits(mut self, limits: InputLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Fails with [`ModelError::NotTrained`] if no model was supplied.
    pub fn build(self) -> Result<Identifier, ModelError> {
        let model = self.model.ok_or(ModelError::NotTrained)?;

        let missing = self
            .knowledge
            .missing_labels(model.classes().iter().map(String::as_str));
        if !missing.is_empty() {
            warn!(
                "Knowledge base has no records for: {}; these will show a placeholder",
                missing.join(", ")
            );
        }

        let rules = model.explain();
        Ok(Identifier {
            model,
            knowledge: self.knowledge,
            limits: self.limits,
            rules,
        })
    }
}

impl Identifier {
    pub fn builder(knowledge: KnowledgeBase) -> IdentifierBuilder {
        IdentifierBuilder::new(knowledge)
    }

    /// Trains on the built-in dataset with the default configuration and
    /// pairs the model with the built-in knowledge base.
    pub fn from_builtin() -> crate::prelude::Result<Self> {
        let set = TrainingSet::builtin()?;
        let model = TreeClassifier::new(TreeConfig::default()).train(&set)?;
        let knowledge = KnowledgeBase::builtin()?;
        Ok(Self::builder(knowledge).with_model(model).build()?)
    }

    /// Runs one prediction and looks up its display record.
    pub fn identify(&self, measurements: &Measurements) -> Result<Identification<'_>, InputError> {
        if let Some(limits) = &self.limits {
            limits.check(measurements)?;
        }

        let features = measurements.encode();
        let label = self.model.predict(&features);
        debug!(?features, label, "Predicted species");

        let known = self.knowledge.contains(label);
        Ok(Identification {
            measurements: *measurements,
            label,
            species: self.knowledge.lookup(label),
            known,
            rules: &self.rules,
        })
    }

    /// Validates raw form values, then identifies them.
    pub fn identify_raw(
        &self,
        height_cm: f64,
        leaf_width_cm: f64,
        stem_quality: &str,
    ) -> Result<Identification<'_>, InputError> {
        let stem = stem_quality.parse::<StemQuality>()?;
        let measurements = Measurements::new(height_cm, leaf_width_cm, stem)?;
        self.identify(&measurements)
    }

    pub fn model(&self) -> &TrainedModel {
        &self.model
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn limits(&self) -> Option<&InputLimits> {
        self.limits.as_ref()
    }

    /// The model's rule dump, rendered once at build time.
    pub fn rules(&self) -> &str {
        &self.rules
    }
}
