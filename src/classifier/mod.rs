//! Training and querying the species classifier.
//!
//! [`TreeClassifier`] holds the training configuration and produces a
//! [`TrainedModel`]. Only a trained model can predict, so there is no way to
//! ask an untrained classifier for a label.

use crate::data::TrainingSet;
use crate::error::TrainError;
use crate::features::{FEATURE_NAMES, FeatureVector};
use crate::rules::RuleFormatter;
use crate::tree::{DecisionTree, TreeConfig};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

mod artifact;

pub use artifact::ARTIFACT_VERSION;

/// Trains decision-tree models with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct TreeClassifier {
    config: TreeConfig,
}

impl TreeClassifier {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Induces a model from `set`.
    ///
    /// Training is deterministic: the same samples in the same order with the
    /// same configuration always produce the same tree. A set containing a
    /// single species yields a one-leaf model that always predicts it.
    pub fn train(&self, set: &TrainingSet) -> Result<TrainedModel, TrainError> {
        if set.is_empty() {
            return Err(TrainError::EmptyTrainingSet);
        }

        let classes = set.labels();
        let class_index: AHashMap<&str, usize> = classes
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();

        let mut rows = Vec::with_capacity(set.len());
        let mut targets = Vec::with_capacity(set.len());
        for (index, sample) in set.samples().iter().enumerate() {
            if sample.species.trim().is_empty() {
                return Err(TrainError::EmptyLabel { index });
            }
            let measurements = sample
                .measurements()
                .map_err(|source| TrainError::InvalidSample { index, source })?;
            rows.push(measurements.encode());
            targets.push(class_index[sample.species.as_str()]);
        }

        let tree = DecisionTree::fit(&rows, &targets, classes.len(), &self.config);
        info!(
            samples = set.len(),
            classes = classes.len(),
            depth = tree.depth(),
            leaves = tree.n_leaves(),
            "Trained decision tree"
        );

        Ok(TrainedModel {
            config: self.config.clone(),
            classes,
            tree,
        })
    }
}

/// An immutable trained classifier. Safe to share across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    config: TreeConfig,
    /// Sorted species labels; leaf class indices point into this list.
    classes: Vec<String>,
    tree: DecisionTree,
}

impl TrainedModel {
    /// Predicts the species label for an encoded sample. The label is always
    /// one of the labels seen during training.
    pub fn predict(&self, features: &FeatureVector) -> &str {
        &self.classes[self.tree.predict(features)]
    }

    /// Human-readable dump of the decision rules.
    pub fn explain(&self) -> String {
        RuleFormatter::format_tree(&self.tree, &self.classes, &FEATURE_NAMES)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    pub fn n_leaves(&self) -> usize {
        self.tree.n_leaves()
    }

    pub fn n_nodes(&self) -> usize {
        self.tree.n_nodes()
    }

    fn validate(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("model has no classes".to_string());
        }
        if self.classes.len() != self.tree.n_classes() {
            return Err(format!(
                "model lists {} classes but its tree expects {}",
                self.classes.len(),
                self.tree.n_classes()
            ));
        }
        self.tree.validate()
    }
}
