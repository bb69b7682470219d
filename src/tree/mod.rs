//! Axis-aligned binary decision trees over the plant feature vector.
//!
//! Nodes live in a flat arena with the root at index 0. Children always sit
//! at higher indices than their parent, so traversal can never cycle.

use crate::features::{FEATURE_COUNT, FeatureVector};
use serde::{Deserialize, Serialize};

mod builder;

use builder::TreeBuilder;

/// Impurity measure used to score candidate splits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion {
    #[default]
    Gini,
    Entropy,
}

impl Criterion {
    /// Impurity of a node holding `counts[k]` samples of class `k`.
    pub fn impurity(self, counts: &[usize]) -> f64 {
        let total: usize = counts.iter().sum();
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        match self {
            Criterion::Gini => {
                1.0 - counts
                    .iter()
                    .map(|&c| {
                        let p = c as f64 / total;
                        p * p
                    })
                    .sum::<f64>()
            }
            Criterion::Entropy => counts
                .iter()
                .filter(|&&c| c > 0)
                .map(|&c| {
                    let p = c as f64 / total;
                    -p * p.log2()
                })
                .sum(),
        }
    }
}

/// Hyperparameters for tree induction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Maximum depth of the tree; `None` grows until the leaves are pure.
    pub max_depth: Option<usize>,
    /// A node with fewer samples than this becomes a leaf.
    pub min_samples_split: usize,
    pub criterion: Criterion,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(4),
            min_samples_split: 2,
            criterion: Criterion::Gini,
        }
    }
}

/// A node in the decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    /// Samples with `features[feature] <= threshold` go left, the rest go right.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
        samples: usize,
        impurity: f64,
    },
    Leaf {
        class: usize,
        /// Per-class sample counts that reached this leaf.
        counts: Vec<usize>,
        impurity: f64,
    },
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    pub fn samples(&self) -> usize {
        match self {
            TreeNode::Split { samples, .. } => *samples,
            TreeNode::Leaf { counts, .. } => counts.iter().sum(),
        }
    }
}

/// A trained decision tree classifier over class indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
    n_classes: usize,
}

impl DecisionTree {
    /// Induces a tree from encoded rows and their class indices.
    ///
    /// `rows` and `targets` must have the same non-zero length, and every
    /// target must be below `n_classes`.
    pub fn fit(
        rows: &[FeatureVector],
        targets: &[usize],
        n_classes: usize,
        config: &TreeConfig,
    ) -> Self {
        let nodes = TreeBuilder::new(rows, targets, n_classes, config).build();
        Self { nodes, n_classes }
    }

    /// Classifies a single feature vector, returning a class index.
    pub fn predict(&self, features: &FeatureVector) -> usize {
        let mut idx = 0usize;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { class, .. } => return *class,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    let value = features.get(*feature).unwrap_or(0.0);
                    idx = if value <= *threshold { *left } else { *right };
                }
            }
        }
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    pub fn node_at(&self, index: usize) -> Option<&TreeNode> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Longest root-to-leaf path; a single leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.node_depth(0)
    }

    fn node_depth(&self, idx: usize) -> usize {
        match &self.nodes[idx] {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Split { left, right, .. } => {
                1 + self.node_depth(*left).max(self.node_depth(*right))
            }
        }
    }

    /// Checks the structural invariants of a tree that did not come from
    /// [`DecisionTree::fit`], e.g. one decoded from an artifact.
    pub fn validate(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        let n = self.nodes.len();
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(format!("node {idx} splits on unknown feature {feature}"));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {idx} has a non-finite threshold"));
                    }
                    for child in [left, right] {
                        if *child <= idx || *child >= n {
                            return Err(format!("node {idx} has invalid child index {child}"));
                        }
                    }
                }
                TreeNode::Leaf { class, .. } => {
                    if *class >= self.n_classes {
                        return Err(format!(
                            "leaf {idx} predicts class {class}, but there are only {} classes",
                            self.n_classes
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}
