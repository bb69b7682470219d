use super::{TreeConfig, TreeNode};
use crate::features::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};
use itertools::Itertools;
use tracing::debug;

/// Minimum impurity improvement for a split to count as better.
const IMPURITY_EPSILON: f64 = 1e-12;

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    weighted_impurity: f64,
}

/// Greedy top-down induction of a decision tree into a node arena.
pub(super) struct TreeBuilder<'a> {
    rows: &'a [FeatureVector],
    targets: &'a [usize],
    n_classes: usize,
    config: &'a TreeConfig,
    nodes: Vec<TreeNode>,
}

impl<'a> TreeBuilder<'a> {
    pub(super) fn new(
        rows: &'a [FeatureVector],
        targets: &'a [usize],
        n_classes: usize,
        config: &'a TreeConfig,
    ) -> Self {
        Self {
            rows,
            targets,
            n_classes,
            config,
            nodes: Vec::new(),
        }
    }

    /// Builds the whole tree, returning its nodes with the root at index 0.
    pub(super) fn build(mut self) -> Vec<TreeNode> {
        let indices: Vec<usize> = (0..self.rows.len()).collect();
        self.build_node(&indices, 0);
        self.nodes
    }

    /// Recursively builds the subtree for `indices`, returning its arena index.
    fn build_node(&mut self, indices: &[usize], depth: usize) -> usize {
        let counts = self.class_counts(indices.iter().copied());
        let impurity = self.config.criterion.impurity(&counts);

        let slot = self.nodes.len();
        // Reserve the slot so children land at higher indices.
        self.nodes.push(TreeNode::Leaf {
            class: majority_class(&counts),
            counts: counts.clone(),
            impurity,
        });

        if self.is_terminal(indices.len(), &counts, depth) {
            return slot;
        }

        // Zero-gain splits are taken too; only constant features end here.
        let Some(split) = self.best_split(indices) else {
            return slot;
        };

        debug!(
            feature = FEATURE_NAMES[split.feature],
            threshold = split.threshold,
            depth,
            samples = indices.len(),
            "Splitting node"
        );

        let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .copied()
            .partition(|&i| self.value(i, split.feature) <= split.threshold);

        let left = self.build_node(&left_rows, depth + 1);
        let right = self.build_node(&right_rows, depth + 1);

        self.nodes[slot] = TreeNode::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
            samples: indices.len(),
            impurity,
        };
        slot
    }

    fn is_terminal(&self, n_samples: usize, counts: &[usize], depth: usize) -> bool {
        let is_pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
        let depth_reached = self.config.max_depth.is_some_and(|max| depth >= max);
        is_pure || depth_reached || n_samples < self.config.min_samples_split.max(2)
    }

    /// Finds the split with the lowest weighted child impurity.
    ///
    /// Features are scanned in vector order and thresholds in ascending order;
    /// on equal scores the first candidate wins. The best candidate is returned
    /// even when it does not lower the parent's impurity, so XOR-shaped nodes
    /// still split. Returns `None` only when every feature is constant.
    fn best_split(&self, indices: &[usize]) -> Option<SplitCandidate> {
        let n = indices.len() as f64;
        let mut best: Option<SplitCandidate> = None;

        for feature in 0..FEATURE_COUNT {
            let thresholds = indices
                .iter()
                .map(|&i| self.value(i, feature))
                .sorted_by(|a, b| a.total_cmp(b))
                .dedup()
                .tuple_windows()
                .map(|(lo, hi)| midpoint(lo, hi));

            for threshold in thresholds {
                let (left, right): (Vec<usize>, Vec<usize>) = indices
                    .iter()
                    .copied()
                    .partition(|&i| self.value(i, feature) <= threshold);
                let criterion = self.config.criterion;
                let left_impurity = criterion.impurity(&self.class_counts(left.iter().copied()));
                let right_impurity = criterion.impurity(&self.class_counts(right.iter().copied()));
                let weighted_impurity =
                    (left.len() as f64 * left_impurity + right.len() as f64 * right_impurity) / n;

                if best
                    .as_ref()
                    .is_none_or(|b| weighted_impurity < b.weighted_impurity - IMPURITY_EPSILON)
                {
                    best = Some(SplitCandidate {
                        feature,
                        threshold,
                        weighted_impurity,
                    });
                }
            }
        }

        best
    }

    fn class_counts(&self, indices: impl Iterator<Item = usize>) -> Vec<usize> {
        let mut counts = vec![0usize; self.n_classes];
        for i in indices {
            counts[self.targets[i]] += 1;
        }
        counts
    }

    fn value(&self, row: usize, feature: usize) -> f64 {
        self.rows[row].values()[feature]
    }
}

/// Threshold halfway between two distinct sorted values. Falls back to the
/// lower value when the halfway point rounds up onto the upper one.
fn midpoint(lo: f64, hi: f64) -> f64 {
    let mid = (lo + hi) / 2.0;
    if mid >= hi { lo } else { mid }
}

/// Most frequent class; ties go to the lowest class index.
fn majority_class(counts: &[usize]) -> usize {
    let mut best = 0;
    for (class, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = class;
        }
    }
    best
}
