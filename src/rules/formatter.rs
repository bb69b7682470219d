use crate::tree::{DecisionTree, TreeNode};

const BRANCH: &str = "|--- ";
const INDENT: &str = "|   ";

/// Formats decision trees as indented threshold rules.
pub struct RuleFormatter;

impl RuleFormatter {
    /// Renders every branch of `tree`, one rule per line.
    ///
    /// `classes` maps leaf class indices to labels and `feature_names` maps
    /// split features to names. Thresholds are printed with two decimals.
    pub fn format_tree(tree: &DecisionTree, classes: &[String], feature_names: &[&str]) -> String {
        let mut result = String::new();
        Self::format_recursive(tree, 0, 0, classes, feature_names, &mut result);
        result
    }

    fn format_recursive(
        tree: &DecisionTree,
        idx: usize,
        depth: usize,
        classes: &[String],
        feature_names: &[&str],
        result: &mut String,
    ) {
        let Some(node) = tree.node_at(idx) else {
            return;
        };
        let prefix = format!("{}{}", INDENT.repeat(depth), BRANCH);

        match node {
            TreeNode::Leaf { class, .. } => {
                let label = classes.get(*class).map(String::as_str).unwrap_or("?");
                result.push_str(&format!("{}class: {}\n", prefix, label));
            }
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
                ..
            } => {
                let name = Self::feature_name(*feature, feature_names);
                result.push_str(&format!("{}{} <= {:.2}\n", prefix, name, threshold));
                Self::format_recursive(tree, *left, depth + 1, classes, feature_names, result);
                result.push_str(&format!("{}{} >  {:.2}\n", prefix, name, threshold));
                Self::format_recursive(tree, *right, depth + 1, classes, feature_names, result);
            }
        }
    }

    fn feature_name(feature: usize, feature_names: &[&str]) -> String {
        feature_names
            .get(feature)
            .map(|name| name.to_string())
            .unwrap_or_else(|| format!("feature_{}", feature))
    }
}
