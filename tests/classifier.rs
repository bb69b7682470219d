//! Tests for decision-tree training, prediction and rule dumps.
mod common;
use common::*;
use plantid::prelude::*;
use plantid::tree::TreeNode;

const BUILTIN_RULES: &str = "\
|--- height_cm <= 150.00
|   |--- leaf_width_cm <= 2.90
|   |   |--- class: lavender
|   |--- leaf_width_cm >  2.90
|   |   |--- class: rose
|--- height_cm >  150.00
|   |--- leaf_width_cm <= 6.50
|   |   |--- class: bamboo
|   |--- leaf_width_cm >  6.50
|   |   |--- class: sunflower
";

#[test]
fn test_builtin_model_structure() {
    let model = builtin_model();
    assert_eq!(model.classes(), BUILTIN_LABELS);
    assert_eq!(model.depth(), 2);
    assert_eq!(model.n_leaves(), 4);
    assert_eq!(model.n_nodes(), 7);
    assert_eq!(model.explain(), BUILTIN_RULES);
}

#[test]
fn test_builtin_model_fits_training_data() {
    let set = TrainingSet::builtin().unwrap();
    let model = builtin_model();
    for sample in set.samples() {
        let features = sample.measurements().unwrap().encode();
        assert_eq!(model.predict(&features), sample.species);
    }
}

#[test]
fn test_scenario_prediction() {
    let model = builtin_model();
    let features = encode(50.0, 5.0, "Thick").unwrap();
    assert_eq!(model.predict(&features), "rose");
}

#[test]
fn test_predictions_are_always_training_labels() {
    let model = builtin_model();
    let heights = [0.5, 10.0, 75.0, 149.9, 150.0, 150.1, 300.0, 1000.0];
    let widths = [0.1, 1.0, 2.9, 3.0, 6.5, 7.0, 20.0, 100.0];
    for &h in &heights {
        for &w in &widths {
            for stem in StemQuality::ALL {
                let features = Measurements::new(h, w, stem).unwrap().encode();
                let label = model.predict(&features);
                assert!(
                    BUILTIN_LABELS.contains(&label),
                    "unexpected label '{}' for ({}, {}, {})",
                    label,
                    h,
                    w,
                    stem
                );
            }
        }
    }
}

#[test]
fn test_threshold_boundary_goes_left() {
    let model = builtin_model();
    let features = encode(150.0, 2.0, "thin").unwrap();
    assert_eq!(model.predict(&features), "lavender");
    let features = encode(150.5, 2.0, "thin").unwrap();
    assert_eq!(model.predict(&features), "bamboo");
}

#[test]
fn test_retraining_is_deterministic() {
    let first = builtin_model();
    let second = builtin_model();
    assert_eq!(first.explain(), second.explain());
    assert_eq!(first, second);
}

#[test]
fn test_width_split_dataset() {
    let model = TreeClassifier::default()
        .train(&create_width_split_set())
        .unwrap();
    assert_eq!(model.classes(), ["broad", "narrow"]);
    assert_eq!(
        model.explain(),
        "|--- leaf_width_cm <= 3.00\n|   |--- class: narrow\n|--- leaf_width_cm >  3.00\n|   |--- class: broad\n"
    );
    assert_eq!(model.predict(&encode(500.0, 2.5, "thick").unwrap()), "narrow");
    assert_eq!(model.predict(&encode(1.0, 3.5, "thin").unwrap()), "broad");
}

#[test]
fn test_entropy_criterion_separates_builtin_data() {
    let config = TreeConfig {
        criterion: Criterion::Entropy,
        ..TreeConfig::default()
    };
    let set = TrainingSet::builtin().unwrap();
    let model = TreeClassifier::new(config).train(&set).unwrap();
    for sample in set.samples() {
        let features = sample.measurements().unwrap().encode();
        assert_eq!(model.predict(&features), sample.species);
    }
}

#[test]
fn test_max_depth_limits_tree() {
    let config = TreeConfig {
        max_depth: Some(1),
        ..TreeConfig::default()
    };
    let model = TreeClassifier::new(config)
        .train(&TrainingSet::builtin().unwrap())
        .unwrap();
    assert_eq!(model.depth(), 1);
    assert_eq!(model.n_leaves(), 2);

    let stump = TreeConfig {
        max_depth: Some(0),
        ..TreeConfig::default()
    };
    let model = TreeClassifier::new(stump)
        .train(&TrainingSet::builtin().unwrap())
        .unwrap();
    assert_eq!(model.n_nodes(), 1);
    // Four-way tie: the first class in sorted order wins.
    assert_eq!(model.predict(&encode(50.0, 5.0, "thick").unwrap()), "bamboo");
}

#[test]
fn test_min_samples_split_stops_induction() {
    let config = TreeConfig {
        min_samples_split: 17,
        ..TreeConfig::default()
    };
    let model = TreeClassifier::new(config)
        .train(&TrainingSet::builtin().unwrap())
        .unwrap();
    assert_eq!(model.n_nodes(), 1);
    assert!(model.tree().root().is_leaf());
}

#[test]
fn test_equal_splits_prefer_the_first_feature() {
    // Height <= 16 and leaf width <= 3.5 both separate the classes perfectly.
    let set = TrainingSet::new(vec![
        LabeledSample::new(10.0, 1.0, StemQuality::Thin, "a"),
        LabeledSample::new(12.0, 2.0, StemQuality::Thin, "a"),
        LabeledSample::new(20.0, 5.0, StemQuality::Thin, "b"),
        LabeledSample::new(22.0, 6.0, StemQuality::Thin, "b"),
    ]);
    let model = TreeClassifier::default().train(&set).unwrap();
    assert!(model.explain().starts_with("|--- height_cm <= 16.00\n"));
    assert_eq!(model.depth(), 1);
}

#[test]
fn test_zero_gain_splits_separate_xor_data() {
    // No single threshold lowers Gini impurity at the root.
    let set = TrainingSet::new(vec![
        LabeledSample::new(10.0, 1.0, StemQuality::Thin, "a"),
        LabeledSample::new(20.0, 2.0, StemQuality::Thin, "a"),
        LabeledSample::new(10.0, 2.0, StemQuality::Thin, "b"),
        LabeledSample::new(20.0, 1.0, StemQuality::Thin, "b"),
    ]);
    let config = TreeConfig {
        max_depth: None,
        ..TreeConfig::default()
    };
    let model = TreeClassifier::new(config).train(&set).unwrap();

    assert!(model.explain().starts_with("|--- height_cm <= 15.00\n"));
    assert_eq!(model.depth(), 2);
    assert_eq!(model.n_leaves(), 4);
    for sample in set.samples() {
        let features = sample.measurements().unwrap().encode();
        assert_eq!(model.predict(&features), sample.species);
    }
}

#[test]
fn test_single_class_training_yields_single_leaf() {
    let set = TrainingSet::new(vec![
        LabeledSample::new(30.0, 1.0, StemQuality::Thin, "lavender"),
        LabeledSample::new(40.0, 1.5, StemQuality::Thin, "lavender"),
    ]);
    let model = TreeClassifier::default().train(&set).unwrap();
    assert_eq!(model.n_nodes(), 1);
    assert!(model.tree().root().is_leaf());
    assert_eq!(model.explain(), "|--- class: lavender\n");
    assert_eq!(model.predict(&encode(300.0, 12.0, "thick").unwrap()), "lavender");
}

#[test]
fn test_identical_features_with_different_labels_form_a_leaf() {
    let set = TrainingSet::new(vec![
        LabeledSample::new(60.0, 3.0, StemQuality::Thin, "rose"),
        LabeledSample::new(60.0, 3.0, StemQuality::Thin, "lavender"),
        LabeledSample::new(60.0, 3.0, StemQuality::Thin, "rose"),
    ]);
    let model = TreeClassifier::default().train(&set).unwrap();
    assert_eq!(model.n_nodes(), 1);
    match model.tree().root() {
        TreeNode::Leaf { counts, .. } => assert_eq!(counts, &vec![1, 2]),
        other => panic!("expected a leaf, got {:?}", other),
    }
    assert_eq!(model.predict(&encode(60.0, 3.0, "thin").unwrap()), "rose");
}

#[test]
fn test_empty_training_set_fails() {
    let err = TreeClassifier::default()
        .train(&TrainingSet::default())
        .unwrap_err();
    assert_eq!(err, TrainError::EmptyTrainingSet);
}

#[test]
fn test_invalid_training_samples_fail() {
    let set = TrainingSet::new(vec![
        LabeledSample::new(30.0, 1.0, StemQuality::Thin, "lavender"),
        LabeledSample::new(-5.0, 1.0, StemQuality::Thin, "lavender"),
    ]);
    let err = TreeClassifier::default().train(&set).unwrap_err();
    assert!(matches!(err, TrainError::InvalidSample { index: 1, .. }));

    let set = TrainingSet::new(vec![LabeledSample::new(30.0, 1.0, StemQuality::Thin, " ")]);
    let err = TreeClassifier::default().train(&set).unwrap_err();
    assert_eq!(err, TrainError::EmptyLabel { index: 0 });
}

#[test]
fn test_gini_and_entropy_impurity() {
    assert_eq!(Criterion::Gini.impurity(&[4, 0]), 0.0);
    assert!((Criterion::Gini.impurity(&[2, 2]) - 0.5).abs() < 1e-12);
    assert!((Criterion::Gini.impurity(&[4, 4, 4, 4]) - 0.75).abs() < 1e-12);
    assert!((Criterion::Entropy.impurity(&[2, 2]) - 1.0).abs() < 1e-12);
    assert_eq!(Criterion::Entropy.impurity(&[0, 0]), 0.0);
}
