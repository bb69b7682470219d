//! Common test utilities for building datasets, models and knowledge bases.
use plantid::prelude::*;

/// The labels of the built-in toy dataset, sorted.
#[allow(dead_code)]
pub const BUILTIN_LABELS: [&str; 4] = ["bamboo", "lavender", "rose", "sunflower"];

/// Trains the default model on the built-in dataset.
#[allow(dead_code)]
pub fn builtin_model() -> TrainedModel {
    let set = TrainingSet::builtin().expect("built-in dataset should parse");
    TreeClassifier::default()
        .train(&set)
        .expect("built-in dataset should train")
}

/// An identifier over the built-in dataset and species data.
#[allow(dead_code)]
pub fn builtin_identifier() -> Identifier {
    Identifier::builder(KnowledgeBase::builtin().expect("built-in species should parse"))
        .with_model(builtin_model())
        .build()
        .expect("identifier should build")
}

/// A two-species dataset separable on leaf width alone.
///
/// Logic: `leaf_width_cm <= 3.0` -> narrow, otherwise broad.
#[allow(dead_code)]
pub fn create_width_split_set() -> TrainingSet {
    TrainingSet::new(vec![
        LabeledSample::new(50.0, 1.0, StemQuality::Thin, "narrow"),
        LabeledSample::new(60.0, 2.0, StemQuality::Thin, "narrow"),
        LabeledSample::new(55.0, 4.0, StemQuality::Thin, "broad"),
        LabeledSample::new(65.0, 5.0, StemQuality::Thin, "broad"),
    ])
}

/// A minimal species record for tests.
#[allow(dead_code)]
pub fn create_record(label: &str) -> SpeciesRecord {
    SpeciesRecord {
        label: label.to_string(),
        name: format!("{} (Testus {})", label, label),
        family: "Testaceae".to_string(),
        group: "Test herb".to_string(),
        description: format!("A test plant called {}.", label),
        image: Some(ImageRef::parse(&format!("images/{}.jpg", label))),
        related_species: vec!["Other Test Plant".to_string()],
    }
}
