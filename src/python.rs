use crate::classifier::TreeClassifier;
use crate::data::TrainingSet;
use crate::identify::{Identification, Identifier};
use crate::knowledge::KnowledgeBase;
use crate::tree::TreeConfig;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

impl<'py> IntoPyObject<'py> for Identification<'_> {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        let species = self.species;

        dict.set_item("label", self.label)?;
        dict.set_item("known", self.known)?;
        dict.set_item("name", species.display_name())?;
        dict.set_item("family", &species.family)?;
        dict.set_item("group", &species.group)?;
        dict.set_item("description", &species.description)?;
        match &species.image {
            Some(image) => dict.set_item("image", String::from(image.clone()))?,
            None => dict.set_item("image", py.None())?,
        }
        dict.set_item("related_species", &species.related_species)?;

        Ok(dict)
    }
}

/// Identifies plant species from height, leaf width and stem quality.
///
/// The classifier is trained once when the instance is created; `identify`
/// can then be called any number of times.
#[pyclass(name = "PlantIdentifier")]
struct PlantIdentifierPy {
    identifier: Identifier,
}

#[pymethods]
impl PlantIdentifierPy {
    /// Trains the classifier and loads the species knowledge base.
    ///
    /// Args:
    ///     dataset_json (str | None): A training dataset in JSON form. Uses the
    ///         built-in toy dataset when omitted.
    ///     species_json (str | None): A JSON array of species records. Uses the
    ///         built-in knowledge base when omitted.
    ///     max_depth (int | None): Maximum tree depth. Defaults to 4.
    ///
    /// Raises:
    ///     ValueError: If either JSON document is invalid or the dataset is empty.
    #[new]
    #[pyo3(signature = (dataset_json=None, species_json=None, max_depth=4))]
    fn new(
        dataset_json: Option<&str>,
        species_json: Option<&str>,
        max_depth: Option<usize>,
    ) -> PyResult<Self> {
        let set = match dataset_json {
            Some(json) => TrainingSet::from_json(json),
            None => TrainingSet::builtin(),
        }
        .map_err(value_error)?;
        let knowledge = match species_json {
            Some(json) => KnowledgeBase::from_json(json),
            None => KnowledgeBase::builtin(),
        }
        .map_err(value_error)?;

        let config = TreeConfig {
            max_depth,
            ..TreeConfig::default()
        };
        let model = TreeClassifier::new(config)
            .train(&set)
            .map_err(value_error)?;
        let identifier = Identifier::builder(knowledge)
            .with_model(model)
            .build()
            .map_err(value_error)?;
        Ok(PlantIdentifierPy { identifier })
    }

    /// Predicts the species for one plant.
    ///
    /// Args:
    ///     height_cm (float): Plant height in centimetres, > 0.
    ///     leaf_width_cm (float): Leaf width in centimetres, > 0.
    ///     stem_quality (str): One of "thin", "medium" or "thick".
    ///
    /// Returns:
    ///     dict: label, known, name, family, group, description, image and
    ///         related_species of the predicted species.
    ///
    /// Raises:
    ///     ValueError: If a measurement is not positive or the stem quality is unknown.
    fn identify<'py>(
        &self,
        py: Python<'py>,
        height_cm: f64,
        leaf_width_cm: f64,
        stem_quality: &str,
    ) -> PyResult<Bound<'py, PyDict>> {
        let result = self
            .identifier
            .identify_raw(height_cm, leaf_width_cm, stem_quality)
            .map_err(value_error)?;
        result.into_pyobject(py)
    }

    /// Returns the decision rules of the trained tree as text.
    fn rules(&self) -> String {
        self.identifier.rules().to_string()
    }

    /// Returns the labels of every species in the knowledge base.
    fn species(&self) -> Vec<String> {
        self.identifier
            .knowledge()
            .labels()
            .map(str::to_string)
            .collect()
    }
}

/// Plant species identification with a decision-tree classifier.
#[pymodule]
fn plantid(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PlantIdentifierPy>()?;
    Ok(())
}
