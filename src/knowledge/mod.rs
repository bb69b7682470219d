//! The static species knowledge base.
//!
//! Records are loaded once and never mutated. Lookups for labels without a
//! record degrade to a placeholder instead of failing.

use crate::error::KnowledgeError;
use ahash::AHashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

mod record;

pub use record::*;

const BUILTIN_SPECIES: &str = include_str!("../../data/species.json");

/// Immutable mapping from species label to display record.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    records: Vec<SpeciesRecord>,
    index: AHashMap<String, usize>,
    placeholder: SpeciesRecord,
}

impl KnowledgeBase {
    /// Builds a knowledge base, keeping the records in the given order.
    pub fn from_records(records: Vec<SpeciesRecord>) -> Result<Self, KnowledgeError> {
        let mut index = AHashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.label.clone(), i).is_some() {
                return Err(KnowledgeError::DuplicateLabel(record.label.clone()));
            }
        }
        Ok(Self {
            records,
            index,
            placeholder: SpeciesRecord::placeholder(),
        })
    }

    /// The species data shipped with the crate.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Self::from_json(BUILTIN_SPECIES)
    }

    /// Parses a JSON array of species records.
    pub fn from_json(json: &str) -> Result<Self, KnowledgeError> {
        let records: Vec<SpeciesRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn get(&self, label: &str) -> Option<&SpeciesRecord> {
        self.index.get(label).map(|&i| &self.records[i])
    }

    pub fn try_lookup(&self, label: &str) -> Result<&SpeciesRecord, KnowledgeError> {
        self.get(label)
            .ok_or_else(|| KnowledgeError::UnknownSpecies(label.to_string()))
    }

    /// Returns the record for `label`, or the placeholder record if there is none.
    pub fn lookup(&self, label: &str) -> &SpeciesRecord {
        match self.try_lookup(label) {
            Ok(record) => record,
            Err(e) => {
                warn!("{}; showing placeholder", e);
                &self.placeholder
            }
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Labels in knowledge-base order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.label.as_str())
    }

    pub fn records(&self) -> &[SpeciesRecord] {
        &self.records
    }

    pub fn placeholder(&self) -> &SpeciesRecord {
        &self.placeholder
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Labels from `labels` that have no record.
    pub fn missing_labels<'a>(&self, labels: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        labels
            .into_iter()
            .filter(|label| !self.contains(label))
            .map(str::to_string)
            .collect()
    }
}
