use super::TrainedModel;
use crate::error::ModelError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Version written into every model artifact.
pub const ARTIFACT_VERSION: u32 = 1;

#[derive(Serialize)]
struct ArtifactRef<'a> {
    version: u32,
    model: &'a TrainedModel,
}

#[derive(Deserialize)]
struct ArtifactHeader {
    version: u32,
}

#[derive(Deserialize)]
struct Artifact {
    #[allow(dead_code)]
    version: u32,
    model: TrainedModel,
}

impl TrainedModel {
    /// Serializes the model into the bincode artifact format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ModelError> {
        let artifact = ArtifactRef {
            version: ARTIFACT_VERSION,
            model: self,
        };
        encode_to_vec(&artifact, standard())
            .map_err(|e| ModelError::Artifact(format!("Serialization failed: {}", e)))
    }

    /// Saves the model to a file using the bincode format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            ModelError::Artifact(format!("Could not create file '{}': {}", path.display(), e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            ModelError::Artifact(format!("Could not write to file '{}': {}", path.display(), e))
        })?;
        info!(path = %path.display(), bytes = bytes.len(), "Saved model artifact");
        Ok(())
    }

    /// Loads a model from an artifact file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let mut file = fs::File::open(path).map_err(|e| {
            ModelError::Artifact(format!("Could not open file '{}': {}", path.display(), e))
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ModelError::Artifact(format!("Could not read from file '{}': {}", path.display(), e))
        })?;
        let model = Self::from_bytes(&bytes)?;
        info!(path = %path.display(), classes = model.classes().len(), "Loaded model artifact");
        Ok(model)
    }

    /// Deserializes a model and checks its structure before handing it out.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModelError> {
        // The version leads the encoding, so it can be read on its own first.
        let (header, _): (ArtifactHeader, usize) = decode_from_slice(bytes, standard())
            .map_err(|e| ModelError::Artifact(format!("Deserialization failed: {}", e)))?;
        if header.version != ARTIFACT_VERSION {
            return Err(ModelError::UnsupportedVersion {
                found: header.version,
                expected: ARTIFACT_VERSION,
            });
        }

        let (artifact, _): (Artifact, usize) = decode_from_slice(bytes, standard())
            .map_err(|e| ModelError::Artifact(format!("Deserialization failed: {}", e)))?;
        artifact
            .model
            .validate()
            .map_err(|e| ModelError::Artifact(format!("Invalid model: {}", e)))?;
        Ok(artifact.model)
    }
}
