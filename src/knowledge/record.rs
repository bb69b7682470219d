use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Label of the record returned for species missing from the knowledge base.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Where a species image lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageRef {
    /// A path, relative to the image root unless absolute.
    Local(PathBuf),
    /// An `http://` or `https://` URL.
    Remote(String),
}

/// An image reference after checking it against the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedImage {
    File(PathBuf),
    Url(String),
    Missing(PathBuf),
}

impl ImageRef {
    pub fn parse(reference: &str) -> Self {
        let trimmed = reference.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            ImageRef::Remote(trimmed.to_string())
        } else {
            ImageRef::Local(PathBuf::from(trimmed))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ImageRef::Remote(_))
    }

    /// Resolves local paths against `root` and checks that the file exists.
    /// Remote URLs are passed through untouched.
    pub fn resolve(&self, root: &Path) -> ResolvedImage {
        match self {
            ImageRef::Remote(url) => ResolvedImage::Url(url.clone()),
            ImageRef::Local(path) => {
                let full = root.join(path);
                if full.is_file() {
                    ResolvedImage::File(full)
                } else {
                    ResolvedImage::Missing(full)
                }
            }
        }
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        ImageRef::parse(&value)
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        match value {
            ImageRef::Local(path) => path.to_string_lossy().into_owned(),
            ImageRef::Remote(url) => url,
        }
    }
}

/// Display data for one species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    /// The classifier label this record belongs to.
    pub label: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub group: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default, alias = "other_plants")]
    pub related_species: Vec<String>,
}

impl SpeciesRecord {
    /// The record used when a label has no entry.
    pub fn placeholder() -> Self {
        Self {
            label: UNKNOWN_LABEL.to_string(),
            name: "Unknown species".to_string(),
            family: String::new(),
            group: String::new(),
            description: "no data available".to_string(),
            image: None,
            related_species: Vec::new(),
        }
    }

    /// The display name, falling back to the label when no name is set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.label
        } else {
            &self.name
        }
    }
}
