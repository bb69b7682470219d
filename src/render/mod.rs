//! Text presentation of identification results.
use std::path::PathBuf;

mod report;

pub use report::ReportFormatter;

/// Options controlling what a report shows.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Append the decision rule dump.
    pub show_rules: bool,
    /// Directory that local image paths are resolved against.
    pub image_root: PathBuf,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_rules: false,
            image_root: PathBuf::from("."),
        }
    }
}
