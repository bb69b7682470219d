use super::RenderOptions;
use crate::identify::Identification;
use crate::knowledge::{KnowledgeBase, ResolvedImage, SpeciesRecord};

/// Formats identification results and the species catalog as plain text.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Renders a full identification report.
    pub fn format_identification(result: &Identification<'_>, options: &RenderOptions) -> String {
        let species = result.species;
        let mut out = String::new();

        let m = &result.measurements;
        out.push_str(&format!(
            "Selected: height = {:.1} cm, leaf width = {:.1} cm, stem = {}\n\n",
            m.height_cm, m.leaf_width_cm, m.stem_quality
        ));

        if result.known {
            out.push_str(&format!("Predicted species: {}\n", species.display_name()));
        } else {
            out.push_str(&format!(
                "Predicted species: {} (no knowledge base entry)\n",
                result.label
            ));
        }
        if let Some(line) = Self::classification_line(species) {
            out.push_str(&line);
            out.push('\n');
        }

        out.push_str(&Self::format_image(species, options));

        out.push_str("\n--- Species description ---\n");
        out.push_str(species.description.trim());
        out.push('\n');

        out.push_str("\n--- Other plants in this group ---\n");
        if species.related_species.is_empty() {
            out.push_str("(none listed)\n");
        } else {
            out.push_str(&species.related_species.join(", "));
            out.push('\n');
        }

        if options.show_rules {
            out.push_str("\n--- Decision tree rules ---\n");
            out.push_str(result.rules);
        }
        out
    }

    /// Lists every species in knowledge-base order.
    pub fn format_catalog(knowledge: &KnowledgeBase) -> String {
        let mut out = String::from("--- Plant species included ---\n");
        for record in knowledge.records() {
            out.push_str(&format!("* {}\n", record.display_name()));
            if let Some(line) = Self::classification_line(record) {
                out.push_str(&format!("  {}\n", line));
            }
        }
        out
    }

    fn classification_line(record: &SpeciesRecord) -> Option<String> {
        match (record.family.is_empty(), record.group.is_empty()) {
            (true, true) => None,
            (false, true) => Some(format!("Family: {}", record.family)),
            (true, false) => Some(format!("Group: {}", record.group)),
            (false, false) => Some(format!(
                "Family: {} · Group: {}",
                record.family, record.group
            )),
        }
    }

    fn format_image(record: &SpeciesRecord, options: &RenderOptions) -> String {
        let Some(image) = &record.image else {
            return "Image: none\n".to_string();
        };
        match image.resolve(&options.image_root) {
            ResolvedImage::File(path) => format!("Image: {}\n", path.display()),
            ResolvedImage::Url(url) => format!("Image: {}\n", url),
            ResolvedImage::Missing(path) => format!(
                "Image not found at '{}'. Put an image file in the `images/` folder.\n",
                path.display()
            ),
        }
    }
}
