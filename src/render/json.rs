//! JSON dump of the document model.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
///
/// The output can be loaded back with [`Document::from_json`].
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Serialization(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::presets::color;

    #[test]
    fn test_to_json_pretty() {
        let mut doc = Document::new();
        doc.add_paragraph().add_text("Hello").set_color(color::RED);

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"Hello\""));
        assert!(json.contains("\"red\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let mut doc = Document::new();
        doc.add_table().add_row().add_cell(1000);

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
    }

    #[test]
    fn test_round_trip_renders_identically() {
        let mut doc = Document::new();
        doc.set_margin_left(1000);
        doc.add_paragraph().add_text("Grüße");
        let table = doc.add_table();
        let widths = table.cell_widths_by_ratio(&[1.0, 3.0]);
        let row = table.add_row();
        for width in widths {
            row.add_cell(width);
        }

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        let restored = Document::from_json(&json).unwrap();
        assert_eq!(restored, doc);
        assert_eq!(restored.render(), doc.render());
    }
}
