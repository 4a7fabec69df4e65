//! # rtfdoc
//!
//! RTF document composition library for Rust.
//!
//! Build a document tree of paragraphs and tables in memory, register fonts
//! and colors in the header, and render the whole thing to a single RTF byte
//! stream.
//!
//! ## Quick Start
//!
//! ```
//! use rtfdoc::{presets::color, Document, Orientation};
//!
//! let mut doc = Document::new();
//! doc.set_orientation(Orientation::Landscape);
//!
//! doc.add_paragraph()
//!     .add_text("Quarterly report")
//!     .set_bold(true)
//!     .set_font_size(16);
//!
//! let table = doc.add_table();
//! table.set_border_color(color::GRAY);
//! let widths = table.cell_widths_by_ratio(&[2.0, 1.0]);
//! let row = table.add_row();
//! for (width, text) in widths.into_iter().zip(["Region", "Total"]) {
//!     row.add_cell(width).add_paragraph().add_text(text);
//! }
//!
//! let rtf = doc.render();
//! assert!(rtf.starts_with("{\\rtf1\\ansi\\deff0"));
//! assert!(rtf.ends_with("\n}"));
//! ```
//!
//! ## Features
//!
//! - **Font and color registries**: referenced by name, resolved at render time
//! - **Tables**: cascading border state from table to rows to cells, vertical
//!   merges, ratio-based column widths
//! - **Unicode text**: every non-ASCII code point is escaped, including
//!   surrogate pairs for supplementary planes
//! - **Pictures**: PNG and JPEG blips embedded as hex
//! - **JSON**: the model serializes with serde and can be re-rendered later

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    cell_widths_by_ratio, page_size, presets, Alignment, Block, BorderStyle, CharacterSet,
    Document, FontFamily, InlineContent, Keyword, Orientation, Outcome, PageFormat, PageSetup,
    PageSize, Paragraph, Picture, PictureFormat, Rgb, Table, TableAlignment, TableCell, TableRow,
    TextRun, TextStyle, VerticalAlignment,
};
pub use render::{escape_unicode, JsonFormat, RenderResult, RenderStats};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Render a document and write it to a file.
///
/// # Example
///
/// ```no_run
/// use rtfdoc::{save, Document};
///
/// let mut doc = Document::new();
/// doc.add_paragraph().add_text("Hello");
/// save(&doc, "hello.rtf").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    let path = path.as_ref();
    log::debug!("writing RTF to {}", path.display());
    let file = File::create(path)?;
    doc.export_to(BufWriter::new(file))
}

/// Load a document description from a JSON file.
///
/// # Example
///
/// ```no_run
/// use rtfdoc::load_json;
///
/// let doc = load_json("report.json").unwrap();
/// std::fs::write("report.rtf", doc.export()).unwrap();
/// ```
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json = std::fs::read_to_string(path)?;
    Document::from_json(&json)
}

/// Write a document description to a JSON file.
pub fn save_json<P: AsRef<Path>>(doc: &Document, path: P, format: JsonFormat) -> Result<()> {
    let json = render::to_json(doc, format)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_writes_rendered_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.rtf");

        let mut doc = Document::new();
        doc.add_paragraph().add_text("saved");
        save(&doc, &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), doc.export());
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        let mut doc = Document::new();
        doc.set_format(PageFormat::Letter);
        doc.add_table().add_row().add_cell(2000).add_paragraph().add_text("x");
        save_json(&doc, &path, JsonFormat::Pretty).unwrap();

        let loaded = load_json(&path).unwrap();
        assert_eq!(loaded.render(), doc.render());
        assert_eq!(loaded.max_content_width(), 12240 - 1440);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
