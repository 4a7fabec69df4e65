//! Document-level types.

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::page::{page_size, DEFAULT_MARGIN};
use super::table::cell_widths_by_ratio;
use super::{
    Block, CharacterSet, ColorTable, FontFamily, FontTable, Header, Keyword, Orientation, Outcome,
    PageFormat, PageSetup, PageSize, Paragraph, Rgb, Table,
};
use crate::error::Result;
use crate::render;

/// An RTF document under construction.
///
/// # Example
///
/// ```
/// use rtfdoc::model::{presets::color, Document};
///
/// let mut doc = Document::new();
/// doc.add_paragraph().add_text("Hello").set_color(color::RED);
///
/// let table = doc.add_table();
/// let widths = table.cell_widths_by_ratio(&[1.0, 2.0]);
/// let row = table.add_row();
/// for width in widths {
///     row.add_cell(width).add_paragraph().add_text("cell");
/// }
///
/// let rtf = doc.render();
/// assert!(rtf.starts_with("{\\rtf1"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    header: Header,
    page_format: PageFormat,
    orientation: Orientation,
    page_size: PageSize,
    margin_left: i32,
    margin_right: i32,
    margin_top: i32,
    margin_bottom: i32,
    #[serde(skip)]
    max_content_width: i32,
    blocks: Vec<Block>,
}

impl Document {
    /// Create an A4 portrait document with 720 twip margins and the default
    /// fonts and colors.
    pub fn new() -> Self {
        let mut doc = Self {
            header: Header::with_defaults(),
            page_format: PageFormat::A4,
            orientation: Orientation::Portrait,
            page_size: PageSize::default(),
            margin_left: DEFAULT_MARGIN,
            margin_right: DEFAULT_MARGIN,
            margin_top: DEFAULT_MARGIN,
            margin_bottom: DEFAULT_MARGIN,
            max_content_width: 0,
            blocks: Vec::new(),
        };
        doc.update_page_size();
        doc
    }

    /// Create a document from a page configuration.
    pub fn with_page_setup(setup: &PageSetup) -> Self {
        let mut doc = Self::new();
        doc.apply_page_setup(setup);
        doc
    }

    /// Load a document description from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut doc: Document = serde_json::from_str(json)?;
        doc.update_max_width();
        Ok(doc)
    }

    fn update_page_size(&mut self) {
        self.page_size = self.page_format.size(self.orientation);
        self.update_max_width();
    }

    fn update_max_width(&mut self) {
        self.max_content_width = self.page_size.width - self.margin_left - self.margin_right;
    }

    /// Apply format, orientation and margins in one step.
    pub fn apply_page_setup(&mut self, setup: &PageSetup) -> &mut Self {
        self.page_format = setup.format;
        self.orientation = setup.orientation;
        self.margin_left = setup.margin_left;
        self.margin_right = setup.margin_right;
        self.margin_top = setup.margin_top;
        self.margin_bottom = setup.margin_bottom;
        self.update_page_size();
        self
    }

    /// Set the paper format and recompute the page size.
    pub fn set_format(&mut self, format: PageFormat) -> &mut Self {
        self.page_format = format;
        self.update_page_size();
        self
    }

    /// Set the paper format from its keyword (`A4`, `Letter`, ...).
    ///
    /// An unknown keyword leaves format and page size unchanged.
    pub fn set_format_keyword(&mut self, keyword: &str) -> Outcome {
        self.set_page_keywords(keyword, self.orientation.keyword())
    }

    /// Set the orientation and recompute the page size.
    pub fn set_orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.orientation = orientation;
        self.update_page_size();
        self
    }

    /// Set the orientation from its keyword (`portrait`, `landscape`).
    ///
    /// An unknown keyword leaves orientation and page size unchanged.
    pub fn set_orientation_keyword(&mut self, keyword: &str) -> Outcome {
        self.set_page_keywords(self.page_format.keyword(), keyword)
    }

    /// Resolve both page keywords through [`page_size`] and apply them together.
    fn set_page_keywords(&mut self, format: &str, orientation: &str) -> Outcome {
        let size = match page_size(format, orientation) {
            Ok(size) => size,
            Err(err) => {
                log::debug!("ignoring page keywords: {}", err);
                return Outcome::Ignored;
            }
        };
        if let (Some(format), Some(orientation)) = (
            PageFormat::from_keyword(format),
            Orientation::from_keyword(orientation),
        ) {
            self.page_format = format;
            self.orientation = orientation;
        }
        self.page_size = size;
        self.update_max_width();
        Outcome::Applied
    }

    pub fn set_margin_left(&mut self, value: i32) -> &mut Self {
        self.margin_left = value;
        self.update_max_width();
        self
    }

    pub fn set_margin_right(&mut self, value: i32) -> &mut Self {
        self.margin_right = value;
        self.update_max_width();
        self
    }

    pub fn set_margin_top(&mut self, value: i32) -> &mut Self {
        self.margin_top = value;
        self
    }

    pub fn set_margin_bottom(&mut self, value: i32) -> &mut Self {
        self.margin_bottom = value;
        self
    }

    /// Set the header character set.
    pub fn set_character_set(&mut self, charset: CharacterSet) -> &mut Self {
        self.header.character_set = charset;
        self
    }

    /// Make the font registered under `code` the document default (`\deff`).
    pub fn set_default_font(&mut self, code: &str) -> Outcome {
        match self.header.font_table.index_of(code) {
            Some(index) => {
                self.header.default_font = index;
                Outcome::Applied
            }
            None => {
                log::debug!("ignoring unknown default font {:?}", code);
                Outcome::Ignored
            }
        }
    }

    /// Replace the font table with an empty one and return it.
    pub fn new_font_table(&mut self) -> &mut FontTable {
        self.header.font_table = FontTable::new();
        self.header.default_font = 0;
        &mut self.header.font_table
    }

    /// Replace the color table with an empty one and return it.
    pub fn new_color_table(&mut self) -> &mut ColorTable {
        self.header.color_table = ColorTable::new();
        &mut self.header.color_table
    }

    /// Append a font to the font table.
    pub fn add_font(
        &mut self,
        family: FontFamily,
        charset: u8,
        pitch: u8,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> &mut Self {
        self.header
            .font_table
            .add_font(family, charset, pitch, name, code);
        self
    }

    /// Append a font, giving its family as a keyword (`roman`, `swiss`, ...).
    pub fn add_font_keyword(
        &mut self,
        family: &str,
        charset: u8,
        pitch: u8,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> Outcome {
        match FontFamily::from_keyword(family) {
            Some(family) => {
                self.add_font(family, charset, pitch, name, code);
                Outcome::Applied
            }
            None => {
                log::debug!("ignoring font with unknown family {:?}", family);
                Outcome::Ignored
            }
        }
    }

    /// Append a color to the color table.
    pub fn add_color(&mut self, rgb: Rgb, name: impl Into<String>) -> &mut Self {
        self.header.color_table.add_color(rgb, name);
        self
    }

    /// Add a centered body paragraph.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.blocks
            .push(Block::Paragraph(Paragraph::body(self.max_content_width)));
        match self.blocks.last_mut() {
            Some(Block::Paragraph(paragraph)) => paragraph,
            _ => unreachable!("paragraph was just pushed"),
        }
    }

    /// Add a table sized to the current content width.
    pub fn add_table(&mut self) -> &mut Table {
        self.blocks
            .push(Block::Table(Table::new(self.max_content_width)));
        match self.blocks.last_mut() {
            Some(Block::Table(table)) => table,
            _ => unreachable!("table was just pushed"),
        }
    }

    /// Split `table_width` (capped at the content width) into cell widths
    /// proportional to `ratios`.
    pub fn cell_widths_by_ratio(&self, table_width: i32, ratios: &[f64]) -> Vec<i32> {
        cell_widths_by_ratio(table_width.min(self.max_content_width), ratios)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn page_format(&self) -> PageFormat {
        self.page_format
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Margins as (left, right, top, bottom) in twips.
    pub fn margins(&self) -> (i32, i32, i32, i32) {
        (
            self.margin_left,
            self.margin_right,
            self.margin_top,
            self.margin_bottom,
        )
    }

    /// Page width minus left and right margins.
    pub fn max_content_width(&self) -> i32 {
        self.max_content_width
    }

    /// Check if the document has no content blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Render the document to RTF.
    pub fn render(&self) -> String {
        render::to_rtf(self)
    }

    /// Render the document to RTF bytes.
    pub fn export(&self) -> Vec<u8> {
        self.render().into_bytes()
    }

    /// Render the document into a byte sink.
    pub fn export_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
