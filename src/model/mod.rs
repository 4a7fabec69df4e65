//! Document model for RTF generation.
//!
//! The model is a tree built top-down through factory methods
//! ([`Document::add_table`], [`Table::add_row`], [`TableRow::add_cell`], ...)
//! that return the new child for further configuration. Fonts and colors are
//! referenced by symbolic name and resolved against the document [`Header`]
//! at render time.

mod block;
mod document;
mod header;
mod keyword;
mod page;
mod paragraph;
pub mod presets;
mod resource;
mod table;

pub use block::Block;
pub use document::Document;
pub use header::{Color, ColorTable, Font, FontTable, Header, Rgb};
pub use keyword::{
    Alignment, BorderStyle, CharacterSet, FontFamily, Keyword, Orientation, Outcome, PageFormat,
    PictureFormat, TableAlignment, VerticalAlignment,
};
pub use page::{page_size, PageSetup, PageSize, DEFAULT_MARGIN};
pub use paragraph::{InlineContent, Paragraph, TextRun, TextStyle};
pub use resource::Picture;
pub use table::{
    cell_widths_by_ratio, Borders, Spacing, Table, TableCell, TableRow, VerticalMerge,
    DEFAULT_BORDER_WIDTH, DEFAULT_TABLE_MARGIN,
};
