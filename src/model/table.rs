//! Table types and layout arithmetic.
//!
//! Border style, color and width cascade from table to rows to cells. A
//! cascading setter updates the element itself and then overwrites the value
//! on every child that already exists. Children created later copy their
//! parent's border state at creation time.

use serde::{Deserialize, Serialize};

use super::keyword::apply_keyword;
use super::presets::color;
use super::{BorderStyle, Outcome, Paragraph, TableAlignment, VerticalAlignment};

/// Default table margin on every side, in twips.
pub const DEFAULT_TABLE_MARGIN: i32 = 100;

/// Default border width of a new table, in twips.
pub const DEFAULT_BORDER_WIDTH: i32 = 15;

/// Split `target` into widths proportional to `ratios`.
///
/// Each width is `ratio * (target / sum)`, truncated toward zero. The widths
/// are not adjusted to add up to `target`. A non-positive or non-finite ratio
/// sum yields zeros.
///
/// # Example
///
/// ```
/// use rtfdoc::model::cell_widths_by_ratio;
///
/// assert_eq!(cell_widths_by_ratio(1000, &[1.0, 2.0, 1.0]), vec![250, 500, 250]);
/// ```
pub fn cell_widths_by_ratio(target: i32, ratios: &[f64]) -> Vec<i32> {
    let sum: f64 = ratios.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return vec![0; ratios.len()];
    }
    let unit = f64::from(target) / sum;
    ratios.iter().map(|ratio| (ratio * unit) as i32).collect()
}

/// Lengths for the four sides of a box, in twips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Spacing {
    /// Same value on every side.
    pub const fn uniform(value: i32) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }
}

/// Border state shared by tables, rows and cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borders {
    /// Left border present
    pub left: bool,

    /// Right border present
    pub right: bool,

    /// Top border present
    pub top: bool,

    /// Bottom border present
    pub bottom: bool,

    /// Line style
    pub style: BorderStyle,

    /// Color name from the color table
    pub color: String,

    /// Line width in twips
    pub width: i32,
}

impl Borders {
    /// All sides present, single line, black, 15 twips.
    pub fn table_default() -> Self {
        Self {
            left: true,
            right: true,
            top: true,
            bottom: true,
            style: BorderStyle::SingleThickness,
            color: color::BLACK.to_string(),
            width: DEFAULT_BORDER_WIDTH,
        }
    }

    /// Side keywords of the present borders, in `l`, `r`, `t`, `b` order.
    pub(crate) fn present_sides(&self) -> impl Iterator<Item = &'static str> + '_ {
        [
            (self.left, "l"),
            (self.right, "r"),
            (self.top, "t"),
            (self.bottom, "b"),
        ]
        .into_iter()
        .filter_map(|(present, side)| present.then_some(side))
    }

    fn set_all(&mut self, present: bool) {
        self.left = present;
        self.right = present;
        self.top = present;
        self.bottom = present;
    }
}

/// A table in the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<TableRow>,
    align: TableAlignment,
    margins: Spacing,
    padding: Spacing,
    borders: Borders,
    default_font_size: i32,
    width: i32,
    doc_width: i32,
    max_width: i32,
}

impl Table {
    /// Create a table for a document whose content width is `doc_width`.
    pub(crate) fn new(doc_width: i32) -> Self {
        let mut table = Self {
            rows: Vec::new(),
            align: TableAlignment::Center,
            margins: Spacing::uniform(DEFAULT_TABLE_MARGIN),
            padding: Spacing::default(),
            borders: Borders::table_default(),
            default_font_size: 0,
            width: 0,
            doc_width,
            max_width: 0,
        };
        table.update_max_width();
        table
    }

    /// Document width minus the table's current horizontal margins.
    fn available_width(&self) -> i32 {
        self.doc_width - self.margins.left - self.margins.right
    }

    fn update_max_width(&mut self) {
        self.max_width = self.available_width();
    }

    /// Add a row. The row copies the table's current border state and width.
    pub fn add_row(&mut self) -> &mut TableRow {
        self.update_max_width();
        self.rows.push(TableRow::new(self.borders.clone(), self.max_width));
        let index = self.rows.len() - 1;
        &mut self.rows[index]
    }

    /// Rows in order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Mutable access to a row by 0-based index.
    pub fn row_mut(&mut self, index: usize) -> Option<&mut TableRow> {
        self.rows.get_mut(index)
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn set_margin_left(&mut self, value: i32) -> &mut Self {
        self.margins.left = value;
        self
    }

    pub fn set_margin_right(&mut self, value: i32) -> &mut Self {
        self.margins.right = value;
        self
    }

    pub fn set_margin_top(&mut self, value: i32) -> &mut Self {
        self.margins.top = value;
        self
    }

    pub fn set_margin_bottom(&mut self, value: i32) -> &mut Self {
        self.margins.bottom = value;
        self
    }

    pub fn set_padding_left(&mut self, value: i32) -> &mut Self {
        self.padding.left = value;
        self
    }

    pub fn set_padding_right(&mut self, value: i32) -> &mut Self {
        self.padding.right = value;
        self
    }

    pub fn set_padding_top(&mut self, value: i32) -> &mut Self {
        self.padding.top = value;
        self
    }

    pub fn set_padding_bottom(&mut self, value: i32) -> &mut Self {
        self.padding.bottom = value;
        self
    }

    /// Set all four row paddings (`\trpadd*`).
    pub fn set_padding(&mut self, value: i32) -> &mut Self {
        self.padding = Spacing::uniform(value);
        self
    }

    /// Set horizontal alignment of the rows on the page.
    pub fn set_align(&mut self, align: TableAlignment) -> &mut Self {
        self.align = align;
        self
    }

    /// Set alignment from its keyword (`c`, `l`, `r`).
    pub fn set_align_keyword(&mut self, keyword: &str) -> Outcome {
        apply_keyword(keyword, |align: TableAlignment| self.align = align)
    }

    pub fn set_border_left(&mut self, present: bool) -> &mut Self {
        self.borders.left = present;
        self
    }

    pub fn set_border_right(&mut self, present: bool) -> &mut Self {
        self.borders.right = present;
        self
    }

    pub fn set_border_top(&mut self, present: bool) -> &mut Self {
        self.borders.top = present;
        self
    }

    pub fn set_border_bottom(&mut self, present: bool) -> &mut Self {
        self.borders.bottom = present;
        self
    }

    /// Set presence of all four borders.
    pub fn set_border(&mut self, present: bool) -> &mut Self {
        self.borders.set_all(present);
        self
    }

    /// Set border style on the table and every existing row and cell.
    pub fn set_border_style(&mut self, style: BorderStyle) -> &mut Self {
        self.borders.style = style;
        for row in &mut self.rows {
            row.set_border_style(style);
        }
        self
    }

    /// Keyword form of [`Table::set_border_style`].
    pub fn set_border_style_keyword(&mut self, keyword: &str) -> Outcome {
        apply_keyword(keyword, |style: BorderStyle| {
            self.set_border_style(style);
        })
    }

    /// Set border color on the table and every existing row and cell.
    pub fn set_border_color(&mut self, color: impl Into<String>) -> &mut Self {
        let color = color.into();
        for row in &mut self.rows {
            row.set_border_color(color.as_str());
        }
        self.borders.color = color;
        self
    }

    /// Set border width on the table and every existing row and cell.
    pub fn set_border_width(&mut self, value: i32) -> &mut Self {
        self.borders.width = value;
        for row in &mut self.rows {
            row.set_border_width(value);
        }
        self
    }

    /// Set the font size in points applied to each row (`\fs`).
    pub fn set_default_font_size(&mut self, points: i32) -> &mut Self {
        self.default_font_size = points;
        self
    }

    /// Set the explicit table width used by [`Table::cell_widths_by_ratio`].
    pub fn set_width(&mut self, width: i32) -> &mut Self {
        self.width = width;
        self
    }

    /// Split the table width into cell widths proportional to `ratios`.
    ///
    /// Uses the explicit width when set, else the width left inside the
    /// table's current margins.
    pub fn cell_widths_by_ratio(&self, ratios: &[f64]) -> Vec<i32> {
        let target = if self.width > 0 {
            self.width
        } else {
            self.available_width()
        };
        cell_widths_by_ratio(target, ratios)
    }

    pub fn align(&self) -> TableAlignment {
        self.align
    }

    pub fn margins(&self) -> Spacing {
        self.margins
    }

    pub fn padding(&self) -> Spacing {
        self.padding
    }

    pub fn borders(&self) -> &Borders {
        &self.borders
    }

    /// Font size in points, 0 when unset.
    pub fn default_font_size(&self) -> i32 {
        self.default_font_size
    }

    /// Explicit width, 0 when unset.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Document content width captured when the table was created.
    pub fn doc_width(&self) -> i32 {
        self.doc_width
    }

    /// Available width as of the last row creation.
    pub fn max_width(&self) -> i32 {
        self.max_width
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    cells: Vec<TableCell>,
    borders: Borders,
    max_width: i32,
}

impl TableRow {
    fn new(borders: Borders, max_width: i32) -> Self {
        Self {
            cells: Vec::new(),
            borders,
            max_width,
        }
    }

    /// Add a cell of the given width in twips. The cell copies the row's
    /// current border state.
    pub fn add_cell(&mut self, width: i32) -> &mut TableCell {
        self.cells.push(TableCell::new(width, self.borders.clone()));
        let index = self.cells.len() - 1;
        &mut self.cells[index]
    }

    /// Cells in order.
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    /// Mutable access to a cell by 0-based index.
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut TableCell> {
        self.cells.get_mut(index)
    }

    pub fn borders(&self) -> &Borders {
        &self.borders
    }

    /// Table width captured when the row was created.
    pub fn max_width(&self) -> i32 {
        self.max_width
    }

    /// Sum of the cell widths.
    pub fn total_width(&self) -> i32 {
        self.cells.iter().map(TableCell::width).sum()
    }

    pub fn set_border_left(&mut self, present: bool) -> &mut Self {
        self.borders.left = present;
        self
    }

    pub fn set_border_right(&mut self, present: bool) -> &mut Self {
        self.borders.right = present;
        self
    }

    pub fn set_border_top(&mut self, present: bool) -> &mut Self {
        self.borders.top = present;
        self
    }

    pub fn set_border_bottom(&mut self, present: bool) -> &mut Self {
        self.borders.bottom = present;
        self
    }

    /// Set presence of all four borders.
    pub fn set_border(&mut self, present: bool) -> &mut Self {
        self.borders.set_all(present);
        self
    }

    /// Set border style on the row and every existing cell.
    pub fn set_border_style(&mut self, style: BorderStyle) -> &mut Self {
        self.borders.style = style;
        for cell in &mut self.cells {
            cell.set_border_style(style);
        }
        self
    }

    /// Keyword form of [`TableRow::set_border_style`].
    pub fn set_border_style_keyword(&mut self, keyword: &str) -> Outcome {
        apply_keyword(keyword, |style: BorderStyle| {
            self.set_border_style(style);
        })
    }

    /// Set border color on the row and every existing cell.
    pub fn set_border_color(&mut self, color: impl Into<String>) -> &mut Self {
        let color = color.into();
        for cell in &mut self.cells {
            cell.set_border_color(color.as_str());
        }
        self.borders.color = color;
        self
    }

    /// Set border width on the row and every existing cell.
    pub fn set_border_width(&mut self, value: i32) -> &mut Self {
        self.borders.width = value;
        for cell in &mut self.cells {
            cell.set_border_width(value);
        }
        self
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// Role of a cell in a vertical merge group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalMerge {
    /// Not merged
    #[default]
    None,
    /// First cell of a merge group (`\clvmgf`)
    First,
    /// Cell merged into the one above (`\clvmrg`)
    Continuation,
}

impl VerticalMerge {
    /// Suffix of the `\clvm` control word, if any.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            VerticalMerge::None => None,
            VerticalMerge::First => Some("gf"),
            VerticalMerge::Continuation => Some("rg"),
        }
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    content: Vec<Paragraph>,
    width: i32,
    margins: Spacing,
    padding: Spacing,
    borders: Borders,
    vertical_alignment: VerticalAlignment,
    vertical_merge: VerticalMerge,
    background_color: Option<String>,
}

impl TableCell {
    fn new(width: i32, borders: Borders) -> Self {
        Self {
            content: Vec::new(),
            width,
            margins: Spacing::default(),
            padding: Spacing::default(),
            borders,
            vertical_alignment: VerticalAlignment::Top,
            vertical_merge: VerticalMerge::None,
            background_color: None,
        }
    }

    /// Add a left-aligned in-table paragraph.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.content.push(Paragraph::in_cell(self.content_width()));
        let index = self.content.len() - 1;
        &mut self.content[index]
    }

    /// Paragraphs in order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.content
    }

    /// Cell width in twips.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Width left for content: cell width minus horizontal margins.
    pub fn content_width(&self) -> i32 {
        self.width - self.margins.left - self.margins.right
    }

    pub fn margins(&self) -> Spacing {
        self.margins
    }

    pub fn padding(&self) -> Spacing {
        self.padding
    }

    pub fn borders(&self) -> &Borders {
        &self.borders
    }

    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    pub fn vertical_merge(&self) -> VerticalMerge {
        self.vertical_merge
    }

    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    /// Set the cell width in twips.
    pub fn set_width(&mut self, width: i32) -> &mut Self {
        self.width = width;
        self
    }

    pub fn set_margin_left(&mut self, value: i32) -> &mut Self {
        self.margins.left = value;
        self
    }

    pub fn set_margin_right(&mut self, value: i32) -> &mut Self {
        self.margins.right = value;
        self
    }

    pub fn set_margin_top(&mut self, value: i32) -> &mut Self {
        self.margins.top = value;
        self
    }

    pub fn set_margin_bottom(&mut self, value: i32) -> &mut Self {
        self.margins.bottom = value;
        self
    }

    pub fn set_padding_left(&mut self, value: i32) -> &mut Self {
        self.padding.left = value;
        self
    }

    pub fn set_padding_right(&mut self, value: i32) -> &mut Self {
        self.padding.right = value;
        self
    }

    pub fn set_padding_top(&mut self, value: i32) -> &mut Self {
        self.padding.top = value;
        self
    }

    pub fn set_padding_bottom(&mut self, value: i32) -> &mut Self {
        self.padding.bottom = value;
        self
    }

    /// Set all four cell paddings (`\clpad*`).
    pub fn set_padding(&mut self, value: i32) -> &mut Self {
        self.padding = Spacing::uniform(value);
        self
    }

    pub fn set_border_left(&mut self, present: bool) -> &mut Self {
        self.borders.left = present;
        self
    }

    pub fn set_border_right(&mut self, present: bool) -> &mut Self {
        self.borders.right = present;
        self
    }

    pub fn set_border_top(&mut self, present: bool) -> &mut Self {
        self.borders.top = present;
        self
    }

    pub fn set_border_bottom(&mut self, present: bool) -> &mut Self {
        self.borders.bottom = present;
        self
    }

    /// Set presence of all four borders.
    pub fn set_border(&mut self, present: bool) -> &mut Self {
        self.borders.set_all(present);
        self
    }

    pub fn set_border_style(&mut self, style: BorderStyle) -> &mut Self {
        self.borders.style = style;
        self
    }

    /// Keyword form of [`TableCell::set_border_style`].
    pub fn set_border_style_keyword(&mut self, keyword: &str) -> Outcome {
        apply_keyword(keyword, |style: BorderStyle| self.borders.style = style)
    }

    pub fn set_border_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.borders.color = color.into();
        self
    }

    pub fn set_border_width(&mut self, value: i32) -> &mut Self {
        self.borders.width = value;
        self
    }

    /// Set vertical alignment of the cell content.
    pub fn set_valign(&mut self, align: VerticalAlignment) -> &mut Self {
        self.vertical_alignment = align;
        self
    }

    /// Set vertical alignment from its keyword (`t`, `c`, `b`).
    pub fn set_valign_keyword(&mut self, keyword: &str) -> Outcome {
        apply_keyword(keyword, |align: VerticalAlignment| self.vertical_alignment = align)
    }

    /// Set the background color by its color table name.
    pub fn set_background_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.background_color = Some(color.into());
        self
    }

    /// Mark this cell as the first of a vertical merge group.
    pub fn set_vertical_merged_first(&mut self) -> &mut Self {
        self.vertical_merge = VerticalMerge::First;
        self
    }

    /// Mark this cell as merged into the cell above.
    pub fn set_vertical_merged_next(&mut self) -> &mut Self {
        self.vertical_merge = VerticalMerge::Continuation;
        self
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
