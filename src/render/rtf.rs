//! RTF rendering for documents.

use crate::model::{
    Block, Borders, Document, Header, InlineContent, Keyword, Orientation, Paragraph, Picture,
    Table, TableCell, TableRow, TextRun,
};

use super::encode::write_escaped;
use super::{RenderResult, RenderStats};

/// Render a document to an RTF string.
pub fn to_rtf(doc: &Document) -> String {
    RtfRenderer::new(doc.header()).render(doc)
}

/// Render a document to RTF with statistics.
pub fn to_rtf_with_stats(doc: &Document) -> RenderResult {
    RtfRenderer::new(doc.header()).render_with_stats(doc)
}

/// RTF renderer.
///
/// Holds a shared borrow of the header for the whole pass; every font and
/// color name in the body is resolved against it.
pub struct RtfRenderer<'a> {
    header: &'a Header,
    stats: RenderStats,
}

impl<'a> RtfRenderer<'a> {
    /// Create a renderer resolving names against `header`.
    pub fn new(header: &'a Header) -> Self {
        Self {
            header,
            stats: RenderStats::new(),
        }
    }

    /// Render a document to RTF.
    pub fn render(mut self, doc: &Document) -> String {
        let mut output = String::new();
        self.render_document(&mut output, doc);
        output
    }

    /// Render a document to RTF with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> RenderResult {
        let mut output = String::new();
        self.render_document(&mut output, doc);
        RenderResult::new(output, self.stats)
    }

    fn render_document(&mut self, output: &mut String, doc: &Document) {
        log::trace!("rendering document with {} blocks", doc.blocks().len());

        output.push('{');
        self.render_header(output);

        if doc.orientation() == Orientation::Landscape {
            output.push_str("\n\\landscape");
        }
        let size = doc.page_size();
        if size.is_set() {
            output.push_str(&format!("\n\\paperw{}\\paperh{}", size.width, size.height));
        }
        let (left, right, top, bottom) = doc.margins();
        output.push_str(&format!(
            "\n\\margl{}\\margr{}\\margt{}\\margb{}",
            left, right, top, bottom
        ));

        for block in doc.blocks() {
            output.push('\n');
            self.render_block(output, block);
        }
        output.push_str("\n}");
    }

    fn render_header(&mut self, output: &mut String) {
        let header = self.header;
        output.push_str(&format!(
            "\\rtf{}\\{}\\deff{}",
            header.version,
            header.character_set.keyword(),
            header.default_font
        ));

        output.push_str("\n{\\fonttbl");
        for (index, font) in header.font_table.fonts().iter().enumerate() {
            output.push_str(&format!(
                "{{\\f{}\\f{}\\fprq{}\\fcharset{} ",
                index,
                font.family.keyword(),
                font.pitch,
                font.charset
            ));
            write_escaped(output, &font.name);
            output.push_str(";}");
        }
        output.push('}');

        // The leading ';' is the implicit automatic color at index 0.
        output.push_str("\n{\\colortbl;");
        for color in header.color_table.colors() {
            output.push_str(&format!(
                "\\red{}\\green{}\\blue{};",
                color.rgb.red, color.rgb.green, color.rgb.blue
            ));
        }
        output.push('}');
    }

    fn render_block(&mut self, output: &mut String, block: &Block) {
        match block {
            Block::Paragraph(p) => self.render_paragraph(output, p),
            Block::Table(t) => self.render_table(output, t),
        }
    }

    fn render_paragraph(&mut self, output: &mut String, para: &Paragraph) {
        self.stats.add_paragraph();

        output.push_str(&format!(
            "\n\\pard \\q{} {{\\fi{} \\li{} \\ri{} ",
            para.align().keyword(),
            para.indent_first_line(),
            para.indent_left(),
            para.indent_right()
        ));
        if para.is_in_table() {
            output.push_str("\\intbl");
        }
        for item in &para.content {
            self.render_inline(output, item);
        }
        output.push('}');
        if !para.is_in_table() {
            output.push_str("\\par");
        }
    }

    fn render_inline(&mut self, output: &mut String, item: &InlineContent) {
        match item {
            InlineContent::Text(run) => self.render_text_run(output, run),
            InlineContent::LineBreak => output.push_str("\\line "),
            InlineContent::Picture(picture) => self.render_picture(output, picture),
        }
    }

    fn render_text_run(&mut self, output: &mut String, run: &TextRun) {
        let style = &run.style;
        output.push('{');

        if let Some(index) = style.font.as_deref().and_then(|code| self.resolve_font(code)) {
            output.push_str(&format!("\\f{}", index));
        }
        if let Some(size) = style.font_size.filter(|size| *size > 0) {
            output.push_str(&format!("\\fs{}", size * 2));
        }
        if let Some(index) = style.color.as_deref().and_then(|name| self.resolve_color(name)) {
            output.push_str(&format!("\\cf{}", index));
        }
        if let Some(index) = style
            .highlight
            .as_deref()
            .and_then(|name| self.resolve_color(name))
        {
            output.push_str(&format!("\\highlight{}", index));
        }

        if style.has_styling() {
            for (enabled, word) in [
                (style.bold, "\\b"),
                (style.italic, "\\i"),
                (style.underline, "\\ul"),
                (style.strikethrough, "\\strike"),
                (style.superscript, "\\super"),
                (style.subscript, "\\sub"),
                (style.small_caps, "\\scaps"),
                (style.all_caps, "\\caps"),
            ] {
                if enabled {
                    output.push_str(word);
                }
            }
        }

        output.push(' ');
        write_escaped(output, &run.text);
        output.push('}');
    }

    fn render_picture(&mut self, output: &mut String, picture: &Picture) {
        self.stats.add_picture();

        output.push_str(&format!(
            "{{\\pict\\{}blip\\picwgoal{}\\pichgoal{}",
            picture.format.keyword(),
            picture.width,
            picture.height
        ));
        if let Some(scale) = picture.scale_x {
            output.push_str(&format!("\\picscalex{}", scale));
        }
        if let Some(scale) = picture.scale_y {
            output.push_str(&format!("\\picscaley{}", scale));
        }
        output.push('\n');
        output.push_str(&picture.hex_data);
        output.push('}');
    }

    fn render_table(&mut self, output: &mut String, table: &Table) {
        self.stats.add_table();
        log::trace!("rendering table with {} rows", table.row_count());

        let align = format!("\\trq{}", table.align().keyword());
        let padding = table.padding();
        for row in table.rows() {
            output.push_str(&format!("\n{{\\trowd {}", align));
            if table.default_font_size() > 0 {
                output.push_str(&format!("\\fs{}", 2 * table.default_font_size()));
            }
            output.push_str(&format!(
                "\n\\trpaddl{} \\trpaddr{} \\trpaddt{} \\trpaddb{}\n",
                padding.left, padding.right, padding.top, padding.bottom
            ));
            self.render_row(output, row);
            output.push_str("\\row}");
        }
    }

    fn render_row(&mut self, output: &mut String, row: &TableRow) {
        self.stats.add_row();

        let border = self.border_properties(row.borders());
        for side in row.borders().present_sides() {
            output.push_str("\n\\trbrdr");
            output.push_str(side);
            output.push_str(&border);
        }

        if row.cells().is_empty() {
            return;
        }

        // \cellx takes the cell's right edge, not its width.
        let mut offset = 0;
        for cell in row.cells() {
            offset += cell.width();
            self.render_cell_properties(output, cell);
            output.push_str(&format!("\\cellx{}", offset));
        }
        output.push('\n');
        for cell in row.cells() {
            self.render_cell_data(output, cell);
        }
    }

    fn render_cell_properties(&mut self, output: &mut String, cell: &TableCell) {
        let border = self.border_properties(cell.borders());
        for side in cell.borders().present_sides() {
            output.push_str("\n\\clbrdr");
            output.push_str(side);
            output.push_str(&border);
        }

        let padding = cell.padding();
        output.push_str(&format!(
            "\n\\clpadl{}\\clpadr{}\\clpadt{}\\clpadb{}",
            padding.left, padding.right, padding.top, padding.bottom
        ));

        if let Some(merge) = cell.vertical_merge().keyword() {
            output.push_str(&format!("\\clvm{}", merge));
        }
        output.push_str(&format!("\\clvertal{}", cell.vertical_alignment().keyword()));

        if let Some(index) = cell
            .background_color()
            .and_then(|name| self.resolve_color(name))
        {
            output.push_str(&format!("\\clcbpat{}", index));
        }
    }

    fn render_cell_data(&mut self, output: &mut String, cell: &TableCell) {
        self.stats.add_cell();

        if cell.paragraphs().is_empty() {
            self.stats.add_synthesized_paragraph();
            let placeholder = Paragraph::in_cell(cell.content_width());
            self.render_paragraph(output, &placeholder);
            output.push('\n');
        }
        for para in cell.paragraphs() {
            self.render_paragraph(output, para);
            output.push('\n');
        }
        output.push_str("\\cell");
    }

    /// Width, style and color words shared by every side of a border.
    fn border_properties(&mut self, borders: &Borders) -> String {
        let mut words = format!("\\brdrw{}\\brdr{}", borders.width, borders.style.keyword());
        if let Some(index) = self.resolve_color(&borders.color) {
            words.push_str(&format!("\\brdrcf{}", index));
        }
        words
    }

    fn resolve_font(&mut self, code: &str) -> Option<usize> {
        let index = self.header.font_table.index_of(code);
        if index.is_none() {
            log::debug!("font {:?} is not in the font table, omitting", code);
            self.stats.add_unresolved_reference();
        }
        index
    }

    fn resolve_color(&mut self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        let index = self.header.color_table.index_of(name);
        if index.is_none() {
            log::debug!("color {:?} is not in the color table, omitting", name);
            self.stats.add_unresolved_reference();
        }
        index
    }
}
