//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

use super::keyword::apply_keyword;
use super::{Alignment, Outcome, Picture};

/// A paragraph of inline content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline runs in order
    pub content: Vec<InlineContent>,

    align: Alignment,
    indent_first_line: i32,
    indent_left: i32,
    indent_right: i32,
    in_table: bool,
    allowed_width: i32,
}

impl Paragraph {
    /// Create an empty paragraph in the document body.
    pub fn new() -> Self {
        Self::body(0)
    }

    /// Body paragraph: centered, ends with `\par`.
    pub(crate) fn body(allowed_width: i32) -> Self {
        Self {
            content: Vec::new(),
            align: Alignment::Center,
            indent_first_line: 0,
            indent_left: 0,
            indent_right: 0,
            in_table: false,
            allowed_width,
        }
    }

    /// Cell paragraph: left-aligned, tagged `\intbl`, no `\par`.
    pub(crate) fn in_cell(allowed_width: i32) -> Self {
        Self {
            align: Alignment::Left,
            in_table: true,
            ..Self::body(allowed_width)
        }
    }

    /// Set the alignment.
    pub fn set_align(&mut self, align: Alignment) -> &mut Self {
        self.align = align;
        self
    }

    /// Set the alignment from its RTF keyword (`c`, `l`, `r`, `j`, `d`).
    pub fn set_align_keyword(&mut self, keyword: &str) -> Outcome {
        apply_keyword(keyword, |align: Alignment| self.align = align)
    }

    /// Set the first line indent in twips.
    pub fn set_indent_first_line(&mut self, value: i32) -> &mut Self {
        self.indent_first_line = value;
        self
    }

    /// Set the left indent in twips.
    pub fn set_indent_left(&mut self, value: i32) -> &mut Self {
        self.indent_left = value;
        self
    }

    /// Set the right indent in twips.
    pub fn set_indent_right(&mut self, value: i32) -> &mut Self {
        self.indent_right = value;
        self
    }

    /// Add a text run with default style and return it for styling.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut TextRun {
        self.content.push(InlineContent::Text(TextRun::new(text)));
        match self.content.last_mut() {
            Some(InlineContent::Text(run)) => run,
            _ => unreachable!("text run was just pushed"),
        }
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) -> &mut Self {
        self.content.push(InlineContent::Text(run));
        self
    }

    /// Add a line break.
    pub fn add_line_break(&mut self) -> &mut Self {
        self.content.push(InlineContent::LineBreak);
        self
    }

    /// Add a picture and return it for sizing.
    pub fn add_picture(&mut self, picture: Picture) -> &mut Picture {
        self.content.push(InlineContent::Picture(picture));
        match self.content.last_mut() {
            Some(InlineContent::Picture(picture)) => picture,
            _ => unreachable!("picture was just pushed"),
        }
    }

    /// Alignment.
    pub fn align(&self) -> Alignment {
        self.align
    }

    /// First line indent in twips.
    pub fn indent_first_line(&self) -> i32 {
        self.indent_first_line
    }

    /// Left indent in twips.
    pub fn indent_left(&self) -> i32 {
        self.indent_left
    }

    /// Right indent in twips.
    pub fn indent_right(&self) -> i32 {
        self.indent_right
    }

    /// Whether the paragraph lives inside a table cell.
    pub fn is_in_table(&self) -> bool {
        self.in_table
    }

    /// Width available to the paragraph when it was created, in twips.
    pub fn allowed_width(&self) -> i32 {
        self.allowed_width
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                InlineContent::Text(run) => run.text.as_str(),
                InlineContent::LineBreak => "\n",
                InlineContent::Picture(_) => "",
            })
            .collect()
    }

    /// Check if the paragraph has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineContent {
    /// A text run with styling
    Text(TextRun),

    /// A line break (`\line`)
    LineBreak,

    /// An embedded picture
    Picture(Picture),
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                bold: true,
                ..Default::default()
            },
        }
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                italic: true,
                ..Default::default()
            },
        }
    }

    /// Set the font size in points.
    pub fn set_font_size(&mut self, points: i32) -> &mut Self {
        self.style.font_size = Some(points);
        self
    }

    /// Set the font by its font table code.
    pub fn set_font(&mut self, code: impl Into<String>) -> &mut Self {
        self.style.font = Some(code.into());
        self
    }

    /// Set the text color by its color table name.
    pub fn set_color(&mut self, name: impl Into<String>) -> &mut Self {
        self.style.color = Some(name.into());
        self
    }

    /// Set the highlight color by its color table name.
    pub fn set_highlight(&mut self, name: impl Into<String>) -> &mut Self {
        self.style.highlight = Some(name.into());
        self
    }

    pub fn set_bold(&mut self, value: bool) -> &mut Self {
        self.style.bold = value;
        self
    }

    pub fn set_italic(&mut self, value: bool) -> &mut Self {
        self.style.italic = value;
        self
    }

    pub fn set_underline(&mut self, value: bool) -> &mut Self {
        self.style.underline = value;
        self
    }

    pub fn set_strikethrough(&mut self, value: bool) -> &mut Self {
        self.style.strikethrough = value;
        self
    }

    /// Raise the text; clears subscript.
    pub fn set_superscript(&mut self, value: bool) -> &mut Self {
        self.style.superscript = value;
        if value {
            self.style.subscript = false;
        }
        self
    }

    /// Lower the text; clears superscript.
    pub fn set_subscript(&mut self, value: bool) -> &mut Self {
        self.style.subscript = value;
        if value {
            self.style.superscript = false;
        }
        self
    }

    pub fn set_small_caps(&mut self, value: bool) -> &mut Self {
        self.style.small_caps = value;
        self
    }

    pub fn set_all_caps(&mut self, value: bool) -> &mut Self {
        self.style.all_caps = value;
        self
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Text styling properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Strikethrough text
    pub strikethrough: bool,

    /// Superscript
    pub superscript: bool,

    /// Subscript
    pub subscript: bool,

    /// Small capitals
    pub small_caps: bool,

    /// All capitals
    pub all_caps: bool,

    /// Font code from the font table
    pub font: Option<String>,

    /// Font size in points
    pub font_size: Option<i32>,

    /// Text color name from the color table
    pub color: Option<String>,

    /// Highlight color name from the color table
    pub highlight: Option<String>,
}

impl TextStyle {
    /// Check if any character formatting flag is set.
    pub fn has_styling(&self) -> bool {
        self.bold
            || self.italic
            || self.underline
            || self.strikethrough
            || self.superscript
            || self.subscript
            || self.small_caps
            || self.all_caps
    }
}
