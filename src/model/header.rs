//! Document header: font and color registries.
//!
//! Both registries are append-only. An entry's position is its RTF index, so
//! entries are never reordered or removed. Elements in the document body refer
//! to fonts and colors by symbolic name only; names are resolved against the
//! live registries when the document is rendered.

use serde::{Deserialize, Serialize};

use super::presets::{color, font};
use super::{CharacterSet, FontFamily};

/// Pitch used when a font is added with pitch 0.
const DEFAULT_PITCH: u8 = 2;

/// RTF header state owned by a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// RTF major version (`\rtf<n>`)
    pub version: u8,

    /// Character set keyword (`\ansi`, `\mac`, ...)
    pub character_set: CharacterSet,

    /// Index of the default font (`\deff<n>`)
    pub default_font: usize,

    /// Font registry
    pub font_table: FontTable,

    /// Color registry
    pub color_table: ColorTable,
}

impl Header {
    /// Create an empty header: RTF 1, ANSI, no fonts, no colors.
    pub fn new() -> Self {
        Self {
            version: 1,
            character_set: CharacterSet::Ansi,
            default_font: 0,
            font_table: FontTable::new(),
            color_table: ColorTable::new(),
        }
    }

    /// Create a header seeded with the default fonts and colors.
    pub fn with_defaults() -> Self {
        Self {
            font_table: FontTable::with_defaults(),
            color_table: ColorTable::with_defaults(),
            ..Self::new()
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

/// A font table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    /// Font family class
    pub family: FontFamily,

    /// Character set id (`\fcharset<n>`)
    pub charset: u8,

    /// Pitch (`\fprq<n>`): 0 default, 1 fixed, 2 variable
    pub pitch: u8,

    /// Display name written into the table
    pub name: String,

    /// Symbolic code used by text runs to reference this font
    pub code: String,
}

/// Ordered font registry. Index is 0-based insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontTable {
    fonts: Vec<Font>,
}

impl FontTable {
    /// Create an empty font table.
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Create a font table with the default fonts.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table
            .add_font(FontFamily::Roman, 0, 2, "Times New Roman", font::TIMES_NEW_ROMAN)
            .add_font(FontFamily::Roman, 2, 2, "Symbol", font::SYMBOL)
            .add_font(FontFamily::Swiss, 0, 2, "Arial", font::ARIAL)
            .add_font(FontFamily::Swiss, 0, 2, "Comic Sans MS", font::COMIC_SANS_MS)
            .add_font(FontFamily::Modern, 128, 1, "Courier New", font::COURIER_NEW);
        table
    }

    /// Append a font. A pitch of 0 is stored as 2 (variable).
    pub fn add_font(
        &mut self,
        family: FontFamily,
        charset: u8,
        pitch: u8,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> &mut Self {
        let pitch = if pitch == 0 { DEFAULT_PITCH } else { pitch };
        self.fonts.push(Font {
            family,
            charset,
            pitch,
            name: name.into(),
            code: code.into(),
        });
        self
    }

    /// Fonts in table order.
    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    /// Number of fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Check if the table has no fonts.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// 0-based index of the first font registered under `code`.
    pub(crate) fn index_of(&self, code: &str) -> Option<usize> {
        self.fonts.iter().position(|f| f.code == code)
    }
}

/// An RGB color value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Create a color from its components.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// A color table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Color value
    pub rgb: Rgb,

    /// Symbolic name used by tables, cells and text runs
    pub name: String,
}

/// Ordered color registry.
///
/// References are 1-based: RTF reserves index 0 for the automatic color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTable {
    colors: Vec<Color>,
}

impl ColorTable {
    /// Create an empty color table.
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Create a color table with the sixteen default colors.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table
            .add_color(Rgb::new(0, 0, 0), color::BLACK)
            .add_color(Rgb::new(0, 0, 255), color::BLUE)
            .add_color(Rgb::new(0, 255, 255), color::AQUA)
            .add_color(Rgb::new(0, 255, 0), color::LIME)
            .add_color(Rgb::new(0, 128, 0), color::GREEN)
            .add_color(Rgb::new(255, 0, 255), color::MAGENTA)
            .add_color(Rgb::new(255, 0, 0), color::RED)
            .add_color(Rgb::new(255, 255, 0), color::YELLOW)
            .add_color(Rgb::new(255, 255, 255), color::WHITE)
            .add_color(Rgb::new(0, 0, 128), color::NAVY)
            .add_color(Rgb::new(0, 128, 128), color::TEAL)
            .add_color(Rgb::new(128, 0, 128), color::PURPLE)
            .add_color(Rgb::new(128, 0, 0), color::MAROON)
            .add_color(Rgb::new(128, 128, 0), color::OLIVE)
            .add_color(Rgb::new(128, 128, 128), color::GRAY)
            .add_color(Rgb::new(192, 192, 192), color::SILVER);
        table
    }

    /// Append a color.
    pub fn add_color(&mut self, rgb: Rgb, name: impl Into<String>) -> &mut Self {
        self.colors.push(Color {
            rgb,
            name: name.into(),
        });
        self
    }

    /// Colors in table order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the table has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// 1-based index of the first color registered under `name`.
    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.colors.iter().position(|c| c.name == name).map(|i| i + 1)
    }
}
