//! Closed keyword enumerations for enum-like document properties.
//!
//! Every property that RTF expresses as a short keyword (alignment `c`,
//! border style `dash`, orientation `landscape`, ...) is a closed enum here.
//! Typed setters always apply. Keyword setters (`set_*_keyword`) parse a string,
//! keep the previous value on unknown input and report the result as an
//! [`Outcome`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Result of a setter that accepts a keyword string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The keyword was recognized and the property changed.
    Applied,
    /// The keyword was not recognized; the previous value was kept.
    Ignored,
}

/// A property value with a fixed RTF keyword.
pub trait Keyword: Sized + Copy + 'static {
    /// Human-readable property name used in diagnostics.
    const KIND: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The keyword emitted into RTF for this value.
    fn keyword(self) -> &'static str;

    /// Look up a value by its keyword.
    fn from_keyword(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.keyword() == value)
    }
}

/// Parse `value` and hand it to `apply`, or log and report [`Outcome::Ignored`].
pub(crate) fn apply_keyword<K: Keyword>(value: &str, apply: impl FnOnce(K)) -> Outcome {
    match K::from_keyword(value) {
        Some(parsed) => {
            apply(parsed);
            Outcome::Applied
        }
        None => {
            log::debug!("ignoring unknown {} keyword {:?}", K::KIND, value);
            Outcome::Ignored
        }
    }
}

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $kw:literal ),+ $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        $(#[$meta])*
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Keyword for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn keyword(self) -> &'static str {
                match self {
                    $( $name::$variant => $kw ),+
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as Keyword>::from_keyword(s).ok_or_else(|| Error::UnknownKeyword {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.keyword())
            }
        }
    };
}

keyword_enum! {
    /// Paragraph alignment (`\q<keyword>`).
    #[derive(Default)]
    #[serde(rename_all = "lowercase")]
    pub enum Alignment: "alignment" {
        /// Centered
        #[default]
        Center => "c",
        /// Left-aligned
        Left => "l",
        /// Right-aligned
        Right => "r",
        /// Justified
        Justify => "j",
        /// Distributed
        Distribute => "d",
    }
}

keyword_enum! {
    /// Horizontal table alignment on the page (`\trq<keyword>`).
    #[derive(Default)]
    #[serde(rename_all = "lowercase")]
    pub enum TableAlignment: "table alignment" {
        /// Centered
        #[default]
        Center => "c",
        /// Left-aligned
        Left => "l",
        /// Right-aligned
        Right => "r",
    }
}

keyword_enum! {
    /// Vertical alignment of text inside a cell (`\clvertal<keyword>`).
    #[derive(Default)]
    #[serde(rename_all = "lowercase")]
    pub enum VerticalAlignment: "vertical alignment" {
        /// Top alignment
        #[default]
        Top => "t",
        /// Middle alignment
        Middle => "c",
        /// Bottom alignment
        Bottom => "b",
    }
}

keyword_enum! {
    /// Border line style (`\brdr<keyword>`).
    #[derive(Default)]
    #[serde(rename_all = "snake_case")]
    pub enum BorderStyle: "border style" {
        DashSmall => "dashsm",
        Dashed => "dash",
        DotDash => "dashd",
        DotDotDash => "dashdd",
        Dotted => "dot",
        Double => "db",
        DoubleThickness => "th",
        WavyDouble => "wavydb",
        Emboss => "emboss",
        Engrave => "engrave",
        Hairline => "hair",
        Inset => "inset",
        Outset => "outset",
        Shadowed => "sh",
        #[default]
        SingleThickness => "s",
        Striped => "dashdotstr",
        ThickThinLarge => "thtnlg",
        ThickThinMedium => "thtnmg",
        ThickThinSmall => "thtnsg",
        ThinThickLarge => "tnthlg",
        ThinThickMedium => "tnthmg",
        ThinThickSmall => "tnthsg",
        ThinThickThinLarge => "tnthtnlg",
        ThinThickThinMedium => "tnthtnmg",
        Triple => "triple",
        Wavy => "wavy",
    }
}

keyword_enum! {
    /// Page orientation.
    #[derive(Default)]
    #[serde(rename_all = "lowercase")]
    pub enum Orientation: "orientation" {
        /// Height greater than width
        #[default]
        Portrait => "portrait",
        /// Width greater than height
        Landscape => "landscape",
    }
}

keyword_enum! {
    /// Named paper format.
    #[derive(Default)]
    pub enum PageFormat: "page format" {
        A2 => "A2",
        A3 => "A3",
        #[default]
        A4 => "A4",
        A5 => "A5",
        Letter => "Letter",
        Legal => "Legal",
    }
}

keyword_enum! {
    /// Font family class of a font table entry (`\f<keyword>`).
    #[derive(Default)]
    #[serde(rename_all = "lowercase")]
    pub enum FontFamily: "font family" {
        /// Unknown or default family
        #[default]
        Nil => "nil",
        /// Proportionally spaced serif fonts
        Roman => "roman",
        /// Proportionally spaced sans serif fonts
        Swiss => "swiss",
        /// Fixed-pitch fonts
        Modern => "modern",
        /// Script fonts
        Script => "script",
        /// Decorative fonts
        Decor => "decor",
        /// Technical, symbol and mathematical fonts
        Tech => "tech",
        /// Arabic, Hebrew or other bidirectional fonts
        Bidi => "bidi",
    }
}

keyword_enum! {
    /// Document character set declared in the header.
    #[derive(Default)]
    #[serde(rename_all = "lowercase")]
    pub enum CharacterSet: "character set" {
        #[default]
        Ansi => "ansi",
        Mac => "mac",
        Pc => "pc",
        Pca => "pca",
    }
}

keyword_enum! {
    /// Encoding of embedded picture data (`\<keyword>blip`).
    #[serde(rename_all = "lowercase")]
    pub enum PictureFormat: "picture format" {
        Jpeg => "jpeg",
        Png => "png",
    }
}
