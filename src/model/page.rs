//! Page geometry: paper sizes, orientation and margins.

use serde::{Deserialize, Serialize};

use super::{Keyword, Orientation, PageFormat};
use crate::error::{Error, Result};

/// Default page margin on every side, in twips (0.5 inch).
pub const DEFAULT_MARGIN: i32 = 720;

/// Page dimensions in twips (1/1440 inch).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSize {
    /// Page width in twips
    pub width: i32,

    /// Page height in twips
    pub height: i32,
}

impl PageSize {
    /// Create a new page size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check if the size has been set (both dimensions non-zero).
    pub fn is_set(&self) -> bool {
        self.width != 0 && self.height != 0
    }
}

impl PageFormat {
    /// Portrait dimensions of the format.
    fn portrait(self) -> PageSize {
        match self {
            PageFormat::A2 => PageSize::new(23811, 33676),
            PageFormat::A3 => PageSize::new(16838, 23811),
            PageFormat::A4 => PageSize::new(11906, 16838),
            PageFormat::A5 => PageSize::new(8391, 11906),
            PageFormat::Letter => PageSize::new(12240, 15840),
            PageFormat::Legal => PageSize::new(12240, 20160),
        }
    }

    /// Page size of the format in the given orientation.
    pub fn size(self, orientation: Orientation) -> PageSize {
        let portrait = self.portrait();
        match orientation {
            Orientation::Portrait => portrait,
            Orientation::Landscape => PageSize::new(portrait.height, portrait.width),
        }
    }
}

/// Look up the page size for a format and orientation given as keywords.
///
/// # Example
///
/// ```
/// use rtfdoc::model::page_size;
///
/// let size = page_size("A4", "landscape").unwrap();
/// assert_eq!((size.width, size.height), (16838, 11906));
/// assert!(page_size("B5", "portrait").is_err());
/// ```
pub fn page_size(format: &str, orientation: &str) -> Result<PageSize> {
    match (
        PageFormat::from_keyword(format),
        Orientation::from_keyword(orientation),
    ) {
        (Some(format), Some(orientation)) => Ok(format.size(orientation)),
        _ => Err(Error::UnknownPageSize {
            format: format.to_string(),
            orientation: orientation.to_string(),
        }),
    }
}

/// Page configuration applied to a document in one step.
///
/// Deserializable so page settings can live in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSetup {
    /// Paper format
    pub format: PageFormat,

    /// Page orientation
    pub orientation: Orientation,

    /// Left margin in twips
    pub margin_left: i32,

    /// Right margin in twips
    pub margin_right: i32,

    /// Top margin in twips
    pub margin_top: i32,

    /// Bottom margin in twips
    pub margin_bottom: i32,
}

impl PageSetup {
    /// Create a page setup with defaults (A4 portrait, 720 twip margins).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paper format.
    pub fn with_format(mut self, format: PageFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set all four margins to the same value.
    pub fn with_margins(mut self, value: i32) -> Self {
        self.margin_left = value;
        self.margin_right = value;
        self.margin_top = value;
        self.margin_bottom = value;
        self
    }

    /// Set the left and right margins.
    pub fn with_horizontal_margins(mut self, left: i32, right: i32) -> Self {
        self.margin_left = left;
        self.margin_right = right;
        self
    }

    /// Set the top and bottom margins.
    pub fn with_vertical_margins(mut self, top: i32, bottom: i32) -> Self {
        self.margin_top = top;
        self.margin_bottom = bottom;
        self
    }

    /// Resolved page size for this setup.
    pub fn page_size(&self) -> PageSize {
        self.format.size(self.orientation)
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            format: PageFormat::A4,
            orientation: Orientation::Portrait,
            margin_left: DEFAULT_MARGIN,
            margin_right: DEFAULT_MARGIN,
            margin_top: DEFAULT_MARGIN,
            margin_bottom: DEFAULT_MARGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_sizes() {
        assert_eq!(
            PageFormat::A4.size(Orientation::Portrait),
            PageSize::new(11906, 16838)
        );
        assert_eq!(
            PageFormat::A4.size(Orientation::Landscape),
            PageSize::new(16838, 11906)
        );
    }

    #[test]
    fn test_page_size_lookup() {
        assert_eq!(page_size("Letter", "portrait").unwrap().width, 12240);
        assert!(matches!(
            page_size("A4", "sideways"),
            Err(Error::UnknownPageSize { .. })
        ));
        assert!(page_size("a4", "portrait").is_err());
    }

    #[test]
    fn test_page_setup_builder() {
        let setup = PageSetup::new()
            .with_format(PageFormat::A3)
            .with_orientation(Orientation::Landscape)
            .with_margins(1000)
            .with_horizontal_margins(500, 600);

        assert_eq!(setup.page_size(), PageSize::new(23811, 16838));
        assert_eq!(setup.margin_left, 500);
        assert_eq!(setup.margin_right, 600);
        assert_eq!(setup.margin_top, 1000);
    }

    #[test]
    fn test_page_setup_from_partial_json() {
        let setup: PageSetup =
            serde_json::from_str(r#"{"format":"Legal","margin_top":1440}"#).unwrap();
        assert_eq!(setup.format, PageFormat::Legal);
        assert_eq!(setup.orientation, Orientation::Portrait);
        assert_eq!(setup.margin_top, 1440);
        assert_eq!(setup.margin_left, DEFAULT_MARGIN);
    }
}
