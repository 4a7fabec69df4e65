//! Embedded pictures.

use serde::{Deserialize, Serialize};

use super::PictureFormat;

/// A picture spliced into a paragraph.
///
/// The image bytes arrive already hex-encoded; decoding and conversion of
/// image files happens outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    /// Encoding of the picture data
    pub format: PictureFormat,

    /// Hexadecimal picture data
    pub hex_data: String,

    /// Desired display width in twips (`\picwgoal`)
    pub width: i32,

    /// Desired display height in twips (`\pichgoal`)
    pub height: i32,

    /// Horizontal scaling in percent
    pub scale_x: Option<u32>,

    /// Vertical scaling in percent
    pub scale_y: Option<u32>,
}

impl Picture {
    /// Create a new picture.
    pub fn new(format: PictureFormat, hex_data: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            format,
            hex_data: hex_data.into(),
            width,
            height,
            scale_x: None,
            scale_y: None,
        }
    }

    /// Create a JPEG picture.
    pub fn jpeg(hex_data: impl Into<String>, width: i32, height: i32) -> Self {
        Self::new(PictureFormat::Jpeg, hex_data, width, height)
    }

    /// Create a PNG picture.
    pub fn png(hex_data: impl Into<String>, width: i32, height: i32) -> Self {
        Self::new(PictureFormat::Png, hex_data, width, height)
    }

    /// Set the display size in twips.
    pub fn set_size(&mut self, width: i32, height: i32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set horizontal and vertical scaling in percent.
    pub fn set_scale(&mut self, scale_x: u32, scale_y: u32) -> &mut Self {
        self.scale_x = Some(scale_x);
        self.scale_y = Some(scale_y);
        self
    }

    /// Size of the picture data in bytes.
    pub fn byte_len(&self) -> usize {
        self.hex_data.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_constructors() {
        let jpeg = Picture::jpeg("ffd8ffe0", 1440, 720);
        assert_eq!(jpeg.format, PictureFormat::Jpeg);
        assert_eq!(jpeg.byte_len(), 4);

        let mut png = Picture::png("89504e47", 100, 100);
        png.set_size(200, 300).set_scale(50, 75);
        assert_eq!((png.width, png.height), (200, 300));
        assert_eq!(png.scale_x, Some(50));
        assert_eq!(png.scale_y, Some(75));
    }
}
