use std::io::Cursor;

use png::{BitDepth, ColorType};

/// Pixel layout stored in a PNG header, before the decoder expands palettes
/// and sub-byte samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// 1-bit grayscale.
    Bilevel,
    /// 2, 4 or 8-bit grayscale.
    Gray,
    /// 16-bit grayscale.
    Gray16,
    GrayAlpha,
    Rgb,
    Rgba,
    /// Palette indices, with or without a tRNS chunk.
    Palette,
}

impl SourceMode {
    pub const fn from_header(color: ColorType, depth: BitDepth) -> Self {
        match (color, depth) {
            (ColorType::Grayscale, BitDepth::One) => Self::Bilevel,
            (ColorType::Grayscale, BitDepth::Sixteen) => Self::Gray16,
            (ColorType::Grayscale, _) => Self::Gray,
            (ColorType::GrayscaleAlpha, _) => Self::GrayAlpha,
            (ColorType::Rgb, _) => Self::Rgb,
            (ColorType::Rgba, _) => Self::Rgba,
            (ColorType::Indexed, _) => Self::Palette,
        }
    }

    /// Short mode name used in reports (`P`, `L`, `RGBA`, ...).
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bilevel => "1",
            Self::Gray => "L",
            Self::Gray16 => "I;16",
            Self::GrayAlpha => "LA",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Palette => "P",
        }
    }
}

/// Read only the IHDR chunk of `bytes`.
pub fn read_source_mode(bytes: &[u8]) -> Result<SourceMode, png::DecodingError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    let info = decoder.read_header_info()?;
    Ok(SourceMode::from_header(info.color_type, info.bit_depth))
}
