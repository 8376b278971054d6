use crate::errors::Result;
use image::RgbaImage;
use std::path::Path;

/// Persists a converted image over its source file.
///
/// Lets the normalizer be exercised against writers that fail or record
/// calls instead of touching the disk.
pub trait PngWriter {
    /// Encode `image` as PNG and replace `dest` with it.
    ///
    /// Implementations must leave `dest` untouched if they fail.
    fn write_png(&self, image: &RgbaImage, dest: &Path) -> Result<()>;
}

impl<W: PngWriter + ?Sized> PngWriter for &W {
    fn write_png(&self, image: &RgbaImage, dest: &Path) -> Result<()> {
        (**self).write_png(image, dest)
    }
}
