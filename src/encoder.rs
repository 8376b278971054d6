use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::RgbaImage;

use crate::errors::{NormalizeError, Result};
use crate::traits::PngWriter;

/// Writes PNGs with the encoder's size optimizations enabled, replacing the
/// destination through a temporary sibling file and a single rename.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizedPngWriter;

impl OptimizedPngWriter {
    pub const fn new() -> Self {
        Self
    }

    fn encode_to(&self, image: &RgbaImage, tmp: &Path) -> Result<()> {
        let file = File::create(tmp)
            .map_err(|e| NormalizeError::file_system(tmp, "temp file creation", e))?;
        let mut writer = BufWriter::new(file);

        let encoder =
            PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive);
        image
            .write_with_encoder(encoder)
            .map_err(|e| NormalizeError::image_processing(tmp, "png encoding", e))?;

        writer
            .flush()
            .map_err(|e| NormalizeError::file_system(tmp, "temp file flush", e))?;
        Ok(())
    }
}

impl PngWriter for OptimizedPngWriter {
    fn write_png(&self, image: &RgbaImage, dest: &Path) -> Result<()> {
        let tmp = temp_sibling(dest);
        self.encode_to(image, &tmp)?;
        replace_atomically(&tmp, dest)
    }
}

/// `icons/app.png` -> `icons/app.tmp.png`; the marker goes before the final
/// extension, which is always written lowercase.
pub fn temp_sibling(path: &Path) -> PathBuf {
    path.with_extension("tmp.png")
}

/// Renames `tmp` over `dest`. On failure `dest` keeps its previous contents.
pub fn replace_atomically(tmp: &Path, dest: &Path) -> Result<()> {
    fs::rename(tmp, dest).map_err(|e| NormalizeError::file_system(dest, "atomic replace", e))
}
