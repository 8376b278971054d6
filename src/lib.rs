pub mod config;
pub mod driver;
pub mod encoder;
pub mod errors;
pub mod logging;
pub mod mode;
pub mod outcome;
pub mod traits;

pub mod mocks;

use image::error::DecodingError;
use image::{ImageError, ImageFormat, ImageReader};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::mode::read_source_mode;

pub use config::Config;
pub use driver::{run, RunSummary};
pub use encoder::OptimizedPngWriter;
pub use errors::{NormalizeError, Result};
pub use mode::SourceMode;
pub use outcome::Outcome;
pub use traits::*;

pub struct Normalizer<W: PngWriter> {
    writer: W,
    dry_run: bool,
}

impl<W: PngWriter> Normalizer<W> {
    pub const fn new(writer: W, dry_run: bool) -> Self {
        Self { writer, dry_run }
    }

    /// Decide on `path` and, outside dry-run, rewrite it as RGBA.
    ///
    /// Missing files and non-PNG extensions are skipped, not errors. Any
    /// failure while decoding or writing is logged with the path and returned.
    pub fn normalize(&self, path: &Path) -> Result<Outcome> {
        let outcome = match self.qualify(path) {
            Some(skip) => skip,
            None => self.convert(path).inspect_err(|e| {
                tracing::error!("ERROR: {}: {}", path.display(), error_chain(e));
            })?,
        };

        tracing::info!("{}", outcome.report(path));
        Ok(outcome)
    }

    fn qualify(&self, path: &Path) -> Option<Outcome> {
        if !path.is_file() {
            return Some(Outcome::SkippedMissing);
        }
        if !is_png_extension(path) {
            return Some(Outcome::SkippedNotPng);
        }
        None
    }

    fn convert(&self, path: &Path) -> Result<Outcome> {
        let bytes = fs::read(path).map_err(|e| NormalizeError::file_system(path, "read", e))?;

        let image = ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()
            .map_err(|e| NormalizeError::file_system(path, "format detection", e))?
            .decode()
            .map_err(|e| NormalizeError::image_processing(path, "decode", e))?;

        // The decoder has already expanded palettes; the header still has them.
        let from = read_source_mode(&bytes).map_err(|e| {
            let err = ImageError::Decoding(DecodingError::new(ImageFormat::Png.into(), e));
            NormalizeError::image_processing(path, "header read", err)
        })?;

        let rgba = image.into_rgba8();

        if self.dry_run {
            return Ok(Outcome::WouldNormalize { from });
        }

        self.writer.write_png(&rgba, path)?;
        Ok(Outcome::Normalized { from })
    }
}

impl Normalizer<OptimizedPngWriter> {
    pub const fn with_default_writer(dry_run: bool) -> Self {
        Self::new(OptimizedPngWriter::new(), dry_run)
    }
}

/// Returns whether `path` was (or, in dry-run, would be) rewritten.
pub fn normalize_png(path: &Path, dry_run: bool) -> Result<bool> {
    Normalizer::with_default_writer(dry_run)
        .normalize(path)
        .map(|outcome| outcome.is_change())
}

pub fn is_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Absolute paths are used as given; relative ones are joined onto the
/// current working directory without touching symlinks.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| NormalizeError::file_system(path, "current directory lookup", e))?;
    Ok(cwd.join(path))
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
