use crate::errors::{NormalizeError, Result};
use crate::traits::PngWriter;
use image::RgbaImage;
use std::cell::Cell;
use std::path::Path;

/// Writer that always fails without touching the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingPngWriter;

impl PngWriter for FailingPngWriter {
    fn write_png(&self, _image: &RgbaImage, dest: &Path) -> Result<()> {
        Err(NormalizeError::file_system(
            dest,
            "temp file creation",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only directory"),
        ))
    }
}

/// Writer that only counts how often it was asked to write.
#[derive(Debug, Default)]
pub struct CountingPngWriter {
    calls: Cell<usize>,
}

impl CountingPngWriter {
    pub const fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl PngWriter for CountingPngWriter {
    fn write_png(&self, _image: &RgbaImage, _dest: &Path) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}
