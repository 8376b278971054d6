use std::path::PathBuf;

use crate::config::Config;
use crate::errors::Result;
use crate::outcome::Outcome;
use crate::traits::PngWriter;
use crate::{resolve_path, Normalizer, OptimizedPngWriter};

/// Exit status when a dry-run found at least one file to rewrite.
pub const EXIT_WOULD_CHANGE: u8 = 1;

/// Per-path decisions of a completed run, in input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub dry_run: bool,
    pub outcomes: Vec<(PathBuf, Outcome)>,
}

impl RunSummary {
    pub fn any_changed(&self) -> bool {
        self.outcomes.iter().any(|(_, outcome)| outcome.is_change())
    }

    /// `1` if a dry-run would change something, `0` otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.dry_run && self.any_changed() {
            EXIT_WOULD_CHANGE
        } else {
            0
        }
    }
}

/// Process every file in `config` with the default optimizing writer.
pub fn run(config: &Config) -> Result<RunSummary> {
    run_with(config, OptimizedPngWriter::new())
}

/// Process files strictly in order; the first error stops the run.
pub fn run_with<W: PngWriter>(config: &Config, writer: W) -> Result<RunSummary> {
    let mut summary = RunSummary {
        dry_run: config.dry_run,
        outcomes: Vec::with_capacity(config.files.len()),
    };

    if config.files.is_empty() {
        tracing::info!("no files provided, nothing to do");
        return Ok(summary);
    }

    let normalizer = Normalizer::new(writer, config.dry_run);
    for file in &config.files {
        let path = resolve_path(file)?;
        let outcome = normalizer.normalize(&path)?;
        summary.outcomes.push((path, outcome));
    }

    Ok(summary)
}
