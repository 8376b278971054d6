use std::process::ExitCode;

use anyhow::{Context, Result};
use png_normalize::{logging::init_logging, run, Config};

fn main() -> Result<ExitCode> {
    let config = Config::new();
    init_logging(config.verbose);

    let summary = run(&config).context("PNG normalization aborted")?;

    Ok(ExitCode::from(summary.exit_status()))
}
