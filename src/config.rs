use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Do not modify, just report
    #[arg(long)]
    pub dry_run: bool,

    /// Print one line per file describing the decision
    #[arg(long)]
    pub verbose: bool,

    /// Files to process (relative or absolute)
    pub files: Vec<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }
}
