use std::fmt;

use crate::mode::SourceMode;

/// What the normalizer decided for a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Path does not exist or is not a regular file.
    SkippedMissing,
    /// Extension is not `.png`.
    SkippedNotPng,
    /// Dry-run: the file qualifies and would be rewritten.
    WouldNormalize { from: SourceMode },
    /// The file was re-encoded as RGBA and replaced.
    Normalized { from: SourceMode },
}

impl Outcome {
    /// `true` when the file was, or in dry-run would be, rewritten.
    pub const fn is_change(&self) -> bool {
        matches!(self, Self::WouldNormalize { .. } | Self::Normalized { .. })
    }

    /// Short label used in the verbose report.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SkippedMissing => "skip (missing)",
            Self::SkippedNotPng => "skip (not png)",
            Self::WouldNormalize { .. } => "would normalize",
            Self::Normalized { .. } => "normalized",
        }
    }

    /// Verbose report line for `path`.
    pub fn report<'a>(&'a self, path: &'a std::path::Path) -> Report<'a> {
        Report {
            outcome: self,
            path,
        }
    }
}

pub struct Report<'a> {
    outcome: &'a Outcome,
    path: &'a std::path::Path,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.outcome.label(), self.path.display())?;
        if let Outcome::WouldNormalize { from } = self.outcome {
            write!(f, " (mode {} -> RGBA)", from.name())?;
        }
        Ok(())
    }
}
