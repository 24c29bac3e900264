use crate::core::report::ScoreReport;
use anyhow::Result;
use std::path::PathBuf;

pub mod file;

/// "Export current view" collaborator. Implementations may fail; callers
/// recover locally and never let a failure reach the selection or score.
pub trait Exporter {
    fn name(&self) -> &'static str;
    fn export(&self, report: &ScoreReport) -> Result<PathBuf>;
}
