//! Final outcome of a generate run.

use std::path::PathBuf;

use modgen_core::WriteResult;

use super::output::{Output, Report};

/// What happened to the target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The modulefile was written.
    Written(PathBuf),
    /// A file already existed at the target and was left alone.
    AlreadyExists(PathBuf),
    /// The target's parent path is a regular file.
    ParentIsFile(PathBuf),
    /// The operator declined the write.
    Aborted,
    /// Preview only.
    DryRun(PathBuf),
}

impl From<WriteResult> for Outcome {
    fn from(result: WriteResult) -> Self {
        match result {
            WriteResult::Written(path) => Outcome::Written(path),
            WriteResult::AlreadyExists(path) => Outcome::AlreadyExists(path),
            WriteResult::ParentIsFile(path) => Outcome::ParentIsFile(path),
        }
    }
}

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    pub module_name: String,
    pub outcome: Outcome,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        match &self.outcome {
            Outcome::Written(path) => {
                out.preformatted(&format!("Modulefile written to: {}", path.display()));
            }
            Outcome::AlreadyExists(path) => {
                out.preformatted(&format!(
                    "modulefile already exists at {}",
                    path.display()
                ));
            }
            Outcome::ParentIsFile(path) => {
                out.preformatted(&format!(
                    "modulefile already exists at {}",
                    path.display()
                ));
                out.warning(&format!(
                    "cannot create directory for '{}' because a file is in the way",
                    self.module_name
                ));
            }
            Outcome::Aborted => out.preformatted("Aborted, nothing written."),
            Outcome::DryRun(path) => {
                out.preformatted(&format!("Dry run, would write {}", path.display()));
            }
        }
    }
}
