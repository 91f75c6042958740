//! Create command report data structures.

use std::path::PathBuf;

use djscaffold_patch::Outcome;
use indexmap::IndexMap;

use super::output::{Output, Report};

/// Report data from generating one entity.
#[derive(Debug)]
pub struct CreateReport {
    /// App label, e.g. `shop`.
    pub app: String,

    /// Model class name.
    pub model: String,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Artifacts keyed by file name, in the order they were applied.
    pub artifacts: IndexMap<&'static str, ArtifactResult>,
}

/// What happened to one artifact.
#[derive(Debug)]
pub struct ArtifactResult {
    /// File path relative to the project root.
    pub path: PathBuf,
    /// Confirmation line.
    pub message: String,
    pub outcome: Outcome,
    /// New file content (written, or previewed in a dry run).
    pub content: String,
}

impl CreateReport {
    /// Artifacts that changed (or would change) their file.
    pub fn changed(&self) -> impl Iterator<Item = &ArtifactResult> {
        self.artifacts
            .values()
            .filter(|a| a.outcome == Outcome::Inserted)
    }
}

impl Report for CreateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            for artifact in self.changed() {
                out.divider(&artifact.path.display().to_string());
                out.preformatted(artifact.content.trim_end());
            }
            out.divider("Summary");
        }

        out.section(&format!("Model '{}' in app '{}'", self.model, self.app));
        for (file_name, artifact) in &self.artifacts {
            let path = artifact.path.display();
            match &artifact.outcome {
                Outcome::Inserted => out.added_item(&artifact.message),
                Outcome::AlreadyPresent => {
                    out.skipped_item(&format!("{}: already present", file_name))
                }
                Outcome::Ambiguous { reason } => {
                    out.warning(&format!("{}: {}; left unchanged", path, reason))
                }
                Outcome::NotFound => out.warning(&format!("{}: nothing to patch", path)),
            }
        }

        if self.dry_run {
            out.newline();
            out.preformatted(&format!(
                "{} files would be changed",
                self.changed().count()
            ));
        }
    }
}
