//! One read, patch, write round trip per file.

use std::path::{Path, PathBuf};

use djscaffold_core::{Result, SourceFile, WriteResult};
use djscaffold_patch::{Outcome, Patched};

/// Applies text patches to files on disk.
///
/// In dry-run mode every new document is computed but nothing is written.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilePatcher {
    dry_run: bool,
}

/// What happened to one file.
#[derive(Debug, Clone)]
pub struct FileChange {
    pub path: PathBuf,
    pub outcome: Outcome,
    pub write: WriteResult,
    /// Content after patching (what was or would be written)
    pub content: String,
}

impl FileChange {
    /// Whether the patch produced a different document.
    pub fn is_changed(&self) -> bool {
        self.outcome == Outcome::Inserted
    }
}

impl FilePatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Read `path` (missing reads as empty), run `patch` over it and write
    /// the result back when it changed.
    pub fn patch(&self, path: &Path, patch: impl FnOnce(&str) -> Patched) -> Result<FileChange> {
        let mut file = SourceFile::open(path)?;
        let patched = patch(file.content());
        let changed = patched.is_changed();

        tracing::debug!(
            path = %path.display(),
            outcome = ?patched.outcome,
            dry_run = self.dry_run,
            "patched file"
        );

        let write = if changed && !self.dry_run {
            file.set_content(patched.content.clone());
            file.save()?
        } else {
            WriteResult::Unchanged
        };

        Ok(FileChange {
            path: path.to_path_buf(),
            outcome: patched.outcome,
            write,
            content: patched.content,
        })
    }
}
