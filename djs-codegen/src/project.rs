//! Locating Django apps inside a project.

use std::path::{Path, PathBuf};

use djscaffold_core::{Error, Result};

/// A Django app directory addressed by its module name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    name: String,
    path: PathBuf,
}

impl App {
    /// Map an app module name onto a directory under `root`.
    ///
    /// `shop` maps to `<root>/shop` and `apps.shop` to `<root>/apps/shop`.
    /// The directory does not have to exist.
    pub fn at(root: &Path, name: &str) -> Self {
        let path = name
            .split('.')
            .filter(|segment| !segment.is_empty())
            .fold(root.to_path_buf(), |path, segment| path.join(segment));

        Self {
            name: name.to_string(),
            path,
        }
    }

    /// Whether `name` is a dotted Python module path (`shop`, `apps.shop`).
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name.split('.').all(|segment| {
                segment
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                    && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            })
    }

    /// Find an existing app, failing before any file is touched when its
    /// directory is missing.
    pub fn locate(root: &Path, name: &str) -> Result<Self> {
        let app = Self::at(root, name);
        if !app.path.is_dir() {
            return Err(Box::new(Error::TargetNotFound {
                name: name.to_string(),
                path: app.path,
            }));
        }
        tracing::debug!(app = name, path = %app.path.display(), "located app");
        Ok(app)
    }

    /// Full module name, e.g. `apps.shop`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last module segment, e.g. `shop`
    pub fn label(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of a file inside the app directory.
    pub fn file(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }
}
