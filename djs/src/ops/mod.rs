//! Core operations.
//!
//! This module contains the business logic for djs commands,
//! separated from CLI argument parsing and output rendering.

pub mod case;
pub mod create;
pub mod start_app;

use std::path::{Path, PathBuf};

pub use case::case;
pub use create::create;
pub use start_app::start_app;

/// `path` relative to the project root, for display.
fn relative(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
