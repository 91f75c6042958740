//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod case;
mod create;
mod output;
mod start_app;

pub use case::CaseReport;
pub use create::{ArtifactResult, CreateReport};
pub use output::{Report, TerminalOutput};
pub use start_app::{SettingsRegistration, StartAppReport};
