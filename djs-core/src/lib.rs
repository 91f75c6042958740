//! Core utilities and types for the djscaffold generator.
//!
//! This crate provides the case converter, whole-file storage, the error
//! taxonomy and project configuration shared by the other djscaffold crates.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod case;
mod config;
mod error;
mod file;

// String utilities
pub use case::{
    Case, split_words, to_camel_case, to_constant_case, to_kebab_case, to_pascal_case,
    to_sentence_case, to_snake_case, to_title_case,
};
pub use config::{ArtifactToggles, CONFIG_FILE, Config, ProjectConfig, RouterConfig, RouterKind};
pub use error::{Error, Result, StorageAction};
// File operations
pub use file::{File, SourceFile, WriteResult, write_file};
