//! Django REST Framework code generation for djscaffold.
//!
//! This crate renders the templates for one entity and applies them to the
//! files of a Django app through [`djscaffold_patch`].
//!
//! # Module Organization
//!
//! - [`artifacts`] - the model, serializer, viewset, factory, admin and route templates
//! - [`builder`] - indentation-aware [`CodeBuilder`](builder::CodeBuilder)
//! - [`generator`] - runs every enabled artifact against an app
//! - [`names`] - identifiers derived from an entity name
//! - [`patcher`] - read, patch and write one file
//! - [`project`] - app discovery
//! - [`settings`] - settings lookup and `INSTALLED_APPS` registration
//! - [`skeleton`] - files of a new app

pub mod artifacts;
pub mod builder;
pub mod generator;
pub mod names;
pub mod patcher;
pub mod project;
pub mod settings;
pub mod skeleton;

pub use generator::{ArtifactChange, Generator};
pub use names::EntityNames;
pub use patcher::{FileChange, FilePatcher};
pub use project::App;
pub use settings::{SettingsLookup, app_entry, find_settings, register_app};
pub use skeleton::AppSkeleton;
