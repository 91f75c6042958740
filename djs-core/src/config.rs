//! Project configuration read from `djscaffold.toml`.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;

use crate::{Error, Result};

/// Name of the configuration file looked up at the project root.
pub const CONFIG_FILE: &str = "djscaffold.toml";

/// Root of `djscaffold.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub artifacts: ArtifactToggles,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Path to settings.py, relative to the project root
    pub settings: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    #[serde(default)]
    pub kind: RouterKind,
}

/// DRF router class instantiated in a fresh urls.py
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RouterKind {
    #[default]
    Default,
    Simple,
}

impl RouterKind {
    /// The class name, e.g. `DefaultRouter`
    pub fn class_name(self) -> &'static str {
        match self {
            RouterKind::Default => "DefaultRouter",
            RouterKind::Simple => "SimpleRouter",
        }
    }
}

/// Optional artifacts of `djs create`. The model, serializer, viewset and
/// route are always generated.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactToggles {
    #[serde(default = "enabled")]
    pub factory: bool,

    #[serde(default = "enabled")]
    pub admin: bool,
}

fn enabled() -> bool {
    true
}

impl Default for ArtifactToggles {
    fn default() -> Self {
        Self {
            factory: true,
            admin: true,
        }
    }
}

impl Config {
    /// Load `djscaffold.toml` from the project root, or defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content, &path.display().to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(Error::read(path, e)),
        }
    }

    /// Parse configuration from a string, using `filename` for error reporting.
    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e, content, filename))
    }
}
