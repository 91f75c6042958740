//! Finding the settings module and registering apps in `INSTALLED_APPS`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use djscaffold_core::{Error, Result, SourceFile};
use djscaffold_patch::{CollectionTarget, Outcome, Patched, insert_element};
use regex::Regex;

use crate::project::App;

/// Name of the collection apps are registered in.
pub const INSTALLED_APPS: &str = "INSTALLED_APPS";

static APP_CONFIG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^class\s+(\w+)\s*\(\s*(?:\w+\.)*AppConfig\s*\)")
        .expect("AppConfig pattern is valid")
});

/// Result of looking for the project's settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsLookup {
    /// Exactly one settings file applies.
    Found(PathBuf),
    /// Several `settings.py` files were found; the caller has to choose.
    Candidates(Vec<PathBuf>),
}

/// Resolve the settings file for a project rooted at `root`.
///
/// An explicit path (command line or config file) wins and must exist.
/// A `DJANGO_SETTINGS_MODULE` style dotted module is tried next; if it
/// does not map to a file the search falls through to `<root>/*/settings.py`.
pub fn find_settings(
    root: &Path,
    explicit: Option<&Path>,
    module: Option<&str>,
) -> Result<SettingsLookup> {
    if let Some(explicit) = explicit {
        let path = root.join(explicit);
        if !path.is_file() {
            return Err(Error::settings(format!(
                "settings file '{}' does not exist",
                path.display()
            )));
        }
        return Ok(SettingsLookup::Found(path));
    }

    if let Some(module) = module.filter(|m| !m.trim().is_empty()) {
        let path = module_path(root, module);
        if path.is_file() {
            return Ok(SettingsLookup::Found(path));
        }
        tracing::debug!(module, path = %path.display(), "settings module not found under root");
    }

    let mut candidates = Vec::new();
    let entries = fs::read_dir(root).map_err(|e| Error::read(root, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::read(root, e))?;
        let candidate = entry.path().join("settings.py");
        if candidate.is_file() {
            candidates.push(candidate);
        }
    }
    candidates.sort();

    match candidates.len() {
        0 => Err(Error::settings(format!(
            "no settings.py found under '{}'",
            root.display()
        ))),
        1 => Ok(SettingsLookup::Found(candidates.remove(0))),
        _ => Ok(SettingsLookup::Candidates(candidates)),
    }
}

/// `mysite.settings` -> `<root>/mysite/settings.py`
fn module_path(root: &Path, module: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    let mut segments = module.trim().split('.').peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_some() {
            path.push(segment);
        } else {
            path.push(format!("{segment}.py"));
        }
    }
    path
}

/// The `AppConfig` subclass declared in an `apps.py`, if any.
pub fn app_config_class(apps_py: &str) -> Option<&str> {
    APP_CONFIG
        .captures(apps_py)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The `INSTALLED_APPS` entry for an app (unquoted).
///
/// `shop.apps.ShopConfig` when `apps.py` declares an `AppConfig`
/// subclass, plain `shop` otherwise.
pub fn app_entry(app: &App) -> Result<String> {
    let apps_py = SourceFile::open(app.file("apps.py"))?;
    let entry = match app_config_class(apps_py.content()) {
        Some(class) => format!("{}.apps.{}", app.name(), class),
        None => app.name().to_string(),
    };
    Ok(entry)
}

/// Add `entry` to `INSTALLED_APPS`.
///
/// The app counts as registered when either its config path or its bare
/// module name is listed, in single or double quotes.
pub fn register_app(document: &str, app_name: &str, entry: &str) -> Patched {
    let target = CollectionTarget::new(INSTALLED_APPS);
    let Some(span) = target.find_span(document) else {
        return Patched::unchanged(document, Outcome::NotFound);
    };

    let inner = span.inner(document);
    let registered = [entry, app_name]
        .iter()
        .any(|name| inner.contains(&format!("'{name}'")) || inner.contains(&format!("\"{name}\"")));
    if registered {
        tracing::debug!(entry, "app already installed");
        return Patched::unchanged(document, Outcome::AlreadyPresent);
    }

    insert_element(document, &target, &format!("'{entry}'"))
}
