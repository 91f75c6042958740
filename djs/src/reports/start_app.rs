//! Start-app command report data structures.

use std::path::PathBuf;

use djscaffold_core::WriteResult;
use djscaffold_patch::Outcome;

use super::output::{Output, Report};

/// Report data from starting an app.
#[derive(Debug)]
pub struct StartAppReport {
    /// App module name.
    pub app: String,

    /// Skeleton files, relative to the project root.
    pub files: Vec<(PathBuf, WriteResult)>,

    /// Registration in the settings module.
    pub settings: SettingsRegistration,
}

/// The `INSTALLED_APPS` entry added for the app.
#[derive(Debug)]
pub struct SettingsRegistration {
    /// Settings file, relative to the project root.
    pub path: PathBuf,
    /// Entry without quotes, e.g. `shop.apps.ShopConfig`.
    pub entry: String,
    pub outcome: Outcome,
}

impl Report for StartAppReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&format!("App '{}'", self.app));
        for (path, result) in &self.files {
            match result {
                WriteResult::Written => out.added_item(&path.display().to_string()),
                WriteResult::Unchanged | WriteResult::Skipped => {
                    out.skipped_item(&format!("{} (exists)", path.display()))
                }
            }
        }
        out.newline();

        let settings = &self.settings;
        let path = settings.path.display();
        match &settings.outcome {
            Outcome::Inserted => out.key_value(
                "Installed",
                &format!("'{}' in {}", settings.entry, path),
            ),
            Outcome::AlreadyPresent => out.key_value(
                "Already installed",
                &format!("'{}' in {}", settings.entry, path),
            ),
            Outcome::Ambiguous { reason } => out.warning(&format!("{}: {}", path, reason)),
            Outcome::NotFound => out.warning(&format!("{}: no INSTALLED_APPS", path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let report = StartAppReport {
            app: "shop".to_string(),
            files: vec![
                (PathBuf::from("shop/__init__.py"), WriteResult::Written),
                (PathBuf::from("shop/models.py"), WriteResult::Skipped),
            ],
            settings: SettingsRegistration {
                path: PathBuf::from("mysite/settings.py"),
                entry: "shop.apps.ShopConfig".to_string(),
                outcome: Outcome::Inserted,
            },
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.text, @r"
App 'shop':
  + shop/__init__.py
  = shop/models.py (exists)

Installed: 'shop.apps.ShopConfig' in mysite/settings.py
");
    }
}
