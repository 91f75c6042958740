//! Start-app operation - write an app skeleton and install it.

use std::path::Path;

use djscaffold_codegen::{
    App, AppSkeleton, FilePatcher, app_entry, register_app, settings::INSTALLED_APPS,
};
use djscaffold_core::{Error, Result, SourceFile};
use djscaffold_patch::CollectionTarget;

use super::relative;
use crate::reports::{SettingsRegistration, StartAppReport};

/// Options for the start-app operation.
pub struct StartAppOptions<'a> {
    /// Project root.
    pub root: &'a Path,
    /// App module name.
    pub name: &'a str,
    /// Settings file the app is installed in.
    pub settings: &'a Path,
}

/// Execute the start-app operation.
///
/// The settings file is checked for `INSTALLED_APPS` before any skeleton
/// file is written.
pub fn start_app(opts: StartAppOptions) -> Result<StartAppReport> {
    let settings = SourceFile::open(opts.settings)?;
    if CollectionTarget::new(INSTALLED_APPS)
        .find_span(settings.content())
        .is_none()
    {
        return Err(Error::settings(format!(
            "no {} in '{}'",
            INSTALLED_APPS,
            opts.settings.display()
        )));
    }

    let app = App::at(opts.root, opts.name);
    let files = AppSkeleton::new(&app)
        .files()
        .iter()
        .map(|file| -> Result<_> { Ok((relative(opts.root, file.path()), file.write()?)) })
        .collect::<Result<Vec<_>>>()?;

    let entry = app_entry(&app)?;
    let change =
        FilePatcher::new().patch(opts.settings, |document| register_app(document, app.name(), &entry))?;

    Ok(StartAppReport {
        app: app.name().to_string(),
        files,
        settings: SettingsRegistration {
            path: relative(opts.root, opts.settings),
            entry,
            outcome: change.outcome,
        },
    })
}
