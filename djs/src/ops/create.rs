//! Create operation - generate one entity into an existing app.

use std::path::Path;

use djscaffold_codegen::{App, EntityNames, FilePatcher, Generator};
use djscaffold_core::{ArtifactToggles, Result, RouterKind};

use super::relative;
use crate::reports::{ArtifactResult, CreateReport};

/// Options for the create operation.
pub struct CreateOptions<'a> {
    /// Project root.
    pub root: &'a Path,
    /// App module name, e.g. `shop` or `apps.shop`.
    pub app: &'a str,
    pub names: EntityNames,
    pub router: RouterKind,
    pub toggles: ArtifactToggles,
    /// Whether to compute the changes without writing files.
    pub dry_run: bool,
}

/// Execute the create operation.
///
/// Fails before touching any file when the app does not exist.
pub fn create(opts: CreateOptions) -> Result<CreateReport> {
    let app = App::locate(opts.root, opts.app)?;
    let model = opts.names.model.clone();

    let generator = Generator::new(opts.names)
        .router(opts.router)
        .toggles(opts.toggles);
    let patcher = FilePatcher::new().dry_run(opts.dry_run);
    let changes = generator.generate(&app, &patcher)?;

    let artifacts = changes
        .into_iter()
        .map(|c| {
            let result = ArtifactResult {
                path: relative(opts.root, &c.change.path),
                message: c.message,
                outcome: c.change.outcome,
                content: c.change.content,
            };
            (c.file_name, result)
        })
        .collect();

    Ok(CreateReport {
        app: app.label().to_string(),
        model,
        dry_run: opts.dry_run,
        artifacts,
    })
}
