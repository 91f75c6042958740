use std::path::PathBuf;

use clap::Args;
use djscaffold_codegen::EntityNames;
use djscaffold_core::{Config, RouterKind};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, create::CreateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CreateCommand {
    /// App to generate into, e.g. `shop` or `apps.shop`
    pub app: String,

    /// Model name in any case, e.g. `order_item` or `OrderItem`
    pub model: String,

    /// Project root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Router class for a new urls.py (overrides djscaffold.toml)
    #[arg(long, value_enum)]
    pub router: Option<RouterKind>,

    /// Skip factories.py
    #[arg(long)]
    pub no_factory: bool,

    /// Skip admin.py
    #[arg(long)]
    pub no_admin: bool,

    /// Preview changes without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl CreateCommand {
    pub fn run(&self) -> Result<()> {
        let Some(names) = EntityNames::new(&self.model) else {
            eyre::bail!("'{}' is not a valid model name", self.model);
        };
        let config = Config::load(&self.root).unwrap_or_exit();

        let mut toggles = config.artifacts;
        toggles.factory &= !self.no_factory;
        toggles.admin &= !self.no_admin;

        let report = ops::create(CreateOptions {
            root: &self.root,
            app: &self.app,
            names,
            router: self.router.unwrap_or(config.router.kind),
            toggles,
            dry_run: self.dry_run,
        })
        .unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
