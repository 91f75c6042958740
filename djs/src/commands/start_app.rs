use std::{
    io::IsTerminal,
    path::{Path, PathBuf},
};

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use djscaffold_codegen::{App, SettingsLookup, find_settings};
use djscaffold_core::{Config, Error};
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops::{self, start_app::StartAppOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct StartAppCommand {
    /// App module name, e.g. `shop` or `apps.shop`
    pub name: String,

    /// Project root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Settings file to install the app in, relative to the root
    #[arg(short, long)]
    pub settings: Option<PathBuf>,
}

impl StartAppCommand {
    pub fn run(&self) -> Result<()> {
        if !App::is_valid_name(&self.name) {
            eyre::bail!("'{}' is not a valid Python module name", self.name);
        }
        let config = Config::load(&self.root).unwrap_or_exit();

        let explicit = self
            .settings
            .as_deref()
            .or(config.project.settings.as_deref());
        let module = std::env::var("DJANGO_SETTINGS_MODULE").ok();
        let lookup = find_settings(&self.root, explicit, module.as_deref()).unwrap_or_exit();
        let settings = match lookup {
            SettingsLookup::Found(path) => path,
            SettingsLookup::Candidates(candidates) if std::io::stdin().is_terminal() => {
                Self::prompt_settings(&self.root, candidates)?
            }
            SettingsLookup::Candidates(candidates) => {
                let listed = candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                let ambiguous: djscaffold_core::Result<PathBuf> = Err(Error::settings(format!(
                    "found several settings files: {listed}"
                )));
                ambiguous.unwrap_or_exit()
            }
        };
        tracing::debug!(path = %settings.display(), "installing into settings file");

        let report = ops::start_app(StartAppOptions {
            root: &self.root,
            name: &self.name,
            settings: &settings,
        })
        .unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn prompt_settings(root: &Path, mut candidates: Vec<PathBuf>) -> Result<PathBuf> {
        let labels: Vec<String> = candidates
            .iter()
            .map(|p| p.strip_prefix(root).unwrap_or(p).display().to_string())
            .collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select the settings file")
            .items(&labels)
            .default(0)
            .interact()
            .wrap_err("Failed to get settings selection")?;

        Ok(candidates.swap_remove(selection))
    }
}
