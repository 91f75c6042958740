mod case;
mod completions;
mod create;
mod start_app;

use case::CaseCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use create::CreateCommand;
use eyre::Result;
use start_app::StartAppCommand;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for djscaffold_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "djs")]
#[command(version)]
#[command(about = "Scaffold Django REST Framework models, serializers, viewsets and routes")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Create(cmd) => cmd.run(),
            Commands::StartApp(cmd) => cmd.run(),
            Commands::Case(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a model, serializer, viewset, factory, admin and route in an app
    Create(CreateCommand),

    /// Create a new app and add it to INSTALLED_APPS
    StartApp(StartAppCommand),

    /// Show a name in every naming convention
    Case(CaseCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_start_app_is_kebab_case() {
        let cli = Cli::try_parse_from(["djs", "start-app", "shop"]).unwrap();
        assert!(matches!(cli.command, Commands::StartApp(_)));
    }
}
