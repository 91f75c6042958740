use clap::Args;
use djscaffold_core::Case;
use eyre::{Context, Result};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CaseCommand {
    /// Name to convert, e.g. `order_item` or `XMLHttpRequest`
    pub input: String,

    /// Only print this case
    #[arg(short, long, value_enum)]
    pub to: Option<Case>,

    /// Print the variants as a JSON object
    #[arg(long)]
    pub json: bool,
}

impl CaseCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::case(&self.input, self.to);

        if self.json {
            let json = report.to_json().wrap_err("Failed to serialize case variants")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
