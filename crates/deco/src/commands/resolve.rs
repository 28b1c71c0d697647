//! `deco resolve` command implementation.

use std::io::Write;

use clap::Args;
use deco_embed::resolve;

use crate::error::CliError;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// URL or bare handle to classify.
    input: String,

    /// Print the resolution as JSON.
    #[arg(long)]
    json: bool,
}

impl ResolveArgs {
    /// Execute the resolve command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        // Empty input is the one precondition resolution does not cover
        let input = self.input.trim();
        if input.is_empty() {
            return Err(CliError::Validation("input must not be empty".to_owned()));
        }

        let resolved = resolve(input);
        let mut stdout = std::io::stdout().lock();
        if self.json {
            let json = serde_json::to_string_pretty(&resolved)?;
            writeln!(stdout, "{json}")?;
        } else {
            writeln!(stdout, "kind: {}", resolved.kind.as_str())?;
            writeln!(stdout, "render_target: {}", resolved.render_target)?;
        }
        Ok(())
    }
}
