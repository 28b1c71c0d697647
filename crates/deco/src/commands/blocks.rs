//! `deco blocks` command implementation.

use clap::Args;
use deco_blocks::BlockRegistry;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the blocks command.
#[derive(Args)]
pub(crate) struct BlocksArgs;

impl BlocksArgs {
    /// Execute the blocks command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let registry = BlockRegistry::with_defaults();

        output.highlight("Registered block decorators:");
        for name in registry.names() {
            output.info(&format!("  {name}"));
        }
        Ok(())
    }
}
