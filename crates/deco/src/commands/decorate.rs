//! `deco decorate` command implementation.

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Args;
use deco_blocks::{BlockRegistry, DecorateError, RenderContext, render_fallback};
use deco_config::{CliSettings, Config};
use deco_dom::Fragment;
use deco_embed::global_scripts;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the decorate command.
#[derive(Args)]
pub(crate) struct DecorateArgs {
    /// Fragment file to decorate, or `-` for stdin.
    input: PathBuf,

    /// Block decorator to use (default: auto-detect from class list).
    #[arg(short, long)]
    block: Option<String>,

    /// Path to configuration file (default: auto-discover deco.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write decorated markup to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Disable lazy loading of iframes (overrides config).
    #[arg(long)]
    no_lazy: bool,

    /// Enable verbose output (show resolution and timing logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl DecorateArgs {
    /// Execute the decorate command.
    ///
    /// Decoration failures render the fallback markup so the authored
    /// page still displays; only I/O, config and unknown-block errors
    /// are hard failures.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            lazy_loading: self.no_lazy.then_some(false),
            timeline_height: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let mut registry = BlockRegistry::with_defaults();
        if let Some(enabled) = &config.blocks.enabled {
            validate_enabled(&registry, enabled)?;
            registry.retain_enabled(enabled);
        }

        let html = self.read_input()?;
        let fragment = Fragment::parse(&html)?;

        let ctx = RenderContext::from_config(&config, global_scripts());
        let started = std::time::Instant::now();
        let result = match &self.block {
            Some(name) => registry.decorate(name, &fragment, &ctx),
            None => registry.decorate_auto(&fragment, &ctx),
        };
        tracing::info!(elapsed = ?started.elapsed(), "Decoration finished");

        let markup = match result {
            Ok(markup) => markup,
            // A block that cannot be resolved still has to render
            Err(DecorateError::UnresolvableInput(reason)) => {
                output.warning(&format!("Falling back to plain text: {reason}"));
                render_fallback(&format!("Unable to load embed: {reason}"))
            }
            Err(err) => return Err(err.into()),
        };

        self.write_output(&markup)?;
        Ok(())
    }

    fn read_input(&self) -> Result<String, CliError> {
        if self.input.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        } else {
            Ok(std::fs::read_to_string(&self.input)?)
        }
    }

    fn write_output(&self, markup: &str) -> Result<(), CliError> {
        match &self.output {
            Some(path) => std::fs::write(path, markup)?,
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(markup.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}

/// Reject enabled-block names that match no registered decorator.
fn validate_enabled(registry: &BlockRegistry, enabled: &[String]) -> Result<(), CliError> {
    let names = registry.names();
    for name in enabled {
        if !names.contains(&name.as_str()) {
            return Err(CliError::Validation(format!(
                "blocks.enabled names unknown decorator: {name}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_enabled_accepts_known_names() {
        let registry = BlockRegistry::with_defaults();
        assert!(validate_enabled(&registry, &["embed".to_owned(), "twitter".to_owned()]).is_ok());
    }

    #[test]
    fn validate_enabled_rejects_unknown_names() {
        let registry = BlockRegistry::with_defaults();
        let err = validate_enabled(&registry, &["carousel".to_owned()]).unwrap_err();
        assert!(err.to_string().contains("carousel"));
    }
}
