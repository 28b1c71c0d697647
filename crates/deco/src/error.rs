//! CLI error types.

use deco_blocks::DecorateError;
use deco_config::ConfigError;
use deco_dom::DomError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Dom(#[from] DomError),

    #[error("{0}")]
    Decorate(#[from] DecorateError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
