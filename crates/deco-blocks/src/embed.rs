//! The embed block: external content from various platforms.

use std::fmt::Write;

use deco_dom::Fragment;
use deco_embed::{resolve, script_tag};

use crate::decorator::{DecorateError, Decorator, RenderContext, first_row_input};

/// Named input for the embed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EmbedInput {
    /// URL or bare handle to embed.
    pub url: String,
}

impl EmbedInput {
    pub(crate) fn from_fragment(fragment: &Fragment) -> Result<Self, DecorateError> {
        first_row_input(fragment)
            .map(|url| Self { url })
            .ok_or_else(|| DecorateError::UnresolvableInput("no embed URL provided".to_owned()))
    }
}

/// Decorator for the `embed` block.
///
/// Resolves the authored URL to a provider and wraps the provider
/// markup in `embed-wrapper embed-<kind>`. Scripted providers get
/// their widget script tag on first use.
pub struct EmbedBlock;

impl Decorator for EmbedBlock {
    fn name(&self) -> &'static str {
        "embed"
    }

    fn decorate(
        &self,
        fragment: &Fragment,
        ctx: &RenderContext<'_>,
    ) -> Result<String, DecorateError> {
        let input = EmbedInput::from_fragment(fragment)?;
        let resolved = resolve(&input.url);
        tracing::debug!(kind = resolved.kind.as_str(), "Resolved embed provider");

        let mut out = String::with_capacity(512);
        write!(
            out,
            r#"<div class="embed-wrapper embed-{}">"#,
            resolved.kind.as_str()
        )
        .unwrap();
        out.push_str(&resolved.to_html(&ctx.embed_style));
        if let Some(src) = ctx.scripts.request(resolved.kind) {
            out.push_str(&script_tag(src));
        }
        out.push_str("</div>");
        Ok(out)
    }
}
