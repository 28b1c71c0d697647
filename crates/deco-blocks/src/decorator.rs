//! The decorator seam: trait, render context, errors.

use deco_config::Config;
use deco_dom::{DomError, Fragment, escape_html};
use deco_embed::{EmbedStyle, ScriptRegistry, TimelineStyle};

/// Error while decorating a block.
#[derive(Debug, thiserror::Error)]
pub enum DecorateError {
    /// The block carries no usable input (empty or missing URL field).
    ///
    /// This is the one caller-visible failure class: everything else
    /// irregular degrades to the generic provider instead of erroring.
    #[error("{0}")]
    UnresolvableInput(String),

    /// Fragment parsing or traversal error.
    #[error(transparent)]
    Dom(#[from] DomError),

    /// No decorator registered under this name.
    #[error("unknown block kind: {0}")]
    UnknownBlock(String),
}

/// Shared state a decorator renders against.
pub struct RenderContext<'a> {
    /// Iframe sizing options.
    pub embed_style: EmbedStyle,
    /// Twitter timeline options.
    pub timeline_style: TimelineStyle,
    /// Load-once capability for provider widget scripts.
    pub scripts: &'a ScriptRegistry,
}

impl<'a> RenderContext<'a> {
    /// Context with default styles.
    #[must_use]
    pub fn new(scripts: &'a ScriptRegistry) -> Self {
        Self {
            embed_style: EmbedStyle::default(),
            timeline_style: TimelineStyle::default(),
            scripts,
        }
    }

    /// Context with styles taken from configuration.
    #[must_use]
    pub fn from_config(config: &Config, scripts: &'a ScriptRegistry) -> Self {
        Self {
            embed_style: EmbedStyle {
                max_width: config.embed.max_width,
                min_height: config.embed.min_height,
                youtube_width: config.embed.youtube_width,
                youtube_height: config.embed.youtube_height,
                generic_min_height: config.embed.generic_min_height,
                lazy_loading: config.embed.lazy_loading,
            },
            timeline_style: TimelineStyle {
                height: config.twitter.timeline_height,
                chrome: config.twitter.chrome.clone(),
            },
            scripts,
        }
    }
}

/// A block decorator: rewrites one authored fragment kind into its
/// final markup.
pub trait Decorator {
    /// Block name as authored (the class the page builder emits).
    fn name(&self) -> &'static str;

    /// Decorate a parsed fragment into final markup.
    ///
    /// # Errors
    ///
    /// Returns [`DecorateError::UnresolvableInput`] when the block's
    /// input field is empty or missing; DOM errors pass through.
    fn decorate(
        &self,
        fragment: &Fragment,
        ctx: &RenderContext<'_>,
    ) -> Result<String, DecorateError>;
}

/// Plain-text fallback markup for a failed decoration.
///
/// The page must still render when an embed cannot be built, so
/// callers map [`DecorateError`] to this instead of dropping the
/// block.
#[must_use]
pub fn render_fallback(message: &str) -> String {
    format!(r#"<p class="block-fallback">{}</p>"#, escape_html(message))
}

/// Extract the URL-or-handle input from the first field row.
///
/// The authoring tool writes the value either as a link or as plain
/// text; a link's `href` wins over the row text.
pub(crate) fn first_row_input(fragment: &Fragment) -> Option<String> {
    let row = fragment.rows().first()?;
    let value = row
        .find("a")
        .and_then(|link| link.attr("href"))
        .map_or_else(|| row.text_content().trim().to_owned(), str::to_owned);
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fallback_escapes_message() {
        assert_eq!(
            render_fallback("Unable to load <embed>"),
            r#"<p class="block-fallback">Unable to load &lt;embed&gt;</p>"#
        );
    }

    #[test]
    fn first_row_prefers_link_href() {
        let fragment = Fragment::parse(
            r#"<div class="embed"><div><a href="https://youtu.be/x">watch this</a></div></div>"#,
        )
        .unwrap();
        assert_eq!(first_row_input(&fragment).as_deref(), Some("https://youtu.be/x"));
    }

    #[test]
    fn first_row_falls_back_to_text() {
        let fragment =
            Fragment::parse(r#"<div class="embed"><div>  @someuser  </div></div>"#).unwrap();
        assert_eq!(first_row_input(&fragment).as_deref(), Some("@someuser"));
    }

    #[test]
    fn empty_row_yields_none() {
        let fragment = Fragment::parse(r#"<div class="embed"><div>   </div></div>"#).unwrap();
        assert_eq!(first_row_input(&fragment), None);
    }

    #[test]
    fn missing_rows_yield_none() {
        let fragment = Fragment::parse(r#"<div class="embed"></div>"#).unwrap();
        assert_eq!(first_row_input(&fragment), None);
    }
}
