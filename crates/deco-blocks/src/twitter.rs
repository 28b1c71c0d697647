//! The twitter block: a profile timeline widget.

use deco_dom::Fragment;
use deco_embed::{ProviderKind, resolve, script_tag, timeline_html};

use crate::decorator::{DecorateError, Decorator, RenderContext, first_row_input};

/// Named input for the twitter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TwitterInput {
    /// Profile URL, `@handle` or bare handle.
    pub source: String,
}

impl TwitterInput {
    pub(crate) fn from_fragment(fragment: &Fragment) -> Result<Self, DecorateError> {
        first_row_input(fragment)
            .map(|source| Self { source })
            .ok_or_else(|| {
                DecorateError::UnresolvableInput("no Twitter profile specified".to_owned())
            })
    }
}

/// Decorator for the `twitter` block.
///
/// Accepts profile URLs, `@handle` and bare handles; anything that
/// resolves to a provider other than Twitter is not a usable profile.
pub struct TwitterBlock;

impl Decorator for TwitterBlock {
    fn name(&self) -> &'static str {
        "twitter"
    }

    fn decorate(
        &self,
        fragment: &Fragment,
        ctx: &RenderContext<'_>,
    ) -> Result<String, DecorateError> {
        let input = TwitterInput::from_fragment(fragment)?;
        let resolved = resolve(&input.source);
        if resolved.kind != ProviderKind::Twitter || resolved.render_target.is_empty() {
            return Err(DecorateError::UnresolvableInput(format!(
                "invalid Twitter profile or URL: {}",
                input.source
            )));
        }
        let handle = resolved.render_target;
        tracing::debug!(handle = %handle, "Building Twitter timeline");

        let mut out = String::with_capacity(384);
        out.push_str(r#"<div class="twitter-timeline-wrapper">"#);
        out.push_str(&timeline_html(&handle, &ctx.timeline_style));
        if let Some(src) = ctx.scripts.request(ProviderKind::Twitter) {
            out.push_str(&script_tag(src));
        }
        out.push_str("</div>");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use deco_embed::ScriptRegistry;
    use pretty_assertions::assert_eq;

    use super::*;

    fn decorate(html: &str, scripts: &ScriptRegistry) -> Result<String, DecorateError> {
        let ctx = RenderContext::new(scripts);
        let fragment = Fragment::parse(html).unwrap();
        TwitterBlock.decorate(&fragment, &ctx)
    }

    #[test]
    fn profile_url() {
        let scripts = ScriptRegistry::new();
        let html = decorate(
            r#"<div class="twitter"><div><a href="https://twitter.com/someuser">profile</a></div></div>"#,
            &scripts,
        )
        .unwrap();
        assert!(html.starts_with(r#"<div class="twitter-timeline-wrapper">"#));
        assert!(html.contains(r#"href="https://twitter.com/someuser""#));
        assert!(html.contains("Tweets by @someuser"));
        assert!(html.contains("widgets.js"));
    }

    #[test]
    fn bare_handle() {
        let scripts = ScriptRegistry::new();
        let html = decorate(r#"<div class="twitter"><div>@someuser</div></div>"#, &scripts).unwrap();
        assert!(html.contains("Tweets by @someuser"));
    }

    #[test]
    fn widgets_script_emitted_once_across_blocks() {
        let scripts = ScriptRegistry::new();
        let first = decorate(r#"<div class="twitter"><div>@a</div></div>"#, &scripts).unwrap();
        let second = decorate(r#"<div class="twitter"><div>@b</div></div>"#, &scripts).unwrap();
        assert!(first.contains("<script"));
        assert!(!second.contains("<script"));
    }

    #[test]
    fn non_twitter_url_is_unresolvable() {
        let scripts = ScriptRegistry::new();
        let err = decorate(
            r#"<div class="twitter"><div>https://example.com/user</div></div>"#,
            &scripts,
        )
        .unwrap_err();
        assert!(matches!(err, DecorateError::UnresolvableInput(_)));
    }

    #[test]
    fn empty_block_is_unresolvable() {
        let scripts = ScriptRegistry::new();
        let err = decorate(r#"<div class="twitter"><div> </div></div>"#, &scripts).unwrap_err();
        assert_eq!(err.to_string(), "no Twitter profile specified");
    }

    #[test]
    fn timeline_height_follows_context() {
        let scripts = ScriptRegistry::new();
        let mut ctx = RenderContext::new(&scripts);
        ctx.timeline_style.height = 400;
        let fragment =
            Fragment::parse(r#"<div class="twitter"><div>@someuser</div></div>"#).unwrap();
        let html = TwitterBlock.decorate(&fragment, &ctx).unwrap();
        assert!(html.contains(r#"data-height="400""#));
    }
}
