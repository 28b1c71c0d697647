//! Provider-specific embed markup.
//!
//! Builds the iframe/anchor markup each provider needs, mirroring the
//! attributes the platform widgets expect. All interpolated values go
//! through [`escape_html`].

use std::fmt::Write;

use deco_dom::escape_html;

use crate::provider::{ProviderKind, ResolvedEmbed};

/// Sizing options for iframe-based embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedStyle {
    /// Maximum width of Instagram iframes, in pixels.
    pub max_width: u32,
    /// Minimum height of Instagram iframes, in pixels.
    pub min_height: u32,
    /// YouTube iframe width, in pixels.
    pub youtube_width: u32,
    /// YouTube iframe height, in pixels.
    pub youtube_height: u32,
    /// Minimum height of generic iframes, in pixels.
    pub generic_min_height: u32,
    /// Whether iframes carry `loading="lazy"`.
    pub lazy_loading: bool,
}

impl Default for EmbedStyle {
    fn default() -> Self {
        Self {
            max_width: 540,
            min_height: 600,
            youtube_width: 560,
            youtube_height: 315,
            generic_min_height: 400,
            lazy_loading: true,
        }
    }
}

/// Options for the Twitter timeline widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStyle {
    /// Widget height in pixels (`data-height`).
    pub height: u32,
    /// Widget chrome flags (`data-chrome`).
    pub chrome: String,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            height: 600,
            chrome: "noheader nofooter noborders".to_owned(),
        }
    }
}

impl ResolvedEmbed {
    /// Build the provider-specific embed markup.
    ///
    /// Iframe providers embed `render_target` as the frame source;
    /// Twitter produces the tweet blockquote the platform widget
    /// hydrates.
    #[must_use]
    pub fn to_html(&self, style: &EmbedStyle) -> String {
        match self.kind {
            ProviderKind::Instagram => instagram_iframe(&self.render_target, style),
            ProviderKind::YouTube => youtube_iframe(&self.render_target, style),
            ProviderKind::Twitter => tweet_blockquote(&self.render_target),
            ProviderKind::Generic => generic_iframe(&self.render_target, style),
        }
    }
}

fn instagram_iframe(src: &str, style: &EmbedStyle) -> String {
    let mut out = String::with_capacity(256);
    write!(
        out,
        r#"<iframe class="instagram-embed" src="{}" style="width:100%;max-width:{}px;min-height:{}px;border:none;overflow:hidden" scrolling="no" frameborder="0"{} title="Instagram Post"></iframe>"#,
        escape_html(src),
        style.max_width,
        style.min_height,
        lazy_attr(style),
    )
    .unwrap();
    out
}

fn youtube_iframe(src: &str, style: &EmbedStyle) -> String {
    let mut out = String::with_capacity(256);
    write!(
        out,
        r#"<iframe class="youtube-embed" src="{}" width="{}" height="{}" frameborder="0"{} allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen title="YouTube Video"></iframe>"#,
        escape_html(src),
        style.youtube_width,
        style.youtube_height,
        lazy_attr(style),
    )
    .unwrap();
    out
}

fn generic_iframe(src: &str, style: &EmbedStyle) -> String {
    let mut out = String::with_capacity(192);
    write!(
        out,
        r#"<iframe class="generic-embed" src="{}" style="width:100%;min-height:{}px;border:none"{} title="Embedded Content"></iframe>"#,
        escape_html(src),
        style.generic_min_height,
        lazy_attr(style),
    )
    .unwrap();
    out
}

/// Tweet blockquote for the embed block; `handle` is the normalized
/// Twitter handle from resolution.
fn tweet_blockquote(handle: &str) -> String {
    format!(
        r#"<blockquote class="twitter-tweet"><a href="https://twitter.com/{}"></a></blockquote>"#,
        escape_html(handle),
    )
}

/// Timeline anchor for the twitter block, hydrated by widgets.js.
#[must_use]
pub fn timeline_html(handle: &str, style: &TimelineStyle) -> String {
    let handle = escape_html(handle);
    format!(
        r#"<a class="twitter-timeline" href="https://twitter.com/{}" data-height="{}" data-chrome="{}">Tweets by @{}</a>"#,
        handle,
        style.height,
        escape_html(&style.chrome),
        handle,
    )
}

/// Async script tag for a provider widget script.
#[must_use]
pub fn script_tag(src: &str) -> String {
    format!(r#"<script src="{}" async charset="utf-8"></script>"#, escape_html(src))
}

fn lazy_attr(style: &EmbedStyle) -> &'static str {
    if style.lazy_loading { r#" loading="lazy""# } else { "" }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::provider::resolve;

    #[test]
    fn youtube_markup_uses_embed_url() {
        let embed = resolve("https://youtu.be/abc123");
        let html = embed.to_html(&EmbedStyle::default());
        assert!(html.contains(r#"src="https://www.youtube.com/embed/abc123""#));
        assert!(html.contains(r#"width="560" height="315""#));
        assert!(html.contains("allowfullscreen"));
        assert!(html.contains(r#"loading="lazy""#));
    }

    #[test]
    fn instagram_markup_has_sizing() {
        let embed = resolve("https://instagram.com/p/abc");
        let html = embed.to_html(&EmbedStyle::default());
        assert!(html.contains("max-width:540px"));
        assert!(html.contains("min-height:600px"));
        assert!(html.contains(r#"scrolling="no""#));
    }

    #[test]
    fn twitter_markup_is_a_blockquote() {
        let embed = resolve("https://twitter.com/someuser");
        let html = embed.to_html(&EmbedStyle::default());
        assert_eq!(
            html,
            r#"<blockquote class="twitter-tweet"><a href="https://twitter.com/someuser"></a></blockquote>"#
        );
    }

    #[test]
    fn generic_markup_escapes_source() {
        let embed = resolve(r#"https://example.com/a?b="c""#);
        let html = embed.to_html(&EmbedStyle::default());
        assert!(html.contains("&quot;c&quot;"));
        assert!(!html.contains(r#"b="c""#));
    }

    #[test]
    fn lazy_loading_can_be_disabled() {
        let style = EmbedStyle {
            lazy_loading: false,
            ..EmbedStyle::default()
        };
        let embed = resolve("https://example.com/x");
        assert!(!embed.to_html(&style).contains("loading"));
    }

    #[test]
    fn timeline_markup() {
        let html = timeline_html("someuser", &TimelineStyle::default());
        assert_eq!(
            html,
            r#"<a class="twitter-timeline" href="https://twitter.com/someuser" data-height="600" data-chrome="noheader nofooter noborders">Tweets by @someuser</a>"#
        );
    }

    #[test]
    fn script_tag_is_async() {
        assert_eq!(
            script_tag("https://platform.twitter.com/widgets.js"),
            r#"<script src="https://platform.twitter.com/widgets.js" async charset="utf-8"></script>"#
        );
    }
}
