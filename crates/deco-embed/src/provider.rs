//! URL-to-provider classification.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::url::{first_segment, query_param, split_url};

/// Instagram post/reel path: `/p/<id>` or `/reel/<id>`.
static INSTAGRAM_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(p|reel)/([a-zA-Z0-9_-]+)").expect("invalid instagram regex"));

/// Characters allowed in a Twitter handle.
static HANDLE_INVALID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_]").expect("invalid handle regex"));

/// Embed provider an input string classifies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Instagram post or reel, rendered via iframe.
    Instagram,
    /// YouTube video, rendered via iframe.
    YouTube,
    /// Twitter/X profile or tweet, rendered via platform widget.
    Twitter,
    /// Anything else, rendered as a plain iframe.
    Generic,
}

impl ProviderKind {
    /// Provider name as used in CSS classes and wire formats.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::YouTube => "youtube",
            Self::Twitter => "twitter",
            Self::Generic => "generic",
        }
    }
}

/// Result of classifying an input string.
///
/// `render_target` is a direct embeddable URL for iframe providers
/// (Instagram, YouTube, Generic) and a normalized handle for Twitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEmbed {
    /// Provider the input classified into.
    pub kind: ProviderKind,
    /// Embeddable URL or normalized handle.
    pub render_target: String,
}

impl ResolvedEmbed {
    fn new(kind: ProviderKind, render_target: impl Into<String>) -> Self {
        Self {
            kind,
            render_target: render_target.into(),
        }
    }
}

/// Classify an input string into an embed provider.
///
/// Ordered, first match wins:
/// 1. inputs that do not split as a URL are bare handles (Twitter) or
///    generic targets;
/// 2. `instagram.com` post/reel paths;
/// 3. `youtube.com` / `youtu.be` video ids;
/// 4. `twitter.com` / `x.com` profile handles;
/// 5. everything else is generic, embedded as-is.
///
/// Pure and total for non-empty input: malformed URLs degrade to the
/// generic or bare-handle paths, never to an error. Callers must
/// short-circuit empty input before resolving.
#[must_use]
pub fn resolve(input: &str) -> ResolvedEmbed {
    let input = input.trim();

    let Some(url) = split_url(input) else {
        return resolve_unparsed(input);
    };

    if url.host.contains("instagram.com") {
        if let Some(caps) = INSTAGRAM_PATH.captures(url.path) {
            let target = format!("https://www.instagram.com/{}/{}/embed", &caps[1], &caps[2]);
            return ResolvedEmbed::new(ProviderKind::Instagram, target);
        }
    }

    if url.host.contains("youtube.com") || url.host.contains("youtu.be") {
        let video_id = if url.host.contains("youtu.be") {
            first_segment(url.path)
        } else {
            query_param(url.query, "v")
        };
        if let Some(id) = video_id.filter(|id| !id.is_empty()) {
            let target = format!("https://www.youtube.com/embed/{id}");
            return ResolvedEmbed::new(ProviderKind::YouTube, target);
        }
    }

    if url.host.contains("twitter.com") || url.host.contains("x.com") {
        if let Some(handle) = first_segment(url.path) {
            return ResolvedEmbed::new(ProviderKind::Twitter, handle);
        }
    }

    tracing::debug!(input, "No provider pattern matched, using generic embed");
    ResolvedEmbed::new(ProviderKind::Generic, input)
}

/// Classify input that did not split as a URL.
///
/// Strings without `/` and `.` are bare Twitter handles; a leading `@`
/// is stripped, otherwise all characters outside `[A-Za-z0-9_]` are.
fn resolve_unparsed(input: &str) -> ResolvedEmbed {
    if !input.contains('/') && !input.contains('.') {
        let handle = input.strip_prefix('@').map_or_else(
            || HANDLE_INVALID.replace_all(input, "").into_owned(),
            str::to_owned,
        );
        return ResolvedEmbed::new(ProviderKind::Twitter, handle);
    }
    ResolvedEmbed::new(ProviderKind::Generic, input)
}
