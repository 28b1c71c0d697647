//! The hero-banner block: full-width banner with background image,
//! title, subtitle, description and call-to-action links.
//!
//! Fields are selected semantically (`picture`, `h1`, `h2`, link
//! paragraphs) rather than by row position, so reordered authoring
//! rows do not break extraction.

use std::fmt::Write;

use deco_dom::{Fragment, Node, escape_html};

use crate::decorator::{DecorateError, Decorator, RenderContext};

/// Named fields extracted from a hero-banner fragment.
#[derive(Debug, Clone, Default)]
pub(crate) struct HeroInput {
    /// Background `picture` element, serialized as authored.
    pub background: Option<String>,
    /// Title content (`h1` inner HTML).
    pub title: Option<String>,
    /// Subtitle content (`h2` inner HTML).
    pub subtitle: Option<String>,
    /// Description paragraphs, link labels stripped.
    pub description: Vec<String>,
    /// Call-to-action links as `(href, label)`.
    pub ctas: Vec<(String, String)>,
}

impl HeroInput {
    pub(crate) fn from_fragment(fragment: &Fragment) -> Result<Self, DecorateError> {
        let block = fragment.block()?;
        let mut input = Self {
            background: block.find("picture").map(Node::outer_html),
            title: block.find("h1").map(Node::inner_html),
            subtitle: block.find("h2").map(Node::inner_html),
            ..Self::default()
        };

        for paragraph in block.find_all("p") {
            let text = paragraph.text_content_excluding("a");
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if !text.is_empty() {
                input.description.push(text);
            }
        }

        for link in block.find_all("a") {
            let Some(href) = link.attr("href") else {
                continue;
            };
            let label = link.text_content().trim().to_owned();
            input.ctas.push((href.to_owned(), label));
        }

        Ok(input)
    }
}

/// Decorator for the `hero-banner` block.
pub struct HeroBannerBlock;

impl Decorator for HeroBannerBlock {
    fn name(&self) -> &'static str {
        "hero-banner"
    }

    fn decorate(
        &self,
        fragment: &Fragment,
        _ctx: &RenderContext<'_>,
    ) -> Result<String, DecorateError> {
        let input = HeroInput::from_fragment(fragment)?;
        tracing::debug!(
            has_background = input.background.is_some(),
            cta_count = input.ctas.len(),
            "Building hero banner"
        );

        let mut out = String::with_capacity(1024);
        if let Some(background) = &input.background {
            write!(out, r#"<div class="hero-banner-background">{background}</div>"#).unwrap();
        }

        out.push_str(r#"<div class="hero-banner-content"><div class="hero-banner-text">"#);
        if let Some(title) = &input.title {
            write!(out, r#"<h1 class="hero-banner-title">{title}</h1>"#).unwrap();
        }
        if let Some(subtitle) = &input.subtitle {
            write!(out, r#"<h2 class="hero-banner-subtitle">{subtitle}</h2>"#).unwrap();
        }

        if !input.description.is_empty() {
            out.push_str(r#"<div class="hero-banner-description">"#);
            for paragraph in &input.description {
                write!(out, "<p>{}</p>", escape_html(paragraph)).unwrap();
            }
            out.push_str("</div>");
        }

        if !input.ctas.is_empty() {
            out.push_str(r#"<div class="hero-banner-cta">"#);
            for (index, (href, label)) in input.ctas.iter().enumerate() {
                let variant = if index == 0 { "primary" } else { "secondary" };
                write!(
                    out,
                    r#"<a class="hero-banner-button {variant}" href="{}">{}</a>"#,
                    escape_html(href),
                    escape_html(label),
                )
                .unwrap();
            }
            out.push_str("</div>");
        }

        out.push_str("</div></div>");
        Ok(out)
    }
}
