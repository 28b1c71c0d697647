//! Registry of block decorators.

use std::collections::HashMap;

use deco_dom::Fragment;

use crate::decorator::{DecorateError, Decorator, RenderContext};
use crate::embed::EmbedBlock;
use crate::hero::HeroBannerBlock;
use crate::twitter::TwitterBlock;

/// Maps block names to decorators and dispatches decoration.
pub struct BlockRegistry {
    decorators: HashMap<&'static str, Box<dyn Decorator>>,
}

impl BlockRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            decorators: HashMap::new(),
        }
    }

    /// Registry with all built-in decorators.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(EmbedBlock));
        registry.register(Box::new(TwitterBlock));
        registry.register(Box::new(HeroBannerBlock));
        registry
    }

    /// Register a decorator under its own name.
    pub fn register(&mut self, decorator: Box<dyn Decorator>) {
        let name = decorator.name();
        if self.decorators.insert(name, decorator).is_some() {
            tracing::warn!(name, "Decorator registered twice, keeping the later one");
        }
    }

    /// Keep only the named decorators.
    pub fn retain_enabled(&mut self, enabled: &[String]) {
        self.decorators
            .retain(|name, _| enabled.iter().any(|e| e.as_str() == *name));
    }

    /// Registered block names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.decorators.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Decorate a fragment with the named decorator.
    ///
    /// # Errors
    ///
    /// Returns [`DecorateError::UnknownBlock`] when no decorator is
    /// registered under `name`; decoration errors pass through.
    pub fn decorate(
        &self,
        name: &str,
        fragment: &Fragment,
        ctx: &RenderContext<'_>,
    ) -> Result<String, DecorateError> {
        let decorator = self
            .decorators
            .get(name)
            .ok_or_else(|| DecorateError::UnknownBlock(name.to_owned()))?;
        decorator.decorate(fragment, ctx)
    }

    /// Detect the block kind from the block element's class list.
    ///
    /// The page builder puts the block name first in the class
    /// attribute; any registered name in the list matches.
    #[must_use]
    pub fn detect(&self, fragment: &Fragment) -> Option<&'static str> {
        let block = fragment.block().ok()?;
        block
            .class_list()
            .into_iter()
            .find_map(|class| self.decorators.get_key_value(class).map(|(name, _)| *name))
    }

    /// Detect the block kind and decorate.
    ///
    /// # Errors
    ///
    /// Returns [`DecorateError::UnknownBlock`] when no class on the
    /// block element names a registered decorator.
    pub fn decorate_auto(
        &self,
        fragment: &Fragment,
        ctx: &RenderContext<'_>,
    ) -> Result<String, DecorateError> {
        let name = self.detect(fragment).ok_or_else(|| {
            let classes = fragment
                .block()
                .map(|b| b.class_list().join(" "))
                .unwrap_or_default();
            DecorateError::UnknownBlock(classes)
        })?;
        self.decorate(name, fragment, ctx)
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use deco_embed::ScriptRegistry;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_are_registered() {
        let registry = BlockRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["embed", "hero-banner", "twitter"]);
    }

    #[test]
    fn detect_from_class_list() {
        let registry = BlockRegistry::with_defaults();
        let fragment =
            Fragment::parse(r#"<div class="twitter block"><div>@a</div></div>"#).unwrap();
        assert_eq!(registry.detect(&fragment), Some("twitter"));
    }

    #[test]
    fn detect_unknown_is_none() {
        let registry = BlockRegistry::with_defaults();
        let fragment = Fragment::parse(r#"<div class="carousel"><div></div></div>"#).unwrap();
        assert_eq!(registry.detect(&fragment), None);
    }

    #[test]
    fn decorate_auto_dispatches() {
        let registry = BlockRegistry::with_defaults();
        let scripts = ScriptRegistry::new();
        let ctx = RenderContext::new(&scripts);
        let fragment = Fragment::parse(
            r#"<div class="embed"><div>https://youtu.be/abc</div></div>"#,
        )
        .unwrap();
        let html = registry.decorate_auto(&fragment, &ctx).unwrap();
        assert!(html.contains("embed-youtube"));
    }

    #[test]
    fn unknown_name_errors() {
        let registry = BlockRegistry::with_defaults();
        let scripts = ScriptRegistry::new();
        let ctx = RenderContext::new(&scripts);
        let fragment = Fragment::parse(r#"<div class="embed"><div>x</div></div>"#).unwrap();
        let err = registry.decorate("carousel", &fragment, &ctx).unwrap_err();
        assert!(matches!(err, DecorateError::UnknownBlock(_)));
    }

    #[test]
    fn retain_enabled_filters() {
        let mut registry = BlockRegistry::with_defaults();
        registry.retain_enabled(&["embed".to_owned()]);
        assert_eq!(registry.names(), vec!["embed"]);
    }
}
