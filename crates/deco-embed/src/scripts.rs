//! Load-once registry for provider widget scripts.
//!
//! Instagram and Twitter embeds are hydrated by a platform script that
//! must be included at most once per page. The registry keeps one
//! atomic flag per scripted provider; concurrent decorators may race
//! to request the same script, and exactly one wins.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::provider::ProviderKind;

/// Instagram embed hydration script.
pub const INSTAGRAM_EMBED_SCRIPT: &str = "https://www.instagram.com/embed.js";

/// Twitter widgets script (tweets and timelines).
pub const TWITTER_WIDGETS_SCRIPT: &str = "https://platform.twitter.com/widgets.js";

/// One load-once flag per scripted provider.
///
/// Use [`global_scripts`] for process-wide load-once semantics, or a
/// dedicated instance when script state must be scoped to a render
/// session.
#[derive(Debug)]
pub struct ScriptRegistry {
    instagram: AtomicBool,
    twitter: AtomicBool,
}

impl ScriptRegistry {
    /// Create a registry with no scripts granted yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            instagram: AtomicBool::new(false),
            twitter: AtomicBool::new(false),
        }
    }

    /// Request the widget script for a provider.
    ///
    /// Returns the script URL the first time it is requested and
    /// `None` on every later call. Providers without a widget script
    /// always return `None`.
    pub fn request(&self, kind: ProviderKind) -> Option<&'static str> {
        let (flag, url) = match kind {
            ProviderKind::Instagram => (&self.instagram, INSTAGRAM_EMBED_SCRIPT),
            ProviderKind::Twitter => (&self.twitter, TWITTER_WIDGETS_SCRIPT),
            ProviderKind::YouTube | ProviderKind::Generic => return None,
        };
        (!flag.swap(true, Ordering::SeqCst)).then_some(url)
    }

    /// Whether a provider's script has already been granted.
    #[must_use]
    pub fn is_loaded(&self, kind: ProviderKind) -> bool {
        match kind {
            ProviderKind::Instagram => self.instagram.load(Ordering::SeqCst),
            ProviderKind::Twitter => self.twitter.load(Ordering::SeqCst),
            ProviderKind::YouTube | ProviderKind::Generic => false,
        }
    }
}

impl Default for ScriptRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide registry.
static GLOBAL: ScriptRegistry = ScriptRegistry::new();

/// The process-wide script registry.
#[must_use]
pub fn global_scripts() -> &'static ScriptRegistry {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn grants_script_exactly_once() {
        let registry = ScriptRegistry::new();
        assert_eq!(
            registry.request(ProviderKind::Twitter),
            Some(TWITTER_WIDGETS_SCRIPT)
        );
        assert_eq!(registry.request(ProviderKind::Twitter), None);
        assert!(registry.is_loaded(ProviderKind::Twitter));
    }

    #[test]
    fn providers_are_tracked_independently() {
        let registry = ScriptRegistry::new();
        assert!(registry.request(ProviderKind::Twitter).is_some());
        assert!(!registry.is_loaded(ProviderKind::Instagram));
        assert!(registry.request(ProviderKind::Instagram).is_some());
    }

    #[test]
    fn unscripted_providers_get_nothing() {
        let registry = ScriptRegistry::new();
        assert_eq!(registry.request(ProviderKind::YouTube), None);
        assert_eq!(registry.request(ProviderKind::Generic), None);
        assert!(!registry.is_loaded(ProviderKind::YouTube));
    }

    #[test]
    fn concurrent_requests_admit_one_winner() {
        let registry = ScriptRegistry::new();
        let granted = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.request(ProviderKind::Instagram)))
                .collect();
            handles
                .into_iter()
                .filter_map(|handle| handle.join().unwrap())
                .count()
        });
        assert_eq!(granted, 1);
    }
}
