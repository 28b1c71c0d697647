//! Block decorators for the content pipeline.
//!
//! Each authored block kind (embed, twitter, hero-banner) has a
//! decorator that extracts named fields from the parsed fragment and
//! emits the styled markup. Decorators sit behind the [`Decorator`]
//! trait and are dispatched by a [`BlockRegistry`], either by explicit
//! name or by auto-detection from the block element's class list.
//!
//! # Example
//!
//! ```
//! use deco_blocks::{BlockRegistry, RenderContext};
//! use deco_dom::Fragment;
//! use deco_embed::ScriptRegistry;
//!
//! let scripts = ScriptRegistry::new();
//! let ctx = RenderContext::new(&scripts);
//! let registry = BlockRegistry::with_defaults();
//! let fragment = Fragment::parse(
//!     r#"<div class="embed"><div>https://youtu.be/abc123</div></div>"#,
//! ).unwrap();
//! let html = registry.decorate_auto(&fragment, &ctx).unwrap();
//! assert!(html.contains("youtube-embed"));
//! ```

mod decorator;
mod embed;
mod hero;
mod registry;
mod twitter;

pub use decorator::{DecorateError, Decorator, RenderContext, render_fallback};
pub use embed::EmbedBlock;
pub use hero::HeroBannerBlock;
pub use registry::BlockRegistry;
pub use twitter::TwitterBlock;
