//! Embed provider resolution for block decoration.
//!
//! Takes a URL or bare platform handle and classifies it into one of a
//! fixed set of embed providers, producing the render target the
//! markup builders consume. Resolution is a pure function: no network,
//! no global state, always exactly one [`ProviderKind`].
//!
//! # Example
//!
//! ```
//! use deco_embed::{ProviderKind, resolve};
//!
//! let embed = resolve("https://youtu.be/abc123");
//! assert_eq!(embed.kind, ProviderKind::YouTube);
//! assert_eq!(embed.render_target, "https://www.youtube.com/embed/abc123");
//! ```

mod markup;
mod provider;
mod scripts;
mod url;

pub use markup::{EmbedStyle, TimelineStyle, script_tag, timeline_html};
pub use provider::{ProviderKind, ResolvedEmbed, resolve};
pub use scripts::{INSTAGRAM_EMBED_SCRIPT, TWITTER_WIDGETS_SCRIPT, ScriptRegistry, global_scripts};
