//! HTML fragment parsing for block decoration.
//!
//! Authored blocks arrive as small HTML fragments in a row-per-field
//! shape. This crate parses them into an element tree, offers the
//! queries decorators need (tag lookup, attributes, text content),
//! and serializes nodes back to HTML with correct escaping.
//!
//! # Example
//!
//! ```
//! use deco_dom::Fragment;
//!
//! let fragment = Fragment::parse(
//!     r#"<div class="embed"><div><a href="https://youtu.be/abc">link</a></div></div>"#,
//! ).unwrap();
//! let block = fragment.block().unwrap();
//! assert_eq!(block.class_list(), vec!["embed"]);
//! ```

mod entities;
mod error;
mod node;
mod parser;
mod serializer;

pub use entities::convert_html_entities;
pub use error::DomError;
pub use node::{Fragment, Node};
pub use serializer::escape_html;
