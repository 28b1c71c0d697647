//! Element tree for authored block fragments.
//!
//! Nodes use the text/tail model: `text` is the content before the
//! first child, `tail` is the content following the node's closing
//! tag inside its parent.

use std::collections::HashMap;

use crate::error::DomError;
use crate::parser;
use crate::serializer;

/// A single element in a parsed fragment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Node {
    /// Tag name (lowercase as authored).
    pub tag: String,
    /// Element attributes.
    pub attrs: HashMap<String, String>,
    /// Text before the first child element.
    pub text: String,
    /// Text after this element's closing tag.
    pub tail: String,
    /// Child elements in document order.
    pub children: Vec<Node>,
}

impl Node {
    /// Attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Whitespace-separated classes from the `class` attribute.
    #[must_use]
    pub fn class_list(&self) -> Vec<&str> {
        self.attr("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Whether the `class` attribute contains the given class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(&class)
    }

    /// First descendant with the given tag, depth-first.
    #[must_use]
    pub fn find(&self, tag: &str) -> Option<&Node> {
        for child in &self.children {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find(tag) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants with the given tag, in document order.
    #[must_use]
    pub fn find_all(&self, tag: &str) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect_tag(tag, &mut out);
        out
    }

    fn collect_tag<'a>(&'a self, tag: &str, out: &mut Vec<&'a Node>) {
        for child in &self.children {
            if child.tag == tag {
                out.push(child);
            }
            child.collect_tag(tag, out);
        }
    }

    /// Concatenated text of this element and its descendants, in
    /// document order (text, then each child's content and tail).
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.append_text(&mut out);
        out
    }

    fn append_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.append_text(out);
            out.push_str(&child.tail);
        }
    }

    /// Concatenated text, skipping descendants with the given tag.
    ///
    /// Used to separate visible copy from link labels when a paragraph
    /// mixes both.
    #[must_use]
    pub fn text_content_excluding(&self, tag: &str) -> String {
        let mut out = String::new();
        self.append_text_excluding(tag, &mut out);
        out
    }

    fn append_text_excluding(&self, tag: &str, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            if child.tag != tag {
                child.append_text_excluding(tag, out);
            }
            out.push_str(&child.tail);
        }
    }

    /// Serialize this element (tag, attributes, content) to HTML.
    #[must_use]
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        serializer::serialize_node(self, &mut out, false);
        out
    }

    /// Serialize this element's content (text and children) to HTML.
    #[must_use]
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        out.push_str(&serializer::escape_text(&self.text));
        for child in &self.children {
            serializer::serialize_node(child, &mut out, true);
        }
        out
    }
}

/// A parsed block fragment.
///
/// The authoring tool emits one block element whose children are the
/// field rows. `Fragment` keeps the parsed tree and exposes the block
/// element and its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    root: Node,
}

impl Fragment {
    /// Parse an HTML fragment.
    ///
    /// Named HTML entities (`&nbsp;` etc.) are converted to Unicode
    /// before parsing; standard XML entities are handled by the
    /// parser itself.
    ///
    /// # Errors
    ///
    /// Returns [`DomError`] when the fragment is not well-formed
    /// markup.
    pub fn parse(html: &str) -> Result<Self, DomError> {
        let root = parser::parse_fragment(html)?;
        Ok(Self { root })
    }

    /// The block element: the first top-level element of the fragment.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::EmptyFragment`] when the fragment contains
    /// no element at all.
    pub fn block(&self) -> Result<&Node, DomError> {
        self.root.children.first().ok_or(DomError::EmptyFragment)
    }

    /// Field rows: the children of the block element.
    ///
    /// The authoring tool writes one row per field, so decorators read
    /// their inputs from here.
    #[must_use]
    pub fn rows(&self) -> &[Node] {
        self.block().map(|b| b.children.as_slice()).unwrap_or(&[])
    }

    /// Serialize the whole fragment back to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for child in &self.root.children {
            serializer::serialize_node(child, &mut out, true);
        }
        out
    }
}
