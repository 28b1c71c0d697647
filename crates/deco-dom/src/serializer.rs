//! Serialize [`Node`] trees back to HTML.

use std::fmt::Write;

use crate::node::Node;

/// Tags that never carry content and serialize self-closed.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "source", "input", "meta", "link"];

/// Serialize a single node recursively.
///
/// Attributes are written in sorted key order so output is
/// deterministic. When `with_tail` is set the node's tail text is
/// appended after the closing tag.
pub(crate) fn serialize_node(node: &Node, out: &mut String, with_tail: bool) {
    out.push('<');
    out.push_str(&node.tag);

    let mut attrs: Vec<_> = node.attrs.iter().collect();
    attrs.sort_by_key(|(key, _)| key.as_str());
    for (key, value) in attrs {
        write!(out, r#" {}="{}""#, key, escape_attr(value)).unwrap();
    }

    let empty = node.children.is_empty() && node.text.is_empty();
    if empty && VOID_TAGS.contains(&node.tag.as_str()) {
        out.push_str("/>");
    } else {
        out.push('>');
        out.push_str(&escape_text(&node.text));
        for child in &node.children {
            serialize_node(child, out, true);
        }
        write!(out, "</{}>", node.tag).unwrap();
    }

    if with_tail && !node.tail.is_empty() {
        out.push_str(&escape_text(&node.tail));
    }
}

/// Escape text for element content.
pub(crate) fn escape_text(text: &str) -> String {
    escape(text, false)
}

/// Escape text for attribute values.
pub(crate) fn escape_attr(text: &str) -> String {
    escape(text, true)
}

/// Escape a string for safe HTML attribute or text interpolation.
///
/// Escapes `&`, `<`, `>`, `"` and `'`; markup builders use this for
/// every interpolated value.
#[must_use]
pub fn escape_html(text: &str) -> String {
    escape(text, true)
}

fn escape(text: &str, escape_quotes: bool) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if escape_quotes => result.push_str("&quot;"),
            '\'' if escape_quotes => result.push_str("&#39;"),
            _ => result.push(ch),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::node::Fragment;

    #[test]
    fn roundtrip_simple_fragment() {
        let html = r#"<div class="embed"><div><p>Caption</p></div></div>"#;
        let fragment = Fragment::parse(html).unwrap();
        assert_eq!(fragment.to_html(), html);
    }

    #[test]
    fn roundtrip_escapes_text() {
        let fragment = Fragment::parse("<p>a &amp; b</p>").unwrap();
        assert_eq!(fragment.to_html(), "<p>a &amp; b</p>");
    }

    #[test]
    fn void_tags_self_close() {
        let fragment = Fragment::parse("<p>line<br/>break</p>").unwrap();
        assert_eq!(fragment.to_html(), "<p>line<br/>break</p>");
    }

    #[test]
    fn empty_non_void_tags_stay_paired() {
        let fragment = Fragment::parse("<div></div>").unwrap();
        assert_eq!(fragment.to_html(), "<div></div>");
    }

    #[test]
    fn attributes_sorted_for_determinism() {
        let fragment =
            Fragment::parse(r#"<a href="/x" class="cta">Go</a>"#).unwrap();
        assert_eq!(fragment.to_html(), r#"<a class="cta" href="/x">Go</a>"#);
    }

    #[test]
    fn escape_html_covers_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x" title='y'>&"#),
            "&lt;a href=&quot;x&quot; title=&#39;y&#39;&gt;&amp;"
        );
    }
}
