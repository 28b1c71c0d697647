//! quick-xml event parsing into [`Node`] trees.

use std::collections::HashMap;
use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::entities::convert_html_entities;
use crate::error::DomError;
use crate::node::Node;

/// Wrapper tag so multi-element fragments parse as one document.
const WRAPPER: &str = "deco-root";

/// Parse an HTML fragment into a synthetic root node.
///
/// The returned node is the wrapper; the fragment's top-level elements
/// are its children.
pub(crate) fn parse_fragment(html: &str) -> Result<Node, DomError> {
    let html = convert_html_entities(html);
    let wrapped = format!("<{WRAPPER}>{html}</{WRAPPER}>");

    let mut reader = Reader::from_str(&wrapped);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let tag = decode_name(&reader, e.name().as_ref());
                let mut root = parse_children(&mut reader, &tag)?;
                root.tag = tag;
                return Ok(root);
            }
            Event::Eof => return Ok(Node::default()),
            _ => {}
        }
        buf.clear();
    }
}

/// Parse events until the closing tag of `parent_tag`.
fn parse_children<R: BufRead>(
    reader: &mut Reader<R>,
    parent_tag: &str,
) -> Result<Node, DomError> {
    let mut buf = Vec::new();
    let mut node = Node::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let child_tag = decode_name(reader, e.name().as_ref());
                let child_attrs = decode_attrs(reader, &e);
                let mut child = parse_children(reader, &child_tag)?;
                child.tag = child_tag;
                child.attrs = child_attrs;
                node.children.push(child);
            }
            Event::Empty(e) => {
                let child = Node {
                    tag: decode_name(reader, e.name().as_ref()),
                    attrs: decode_attrs(reader, &e),
                    ..Node::default()
                };
                node.children.push(child);
            }
            Event::Text(e) => {
                let text = reader.decoder().decode(&e)?.into_owned();
                append_text(&mut node, &text);
            }
            Event::GeneralRef(e) => {
                // Standard XML entity references (&lt; &gt; &amp; ...)
                let entity = reader.decoder().decode(&e)?.into_owned();
                append_text(&mut node, &decode_entity(&entity));
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                append_text(&mut node, &text);
            }
            Event::End(e) => {
                let end_tag = decode_name(reader, e.name().as_ref());
                if end_tag == parent_tag {
                    return Ok(node);
                }
                // Mismatched end tag - keep going
            }
            Event::Eof => return Ok(node),
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
        buf.clear();
    }
}

/// Decode a tag name, falling back to lossy UTF-8.
fn decode_name<R: BufRead>(reader: &Reader<R>, name: &[u8]) -> String {
    reader.decoder().decode(name).map_or_else(
        |_| String::from_utf8_lossy(name).into_owned(),
        std::borrow::Cow::into_owned,
    )
}

/// Decode element attributes into a map.
fn decode_attrs<R: BufRead>(reader: &Reader<R>, e: &BytesStart) -> HashMap<String, String> {
    let mut attrs = HashMap::new();
    for attr in e.attributes().flatten() {
        let key = reader.decoder().decode(attr.key.as_ref()).map_or_else(
            |_| String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            std::borrow::Cow::into_owned,
        );
        let value = attr.unescape_value().map_or_else(
            |_| String::from_utf8_lossy(&attr.value).into_owned(),
            std::borrow::Cow::into_owned,
        );
        attrs.insert(key, value);
    }
    attrs
}

/// Append text to the node's text or the last child's tail.
fn append_text(node: &mut Node, text: &str) {
    if let Some(last_child) = node.children.last_mut() {
        last_child.tail.push_str(text);
    } else {
        node.text.push_str(text);
    }
}

/// Decode a standard XML entity reference.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_owned(),
        "gt" => ">".to_owned(),
        "amp" => "&".to_owned(),
        "apos" => "'".to_owned(),
        "quot" => "\"".to_owned(),
        // Numeric character references
        s if s.starts_with('#') => {
            let code = if s.starts_with("#x") || s.starts_with("#X") {
                u32::from_str_radix(&s[2..], 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            code.and_then(char::from_u32)
                .map_or_else(|| format!("&{entity};"), |c| c.to_string())
        }
        // Unknown entity - preserve as-is
        _ => format!("&{entity};"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_simple_element() {
        let root = parse_fragment("<p>Hello</p>").unwrap();
        assert_eq!(root.children.len(), 1);
        let p = &root.children[0];
        assert_eq!(p.tag, "p");
        assert_eq!(p.text, "Hello");
    }

    #[test]
    fn parse_nested_elements() {
        let root = parse_fragment("<p><strong>Bold</strong> text</p>").unwrap();
        let p = &root.children[0];
        assert!(p.text.is_empty());
        let strong = &p.children[0];
        assert_eq!(strong.tag, "strong");
        assert_eq!(strong.text, "Bold");
        assert_eq!(strong.tail, " text");
    }

    #[test]
    fn parse_self_closing_elements() {
        let root = parse_fragment("<p>Before<br/>After</p>").unwrap();
        let p = &root.children[0];
        assert_eq!(p.text, "Before");
        assert_eq!(p.children[0].tag, "br");
        assert_eq!(p.children[0].tail, "After");
    }

    #[test]
    fn parse_attributes() {
        let root = parse_fragment(r#"<a href="https://x.com/a" class="cta">Go</a>"#).unwrap();
        let a = &root.children[0];
        assert_eq!(a.attrs.get("href").map(String::as_str), Some("https://x.com/a"));
        assert_eq!(a.attrs.get("class").map(String::as_str), Some("cta"));
    }

    #[test]
    fn parse_xml_entities() {
        let root = parse_fragment("<p>a &amp; b &lt;c&gt;</p>").unwrap();
        assert_eq!(root.children[0].text, "a & b <c>");
    }

    #[test]
    fn parse_named_html_entities() {
        let root = parse_fragment("<p>one&nbsp;two&mdash;three</p>").unwrap();
        let text = &root.children[0].text;
        assert!(text.contains('\u{00a0}'));
        assert!(text.contains('\u{2014}'));
    }

    #[test]
    fn parse_numeric_references() {
        let root = parse_fragment("<p>&#169; &#x2764;</p>").unwrap();
        let text = &root.children[0].text;
        assert!(text.contains('\u{00a9}'));
        assert!(text.contains('\u{2764}'));
    }

    #[test]
    fn multiple_top_level_elements() {
        let root = parse_fragment("<h1>A</h1><p>B</p>").unwrap();
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].tag, "h1");
        assert_eq!(root.children[1].tag, "p");
    }

    #[test]
    fn mismatched_end_tag_is_tolerated() {
        let root = parse_fragment("<div><span>text</div>").unwrap();
        let div = &root.children[0];
        assert_eq!(div.children[0].tag, "span");
        assert_eq!(div.children[0].text, "text");
    }

    #[test]
    fn malformed_markup_is_an_error_not_a_panic() {
        assert!(parse_fragment("<div><<</div>").is_err());
    }
}
