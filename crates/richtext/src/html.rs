//! HTML parsing support.
//!
//! This module parses HTML strings into the DOM node structure consumed by
//! the converter. Malformed-markup recovery (unclosed tags, stray text,
//! mismatched nesting) is handled by html5ever via scraper; the converter
//! always receives a best-effort tree.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML string into a Node tree.
///
/// The returned node is the fragment root; its children are the top-level
/// content of the input.
///
/// # Example
///
/// ```rust
/// use richtext::{parse_html, RichTextService};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let service = RichTextService::new();
/// let document = service.convert_node(&node);
/// assert_eq!(document.children.len(), 1);
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Comment(comment) => {
                node.add_child(Node::comment(&comment.comment));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
