//! # richtext
//!
//! Convert HTML fragments (or plain text) into rich text document nodes
//! suitable for storage as a JSON field value in a content-management system.
//!
//! ## Design
//!
//! The converter walks a parser-agnostic DOM [`Node`] tree and maps it into
//! the closed node schema defined in `richtext-core`: headings, paragraphs,
//! and lists at block level; text runs with boolean style flags and links at
//! inline level. Nested inline formatting flattens into single runs with
//! accumulated flags; tables, rules, breaks, and media are normalized into
//! paragraph variants; unknown markup degrades to plain text instead of being
//! dropped.
//!
//! Conversion never fails: malformed markup is repaired by the parser,
//! unknown tags are transparent, and empty input yields an empty document.
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use richtext::RichTextService;
//!
//! let service = RichTextService::new();
//! let document = service.convert(Some("<h1>Hello World</h1>"));
//! let json = richtext::to_json(&document).unwrap();
//! assert!(json.contains("Hello World"));
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use richtext::{Node, RichTextService};
//!
//! let mut h1 = Node::element("h1");
//! h1.add_child(Node::text("Hello World"));
//!
//! let service = RichTextService::new();
//! let document = service.convert_node(&h1);
//! assert_eq!(document.children.len(), 1);
//! ```

mod convert;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod service;
mod utilities;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, NodeType};
pub use richtext_core::{
    inlines_are_blank, to_json, to_json_value, Block, Document, Inline, Link, ListItem, ListType,
    Result, RichTextError, StyleFlags, Text,
};
pub use service::{ConvertOptions, RichTextService};
pub use utilities::*;
