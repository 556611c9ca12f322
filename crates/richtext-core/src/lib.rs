//! richtext-core - rich text node schema and JSON serialization
//!
//! This crate provides the data structures for rich text documents as stored
//! in content-management fields: a root document owning a sequence of typed
//! block nodes (headings, paragraphs, lists), which in turn own inline nodes
//! (text runs with boolean style flags, links).
//!
//! # Architecture
//!
//! ```text
//! HTML String ──parse──▶ DOM Tree ──convert──▶ ┌───────────────┐
//!                                              │ Rich Text AST │ ──▶ JSON
//!                                              └───────────────┘
//! ```
//!
//! The conversion front-end lives in the `richtext` crate; this crate only
//! defines the schema and its JSON encoding.
//!
//! # Example
//!
//! ```rust
//! use richtext_core::{to_json, Block, Document, Inline, StyleFlags, Text};
//!
//! let doc = Document::new(vec![
//!     Block::Heading {
//!         level: 1,
//!         children: vec![Inline::Text(Text::new("Hello World"))],
//!     },
//!     Block::Paragraph {
//!         children: vec![
//!             Inline::Text(Text::new("This is ")),
//!             Inline::Text(Text::styled("bold", StyleFlags::default().with_bold())),
//!             Inline::Text(Text::new(" text.")),
//!         ],
//!     },
//! ]);
//!
//! let json = to_json(&doc).unwrap();
//! assert!(json.starts_with(r#"{"type":"root""#));
//! ```

mod ast;
mod serialize;

pub use ast::{inlines_are_blank, Block, Document, Inline, Link, ListItem, ListType, StyleFlags, Text};
pub use serialize::{to_json, to_json_value};

/// Error type for rich text operations
#[derive(Debug, thiserror::Error)]
pub enum RichTextError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RichTextError>;
