//! RichTextService - the main entry point for HTML to rich text conversion.

use richtext_core::Document;
#[cfg(feature = "html")]
use richtext_core::{Block, Inline, Text};

use crate::convert::convert_tree;
use crate::node::Node;

/// Options for the conversion
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Replacement text for horizontal rules
    pub rule_text: String,

    /// Separator between flattened table cells
    pub cell_separator: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            rule_text: "---".to_string(),
            cell_separator: " | ".to_string(),
        }
    }
}

/// The main service for converting HTML to rich text documents.
///
/// Conversion is total: it degrades gracefully on unknown markup and missing
/// attributes instead of failing, and always returns a [`Document`].
pub struct RichTextService {
    options: ConvertOptions,
}

impl RichTextService {
    /// Create a new RichTextService with default options
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Create a RichTextService with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }

    /// Convert a raw HTML or plain-text string to a Document.
    ///
    /// Empty or missing input yields the empty document; input containing no
    /// element markup is wrapped as a single unstyled paragraph; anything
    /// else is parsed and walked.
    #[cfg(feature = "html")]
    pub fn convert(&self, input: Option<&str>) -> Document {
        let Some(raw) = input else {
            return Document::empty();
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Document::empty();
        }

        let tree = crate::html::parse_html(trimmed);
        if !tree.has_element_descendant() {
            return Document::new(vec![Block::Paragraph {
                children: vec![Inline::Text(Text::new(trimmed))],
            }]);
        }

        convert_tree(&tree, &self.options)
    }

    /// Convert an already-built DOM tree to a Document.
    ///
    /// Useful when the caller has its own parse tree and does not need the
    /// bundled HTML front-end.
    pub fn convert_node(&self, node: &Node) -> Document {
        convert_tree(node, &self.options)
    }
}

impl Default for RichTextService {
    fn default() -> Self {
        Self::new()
    }
}
