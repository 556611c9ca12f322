//! Rich text document tree
//!
//! This module defines the node schema for rich text documents: a root
//! document owning block nodes, which own inline nodes (or list items, which
//! own inline nodes). The shapes serialize to the JSON layout expected by
//! rich-text content fields.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// The root document value produced per input record.
///
/// Serializes as `{"type": "root", "children": [...]}`. An empty input keeps
/// `children` empty; callers must not substitute a placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub children: Vec<Block>,
}

impl Document {
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }

    /// The empty document (`children: []`).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Document", 2)?;
        state.serialize_field("type", "root")?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

/// A block-level node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// Heading with level (1-6) and inline content
    Heading { level: u8, children: Vec<Inline> },

    /// Paragraph containing inline content (children may be empty)
    Paragraph { children: Vec<Inline> },

    /// Ordered or unordered list of list items
    List {
        #[serde(rename = "listType")]
        list_type: ListType,
        children: Vec<ListItem>,
    },
}

impl Block {
    /// Paragraph wrapping a single unstyled text run.
    pub fn text_paragraph(value: impl Into<String>) -> Self {
        Block::Paragraph {
            children: vec![Inline::Text(Text::new(value))],
        }
    }
}

/// List kind, serialized as the `listType` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ordered,
    Unordered,
}

/// A list item containing inline content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    pub children: Vec<Inline>,
}

impl ListItem {
    pub fn new(children: Vec<Inline>) -> Self {
        Self { children }
    }
}

impl Serialize for ListItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ListItem", 2)?;
        state.serialize_field("type", "list-item")?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

/// An inline node: a styled text run or a link
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Inline {
    Text(Text),
    Link(Link),
}

impl Inline {
    /// Check if this inline carries no visible content.
    ///
    /// Links count as meaningful even with a blank label (the URL itself is
    /// content).
    pub fn is_blank(&self) -> bool {
        match self {
            Inline::Text(text) => text.value.trim().is_empty(),
            Inline::Link(_) => false,
        }
    }
}

/// Check if every inline in a sequence is blank
pub fn inlines_are_blank(inlines: &[Inline]) -> bool {
    inlines.iter().all(|i| i.is_blank())
}

/// A text run with boolean style flags.
///
/// Flags serialize only when true; absence means false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Text {
    pub value: String,
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub strikethrough: bool,
}

impl Text {
    /// An unstyled text run.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// A text run carrying an accumulated flag set.
    pub fn styled(value: impl Into<String>, flags: StyleFlags) -> Self {
        Self {
            value: value.into(),
            bold: flags.bold,
            italic: flags.italic,
            underline: flags.underline,
            strikethrough: flags.strikethrough,
        }
    }
}

/// A link with a URL, optional title, and a flat text label.
///
/// Label runs inherit any style flags active in the enclosing context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(serialize_with = "serialize_label")]
    pub children: Vec<Text>,
}

/// Serialize label runs through the tagged inline representation so each
/// carries `"type":"text"` like any other text node.
fn serialize_label<S: Serializer>(children: &[Text], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(children.iter().cloned().map(Inline::Text))
}

impl Link {
    pub fn new(url: impl Into<String>, children: Vec<Text>) -> Self {
        Self {
            url: url.into(),
            title: None,
            children,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// The accumulated style state threaded through inline recursion.
///
/// Immutable by convention: formatting boundaries derive a new record via the
/// `with_*` combinators instead of mutating shared state, so flags never leak
/// across sibling branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleFlags {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl StyleFlags {
    pub fn with_bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn with_italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }

    pub fn with_underline(self) -> Self {
        Self {
            underline: true,
            ..self
        }
    }

    pub fn with_strikethrough(self) -> Self {
        Self {
            strikethrough: true,
            ..self
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
