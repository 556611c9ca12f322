//! JSON encoding for rich text documents.
//!
//! The schema omits boolean flags when false and the link title when absent;
//! those rules live on the AST types themselves, so encoding is a thin layer
//! over `serde_json`.

use crate::ast::Document;
use crate::RichTextError;

/// Encode a document as a compact JSON string.
pub fn to_json(document: &Document) -> Result<String, RichTextError> {
    Ok(serde_json::to_string(document)?)
}

/// Encode a document as a `serde_json::Value`.
///
/// Useful when the document is embedded as one field of a larger record
/// before final serialization.
pub fn to_json_value(document: &Document) -> Result<serde_json::Value, RichTextError> {
    Ok(serde_json::to_value(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Block, Inline, StyleFlags, Text};
    use serde_json::json;

    #[test]
    fn test_empty_document() {
        let json = to_json(&Document::empty()).unwrap();
        assert_eq!(json, r#"{"type":"root","children":[]}"#);
    }

    #[test]
    fn test_document_value() {
        let doc = Document::new(vec![Block::Paragraph {
            children: vec![
                Inline::Text(Text::new("This is ")),
                Inline::Text(Text::styled("bold", StyleFlags::default().with_bold())),
                Inline::Text(Text::new(" text")),
            ],
        }]);
        assert_eq!(
            to_json_value(&doc).unwrap(),
            json!({
                "type": "root",
                "children": [{
                    "type": "paragraph",
                    "children": [
                        {"type": "text", "value": "This is "},
                        {"type": "text", "value": "bold", "bold": true},
                        {"type": "text", "value": " text"},
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_no_false_flags_in_output() {
        let doc = Document::new(vec![Block::text_paragraph("plain")]);
        let json = to_json(&doc).unwrap();
        assert!(!json.contains("false"));
        assert!(!json.contains("bold"));
    }
}
