//! Tag classification tables and text helpers for the converter.

/// Elements that normalize to a paragraph: their content is inline-formatted,
/// nested blocks are flattened to text (paragraphs cannot nest blocks)
pub const PARAGRAPH_ELEMENTS: &[&str] = &[
    "p", "div", "section", "article", "main", "aside", "header", "footer",
    "nav", "blockquote", "pre", "figure", "figcaption", "address", "details",
    "summary", "form", "fieldset", "legend",
];

/// Elements skipped entirely, subtree included
pub const SKIPPED_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "iframe", "embed", "object", "applet",
    "meta", "link", "base", "title", "head",
];

/// Table family, all routed through the table handler
pub const TABLE_ELEMENTS: &[&str] = &["table", "thead", "tbody", "tfoot", "tr", "td", "th"];

/// Media elements reduced to their fallback/caption text
pub const MEDIA_ELEMENTS: &[&str] = &["canvas", "video", "audio"];

/// Inline-level elements: at block level these start a paragraph run instead
/// of dispatching as blocks
pub const INLINE_ELEMENTS: &[&str] = &[
    "a", "strong", "b", "em", "i", "u", "s", "span", "code", "small", "mark",
    "abbr", "cite", "q", "sub", "sup", "time", "ins", "del", "strike", "wbr",
    "label", "kbd", "samp", "var",
];

/// Block-level elements, used by the inline formatter to detect nested blocks
/// that must be flattened to text
pub const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "audio", "blockquote", "canvas",
    "details", "div", "dl", "dd", "dt", "fieldset", "figcaption", "figure",
    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr",
    "legend", "li", "main", "nav", "ol", "p", "pre", "section", "summary",
    "table", "tbody", "td", "tfoot", "th", "thead", "tr", "ul", "video",
];

pub fn is_paragraph_element(tag: &str) -> bool {
    PARAGRAPH_ELEMENTS.contains(&tag)
}

pub fn is_skipped_element(tag: &str) -> bool {
    SKIPPED_ELEMENTS.contains(&tag)
}

pub fn is_table_element(tag: &str) -> bool {
    TABLE_ELEMENTS.contains(&tag)
}

pub fn is_media_element(tag: &str) -> bool {
    MEDIA_ELEMENTS.contains(&tag)
}

pub fn is_inline_element(tag: &str) -> bool {
    INLINE_ELEMENTS.contains(&tag)
}

pub fn is_block_element(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(&tag)
}

/// Collapse runs of whitespace to a single space
pub fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
                prev_was_whitespace = true;
            }
        } else {
            result.push(c);
            prev_was_whitespace = false;
        }
    }

    result
}
