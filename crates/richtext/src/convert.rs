//! Convert a DOM tree to a rich text document.
//!
//! This is the conversion core: a recursive walk over block-level elements
//! dispatching each tag to a node constructor, with inline runs flattened to
//! depth-1 text/link sequences by threading an accumulated style-flag record
//! through the descent.

use richtext_core::{
    inlines_are_blank, Block, Document, Inline, Link, ListItem, ListType, StyleFlags, Text,
};

use crate::node::{Node, NodeType};
use crate::service::ConvertOptions;
use crate::utilities::{
    collapse_whitespace, is_block_element, is_inline_element, is_media_element,
    is_paragraph_element, is_skipped_element, is_table_element,
};

/// Convert a DOM tree into a Document.
pub(crate) fn convert_tree(root: &Node, options: &ConvertOptions) -> Document {
    let blocks = if root.is_element() {
        let tag = root.tag_name();
        if is_skipped_element(tag) {
            Vec::new()
        } else if is_inline_element(tag) {
            // Bare inline content becomes a single paragraph
            let mut blocks = Vec::new();
            let mut run = convert_inline_element(root, StyleFlags::default());
            flush_inline_run(&mut blocks, &mut run);
            blocks
        } else {
            convert_element(root, options)
        }
    } else {
        convert_children(root, options)
    };

    Document::new(blocks)
}

/// Walk the children of a block container, dispatching elements and wrapping
/// each consecutive run of stray inline content in one paragraph.
fn convert_children(node: &Node, options: &ConvertOptions) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut run: Vec<Inline> = Vec::new();

    for child in node.children() {
        match child.node_type {
            NodeType::Text => {
                let collapsed = collapse_whitespace(child.node_value.as_deref().unwrap_or(""));
                if !collapsed.is_empty() {
                    run.push(Inline::Text(Text::new(collapsed)));
                }
            }
            NodeType::Element => {
                let tag = child.tag_name();
                if is_skipped_element(tag) {
                    continue;
                }
                if is_inline_element(tag) {
                    run.extend(convert_inline_element(child, StyleFlags::default()));
                } else {
                    flush_inline_run(&mut blocks, &mut run);
                    blocks.extend(convert_element(child, options));
                }
            }
            _ => {}
        }
    }

    flush_inline_run(&mut blocks, &mut run);
    blocks
}

/// Close the pending inline run as a paragraph; whitespace-only runs between
/// block siblings are discarded.
fn flush_inline_run(blocks: &mut Vec<Block>, run: &mut Vec<Inline>) {
    if inlines_are_blank(run) {
        run.clear();
        return;
    }
    blocks.push(Block::Paragraph {
        children: std::mem::take(run),
    });
}

/// Dispatch one block-level element by tag name.
fn convert_element(node: &Node, options: &ConvertOptions) -> Vec<Block> {
    let tag = node.tag_name();

    match tag {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = tag.as_bytes()[1] - b'0';
            vec![Block::Heading {
                level,
                children: collect_inlines(node, StyleFlags::default()),
            }]
        }

        "ul" => vec![Block::List {
            list_type: ListType::Unordered,
            children: collect_list_items(node),
        }],

        "ol" => vec![Block::List {
            list_type: ListType::Ordered,
            children: collect_list_items(node),
        }],

        "hr" => vec![Block::text_paragraph(options.rule_text.clone())],

        "br" => vec![Block::Paragraph {
            children: Vec::new(),
        }],

        _ if is_paragraph_element(tag) => vec![Block::Paragraph {
            children: collect_inlines(node, StyleFlags::default()),
        }],

        _ if is_table_element(tag) => vec![convert_table(node, options)],

        // Media reduces to its fallback/caption text, inline-formatted
        _ if is_media_element(tag) => vec![Block::Paragraph {
            children: collect_inlines(node, StyleFlags::default()),
        }],

        _ if is_skipped_element(tag) => Vec::new(),

        // Unrecognized tags are transparent containers
        _ => convert_children(node, options),
    }
}

/// Collect list items from the direct `li` children of a list element.
fn collect_list_items(node: &Node) -> Vec<ListItem> {
    node.element_children()
        .filter(|child| child.tag_name() == "li")
        .map(|li| ListItem::new(collect_inlines(li, StyleFlags::default())))
        .collect()
}

/// Inline-format the children of an element, threading the accumulated flag
/// set down the walk.
///
/// Zero-length runs are dropped; a parent producing only blank runs yields an
/// empty sequence (empty cells remain empty).
fn collect_inlines(parent: &Node, flags: StyleFlags) -> Vec<Inline> {
    let mut inlines = Vec::new();

    for child in parent.children() {
        match child.node_type {
            NodeType::Text => {
                let collapsed = collapse_whitespace(child.node_value.as_deref().unwrap_or(""));
                if !collapsed.is_empty() {
                    inlines.push(Inline::Text(Text::styled(collapsed, flags)));
                }
            }
            NodeType::Element => {
                inlines.extend(convert_inline_element(child, flags));
            }
            _ => {}
        }
    }

    if inlines_are_blank(&inlines) {
        return Vec::new();
    }
    inlines
}

/// Convert one element in inline context.
///
/// `strong`/`b` and `em`/`i` merge into the flag set and recurse (nested
/// formatting accumulates onto single runs instead of nesting nodes); `a`
/// produces a link; block-level children flatten to their text content since
/// paragraphs cannot nest blocks; anything else is transparent with the flag
/// set left untouched.
fn convert_inline_element(node: &Node, flags: StyleFlags) -> Vec<Inline> {
    debug_assert!(
        node.is_element(),
        "inline formatter dispatched on a non-element node"
    );

    let tag = node.tag_name();

    if is_skipped_element(tag) {
        return Vec::new();
    }

    if is_block_element(tag) {
        let text = collapse_whitespace(&visible_text(node));
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }
        return vec![Inline::Text(Text::styled(text, flags))];
    }

    match tag {
        "strong" | "b" => collect_inlines(node, flags.with_bold()),

        "em" | "i" => collect_inlines(node, flags.with_italic()),

        "a" => {
            let url = node.attr("href").unwrap_or("");
            let label = link_label(collect_inlines(node, flags));
            let mut link = Link::new(url, label);
            if let Some(title) = node.attr("title") {
                link = link.with_title(title);
            }
            vec![Inline::Link(link)]
        }

        _ => collect_inlines(node, flags),
    }
}

/// Reduce inline content to the flat text label of a link; nested links
/// collapse into their own labels.
fn link_label(inlines: Vec<Inline>) -> Vec<Text> {
    inlines
        .into_iter()
        .flat_map(|inline| match inline {
            Inline::Text(text) => vec![text],
            Inline::Link(link) => link.children,
        })
        .collect()
}

/// Flatten a table subtree into one paragraph: cells joined per row, rows
/// joined with newlines, inline formatting discarded.
fn convert_table(node: &Node, options: &ConvertOptions) -> Block {
    let mut rows = Vec::new();
    collect_rows(node, options, &mut rows);
    Block::text_paragraph(rows.join("\n"))
}

/// Visit `tr` rows in document order regardless of section grouping.
fn collect_rows(node: &Node, options: &ConvertOptions, rows: &mut Vec<String>) {
    match node.tag_name() {
        "tr" => rows.push(row_text(node, options)),
        // An orphan cell reaching the handler is a single-cell row
        "td" | "th" => rows.push(cell_text(node)),
        _ => {
            for child in node.element_children() {
                collect_rows(child, options, rows);
            }
        }
    }
}

fn row_text(tr: &Node, options: &ConvertOptions) -> String {
    tr.element_children()
        .filter(|cell| matches!(cell.tag_name(), "td" | "th"))
        .map(cell_text)
        .collect::<Vec<_>>()
        .join(&options.cell_separator)
}

fn cell_text(cell: &Node) -> String {
    collapse_whitespace(&visible_text(cell)).trim().to_string()
}

/// Text content of a subtree with skip-list subtrees and comments pruned.
///
/// `Node::text_content()` concatenates every descendant text node; flattened
/// block content and table cells must not surface `script`/`style` text, so
/// they use this extractor instead.
fn visible_text(node: &Node) -> String {
    let mut out = String::new();
    push_visible_text(node, &mut out);
    out
}

fn push_visible_text(node: &Node, out: &mut String) {
    match node.node_type {
        NodeType::Text => out.push_str(node.node_value.as_deref().unwrap_or("")),
        NodeType::Element if is_skipped_element(node.tag_name()) => {}
        NodeType::Comment => {}
        _ => {
            for child in node.children() {
                push_visible_text(child, out);
            }
        }
    }
}
