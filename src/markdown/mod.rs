//! Markdown to document model translation.
//!
//! Blocks are mapped one to one, in document order. Inline formatting is
//! flattened into runs: every wrapper (emphasis, strong, strikethrough, link)
//! applies its flag to all descendant runs, so nested wrappers accumulate.
//! Constructs the model has no place for are dropped, never rejected.

mod tree;

use log::debug;

use crate::model::{DocxElement, TableCell, TableRow, TextRun, TextStyle};
use tree::{Node, NodeKind};

/// Translate Markdown source into document elements.
///
/// ```
/// use markdocx::markdown::parse_markdown;
/// use markdocx::model::DocxElement;
///
/// let elements = parse_markdown("# Hello\n\nWorld");
/// assert_eq!(elements[0], DocxElement::heading(1, "Hello"));
/// assert_eq!(elements[1].plain_text(), "World");
/// ```
pub fn parse_markdown(markdown: &str) -> Vec<DocxElement> {
    let root = tree::parse_tree(markdown);
    let elements: Vec<DocxElement> = root.children.iter().filter_map(translate_block).collect();
    debug!(
        "translated {} top-level blocks into {} elements",
        root.children.len(),
        elements.len()
    );
    elements
}

fn translate_block(node: &Node) -> Option<DocxElement> {
    match &node.kind {
        NodeKind::Heading(level) => Some(DocxElement::Heading {
            level: *level,
            text: flatten_text(&node.children),
        }),
        NodeKind::Paragraph => Some(translate_paragraph(node)),
        NodeKind::List(start) => {
            let items = node
                .children
                .iter()
                .filter(|child| child.kind == NodeKind::Item)
                .map(list_item_runs)
                .collect();
            Some(match start {
                Some(_) => DocxElement::NumberedList { items },
                None => DocxElement::BulletList { items },
            })
        }
        NodeKind::CodeBlock(language) => Some(DocxElement::CodeBlock {
            language: language.clone(),
            code: flatten_text(&node.children),
        }),
        NodeKind::BlockQuote => Some(DocxElement::Blockquote {
            runs: blockquote_runs(node),
        }),
        NodeKind::Table => Some(DocxElement::Table {
            rows: table_rows(node),
        }),
        NodeKind::Rule => Some(DocxElement::HorizontalRule),
        NodeKind::Image(source) => Some(DocxElement::Image {
            alt_text: flatten_text(&node.children),
            source: source.clone(),
        }),
        NodeKind::Other if !node.children.is_empty() && node.children.iter().all(Node::is_inline) => {
            Some(DocxElement::Paragraph {
                runs: resolve_inlines(&node.children),
            })
        }
        other => {
            debug!("dropping unmodeled block {:?}", other);
            None
        }
    }
}

/// A paragraph holding nothing but one image is the image itself.
fn translate_paragraph(node: &Node) -> DocxElement {
    if let [image @ Node {
        kind: NodeKind::Image(source),
        ..
    }] = node.children.as_slice()
    {
        return DocxElement::Image {
            alt_text: flatten_text(&image.children),
            source: source.clone(),
        };
    }
    DocxElement::Paragraph {
        runs: resolve_inlines(&node.children),
    }
}

/// Runs of one list item. Loose items contribute their paragraphs, tight
/// items their bare inline content; nested lists are flattened in place.
fn list_item_runs(item: &Node) -> Vec<TextRun> {
    let mut runs = Vec::new();
    for child in &item.children {
        match &child.kind {
            NodeKind::Paragraph => runs.extend(resolve_inlines(&child.children)),
            NodeKind::List(_) => {
                for nested in child.children.iter().filter(|n| n.kind == NodeKind::Item) {
                    if !runs.is_empty() {
                        runs.push(TextRun::plain(" "));
                    }
                    runs.extend(list_item_runs(nested));
                }
            }
            _ if child.is_inline() => collect_runs(child, TextStyle::default(), None, &mut runs),
            other => debug!("dropping {:?} inside list item", other),
        }
    }
    runs
}

fn blockquote_runs(quote: &Node) -> Vec<TextRun> {
    let mut runs = Vec::new();
    for child in &quote.children {
        match &child.kind {
            NodeKind::Paragraph => runs.extend(resolve_inlines(&child.children)),
            NodeKind::Text(text) => runs.push(TextRun::plain(text.clone())),
            other => debug!("dropping {:?} inside blockquote", other),
        }
    }
    runs
}

fn table_rows(table: &Node) -> Vec<TableRow> {
    let mut rows = Vec::new();
    for section in &table.children {
        match section.kind {
            NodeKind::TableHead => {
                // the head holds its cells directly
                if section.children.iter().any(|c| c.kind == NodeKind::TableCell) {
                    rows.push(table_row(section));
                } else {
                    rows.extend(
                        section
                            .children
                            .iter()
                            .filter(|r| r.kind == NodeKind::TableRow)
                            .map(table_row),
                    );
                }
            }
            NodeKind::TableRow => rows.push(table_row(section)),
            _ => {}
        }
    }
    rows
}

fn table_row(row: &Node) -> TableRow {
    TableRow {
        cells: row
            .children
            .iter()
            .filter(|c| c.kind == NodeKind::TableCell)
            .map(|cell| TableCell::from_runs(resolve_inlines(&cell.children)))
            .collect(),
    }
}

/// Flatten inline nodes into runs.
fn resolve_inlines(nodes: &[Node]) -> Vec<TextRun> {
    let mut runs = Vec::new();
    for node in nodes {
        collect_runs(node, TextStyle::default(), None, &mut runs);
    }
    runs
}

fn collect_runs(node: &Node, style: TextStyle, link: Option<&str>, out: &mut Vec<TextRun>) {
    let wrap = |flag: TextStyle, out: &mut Vec<TextRun>| {
        for child in &node.children {
            collect_runs(child, style.merge(flag), link, out);
        }
    };

    match &node.kind {
        NodeKind::Text(text) => out.push(make_run(text, style, link)),
        NodeKind::Code(code) => out.push(make_run(code, style.merge(TextStyle::code()), link)),
        NodeKind::SoftBreak | NodeKind::HardBreak => out.push(TextRun::plain(" ")),
        NodeKind::Emphasis => wrap(TextStyle::italic(), out),
        NodeKind::Strong => wrap(TextStyle::bold(), out),
        NodeKind::Strikethrough => wrap(TextStyle::strikethrough(), out),
        NodeKind::Link(dest) => {
            for child in &node.children {
                collect_runs(child, style, Some(dest.as_str()), out);
            }
        }
        other => debug!("dropping unmodeled inline {:?}", other),
    }
}

fn make_run(text: &str, style: TextStyle, link: Option<&str>) -> TextRun {
    TextRun {
        text: text.to_string(),
        style,
        link: link.map(str::to_string),
    }
}

/// Plain text of inline content, used for headings, code and alt text.
fn flatten_text(nodes: &[Node]) -> String {
    let mut text = String::new();
    for node in nodes {
        match &node.kind {
            NodeKind::Text(t) | NodeKind::Code(t) => text.push_str(t),
            NodeKind::SoftBreak | NodeKind::HardBreak => text.push(' '),
            NodeKind::Html(_) => {}
            _ => text.push_str(&flatten_text(&node.children)),
        }
    }
    text
}
