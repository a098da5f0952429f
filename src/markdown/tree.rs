//! Builds a block/inline node tree from the pulldown-cmark event stream.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

/// Kind of a parsed Markdown node, with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Document,
    Paragraph,
    Heading(u8),
    BlockQuote,
    /// Fenced code carries the first word of its info string.
    CodeBlock(Option<String>),
    /// Start number for ordered lists, `None` for bullets.
    List(Option<u64>),
    Item,
    Table,
    TableHead,
    TableRow,
    TableCell,
    Emphasis,
    Strong,
    Strikethrough,
    Link(String),
    Image(String),
    Text(String),
    Code(String),
    SoftBreak,
    HardBreak,
    Rule,
    Html(String),
    /// Any container the translator does not model.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Whether the node can appear inside a paragraph.
    pub fn is_inline(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Text(_)
                | NodeKind::Code(_)
                | NodeKind::SoftBreak
                | NodeKind::HardBreak
                | NodeKind::Emphasis
                | NodeKind::Strong
                | NodeKind::Strikethrough
                | NodeKind::Link(_)
                | NodeKind::Image(_)
        )
    }

    /// Push a child, merging consecutive text into a single node.
    fn push(&mut self, child: Node) {
        if let NodeKind::Text(ref text) = child.kind {
            if let Some(Node {
                kind: NodeKind::Text(prev),
                ..
            }) = self.children.last_mut()
            {
                prev.push_str(text);
                return;
            }
        }
        self.children.push(child);
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn node_kind(tag: Tag<'_>) -> NodeKind {
    match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { level, .. } => NodeKind::Heading(heading_level(level)),
        Tag::BlockQuote(_) => NodeKind::BlockQuote,
        Tag::CodeBlock(CodeBlockKind::Fenced(info)) => NodeKind::CodeBlock(
            info.split_whitespace()
                .next()
                .filter(|lang| !lang.is_empty())
                .map(str::to_string),
        ),
        Tag::CodeBlock(CodeBlockKind::Indented) => NodeKind::CodeBlock(None),
        Tag::List(start) => NodeKind::List(start),
        Tag::Item => NodeKind::Item,
        Tag::Table(_) => NodeKind::Table,
        Tag::TableHead => NodeKind::TableHead,
        Tag::TableRow => NodeKind::TableRow,
        Tag::TableCell => NodeKind::TableCell,
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Strong => NodeKind::Strong,
        Tag::Strikethrough => NodeKind::Strikethrough,
        Tag::Link { dest_url, .. } => NodeKind::Link(dest_url.into_string()),
        Tag::Image { dest_url, .. } => NodeKind::Image(dest_url.into_string()),
        _ => NodeKind::Other,
    }
}

/// Move the innermost open node into its parent.
fn close(stack: &mut Vec<Node>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(node) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.push(node);
        }
    }
}

fn push_leaf(stack: &mut [Node], leaf: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.push(leaf);
    }
}

/// Parse Markdown (CommonMark plus tables and strikethrough) into a tree
/// rooted at a `Document` node.
pub(crate) fn parse_tree(markdown: &str) -> Node {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut stack = vec![Node::new(NodeKind::Document)];

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(tag) => stack.push(Node::new(node_kind(tag))),
            Event::End(_) => close(&mut stack),
            Event::Text(text) => push_leaf(&mut stack, Node::new(NodeKind::Text(text.into_string()))),
            Event::Code(code) => push_leaf(&mut stack, Node::new(NodeKind::Code(code.into_string()))),
            Event::Html(html) | Event::InlineHtml(html) => {
                push_leaf(&mut stack, Node::new(NodeKind::Html(html.into_string())))
            }
            Event::SoftBreak => push_leaf(&mut stack, Node::new(NodeKind::SoftBreak)),
            Event::HardBreak => push_leaf(&mut stack, Node::new(NodeKind::HardBreak)),
            Event::Rule => push_leaf(&mut stack, Node::new(NodeKind::Rule)),
            _ => {}
        }
    }

    while stack.len() > 1 {
        close(&mut stack);
    }
    stack
        .pop()
        .unwrap_or_else(|| Node::new(NodeKind::Document))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(node: &Node) -> Vec<NodeKind> {
        node.children.iter().map(|c| c.kind.clone()).collect()
    }

    #[test]
    fn test_block_structure() {
        let root = parse_tree("# Title\n\nText\n\n---\n");
        assert_eq!(root.kind, NodeKind::Document);
        assert_eq!(
            kinds(&root),
            vec![NodeKind::Heading(1), NodeKind::Paragraph, NodeKind::Rule]
        );
    }

    #[test]
    fn test_code_block_language() {
        let root = parse_tree("```rust ignore\nfn main() {}\n```\n");
        assert_eq!(
            root.children[0].kind,
            NodeKind::CodeBlock(Some("rust".to_string()))
        );
        assert_eq!(
            kinds(&root.children[0]),
            vec![NodeKind::Text("fn main() {}\n".to_string())]
        );

        let root = parse_tree("    indented\n");
        assert_eq!(root.children[0].kind, NodeKind::CodeBlock(None));
    }

    #[test]
    fn test_adjacent_text_is_merged() {
        let root = parse_tree("a &amp; b\\_c\n");
        let para = &root.children[0];
        assert_eq!(kinds(para), vec![NodeKind::Text("a & b_c".to_string())]);
    }

    #[test]
    fn test_lists() {
        let root = parse_tree("- one\n- two\n\n3. three\n");
        assert_eq!(root.children[0].kind, NodeKind::List(None));
        assert_eq!(root.children[0].children.len(), 2);
        assert_eq!(root.children[1].kind, NodeKind::List(Some(3)));
    }

    #[test]
    fn test_table() {
        let root = parse_tree("| A | B |\n|---|---|\n| 1 | 2 |\n");
        let table = &root.children[0];
        assert_eq!(table.kind, NodeKind::Table);
        assert_eq!(kinds(table), vec![NodeKind::TableHead, NodeKind::TableRow]);
    }

    #[test]
    fn test_inline_nodes() {
        let root = parse_tree("**b** *i* ~~s~~ `c` [l](u) ![a](p)\n");
        let para = &root.children[0];
        assert!(para.children.iter().all(Node::is_inline));
        assert!(para.children.iter().any(|n| n.kind == NodeKind::Link("u".to_string())));
        assert!(para.children.iter().any(|n| n.kind == NodeKind::Image("p".to_string())));
    }

    #[test]
    fn test_empty_input() {
        let root = parse_tree("");
        assert_eq!(root.kind, NodeKind::Document);
        assert!(root.children.is_empty());
    }
}
