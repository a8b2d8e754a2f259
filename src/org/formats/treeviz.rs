//! Treeviz formatter for document trees
//!
//! Treeviz is a one line per node dump of a parsed document, meant for eyeballing parser output
//! and for snapshot tests. Nesting is drawn with box characters:
//!
//!     ⧉ Document
//!     ├─ § * :draft:
//!     │ └─ ◦ Intro
//!     └─ ☰ unordered, 2 items
//!       ├─ •
//!       │ └─ ◦ first
//!       └─ • [X]
//!         └─ ◦ second
//!
//! A header's label holds its stars, TODO keyword, priority and tags; the title is its child.
//! Labels longer than 40 characters are truncated. Newlines inside text are shown as `↵`.
//!
//! Icons
//!     Block elements:
//!         Document: ⧉
//!         Header: §
//!         Paragraph: ¶
//!         List: ☰
//!         DefinitionList: ≔
//!         ListElement / DefinitionListElement: •
//!         Table: ▦
//!         TableRow: ≡
//!         TableCell: ▫
//!         Directive: #
//!         Drawer: ▤
//!         Preformatted: 𝒱
//!         HorizontalRule: ―
//!     Inlines:
//!         InlineContainer: ➔
//!         Text: ◦
//!         Link: ⊕
//!         Bold: 𝐁
//!         Italic: 𝐼
//!         Underline: _
//!         Code: ƒ
//!         Dashed: −

use std::collections::HashMap;

use crate::org::ast::{Document, Node, NodeKind};

const MAX_LABEL_CHARS: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn icon(node: &Node) -> &'static str {
    match node.kind {
        NodeKind::Header { .. } => "§",
        NodeKind::Paragraph => "¶",
        NodeKind::List { .. } => "☰",
        NodeKind::DefinitionList => "≔",
        NodeKind::ListElement { .. } | NodeKind::DefinitionListElement { .. } => "•",
        NodeKind::Table => "▦",
        NodeKind::TableRow => "≡",
        NodeKind::TableCell { .. } => "▫",
        NodeKind::Directive(_) => "#",
        NodeKind::Drawer { .. } => "▤",
        NodeKind::Preformatted => "𝒱",
        NodeKind::HorizontalRule => "―",
        NodeKind::InlineContainer => "➔",
        NodeKind::Text { .. } => "◦",
        NodeKind::Link { .. } => "⊕",
        NodeKind::Bold => "𝐁",
        NodeKind::Italic => "𝐼",
        NodeKind::Underline => "_",
        NodeKind::Code => "ƒ",
        NodeKind::Dashed => "−",
    }
}

fn items(count: usize) -> String {
    match count {
        1 => "1 item".to_string(),
        n => format!("{} items", n),
    }
}

fn label(node: &Node) -> String {
    let label = match &node.kind {
        NodeKind::Text { value } => value.clone(),
        NodeKind::Link { target } => target.clone(),
        NodeKind::Header { depth, tags, todo } => {
            let mut parts = vec!["*".repeat(*depth)];
            if let Some(todo) = todo {
                parts.push(todo.keyword.clone());
                if let Some(priority) = todo.priority {
                    parts.push(format!("[#{}]", priority));
                }
            }
            if !tags.is_empty() {
                parts.push(format!(":{}:", tags.join(":")));
            }
            parts.join(" ")
        }
        NodeKind::List { ordered } => {
            let order = if *ordered { "ordered" } else { "unordered" };
            format!("{}, {}", order, items(node.children.len()))
        }
        NodeKind::DefinitionList => items(node.children.len()),
        NodeKind::ListElement { checkbox } => checkbox
            .map(|c| format!("[{}]", c.mark()))
            .unwrap_or_default(),
        NodeKind::DefinitionListElement { term, checkbox } => {
            let term = term.iter().map(Node::text_content).collect::<String>();
            match checkbox {
                Some(c) => format!("[{}] {} ::", c.mark(), term),
                None => format!("{} ::", term),
            }
        }
        NodeKind::Table => format!("{} rows", node.children.len()),
        NodeKind::TableRow => format!("{} cells", node.children.len()),
        NodeKind::TableCell { header: true } => "header".to_string(),
        NodeKind::Directive(directive) => {
            format!("{} {}", directive.name, directive.raw_value)
        }
        NodeKind::Drawer { name } => name.clone(),
        _ => String::new(),
    };
    truncate(label.trim_end(), MAX_LABEL_CHARS).replace('\n', "↵")
}

fn format_node(
    node: &Node,
    prefix: &str,
    is_last: bool,
    show_linum: bool,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    if show_linum {
        match node.line {
            Some(line) => output.push_str(&format!("{:02} ", line)),
            None => output.push_str("   "),
        }
    }
    let label = label(node);
    if label.is_empty() {
        output.push_str(&format!("{}{} {}\n", prefix, connector, icon(node)));
    } else {
        output.push_str(&format!(
            "{}{} {} {}\n",
            prefix,
            connector,
            icon(node),
            label
        ));
    }

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        format_node(child, &child_prefix, i + 1 == child_count, show_linum, output);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_params(doc, &HashMap::new())
}

/// Supported params: `show-linum` (prefix each line with the node's source line).
pub fn to_treeviz_str_with_params(doc: &Document, params: &HashMap<String, String>) -> String {
    let show_linum = params
        .get("show-linum")
        .map(|v| v != "false")
        .unwrap_or(false);

    let mut output = String::new();
    if show_linum {
        output.push_str("   ");
    }
    output.push_str("⧉ Document\n");
    let count = doc.nodes.len();
    for (i, node) in doc.nodes.iter().enumerate() {
        format_node(node, "", i + 1 == count, show_linum, &mut output);
    }
    output
}

/// Treeviz dump of a single node and its subtree.
pub fn node_to_treeviz_str(node: &Node) -> String {
    let mut output = String::new();
    format_node(node, "", true, false, &mut output);
    output
}
