//! Tree nodes
//!
//!     Every element of a parsed document is a [Node]: a [NodeKind] carrying the variant
//!     specific attributes, an ordered list of children and the source line that opened it.
//!     Children are owned; the tree has no back references and nothing points into the parser.
//!
//!     Serialized, a node is a flat object with a `type` tag, its attributes and a `children`
//!     array that is always present:
//!
//!         {"type": "header", "depth": 2, "tags": ["a"], "children": [...], "line": 3}

use serde::Serialize;

use crate::org::token::Checkbox;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    pub children: Vec<Node>,
    /// 1-based line of the token that opened a block-level node. Inline nodes have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    Text {
        value: String,
    },
    Link {
        target: String,
    },
    /// Headers and TODO items. A TODO item is a header with a marker.
    Header {
        depth: usize,
        tags: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        todo: Option<TodoMarker>,
    },
    List {
        ordered: bool,
    },
    DefinitionList,
    ListElement {
        #[serde(skip_serializing_if = "Option::is_none")]
        checkbox: Option<Checkbox>,
    },
    DefinitionListElement {
        term: Vec<Node>,
        #[serde(skip_serializing_if = "Option::is_none")]
        checkbox: Option<Checkbox>,
    },
    Table,
    TableRow,
    TableCell {
        header: bool,
    },
    Directive(DirectiveNode),
    Drawer {
        name: String,
    },
    Preformatted,
    Paragraph,
    HorizontalRule,
    InlineContainer,
    Bold,
    Italic,
    Underline,
    Code,
    Dashed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoMarker {
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<char>,
}

/// Which syntax produced a directive node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DirectiveKind {
    /// `#+NAME: value`
    Keyword,
    /// `#+BEGIN_NAME` ... `#+END_NAME`
    Block,
    /// `#+BEGIN: NAME` ... `#+END:`
    DynamicBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveNode {
    /// Lowercased, e.g. `src` or `title`
    pub name: String,
    pub kind: DirectiveKind,
    /// Whitespace separated parameters not starting with `-`
    pub arguments: Vec<String>,
    /// Whitespace separated parameters starting with `-`
    pub options: Vec<String>,
    pub raw_value: String,
}

impl DirectiveNode {
    pub fn new(name: &str, kind: DirectiveKind, raw_value: &str) -> Self {
        let raw_value = raw_value.trim_end();
        let (options, arguments): (Vec<String>, Vec<String>) = raw_value
            .split_whitespace()
            .map(str::to_string)
            .partition(|token: &String| token.starts_with('-'));
        Self {
            name: name.to_lowercase(),
            kind,
            arguments,
            options,
            raw_value: raw_value.to_string(),
        }
    }
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
            line: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(NodeKind::Text {
            value: value.into(),
        })
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// The serialized `type` tag of this node.
    pub fn node_type(&self) -> &'static str {
        match &self.kind {
            NodeKind::Text { .. } => "text",
            NodeKind::Link { .. } => "link",
            NodeKind::Header { .. } => "header",
            NodeKind::List { .. } => "list",
            NodeKind::DefinitionList => "definitionList",
            NodeKind::ListElement { .. } => "listElement",
            NodeKind::DefinitionListElement { .. } => "definitionListElement",
            NodeKind::Table => "table",
            NodeKind::TableRow => "tableRow",
            NodeKind::TableCell { .. } => "tableCell",
            NodeKind::Directive(_) => "directive",
            NodeKind::Drawer { .. } => "drawer",
            NodeKind::Preformatted => "preformatted",
            NodeKind::Paragraph => "paragraph",
            NodeKind::HorizontalRule => "horizontalRule",
            NodeKind::InlineContainer => "inlineContainer",
            NodeKind::Bold => "bold",
            NodeKind::Italic => "italic",
            NodeKind::Underline => "underline",
            NodeKind::Code => "code",
            NodeKind::Dashed => "dashed",
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Text { .. }
                | NodeKind::Link { .. }
                | NodeKind::InlineContainer
                | NodeKind::Bold
                | NodeKind::Italic
                | NodeKind::Underline
                | NodeKind::Code
                | NodeKind::Dashed
        )
    }

    /// Concatenated value of all text nodes below (and including) this node, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let NodeKind::Text { value } = &self.kind {
            out.push_str(value);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// All nodes below this one, depth first, parents before children.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack: Vec<&Node> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    pub fn header_depth(&self) -> Option<usize> {
        match &self.kind {
            NodeKind::Header { depth, .. } => Some(*depth),
            _ => None,
        }
    }

    pub fn directive(&self) -> Option<&DirectiveNode> {
        match &self.kind {
            NodeKind::Directive(directive) => Some(directive),
            _ => None,
        }
    }
}
