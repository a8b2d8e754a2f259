//! Fluent assertion API for parsed documents

mod directive;
mod document;
mod header;
mod list;
mod node;
mod table;

pub use directive::DirectiveAssertion;
pub use document::DocumentAssertion;
pub use header::HeaderAssertion;
pub use list::{ListAssertion, ListElementAssertion};
pub use node::NodeAssertion;
pub use table::TableAssertion;

use crate::org::ast::{Document, Node};

/// Create an assertion builder for a document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

/// Create an assertion builder for a single node, e.g. one returned by the inline parser.
pub fn assert_node(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: "node".to_string(),
    }
}

pub(super) fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(Node::node_type)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check `index` against `nodes` and build the assertion for the node found there. An empty
/// `parent` marks the document root.
pub(super) fn nth<'a>(nodes: &'a [Node], index: usize, parent: &str, path: &str) -> NodeAssertion<'a> {
    let context = if parent.is_empty() {
        format!("{}[{}]", path, index)
    } else {
        format!("{}:{}[{}]", parent, path, index)
    };
    assert!(
        index < nodes.len(),
        "{} index {} out of bounds ({} present: [{}]) at {}",
        path,
        index,
        nodes.len(),
        summarize(nodes),
        context
    );
    NodeAssertion {
        node: &nodes[index],
        context,
    }
}
