//! Inline markup
//!
//!     Free text (paragraphs, header titles, list item text, link titles) is split into inline
//!     fragments: plain text, links and emphasis runs. Two passes cooperate: the emphasis pass
//!     finds marker-delimited runs and hands the text between them to the link pass; link titles
//!     and emphasis bodies are fed back into the emphasis pass.
//!
//!     Both passes are plain functions over a string slice with their own local scan position,
//!     so parsing one text never affects another. Nesting is bounded by [MAX_INLINE_DEPTH].
//!
//! Markers
//!
//!         *bold*  /italic/  _underline_  =code=  ~code~  +dashed+
//!
//!     Code bodies are kept literally; all other bodies may contain further markup.

mod emphasis;
mod links;

use crate::org::ast::{Node, NodeKind};

/// Deepest level of nested emphasis and link titles that is parsed. Deeper bodies are kept as
/// plain text.
pub const MAX_INLINE_DEPTH: usize = 32;

/// Parse `text` into a single inline node.
///
/// Returns `None` for empty text, the fragment itself when there is exactly one, and an
/// inline container otherwise.
pub fn parse_inline(text: &str) -> Option<Node> {
    let mut fragments = parse_inline_nodes(text);
    match fragments.len() {
        0 => None,
        1 => fragments.pop(),
        _ => Some(Node::new(NodeKind::InlineContainer).with_children(fragments)),
    }
}

/// Parse `text` into its sequence of inline fragments.
pub fn parse_inline_nodes(text: &str) -> Vec<Node> {
    emphasis::parse_fragments(text, 0)
}
