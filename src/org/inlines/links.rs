//! Link pass
//!
//!     Recognizes `[[target]]` and `[[target][title]]`. A titled link gets the emphasis-parsed
//!     title as its children; an untitled one gets the target as plain text. Targets are never
//!     scanned again.

use once_cell::sync::Lazy;
use regex::Regex;

use super::emphasis;
use super::MAX_INLINE_DEPTH;
use crate::org::ast::{Node, NodeKind};

static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]*)\](?:\[([^\]]*)\])?\]").unwrap());

/// Append the fragments of `text` to `out`: plain text runs and links.
pub(super) fn parse_links(text: &str, depth: usize, out: &mut Vec<Node>) {
    let mut plain_start = 0;
    for caps in LINK_REGEX.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_text(&text[plain_start..whole.start()], out);

        let target = caps.get(1).map_or("", |m| m.as_str());
        let children = match caps.get(2).map(|m| m.as_str()) {
            Some(title) if !title.is_empty() && depth + 1 < MAX_INLINE_DEPTH => {
                emphasis::parse_fragments(title, depth + 1)
            }
            Some(title) if !title.is_empty() => vec![Node::text(title)],
            _ => vec![Node::text(target)],
        };
        out.push(
            Node::new(NodeKind::Link {
                target: target.to_string(),
            })
            .with_children(children),
        );
        plain_start = whole.end();
    }
    push_text(&text[plain_start..], out);
}

fn push_text(text: &str, out: &mut Vec<Node>) {
    if !text.is_empty() {
        out.push(Node::text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(text: &str) -> Vec<Node> {
        let mut out = Vec::new();
        parse_links(text, 0, &mut out);
        out
    }

    #[test]
    fn test_untitled_link_shows_target() {
        let nodes = links("see [[https://orgmode.org]] now");
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], Node::text("see "));
        assert_eq!(
            nodes[1].kind,
            NodeKind::Link {
                target: "https://orgmode.org".to_string()
            }
        );
        assert_eq!(nodes[1].children, vec![Node::text("https://orgmode.org")]);
        assert_eq!(nodes[2], Node::text(" now"));
    }

    #[test]
    fn test_titled_link_parses_emphasis() {
        let nodes = links("[[file:a.org][the *main* file]]");
        assert_eq!(nodes.len(), 1);
        let types: Vec<_> = nodes[0].children.iter().map(|n| n.node_type()).collect();
        assert_eq!(types, vec!["text", "bold", "text"]);
    }

    #[test]
    fn test_empty_title_falls_back_to_target() {
        let nodes = links("[[target][]]");
        assert_eq!(nodes[0].children, vec![Node::text("target")]);
    }

    #[test]
    fn test_plain_text_only() {
        assert_eq!(links("no links [here]"), vec![Node::text("no links [here]")]);
        assert!(links("").is_empty());
    }

    #[test]
    fn test_adjacent_links() {
        let nodes = links("[[a]][[b]]");
        let types: Vec<_> = nodes.iter().map(|n| n.node_type()).collect();
        assert_eq!(types, vec!["link", "link"]);
    }
}
