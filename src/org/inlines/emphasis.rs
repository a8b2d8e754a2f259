//! Emphasis scanner
//!
//!     An emphasis run is a marker, a body and the same marker again:
//!
//!         pre  marker  body  marker  post
//!
//!     The opening marker must be preceded by whitespace, `(`, a quote, a newline or the start
//!     of the text. The closing marker must be followed by whitespace, one of `-.,:!?;'")`, a
//!     newline or the end of the text. The body is at least one character long and neither
//!     starts nor ends with whitespace, a comma or a quote. The first closing marker that
//!     satisfies all of this ends the run.
//!
//!     Scanning resumes right after the closing marker, so the character following one run can
//!     act as the pre character of the next (`*a* *b*` is two bold runs). Text between runs
//!     goes through the link pass.

use std::ops::Range;

use super::links;
use super::MAX_INLINE_DEPTH;
use crate::org::ast::{Node, NodeKind};

const MARKERS: &[u8] = b"*/_=~+";
const PRE: &[u8] = b" \t('\"";
const POST: &[u8] = b"- \t.,:!?;'\")";
const BORDER_FORBIDDEN: &[u8] = b" \t\r\n,\"'";

#[derive(Debug, Clone, PartialEq, Eq)]
struct EmphasisRun {
    marker: u8,
    open: usize,
    body: Range<usize>,
}

impl EmphasisRun {
    fn close(&self) -> usize {
        self.body.end
    }
}

/// Inline fragments of `text`, in order.
pub(super) fn parse_fragments(text: &str, depth: usize) -> Vec<Node> {
    let mut fragments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(run) = find_run(text.as_bytes(), cursor) {
        links::parse_links(&text[plain_start..run.open], depth, &mut fragments);
        fragments.push(emphasize(run.marker, &text[run.body.clone()], depth));
        plain_start = run.close() + 1;
        cursor = plain_start;
    }
    links::parse_links(&text[plain_start..], depth, &mut fragments);

    fragments
}

fn emphasize(marker: u8, body: &str, depth: usize) -> Node {
    let kind = match marker {
        b'*' => NodeKind::Bold,
        b'/' => NodeKind::Italic,
        b'_' => NodeKind::Underline,
        b'+' => NodeKind::Dashed,
        _ => NodeKind::Code,
    };
    let verbatim = matches!(kind, NodeKind::Code);
    let children = if verbatim || depth + 1 >= MAX_INLINE_DEPTH {
        vec![Node::text(body)]
    } else {
        parse_fragments(body, depth + 1)
    };
    Node::new(kind).with_children(children)
}

fn find_run(bytes: &[u8], from: usize) -> Option<EmphasisRun> {
    (from..bytes.len())
        .filter(|&open| MARKERS.contains(&bytes[open]) && is_pre(bytes, open))
        .find_map(|open| {
            let marker = bytes[open];
            find_close(bytes, open, marker).map(|close| EmphasisRun {
                marker,
                open,
                body: open + 1..close,
            })
        })
}

fn find_close(bytes: &[u8], open: usize, marker: u8) -> Option<usize> {
    let body_start = open + 1;
    let first = *bytes.get(body_start)?;
    if BORDER_FORBIDDEN.contains(&first) {
        return None;
    }
    (body_start + 1..bytes.len()).find(|&close| {
        bytes[close] == marker
            && !BORDER_FORBIDDEN.contains(&bytes[close - 1])
            && is_post(bytes, close + 1)
    })
}

fn is_pre(bytes: &[u8], open: usize) -> bool {
    match open.checked_sub(1).map(|i| bytes[i]) {
        None => true,
        Some(b'\n') => true,
        Some(c) => PRE.contains(&c),
    }
}

fn is_post(bytes: &[u8], at: usize) -> bool {
    match bytes.get(at) {
        None => true,
        Some(b'\n') => true,
        Some(b'\r') => bytes.get(at + 1) == Some(&b'\n'),
        Some(c) => POST.contains(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Option<(char, &str)> {
        find_run(text.as_bytes(), 0).map(|r| (r.marker as char, &text[r.body]))
    }

    #[test]
    fn test_finds_simple_runs() {
        assert_eq!(run("*bold*"), Some(('*', "bold")));
        assert_eq!(run("a /b/ c"), Some(('/', "b")));
        assert_eq!(run("(=code=)"), Some(('=', "code")));
        assert_eq!(run("x\n~y~\n"), Some(('~', "y")));
    }

    #[test]
    fn test_pre_context_required() {
        assert_eq!(run("a*b*"), None);
        assert_eq!(run("path/to/file"), None);
    }

    #[test]
    fn test_post_context_required() {
        assert_eq!(run("*a*b"), None);
        assert_eq!(run("*a*, then"), Some(('*', "a")));
        assert_eq!(run("*a*\r\nnext"), Some(('*', "a")));
    }

    #[test]
    fn test_border_rules() {
        assert_eq!(run("* a*"), None);
        assert_eq!(run("*a *"), None);
        assert_eq!(run("**"), None);
        assert_eq!(run("*,a*"), None);
    }

    #[test]
    fn test_body_may_span_lines() {
        assert_eq!(run("*one\ntwo*"), Some(('*', "one\ntwo")));
    }

    #[test]
    fn test_first_valid_close_wins() {
        assert_eq!(run("*a *b* c*"), Some(('*', "a *b")));
        assert_eq!(run("*bold /italic/ bold*"), Some(('*', "bold /italic/ bold")));
    }

    #[test]
    fn test_adjacent_runs_share_context() {
        let fragments = parse_fragments("*a* *b*", 0);
        let types: Vec<_> = fragments.iter().map(|n| n.node_type()).collect();
        assert_eq!(types, vec!["bold", "text", "bold"]);
    }

    #[test]
    fn test_code_body_is_literal() {
        let fragments = parse_fragments("=*x*=", 0);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].node_type(), "code");
        assert_eq!(fragments[0].children, vec![Node::text("*x*")]);
    }

    #[test]
    fn test_depth_limit_keeps_body_literal() {
        let node = emphasize(b'*', "/deep/", MAX_INLINE_DEPTH - 1);
        assert_eq!(node.children, vec![Node::text("/deep/")]);
    }
}
