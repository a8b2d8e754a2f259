//! Drawers
//!
//!     `:NAME:` ... `:END:` regions. The lines in between are parsed as ordinary elements and
//!     become the drawer's children.

use super::{Parser, Scope};
use crate::org::ast::{Construct, Node, NodeKind, ParseError};

impl<'a> Parser<'a> {
    pub(super) fn parse_drawer(&mut self) -> Result<Node, ParseError> {
        let token = self.expect_next()?;
        let name = token.name().unwrap_or_default().to_string();
        log::debug!("drawer {} opened at line {}", name, token.line_number);

        let mut children = Vec::new();
        loop {
            let Some(next) = self.lexer.peek() else {
                return Err(ParseError::Unclosed {
                    construct: Construct::Drawer,
                    name,
                    line: self.lexer.line_number(),
                });
            };
            if Scope::Drawer.closes(next.line_type) {
                self.lexer.next_token();
                break;
            }
            if let Some(element) = self.parse_element(Scope::Drawer)? {
                children.push(element);
            }
        }

        Ok(Node::new(NodeKind::Drawer { name })
            .with_children(children)
            .with_line(token.line_number))
    }
}

#[cfg(test)]
mod tests {
    use crate::org::ast::{Construct, Document, NodeKind, ParseError};
    use crate::org::options::ParseOptions;
    use crate::org::parsing::Parser;

    fn parse(source: &str) -> Result<Document, ParseError> {
        Parser::new(source, ParseOptions::default()).parse()
    }

    #[test]
    fn test_drawer_collects_elements() {
        let doc = parse("* Task\n:LOGBOOK:\n- note one\n- note two\n:END:\nafter").unwrap();
        let types: Vec<_> = doc.nodes.iter().map(|n| n.node_type()).collect();
        assert_eq!(types, vec!["header", "drawer", "paragraph"]);
        let drawer = &doc.nodes[1];
        assert_eq!(
            drawer.kind,
            NodeKind::Drawer {
                name: "LOGBOOK".to_string()
            }
        );
        assert_eq!(drawer.children[0].children.len(), 2);
    }

    #[test]
    fn test_empty_drawer() {
        let doc = parse(":PROPERTIES:\n:END:").unwrap();
        assert!(doc.nodes[0].children.is_empty());
    }

    #[test]
    fn test_bare_colons_are_text() {
        let doc = parse("Some text\n::\nmore text").unwrap();
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(doc.nodes[0].text_content(), "Some text\n::\nmore text");
    }

    #[test]
    fn test_unclosed_drawer() {
        let err = parse(":PROPERTIES:\ntext").unwrap_err();
        assert_eq!(
            err,
            ParseError::Unclosed {
                construct: Construct::Drawer,
                name: "PROPERTIES".to_string(),
                line: 2,
            }
        );
    }

    #[test]
    fn test_block_end_inside_drawer_is_unmatched() {
        let err = parse(":NOTES:\n#+END_QUOTE\n:END:").unwrap_err();
        assert!(matches!(err, ParseError::UnmatchedEnd { line: 2, .. }));
    }
}
