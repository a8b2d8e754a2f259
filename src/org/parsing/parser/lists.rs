//! Lists
//!
//!     A list is a run of list items at exactly the indentation of its first item. Everything
//!     indented deeper than the list that follows an item belongs to that item and is parsed as
//!     ordinary elements, so lists nest by indentation alone.
//!
//!     Blank lines between an item and what follows are tentatively skipped. If the next line is
//!     not a list item the last blank line is pushed back, so it can still separate a paragraph
//!     from what came before.
//!
//!     Whether a list is ordered, or a definition list, is decided by its first item only.

use super::{unhandled, Parser, Scope};
use crate::org::ast::{Node, NodeKind, ParseError};
use crate::org::inlines::{parse_inline, parse_inline_nodes};
use crate::org::token::{LineToken, LineType};

/// Term shown for definition items that have none.
const UNKNOWN_TERM: &str = "???";

impl<'a> Parser<'a> {
    pub(super) fn parse_list(&mut self, scope: Scope) -> Result<Node, ParseError> {
        let root = self.expect_next()?;
        let item = root.list_item().ok_or_else(|| unhandled(&root))?;

        let is_definition_list = root.line_type == LineType::DefinitionItem;
        let kind = if is_definition_list {
            NodeKind::DefinitionList
        } else {
            NodeKind::List {
                ordered: item.bullet.is_ordered(),
            }
        };
        log::trace!("{} at line {}", kind_name(&kind), root.line_number);

        let indentation = root.indentation;
        let line = root.line_number;
        let mut elements = vec![self.parse_list_element(root, is_definition_list, scope)?];

        loop {
            let Some(next) = self.lexer.peek() else {
                break;
            };
            if !next.is_list_item() || next.indentation != indentation {
                break;
            }
            let token = self.expect_next()?;
            elements.push(self.parse_list_element(token, is_definition_list, scope)?);
        }

        Ok(Node::new(kind).with_children(elements).with_line(line))
    }

    fn parse_list_element(
        &mut self,
        token: LineToken,
        is_definition_list: bool,
        scope: Scope,
    ) -> Result<Node, ParseError> {
        let item = token.list_item().ok_or_else(|| unhandled(&token))?;
        let root_indentation = token.indentation;

        let (kind, text) = if is_definition_list {
            let (term, definition) = match (&item.term, &item.definition) {
                (Some(term), Some(definition)) => (term.as_str(), definition.as_str()),
                _ => ("", token.content.as_str()),
            };
            let term = if term.is_empty() { UNKNOWN_TERM } else { term };
            let kind = NodeKind::DefinitionListElement {
                term: parse_inline_nodes(term),
                checkbox: item.checkbox,
            };
            (kind, definition)
        } else {
            let kind = NodeKind::ListElement {
                checkbox: item.checkbox,
            };
            (kind, token.content.as_str())
        };
        let mut children: Vec<Node> = parse_inline(text).into_iter().collect();

        while self.lexer.has_next() {
            let blank = self.skip_blank();
            let Some(next) = self.lexer.peek() else {
                break;
            };
            let next_is_list_item = next.is_list_item();
            let next_indentation = next.indentation;
            let closes_scope = scope.closes(next.line_type);

            if let Some(blank) = blank {
                if !next_is_list_item {
                    self.lexer.push_back(blank);
                }
            }
            if next_indentation <= root_indentation || closes_scope {
                break;
            }

            if let Some(element) = self.parse_element(scope)? {
                children.push(element);
            }
        }

        Ok(Node::new(kind)
            .with_children(children)
            .with_line(token.line_number))
    }
}

fn kind_name(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::DefinitionList => "definition list",
        NodeKind::List { ordered: true } => "ordered list",
        _ => "list",
    }
}
