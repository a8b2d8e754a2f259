//! Headers and TODO items
//!
//!     A TODO-shaped line is only a TODO item when its keyword is configured in
//!     [ParseOptions::todo_keywords](crate::org::options::ParseOptions). Otherwise the header
//!     reading of the same line is used, keyword included in the title.

use super::{unhandled, Parser};
use crate::org::ast::{Node, NodeKind, ParseError, TodoMarker};
use crate::org::inlines::parse_inline;

impl<'a> Parser<'a> {
    pub(super) fn parse_header(&mut self) -> Result<Node, ParseError> {
        let token = self.expect_next()?;

        let (depth, tags, todo, content) = match token.todo() {
            Some(todo) if self.options().is_todo_keyword(&todo.keyword) => (
                todo.depth,
                todo.tags.clone(),
                Some(TodoMarker {
                    keyword: todo.keyword.clone(),
                    priority: todo.priority,
                }),
                todo.content.as_str(),
            ),
            _ => {
                let header = token.header().ok_or_else(|| unhandled(&token))?;
                (header.depth, header.tags.clone(), None, header.content.as_str())
            }
        };

        let node = Node::new(NodeKind::Header { depth, tags, todo })
            .with_children(parse_inline(content).into_iter().collect())
            .with_line(token.line_number);
        Ok(node)
    }
}
