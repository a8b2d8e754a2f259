//! Paragraphs and preformatted text

use super::Parser;
use crate::org::ast::{Node, NodeKind};
use crate::org::inlines::parse_inline;
use crate::org::token::LineType;

impl<'a> Parser<'a> {
    /// Consecutive plain lines, indented at least as deep as the first, joined by newlines.
    pub(super) fn parse_paragraph(&mut self) -> Node {
        let (line, lines) = self.take_run(LineType::Line);
        let text = lines.join("\n");
        Node::new(NodeKind::Paragraph)
            .with_children(parse_inline(&text).into_iter().collect())
            .with_line(line)
    }

    /// Consecutive `: ` lines. The text is kept verbatim.
    pub(super) fn parse_preformatted(&mut self) -> Node {
        let (line, lines) = self.take_run(LineType::Preformatted);
        Node::new(NodeKind::Preformatted)
            .with_children(vec![Node::text(lines.join("\n"))])
            .with_line(line)
    }

    /// Consume tokens of `line_type` at or beyond the first one's indentation. Returns the
    /// first line number and the contents.
    fn take_run(&mut self, line_type: LineType) -> (usize, Vec<String>) {
        let (first_line, indentation) = match self.lexer.peek() {
            Some(token) => (token.line_number, token.indentation),
            None => (self.lexer.line_number(), 0),
        };

        let mut contents = Vec::new();
        while let Some(token) =
            self.next_if(|t| t.line_type == line_type && t.indentation >= indentation)
        {
            contents.push(token.content);
        }
        (first_line, contents)
    }
}
