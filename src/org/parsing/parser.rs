//! Parser state and element dispatch

mod directives;
mod drawers;
mod headers;
mod lists;
mod paragraphs;
mod tables;

use crate::org::ast::{Construct, Document, Node, NodeKind, ParseError};
use crate::org::lexing::Lexer;
use crate::org::options::ParseOptions;
use crate::org::stream::LineStream;
use crate::org::token::{LineToken, LineType};

/// Deepest nesting of elements (list items, blocks, drawers) that is parsed. Deeper input is a
/// [ParseError::TooDeep].
pub const MAX_NESTING_DEPTH: usize = 64;

/// The construct whose elements are being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Document,
    /// Inside a block or dynamic block
    Block,
    Drawer,
}

impl Scope {
    /// Whether a line of this type ends the scope.
    pub fn closes(self, line_type: LineType) -> bool {
        match self {
            Scope::Document => false,
            Scope::Block => matches!(line_type, LineType::BlockEnd | LineType::DynamicBlockEnd),
            Scope::Drawer => line_type == LineType::DrawerEnd,
        }
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    document: Document,
    /// Number of `parse_element` calls currently on the stack
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, options: ParseOptions) -> Self {
        Self::from_stream(LineStream::new(source), options)
    }

    pub fn from_stream(stream: LineStream<'a>, options: ParseOptions) -> Self {
        let lexer = Lexer::new(stream, options.tab_handling);
        Self {
            lexer,
            document: Document::new(options),
            depth: 0,
        }
    }

    /// Parse the whole input.
    pub fn parse(mut self) -> Result<Document, ParseError> {
        while self.lexer.has_next() {
            if let Some(node) = self.parse_element(Scope::Document)? {
                self.document.nodes.push(node);
            }
        }
        log::debug!(
            "parsed {} top level nodes from {} lines",
            self.document.nodes.len(),
            self.lexer.line_number()
        );
        Ok(self.document)
    }

    fn options(&self) -> &ParseOptions {
        &self.document.options
    }

    /// Parse the next element.
    ///
    /// Returns `Ok(None)` when the next line produces no node (comments, trailing blanks) and
    /// when it closes `scope`. A closing line is left in the stream.
    fn parse_element(&mut self, scope: Scope) -> Result<Option<Node>, ParseError> {
        let Some(token) = self.lexer.peek() else {
            return Ok(None);
        };
        let line_type = token.line_type;
        if scope.closes(line_type) {
            return Ok(None);
        }
        if self.depth == MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeep {
                max: MAX_NESTING_DEPTH,
                line: token.line_number,
            });
        }
        log::trace!("line {}: {}", token.line_number, line_type);

        self.depth += 1;
        let result = self.dispatch(line_type, scope);
        self.depth -= 1;
        result
    }

    fn dispatch(&mut self, line_type: LineType, scope: Scope) -> Result<Option<Node>, ParseError> {
        let node = match line_type {
            LineType::Header | LineType::Todo => self.parse_header()?,
            LineType::Preformatted => self.parse_preformatted(),
            LineType::ListItem | LineType::DefinitionItem => self.parse_list(scope)?,
            LineType::Line => self.parse_paragraph(),
            LineType::TableRow | LineType::TableSeparator => self.parse_table()?,
            LineType::Directive => self.parse_keyword_directive()?,
            LineType::BlockBegin => self.parse_block()?,
            LineType::DynamicBlockBegin => self.parse_dynamic_block()?,
            LineType::DrawerBegin => self.parse_drawer()?,
            LineType::HorizontalRule => {
                let token = self.expect_next()?;
                Node::new(NodeKind::HorizontalRule).with_line(token.line_number)
            }
            LineType::Blank => {
                self.skip_blank();
                return match self.lexer.peek_type() {
                    None => Ok(None),
                    Some(LineType::Line) => Ok(Some(self.parse_paragraph())),
                    Some(_) => self.parse_element(scope),
                };
            }
            LineType::Comment => {
                self.lexer.next_token();
                return Ok(None);
            }
            LineType::BlockEnd | LineType::DynamicBlockEnd | LineType::DrawerEnd => {
                let token = self.expect_next()?;
                return Err(unmatched_end(&token));
            }
        };
        Ok(Some(node))
    }

    /// Consume blank lines, returning the last one.
    fn skip_blank(&mut self) -> Option<LineToken> {
        let mut blank = None;
        while self.lexer.peek_type() == Some(LineType::Blank) {
            blank = self.lexer.next_token();
        }
        blank
    }

    /// Consume the next token if `accept` holds for it.
    fn next_if(&mut self, accept: impl Fn(&LineToken) -> bool) -> Option<LineToken> {
        if self.lexer.peek().is_some_and(accept) {
            self.lexer.next_token()
        } else {
            None
        }
    }

    /// Consume the token the dispatcher has already peeked at.
    fn expect_next(&mut self) -> Result<LineToken, ParseError> {
        self.lexer
            .next_token()
            .ok_or_else(|| ParseError::UnexpectedEnd {
                line: self.lexer.line_number(),
            })
    }
}

fn unhandled(token: &LineToken) -> ParseError {
    ParseError::UnhandledToken {
        line_type: token.line_type,
        line: token.line_number,
    }
}

fn unmatched_end(token: &LineToken) -> ParseError {
    let construct = match token.line_type {
        LineType::DynamicBlockEnd => Construct::DynamicBlock,
        LineType::DrawerEnd => Construct::Drawer,
        _ => Construct::Block,
    };
    ParseError::UnmatchedEnd {
        construct,
        name: token.name().unwrap_or_default().to_string(),
        line: token.line_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn parse(source: &str) -> Result<Document, ParseError> {
        init_logger();
        Parser::new(source, ParseOptions::default()).parse()
    }

    fn types(doc: &Document) -> Vec<&'static str> {
        doc.nodes.iter().map(|n| n.node_type()).collect()
    }

    #[test]
    fn test_scope_closers() {
        assert!(!Scope::Document.closes(LineType::BlockEnd));
        assert!(Scope::Block.closes(LineType::BlockEnd));
        assert!(Scope::Block.closes(LineType::DynamicBlockEnd));
        assert!(!Scope::Block.closes(LineType::DrawerEnd));
        assert!(Scope::Drawer.closes(LineType::DrawerEnd));
    }

    #[test]
    fn test_dispatch_by_line_type() {
        let doc = parse("* H\n- a\n| c |\n: pre\n-----\ntext\n#+TITLE: T").unwrap();
        assert_eq!(
            types(&doc),
            vec![
                "header",
                "list",
                "table",
                "preformatted",
                "horizontalRule",
                "paragraph",
                "directive"
            ]
        );
    }

    #[test]
    fn test_comments_are_dropped() {
        let doc = parse("# note\ntext\n# another").unwrap();
        assert_eq!(types(&doc), vec!["paragraph"]);
    }

    #[test]
    fn test_blank_lines_produce_no_nodes() {
        let doc = parse("\n\n\n").unwrap();
        assert!(doc.nodes.is_empty());
    }

    #[test]
    fn test_stray_end_lines_are_errors() {
        let err = parse("text\n#+END_SRC").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnmatchedEnd {
                construct: Construct::Block,
                name: "SRC".to_string(),
                line: 2
            }
        );

        let err = parse(":END:").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnmatchedEnd {
                construct: Construct::Drawer,
                line: 1,
                ..
            }
        ));

        let err = parse("#+END:").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnmatchedEnd {
                construct: Construct::DynamicBlock,
                ..
            }
        ));
    }

    #[test]
    fn test_exhausted_input_is_an_unexpected_end() {
        let mut parser = Parser::new("text", ParseOptions::default());
        assert!(parser.expect_next().is_ok());
        assert_eq!(
            parser.expect_next().unwrap_err(),
            ParseError::UnexpectedEnd { line: 1 }
        );
    }

    #[test]
    fn test_nesting_up_to_the_limit_parses() {
        let source: String = (0..MAX_NESTING_DEPTH)
            .map(|i| format!("{}- x\n", " ".repeat(i)))
            .collect();
        let doc = parse(&source).unwrap();
        assert_eq!(doc.nodes.len(), 1);
    }

    #[test]
    fn test_deep_list_nesting_is_an_error() {
        let source: String = (0..300)
            .map(|i| format!("{}- x\n", " ".repeat(i)))
            .collect();
        assert_eq!(
            parse(&source).unwrap_err(),
            ParseError::TooDeep {
                max: MAX_NESTING_DEPTH,
                line: MAX_NESTING_DEPTH + 1,
            }
        );
    }

    #[test]
    fn test_deep_block_nesting_is_an_error() {
        let source = format!(
            "{}{}",
            "#+BEGIN_QUOTE\n".repeat(300),
            "#+END_QUOTE\n".repeat(300)
        );
        assert_eq!(
            parse(&source).unwrap_err(),
            ParseError::TooDeep {
                max: MAX_NESTING_DEPTH,
                line: MAX_NESTING_DEPTH + 1,
            }
        );
    }

    #[test]
    fn test_node_lines() {
        let doc = parse("\n* H\n\ntext").unwrap();
        assert_eq!(doc.nodes[0].line, Some(2));
        assert_eq!(doc.nodes[1].line, Some(4));
    }
}
