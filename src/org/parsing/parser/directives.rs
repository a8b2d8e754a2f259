//! Directives and blocks
//!
//!     Three shapes share the `#+` sigil:
//!
//!         #+NAME: value                  keyword line, interpreted on the spot
//!         #+BEGIN_NAME params ... #+END_NAME
//!         #+BEGIN: NAME params ... #+END:
//!
//!     Keyword lines take effect immediately: `OPTIONS` updates the live parse options, `TITLE`,
//!     `AUTHOR` and `EMAIL` set the document fields and anything else is stored in the document's
//!     directive values. A node is emitted for them as well.
//!
//!     Blocks named `src`, `example` or `html` are verbatim: their lines are kept as raw text.
//!     All other blocks contain ordinary elements. Block names are compared case-insensitively.

use super::{Parser, Scope};
use crate::org::ast::{Construct, DirectiveKind, DirectiveNode, Node, NodeKind, ParseError};
use crate::org::token::{LineToken, LineType};

const VERBATIM_BLOCKS: &[&str] = &["src", "example", "html"];

impl<'a> Parser<'a> {
    pub(super) fn parse_keyword_directive(&mut self) -> Result<Node, ParseError> {
        let token = self.expect_next()?;
        let name = token.name().unwrap_or_default();
        let directive =
            DirectiveNode::new(name, DirectiveKind::Keyword, token.parameters().unwrap_or_default());

        if matches!(directive.name.as_str(), "begin" | "end") {
            return Err(ParseError::InvalidDirective {
                name: name.to_string(),
                line: token.line_number,
            });
        }

        self.interpret(&directive);
        Ok(Node::new(NodeKind::Directive(directive)).with_line(token.line_number))
    }

    fn interpret(&mut self, directive: &DirectiveNode) {
        let value = directive.raw_value.clone();
        log::debug!("directive {} = {:?}", directive.name, value);
        match directive.name.as_str() {
            "options" => {
                let arguments = directive.arguments.iter().map(String::as_str);
                self.document.options.apply_directive_arguments(arguments);
            }
            "title" => self.document.title = Some(value),
            "author" => self.document.author = Some(value),
            "email" => self.document.email = Some(value),
            other => {
                self.document
                    .directive_values
                    .insert(other.to_string(), value);
            }
        }
    }

    pub(super) fn parse_block(&mut self) -> Result<Node, ParseError> {
        let token = self.expect_next()?;
        let (node, written_name) = block_node(&token, DirectiveKind::Block);
        log::debug!("block {} opened at line {}", written_name, token.line_number);

        let lowercase_name = written_name.to_lowercase();
        if VERBATIM_BLOCKS.contains(&lowercase_name.as_str()) {
            return self.parse_verbatim_block(node, &written_name);
        }

        self.parse_block_body(node, &written_name, Construct::Block, |token| {
            token.line_type == LineType::BlockEnd
                && token
                    .name()
                    .is_some_and(|name| name.to_lowercase() == lowercase_name)
        })
    }

    pub(super) fn parse_dynamic_block(&mut self) -> Result<Node, ParseError> {
        let token = self.expect_next()?;
        let (node, written_name) = block_node(&token, DirectiveKind::DynamicBlock);
        log::debug!(
            "dynamic block {} opened at line {}",
            written_name,
            token.line_number
        );

        self.parse_block_body(node, &written_name, Construct::DynamicBlock, |token| {
            token.line_type == LineType::DynamicBlockEnd
        })
    }

    /// Parse elements until the line accepted by `is_end`. Any other closing line is an error.
    fn parse_block_body(
        &mut self,
        mut node: Node,
        name: &str,
        construct: Construct,
        is_end: impl Fn(&LineToken) -> bool,
    ) -> Result<Node, ParseError> {
        loop {
            let Some(next) = self.lexer.peek() else {
                return Err(ParseError::Unclosed {
                    construct,
                    name: name.to_string(),
                    line: self.lexer.line_number(),
                });
            };

            if is_end(next) {
                self.lexer.next_token();
                return Ok(node);
            }
            if Scope::Block.closes(next.line_type) {
                let token = self.expect_next()?;
                return Err(super::unmatched_end(&token));
            }

            if let Some(element) = self.parse_element(Scope::Block)? {
                node.children.push(element);
            }
        }
    }

    fn parse_verbatim_block(&mut self, node: Node, name: &str) -> Result<Node, ParseError> {
        let lowercase_name = name.to_lowercase();
        let mut lines = Vec::new();
        loop {
            let Some(token) = self.lexer.next_token() else {
                return Err(ParseError::Unclosed {
                    construct: Construct::Block,
                    name: name.to_string(),
                    line: self.lexer.line_number(),
                });
            };
            let closes = token.line_type == LineType::BlockEnd
                && token
                    .name()
                    .is_some_and(|end| end.to_lowercase() == lowercase_name);
            if closes {
                break;
            }
            lines.push(token.raw);
        }
        Ok(node.with_children(vec![Node::text(lines.join("\n"))]))
    }
}

fn block_node(token: &LineToken, kind: DirectiveKind) -> (Node, String) {
    let name = token.name().unwrap_or_default();
    let directive = DirectiveNode::new(name, kind, token.parameters().unwrap_or_default());
    let node = Node::new(NodeKind::Directive(directive)).with_line(token.line_number);
    (node, name.to_string())
}
