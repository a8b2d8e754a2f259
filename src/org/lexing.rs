//! Lexer
//!
//!     The lexer turns a [LineStream] into a stream of [LineToken]s, one per physical line. It
//!     never fails: the catch-all `Line` category guarantees that every line is classified.
//!
//! Lookahead and Pushback
//!
//!     The parser needs one token of lookahead (peek) and, in one place, the ability to
//!     un-consume a token: when a blank line after a list item turns out not to separate two
//!     items it is pushed back so it can end a paragraph elsewhere. Pushed back tokens are kept
//!     on a stack and handed out again, most recent first, before any new line is classified.
//!
//! Classification
//!
//!     Classification itself is a pure function of the raw line, see
//!     [classify_line](line_classification::classify_line).

pub mod line_classification;

pub use line_classification::classify_line;

use crate::org::options::TabHandling;
use crate::org::stream::LineStream;
use crate::org::token::{LineToken, LineType};

pub struct Lexer<'a> {
    stream: LineStream<'a>,
    lookahead: Vec<LineToken>,
    tab_handling: TabHandling,
}

impl<'a> Lexer<'a> {
    pub fn new(stream: LineStream<'a>, tab_handling: TabHandling) -> Self {
        Self {
            stream,
            lookahead: Vec::new(),
            tab_handling,
        }
    }

    /// The next token, without consuming it.
    pub fn peek(&mut self) -> Option<&LineToken> {
        if self.lookahead.is_empty() {
            let token = self.classify_next()?;
            self.lookahead.push(token);
        }
        self.lookahead.last()
    }

    pub fn peek_type(&mut self) -> Option<LineType> {
        self.peek().map(|token| token.line_type)
    }

    /// The next token, consuming it.
    pub fn next_token(&mut self) -> Option<LineToken> {
        self.lookahead.pop().or_else(|| self.classify_next())
    }

    /// Un-consume a token. It is returned by the next `peek`/`next_token`.
    pub fn push_back(&mut self, token: LineToken) {
        self.lookahead.push(token);
    }

    pub fn has_next(&self) -> bool {
        !self.lookahead.is_empty() || self.stream.has_next()
    }

    /// 1-based number of the last line read from the stream.
    pub fn line_number(&self) -> usize {
        self.stream.line_number()
    }

    fn classify_next(&mut self) -> Option<LineToken> {
        let raw = self.stream.next_line()?;
        Some(classify_line(
            raw,
            self.stream.line_number(),
            self.tab_handling,
        ))
    }
}
