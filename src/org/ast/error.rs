//! Parse errors
//!
//!     Every error is fatal for the whole document: the parser stops at the first one and no
//!     partial tree is returned. All variants carry the 1-based line at which the problem was
//!     detected.

use std::fmt;

use crate::org::token::LineType;

/// The kind of bracketed region an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Block,
    DynamicBlock,
    Drawer,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Construct::Block => "block",
            Construct::DynamicBlock => "dynamic block",
            Construct::Drawer => "drawer",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input ended before the closing line of a block, dynamic block or drawer
    #[error("unclosed {construct} '{name}' at line {line}")]
    Unclosed {
        construct: Construct,
        name: String,
        line: usize,
    },

    /// A closing line with no matching opening line
    #[error("unmatched end of {construct} '{name}' at line {line}")]
    UnmatchedEnd {
        construct: Construct,
        name: String,
        line: usize,
    },

    #[error("invalid directive '{name}' at line {line}")]
    InvalidDirective { name: String, line: usize },

    #[error("unhandled token {line_type} at line {line}")]
    UnhandledToken { line_type: LineType, line: usize },

    /// Elements nested deeper than the parser follows
    #[error("nesting deeper than {max} levels at line {line}")]
    TooDeep { max: usize, line: usize },

    #[error("unexpected end of input at line {line}")]
    UnexpectedEnd { line: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Unclosed { line, .. }
            | ParseError::UnmatchedEnd { line, .. }
            | ParseError::InvalidDirective { line, .. }
            | ParseError::UnhandledToken { line, .. }
            | ParseError::TooDeep { line, .. }
            | ParseError::UnexpectedEnd { line } => *line,
        }
    }

    /// The same error, reported at another line.
    pub fn at_line(mut self, new_line: usize) -> Self {
        match &mut self {
            ParseError::Unclosed { line, .. }
            | ParseError::UnmatchedEnd { line, .. }
            | ParseError::InvalidDirective { line, .. }
            | ParseError::UnhandledToken { line, .. }
            | ParseError::TooDeep { line, .. }
            | ParseError::UnexpectedEnd { line } => *line = new_line,
        }
        self
    }
}
