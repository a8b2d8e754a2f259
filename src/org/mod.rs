//! Main module for org library functionality
//!
//!     The pipeline is strictly sequential and synchronous: a [LineStream](stream::LineStream)
//!     hands raw lines to the [Lexer](lexing::Lexer), which classifies each one into a
//!     [LineToken](token::LineToken). The [Parser](parsing::Parser) consumes those tokens by
//!     recursive descent and hands free text to the [inline parser](inlines). The result is a
//!     [Document](ast::Document), owned by the caller and detached from the parser.
//!
//!     Every parse builds its own stream, lexer and parser, so separate documents can be parsed
//!     on separate threads without coordination.

pub mod ast;
pub mod config;
pub mod formats;
pub mod inlines;
pub mod lexing;
pub mod options;
pub mod parsing;
pub mod stream;
pub mod testing;
pub mod token;

pub use ast::{
    Construct, DirectiveKind, DirectiveNode, Document, Node, NodeKind, ParseError, TodoMarker,
};
pub use config::{Loader, OrgConfig};
pub use inlines::parse_inline;
pub use options::{OptionValue, ParseOptions, TabHandling};
pub use parsing::{Parser, Scope};

/// Parse a document with the default options.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    parse_with_options(source, ParseOptions::default())
}

/// Parse a document with caller supplied options.
pub fn parse_with_options(source: &str, options: ParseOptions) -> Result<Document, ParseError> {
    Parser::new(source, options).parse()
}
