//! Structural parsing
//!
//!     The parser is a recursive descent over the token stream of the [lexer](crate::org::lexing).
//!     It looks at the category of the next token only and hands off to a routine dedicated to
//!     that construct:
//!
//!         <document>     ::= <element>*
//!         <element>      ::= <header> | <list> | <table> | <preformatted> | <paragraph>
//!                          | <directive> | <block> | <drawer> | <horizontal-rule>
//!                          | <blank>+ <element> | <comment>
//!         <list>         ::= <list-element>+              (same indentation)
//!         <list-element> ::= <list-item> <element>*       (deeper indentation)
//!         <table>        ::= (<table-row> | <table-separator>)+
//!         <block>        ::= <block-begin> <element>* <block-end>
//!         <drawer>       ::= <drawer-begin> <element>* <drawer-end>
//!
//!     Constructs that contain other elements (list elements, blocks, drawers) call back into
//!     the general element routine. A [Scope] travels along with those calls so that the
//!     element routine knows which closing lines belong to an enclosing construct and must be
//!     left for it to consume.
//!
//!     Free text is given to the [inline parser](crate::org::inlines). Table cells are the only
//!     text parsed again as structure: each cell is an independent document.
//!
//! Errors
//!
//!     The first error aborts the parse. See [ParseError](crate::org::ast::ParseError).

pub mod parser;

pub use parser::{Parser, Scope, MAX_NESTING_DEPTH};
