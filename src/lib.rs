//! # orgtree
//!
//! A parser for org-mode outline documents.
//!
//! File Layout
//!
//! Parsing happens in two line-oriented stages plus an inline pass:
//!
//! src/org
//!   ├── stream       Line splitting over an in-memory string
//!   ├── lexing       Line classification (one token per physical line)
//!   ├── token        Line token model
//!   ├── parsing      Recursive descent over line tokens
//!   ├── inlines      Emphasis and link parsing inside text runs
//!   ├── ast          The document tree handed to callers
//!   ├── options      Parse options, updated by `#+OPTIONS:` while parsing
//!   ├── config       Layered TOML configuration producing initial options
//!   ├── formats      Human readable dumps of the tree (treeviz)
//!   └── testing      Fluent AST assertions and verified sample files
//!
//! For testing guidelines, see the [testing module](org::testing).

pub mod org;

pub use org::{parse, parse_with_options, Document, Node, NodeKind, ParseError, ParseOptions};
