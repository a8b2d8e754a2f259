//! Document tree
//!
//!     The parser's output. Purely data: nodes are built during parsing and never touched by
//!     the parser again once [Document] is returned.

pub mod document;
pub mod error;
pub mod node;

pub use document::Document;
pub use error::{Construct, ParseError};
pub use node::{DirectiveKind, DirectiveNode, Node, NodeKind, TodoMarker};
