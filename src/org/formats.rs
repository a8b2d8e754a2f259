//! Output formats for parsed documents
//!
//!     Parsed documents serialize to JSON through serde (see [Document::to_json]). The formats
//!     here are for humans: [treeviz] draws the node tree one line per node.
//!
//! [Document::to_json]: crate::org::ast::Document::to_json

pub mod treeviz;

pub use treeviz::{node_to_treeviz_str, to_treeviz_str, to_treeviz_str_with_params};
