//! Document root

use serde::Serialize;
use std::collections::BTreeMap;

use super::node::Node;
use crate::org::options::ParseOptions;

/// The result of a successful parse.
///
/// `title`, `author` and `email` are set by the matching `#+KEYWORD:` lines. Values of any
/// other keyword line end up in `directive_values`, keyed by the lowercased name; a later line
/// replaces an earlier one. `options` holds the options as they were when parsing finished,
/// including changes made by `#+OPTIONS:` lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub nodes: Vec<Node>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub directive_values: BTreeMap<String, String>,
    pub options: ParseOptions,
}

impl Document {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            nodes: Vec::new(),
            title: None,
            author: None,
            email: None,
            directive_values: BTreeMap::new(),
            options,
        }
    }

    /// All nodes of the document, depth first.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        for node in &self.nodes {
            out.push(node);
            out.extend(node.descendants());
        }
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
