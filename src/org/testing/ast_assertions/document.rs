//! Document-level assertions

use super::{nth, summarize, NodeAssertion};
use crate::org::ast::Document;

pub struct DocumentAssertion<'a> {
    pub(crate) doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top level nodes
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.nodes.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize(&self.doc.nodes)
        );
        self
    }

    /// Assert the node types of the top level nodes, in order
    pub fn item_types(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.nodes.iter().map(|n| n.node_type()).collect();
        assert_eq!(actual, expected, "Unexpected top level node types");
        self
    }

    /// Assert on a specific top level node
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(nth(&self.doc.nodes, index, "", "items"));
        self
    }

    pub fn title(self, expected: &str) -> Self {
        assert_eq!(self.doc.title.as_deref(), Some(expected), "Unexpected title");
        self
    }

    pub fn no_title(self) -> Self {
        assert_eq!(self.doc.title, None, "Expected no title");
        self
    }

    pub fn author(self, expected: &str) -> Self {
        assert_eq!(self.doc.author.as_deref(), Some(expected), "Unexpected author");
        self
    }

    pub fn email(self, expected: &str) -> Self {
        assert_eq!(self.doc.email.as_deref(), Some(expected), "Unexpected email");
        self
    }

    /// Assert the stored value of a keyword directive without a dedicated field
    pub fn directive_value(self, key: &str, expected: &str) -> Self {
        assert_eq!(
            self.doc.directive_values.get(key).map(String::as_str),
            Some(expected),
            "Unexpected value for directive '{}' (stored: {:?})",
            key,
            self.doc.directive_values
        );
        self
    }
}
