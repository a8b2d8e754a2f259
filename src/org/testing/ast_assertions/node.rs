//! Assertions shared by every node kind

use super::{
    nth, summarize, DirectiveAssertion, HeaderAssertion, ListAssertion, TableAssertion,
};
use crate::org::ast::{Node, NodeKind};
use crate::org::testing::matchers::TextMatch;

pub struct NodeAssertion<'a> {
    pub(crate) node: &'a Node,
    pub(crate) context: String,
}

impl<'a> NodeAssertion<'a> {
    fn expect_type(&self, expected: &str) {
        assert_eq!(
            self.node.node_type(),
            expected,
            "{}: expected {}, found {}",
            self.context,
            expected,
            self.node.node_type()
        );
    }

    pub fn node_type(self, expected: &str) -> Self {
        self.expect_type(expected);
        self
    }

    /// Assert the source line the node was created from
    pub fn line(self, expected: usize) -> Self {
        assert_eq!(
            self.node.line,
            Some(expected),
            "{}: unexpected source line",
            self.context
        );
        self
    }

    /// Match the concatenated text of the node and everything below it
    pub fn text(self, expected: impl Into<TextMatch>) -> Self {
        expected
            .into()
            .assert(&self.node.text_content(), &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.node.text_content(), &self.context);
        self
    }

    pub fn text_contains(self, needle: &str) -> Self {
        TextMatch::Contains(needle.to_string()).assert(&self.node.text_content(), &self.context);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.node.children)
        );
        self
    }

    /// Assert the node types of the children, in order
    pub fn child_types(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.node.children.iter().map(|n| n.node_type()).collect();
        assert_eq!(actual, expected, "{}: unexpected child types", self.context);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(nth(&self.node.children, index, &self.context, "children"));
        self
    }

    pub fn assert_header(self) -> HeaderAssertion<'a> {
        self.expect_type("header");
        HeaderAssertion {
            node: self.node,
            context: self.context,
        }
    }

    /// Accepts plain, ordered and definition lists alike.
    pub fn assert_list(self) -> ListAssertion<'a> {
        assert!(
            matches!(
                self.node.kind,
                NodeKind::List { .. } | NodeKind::DefinitionList
            ),
            "{}: expected list, found {}",
            self.context,
            self.node.node_type()
        );
        ListAssertion {
            node: self.node,
            context: self.context,
        }
    }

    pub fn assert_table(self) -> TableAssertion<'a> {
        self.expect_type("table");
        TableAssertion {
            node: self.node,
            context: self.context,
        }
    }

    pub fn assert_directive(self) -> DirectiveAssertion<'a> {
        self.expect_type("directive");
        DirectiveAssertion {
            node: self.node,
            context: self.context,
        }
    }

    pub fn assert_paragraph(self) -> Self {
        self.expect_type("paragraph");
        self
    }

    pub fn assert_preformatted(self) -> Self {
        self.expect_type("preformatted");
        self
    }

    pub fn assert_drawer(self, name: &str) -> Self {
        match &self.node.kind {
            NodeKind::Drawer { name: actual } => assert_eq!(
                actual, name,
                "{}: unexpected drawer name",
                self.context
            ),
            _ => panic!(
                "{}: expected drawer, found {}",
                self.context,
                self.node.node_type()
            ),
        }
        self
    }

    /// Assert a text node with exactly `value`
    pub fn assert_text(self, value: &str) -> Self {
        match &self.node.kind {
            NodeKind::Text { value: actual } => assert_eq!(
                actual, value,
                "{}: unexpected text value",
                self.context
            ),
            _ => panic!(
                "{}: expected text, found {}",
                self.context,
                self.node.node_type()
            ),
        }
        self
    }

    pub fn assert_link(self, target: &str) -> Self {
        match &self.node.kind {
            NodeKind::Link { target: actual } => assert_eq!(
                actual, target,
                "{}: unexpected link target",
                self.context
            ),
            _ => panic!(
                "{}: expected link, found {}",
                self.context,
                self.node.node_type()
            ),
        }
        self
    }
}
