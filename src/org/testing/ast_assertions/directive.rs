//! Directive and block assertions

use super::{nth, NodeAssertion};
use crate::org::ast::{DirectiveKind, DirectiveNode, Node};
use crate::org::testing::matchers::TextMatch;

pub struct DirectiveAssertion<'a> {
    pub(crate) node: &'a Node,
    pub(crate) context: String,
}

impl<'a> DirectiveAssertion<'a> {
    fn directive(&self) -> &'a DirectiveNode {
        match self.node.directive() {
            Some(directive) => directive,
            None => unreachable!("DirectiveAssertion built for a non-directive node"),
        }
    }

    /// Assert the lowercased directive name
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.directive().name, expected, "{}: unexpected name", self.context);
        self
    }

    pub fn kind(self, expected: DirectiveKind) -> Self {
        assert_eq!(self.directive().kind, expected, "{}: unexpected kind", self.context);
        self
    }

    pub fn arguments(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.directive().arguments,
            expected,
            "{}: unexpected arguments",
            self.context
        );
        self
    }

    pub fn options(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.directive().options,
            expected,
            "{}: unexpected options",
            self.context
        );
        self
    }

    pub fn raw_value(self, expected: &str) -> Self {
        assert_eq!(
            self.directive().raw_value,
            expected,
            "{}: unexpected raw value",
            self.context
        );
        self
    }

    /// Match the text of the block's content
    pub fn text(self, expected: impl Into<TextMatch>) -> Self {
        expected
            .into()
            .assert(&self.node.text_content(), &self.context);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.children.len(),
            expected,
            "{}: unexpected number of children",
            self.context
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(nth(&self.node.children, index, &self.context, "children"));
        self
    }
}
