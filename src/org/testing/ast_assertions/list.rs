//! List and list element assertions

use super::{nth, summarize, NodeAssertion};
use crate::org::ast::{Node, NodeKind};
use crate::org::testing::matchers::TextMatch;
use crate::org::token::Checkbox;

pub struct ListAssertion<'a> {
    pub(crate) node: &'a Node,
    pub(crate) context: String,
}

impl<'a> ListAssertion<'a> {
    pub fn ordered(self, expected: bool) -> Self {
        assert_eq!(
            self.node.kind,
            NodeKind::List { ordered: expected },
            "{}: unexpected list kind",
            self.context
        );
        self
    }

    pub fn definition(self) -> Self {
        assert_eq!(
            self.node.kind,
            NodeKind::DefinitionList,
            "{}: expected a definition list",
            self.context
        );
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.node.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} list items, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.node.children)
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ListElementAssertion<'a>),
    {
        let NodeAssertion { node, context } =
            nth(&self.node.children, index, &self.context, "items");
        assert!(
            matches!(
                node.kind,
                NodeKind::ListElement { .. } | NodeKind::DefinitionListElement { .. }
            ),
            "{}: expected list element, found {}",
            context,
            node.node_type()
        );
        assertion(ListElementAssertion { node, context });
        self
    }
}

pub struct ListElementAssertion<'a> {
    pub(crate) node: &'a Node,
    pub(crate) context: String,
}

impl<'a> ListElementAssertion<'a> {
    fn checkbox(&self) -> Option<Checkbox> {
        match &self.node.kind {
            NodeKind::ListElement { checkbox } | NodeKind::DefinitionListElement { checkbox, .. } => {
                *checkbox
            }
            _ => None,
        }
    }

    pub fn checked(self) -> Self {
        assert_eq!(self.checkbox(), Some(Checkbox::Checked), "{}", self.context);
        self
    }

    pub fn unchecked(self) -> Self {
        assert_eq!(self.checkbox(), Some(Checkbox::Unchecked), "{}", self.context);
        self
    }

    pub fn partial(self) -> Self {
        assert_eq!(self.checkbox(), Some(Checkbox::Partial), "{}", self.context);
        self
    }

    pub fn no_checkbox(self) -> Self {
        assert_eq!(self.checkbox(), None, "{}", self.context);
        self
    }

    /// Match the text of a definition item's term
    pub fn term(self, expected: impl Into<TextMatch>) -> Self {
        let NodeKind::DefinitionListElement { term, .. } = &self.node.kind else {
            panic!(
                "{}: expected definition list element, found {}",
                self.context,
                self.node.node_type()
            );
        };
        let text: String = term.iter().map(Node::text_content).collect();
        expected.into().assert(&text, &self.context);
        self
    }

    /// Match the text of the element's first child, the item's own line
    pub fn text(self, expected: impl Into<TextMatch>) -> Self {
        let text = self
            .node
            .children
            .first()
            .filter(|child| child.is_inline())
            .map(Node::text_content)
            .unwrap_or_default();
        expected.into().assert(&text, &self.context);
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

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(nth(&self.node.children, index, &self.context, "children"));
        self
    }
}
