//! Header assertions

use crate::org::ast::{Node, NodeKind, TodoMarker};
use crate::org::testing::matchers::TextMatch;

pub struct HeaderAssertion<'a> {
    pub(crate) node: &'a Node,
    pub(crate) context: String,
}

impl<'a> HeaderAssertion<'a> {
    fn parts(&self) -> (usize, &'a [String], Option<&'a TodoMarker>) {
        match &self.node.kind {
            NodeKind::Header { depth, tags, todo } => (*depth, tags.as_slice(), todo.as_ref()),
            _ => unreachable!("HeaderAssertion built for a non-header node"),
        }
    }

    pub fn depth(self, expected: usize) -> Self {
        let (depth, _, _) = self.parts();
        assert_eq!(depth, expected, "{}: unexpected header depth", self.context);
        self
    }

    pub fn tags(self, expected: &[&str]) -> Self {
        let (_, tags, _) = self.parts();
        assert_eq!(tags, expected, "{}: unexpected header tags", self.context);
        self
    }

    /// Match the header's inline text
    pub fn title(self, expected: impl Into<TextMatch>) -> Self {
        expected
            .into()
            .assert(&self.node.text_content(), &self.context);
        self
    }

    pub fn todo(self, keyword: &str) -> Self {
        let (_, _, todo) = self.parts();
        let actual = todo.map(|t| t.keyword.as_str());
        assert_eq!(
            actual,
            Some(keyword),
            "{}: unexpected TODO keyword",
            self.context
        );
        self
    }

    pub fn no_todo(self) -> Self {
        let (_, _, todo) = self.parts();
        assert!(
            todo.is_none(),
            "{}: expected a plain header, found {:?}",
            self.context,
            todo
        );
        self
    }

    pub fn priority(self, expected: char) -> Self {
        let (_, _, todo) = self.parts();
        assert_eq!(
            todo.and_then(|t| t.priority),
            Some(expected),
            "{}: unexpected priority",
            self.context
        );
        self
    }
}
