//! Table assertions

use super::{nth, NodeAssertion};
use crate::org::ast::{Node, NodeKind};

pub struct TableAssertion<'a> {
    pub(crate) node: &'a Node,
    pub(crate) context: String,
}

impl<'a> TableAssertion<'a> {
    fn row_at(&self, index: usize) -> NodeAssertion<'a> {
        let row = nth(&self.node.children, index, &self.context, "rows");
        assert_eq!(
            row.node.kind,
            NodeKind::TableRow,
            "{}: expected table row",
            row.context
        );
        row
    }

    pub fn row_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.children.len(),
            expected,
            "{}: unexpected number of rows",
            self.context
        );
        self
    }

    /// Assert the text of every cell of one row
    pub fn cells(self, row: usize, expected: &[&str]) -> Self {
        let row = self.row_at(row);
        let actual: Vec<String> = row.node.children.iter().map(Node::text_content).collect();
        assert_eq!(actual, expected, "{}: unexpected cell text", row.context);
        self
    }

    /// Assert whether all cells of one row are header cells
    pub fn header_row(self, row: usize, expected: bool) -> Self {
        let row = self.row_at(row);
        for (i, cell) in row.node.children.iter().enumerate() {
            assert_eq!(
                cell.kind,
                NodeKind::TableCell { header: expected },
                "{}:cells[{}]: unexpected header flag",
                row.context,
                i
            );
        }
        self
    }

    pub fn cell<F>(self, row: usize, column: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let row = self.row_at(row);
        assertion(nth(&row.node.children, column, &row.context, "cells"));
        self
    }
}
