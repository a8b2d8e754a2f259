//! Tables
//!
//!     A table is a run of row and separator lines. Rows are split into cells at `|`; each cell
//!     is parsed as a document of its own, so a cell can hold more than a single paragraph.
//!
//!     When the `multilineCell` option is on and the table opens with a separator line,
//!     consecutive row lines form one logical row: their cells are joined column by column with
//!     newlines.
//!
//!     If the table contains any separator line, the cells of the first row become header cells.
//!     This is applied once, after the whole table is consumed.

use super::Parser;
use crate::org::ast::{Node, NodeKind, ParseError};
use crate::org::token::{LineToken, LineType};

impl<'a> Parser<'a> {
    pub(super) fn parse_table(&mut self) -> Result<Node, ParseError> {
        let (line, opens_with_separator) = match self.lexer.peek() {
            Some(token) => (
                token.line_number,
                token.line_type == LineType::TableSeparator,
            ),
            None => (self.lexer.line_number(), false),
        };
        let multiline = opens_with_separator && self.options().multiline_cell();

        let mut rows = Vec::new();
        let mut saw_separator = false;
        while let Some(token) = self.next_if(LineToken::is_table_element) {
            if token.line_type == LineType::TableSeparator {
                saw_separator = true;
            } else {
                rows.push(self.parse_table_row(token, multiline)?);
            }
        }

        if saw_separator {
            if let Some(first_row) = rows.first_mut() {
                for cell in &mut first_row.children {
                    if let NodeKind::TableCell { header } = &mut cell.kind {
                        *header = true;
                    }
                }
            }
        }
        log::trace!("table at line {} with {} rows", line, rows.len());

        Ok(Node::new(NodeKind::Table)
            .with_children(rows)
            .with_line(line))
    }

    fn parse_table_row(&mut self, first: LineToken, multiline: bool) -> Result<Node, ParseError> {
        let line = first.line_number;
        let mut cells: Vec<String> = first.content.split('|').map(str::to_string).collect();

        if multiline {
            while let Some(token) = self.next_if(|t| t.line_type == LineType::TableRow) {
                for (index, text) in token.content.split('|').enumerate() {
                    match cells.get_mut(index) {
                        Some(cell) => {
                            cell.push('\n');
                            cell.push_str(text);
                        }
                        None => cells.push(format!("\n{}", text)),
                    }
                }
            }
        }

        let cells = cells
            .iter()
            .map(|text| self.parse_table_cell(text, line))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Node::new(NodeKind::TableRow)
            .with_children(cells)
            .with_line(line))
    }

    fn parse_table_cell(&self, text: &str, line: usize) -> Result<Node, ParseError> {
        let text = text.lines().map(str::trim).collect::<Vec<_>>().join("\n");
        let document = Parser::new(&text, self.options().clone())
            .parse()
            .map_err(|err| err.at_line(line))?;
        Ok(Node::new(NodeKind::TableCell { header: false })
            .with_children(document.nodes)
            .with_line(line))
    }
}

#[cfg(test)]
mod tests {
    use crate::org::ast::{Document, NodeKind, ParseError};
    use crate::org::options::ParseOptions;
    use crate::org::parsing::Parser;

    fn parse_with(source: &str, options: ParseOptions) -> Result<Document, ParseError> {
        Parser::new(source, options).parse()
    }

    fn parse(source: &str) -> Document {
        parse_with(source, ParseOptions::default()).unwrap()
    }

    fn header_flags(row: &crate::org::ast::Node) -> Vec<bool> {
        row.children
            .iter()
            .map(|cell| matches!(cell.kind, NodeKind::TableCell { header: true }))
            .collect()
    }

    #[test]
    fn test_separator_marks_first_row_as_header() {
        let doc = parse("| a | b |\n|---|---|\n| 1 | 2 |");
        let table = &doc.nodes[0];
        assert_eq!(table.children.len(), 2);
        assert_eq!(header_flags(&table.children[0]), vec![true, true]);
        assert_eq!(header_flags(&table.children[1]), vec![false, false]);
        assert_eq!(table.children[1].children[1].text_content(), "2");
    }

    #[test]
    fn test_no_separator_no_header() {
        let doc = parse("| a | b |\n| 1 | 2 |");
        assert_eq!(header_flags(&doc.nodes[0].children[0]), vec![false, false]);
    }

    #[test]
    fn test_cell_is_a_document() {
        let doc = parse("| *bold* | - item |");
        let row = &doc.nodes[0].children[0];
        assert_eq!(row.children[0].children[0].node_type(), "paragraph");
        assert_eq!(row.children[1].children[0].node_type(), "list");
    }

    #[test]
    fn test_empty_cell_has_no_children() {
        let doc = parse("| a || b |");
        let row = &doc.nodes[0].children[0];
        assert_eq!(row.children.len(), 3);
        assert!(row.children[1].children.is_empty());
    }

    #[test]
    fn test_multiline_cells() {
        let options = ParseOptions::default().with("multilineCell", true);
        let doc = parse_with("|---|---|\n| a | b |\n| c | d |\n|---|---|\n| e | f |", options)
            .unwrap();
        let table = &doc.nodes[0];
        assert_eq!(table.children.len(), 2);
        assert_eq!(table.children[0].children[0].text_content(), "a\nc");
        assert_eq!(header_flags(&table.children[0]), vec![true, true]);
    }

    #[test]
    fn test_multiline_needs_leading_separator() {
        let options = ParseOptions::default().with("multilineCell", true);
        let doc = parse_with("| a |\n| b |", options).unwrap();
        assert_eq!(doc.nodes[0].children.len(), 2);
    }

    #[test]
    fn test_cell_error_is_reported_at_row() {
        let err = parse_with("text\n| #+BEGIN_SRC |", ParseOptions::default()).unwrap_err();
        assert_eq!(err.line(), 2);
    }
}
