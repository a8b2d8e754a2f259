//! Line stream
//!
//!     Wraps the raw document text and hands it out one physical line at a time. Lines are
//!     split on `\n` or `\r\n`; the line terminator is not part of the returned line.

/// A cursor over the lines of an in-memory string.
#[derive(Debug, Clone)]
pub struct LineStream<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
}

impl<'a> LineStream<'a> {
    pub fn new(source: &'a str) -> Self {
        let lines = source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Self { lines, cursor: 0 }
    }

    /// The next line, without advancing the cursor.
    pub fn peek_line(&self) -> Option<&'a str> {
        self.lines.get(self.cursor).copied()
    }

    /// The next line, advancing the cursor.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek_line()?;
        self.cursor += 1;
        Some(line)
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.lines.len()
    }

    /// Number of lines consumed so far. This is also the 1-based number of the last
    /// consumed line.
    pub fn line_number(&self) -> usize {
        self.cursor
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }
}
