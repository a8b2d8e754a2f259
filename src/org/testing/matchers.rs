//! Text matching for assertions

/// How an actual string is compared with an expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
    Empty,
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix.as_str()),
            TextMatch::Contains(needle) => actual.contains(needle.as_str()),
            TextMatch::Empty => actual.is_empty(),
        }
    }

    fn describe(&self) -> String {
        match self {
            TextMatch::Exact(expected) => format!("text {:?}", expected),
            TextMatch::StartsWith(prefix) => format!("text starting with {:?}", prefix),
            TextMatch::Contains(needle) => format!("text containing {:?}", needle),
            TextMatch::Empty => "empty text".to_string(),
        }
    }

    /// Panic unless `actual` matches, naming `context` in the message.
    pub fn assert(&self, actual: &str, context: &str) {
        assert!(
            self.matches(actual),
            "{}: expected {}, found {:?}",
            context,
            self.describe(),
            actual
        );
    }
}

impl From<&str> for TextMatch {
    fn from(expected: &str) -> Self {
        TextMatch::Exact(expected.to_string())
    }
}
