//! Parse options
//!
//!     The parser consults a small set of keys while parsing (`toc`, `num`, `^` and
//!     `multilineCell`). Any other key is accepted and stored untouched so downstream tools can
//!     read it from [Document::options](crate::org::ast::Document). `#+OPTIONS:` lines update
//!     the live options mid-parse, using the lisp-like value notation of org files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const TOC: &str = "toc";
pub const NUM: &str = "num";
pub const SUPERSCRIPT: &str = "^";
pub const MULTILINE_CELL: &str = "multilineCell";

/// A single option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl OptionValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            OptionValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

/// Decode a lisp-like option value: `t` is true, `nil` is false, a run of digits is an
/// integer and anything else is kept as text.
pub fn decode_lisp_value(raw: &str) -> OptionValue {
    match raw {
        "t" => OptionValue::Bool(true),
        "nil" => OptionValue::Bool(false),
        digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => digits
            .parse()
            .map(OptionValue::Integer)
            .unwrap_or_else(|_| OptionValue::Text(digits.to_string())),
        other => OptionValue::Text(other.to_string()),
    }
}

/// How tabs count towards a line's indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabHandling {
    /// Every whitespace character, tabs included, is one column
    #[default]
    PerCharacter,
    /// Tabs advance to the next multiple of the given width
    Expand(usize),
}

impl TabHandling {
    /// Width of the leading whitespace of `line`.
    pub fn indentation_of(self, line: &str) -> usize {
        let mut column = 0;
        for ch in line.chars() {
            match (ch, self) {
                ('\t', TabHandling::Expand(width)) if width > 0 => {
                    column = (column / width + 1) * width;
                }
                (c, _) if c.is_whitespace() && c != '\n' => column += 1,
                _ => break,
            }
        }
        column
    }
}

/// Options in effect for one parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOptions {
    values: BTreeMap<String, OptionValue>,
    /// Keywords that turn a header into a TODO item
    pub todo_keywords: Vec<String>,
    pub tab_handling: TabHandling,
}

impl Default for ParseOptions {
    fn default() -> Self {
        let mut values = BTreeMap::new();
        values.insert(TOC.to_string(), OptionValue::Bool(true));
        values.insert(NUM.to_string(), OptionValue::Bool(true));
        values.insert(SUPERSCRIPT.to_string(), OptionValue::Text("{}".to_string()));
        values.insert(MULTILINE_CELL.to_string(), OptionValue::Bool(false));
        Self {
            values,
            todo_keywords: vec!["TODO".to_string(), "DONE".to_string()],
            tab_handling: TabHandling::default(),
        }
    }
}

impl ParseOptions {
    pub fn with(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn with_todo_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.todo_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tab_handling(mut self, tab_handling: TabHandling) -> Self {
        self.tab_handling = tab_handling;
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<OptionValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn values(&self) -> &BTreeMap<String, OptionValue> {
        &self.values
    }

    pub fn is_todo_keyword(&self, word: &str) -> bool {
        self.todo_keywords.iter().any(|k| k == word)
    }

    /// `toc` is kept as given: a boolean, or a depth when set to a number.
    pub fn toc(&self) -> Option<&OptionValue> {
        self.get(TOC)
    }

    pub fn num(&self) -> Option<&OptionValue> {
        self.get(NUM)
    }

    pub fn superscript(&self) -> Option<&OptionValue> {
        self.get(SUPERSCRIPT)
    }

    pub fn multiline_cell(&self) -> bool {
        self.get(MULTILINE_CELL)
            .and_then(OptionValue::as_bool)
            .unwrap_or(false)
    }

    /// Apply the arguments of an `#+OPTIONS:` line, e.g. `toc:nil num:2 ^:{}`.
    ///
    /// Each argument is split at its first colon; arguments without one are ignored.
    pub fn apply_directive_arguments<'a, I>(&mut self, arguments: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for argument in arguments {
            if let Some((key, value)) = argument.split_once(':') {
                log::trace!("option {} set to {:?}", key, value);
                self.set(key, decode_lisp_value(value));
            }
        }
    }
}
