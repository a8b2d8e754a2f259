//! Line token types for the lexer pipeline
//!
//!     Since classification happens one line at a time, each line must be given exactly one
//!     category. In the real world a line can look like more than one thing: every TODO item is
//!     also a valid header, and whether its first word is a keyword is a configuration question
//!     the lexer cannot answer. For that case the token carries both readings (see
//!     [LineDetail::Todo]) and the parser picks one.
//!
//! Line Types
//!
//!     In order of precedence (most specific first):
//!
//!         - Todo: `** KEYWORD [#A] content :tags:`
//!         - Header: `** content :tags:`
//!         - DefinitionItem: a list item whose text is `term :: definition`
//!         - ListItem: `-`, `+`, ` *` or `1.` / `1)` followed by an optional checkbox
//!         - DrawerBegin / DrawerEnd: `:NAME:` / `:END:`
//!         - BlockBegin / BlockEnd: `#+BEGIN_NAME params` / `#+END_NAME`
//!         - DynamicBlockBegin / DynamicBlockEnd: `#+BEGIN: NAME params` / `#+END:`
//!         - Directive: `#+NAME: params`
//!         - Preformatted: `: content`
//!         - Blank: empty or whitespace only
//!         - HorizontalRule: five or more dashes
//!         - Comment: `#` not followed by `+`
//!         - TableSeparator / TableRow: `|-...` / `| cell | cell |`
//!         - Line: anything else
//!
//!     See [classify_line](crate::org::lexing::classify_line) for the classification logic.

use serde::Serialize;
use std::fmt;

/// A line token represents one physical source line after classification.
///
/// Tokens are created fresh on every classification and never mutated afterwards. The only
/// thing the parser does with a consumed token besides reading it is push it back onto the
/// lexer, which hands out the very same token again on the next peek.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineToken {
    pub line_type: LineType,

    /// 1-based position in the source
    pub line_number: usize,

    /// The line as read, without its terminator
    pub raw: String,

    /// Width of the leading whitespace, normalized per the configured tab handling
    pub indentation: usize,

    /// Line text without indentation and category decorations
    pub content: String,

    pub detail: LineDetail,
}

impl LineToken {
    pub fn is_list_item(&self) -> bool {
        self.line_type.is_list_item()
    }

    pub fn is_table_element(&self) -> bool {
        self.line_type.is_table_element()
    }

    /// The header reading of this line, for both header and TODO tokens.
    pub fn header(&self) -> Option<&HeaderLine> {
        match &self.detail {
            LineDetail::Header(header) => Some(header),
            LineDetail::Todo { header, .. } => Some(header),
            _ => None,
        }
    }

    pub fn todo(&self) -> Option<&TodoLine> {
        match &self.detail {
            LineDetail::Todo { todo, .. } => Some(todo),
            _ => None,
        }
    }

    pub fn list_item(&self) -> Option<&ListItemLine> {
        match &self.detail {
            LineDetail::ListItem(item) => Some(item),
            _ => None,
        }
    }

    /// Name captured from a drawer, block or directive line, as written in the source.
    pub fn name(&self) -> Option<&str> {
        match &self.detail {
            LineDetail::Drawer { name }
            | LineDetail::Block { name, .. }
            | LineDetail::Directive { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn parameters(&self) -> Option<&str> {
        match &self.detail {
            LineDetail::Block { parameters, .. } | LineDetail::Directive { parameters, .. } => {
                Some(parameters)
            }
            _ => None,
        }
    }
}

/// The classification of a line token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineType {
    Todo,
    Header,
    DefinitionItem,
    ListItem,
    DrawerBegin,
    DrawerEnd,
    BlockBegin,
    BlockEnd,
    DynamicBlockBegin,
    DynamicBlockEnd,
    Directive,
    Preformatted,
    Blank,
    HorizontalRule,
    Comment,
    TableSeparator,
    TableRow,
    Line,
}

impl LineType {
    pub fn is_list_item(self) -> bool {
        matches!(self, LineType::ListItem | LineType::DefinitionItem)
    }

    pub fn is_table_element(self) -> bool {
        matches!(self, LineType::TableRow | LineType::TableSeparator)
    }

    pub fn is_header(self) -> bool {
        matches!(self, LineType::Header | LineType::Todo)
    }

    /// Format token type as grammar notation: `<token-name>`
    ///
    /// Examples:
    /// - Blank -> `<blank>`
    /// - DynamicBlockBegin -> `<dynamic-block-begin>`
    pub fn to_grammar_string(&self) -> String {
        let name = match self {
            LineType::Todo => "todo",
            LineType::Header => "header",
            LineType::DefinitionItem => "definition-item",
            LineType::ListItem => "list-item",
            LineType::DrawerBegin => "drawer-begin",
            LineType::DrawerEnd => "drawer-end",
            LineType::BlockBegin => "block-begin",
            LineType::BlockEnd => "block-end",
            LineType::DynamicBlockBegin => "dynamic-block-begin",
            LineType::DynamicBlockEnd => "dynamic-block-end",
            LineType::Directive => "directive",
            LineType::Preformatted => "preformatted",
            LineType::Blank => "blank",
            LineType::HorizontalRule => "horizontal-rule",
            LineType::Comment => "comment",
            LineType::TableSeparator => "table-separator",
            LineType::TableRow => "table-row",
            LineType::Line => "line",
        };
        format!("<{}>", name)
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineType::Todo => "TODO",
            LineType::Header => "HEADER",
            LineType::DefinitionItem => "DEFINITION_ITEM",
            LineType::ListItem => "LIST_ITEM",
            LineType::DrawerBegin => "DRAWER_BEGIN",
            LineType::DrawerEnd => "DRAWER_END",
            LineType::BlockBegin => "BLOCK_BEGIN",
            LineType::BlockEnd => "BLOCK_END",
            LineType::DynamicBlockBegin => "DYNAMIC_BLOCK_BEGIN",
            LineType::DynamicBlockEnd => "DYNAMIC_BLOCK_END",
            LineType::Directive => "DIRECTIVE",
            LineType::Preformatted => "PREFORMATTED",
            LineType::Blank => "BLANK",
            LineType::HorizontalRule => "HORIZONTAL_RULE",
            LineType::Comment => "COMMENT",
            LineType::TableSeparator => "TABLE_SEPARATOR",
            LineType::TableRow => "TABLE_ROW",
            LineType::Line => "LINE",
        };
        write!(f, "{}", name)
    }
}

/// Category specific captures of a line token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LineDetail {
    None,
    Header(HeaderLine),
    /// A TODO-shaped line together with its plain header reading
    Todo {
        todo: TodoLine,
        header: HeaderLine,
    },
    ListItem(ListItemLine),
    Drawer {
        name: String,
    },
    /// Block and dynamic block delimiters. End delimiters of dynamic blocks have an empty name.
    Block {
        name: String,
        parameters: String,
    },
    Directive {
        name: String,
        parameters: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderLine {
    pub depth: usize,
    pub content: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoLine {
    pub depth: usize,
    pub keyword: String,
    pub priority: Option<char>,
    pub content: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItemLine {
    pub bullet: Bullet,
    pub checkbox: Option<Checkbox>,
    /// Set for definition items only
    pub term: Option<String>,
    /// Set for definition items only
    pub definition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Bullet {
    Dash,
    Plus,
    Star,
    /// Digits plus the `.` or `)` delimiter, e.g. `12.`
    Numbered(String),
}

impl Bullet {
    pub fn is_ordered(&self) -> bool {
        matches!(self, Bullet::Numbered(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Checkbox {
    Unchecked,
    Checked,
    Partial,
}

impl Checkbox {
    pub fn from_mark(mark: &str) -> Option<Self> {
        match mark {
            " " => Some(Checkbox::Unchecked),
            "X" => Some(Checkbox::Checked),
            "-" => Some(Checkbox::Partial),
            _ => None,
        }
    }

    pub fn mark(self) -> char {
        match self {
            Checkbox::Unchecked => ' ',
            Checkbox::Checked => 'X',
            Checkbox::Partial => '-',
        }
    }
}
