//! Line classification
//!
//!     Each raw line is tried against the categories in a fixed order and the first match wins.
//!     Headers and TODO items are recognized by hand: their tag group must be anchored at the end
//!     of the line without swallowing the content, which needs lookahead the `regex` crate does
//!     not support. Every other category is a single anchored pattern.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::org::options::TabHandling;
use crate::org::token::{
    Bullet, Checkbox, HeaderLine, LineDetail, LineToken, LineType, ListItemLine, TodoLine,
};

static TAGS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+(:[\w@#%:]*:)\s*$").unwrap());
static DEFINITION_ITEM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*)(-|\+|\s+\*|\d+[.)])(?:\s+\[( |X|-)\])?(?:\s+(.*?))?\s+::\s+(.*)$")
        .unwrap()
});
static LIST_ITEM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*)(-|\+|\s+\*|\d+[.)])(?:\s+(?:\[( |X|-)\])?\s*(.*)|)$").unwrap()
});
static DRAWER_BEGIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*:([\w-]+):\s*$").unwrap());
static DRAWER_END_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*:END:\s*$").unwrap());
static BLOCK_BEGIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#\+(?i:begin)_(\S+)(?:\s+(.*))?$").unwrap());
static BLOCK_END_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#\+(?i:end)_(\S+)\s*$").unwrap());
static DYNAMIC_BLOCK_BEGIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#\+(?i:begin):\s+(\S+)(?:\s+(.*))?$").unwrap());
static DYNAMIC_BLOCK_END_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#\+(?i:end):\s*$").unwrap());
static DIRECTIVE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#\+(\S+):(?:\s+(.*))?$").unwrap());
static PREFORMATTED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*:(?:[ \t](.*))?$").unwrap());
static BLANK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*$").unwrap());
static HORIZONTAL_RULE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*-{5,}\s*$").unwrap());
static COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#([^+].*)?$").unwrap());
static TABLE_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\|-").unwrap());
static TABLE_ROW_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\|(.*?)\|?\s*$").unwrap());

/// Classify one raw line.
///
/// The result depends on nothing but the arguments, so classifying the same line twice always
/// yields the same token.
pub fn classify_line(raw: &str, line_number: usize, tabs: TabHandling) -> LineToken {
    let (line_type, content, detail) = classify(raw);
    LineToken {
        line_type,
        line_number,
        raw: raw.to_string(),
        indentation: tabs.indentation_of(raw),
        content,
        detail,
    }
}

fn classify(raw: &str) -> (LineType, String, LineDetail) {
    if let Some((depth, rest)) = split_stars(raw) {
        let header = header_line(depth, rest);
        return match todo_line(depth, rest) {
            Some(todo) => (
                LineType::Todo,
                todo.content.clone(),
                LineDetail::Todo { todo, header },
            ),
            None => (
                LineType::Header,
                header.content.clone(),
                LineDetail::Header(header),
            ),
        };
    }

    if let Some(caps) = DEFINITION_ITEM_REGEX.captures(raw) {
        let term = caps.get(4).map_or("", |m| m.as_str());
        let definition = caps.get(5).map_or("", |m| m.as_str());
        let item = ListItemLine {
            bullet: bullet(&caps[2]),
            checkbox: checkbox(&caps),
            term: Some(term.to_string()),
            definition: Some(definition.to_string()),
        };
        let content = after_marker(raw, &caps);
        return (
            LineType::DefinitionItem,
            content,
            LineDetail::ListItem(item),
        );
    }

    if let Some(caps) = LIST_ITEM_REGEX.captures(raw) {
        let item = ListItemLine {
            bullet: bullet(&caps[2]),
            checkbox: checkbox(&caps),
            term: None,
            definition: None,
        };
        let content = caps.get(4).map_or("", |m| m.as_str()).to_string();
        return (LineType::ListItem, content, LineDetail::ListItem(item));
    }

    if let Some(caps) = DRAWER_BEGIN_REGEX.captures(raw) {
        if &caps[1] != "END" {
            let name = caps[1].to_string();
            return (
                LineType::DrawerBegin,
                unindented(raw),
                LineDetail::Drawer { name },
            );
        }
    }

    if DRAWER_END_REGEX.is_match(raw) {
        return (
            LineType::DrawerEnd,
            unindented(raw),
            LineDetail::Drawer {
                name: "END".to_string(),
            },
        );
    }

    if let Some(caps) = BLOCK_BEGIN_REGEX.captures(raw) {
        return (LineType::BlockBegin, unindented(raw), block(&caps));
    }

    if let Some(caps) = BLOCK_END_REGEX.captures(raw) {
        return (LineType::BlockEnd, unindented(raw), block(&caps));
    }

    if let Some(caps) = DYNAMIC_BLOCK_BEGIN_REGEX.captures(raw) {
        return (LineType::DynamicBlockBegin, unindented(raw), block(&caps));
    }

    if DYNAMIC_BLOCK_END_REGEX.is_match(raw) {
        let detail = LineDetail::Block {
            name: String::new(),
            parameters: String::new(),
        };
        return (LineType::DynamicBlockEnd, unindented(raw), detail);
    }

    if let Some(caps) = DIRECTIVE_REGEX.captures(raw) {
        let detail = LineDetail::Directive {
            name: caps[1].to_string(),
            parameters: caps.get(2).map_or("", |m| m.as_str()).to_string(),
        };
        return (LineType::Directive, unindented(raw), detail);
    }

    if let Some(caps) = PREFORMATTED_REGEX.captures(raw) {
        let content = caps.get(1).map_or("", |m| m.as_str()).to_string();
        return (LineType::Preformatted, content, LineDetail::None);
    }

    if BLANK_REGEX.is_match(raw) {
        return (LineType::Blank, String::new(), LineDetail::None);
    }

    if HORIZONTAL_RULE_REGEX.is_match(raw) {
        return (LineType::HorizontalRule, unindented(raw), LineDetail::None);
    }

    if let Some(caps) = COMMENT_REGEX.captures(raw) {
        let content = caps.get(1).map_or("", |m| m.as_str()).to_string();
        return (LineType::Comment, content, LineDetail::None);
    }

    if TABLE_SEPARATOR_REGEX.is_match(raw) {
        return (LineType::TableSeparator, unindented(raw), LineDetail::None);
    }

    if let Some(caps) = TABLE_ROW_REGEX.captures(raw) {
        return (LineType::TableRow, caps[1].to_string(), LineDetail::None);
    }

    (LineType::Line, unindented(raw), LineDetail::None)
}

/// Leading stars of a header line and the text after them. The stars must start the line and
/// be followed by whitespace or the end of the line.
fn split_stars(raw: &str) -> Option<(usize, &str)> {
    let depth = raw.bytes().take_while(|&b| b == b'*').count();
    if depth == 0 {
        return None;
    }
    let rest = &raw[depth..];
    match rest.chars().next() {
        None => Some((depth, rest)),
        Some(c) if c.is_whitespace() => Some((depth, rest)),
        Some(_) => None,
    }
}

/// Split a trailing `:tag:list:` group off `text`.
fn split_tags(text: &str) -> (&str, Vec<String>) {
    match TAGS_REGEX.captures(text) {
        Some(caps) => {
            let start = caps.get(0).map_or(text.len(), |m| m.start());
            let tags = caps[1]
                .split(':')
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect();
            (&text[..start], tags)
        }
        None => (text, Vec::new()),
    }
}

fn header_line(depth: usize, rest: &str) -> HeaderLine {
    let (content, tags) = split_tags(rest);
    HeaderLine {
        depth,
        content: content.trim_start().to_string(),
        tags,
    }
}

fn todo_line(depth: usize, rest: &str) -> Option<TodoLine> {
    let after_stars = rest.trim_start();
    if after_stars.len() == rest.len() {
        return None;
    }
    let keyword_len = after_stars
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(after_stars.len(), |(i, _)| i);
    if keyword_len == 0 {
        return None;
    }
    let (keyword, mut remainder) = after_stars.split_at(keyword_len);
    if !starts_with_whitespace_or_is_empty(remainder) {
        return None;
    }

    let mut priority = None;
    let trimmed = remainder.trim_start();
    if trimmed.len() < remainder.len() {
        if let Some((letter, after)) = split_priority(trimmed) {
            priority = Some(letter);
            remainder = after;
        }
    }

    let (content, tags) = split_tags(remainder);
    Some(TodoLine {
        depth,
        keyword: keyword.to_string(),
        priority,
        content: content.trim_start().to_string(),
        tags,
    })
}

/// `[#A]`, `[#b]`, ... followed by whitespace or the end of the line.
fn split_priority(text: &str) -> Option<(char, &str)> {
    let rest = text.strip_prefix("[#")?;
    let mut chars = rest.chars();
    let letter = chars.next()?;
    if !matches!(letter, 'A' | 'B' | 'C' | 'a' | 'b' | 'c') {
        return None;
    }
    let after = chars.as_str().strip_prefix(']')?;
    if !starts_with_whitespace_or_is_empty(after) {
        return None;
    }
    Some((letter.to_ascii_uppercase(), after))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn starts_with_whitespace_or_is_empty(text: &str) -> bool {
    text.chars().next().map_or(true, char::is_whitespace)
}

fn bullet(marker: &str) -> Bullet {
    match marker.trim_start() {
        "-" => Bullet::Dash,
        "+" => Bullet::Plus,
        "*" => Bullet::Star,
        numbered => Bullet::Numbered(numbered.to_string()),
    }
}

fn checkbox(caps: &Captures<'_>) -> Option<Checkbox> {
    caps.get(3).and_then(|m| Checkbox::from_mark(m.as_str()))
}

fn block(caps: &Captures<'_>) -> LineDetail {
    LineDetail::Block {
        name: caps[1].to_string(),
        parameters: caps.get(2).map_or("", |m| m.as_str()).to_string(),
    }
}

/// Text following the bullet and checkbox of a list line.
fn after_marker(raw: &str, caps: &Captures<'_>) -> String {
    let end = caps
        .get(3)
        .map(|m| m.end() + 1)
        .or_else(|| caps.get(2).map(|m| m.end()))
        .unwrap_or(0);
    raw[end..].trim_start().to_string()
}

fn unindented(raw: &str) -> String {
    raw.trim_start().to_string()
}
