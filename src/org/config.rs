//! Configuration loading
//!
//!     Parse options can come from TOML as well as from `#+OPTIONS:` lines. The `[parser]` table
//!     of `defaults/orgtree.default.toml` is compiled in and always forms the bottom layer; its
//!     values equal [ParseOptions::default]. A [`Loader`] stacks further files, text and single
//!     key overrides on top, and [`OrgConfig::parse_options`] produces the options the parser
//!     starts with.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::org::options::{
    OptionValue, ParseOptions, TabHandling, MULTILINE_CELL, NUM, SUPERSCRIPT, TOC,
};

const DEFAULT_TOML: &str = include_str!("../../defaults/orgtree.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgConfig {
    pub parser: ParserConfig,
}

/// Initial values of the options the parser consults.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub toc: OptionValue,
    pub num: OptionValue,
    pub superscript: String,
    pub multiline_cell: bool,
    pub todo_keywords: Vec<String>,
    pub tab_width: usize,
    /// Any further keys, stored in the options untouched
    #[serde(default)]
    pub extra: BTreeMap<String, OptionValue>,
}

impl OrgConfig {
    pub fn parse_options(&self) -> ParseOptions {
        let parser = &self.parser;
        let tab_handling = match parser.tab_width {
            0 => TabHandling::PerCharacter,
            width => TabHandling::Expand(width),
        };
        let mut options = ParseOptions::default()
            .with(TOC, parser.toc.clone())
            .with(NUM, parser.num.clone())
            .with(SUPERSCRIPT, parser.superscript.as_str())
            .with(MULTILINE_CELL, parser.multiline_cell)
            .with_todo_keywords(parser.todo_keywords.iter().cloned())
            .with_tab_handling(tab_handling);
        for (key, value) in &parser.extra {
            options.set(key, value.clone());
        }
        options
    }
}

/// Stacks TOML sources for the `[parser]` table; later sources win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Seeded with `orgtree.default.toml`.
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// A project or user config file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path.as_ref(), true)
    }

    /// Like [`Loader::with_file`], skipped when the file does not exist.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path.as_ref(), false)
    }

    /// TOML text, e.g. a `[parser]` table kept inside another file.
    pub fn with_toml(mut self, text: &str) -> Self {
        self.builder = self.builder.add_source(File::from_str(text, FileFormat::Toml));
        self
    }

    /// Set one dotted key such as `parser.tab_width` or `parser.todo_keywords`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<OrgConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    /// Build and convert straight to [ParseOptions].
    pub fn parse_options(self) -> Result<ParseOptions, ConfigError> {
        Ok(self.build()?.parse_options())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The parser configuration with no user sources layered on.
pub fn load_defaults() -> Result<OrgConfig, ConfigError> {
    Loader::new().build()
}
