//! Curated org samples for tests
//!
//!     Samples live under `docs/samples/` in the crate root:
//!
//!         docs/samples/elements/<kind>/NN-description.org
//!         docs/samples/documents/NN-description.org
//!
//!     Files are addressed by kind and number. The number is the part of the file name before
//!     the first dash, so `01-simple.org`, `1-simple.org` and `001-simple.org` are all sample 1.
//!     Two files resolving to the same number is an error.
//!
//!     ```rust,ignore
//!     let doc = Samples::list(2).parse();
//!     let tokens = Samples::table(1).tokenize();
//!     let source = Samples::document(1).source();
//!     ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::org::ast::Document;
use crate::org::lexing::Lexer;
use crate::org::options::ParseOptions;
use crate::org::parsing::Parser;
use crate::org::stream::LineStream;
use crate::org::token::LineToken;

const SAMPLES_ROOT: &str = "docs/samples";

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("no sample #{number} in {dir}")]
    NotFound { dir: String, number: usize },
    #[error("samples #{number} in {dir} are ambiguous: {first} and {second}")]
    DuplicateNumber {
        dir: String,
        number: usize,
        first: String,
        second: String,
    },
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Element kinds with their own sample directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Header,
    Paragraph,
    List,
    Table,
    Block,
    Drawer,
    Directive,
}

impl ElementKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            ElementKind::Header => "header",
            ElementKind::Paragraph => "paragraph",
            ElementKind::List => "list",
            ElementKind::Table => "table",
            ElementKind::Block => "block",
            ElementKind::Drawer => "drawer",
            ElementKind::Directive => "directive",
        }
    }
}

pub fn samples_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(SAMPLES_ROOT)
}

/// Map sample numbers to files for one directory.
pub fn list_files_by_number(dir: &Path) -> Result<BTreeMap<usize, PathBuf>, SampleError> {
    let entries = fs::read_dir(dir).map_err(|source| SampleError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut files = BTreeMap::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("org") {
            continue;
        }
        let Some(number) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.split('-').next())
            .and_then(|prefix| prefix.parse::<usize>().ok())
        else {
            continue;
        };
        if let Some(existing) = files.insert(number, path.clone()) {
            return Err(SampleError::DuplicateNumber {
                dir: dir.display().to_string(),
                number,
                first: existing.display().to_string(),
                second: path.display().to_string(),
            });
        }
    }
    Ok(files)
}

fn find_by_number(dir: PathBuf, number: usize) -> Result<PathBuf, SampleError> {
    list_files_by_number(&dir)?
        .remove(&number)
        .ok_or_else(|| SampleError::NotFound {
            dir: dir.display().to_string(),
            number,
        })
}

pub fn find_element_file(kind: ElementKind, number: usize) -> Result<PathBuf, SampleError> {
    find_by_number(samples_root().join("elements").join(kind.dir_name()), number)
}

pub fn find_document_file(number: usize) -> Result<PathBuf, SampleError> {
    find_by_number(samples_root().join("documents"), number)
}

/// A resolved sample, ready to be read, tokenized or parsed.
///
/// The accessors panic on failure, naming the file, since they only run inside tests.
#[derive(Debug, Clone)]
pub struct Sample {
    path: PathBuf,
}

impl Sample {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> String {
        fs::read_to_string(&self.path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", self.path.display(), e))
    }

    pub fn parse_with(&self, options: ParseOptions) -> Document {
        let source = self.source();
        Parser::new(&source, options)
            .parse()
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", self.path.display(), e))
    }

    pub fn parse(&self) -> Document {
        self.parse_with(ParseOptions::default())
    }

    /// Classify every line of the sample.
    pub fn tokenize(&self) -> Vec<LineToken> {
        let source = self.source();
        let mut lexer = Lexer::new(LineStream::new(&source), Default::default());
        std::iter::from_fn(|| lexer.next_token()).collect()
    }
}

macro_rules! element_shortcuts {
    ($($name:ident => $variant:ident);* $(;)?) => {
        $(
            #[doc = concat!("Load ", stringify!($name), " sample `number`")]
            pub fn $name(number: usize) -> Sample {
                Self::element(ElementKind::$variant, number)
            }
        )*
    };
}

/// Entry point for loading samples
pub struct Samples;

impl Samples {
    pub fn element(kind: ElementKind, number: usize) -> Sample {
        let path = find_element_file(kind, number)
            .unwrap_or_else(|e| panic!("Failed to find {:?} #{}: {}", kind, number, e));
        Sample { path }
    }

    pub fn document(number: usize) -> Sample {
        let path = find_document_file(number)
            .unwrap_or_else(|e| panic!("Failed to find document #{}: {}", number, e));
        Sample { path }
    }

    element_shortcuts! {
        header => Header;
        paragraph => Paragraph;
        list => List;
        table => Table;
        block => Block;
        drawer => Drawer;
        directive => Directive;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sample_parses() {
        let kinds = [
            ElementKind::Header,
            ElementKind::Paragraph,
            ElementKind::List,
            ElementKind::Table,
            ElementKind::Block,
            ElementKind::Drawer,
            ElementKind::Directive,
        ];
        for kind in kinds {
            let dir = samples_root().join("elements").join(kind.dir_name());
            let files = list_files_by_number(&dir).unwrap();
            assert!(!files.is_empty(), "no samples for {:?}", kind);
            for number in files.keys() {
                Samples::element(kind, *number).parse();
            }
        }
        for number in list_files_by_number(&samples_root().join("documents"))
            .unwrap()
            .keys()
        {
            Samples::document(*number).parse();
        }
    }

    #[test]
    fn test_missing_sample() {
        let err = find_element_file(ElementKind::List, 999).unwrap_err();
        assert!(matches!(err, SampleError::NotFound { number: 999, .. }));
    }

    #[test]
    fn test_tokenize_classifies_each_line() {
        let tokens = Samples::list(1).tokenize();
        let source = Samples::list(1).source();
        assert_eq!(tokens.len(), source.split('\n').count());
    }
}
