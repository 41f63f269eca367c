//! Document loading utilities
//!
//! [`DocumentLoader`] holds the source text of one taxonomy, read from a file or given
//! as a string, and runs the pipeline stages on it:
//!
//! ```rust,ignore
//! use taxa::taxonomy::loader::DocumentLoader;
//!
//! let tree = DocumentLoader::from_path("plankton.taxa")?.to_tree()?;
//! let block = DocumentLoader::from_string("Foo::\n  =foo\n").parse()?;
//! ```
//!
//! This is the only module doing I/O.

use crate::taxonomy::ast::{Block, ParserError};
use crate::taxonomy::building::{to_mapping, SemanticMapping};
use crate::taxonomy::parsing::parse_source;
use crate::taxonomy::tree::Tree;
use std::fmt;
use std::fs;
use std::path::Path;

/// Error that can occur when loading a taxonomy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// IO error when reading the file
    IoError(String),
    /// The source does not parse
    ParseError(ParserError),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
            LoaderError::ParseError(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::IoError(_) => None,
            LoaderError::ParseError(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

impl From<ParserError> for LoaderError {
    fn from(err: ParserError) -> Self {
        LoaderError::ParseError(err)
    }
}

/// Source text of one taxonomy with shortcuts for every pipeline stage
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded taxonomy source");
        Ok(DocumentLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse the source into its root block.
    pub fn parse(&self) -> Result<Block, LoaderError> {
        Ok(parse_source(&self.source)?)
    }

    /// Parse and lower the source into its semantic mapping.
    pub fn to_mapping(&self) -> Result<SemanticMapping, LoaderError> {
        let block = self.parse()?;
        Ok(to_mapping(&block)?)
    }

    /// Parse the source all the way into a node tree.
    pub fn to_tree(&self) -> Result<Tree, LoaderError> {
        let mapping = self.to_mapping()?;
        Ok(Tree::from_mapping(&mapping))
    }

    /// Describe a loader error with the source lines around it, when it has a line.
    pub fn render_error(&self, error: &LoaderError) -> String {
        match error {
            LoaderError::ParseError(err) => err.render(&self.source),
            LoaderError::IoError(_) => error.to_string(),
        }
    }
}
