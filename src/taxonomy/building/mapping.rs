//! Semantic mapping
//!
//! The semantic mapping is the dictionary-shaped hand-off between the parser and
//! everything built on top of it: the [tree](crate::taxonomy::tree) model here, and
//! database loaders or exporters outside this crate. It serializes with serde to
//! nested maps with the keys `doc`, `children`, `tags`, `aliases` and `meta`; empty
//! sections are omitted and default to empty when reading.
//!
//! All maps preserve insertion order, which is declaration order in the source.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Declared tag: its value pattern, multi flag and documentation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSpec {
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub multi: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl TagSpec {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Self::default()
        }
    }

    pub fn multi(mut self) -> Self {
        self.multi = true;
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// One node of the semantic mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub children: IndexMap<String, SemanticMapping>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub tags: IndexMap<String, TagSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub meta: IndexMap<String, String>,
}

impl SemanticMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_child(mut self, name: impl Into<String>, child: SemanticMapping) -> Self {
        self.children.insert(name.into(), child);
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>, tag: TagSpec) -> Self {
        self.tags.insert(name.into(), tag);
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// True when every section is empty.
    pub fn is_empty(&self) -> bool {
        self.doc.is_none()
            && self.children.is_empty()
            && self.tags.is_empty()
            && self.aliases.is_empty()
            && self.meta.is_empty()
    }

    /// Follow a path of child names.
    pub fn get(&self, path: &[&str]) -> Option<&SemanticMapping> {
        path.iter()
            .try_fold(self, |mapping, name| mapping.children.get(*name))
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}
