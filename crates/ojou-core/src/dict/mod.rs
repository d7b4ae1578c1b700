//! Word substitution dictionary.
//!
//! A store answers `lookup(surface, pos)` with candidate replacements. The
//! store may over-approximate; the rewrite pipeline applies
//! [`DictionaryCandidate::matches`] before choosing.

mod registered;

pub use registered::RegisteredWords;

use serde::{Deserialize, Serialize};

use crate::pos::PosPath;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("lookup failed: {0}")]
    Query(String),
}

/// A registered replacement. Absent predicates match anything.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DictionaryCandidate {
    #[serde(rename = "target")]
    pub target_surface: String,
    #[serde(rename = "source", default, skip_serializing_if = "Option::is_none")]
    pub source_surface: Option<String>,
    #[serde(rename = "pos", default, skip_serializing_if = "Option::is_none")]
    pub source_pos_prefix: Option<Vec<String>>,
}

impl DictionaryCandidate {
    pub fn new(target: &str) -> Self {
        Self {
            target_surface: target.to_string(),
            source_surface: None,
            source_pos_prefix: None,
        }
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source_surface = Some(source.to_string());
        self
    }

    pub fn with_pos<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_pos_prefix = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Source surface equal (or unset) and POS prefix a prefix of `pos` (or unset).
    pub fn matches(&self, surface: &str, pos: &PosPath) -> bool {
        let surface_ok = self
            .source_surface
            .as_deref()
            .map_or(true, |s| s == surface);
        let pos_ok = self
            .source_pos_prefix
            .as_deref()
            .map_or(true, |prefix| pos.starts_with_tags(prefix));
        surface_ok && pos_ok
    }
}

/// Source of substitution candidates.
pub trait WordDictionary: Send + Sync {
    fn lookup(&self, surface: &str, pos: &PosPath) -> Result<Vec<DictionaryCandidate>, DictError>;
}

impl<F> WordDictionary for F
where
    F: Fn(&str, &PosPath) -> Result<Vec<DictionaryCandidate>, DictError> + Send + Sync,
{
    fn lookup(&self, surface: &str, pos: &PosPath) -> Result<Vec<DictionaryCandidate>, DictError> {
        self(surface, pos)
    }
}
