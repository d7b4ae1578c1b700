//! In-memory registered-word store.
//!
//! Entries are keyed by source surface. Entries without a source surface are
//! wildcards and are returned for every lookup; their POS prefix does the
//! selecting. Uses `RwLock` so words can be registered while translators hold
//! a shared reference.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Deserialize;
use tracing::debug;

use super::{DictError, DictionaryCandidate, WordDictionary};
use crate::pos::PosPath;

#[derive(Default)]
struct Entries {
    by_surface: HashMap<String, Vec<DictionaryCandidate>>,
    wildcards: Vec<DictionaryCandidate>,
}

pub struct RegisteredWords {
    entries: RwLock<Entries>,
}

/// On-disk layout: a list of `[[words]]` tables.
#[derive(Deserialize)]
struct WordFile {
    #[serde(default)]
    words: Vec<DictionaryCandidate>,
}

impl RegisteredWords {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        // A panicked writer leaves the maps structurally valid.
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Register a word. Returns `true` if newly added, `false` if an identical
    /// entry already exists.
    pub fn register(&self, candidate: DictionaryCandidate) -> bool {
        let mut entries = self.write();
        let bucket = match &candidate.source_surface {
            Some(source) => entries.by_surface.entry(source.clone()).or_default(),
            None => &mut entries.wildcards,
        };
        if bucket.contains(&candidate) {
            return false;
        }
        bucket.push(candidate);
        true
    }

    /// Remove every entry for `source` (or the wildcards when `None`) whose
    /// target is `target`. Returns `true` if anything was removed.
    pub fn unregister(&self, source: Option<&str>, target: &str) -> bool {
        let mut entries = self.write();
        match source {
            Some(source) => {
                let Some(bucket) = entries.by_surface.get_mut(source) else {
                    return false;
                };
                let before = bucket.len();
                bucket.retain(|c| c.target_surface != target);
                let removed = bucket.len() < before;
                if bucket.is_empty() {
                    entries.by_surface.remove(source);
                }
                removed
            }
            None => {
                let before = entries.wildcards.len();
                entries.wildcards.retain(|c| c.target_surface != target);
                entries.wildcards.len() < before
            }
        }
    }

    /// All entries, sorted.
    pub fn list(&self) -> Vec<DictionaryCandidate> {
        let entries = self.read();
        let mut result: Vec<DictionaryCandidate> = entries
            .by_surface
            .values()
            .flatten()
            .chain(&entries.wildcards)
            .cloned()
            .collect();
        result.sort();
        result
    }

    pub fn len(&self) -> usize {
        let entries = self.read();
        entries.by_surface.values().map(Vec::len).sum::<usize>() + entries.wildcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a `[[words]]` TOML document.
    pub fn from_toml(toml_str: &str) -> Result<Self, DictError> {
        let file: WordFile =
            toml::from_str(toml_str).map_err(|e| DictError::Parse(e.to_string()))?;
        let dict = Self::new();
        for (i, word) in file.words.into_iter().enumerate() {
            if word.target_surface.is_empty() {
                return Err(DictError::Parse(format!("words[{i}]: empty target")));
            }
            if word.source_surface.as_deref() == Some("") {
                return Err(DictError::Parse(format!("words[{i}]: empty source")));
            }
            dict.register(word);
        }
        debug!(entries = dict.len(), "loaded registered words");
        Ok(dict)
    }

    /// Load a word file. A missing file is an error; callers that treat the
    /// dictionary as optional should not pass a path.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

impl Default for RegisteredWords {
    fn default() -> Self {
        Self::new()
    }
}

impl WordDictionary for RegisteredWords {
    fn lookup(&self, surface: &str, _pos: &PosPath) -> Result<Vec<DictionaryCandidate>, DictError> {
        let entries = self.read();
        let mut result = entries.by_surface.get(surface).cloned().unwrap_or_default();
        result.extend(entries.wildcards.iter().cloned());
        Ok(result)
    }
}
