//! Part-of-speech paths in the IPADIC tag vocabulary.
//!
//! A path is ordered most-general first (`名詞,一般`). The leading tag is
//! classified into [`MajorCategory`]; deeper tags stay as strings since the
//! sub-category vocabulary is open-ended across dictionary versions.

use std::fmt;

/// Leading POS tag emitted by MeCab/IPADIC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MajorCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Adnominal,
    Conjunction,
    Particle,
    Auxiliary,
    Interjection,
    Prefix,
    Symbol,
    Filler,
    Other,
}

impl MajorCategory {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "名詞" => Self::Noun,
            "動詞" => Self::Verb,
            "形容詞" => Self::Adjective,
            "副詞" => Self::Adverb,
            "連体詞" => Self::Adnominal,
            "接続詞" => Self::Conjunction,
            "助詞" => Self::Particle,
            "助動詞" => Self::Auxiliary,
            "感動詞" => Self::Interjection,
            "接頭詞" => Self::Prefix,
            "記号" => Self::Symbol,
            "フィラー" => Self::Filler,
            _ => Self::Other,
        }
    }
}

/// Ordered POS tags of one token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PosPath {
    tags: Vec<String>,
}

impl PosPath {
    /// Build a path from raw tags. `*` (IPADIC's "unspecified") and empty
    /// tags end the path.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = tags
            .into_iter()
            .map(Into::into)
            .take_while(|t: &String| !t.is_empty() && t.as_str() != "*")
            .collect();
        Self { tags }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn major(&self) -> MajorCategory {
        self.tags
            .first()
            .map_or(MajorCategory::Other, |t| MajorCategory::from_tag(t))
    }

    pub fn sub(&self) -> Option<&str> {
        self.tags.get(1).map(String::as_str)
    }

    /// True when `pattern` is a prefix of this path.
    ///
    /// `名詞` matches `名詞,一般`; `名詞,一般` does not match `名詞`.
    /// An empty pattern matches every path.
    pub fn starts_with_tags<S: AsRef<str>>(&self, pattern: &[S]) -> bool {
        pattern.len() <= self.tags.len()
            && pattern
                .iter()
                .zip(&self.tags)
                .all(|(p, t)| p.as_ref() == t)
    }
}

impl fmt::Display for PosPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tags.join(","))
    }
}
