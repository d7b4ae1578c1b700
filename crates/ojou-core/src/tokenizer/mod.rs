//! Morphological analysis boundary.
//!
//! The rewrite pipeline consumes IPADIC-annotated tokens. They come from an
//! external MeCab process ([`MecabCommand`]), from vibrato running over a
//! compiled system dictionary ([`VibratoTokenizer`]), or from text that is
//! already MeCab output ([`PreAnalyzed`]). [`Analyzer`] picks one of the
//! first two from `[tokenizer]` settings.

mod mecab;
mod vibrato;

pub use mecab::{parse_mecab, MecabCommand};
pub use vibrato::VibratoTokenizer;

use crate::settings::{TokenizerEngine, TokenizerSettings};
use crate::token::Token;

#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("analyzer exited with {status}: {stderr}")]
    Exit { status: String, stderr: String },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("analyzer output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("system dictionary: {0}")]
    Dictionary(#[from] vibrato_rkyv::errors::VibratoError),

    #[error("engine = \"vibrato\" needs tokenizer.dictionary")]
    NoDictionary,
}

/// Splits a sentence into analyzed tokens.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError>;
}

/// Input that is already in MeCab output format.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreAnalyzed;

impl Tokenizer for PreAnalyzed {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        parse_mecab(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        (**self).tokenize(text)
    }
}

/// The analyzer configured in `[tokenizer]`.
pub enum Analyzer {
    Mecab(MecabCommand),
    Vibrato(VibratoTokenizer),
}

impl Analyzer {
    /// The vibrato dictionary is loaded eagerly.
    pub fn from_settings(settings: &TokenizerSettings) -> Result<Self, TokenizeError> {
        match settings.engine {
            TokenizerEngine::Mecab => Ok(Self::Mecab(MecabCommand::from_settings(settings))),
            TokenizerEngine::Vibrato => {
                let path = settings
                    .dictionary
                    .as_deref()
                    .ok_or(TokenizeError::NoDictionary)?;
                Ok(Self::Vibrato(VibratoTokenizer::open(path)?))
            }
        }
    }
}

impl Tokenizer for Analyzer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        match self {
            Self::Mecab(cmd) => cmd.tokenize(text),
            Self::Vibrato(vibrato) => vibrato.tokenize(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn settings(engine: TokenizerEngine, dictionary: Option<PathBuf>) -> TokenizerSettings {
        TokenizerSettings {
            engine,
            program: "mecab".to_string(),
            args: Vec::new(),
            dictionary,
        }
    }

    #[test]
    fn test_mecab_engine_builds_command() {
        let analyzer = Analyzer::from_settings(&settings(TokenizerEngine::Mecab, None)).unwrap();
        match analyzer {
            Analyzer::Mecab(cmd) => assert_eq!(cmd.program, "mecab"),
            Analyzer::Vibrato(_) => panic!("expected the MeCab engine"),
        }
    }

    #[test]
    fn test_vibrato_engine_needs_dictionary() {
        let err = Analyzer::from_settings(&settings(TokenizerEngine::Vibrato, None))
            .err()
            .unwrap();
        assert!(matches!(err, TokenizeError::NoDictionary));
    }

    #[test]
    fn test_vibrato_engine_reports_unreadable_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("system.dic");
        std::fs::write(&path, b"not a dictionary").unwrap();
        let err = Analyzer::from_settings(&settings(TokenizerEngine::Vibrato, Some(path)))
            .err()
            .unwrap();
        assert!(matches!(err, TokenizeError::Dictionary(_)), "{err}");
    }
}
