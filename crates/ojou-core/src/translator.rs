//! Front-end: analyze, rewrite, and map failures to a fixed diagnostic.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info_span, warn};

use crate::dict::{DictError, WordDictionary};
use crate::rewrite::rewrite;
use crate::settings::{RandomSettings, Settings};
use crate::tokenizer::{Analyzer, TokenizeError, Tokenizer};

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("tokenizer: {0}")]
    Tokenizer(#[from] TokenizeError),

    #[error("dictionary: {0}")]
    Dictionary(#[from] DictError),
}

/// Owns one tokenizer, one dictionary and one random source.
pub struct Translator<T, D, R> {
    tokenizer: T,
    dict: D,
    rng: R,
    diagnostic: String,
}

impl<T, D, R> Translator<T, D, R>
where
    T: Tokenizer,
    D: WordDictionary,
    R: Rng,
{
    pub fn new(tokenizer: T, dict: D, rng: R, diagnostic: &str) -> Self {
        Self {
            tokenizer,
            dict,
            rng,
            diagnostic: diagnostic.to_string(),
        }
    }

    /// Rewrite `sentence`. Never fails: analyzer or dictionary errors are
    /// logged and the diagnostic string is returned instead of partial output.
    pub fn translate(&mut self, sentence: &str) -> String {
        match self.try_translate(sentence) {
            Ok(out) => out,
            Err(e) => {
                warn!(error = %e, sentence, "translation failed");
                self.diagnostic.clone()
            }
        }
    }

    pub fn try_translate(&mut self, sentence: &str) -> Result<String, TranslateError> {
        let _span = info_span!("translate").entered();
        let tokens = self.tokenizer.tokenize(sentence)?;
        Ok(rewrite(&tokens, &self.dict, &mut self.rng)?)
    }
}

impl<D: WordDictionary> Translator<Analyzer, D, ChaCha8Rng> {
    /// Analyzer from `[tokenizer]`, RNG from `[random]`.
    pub fn from_settings(settings: &Settings, dict: D) -> Result<Self, TokenizeError> {
        Ok(Self::new(
            Analyzer::from_settings(&settings.tokenizer)?,
            dict,
            seeded_rng(&settings.random),
            &settings.frontend.diagnostic,
        ))
    }
}

/// ChaCha8 seeded from `random.seed`, or from OS entropy when unset.
pub fn seeded_rng(random: &RandomSettings) -> ChaCha8Rng {
    match random.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// The chat front-end rule: only messages that start with `prefix` are
/// translated, and the remainder is the sentence.
pub fn strip_command<'a>(message: &'a str, prefix: &str) -> Option<&'a str> {
    message.strip_prefix(prefix)
}
