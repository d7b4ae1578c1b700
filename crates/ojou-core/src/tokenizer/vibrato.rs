use std::path::Path;

use tracing::{debug, debug_span, info};
use vibrato_rkyv::{CacheStrategy, Dictionary, LoadMode};

use super::mecab::token_from_features;
use super::{TokenizeError, Tokenizer};
use crate::token::Token;

/// In-process analyzer over a compiled vibrato system dictionary with
/// IPADIC features.
pub struct VibratoTokenizer {
    inner: vibrato_rkyv::Tokenizer,
}

impl VibratoTokenizer {
    /// Load `path`. A `.zst` dictionary is decompressed through the user cache
    /// directory; anything else is read as an uncompressed `system.dic`.
    pub fn open(path: &Path) -> Result<Self, TokenizeError> {
        let _span = debug_span!("vibrato_open", path = %path.display()).entered();
        let dict = if path.extension().is_some_and(|ext| ext == "zst") {
            Dictionary::from_zstd(path, CacheStrategy::GlobalCache)?
        } else {
            Dictionary::from_path(path, LoadMode::Validate)?
        };
        info!(path = %path.display(), "loaded system dictionary");
        Ok(Self::from(vibrato_rkyv::Tokenizer::new(dict)))
    }
}

impl From<vibrato_rkyv::Tokenizer> for VibratoTokenizer {
    fn from(inner: vibrato_rkyv::Tokenizer) -> Self {
        Self { inner }
    }
}

impl Tokenizer for VibratoTokenizer {
    /// Each non-blank line is analyzed separately and closed with an
    /// end-of-sentence placeholder, the same shape `parse_mecab` produces.
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        let _span = debug_span!("vibrato").entered();
        let mut worker = self.inner.new_worker();
        let mut tokens = Vec::new();
        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            worker.reset_sentence(line);
            worker.tokenize();
            for i in 0..worker.num_tokens() {
                let t = worker.token(i);
                tokens.push(token_from_features(t.surface(), t.feature()));
            }
            tokens.push(Token::placeholder());
        }
        debug!(tokens = tokens.len(), "analyzed");
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::MajorCategory;
    use crate::token::{ConjugationForm, VerbClass};
    use vibrato_rkyv::SystemDictionaryBuilder;

    const LEXICON: &str = "\
本,0,0,1,名詞,一般,*,*,*,*,本,ホン,ホン
を,0,0,1,助詞,格助詞,一般,*,*,*,を,ヲ,ヲ
読む,0,0,1,動詞,自立,*,*,五段・マ行,基本形,読む,ヨム,ヨム
。,0,0,1,記号,句点,*,*,*,*,。,。,。
";
    const MATRIX: &str = "1 1\n0 0 0";
    const CHAR_DEF: &str = "DEFAULT 0 1 0";
    const UNK_DEF: &str = "DEFAULT,0,0,100,*";

    fn tiny() -> VibratoTokenizer {
        let dict = SystemDictionaryBuilder::from_readers(
            LEXICON.as_bytes(),
            MATRIX.as_bytes(),
            CHAR_DEF.as_bytes(),
            UNK_DEF.as_bytes(),
        )
        .unwrap();
        VibratoTokenizer::from(vibrato_rkyv::Tokenizer::from_inner(dict))
    }

    #[test]
    fn test_tokens_carry_ipadic_features() {
        let tokens = tiny().tokenize("本を読む。").unwrap();
        let surfaces: Vec<&str> = tokens.iter().map(|t| t.surface.as_str()).collect();
        assert_eq!(surfaces, ["本", "を", "読む", "。", ""]);
        assert_eq!(tokens[0].major(), MajorCategory::Noun);
        assert_eq!(tokens[1].pos.tags(), ["助詞", "格助詞", "一般"]);
        assert_eq!(
            tokens[2].verb_class,
            Some(VerbClass::Godan {
                column: 'マ',
                geminate_te: false
            })
        );
        assert_eq!(tokens[2].realized_form, Some(ConjugationForm::Shushi));
        assert_eq!(tokens[3].pos.sub(), Some("句点"));
        assert!(tokens[4].is_skippable());
    }

    #[test]
    fn test_one_placeholder_per_line() {
        let tokens = tiny().tokenize("本。\n\n読む\r\n").unwrap();
        assert_eq!(tokens.iter().filter(|t| t.is_skippable()).count(), 2);
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_empty_input() {
        assert!(tiny().tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_missing_dictionary_is_error() {
        let err = VibratoTokenizer::open(Path::new("/nonexistent/ojou/system.dic"))
            .err()
            .unwrap();
        assert!(matches!(err, TokenizeError::Dictionary(_)));
    }

    #[test]
    fn test_translates_through_vibrato() {
        use crate::dict::RegisteredWords;
        use crate::translator::Translator;
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let mut tr = Translator::new(
            tiny(),
            RegisteredWords::new(),
            ChaCha8Rng::seed_from_u64(3),
            "申し訳ございません",
        );
        let out = tr.translate("本を読む。");
        assert!(out == "お本を読みますわ。" || out == "お本を読みますの。", "{out}");
    }
}
