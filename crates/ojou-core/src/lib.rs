pub mod conjugate;
pub mod dict;
pub mod kana;
pub mod pos;
pub mod rewrite;
pub mod settings;
pub mod token;
pub mod tokenizer;
pub mod translator;
pub mod unicode;

pub use dict::{DictError, DictionaryCandidate, RegisteredWords, WordDictionary};
pub use rewrite::rewrite;
pub use token::{ConjugationForm, Token, VerbClass};
pub use tokenizer::{Analyzer, MecabCommand, PreAnalyzed, TokenizeError, Tokenizer, VibratoTokenizer};
pub use translator::{strip_command, TranslateError, Translator};
