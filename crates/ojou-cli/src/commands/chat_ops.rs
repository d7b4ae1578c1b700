use std::io::{self, BufRead, Write};
use std::process;

use rand::Rng;
use tracing::debug;

use ojou_core::{strip_command, Tokenizer, Translator, WordDictionary};

use super::Common;

/// Reply to one chat message. Messages without the command prefix, or with
/// nothing after it, get no reply.
pub fn respond<T, D, R>(
    translator: &mut Translator<T, D, R>,
    prefix: &str,
    message: &str,
) -> Option<String>
where
    T: Tokenizer,
    D: WordDictionary,
    R: Rng,
{
    let sentence = strip_command(message, prefix)?.trim();
    if sentence.is_empty() {
        debug!("empty command");
        return None;
    }
    Some(translator.translate(sentence))
}

/// Read chat messages from stdin, one per line, and print the replies.
pub fn chat(common: &Common) {
    let settings = common.settings();
    let prefix = settings.frontend.command_prefix.clone();
    let mut translator = die!(
        Translator::from_settings(&settings, common.dictionary()),
        "Error starting analyzer: {}"
    );
    let stdout = io::stdout();
    for line in io::stdin().lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        if let Some(reply) = respond(&mut translator, &prefix, &line) {
            let mut out = stdout.lock();
            die!(writeln!(out, "{reply}"), "Error writing reply: {}");
            die!(out.flush(), "Error writing reply: {}");
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use ojou_core::{RegisteredWords, Token, TokenizeError};

    use super::*;

    /// Analyzes any input as the single noun 本 followed by 。.
    struct OneNoun;

    impl Tokenizer for OneNoun {
        fn tokenize(&self, _text: &str) -> Result<Vec<Token>, TokenizeError> {
            Ok(vec![
                Token::new("本", "本", ["名詞", "一般"], "*", "*"),
                Token::new("。", "。", ["記号", "句点"], "*", "*"),
            ])
        }
    }

    fn translator() -> Translator<OneNoun, RegisteredWords, ChaCha8Rng> {
        Translator::new(
            OneNoun,
            RegisteredWords::new(),
            ChaCha8Rng::seed_from_u64(1),
            "diagnostic",
        )
    }

    #[test]
    fn test_prefixed_message_is_translated() {
        let mut tr = translator();
        let reply = respond(&mut tr, "!ojou ", "!ojou 本。").unwrap();
        assert!(reply.starts_with("お本です"));
        assert!(reply.ends_with('。'));
    }

    #[test]
    fn test_other_messages_are_ignored() {
        let mut tr = translator();
        assert_eq!(respond(&mut tr, "!ojou ", "本。"), None);
        assert_eq!(respond(&mut tr, "!ojou ", "!ojou   "), None);
        assert_eq!(respond(&mut tr, "!ojou ", ""), None);
    }
}
