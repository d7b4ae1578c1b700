use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use tracing::{debug, debug_span};

use super::{TokenizeError, Tokenizer};
use crate::settings::TokenizerSettings;
use crate::token::Token;

const EOS: &str = "EOS";
const POS_FIELDS: usize = 4;
const INFLECTION_TYPE: usize = 4;
const INFLECTION_FORM: usize = 5;
const BASE_FORM: usize = 6;

/// Parse MeCab default output with IPADIC features:
/// `surface\tpos1,pos2,pos3,pos4,ctype,cform,base[,reading,pron]`.
///
/// `EOS` lines become placeholders. Unknown words may carry fewer than nine
/// features; missing ones are treated as `*`.
pub fn parse_mecab(text: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if line == EOS {
            tokens.push(Token::placeholder());
            continue;
        }
        let Some((surface, features)) = line.split_once('\t') else {
            return Err(TokenizeError::Parse {
                line: n + 1,
                reason: "missing tab between surface and features".to_string(),
            });
        };
        if features.is_empty() {
            return Err(TokenizeError::Parse {
                line: n + 1,
                reason: "empty feature field".to_string(),
            });
        }
        tokens.push(token_from_features(surface, features));
    }
    Ok(tokens)
}

/// One token from an IPADIC feature string (everything after the tab in
/// MeCab output, or a dictionary word's feature column).
pub(crate) fn token_from_features(surface: &str, features: &str) -> Token {
    let fields: Vec<&str> = features.split(',').collect();
    let get = |i: usize| fields.get(i).copied().unwrap_or("*");
    Token::new(
        surface,
        get(BASE_FORM),
        fields.iter().take(POS_FIELDS).copied(),
        get(INFLECTION_TYPE),
        get(INFLECTION_FORM),
    )
}

/// Runs an external MeCab-compatible analyzer once per call.
#[derive(Debug, Clone)]
pub struct MecabCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl MecabCommand {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    pub fn from_settings(settings: &TokenizerSettings) -> Self {
        Self {
            program: settings.program.clone(),
            args: settings.args.clone(),
        }
    }

    fn run(&self, text: &str) -> Result<String, TokenizeError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| TokenizeError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Stdin is fed from its own thread while stdout and stderr drain.
        let writer = child.stdin.take().map(|mut stdin| {
            let mut input = text.to_string();
            if !input.ends_with('\n') {
                input.push('\n');
            }
            thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child.wait_with_output()?;
        let written = match writer {
            Some(handle) => handle
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked"))),
            None => Ok(()),
        };
        if !output.status.success() {
            return Err(TokenizeError::Exit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written?;
        Ok(String::from_utf8(output.stdout)?)
    }
}

impl Tokenizer for MecabCommand {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        let _span = debug_span!("mecab", program = %self.program).entered();
        let raw = self.run(text)?;
        let tokens = parse_mecab(&raw)?;
        debug!(tokens = tokens.len(), "analyzed");
        Ok(tokens)
    }
}
