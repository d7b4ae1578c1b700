//! Process-wide configuration: command prefix, diagnostic text, analyzer
//! choice and the optional RNG seed.
//!
//! The built-in `default_settings.toml` applies unless a front-end installs
//! its own document with [`init_custom`] before the first [`settings`] call.

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub frontend: FrontendSettings,
    pub tokenizer: TokenizerSettings,
    #[serde(default)]
    pub random: RandomSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrontendSettings {
    pub command_prefix: String,
    pub diagnostic: String,
}

/// Morphological analyzer backing the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerEngine {
    /// External MeCab process (`program`, `args`).
    #[default]
    Mecab,
    /// In-process vibrato with the system dictionary at `dictionary`.
    Vibrato,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenizerSettings {
    #[serde(default)]
    pub engine: TokenizerEngine,
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Compiled vibrato system dictionary (`system.dic` or `system.dic.zst`).
    #[serde(default)]
    pub dictionary: Option<PathBuf>,
}

fn default_program() -> String {
    "mecab".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RandomSettings {
    /// Fixed seed for particle and candidate choices. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(frontend.command_prefix);
    check_non_empty!(frontend.diagnostic);
    match s.tokenizer.engine {
        TokenizerEngine::Mecab => check_non_empty!(tokenizer.program),
        TokenizerEngine::Vibrato => {
            if s
                .tokenizer
                .dictionary
                .as_ref()
                .map_or(true, |p| p.as_os_str().is_empty())
            {
                return Err(SettingsError::InvalidValue {
                    field: "tokenizer.dictionary".to_string(),
                    reason: "required when engine = \"vibrato\"".to_string(),
                });
            }
        }
    }

    if let Some(i) = s.tokenizer.args.iter().position(|a| a.is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: format!("tokenizer.args[{i}]"),
            reason: "arguments must not be empty strings".to_string(),
        });
    }

    Ok(())
}
