use std::process;

use unicode_width::UnicodeWidthStr;

use ojou_core::conjugate::conjugate;
use ojou_core::{ConjugationForm, Token};

#[derive(Debug, thiserror::Error)]
pub enum ConjugateError {
    #[error("unsupported inflection type: {0}")]
    UnknownClass(String),
}

/// All seven forms of `base` in a verb class named the IPADIC way.
pub fn conjugation_table(
    base: &str,
    inflection_type: &str,
) -> Result<Vec<(ConjugationForm, String)>, ConjugateError> {
    let token = Token::new(base, base, ["動詞", "自立"], inflection_type, "基本形");
    if token.verb_class.is_none() {
        return Err(ConjugateError::UnknownClass(inflection_type.to_string()));
    }
    Ok(ConjugationForm::ALL
        .iter()
        .map(|&form| (form, conjugate(&token, form)))
        .collect())
}

pub fn format_table(rows: &[(ConjugationForm, String)]) -> String {
    let pad_width = rows
        .iter()
        .map(|(form, _)| UnicodeWidthStr::width(form.label()))
        .max()
        .unwrap_or(0)
        + 2;
    let mut out = String::new();
    for (form, surface) in rows {
        let label = form.label();
        let padding = " ".repeat(pad_width - UnicodeWidthStr::width(label));
        out.push_str(&format!("{label}{padding}{surface}\n"));
    }
    out
}

pub fn run(base: &str, inflection_type: &str) {
    let rows = die!(conjugation_table(base, inflection_type), "Error: {}");
    print!("{}", format_table(&rows));
}
