//! Verb conjugation from a token's base form and class.
//!
//! Godan forms are computed from the kana table; the other classes are small
//! literal tables. Anything without a table falls back to the token's own
//! surface so a single unmodelled verb never breaks the sentence.

mod auxiliary;

pub use auxiliary::{politeness_form, politeness_suffix};

use tracing::debug;

use crate::kana::mora_for;
use crate::token::{ConjugationForm, Token, VerbClass};

/// Leading character of the bare 来る lexeme.
const KURU_KANJI: char = '来';
const SURU: &str = "する";

/// Conjugate `token` into `form`. Returns the unmodified surface when the
/// class/form combination is not covered.
pub fn conjugate(token: &Token, form: ConjugationForm) -> String {
    match try_conjugate(token, form) {
        Some(s) => s,
        None => {
            debug!(
                surface = %token.surface,
                inflection_type = %token.inflection_type,
                ?form,
                "no conjugation table, keeping surface"
            );
            token.surface.clone()
        }
    }
}

fn try_conjugate(token: &Token, form: ConjugationForm) -> Option<String> {
    match token.verb_class? {
        VerbClass::Godan {
            column,
            geminate_te,
        } => godan(&token.base_form, column, geminate_te, form),
        VerbClass::Ichidan => ichidan(&token.base_form, form),
        VerbClass::Kuru => Some(kuru(&token.surface, form).to_string()),
        VerbClass::Suru => suru(&token.base_form, form),
    }
}

/// Base form minus its final kana.
fn stem(base_form: &str) -> Option<&str> {
    let (idx, _) = base_form.char_indices().next_back()?;
    Some(&base_form[..idx])
}

fn godan(base_form: &str, column: char, geminate_te: bool, form: ConjugationForm) -> Option<String> {
    let stem = stem(base_form)?;
    let row = match form {
        ConjugationForm::Mizen => 0,
        ConjugationForm::Renyo => 1,
        ConjugationForm::Shushi | ConjugationForm::Rentai => 2,
        ConjugationForm::Katei => 3,
        ConjugationForm::Meirei => 4,
        ConjugationForm::RenyoTe => {
            if let Some(euphonic) = euphonic_ending(column, geminate_te) {
                return Some(format!("{stem}{euphonic}"));
            }
            1
        }
    };
    let mora = mora_for(column, row)?;
    Some(format!("{stem}{mora}"))
}

/// 音便 ending of the て-form stem, or `None` for columns that keep the
/// plain i-row (話し).
fn euphonic_ending(column: char, geminate_te: bool) -> Option<&'static str> {
    if geminate_te {
        return Some("っ");
    }
    match column {
        'カ' | 'ガ' => Some("い"),
        'ア' | 'タ' | 'ラ' | 'ワ' => Some("っ"),
        'ナ' | 'バ' | 'マ' => Some("ん"),
        _ => None,
    }
}

fn ichidan(base_form: &str, form: ConjugationForm) -> Option<String> {
    let stem = stem(base_form)?;
    let ending = match form {
        ConjugationForm::Mizen | ConjugationForm::Renyo | ConjugationForm::RenyoTe => "",
        ConjugationForm::Shushi | ConjugationForm::Rentai => "る",
        ConjugationForm::Katei => "れ",
        ConjugationForm::Meirei => "ろ",
    };
    Some(format!("{stem}{ending}"))
}

fn kuru(surface: &str, form: ConjugationForm) -> &'static str {
    if surface.starts_with(KURU_KANJI) {
        match form {
            ConjugationForm::Mizen | ConjugationForm::Renyo | ConjugationForm::RenyoTe => "来",
            ConjugationForm::Shushi | ConjugationForm::Rentai => "来る",
            ConjugationForm::Katei => "来れ",
            ConjugationForm::Meirei => "来い",
        }
    } else {
        match form {
            ConjugationForm::Mizen => "こ",
            ConjugationForm::Renyo | ConjugationForm::RenyoTe => "き",
            ConjugationForm::Shushi | ConjugationForm::Rentai => "くる",
            ConjugationForm::Katei => "くれ",
            ConjugationForm::Meirei => "こい",
        }
    }
}

/// する and lexical サ変 verbs (愛する): the part before する is kept.
fn suru(base_form: &str, form: ConjugationForm) -> Option<String> {
    let stem = base_form.strip_suffix(SURU)?;
    let ending = match form {
        ConjugationForm::Mizen | ConjugationForm::Renyo | ConjugationForm::RenyoTe => "し",
        ConjugationForm::Shushi | ConjugationForm::Rentai => "する",
        ConjugationForm::Katei => "すれ",
        ConjugationForm::Meirei => "しろ",
    };
    Some(format!("{stem}{ending}"))
}
