//! Form selection for the politeness auxiliary ます.

use crate::token::ConjugationForm;

/// Form ます must take in front of an auxiliary with base form `following`.
///
/// Negatives (ない/ぬ/ん) select 仮定 so the pair contracts to ません;
/// まい selects 終止 (ますまい). Unknown followers default to 終止.
pub fn politeness_form(following: &str) -> ConjugationForm {
    let form = match following {
        "れる" | "られる" | "せる" | "ない" | "ぬ" | "ん" | "う" => ConjugationForm::Mizen,
        "たい" | "た" | "だ" | "ます" | "やがる" => ConjugationForm::Renyo,
        "らしい" | "べき" => ConjugationForm::Shushi,
        _ => ConjugationForm::Shushi,
    };
    match following {
        "ん" | "ぬ" | "ない" => ConjugationForm::Katei,
        "まい" => ConjugationForm::Shushi,
        _ => form,
    }
}

/// Surface of ます in `form`.
pub fn politeness_suffix(form: ConjugationForm) -> &'static str {
    match form {
        ConjugationForm::Mizen => "ましょ",
        ConjugationForm::Renyo | ConjugationForm::RenyoTe => "まし",
        ConjugationForm::Shushi | ConjugationForm::Rentai => "ます",
        ConjugationForm::Katei | ConjugationForm::Meirei => "ませ",
    }
}
