//! Analyzed tokens and the inflection tags parsed from them.
//!
//! The tokenizer reports inflection as free-form IPADIC strings
//! (`五段・カ行イ音便`, `連用タ接続`). They are classified once here, when the
//! token is built, so the conjugator only ever matches closed enums.

use serde::Serialize;

use crate::pos::{MajorCategory, PosPath};

/// Conjugation form (活用形) of a verb or auxiliary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConjugationForm {
    /// 未然形 (irrealis)
    Mizen,
    /// 連用形 (conjunctive)
    Renyo,
    /// 連用形 before て/た, with euphonic change (音便)
    RenyoTe,
    /// 終止形 (terminal)
    Shushi,
    /// 連体形 (attributive)
    Rentai,
    /// 仮定形 (hypothetical)
    Katei,
    /// 命令形 (imperative)
    Meirei,
}

impl ConjugationForm {
    pub const ALL: [ConjugationForm; 7] = [
        Self::Mizen,
        Self::Renyo,
        Self::RenyoTe,
        Self::Shushi,
        Self::Rentai,
        Self::Katei,
        Self::Meirei,
    ];

    /// Classify an IPADIC 活用形 field.
    pub fn from_ipadic(form: &str) -> Option<Self> {
        if form == "基本形" {
            Some(Self::Shushi)
        } else if form.starts_with("未然") {
            Some(Self::Mizen)
        } else if form == "連用タ接続" || form == "連用テ接続" {
            Some(Self::RenyoTe)
        } else if form.starts_with("連用") {
            Some(Self::Renyo)
        } else if form.starts_with("体言接続") {
            Some(Self::Rentai)
        } else if form.starts_with("仮定") {
            Some(Self::Katei)
        } else if form.starts_with("命令") {
            Some(Self::Meirei)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mizen => "未然",
            Self::Renyo => "連用",
            Self::RenyoTe => "連用(音便)",
            Self::Shushi => "終止",
            Self::Rentai => "連体",
            Self::Katei => "仮定",
            Self::Meirei => "命令",
        }
    }
}

/// Conjugation class (活用型) of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbClass {
    /// 五段: `column` is the a-row katakana of the conjugation row (カ for 書く).
    /// `geminate_te` marks 促音便 classes whose て-form uses っ regardless of column (行く).
    Godan { column: char, geminate_te: bool },
    /// 一段
    Ichidan,
    /// カ変 (来る)
    Kuru,
    /// サ変 (する, 愛する)
    Suru,
}

impl VerbClass {
    /// Classify an IPADIC 活用型 field. Returns `None` for adjectives,
    /// auxiliaries, classical classes and anything else the conjugator lacks
    /// a table for.
    pub fn from_ipadic(inflection_type: &str) -> Option<Self> {
        if inflection_type.starts_with("五段") {
            // 五段・カ行… : the column is the 4th character.
            let column = inflection_type.chars().nth(3)?;
            let geminate_te = inflection_type.contains("促音便");
            Some(Self::Godan {
                column,
                geminate_te,
            })
        } else if inflection_type.starts_with("一段") {
            Some(Self::Ichidan)
        } else if inflection_type.starts_with("カ変") {
            Some(Self::Kuru)
        } else if inflection_type.starts_with("サ変") && !inflection_type.ends_with("ズル") {
            // サ変・−ズル (信ずる) keeps its stem in the surface; the fixed する
            // table cannot rebuild it.
            Some(Self::Suru)
        } else {
            None
        }
    }
}

/// One morpheme as reported by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub surface: String,
    pub base_form: String,
    #[serde(serialize_with = "serialize_pos")]
    pub pos: PosPath,
    pub inflection_type: String,
    pub inflection_form: String,
    /// Parsed from `inflection_type`.
    pub verb_class: Option<VerbClass>,
    /// Parsed from `inflection_form`.
    pub realized_form: Option<ConjugationForm>,
    /// BOS/EOS or other non-content marker.
    pub placeholder: bool,
}

fn serialize_pos<S: serde::Serializer>(pos: &PosPath, s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(pos.tags())
}

/// IPADIC writes `*` for fields that do not apply.
fn field(raw: &str) -> String {
    if raw == "*" {
        String::new()
    } else {
        raw.to_string()
    }
}

impl Token {
    pub fn new<I, S>(
        surface: &str,
        base_form: &str,
        pos: I,
        inflection_type: &str,
        inflection_form: &str,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let base = field(base_form);
        let inflection_type = field(inflection_type);
        let inflection_form = field(inflection_form);
        Self {
            surface: surface.to_string(),
            // Unknown words carry no base form; the surface stands in for it.
            base_form: if base.is_empty() {
                surface.to_string()
            } else {
                base
            },
            pos: PosPath::new(pos),
            verb_class: VerbClass::from_ipadic(&inflection_type),
            realized_form: ConjugationForm::from_ipadic(&inflection_form),
            inflection_type,
            inflection_form,
            placeholder: false,
        }
    }

    /// A BOS/EOS marker, skipped by the rewrite pipeline.
    pub fn placeholder() -> Self {
        Self {
            surface: String::new(),
            base_form: String::new(),
            pos: PosPath::default(),
            inflection_type: String::new(),
            inflection_form: String::new(),
            verb_class: None,
            realized_form: None,
            placeholder: true,
        }
    }

    pub fn major(&self) -> MajorCategory {
        self.pos.major()
    }

    pub fn is_imperative(&self) -> bool {
        self.realized_form == Some(ConjugationForm::Meirei)
    }

    /// Tokens the pipeline passes over without affecting context.
    pub fn is_skippable(&self) -> bool {
        self.placeholder || self.surface.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_godan_column() {
        assert_eq!(
            VerbClass::from_ipadic("五段・カ行イ音便"),
            Some(VerbClass::Godan {
                column: 'カ',
                geminate_te: false
            })
        );
        assert_eq!(
            VerbClass::from_ipadic("五段・ラ行特殊"),
            Some(VerbClass::Godan {
                column: 'ラ',
                geminate_te: false
            })
        );
        assert_eq!(
            VerbClass::from_ipadic("五段・カ行促音便"),
            Some(VerbClass::Godan {
                column: 'カ',
                geminate_te: true
            })
        );
    }

    #[test]
    fn test_other_classes() {
        assert_eq!(VerbClass::from_ipadic("一段"), Some(VerbClass::Ichidan));
        assert_eq!(VerbClass::from_ipadic("一段・クレル"), Some(VerbClass::Ichidan));
        assert_eq!(VerbClass::from_ipadic("カ変・来ル"), Some(VerbClass::Kuru));
        assert_eq!(VerbClass::from_ipadic("カ変・クル"), Some(VerbClass::Kuru));
        assert_eq!(VerbClass::from_ipadic("サ変・スル"), Some(VerbClass::Suru));
        assert_eq!(VerbClass::from_ipadic("サ変・−スル"), Some(VerbClass::Suru));
    }

    #[test]
    fn test_unclassified() {
        assert_eq!(VerbClass::from_ipadic("サ変・−ズル"), None);
        assert_eq!(VerbClass::from_ipadic("形容詞・アウオ段"), None);
        assert_eq!(VerbClass::from_ipadic("特殊・マス"), None);
        assert_eq!(VerbClass::from_ipadic("五段"), None);
        assert_eq!(VerbClass::from_ipadic(""), None);
    }

    #[test]
    fn test_conjugation_form_from_ipadic() {
        use ConjugationForm::*;
        assert_eq!(ConjugationForm::from_ipadic("基本形"), Some(Shushi));
        assert_eq!(ConjugationForm::from_ipadic("未然形"), Some(Mizen));
        assert_eq!(ConjugationForm::from_ipadic("未然ウ接続"), Some(Mizen));
        assert_eq!(ConjugationForm::from_ipadic("連用形"), Some(Renyo));
        assert_eq!(ConjugationForm::from_ipadic("連用タ接続"), Some(RenyoTe));
        assert_eq!(ConjugationForm::from_ipadic("連用テ接続"), Some(RenyoTe));
        assert_eq!(ConjugationForm::from_ipadic("体言接続"), Some(Rentai));
        assert_eq!(ConjugationForm::from_ipadic("仮定縮約１"), Some(Katei));
        assert_eq!(ConjugationForm::from_ipadic("命令ｅ"), Some(Meirei));
        assert_eq!(ConjugationForm::from_ipadic("命令ｙｏ"), Some(Meirei));
        assert_eq!(ConjugationForm::from_ipadic("ガル接続"), None);
    }

    #[test]
    fn test_token_new_normalizes_fields() {
        let t = Token::new("走れ", "走る", ["動詞", "自立", "*", "*"], "五段・ラ行", "命令ｅ");
        assert_eq!(t.pos.tags(), ["動詞", "自立"]);
        assert_eq!(t.major(), MajorCategory::Verb);
        assert!(t.is_imperative());
        assert!(matches!(t.verb_class, Some(VerbClass::Godan { column: 'ラ', .. })));

        let unknown = Token::new("ほげ", "*", ["名詞", "一般"], "*", "*");
        assert_eq!(unknown.base_form, "ほげ");
        assert_eq!(unknown.inflection_type, "");
        assert_eq!(unknown.verb_class, None);
        assert_eq!(unknown.realized_form, None);
    }

    #[test]
    fn test_placeholder_is_skippable() {
        assert!(Token::placeholder().is_skippable());
        assert!(Token::new("", "", ["記号"], "", "").is_skippable());
        assert!(!Token::new("。", "。", ["記号", "句点"], "", "").is_skippable());
    }
}
