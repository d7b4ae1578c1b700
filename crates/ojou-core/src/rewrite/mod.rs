//! Sentence rewrite pipeline.
//!
//! One left-to-right pass over the analyzed tokens. Per token:
//! honorific prefix → dictionary substitution → verb politeness →
//! sentence-final particles. Lookahead and lookbehind are limited to the
//! neighbouring non-skipped token.

mod buffer;

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, debug_span};

use crate::conjugate::{conjugate, politeness_form, politeness_suffix};
use crate::dict::{DictError, WordDictionary};
use crate::pos::MajorCategory;
use crate::token::{ConjugationForm, Token};

use buffer::OutputBuffer;

const HONORIFIC_PREFIX: &str = "お";
const COMMAND_SUFFIX: &str = "てくださいませ";
const COPULA: &str = "です";
const QUESTION_PARTICLE: &str = "かしら";
const FINAL_PARTICLES: [&str; 2] = ["わ", "の"];

/// Noun sub-categories that take the お prefix.
const PREFIXABLE_NOUNS: [&str; 4] = ["一般", "サ変接続", "数", "形容動詞語幹"];
const CLOSING_MARKS: [&str; 6] = ["。", "．", "！", "？", "!", "?"];
const QUESTION_MARKS: [&str; 2] = ["？", "?"];

/// Rewrite one analyzed sentence into ojousama speech.
///
/// `dict` is consulted once per non-skipped token; a lookup error aborts the
/// sentence. `rng` drives candidate selection and the わ/の coin flip.
pub fn rewrite<D, R>(tokens: &[Token], dict: &D, rng: &mut R) -> Result<String, DictError>
where
    D: WordDictionary + ?Sized,
    R: Rng + ?Sized,
{
    let _span = debug_span!("rewrite", tokens = tokens.len()).entered();

    let content: Vec<usize> = (0..tokens.len())
        .filter(|&i| !tokens[i].is_skippable())
        .collect();

    let mut out = OutputBuffer::new();
    // Surfaces rewritten ahead of time by an earlier token (ない → ん).
    let mut overlay: HashMap<usize, &'static str> = HashMap::new();
    let mut prev: Option<&Token> = None;
    // Whether the latest verb of the current sentence became a command.
    let mut imperative = false;

    for (n, &i) in content.iter().enumerate() {
        let token = &tokens[i];
        let next_idx = content.get(n + 1).copied();
        let next = next_idx.map(|j| &tokens[j]);
        let surface: &str = match overlay.get(&i) {
            Some(&s) => s,
            None => &token.surface,
        };

        let mut text = if takes_honorific(token, prev) {
            format!("{HONORIFIC_PREFIX}{surface}")
        } else {
            surface.to_string()
        };
        if let Some(target) = substitute(dict, surface, token, rng)? {
            text = target;
        }
        out.push(&text);

        if token.major() == MajorCategory::Verb && politeness_applies(next) {
            if token.is_imperative() {
                let command = conjugate(token, ConjugationForm::RenyoTe) + COMMAND_SUFFIX;
                out.replace_last(&command);
                imperative = true;
            } else {
                let following = next
                    .filter(|t| t.major() == MajorCategory::Auxiliary)
                    .map_or("", |t| t.base_form.as_str());
                let polite = conjugate(token, ConjugationForm::Renyo)
                    + politeness_suffix(politeness_form(following));
                out.replace_last(&polite);
                imperative = false;
                if let (Some(j), Some(t)) = (next_idx, next) {
                    if t.base_form == "ない" {
                        overlay.insert(j, "ん");
                    }
                }
            }
        }

        if is_closing_mark(token) {
            if let Some(p) = prev.filter(|p| is_content(p)) {
                if !imperative {
                    if QUESTION_MARKS.contains(&token.surface.as_str()) {
                        out.insert_before_last(QUESTION_PARTICLE);
                    } else {
                        let copula = if p.major() == MajorCategory::Noun {
                            COPULA
                        } else {
                            ""
                        };
                        let ending = format!("{copula}{}", coin_flip(rng));
                        out.insert_before_last(&ending);
                    }
                }
            }
            imperative = false;
        } else if next.is_none() && !imperative {
            if token.base_form == "か" {
                if !out.replace_trailing("か", QUESTION_PARTICLE) {
                    debug!(surface = %text, "substituted question particle, no かしら");
                }
            } else if ends_implicitly(token) {
                if prev.is_some_and(|p| p.major() == MajorCategory::Noun)
                    && token.major() != MajorCategory::Verb
                    && !matches!(token.base_form.as_str(), "だ" | "です")
                {
                    out.push(COPULA);
                }
                out.push(coin_flip(rng));
            }
        }

        prev = Some(token);
    }

    debug!(output = out.as_str(), "rewrote sentence");
    Ok(out.into_string())
}

/// お goes on common, number, adjectival-stem and verbal nouns unless an
/// earlier noun or prefix already heads the compound. Adverbial nouns
/// (今日, 毎日) do not block.
fn takes_honorific(token: &Token, prev: Option<&Token>) -> bool {
    if token.major() != MajorCategory::Noun {
        return false;
    }
    let Some(sub) = token.pos.sub() else {
        return false;
    };
    if !PREFIXABLE_NOUNS.contains(&sub) {
        return false;
    }
    match prev {
        None => true,
        Some(p) => match p.major() {
            MajorCategory::Prefix => false,
            MajorCategory::Noun => p.pos.sub() == Some("副詞可能"),
            _ => true,
        },
    }
}

/// Pick one matching dictionary candidate, uniformly at random.
fn substitute<D, R>(
    dict: &D,
    surface: &str,
    token: &Token,
    rng: &mut R,
) -> Result<Option<String>, DictError>
where
    D: WordDictionary + ?Sized,
    R: Rng + ?Sized,
{
    let candidates = dict.lookup(surface, &token.pos)?;
    let matching: Vec<_> = candidates
        .iter()
        .filter(|c| c.matches(surface, &token.pos))
        .collect();
    Ok(matching.choose(rng).map(|c| c.target_surface.clone()))
}

/// A verb takes ます unless the clause continues into て or an existing ます.
fn politeness_applies(next: Option<&Token>) -> bool {
    let Some(next) = next else {
        return true;
    };
    if is_closing_mark(next) {
        return true;
    }
    match next.major() {
        MajorCategory::Particle => next.base_form != "て",
        MajorCategory::Auxiliary => next.base_form != "ます",
        _ => false,
    }
}

fn is_closing_mark(token: &Token) -> bool {
    token.major() == MajorCategory::Symbol
        && (token.pos.sub() == Some("句点") || CLOSING_MARKS.contains(&token.surface.as_str()))
}

/// Whether a token can carry a sentence-final particle after it.
fn is_content(token: &Token) -> bool {
    !matches!(
        token.major(),
        MajorCategory::Particle | MajorCategory::Symbol | MajorCategory::Interjection
    ) && token.surface != "う"
}

/// Whether an unpunctuated sentence ending in `token` gets a final particle.
fn ends_implicitly(token: &Token) -> bool {
    token.major() != MajorCategory::Noun && is_content(token)
}

fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    if rng.gen::<f64>() < 0.5 {
        FINAL_PARTICLES[0]
    } else {
        FINAL_PARTICLES[1]
    }
}
