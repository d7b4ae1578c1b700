//! Character-level Unicode helpers for kana arithmetic.

/// Distance between a katakana code point and its hiragana counterpart
/// (U+30A2 ア - U+3042 あ).
pub const KANA_BLOCK_OFFSET: u32 = 0x60;

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Map a katakana character onto the hiragana block.
///
/// Only ァ..ヶ (U+30A1..U+30F6) have hiragana forms; ヷ..ヿ, the middle dot and
/// the prolonged sound mark return `None`.
pub fn katakana_to_hiragana(c: char) -> Option<char> {
    if !('\u{30A1}'..='\u{30F6}').contains(&c) {
        return None;
    }
    char::from_u32(c as u32 - KANA_BLOCK_OFFSET)
}
