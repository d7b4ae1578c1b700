//! Gojūon column arithmetic.
//!
//! A column is named by its a-row katakana (カ, サ, タ, ...). Rows 0..=4 are the
//! a/i/u/e/o positions. The katakana block interleaves small kana and voiced
//! kana, so the code-point stride between rows differs per column.

use crate::unicode::katakana_to_hiragana;

/// Number of rows (a, i, u, e, o) in a column.
pub const ROWS: u8 = 5;

/// Resolve the katakana mora at `row` of `column`.
fn katakana_for(column: char, row: u8) -> Option<char> {
    if row >= ROWS {
        return None;
    }
    let c = column as u32;
    let r = u32::from(row);
    let code = match column {
        'ナ' | 'マ' | 'ラ' => c + r,
        'ア' | 'カ' | 'ガ' | 'サ' | 'ザ' => c + 2 * r,
        // Rows from ウ onwards skip the small ッ (or ッ-adjacent ヂ/ヅ gap).
        'タ' | 'ダ' if r < 2 => c + 2 * r,
        'タ' | 'ダ' => c + 2 * r + 1,
        'ハ' | 'バ' | 'パ' => c + 3 * r,
        'ヤ' => match r {
            1 => 'イ' as u32,
            3 => 'エ' as u32,
            _ => c + r / 2,
        },
        'ワ' => match r {
            0 => 'ワ' as u32,
            _ => 'ア' as u32 + 2 * r,
        },
        _ => return None,
    };
    char::from_u32(code)
}

/// Hiragana mora at `row` of the column headed by katakana `column`.
///
/// Returns `None` for a column outside the table or a row past お.
pub fn mora_for(column: char, row: u8) -> Option<char> {
    katakana_for(column, row).and_then(katakana_to_hiragana)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::{is_hiragana, KANA_BLOCK_OFFSET};
    use proptest::prelude::*;

    const COLUMNS: [char; 15] = [
        'ア', 'カ', 'ガ', 'サ', 'ザ', 'タ', 'ダ', 'ナ', 'ハ', 'バ', 'パ', 'マ', 'ヤ', 'ラ', 'ワ',
    ];

    fn column_string(column: char) -> String {
        (0..ROWS).filter_map(|r| mora_for(column, r)).collect()
    }

    #[test]
    fn test_regular_columns() {
        assert_eq!(column_string('ア'), "あいうえお");
        assert_eq!(column_string('カ'), "かきくけこ");
        assert_eq!(column_string('サ'), "さしすせそ");
        assert_eq!(column_string('ナ'), "なにぬねの");
        assert_eq!(column_string('マ'), "まみむめも");
        assert_eq!(column_string('ラ'), "らりるれろ");
    }

    #[test]
    fn test_ta_column_skips_small_tsu() {
        assert_eq!(column_string('タ'), "たちつてと");
        assert_eq!(column_string('ダ'), "だぢづでど");
    }

    #[test]
    fn test_ha_column_stride_three() {
        assert_eq!(column_string('ハ'), "はひふへほ");
        assert_eq!(column_string('バ'), "ばびぶべぼ");
        assert_eq!(column_string('パ'), "ぱぴぷぺぽ");
    }

    #[test]
    fn test_voiced_stride_two() {
        assert_eq!(column_string('ガ'), "がぎぐげご");
        assert_eq!(column_string('ザ'), "ざじずぜぞ");
    }

    #[test]
    fn test_wa_column() {
        assert_eq!(column_string('ワ'), "わいうえお");
    }

    #[test]
    fn test_ya_column_literals() {
        assert_eq!(mora_for('ヤ', 0), Some('や'));
        assert_eq!(mora_for('ヤ', 1), Some('い'));
        assert_eq!(mora_for('ヤ', 3), Some('え'));
        // Rows 2 and 4 advance by half a row index.
        assert_eq!(mora_for('ヤ', 2), Some('ゅ'));
        assert_eq!(mora_for('ヤ', 4), Some('ゆ'));
    }

    #[test]
    fn test_unknown_column_or_row() {
        assert_eq!(mora_for('キ', 0), None);
        assert_eq!(mora_for('か', 0), None);
        assert_eq!(mora_for('x', 1), None);
        assert_eq!(mora_for('カ', 5), None);
    }

    #[test]
    fn test_injective_within_column() {
        for column in COLUMNS {
            let mut seen: Vec<char> = (0..ROWS).filter_map(|r| mora_for(column, r)).collect();
            assert_eq!(seen.len(), ROWS as usize, "column {column}");
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), ROWS as usize, "column {column} repeats a mora");
        }
    }

    proptest! {
        #[test]
        fn hiragana_is_katakana_minus_offset(
            column in prop::sample::select(COLUMNS.to_vec()),
            row in 0..ROWS,
        ) {
            let kata = katakana_for(column, row).unwrap();
            let hira = mora_for(column, row).unwrap();
            prop_assert!(is_hiragana(hira));
            prop_assert_eq!(hira as u32, kata as u32 - KANA_BLOCK_OFFSET);
        }
    }
}
