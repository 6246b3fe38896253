//! Positional pseudo-binary decoding
//!
//! Every variant shares one accumulation rule: the window is read as a
//! base-N numeral, leftmost character most significant. The signed variant
//! then folds the unsigned result into a symmetric range by subtracting
//! `base^width` from the upper half.

use crate::error::DecodeError;
use crate::table::CharacterValueTable;
use crate::variant::{TableSet, Variant};

/// Digit values of `text`, leftmost first
///
/// Every character is looked up before any arithmetic, so an unknown
/// character is reported even when the window would also overflow.
fn digits(table: &CharacterValueTable, text: &str) -> Result<Vec<u32>, DecodeError> {
    let digits = text
        .chars()
        .enumerate()
        .map(|(position, character)| {
            table.digit(character).ok_or(DecodeError::InvalidCharacter {
                character,
                position,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if digits.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    Ok(digits)
}

/// Positional base-N value of `digits`, or `None` past `u128::MAX`
fn accumulate(base: u32, digits: impl IntoIterator<Item = u32>) -> Option<u128> {
    let base = u128::from(base);
    digits.into_iter().try_fold(0u128, |result, digit| {
        result
            .checked_mul(base)
            .and_then(|r| r.checked_add(u128::from(digit)))
    })
}

/// `base^width`, the number of distinct values a window can hold
pub(crate) fn value_range(base: u32, width: usize) -> Option<u128> {
    let width = u32::try_from(width).ok()?;
    u128::from(base).checked_pow(width)
}

/// Decode `text` as a non-negative integer
pub fn decode_unsigned(table: &CharacterValueTable, text: &str) -> Result<i64, DecodeError> {
    let digits = digits(table, text)?;
    let width = digits.len();
    accumulate(table.base(), digits)
        .and_then(|result| i64::try_from(result).ok())
        .ok_or(DecodeError::Overflow { width })
}

/// Decode `text` as a signed integer
///
/// Results in `[base^width / 2, base^width)` map to `result - base^width`.
/// The fold is evaluated through the digit complement
/// (`base^width - 1 - result`), so neither `base^width` nor the raw
/// result has to fit in `u128` when the signed value itself is small.
pub fn decode_signed(table: &CharacterValueTable, text: &str) -> Result<i64, DecodeError> {
    let digits = digits(table, text)?;
    let width = digits.len();
    let base = table.base();

    let result = accumulate(base, digits.iter().copied());
    let complement = accumulate(base, digits.iter().map(|&d| base - 1 - d));

    // result + complement + 1 == base^width, so the upper half is result > complement
    let value = match (result, complement) {
        (Some(result), Some(complement)) if result <= complement => i64::try_from(result).ok(),
        (Some(result), None) => i64::try_from(result).ok(),
        (_, Some(complement)) => i64::try_from(complement).ok().map(|c| -1 - c),
        (None, None) => None,
    };
    value.ok_or(DecodeError::Overflow { width })
}

/// Variant-aware decoder over an injected [`TableSet`]
///
/// Immutable after construction, so a single decoder can be shared across
/// threads and decode any number of windows concurrently.
#[derive(Debug, Clone)]
pub struct Decoder {
    tables: TableSet,
}

impl Decoder {
    pub fn new(tables: TableSet) -> Self {
        Self { tables }
    }

    /// Decoder using the `ascii-6bit` table for every variant
    pub fn ascii_6bit() -> Self {
        Self::new(TableSet::uniform(CharacterValueTable::ascii_6bit()))
    }

    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    pub fn table(&self, variant: Variant) -> &CharacterValueTable {
        self.tables.get(variant)
    }

    /// Decode a window's text with the given variant
    pub fn decode(&self, variant: Variant, text: &str) -> Result<i64, DecodeError> {
        let table = self.tables.get(variant);
        match variant {
            Variant::Positive | Variant::B => decode_unsigned(table, text),
            Variant::Signed => decode_signed(table, text),
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    fn binary() -> CharacterValueTable {
        CharacterValueTable::from_alphabet("AB").unwrap()
    }

    #[test]
    fn test_decode_binary_example() {
        assert_eq!(decode_unsigned(&binary(), "BA").unwrap(), 2);
        assert_eq!(decode_unsigned(&binary(), "BBB").unwrap(), 7);
        assert_eq!(decode_unsigned(&binary(), "AAAA").unwrap(), 0);
    }

    #[test]
    fn test_decode_ascii_6bit_window() {
        let decoder = Decoder::ascii_6bit();
        // '@' = 0, 'F' = 6, 'f' = 38
        assert_eq!(decoder.decode(Variant::Positive, "@Ff").unwrap(), 422);
        assert_eq!(decoder.decode(Variant::B, "@Ff").unwrap(), 422);
        assert_eq!(decoder.decode(Variant::Positive, "?").unwrap(), 63);
        assert_eq!(decoder.decode(Variant::Positive, "??").unwrap(), 4095);
    }

    #[test]
    fn test_signed_folds_upper_half() {
        let decoder = Decoder::ascii_6bit();
        // 31 is the largest positive single-character value
        assert_eq!(decoder.decode(Variant::Signed, "_").unwrap(), 31);
        assert_eq!(decoder.decode(Variant::Signed, "`").unwrap(), -32);
        assert_eq!(decoder.decode(Variant::Signed, "?").unwrap(), -1);
        assert_eq!(decoder.decode(Variant::Signed, "??").unwrap(), -1);
        assert_eq!(decoder.decode(Variant::Signed, "`@").unwrap(), -2048);
        assert_eq!(decoder.decode(Variant::Signed, "@Ff").unwrap(), 422);
    }

    #[test]
    fn test_signed_odd_base_boundary() {
        // base 3, width 1: range 3, upper half is {2}
        let ternary = CharacterValueTable::from_alphabet("abc").unwrap();
        assert_eq!(decode_signed(&ternary, "a").unwrap(), 0);
        assert_eq!(decode_signed(&ternary, "b").unwrap(), 1);
        assert_eq!(decode_signed(&ternary, "c").unwrap(), -1);
    }

    #[test]
    fn test_invalid_character_reports_position() {
        let decoder = Decoder::ascii_6bit();
        let err = decoder.decode(Variant::Positive, "@F0").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidCharacter {
                character: '0',
                position: 2
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let decoder = Decoder::ascii_6bit();
        for variant in Variant::ALL {
            assert_eq!(decoder.decode(variant, ""), Err(DecodeError::EmptyInput));
        }
    }

    #[test]
    fn test_overflow_is_reported() {
        let decoder = Decoder::ascii_6bit();
        // 64^11 = 2^66 exceeds i64
        let wide = "?".repeat(11);
        assert_eq!(
            decoder.decode(Variant::Positive, &wide),
            Err(DecodeError::Overflow { width: 11 })
        );
        // 64^10 = 2^60 fits
        assert_eq!(
            decoder.decode(Variant::Positive, &"?".repeat(10)).unwrap(),
            (1i64 << 60) - 1
        );
        // Signed tolerates a range of exactly 2^64
        let signed = Decoder::new(TableSet::uniform(
            CharacterValueTable::from_alphabet("0123456789ABCDEF").unwrap(),
        ));
        assert_eq!(signed.decode(Variant::Signed, "8000000000000000").unwrap(), i64::MIN);
        assert_eq!(signed.decode(Variant::Signed, "7FFFFFFFFFFFFFFF").unwrap(), i64::MAX);
        assert_eq!(
            signed.decode(Variant::Signed, "10000000000000000"),
            Err(DecodeError::Overflow { width: 17 })
        );
    }

    #[test]
    fn test_wide_signed_window_with_small_value() {
        let decoder = Decoder::ascii_6bit();
        // 64^22 = 2^132 does not fit u128
        assert_eq!(decoder.decode(Variant::Signed, &"@".repeat(22)).unwrap(), 0);
        assert_eq!(decoder.decode(Variant::Signed, &"?".repeat(30)).unwrap(), -1);
        let mut text = "@".repeat(24);
        text.push('A');
        assert_eq!(decoder.decode(Variant::Signed, &text).unwrap(), 1);
        assert_eq!(
            decoder.decode(Variant::Signed, &format!("_{}", "?".repeat(21))),
            Err(DecodeError::Overflow { width: 22 })
        );
    }

    #[test]
    fn test_invalid_character_wins_over_overflow() {
        let decoder = Decoder::ascii_6bit();
        let mut text = "?".repeat(25);
        text.push('0');
        for variant in Variant::ALL {
            assert_eq!(
                decoder.decode(variant, &text),
                Err(DecodeError::InvalidCharacter {
                    character: '0',
                    position: 25
                })
            );
        }
    }

    #[test]
    fn test_each_variant_uses_its_own_table() {
        let mut tables = TableSet::uniform(CharacterValueTable::ascii_6bit());
        tables.b = CharacterValueTable::from_alphabet("0123456789").unwrap();
        let decoder = Decoder::new(tables);

        assert_eq!(decoder.decode(Variant::B, "42").unwrap(), 42);
        assert!(matches!(
            decoder.decode(Variant::Positive, "42"),
            Err(DecodeError::InvalidCharacter { character: '4', position: 0 })
        ));
    }
}
