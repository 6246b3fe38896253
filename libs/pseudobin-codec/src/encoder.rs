//! Paired encoder, the inverse of [`crate::decoder`]
//!
//! Produces the canonical window text for a value so that
//! `decode(encode(v, w)) == v` for every representable `v`.

use crate::decoder::value_range;
use crate::error::DecodeError;
use crate::table::CharacterValueTable;
use crate::variant::{TableSet, Variant};

/// Encode `value` as exactly `width` characters
///
/// In signed mode negative values are stored as `value + base^width`.
pub fn encode(
    table: &CharacterValueTable,
    value: i64,
    width: usize,
    signed: bool,
) -> Result<String, DecodeError> {
    if width == 0 {
        return Err(DecodeError::EmptyInput);
    }
    let out_of_range = || DecodeError::ValueOutOfRange { value, width };
    if value < 0 && !signed {
        return Err(out_of_range());
    }

    // Negative values are stored as base^width + value, which is the digit
    // complement of -1 - value
    let negative = value < 0;
    let magnitude = if negative { (!value) as u128 } else { value as u128 };

    // None means base^width exceeds u128 and every i64 fits
    let fits = value_range(table.base(), width).is_none_or(|range| match (signed, negative) {
        (false, _) => magnitude < range,
        (true, false) => magnitude * 2 < range,
        (true, true) => (magnitude + 1) * 2 <= range,
    });
    if !fits {
        return Err(out_of_range());
    }

    let base = table.base();
    let mut digits = vec![0u32; width];
    let mut rest = magnitude;
    for slot in digits.iter_mut().rev() {
        let digit = (rest % u128::from(base)) as u32;
        *slot = if negative { base - 1 - digit } else { digit };
        rest /= u128::from(base);
    }

    digits
        .into_iter()
        .map(|d| table.symbol(d).ok_or(DecodeError::UnmappedDigit(d)))
        .collect()
}

/// Encode with the table and sign handling of `variant`
pub fn encode_variant(
    tables: &TableSet,
    variant: Variant,
    value: i64,
    width: usize,
) -> Result<String, DecodeError> {
    encode(tables.get(variant), value, width, variant.is_signed())
}
