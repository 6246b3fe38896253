//! Character table configuration
//!
//! Each variant's table is declared as a base plus any mix of an alphabet,
//! character ranges and single pairs. A variant without a declaration uses
//! the `ascii-6bit` profile.

use crate::error::{ConfigError, Result};
use pseudobin_codec::{CharacterValueTable, TableError, TableSet, Variant};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Contiguous characters mapped onto consecutive digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub first: char,
    pub last: char,
    /// Digit of `first`
    pub value: u32,
}

/// Declaration of one character table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Radix; defaults to the alphabet length when only an alphabet is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<u32>,

    /// Characters mapped to `0, 1, 2, ...` in order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<RangeSpec>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub pairs: BTreeMap<char, u32>,
}

impl TableSpec {
    /// Declaration equivalent to [`CharacterValueTable::ascii_6bit`]
    pub fn ascii_6bit() -> Self {
        Self {
            base: Some(64),
            alphabet: None,
            ranges: vec![
                RangeSpec {
                    first: '@',
                    last: '~',
                    value: 0,
                },
                RangeSpec {
                    first: '?',
                    last: '?',
                    value: 63,
                },
            ],
            pairs: BTreeMap::new(),
        }
    }

    pub fn build(&self) -> std::result::Result<CharacterValueTable, TableError> {
        let base = match (self.base, &self.alphabet) {
            (Some(base), _) => base,
            (None, Some(alphabet)) => alphabet.chars().count() as u32,
            (None, None) => return Err(TableError::InvalidBase(0)),
        };

        let mut builder = CharacterValueTable::builder(base);
        if let Some(alphabet) = &self.alphabet {
            builder = builder.alphabet(alphabet, 0);
        }
        for range in &self.ranges {
            builder = builder.range(range.first, range.last, range.value);
        }
        for (&character, &value) in &self.pairs {
            builder = builder.pair(character, value);
        }
        builder.build()
    }
}

/// Table declarations per variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSetConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive: Option<TableSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed: Option<TableSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<TableSpec>,
}

impl TableSetConfig {
    pub fn spec(&self, variant: Variant) -> Option<&TableSpec> {
        match variant {
            Variant::Positive => self.positive.as_ref(),
            Variant::Signed => self.signed.as_ref(),
            Variant::B => self.b.as_ref(),
        }
    }

    /// Build the table for one variant
    pub fn table(&self, variant: Variant) -> Result<CharacterValueTable> {
        match self.spec(variant) {
            Some(spec) => spec
                .build()
                .map_err(|source| ConfigError::Table { variant, source }),
            None => Ok(CharacterValueTable::ascii_6bit()),
        }
    }

    /// Build every variant's table
    pub fn build(&self) -> Result<TableSet> {
        Ok(TableSet {
            positive: self.table(Variant::Positive)?,
            signed: self.table(Variant::Signed)?,
            b: self.table(Variant::B)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_ascii_6bit_spec_matches_builtin() {
        assert_eq!(
            TableSpec::ascii_6bit().build().unwrap(),
            CharacterValueTable::ascii_6bit()
        );
    }

    #[test]
    fn test_alphabet_infers_base() {
        let spec = TableSpec {
            alphabet: Some("0123456789ABCDEF".to_string()),
            ..Default::default()
        };
        let table = spec.build().unwrap();
        assert_eq!(table.base(), 16);
        assert_eq!(table.digit('F'), Some(15));
    }

    #[test]
    fn test_pairs_and_ranges_combine() {
        let spec = TableSpec {
            base: Some(4),
            ranges: vec![RangeSpec {
                first: 'a',
                last: 'c',
                value: 0,
            }],
            pairs: BTreeMap::from([('z', 3)]),
            ..Default::default()
        };
        let table = spec.build().unwrap();
        assert_eq!(table.digit('b'), Some(1));
        assert_eq!(table.digit('z'), Some(3));
    }

    #[test]
    fn test_missing_base_and_alphabet() {
        assert_eq!(
            TableSpec::default().build(),
            Err(TableError::InvalidBase(0))
        );
    }

    #[test]
    fn test_oversized_base_rejected() {
        let spec = TableSpec {
            base: Some(u32::MAX),
            pairs: BTreeMap::from([('a', 0)]),
            ..Default::default()
        };
        assert_eq!(spec.build(), Err(TableError::InvalidBase(u32::MAX)));
    }

    #[test]
    fn test_undeclared_variants_use_ascii_6bit() {
        let config = TableSetConfig {
            b: Some(TableSpec {
                alphabet: Some("AB".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let tables = config.build().unwrap();
        assert_eq!(tables.positive, CharacterValueTable::ascii_6bit());
        assert_eq!(tables.signed, CharacterValueTable::ascii_6bit());
        assert_eq!(tables.b.base(), 2);
    }

    #[test]
    fn test_table_error_names_variant() {
        let config = TableSetConfig {
            signed: Some(TableSpec {
                base: Some(2),
                alphabet: Some("ABC".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = config.build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Table {
                variant: Variant::Signed,
                source: TableError::DigitOutOfRange { .. }
            }
        ));
        assert!(err.to_string().starts_with("Invalid signed table"));
    }
}
