//! Character value tables
//!
//! A [`CharacterValueTable`] maps each character of a pseudo-binary alphabet
//! onto a digit value in `0..base`. Tables are configuration, not code: the
//! decoder only ever sees an injected table, so protocol tables can be swapped
//! without touching the accumulation rule.

use crate::error::TableError;
use std::collections::BTreeMap;

/// Largest accepted numeral base
///
/// One canonical-symbol slot is kept per digit, so the base bounds the table size.
pub const MAX_BASE: u32 = 1 << 16;

/// Character to digit mapping for one decode variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterValueTable {
    base: u32,
    values: BTreeMap<char, u32>,
    /// Canonical character per digit (first character registered for it)
    symbols: Vec<Option<char>>,
}

impl CharacterValueTable {
    /// Start building a table for the given base
    pub fn builder(base: u32) -> TableBuilder {
        TableBuilder {
            base,
            entries: Vec::new(),
        }
    }

    /// Table where the character at index `i` has digit value `i`
    ///
    /// The base is the number of characters in the alphabet.
    pub fn from_alphabet(alphabet: &str) -> Result<Self, TableError> {
        let base = alphabet.chars().count() as u32;
        Self::builder(base).alphabet(alphabet, 0).build()
    }

    /// Table from explicit `(character, digit)` pairs
    pub fn from_pairs(
        base: u32,
        pairs: impl IntoIterator<Item = (char, u32)>,
    ) -> Result<Self, TableError> {
        let mut builder = Self::builder(base);
        for (character, value) in pairs {
            builder = builder.pair(character, value);
        }
        builder.build()
    }

    /// The `ascii-6bit` profile: base 64, `'@'..='~'` map to `0..=62`, `'?'` maps to 63
    ///
    /// Every character carries the low six bits of its ASCII code, with `'?'`
    /// standing in for the unprintable `DEL` (0x7F).
    pub fn ascii_6bit() -> Self {
        let table = Self::builder(64)
            .range('@', '~', 0)
            .pair('?', 63)
            .build();
        match table {
            Ok(table) => table,
            // The ranges above are fixed and valid for base 64
            Err(e) => unreachable!("ascii-6bit table is malformed: {e}"),
        }
    }

    /// Numeral base of this table
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Digit value for a character, `None` when the character is not mapped
    #[inline]
    pub fn digit(&self, character: char) -> Option<u32> {
        self.values.get(&character).copied()
    }

    /// Canonical character for a digit value
    #[inline]
    pub fn symbol(&self, digit: u32) -> Option<char> {
        self.symbols.get(digit as usize).copied().flatten()
    }

    /// Number of mapped characters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Mapped characters with their digit values, in character order
    pub fn entries(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.values.iter().map(|(c, v)| (*c, *v))
    }

    /// Digit values that have no character mapped to them
    pub fn unmapped_digits(&self) -> Vec<u32> {
        self.symbols
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(d, _)| d as u32)
            .collect()
    }
}

/// Incremental table construction
///
/// Entries are validated together in [`TableBuilder::build`], so the first
/// problem found is reported regardless of the order entries were added.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    base: u32,
    entries: Vec<Entry>,
}

#[derive(Debug, Clone)]
enum Entry {
    Pair(char, u32),
    Range { first: char, last: char, value: u32 },
}

impl TableBuilder {
    /// Map a single character
    pub fn pair(mut self, character: char, value: u32) -> Self {
        self.entries.push(Entry::Pair(character, value));
        self
    }

    /// Map a contiguous character range onto consecutive digits starting at `value`
    pub fn range(mut self, first: char, last: char, value: u32) -> Self {
        self.entries.push(Entry::Range { first, last, value });
        self
    }

    /// Map each character of `alphabet` onto consecutive digits starting at `value`
    pub fn alphabet(mut self, alphabet: &str, value: u32) -> Self {
        for (offset, character) in alphabet.chars().enumerate() {
            self.entries
                .push(Entry::Pair(character, value.saturating_add(offset as u32)));
        }
        self
    }

    pub fn build(self) -> Result<CharacterValueTable, TableError> {
        if !(2..=MAX_BASE).contains(&self.base) {
            return Err(TableError::InvalidBase(self.base));
        }

        let mut values = BTreeMap::new();
        let mut symbols = vec![None; self.base as usize];

        for entry in self.entries {
            let pairs: Vec<(char, u32)> = match entry {
                Entry::Pair(c, v) => vec![(c, v)],
                Entry::Range { first, last, value } => {
                    if first > last {
                        return Err(TableError::InvalidRange { first, last });
                    }
                    (first..=last)
                        .enumerate()
                        .map(|(i, c)| (c, value.saturating_add(i as u32)))
                        .collect()
                },
            };

            for (character, value) in pairs {
                if value >= self.base {
                    return Err(TableError::DigitOutOfRange {
                        character,
                        value,
                        base: self.base,
                    });
                }
                if values.insert(character, value).is_some() {
                    return Err(TableError::DuplicateCharacter(character));
                }
                let slot = &mut symbols[value as usize];
                if slot.is_none() {
                    *slot = Some(character);
                }
            }
        }

        if values.is_empty() {
            return Err(TableError::EmptyTable);
        }

        Ok(CharacterValueTable {
            base: self.base,
            values,
            symbols,
        })
    }
}
