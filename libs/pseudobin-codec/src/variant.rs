//! Decode variants and their table set

use crate::table::CharacterValueTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pseudo-binary decode variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Unsigned accumulation
    #[serde(alias = "pb_positive", alias = "non-negative")]
    Positive,
    /// Unsigned accumulation folded into a symmetric signed range
    #[serde(alias = "pb_signed")]
    Signed,
    /// Unsigned accumulation over the "B" table
    #[serde(alias = "pb_b", alias = "variant_b")]
    B,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Positive, Variant::Signed, Variant::B];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Positive => "positive",
            Variant::Signed => "signed",
            Variant::B => "b",
        }
    }

    /// Human readable label, as shown in message format pickers
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Positive => "Non-negative",
            Variant::Signed => "Signed",
            Variant::B => "Pseudo-binary B",
        }
    }

    #[inline]
    pub fn is_signed(&self) -> bool {
        matches!(self, Variant::Signed)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "pb_positive" | "non-negative" => Ok(Variant::Positive),
            "signed" | "pb_signed" => Ok(Variant::Signed),
            "b" | "pb_b" | "variant_b" => Ok(Variant::B),
            other => Err(format!(
                "Unknown variant '{}', expected one of: positive, signed, b",
                other
            )),
        }
    }
}

/// One character table per variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSet {
    pub positive: CharacterValueTable,
    pub signed: CharacterValueTable,
    pub b: CharacterValueTable,
}

impl TableSet {
    /// Use the same table for every variant
    pub fn uniform(table: CharacterValueTable) -> Self {
        Self {
            positive: table.clone(),
            signed: table.clone(),
            b: table,
        }
    }

    #[inline]
    pub fn get(&self, variant: Variant) -> &CharacterValueTable {
        match variant {
            Variant::Positive => &self.positive,
            Variant::Signed => &self.signed,
            Variant::B => &self.b,
        }
    }
}
