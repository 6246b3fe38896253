//! Serde default value functions shared by the configuration structs

use pseudobin_codec::Variant;

/// Default scale factor: 1.0
///
/// Used for `divider` and `multiplier` (no transformation).
pub fn scale_one() -> f64 {
    1.0
}

/// Default fractional digits: 2
pub fn digits_two() -> i32 {
    2
}

pub fn default_message() -> String {
    "`BST@Ff@Ffj".to_string()
}

pub fn default_start() -> usize {
    4
}

pub fn default_width() -> usize {
    3
}

pub fn default_divider() -> f64 {
    100.0
}

pub fn default_variant() -> Variant {
    Variant::Positive
}
