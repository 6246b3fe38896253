//! Linear scale transform
//!
//! `processed = round(decoded * multiplier / divider + adder, digits)`

use crate::error::TransformError;
use crate::numfmt::format_fixed;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest number of fractional digits accepted
pub const MAX_DIGITS: i32 = 100;

/// Caller supplied scaling for one reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleParameters {
    pub divider: f64,
    pub multiplier: f64,
    pub adder: f64,
    pub digits: i32,
}

impl Default for ScaleParameters {
    fn default() -> Self {
        Self {
            divider: 1.0,
            multiplier: 1.0,
            adder: 0.0,
            digits: 2,
        }
    }
}

impl ScaleParameters {
    pub fn new(divider: f64, multiplier: f64, adder: f64, digits: i32) -> Self {
        Self {
            divider,
            multiplier,
            adder,
            digits,
        }
    }

    /// Check the parameters without transforming anything
    ///
    /// Checks run in a fixed order: divider, digits, then finiteness.
    pub fn validate(&self) -> Result<u32, TransformError> {
        if self.divider == 0.0 {
            return Err(TransformError::DivisionByZero);
        }
        if !(0..=MAX_DIGITS).contains(&self.digits) {
            return Err(TransformError::InvalidDigits(self.digits));
        }
        for (name, value) in [
            ("divider", self.divider),
            ("multiplier", self.multiplier),
            ("adder", self.adder),
        ] {
            if !value.is_finite() {
                return Err(TransformError::invalid_numeric(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(self.digits as u32)
    }
}

/// A scaled reading, rounded to a fixed number of fractional digits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedValue {
    /// Fixed-point text with exactly `digits` fractional places
    pub text: String,
    /// Numeric value of `text`
    pub value: f64,
    pub digits: u32,
}

impl fmt::Display for ProcessedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Scale a decoded value and round it for display
pub fn transform(decoded: i64, params: &ScaleParameters) -> Result<ProcessedValue, TransformError> {
    let digits = params.validate()?;

    let raw = decoded as f64 * params.multiplier / params.divider + params.adder;
    if !raw.is_finite() {
        return Err(TransformError::invalid_numeric(format!(
            "{} * {} / {} + {} is not finite",
            decoded, params.multiplier, params.divider, params.adder
        )));
    }

    let text = format_fixed(raw, digits);
    let value = text
        .parse::<f64>()
        .map_err(|e| TransformError::invalid_numeric(format!("'{}': {}", text, e)))?;

    Ok(ProcessedValue {
        text,
        value,
        digits,
    })
}
