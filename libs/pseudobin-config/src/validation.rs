//! Configuration validation
//!
//! Errors make a configuration unusable; warnings flag settings that are
//! legal but probably wrong.

use crate::settings::PseudobinConfig;
use pseudobin_codec::{ScaleParameters, Variant};
use serde::{Deserialize, Serialize};

/// Widths above this likely overflow a 64-bit result for base 64 tables
pub const WIDE_WINDOW_WARNING: usize = 10;

/// Validation result with detailed information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub level: ValidationLevel,
}

impl ValidationResult {
    pub fn new(level: ValidationLevel) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            level,
        }
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
        self.is_valid = false;
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        if !other.is_valid {
            self.is_valid = false;
        }
    }
}

/// Validation stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationLevel {
    /// Structures build (character tables)
    Schema,
    /// Values make sense (widths, scaling)
    Business,
}

/// Staged configuration validation
pub trait ConfigValidator {
    fn validate_schema(&self) -> ValidationResult {
        ValidationResult::new(ValidationLevel::Schema)
    }

    fn validate_business(&self) -> ValidationResult;

    /// Run every stage up to `up_to_level`
    fn validate(&self, up_to_level: ValidationLevel) -> ValidationResult {
        let mut combined = ValidationResult::new(up_to_level);
        combined.merge(self.validate_schema());
        if up_to_level as u8 >= ValidationLevel::Business as u8 {
            combined.merge(self.validate_business());
        }
        combined
    }
}

fn check_scale(result: &mut ValidationResult, context: &str, params: &ScaleParameters) {
    if let Err(e) = params.validate() {
        result.add_error(format!("{}: {}", context, e));
    }
}

fn check_width(result: &mut ValidationResult, context: &str, width: usize) {
    if width == 0 {
        result.add_error(format!("{}: width must be at least 1", context));
    } else if width > WIDE_WINDOW_WARNING {
        result.add_warning(format!(
            "{}: width {} may overflow a 64-bit result",
            context, width
        ));
    }
}

impl ConfigValidator for PseudobinConfig {
    fn validate_schema(&self) -> ValidationResult {
        let mut result = ValidationResult::new(ValidationLevel::Schema);
        for variant in Variant::ALL {
            match self.tables.table(variant) {
                Ok(table) => {
                    let unmapped = table.unmapped_digits();
                    if !unmapped.is_empty() {
                        result.add_warning(format!(
                            "{} table: digits {:?} have no character and cannot be encoded",
                            variant, unmapped
                        ));
                    }
                },
                Err(e) => result.add_error(e.to_string()),
            }
        }
        result
    }

    fn validate_business(&self) -> ValidationResult {
        let mut result = ValidationResult::new(ValidationLevel::Business);

        check_width(&mut result, "defaults", self.defaults.width);
        check_scale(&mut result, "defaults", &self.defaults.scale());

        for (name, preset) in &self.presets {
            let context = format!("preset '{}'", name);
            check_width(&mut result, &context, preset.width);
            check_scale(&mut result, &context, &preset.scale(self.defaults.digits));
        }

        result
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::presets::SUTRON_VOLTAGE;
    use crate::tables::TableSpec;

    #[test]
    fn test_default_config_is_valid() {
        let result = PseudobinConfig::default().validate(ValidationLevel::Business);
        assert!(result.is_valid, "{:?}", result.errors);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn test_broken_table_is_schema_error() {
        let mut config = PseudobinConfig::default();
        config.tables.b = Some(TableSpec {
            base: Some(1),
            alphabet: Some("A".to_string()),
            ..Default::default()
        });

        let result = config.validate(ValidationLevel::Schema);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("Invalid b table"));
    }

    #[test]
    fn test_oversized_base_is_schema_error() {
        let mut config = PseudobinConfig::default();
        config.tables.positive = Some(TableSpec {
            base: Some(u32::MAX),
            alphabet: Some("AB".to_string()),
            ..Default::default()
        });

        let result = config.validate_schema();
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("expected 2..=65536"));
    }

    #[test]
    fn test_preset_errors_and_warnings() {
        let mut config = PseudobinConfig::default();
        if let Some(preset) = config.presets.get_mut(SUTRON_VOLTAGE) {
            preset.divider = 0.0;
            preset.width = 12;
        }
        config.defaults.digits = 101;

        let result = config.validate(ValidationLevel::Business);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e == "preset 'sutron_voltage': Divider cannot be zero"));
        assert!(result
            .errors
            .iter()
            .any(|e| e.starts_with("defaults: Invalid digits 101")));
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("width 12"));
    }

    #[test]
    fn test_zero_width_rejected() {
        let mut config = PseudobinConfig::default();
        config.defaults.width = 0;
        let result = config.validate_business();
        assert_eq!(result.errors, vec!["defaults: width must be at least 1"]);
    }

    #[test]
    fn test_sparse_table_warns() {
        let mut config = PseudobinConfig::default();
        config.tables.positive = Some(TableSpec {
            base: Some(4),
            alphabet: Some("AB".to_string()),
            ..Default::default()
        });
        let result = config.validate_schema();
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("[2, 3]"));
    }
}
