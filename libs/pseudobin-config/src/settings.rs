//! Top-level configuration and parameter resolution

use crate::error::{ConfigError, Result};
use crate::presets::{builtin_presets, Preset};
use crate::serde_defaults::{
    default_divider, default_message, default_start, default_variant, default_width, digits_two,
    scale_one,
};
use crate::tables::TableSetConfig;
use pseudobin_codec::{DecodeError, Decoder, ScaleParameters, Variant, Window};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Form values used when nothing more specific is given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_message")]
    pub message: String,
    #[serde(default = "default_start")]
    pub start: usize,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_divider")]
    pub divider: f64,
    #[serde(default = "scale_one")]
    pub multiplier: f64,
    #[serde(default)]
    pub adder: f64,
    #[serde(default = "digits_two")]
    pub digits: i32,
    #[serde(default = "default_variant")]
    pub variant: Variant,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            message: default_message(),
            start: default_start(),
            width: default_width(),
            divider: default_divider(),
            multiplier: scale_one(),
            adder: 0.0,
            digits: digits_two(),
            variant: default_variant(),
        }
    }
}

impl DefaultsConfig {
    pub fn scale(&self) -> ScaleParameters {
        ScaleParameters::new(self.divider, self.multiplier, self.adder, self.digits)
    }
}

/// Complete pseudobin configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PseudobinConfig {
    #[serde(default)]
    pub tables: TableSetConfig,
    #[serde(default = "builtin_presets")]
    pub presets: BTreeMap<String, Preset>,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Default for PseudobinConfig {
    fn default() -> Self {
        Self {
            tables: TableSetConfig::default(),
            presets: builtin_presets(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl PseudobinConfig {
    /// Decoder over the configured tables
    pub fn decoder(&self) -> Result<Decoder> {
        Ok(Decoder::new(self.tables.build()?))
    }

    pub fn preset(&self, name: &str) -> Result<&Preset> {
        self.presets
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPreset {
                name: name.to_string(),
                available: self.preset_names().join(", "),
            })
    }

    pub fn preset_names(&self) -> Vec<&str> {
        self.presets.keys().map(String::as_str).collect()
    }

    /// Merge explicit overrides, an optional preset and the defaults
    ///
    /// Each value comes from the overrides first, then the preset, then
    /// the configured defaults.
    pub fn resolve(&self, overrides: &Overrides) -> Result<ResolvedParameters> {
        let preset = overrides
            .preset
            .as_deref()
            .map(|name| self.preset(name))
            .transpose()?;
        let defaults = &self.defaults;

        let offset = match (overrides.start, preset) {
            (Some(start), _) => absolute_offset(start)?,
            (None, Some(preset)) => preset.start_offset,
            (None, None) => absolute_offset(defaults.start)?,
        };
        let width = overrides
            .width
            .or(preset.map(|p| p.width))
            .unwrap_or(defaults.width);
        let variant = overrides
            .variant
            .or(preset.and_then(|p| p.variant))
            .unwrap_or(defaults.variant);

        let base = preset.map_or_else(|| defaults.scale(), |p| p.scale(defaults.digits));
        let scale = ScaleParameters::new(
            overrides.divider.unwrap_or(base.divider),
            overrides.multiplier.unwrap_or(base.multiplier),
            overrides.adder.unwrap_or(base.adder),
            overrides.digits.unwrap_or(base.digits),
        );

        Ok(ResolvedParameters {
            offset,
            width,
            variant,
            scale,
        })
    }
}

fn absolute_offset(start: usize) -> Result<i64> {
    i64::try_from(start)
        .map_err(|_| ConfigError::invalid(format!("start {} is out of range", start)))
}

/// Values given explicitly for one reading
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub preset: Option<String>,
    pub start: Option<usize>,
    pub width: Option<usize>,
    pub variant: Option<Variant>,
    pub divider: Option<f64>,
    pub multiplier: Option<f64>,
    pub adder: Option<f64>,
    pub digits: Option<i32>,
}

/// Fully resolved parameters for one reading
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParameters {
    /// Window start; negative values count back from the end of the message
    pub offset: i64,
    pub width: usize,
    pub variant: Variant,
    pub scale: ScaleParameters,
}

impl ResolvedParameters {
    pub fn window(&self, message_len: usize) -> std::result::Result<Window, DecodeError> {
        Window::from_offset(message_len, self.offset, self.width)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::presets::SUTRON_VOLTAGE;

    #[test]
    fn test_defaults_resolve_to_reference_form() {
        let config = PseudobinConfig::default();
        let resolved = config.resolve(&Overrides::default()).unwrap();

        assert_eq!(resolved.offset, 4);
        assert_eq!(resolved.width, 3);
        assert_eq!(resolved.variant, Variant::Positive);
        assert_eq!(resolved.scale, ScaleParameters::new(100.0, 1.0, 0.0, 2));

        let message = &config.defaults.message;
        let window = resolved.window(message.chars().count()).unwrap();
        assert_eq!(window.extract(message).unwrap(), "@Ff");
    }

    #[test]
    fn test_preset_then_overrides() {
        let config = PseudobinConfig::default();
        let resolved = config
            .resolve(&Overrides {
                preset: Some(SUTRON_VOLTAGE.to_string()),
                adder: Some(0.0),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(resolved.offset, -1);
        assert_eq!(resolved.width, 1);
        assert_eq!(resolved.scale.divider, 1.0);
        assert_eq!(resolved.scale.multiplier, 0.234);
        assert_eq!(resolved.scale.adder, 0.0);
        assert_eq!(resolved.scale.digits, 2);
    }

    #[test]
    fn test_explicit_start_replaces_preset_offset() {
        let config = PseudobinConfig::default();
        let resolved = config
            .resolve(&Overrides {
                preset: Some(SUTRON_VOLTAGE.to_string()),
                start: Some(0),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(resolved.offset, 0);
        assert_eq!(resolved.width, 1);
    }

    #[test]
    fn test_oversized_start_rejected() {
        let config = PseudobinConfig::default();
        let err = config
            .resolve(&Overrides {
                start: Some(usize::MAX),
                width: Some(1),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("out of range"));

        let mut config = PseudobinConfig::default();
        config.defaults.start = usize::MAX;
        assert!(matches!(
            config.resolve(&Overrides::default()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_preset_pins_variant() {
        let mut config = PseudobinConfig::default();
        config.presets.insert(
            "temp".to_string(),
            Preset {
                start_offset: 0,
                width: 2,
                divider: 10.0,
                multiplier: 1.0,
                adder: 0.0,
                variant: Some(Variant::Signed),
                digits: Some(1),
                description: None,
            },
        );

        let resolved = config
            .resolve(&Overrides {
                preset: Some("temp".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(resolved.variant, Variant::Signed);
        assert_eq!(resolved.scale.digits, 1);
    }

    #[test]
    fn test_unknown_preset_lists_available() {
        let config = PseudobinConfig::default();
        let err = config
            .resolve(&Overrides {
                preset: Some("nope".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown preset 'nope' (available: da_voltage, sutron_voltage)"
        );
    }
}
