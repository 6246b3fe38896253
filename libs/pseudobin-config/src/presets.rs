//! Device presets
//!
//! A preset bundles the window position and scaling for one kind of
//! measurement, e.g. the battery voltage character appended by a logger.

use crate::serde_defaults::scale_one;
use pseudobin_codec::{DecodeError, ScaleParameters, Variant, Window};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SUTRON_VOLTAGE: &str = "sutron_voltage";
pub const DA_VOLTAGE: &str = "da_voltage";

/// Named window and scale parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Window start; negative values count back from the end of the message
    pub start_offset: i64,
    pub width: usize,

    #[serde(default = "scale_one")]
    pub divider: f64,
    #[serde(default = "scale_one")]
    pub multiplier: f64,
    #[serde(default)]
    pub adder: f64,

    /// Variant pinned by the preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    /// Fractional digits pinned by the preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digits: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Preset {
    /// Resolve the preset's window against a message
    pub fn window(&self, message_len: usize) -> Result<Window, DecodeError> {
        Window::from_offset(message_len, self.start_offset, self.width)
    }

    /// Scale parameters, using `digits` unless the preset pins its own
    pub fn scale(&self, digits: i32) -> ScaleParameters {
        ScaleParameters::new(
            self.divider,
            self.multiplier,
            self.adder,
            self.digits.unwrap_or(digits),
        )
    }
}

/// Presets available without any configuration
pub fn builtin_presets() -> BTreeMap<String, Preset> {
    BTreeMap::from([
        (
            SUTRON_VOLTAGE.to_string(),
            Preset {
                start_offset: -1,
                width: 1,
                divider: 1.0,
                multiplier: 0.234,
                adder: 10.6,
                variant: None,
                digits: None,
                description: Some("Sutron battery voltage (last character)".to_string()),
            },
        ),
        (
            DA_VOLTAGE.to_string(),
            Preset {
                start_offset: -1,
                width: 1,
                divider: 1.0,
                multiplier: 0.3124,
                adder: 0.311,
                variant: None,
                digits: None,
                description: Some("Design Analysis battery voltage (last character)".to_string()),
            },
        ),
    ])
}
