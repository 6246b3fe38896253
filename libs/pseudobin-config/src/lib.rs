//! pseudobin-config - Configuration for pseudobin tools
//!
//! Loads character tables, device presets and form defaults with `figment`,
//! and validates them before any decoding happens.
//!
//! ```yaml
//! tables:
//!   b: { alphabet: "0123456789ABCDEF" }
//! presets:
//!   sutron_voltage: { start_offset: -1, width: 1, multiplier: 0.234, adder: 10.6 }
//! defaults:
//!   divider: 100
//!   digits: 2
//! ```

pub mod error;
pub mod loader;
pub mod presets;
pub mod serde_defaults;
pub mod settings;
pub mod tables;
pub mod validation;

pub use error::{ConfigError, Result};
pub use loader::{load_config, ConfigLoader, ENV_PREFIX};
pub use presets::{builtin_presets, Preset, DA_VOLTAGE, SUTRON_VOLTAGE};
pub use settings::{DefaultsConfig, Overrides, PseudobinConfig, ResolvedParameters};
pub use tables::{RangeSpec, TableSetConfig, TableSpec};
pub use validation::{ConfigValidator, ValidationLevel, ValidationResult, WIDE_WINDOW_WARNING};
