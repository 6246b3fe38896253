//! Configuration loading
//!
//! Priority (highest to lowest):
//! 1. Environment variables (`PSEUDOBIN_`, nested keys split on `__`)
//! 2. Config file (`.yaml`/`.yml`, `.toml` or `.json`)
//! 3. Built-in defaults

use crate::error::{ConfigError, Result};
use crate::settings::PseudobinConfig;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default environment variable prefix
pub const ENV_PREFIX: &str = "PSEUDOBIN_";

/// Builder for a layered configuration
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            file: None,
            env_prefix: ENV_PREFIX.to_string(),
        }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Assemble the provider stack without extracting it
    pub fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(PseudobinConfig::default()));
        debug!("Config source: built-in defaults");

        if let Some(path) = &self.file {
            if !path.is_file() {
                return Err(ConfigError::load(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            let extension = path
                .extension()
                .and_then(|s| s.to_str())
                .ok_or_else(|| ConfigError::load("Config file must have an extension"))?;

            figment = match extension {
                "toml" => figment.merge(Toml::file(path)),
                "yaml" | "yml" => figment.merge(Yaml::file(path)),
                "json" => figment.merge(Json::file(path)),
                _ => {
                    return Err(ConfigError::load(format!(
                        "Unsupported config file format: {}",
                        extension
                    )))
                }
            };
            debug!("Config source: {}", path.display());
        }

        debug!("Config source: environment ({}*)", self.env_prefix);
        Ok(figment.merge(Env::prefixed(&self.env_prefix).split("__")))
    }

    pub fn load(&self) -> Result<PseudobinConfig> {
        let config: PseudobinConfig = self.figment()?.extract()?;
        debug!(
            presets = config.presets.len(),
            variant = %config.defaults.variant,
            "Configuration loaded"
        );
        Ok(config)
    }
}

/// Load configuration from defaults, an optional file and the environment
pub fn load_config(file: Option<&Path>) -> Result<PseudobinConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = file {
        loader = loader.with_file(path);
    }
    loader.load()
}
