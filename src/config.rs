use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{NextVersionError, Result};

/// File name searched for in the working directory.
pub const CONFIG_FILE_NAME: &str = "nextversion.toml";

/// Represents the complete configuration for git-next-version.
///
/// Every section is optional; the defaults match a plain CI step that writes
/// `version` and `NEW_VERSION`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub outputs: OutputsConfig,

    #[serde(default)]
    pub probe: ProbeConfig,
}

fn default_output_name() -> String {
    "version".to_string()
}

fn default_env_name() -> String {
    "NEW_VERSION".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Names under which the computed version is published.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputsConfig {
    /// Key written to the step output file
    #[serde(default = "default_output_name")]
    pub output_name: String,

    /// Variable written to the job environment file
    #[serde(default = "default_env_name")]
    pub env_name: String,
}

impl Default for OutputsConfig {
    fn default() -> Self {
        OutputsConfig {
            output_name: default_output_name(),
            env_name: default_env_name(),
        }
    }
}

/// Tag probing behaviour.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProbeConfig {
    /// Remote used when tags are fetched before probing
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Give up after this many taken candidates; unbounded when absent
    #[serde(default)]
    pub max_attempts: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            remote: default_remote(),
            max_attempts: None,
        }
    }
}

impl Config {
    /// Rejects values that would make the run meaningless.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("outputs.output_name", &self.outputs.output_name),
            ("outputs.env_name", &self.outputs.env_name),
        ] {
            if value.trim().is_empty() || value.contains('=') || value.contains('\n') {
                return Err(NextVersionError::config(format!(
                    "{} must be a non-empty name without '=' or newlines, got '{}'",
                    field, value
                )));
            }
        }

        if self.probe.remote.trim().is_empty() {
            return Err(NextVersionError::config("probe.remote must not be empty"));
        }

        if self.probe.max_attempts == Some(0) {
            return Err(NextVersionError::config(
                "probe.max_attempts must be at least 1",
            ));
        }

        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nextversion.toml` in current directory
/// 3. `.nextversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration, validated
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            NextVersionError::config(format!("Cannot read config file '{}': {}", path, e))
        })?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    config.validate()?;
    Ok(config)
}
