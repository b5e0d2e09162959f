//! Configuration management

use anyhow::{Context, Result};
use forge_codegen::CodeStyle;
use forge_remote::{
    ChatEditClient, Judge0Client, PollPolicy, ResourceLimits, DEFAULT_EDIT_ENDPOINT,
    DEFAULT_EDIT_MODEL, DEFAULT_EXEC_ENDPOINT,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgeConfig {
    /// Default generation style, overridable per invocation
    #[serde(default)]
    pub style: CodeStyle,

    /// Edit service configuration
    #[serde(default)]
    pub edit: EditConfig,

    /// Execution service configuration
    #[serde(default)]
    pub exec: ExecConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditConfig {
    #[serde(default = "default_edit_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_edit_model")]
    pub model: String,

    /// Overridden by the OPENAI_API_KEY environment variable
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecConfig {
    #[serde(default = "default_exec_endpoint")]
    pub endpoint: String,

    /// Overridden by the RAPIDAPI_KEY environment variable
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_cpu_time_limit")]
    pub cpu_time_limit_secs: f64,

    #[serde(default = "default_memory_limit")]
    pub memory_limit_kib: u64,

    #[serde(default = "default_poll_max_attempts")]
    pub poll_max_attempts: u32,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            style: CodeStyle::default(),
            edit: EditConfig::default(),
            exec: ExecConfig::default(),
        }
    }
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            endpoint: default_edit_endpoint(),
            model: default_edit_model(),
            api_key: None,
        }
    }
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            endpoint: default_exec_endpoint(),
            api_key: None,
            cpu_time_limit_secs: default_cpu_time_limit(),
            memory_limit_kib: default_memory_limit(),
            poll_max_attempts: default_poll_max_attempts(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl ForgeConfig {
    /// Load configuration from file, falling back to defaults when the
    /// file is absent, then apply environment credential overrides.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::load_file(config_path)?;

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                config.edit.api_key = Some(key);
            }
        }
        if let Ok(key) = std::env::var("RAPIDAPI_KEY") {
            if !key.is_empty() {
                config.exec.api_key = Some(key);
            }
        }

        Ok(config)
    }

    fn load_file(config_path: Option<&Path>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path.to_owned(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: ForgeConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        Ok(config)
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self, config_path: Option<&Path>) -> Result<()> {
        let config_path = match config_path {
            Some(path) => path.to_owned(),
            None => Self::default_config_path()?,
        };

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    fn default_config_path() -> Result<std::path::PathBuf> {
        let config_dir = dirs::config_dir().context("Cannot determine config directory")?;
        Ok(config_dir.join("cxxforge").join("config.toml"))
    }

    /// Build the live edit client from this configuration.
    pub fn edit_client(&self) -> Result<ChatEditClient> {
        let api_key = self.edit.api_key.as_deref().context(
            "edit service API key not configured: set OPENAI_API_KEY or [edit] api_key",
        )?;
        let client = ChatEditClient::new(&self.edit.endpoint, &self.edit.model, api_key)?;
        Ok(client)
    }

    /// Build the live execution client from this configuration.
    pub fn exec_client(&self) -> Result<Judge0Client> {
        let api_key = self.exec.api_key.as_deref().context(
            "execution service API key not configured: set RAPIDAPI_KEY or [exec] api_key",
        )?;
        let client = Judge0Client::new(&self.exec.endpoint, api_key)?
            .with_limits(ResourceLimits {
                cpu_time_limit_secs: self.exec.cpu_time_limit_secs,
                memory_limit_kib: self.exec.memory_limit_kib,
            })
            .with_policy(PollPolicy {
                max_attempts: self.exec.poll_max_attempts,
                interval: Duration::from_millis(self.exec.poll_interval_ms),
                ..PollPolicy::default()
            });
        Ok(client)
    }
}

// Default value functions
fn default_edit_endpoint() -> String {
    DEFAULT_EDIT_ENDPOINT.to_string()
}

fn default_edit_model() -> String {
    DEFAULT_EDIT_MODEL.to_string()
}

fn default_exec_endpoint() -> String {
    DEFAULT_EXEC_ENDPOINT.to_string()
}

fn default_cpu_time_limit() -> f64 {
    2.0
}

fn default_memory_limit() -> u64 {
    128_000
}

fn default_poll_max_attempts() -> u32 {
    10
}

fn default_poll_interval_ms() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ForgeConfig::default();
        assert_eq!(config.edit.endpoint, DEFAULT_EDIT_ENDPOINT);
        assert_eq!(config.exec.endpoint, DEFAULT_EXEC_ENDPOINT);
        assert_eq!(config.exec.cpu_time_limit_secs, 2.0);
        assert_eq!(config.exec.memory_limit_kib, 128_000);
        assert_eq!(config.exec.poll_max_attempts, 10);
        assert_eq!(config.exec.poll_interval_ms, 1000);
        assert!(config.edit.api_key.is_none());
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = ForgeConfig::default();
        config.save(Some(&config_path)).unwrap();

        let loaded = ForgeConfig::load_file(Some(&config_path)).unwrap();
        assert_eq!(config.edit.endpoint, loaded.edit.endpoint);
        assert_eq!(config.exec.poll_max_attempts, loaded.exec.poll_max_attempts);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[style]\nnaming = \"snake_case\"\n\n[exec]\npoll_max_attempts = 3\n",
        )
        .unwrap();

        let config = ForgeConfig::load_file(Some(&config_path)).unwrap();
        assert_eq!(
            config.style.naming,
            forge_codegen::NamingConvention::SnakeCase
        );
        assert_eq!(config.exec.poll_max_attempts, 3);
        // Untouched fields keep their defaults.
        assert_eq!(config.exec.poll_interval_ms, 1000);
        assert_eq!(config.edit.model, DEFAULT_EDIT_MODEL);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config =
            ForgeConfig::load_file(Some(&temp_dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config.exec.poll_max_attempts, 10);
    }

    #[test]
    fn test_missing_credentials_block_client_construction() {
        let config = ForgeConfig::default();
        assert!(config.edit_client().is_err());
        assert!(config.exec_client().is_err());
    }
}
