//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{ApiEnvironment, ClientConfig, REQUEST_TIMEOUT_SECS};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Selects the base URL when `base_url` is unset
    #[serde(default)]
    pub environment: ApiEnvironment,

    /// Explicit base URL, overriding the environment's
    pub base_url: Option<String>,

    /// Origin a relative base URL (such as the production `/api`) is
    /// resolved against
    pub origin: Option<String>,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    REQUEST_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: ApiEnvironment::default(),
            base_url: None,
            origin: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl ApiConfig {
    /// Absolute base URL for the native client
    pub fn resolved_base_url(&self) -> Result<String, ConfigError> {
        let base = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url());

        if base.starts_with("http://") || base.starts_with("https://") {
            return Ok(base.trim_end_matches('/').to_string());
        }

        match &self.origin {
            Some(origin) => Ok(format!(
                "{}/{}",
                origin.trim_end_matches('/'),
                base.trim_matches('/')
            )),
            None => Err(ConfigError::RelativeBaseUrl(base.to_string())),
        }
    }

    /// Settings for [`crate::RelaMindClient`]
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(ClientConfig {
            base_url: self.resolved_base_url()?,
            request_timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("relamind").join("config.toml")),
            Some(PathBuf::from("./relamind.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(env) = var("RELAMIND_ENV") {
            match env.parse() {
                Ok(env) => self.api.environment = env,
                Err(e) => tracing::warn!("Ignoring RELAMIND_ENV: {}", e),
            }
        }
        if let Some(url) = var("RELAMIND_API_URL") {
            self.api.base_url = Some(url);
        }
        if let Some(origin) = var("RELAMIND_ORIGIN") {
            self.api.origin = Some(origin);
        }
        if let Some(timeout) = var("RELAMIND_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => self.api.timeout_secs = secs,
                _ => tracing::warn!("Ignoring RELAMIND_TIMEOUT_SECS: {:?}", timeout),
            }
        }

        // Logging overrides
        if let Some(level) = var("RELAMIND_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("RELAMIND_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Base URL {0:?} is relative; set api.origin or RELAMIND_ORIGIN")]
    RelativeBaseUrl(String),

    #[error("api.timeout_secs must be at least 1")]
    ZeroTimeout,
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# RelaMind Client Configuration
#
# Environment variables override these settings:
# - RELAMIND_ENV
# - RELAMIND_API_URL
# - RELAMIND_ORIGIN
# - RELAMIND_TIMEOUT_SECS
# - RELAMIND_LOG_LEVEL
# - RELAMIND_LOG_FORMAT

[api]
# Deployment environment: "development" (http://localhost:8123/api)
# or "production" (/api on the same origin as the web app)
environment = "development"

# Explicit base URL, overrides the environment
# base_url = "https://relamind.example.com/api"

# Origin a relative base URL is resolved against
# origin = "https://relamind.example.com"

# Timeout for request/response calls in seconds (streams have none)
timeout_secs = 60

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.environment, ApiEnvironment::Development);
        assert_eq!(config.api.timeout_secs, 60);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nenvironment = \"production\"\norigin = \"https://relamind.example.com/\"\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.environment, ApiEnvironment::Production);
        assert_eq!(
            config.api.resolved_base_url().unwrap(),
            "https://relamind.example.com/api"
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbroken").unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            Config::load(Path::new("/nonexistent/relamind.toml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_relative_base_without_origin() {
        let config = ApiConfig {
            environment: ApiEnvironment::Production,
            ..Default::default()
        };
        assert!(matches!(
            config.resolved_base_url(),
            Err(ConfigError::RelativeBaseUrl(base)) if base == "/api"
        ));
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let config = ApiConfig {
            environment: ApiEnvironment::Production,
            base_url: Some("http://10.0.0.2:8123/api/".to_string()),
            ..Default::default()
        };
        let client = config.client_config().unwrap();
        assert_eq!(client.base_url, "http://10.0.0.2:8123/api");
        assert_eq!(client.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RELAMIND_ENV", "production"),
            ("RELAMIND_ORIGIN", "https://a.example"),
            ("RELAMIND_TIMEOUT_SECS", "5"),
            ("RELAMIND_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.environment, ApiEnvironment::Production);
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.api.resolved_base_url().unwrap(), "https://a.example/api");
    }

    #[test]
    fn test_bad_env_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "RELAMIND_ENV").then(|| "staging".to_string()));
        assert_eq!(config.api.environment, ApiEnvironment::Development);
    }

    #[test]
    fn test_zero_timeout_env_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "RELAMIND_TIMEOUT_SECS").then(|| "0".to_string()));
        assert_eq!(config.api.timeout_secs, 60);

        config.apply_overrides(|key| (key == "RELAMIND_TIMEOUT_SECS").then(|| "soon".to_string()));
        assert_eq!(config.api.timeout_secs, 60);
    }

    #[test]
    fn test_zero_timeout_in_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\ntimeout_secs = 0\n").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(matches!(
            config.api.client_config(),
            Err(ConfigError::ZeroTimeout)
        ));
    }
}
