use serde::{Deserialize, Serialize};

/// Main configuration structure for the storefront
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Backing store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Access proxy configuration
    #[serde(default)]
    pub proxy: ProxyConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<String>,

    /// Rotation for file output: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

/// Backing store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreConfig {
    /// Simulated latency per store lookup in milliseconds (0 disables)
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

const fn default_latency_ms() -> u64 {
    20
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

/// Access proxy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProxyConfig {
    /// Token the digital store proxy expects from callers
    #[serde(default = "default_access_token")]
    pub access_token: String,
}

fn default_access_token() -> String {
    "valid-token".to_string()
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            access_token: default_access_token(),
        }
    }
}
