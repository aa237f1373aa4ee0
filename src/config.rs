use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub matching: MatchingSettings,
    pub roster: RosterSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    /// Apply the enhancement pass to ranked results
    #[serde(default = "default_enhance")]
    pub enhance: bool,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            enhance: default_enhance(),
        }
    }
}

fn default_limit() -> usize { 10 }
fn default_max_limit() -> usize { 50 }
fn default_enhance() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct RosterSettings {
    /// Number of demo profiles generated at start-up
    #[serde(default = "default_roster_size")]
    pub size: usize,
    /// Fixed seed for a reproducible roster; random when absent
    pub seed: Option<u64>,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            size: default_roster_size(),
            seed: None,
        }
    }
}

fn default_roster_size() -> usize { 50 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local override file (config/local.toml)
    /// 4. Environment variables (prefixed with MATCHMAKER_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MATCHMAKER__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        settings.try_deserialize::<Settings>()?.checked()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize::<Settings>()?.checked()
    }

    fn checked(self) -> Result<Self, ConfigError> {
        if self.matching.default_limit == 0 {
            return Err(ConfigError::Message(
                "matching.default_limit must be at least 1".to_string(),
            ));
        }
        if self.matching.max_limit < self.matching.default_limit {
            return Err(ConfigError::Message(format!(
                "matching.max_limit ({}) is below matching.default_limit ({})",
                self.matching.max_limit, self.matching.default_limit
            )));
        }
        Ok(self)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("MATCHMAKER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
