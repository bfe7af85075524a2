use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    pub matching: MatchingSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "data/schemes.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<usize>,
    pub max_limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_base_score")]
    pub base: u32,
    #[serde(default = "default_exact_match")]
    pub exact_match: u32,
    #[serde(default = "default_high_relevance")]
    pub high_relevance: u32,
    #[serde(default = "default_moderate_relevance")]
    pub moderate_relevance: u32,
    #[serde(default = "default_low_relevance")]
    pub low_relevance: u32,
    #[serde(default = "default_bonus")]
    pub bonus: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            base: default_base_score(),
            exact_match: default_exact_match(),
            high_relevance: default_high_relevance(),
            moderate_relevance: default_moderate_relevance(),
            low_relevance: default_low_relevance(),
            bonus: default_bonus(),
        }
    }
}

fn default_base_score() -> u32 { 40 }
fn default_exact_match() -> u32 { 25 }
fn default_high_relevance() -> u32 { 20 }
fn default_moderate_relevance() -> u32 { 15 }
fn default_low_relevance() -> u32 { 10 }
fn default_bonus() -> u32 { 8 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with YOJANA_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with YOJANA_)
            // e.g., YOJANA_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("YOJANA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Apply direct environment overrides for deployment paths
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("YOJANA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply unprefixed environment overrides
///
/// SCHEME_CATALOG_PATH overrides catalog.path so deployments can point at a
/// mounted catalog without touching the config files.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(path) = env::var("SCHEME_CATALOG_PATH") {
        builder = builder.set_override("catalog.path", path)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.base, 40);
        assert_eq!(weights.exact_match, 25);
        assert_eq!(weights.high_relevance, 20);
        assert_eq!(weights.moderate_relevance, 15);
        assert_eq!(weights.low_relevance, 10);
        assert_eq!(weights.bonus, 8);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_default_catalog_path() {
        assert_eq!(default_catalog_path(), "data/schemes.json");
    }
}
