//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `WEDAY_*` environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::planner::{parse_date, seed, Planner};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial planner contents
#[derive(Debug, Clone, Deserialize)]
pub struct PlannerConfig {
    #[serde(default = "default_total_budget")]
    pub total_budget: f64,

    /// `YYYY-MM-DD`
    #[serde(default = "default_wedding_date")]
    pub wedding_date: String,

    /// Start from the example records instead of empty ledgers
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_total_budget() -> f64 {
    seed::SEED_TOTAL_BUDGET
}

fn default_wedding_date() -> String {
    seed::seed_wedding_date().to_string()
}

fn default_seed() -> bool {
    true
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            total_budget: default_total_budget(),
            wedding_date: default_wedding_date(),
            seed: default_seed(),
        }
    }
}

impl PlannerConfig {
    /// Build the planner this config describes
    pub fn planner(&self) -> Result<Planner, ConfigError> {
        let wedding_date = parse_date(&self.wedding_date).map_err(|e| ConfigError::Invalid {
            field: "planner.wedding_date",
            error: e.to_string(),
        })?;

        if !self.total_budget.is_finite() || self.total_budget < 0.0 {
            return Err(ConfigError::Invalid {
                field: "planner.total_budget",
                error: format!("must be a non-negative amount, got {}", self.total_budget),
            });
        }

        let mut planner = if self.seed {
            Planner::seeded()
        } else {
            Planner::new(self.total_budget, wedding_date)
        };
        planner.set_total_budget(self.total_budget);
        planner.set_wedding_date(wedding_date);
        Ok(planner)
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
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
            dirs::config_dir().map(|p| p.join("weday").join("config.toml")),
            Some(PathBuf::from("/etc/weday/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply `WEDAY_*` environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup. Unparsable numbers are ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Planner overrides
        if let Some(budget) = lookup("WEDAY_TOTAL_BUDGET") {
            if let Ok(b) = budget.parse() {
                self.planner.total_budget = b;
            }
        }
        if let Some(date) = lookup("WEDAY_WEDDING_DATE") {
            self.planner.wedding_date = date;
        }

        // API overrides
        if let Some(host) = lookup("WEDAY_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("WEDAY_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("WEDAY_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("WEDAY_LOG_FORMAT") {
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

    #[error("Invalid value for {field}: {error}")]
    Invalid { field: &'static str, error: String },
}

/// Install the global tracing subscriber
///
/// Logs go to stderr. `RUST_LOG` wins over the configured level when set.
pub fn init_logging(
    logging: &LoggingConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "weday={level},tower_http={level}",
            level = logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    }
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# WeDay Configuration
#
# Environment variables override these settings:
# - WEDAY_TOTAL_BUDGET
# - WEDAY_WEDDING_DATE
# - WEDAY_API_HOST
# - WEDAY_API_PORT
# - WEDAY_LOG_LEVEL
# - WEDAY_LOG_FORMAT

[planner]
# Total wedding budget
total_budget = 30000.0

# Wedding date (YYYY-MM-DD)
wedding_date = "2025-10-15"

# Start with the example guests, tasks, vendors and expenses
seed = true

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8082

# Allowed CORS origins
cors_origins = ["http://localhost:8080", "http://127.0.0.1:8080"]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
