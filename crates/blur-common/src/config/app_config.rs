//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    /// Present whenever `REDIS_URL` is set; required by the redis lock backend
    pub redis: Option<RedisConfig>,
    pub lock: LockConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations when the service context connects
    #[serde(default)]
    pub run_migrations: bool,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// Where board counter locks live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LockBackend {
    /// Shared across every instance through Redis
    #[default]
    Redis,
    /// In-process only; valid for a single instance
    Local,
}

/// Counter lock timings
#[derive(Debug, Clone, Deserialize)]
pub struct LockConfig {
    #[serde(default)]
    pub backend: LockBackend,
    /// Maximum time to wait for the lock before failing with a lock timeout
    #[serde(default = "default_lock_wait_timeout_ms")]
    pub wait_timeout_ms: u64,
    /// Time after which an unreleased lock expires
    #[serde(default = "default_lock_lease_time_ms")]
    pub lease_time_ms: u64,
    /// Pause between acquisition attempts
    #[serde(default = "default_lock_retry_interval_ms")]
    pub retry_interval_ms: u64,
}

impl LockConfig {
    #[must_use]
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }

    #[must_use]
    pub fn lease_time(&self) -> Duration {
        Duration::from_millis(self.lease_time_ms)
    }

    #[must_use]
    pub fn retry_interval(&self) -> Duration {
        Duration::from_millis(self.retry_interval_ms)
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            backend: LockBackend::default(),
            wait_timeout_ms: default_lock_wait_timeout_ms(),
            lease_time_ms: default_lock_lease_time_ms(),
            retry_interval_ms: default_lock_retry_interval_ms(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "blur".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_lock_wait_timeout_ms() -> u64 {
    5000
}

fn default_lock_lease_time_ms() -> u64 {
    3000
}

fn default_lock_retry_interval_ms() -> u64 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parsed = |key: &'static str| -> Result<Option<u64>, ConfigError> {
            lookup(key)
                .map(|raw| {
                    raw.trim()
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidValue(key, raw))
                })
                .transpose()
        };

        let lock_backend = match lookup("LOCK_BACKEND").as_deref().map(str::to_lowercase) {
            None => LockBackend::default(),
            Some(s) if s == "redis" => LockBackend::Redis,
            Some(s) if s == "local" => LockBackend::Local,
            Some(other) => return Err(ConfigError::InvalidValue("LOCK_BACKEND", other)),
        };

        let lock = LockConfig {
            backend: lock_backend,
            wait_timeout_ms: parsed("LOCK_WAIT_TIMEOUT_MS")?
                .unwrap_or_else(default_lock_wait_timeout_ms),
            lease_time_ms: parsed("LOCK_LEASE_TIME_MS")?
                .unwrap_or_else(default_lock_lease_time_ms),
            retry_interval_ms: parsed("LOCK_RETRY_INTERVAL_MS")?
                .unwrap_or_else(default_lock_retry_interval_ms),
        };

        if lock.wait_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue(
                "LOCK_WAIT_TIMEOUT_MS",
                "0".to_string(),
            ));
        }
        if lock.lease_time_ms == 0 {
            return Err(ConfigError::InvalidValue(
                "LOCK_LEASE_TIME_MS",
                "0".to_string(),
            ));
        }

        let redis = match lookup("REDIS_URL") {
            Some(url) => Some(RedisConfig {
                url,
                max_connections: parsed("REDIS_MAX_CONNECTIONS")?
                    .map_or_else(default_redis_max_connections, |v| v as u32),
            }),
            None if lock.backend == LockBackend::Redis => {
                return Err(ConfigError::MissingVar("REDIS_URL"))
            }
            None => None,
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parsed("DATABASE_MAX_CONNECTIONS")?
                    .map_or_else(default_max_connections, |v| v as u32),
                min_connections: parsed("DATABASE_MIN_CONNECTIONS")?
                    .map_or_else(default_min_connections, |v| v as u32),
                run_migrations: lookup("MIGRATIONS_AUTO_RUN")
                    .is_some_and(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes")),
            },
            redis,
            lock,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
