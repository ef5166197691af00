use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

const DEFAULT_MAX_UPLOAD_SIZE: i64 = 8 * 1024 * 1024;
const DEFAULT_TOKEN_TTL_SECS: i64 = 8 * 60 * 60;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub limits: LimitsConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite database file, created on first start.
    pub url: String,
    pub max_connections: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum number of tasks returned by a single listing.
    pub tasks_limit: usize,
    /// Maximum accepted request body size in bytes.
    pub max_upload_size: u64,
}

/// Sign-in settings. Task routes are open while `password` is empty.
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    pub password: String,
    /// HMAC key signing session tokens; required once a password is set.
    pub secret_key: String,
    pub token_ttl_secs: u64,
}

impl AuthConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.password.is_empty()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("enabled", &self.is_enabled())
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// `TASUKU_` prefixed variables, `__` between nesting levels.
fn environment() -> config::Environment {
    config::Environment::with_prefix("TASUKU")
        .prefix_separator("_")
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`
    /// into a `Settings`. Environment variables use the `TASUKU_` prefix and `__`
    /// between nesting levels, e.g. `TASUKU_LIMITS__TASKS_LIMIT=20` or
    /// `TASUKU_AUTH__PASSWORD=secret`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the resulting values fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 7540)?
            .set_default("database.url", "scheduler.db")?
            .set_default("database.max_connections", 1)?
            .set_default("limits.tasks_limit", 50)?
            .set_default("limits.max_upload_size", DEFAULT_MAX_UPLOAD_SIZE)?
            .set_default("auth.password", "")?
            .set_default("auth.secret_key", "")?
            .set_default("auth.token_ttl_secs", DEFAULT_TOKEN_TTL_SECS)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(environment())
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        tracing::debug!(
            bind_addr = %settings.server.bind_addr(),
            tasks_limit = settings.limits.tasks_limit,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// ## Summary
    /// Checks value ranges the deserializer cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for a zero task limit, upload
    /// size or connection count, an empty database path, or a password set
    /// without a secret key.
    pub fn validate(&self) -> CoreResult<()> {
        if self.database.url.is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "database.url mustn't be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(CoreError::InvalidConfiguration(
                "database.max_connections must be greater than zero".to_string(),
            ));
        }
        if self.limits.tasks_limit == 0 {
            return Err(CoreError::InvalidConfiguration(
                "limits.tasks_limit must be greater than zero".to_string(),
            ));
        }
        if self.limits.max_upload_size == 0 {
            return Err(CoreError::InvalidConfiguration(
                "limits.max_upload_size must be greater than zero".to_string(),
            ));
        }
        if self.auth.is_enabled() && self.auth.secret_key.is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "auth.password is set but auth.secret_key is missing".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
