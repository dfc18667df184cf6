use std::{env, fmt, num::ParseIntError};

const DEFAULT_API_KEY: &str = "your-api-key-here";
const DEFAULT_DB_PASSWORD: &str = "your-db-password-here";
const DEFAULT_JWT_SECRET: &str = "your-jwt-secret-here";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Service configuration. Every value has a fallback, so a bare environment
/// still starts the server.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub db_password: String,
    pub jwt_secret: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` uses the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key: or_default("API_KEY", DEFAULT_API_KEY),
            db_password: or_default("DB_PASSWORD", DEFAULT_DB_PASSWORD),
            jwt_secret: or_default("JWT_SECRET", DEFAULT_JWT_SECRET),
            port,
        })
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("db_password", &"<redacted>")
            .field("jwt_secret", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}
