// Runtime configuration loaded from environment variables

use rand::{distributions::Alphanumeric, Rng};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const GENERATED_SECRET_LEN: usize = 64;

/// Errors raised while reading configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// HS256 secret used to sign access tokens
    pub jwt_secret: String,
    /// Delay awaited before `GET /books` responds
    pub list_delay: Duration,
    /// Whether the session cookie carries the `Secure` attribute
    pub secure_cookie: bool,
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let delay_ms = parse_or("BOOKS_LIST_DELAY_MS", lookup("BOOKS_LIST_DELAY_MS"), 0u64)?;
        let secure_cookie = parse_or("SESSION_SECURE_COOKIE", lookup("SESSION_SECURE_COOKIE"), false)?;

        let jwt_secret = match lookup("JWT_SECRET").filter(|s| !s.trim().is_empty()) {
            Some(secret) => secret,
            None => {
                warn!("JWT_SECRET not set, generating a per-process secret; tokens will not survive a restart");
                generate_secret()
            }
        };

        Ok(Self {
            host,
            port,
            jwt_secret,
            list_delay: Duration::from_millis(delay_ms),
            secure_cookie,
        })
    }

    /// Socket address string to bind the listener to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

fn generate_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_SECRET_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.list_delay, Duration::ZERO);
        assert!(!config.secure_cookie);
        assert_eq!(config.jwt_secret.len(), GENERATED_SECRET_LEN);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_port_and_secret_from_env() {
        let config = config_from(&[("PORT", "8081"), ("JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.jwt_secret, "s3cret");
    }

    #[test]
    fn test_generated_secrets_differ() {
        let a = config_from(&[]).unwrap();
        let b = config_from(&[]).unwrap();
        assert_ne!(a.jwt_secret, b.jwt_secret);
    }

    #[test]
    fn test_blank_secret_is_replaced() {
        let config = config_from(&[("JWT_SECRET", "   ")]).unwrap();
        assert_eq!(config.jwt_secret.len(), GENERATED_SECRET_LEN);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "PORT", .. }));
    }

    #[test]
    fn test_list_delay_and_secure_cookie() {
        let config = config_from(&[("BOOKS_LIST_DELAY_MS", "1000"), ("SESSION_SECURE_COOKIE", "true")]).unwrap();
        assert_eq!(config.list_delay, Duration::from_secs(1));
        assert!(config.secure_cookie);
    }
}
