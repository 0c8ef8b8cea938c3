//! Configuration management for the workshop backend.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Only the workshop namespace is required; everything else has a local
//! development fallback.

use std::env;
use thiserror::Error;

/// Default session signing secret for local development.
pub const DEFAULT_SESSION_SECRET: &str = "default-secret-change-in-production";

/// Error raised when required configuration is missing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document store configuration
    pub store: StoreConfig,
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Admin authentication configuration
    pub auth: AuthConfig,
    /// Cross-origin configuration for the SPA frontend
    pub cors: CorsConfig,
}

/// Document store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Redis connection URL
    pub url: String,
    /// Key namespace isolating one workshop's collections
    pub namespace: String,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Directory holding the built frontend, served when set
    pub static_dir: Option<String>,
}

/// Admin authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Operator-configured admin password. When unset, login fails with a
    /// configuration error rather than an authentication error.
    pub admin_password: Option<String>,
    /// Secret the session cookie signing key is derived from
    pub session_secret: String,
}

/// Cross-origin configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Allowed frontend origin
    pub frontend_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when `WORKSHOP_NAMESPACE` is
    /// absent or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as absent ones throughout.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| get(key).filter(|v| !v.is_empty());

        let namespace =
            var("WORKSHOP_NAMESPACE").ok_or(ConfigError::MissingVar("WORKSHOP_NAMESPACE"))?;

        Ok(Self {
            store: StoreConfig {
                url: var("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
                namespace,
            },
            server: ServerConfig {
                host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: var("PORT").and_then(|s| s.parse().ok()).unwrap_or(8080),
                static_dir: var("STATIC_DIR"),
            },
            auth: AuthConfig {
                admin_password: var("ADMIN_PASSWORD"),
                session_secret: var("SESSION_SECRET")
                    .unwrap_or_else(|| DEFAULT_SESSION_SECRET.to_string()),
            },
            cors: CorsConfig {
                frontend_url: var("FRONTEND_URL")
                    .unwrap_or_else(|| "http://localhost:5173".to_string()),
            },
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(ToString::to_string)
    }

    #[test]
    fn test_missing_namespace_is_an_error() {
        let result = Config::from_lookup(lookup(&[]));
        assert_eq!(
            result.err(),
            Some(ConfigError::MissingVar("WORKSHOP_NAMESPACE"))
        );
    }

    #[test]
    fn test_empty_namespace_is_an_error() {
        let result = Config::from_lookup(lookup(&[("WORKSHOP_NAMESPACE", "")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("WORKSHOP_NAMESPACE", "spring-2025")])).unwrap();

        assert_eq!(config.store.namespace, "spring-2025");
        assert_eq!(config.store.url, "redis://localhost:6379");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, None);
        assert_eq!(config.auth.admin_password, None);
        assert_eq!(config.auth.session_secret, DEFAULT_SESSION_SECRET);
        assert_eq!(config.cors.frontend_url, "http://localhost:5173");
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_lookup(lookup(&[
            ("WORKSHOP_NAMESPACE", "autumn"),
            ("REDIS_URL", "redis://store:6379"),
            ("PORT", "9000"),
            ("ADMIN_PASSWORD", "hunter2"),
            ("SESSION_SECRET", "s3cret"),
            ("STATIC_DIR", "/srv/frontend"),
            ("FRONTEND_URL", "https://workshop.example.com"),
        ]))
        .unwrap();

        assert_eq!(config.store.url, "redis://store:6379");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.auth.admin_password.as_deref(), Some("hunter2"));
        assert_eq!(config.auth.session_secret, "s3cret");
        assert_eq!(config.server.static_dir.as_deref(), Some("/srv/frontend"));
        assert_eq!(config.cors.frontend_url, "https://workshop.example.com");
    }

    #[test]
    fn test_unparseable_port_falls_back() {
        let config = Config::from_lookup(lookup(&[
            ("WORKSHOP_NAMESPACE", "autumn"),
            ("PORT", "not-a-port"),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 8080);
    }
}
