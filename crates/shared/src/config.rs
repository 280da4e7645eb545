//! Application configuration management.

use std::collections::HashMap;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Ledger configuration.
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Ledger configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Canonical payment method codes accepted by the engine.
    #[serde(default = "default_payment_methods")]
    pub payment_methods: Vec<String>,
    /// Adapter labels translated to canonical codes before reaching the engine.
    #[serde(default = "default_payment_method_aliases")]
    pub payment_method_aliases: HashMap<String, String>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            payment_methods: default_payment_methods(),
            payment_method_aliases: default_payment_method_aliases(),
        }
    }
}

fn default_payment_methods() -> Vec<String> {
    vec!["cash".to_string(), "bank_transfer".to_string()]
}

fn default_payment_method_aliases() -> HashMap<String, String> {
    HashMap::from([("bank".to_string(), "bank_transfer".to_string())])
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SAMITI").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml_str(toml: &str) -> Result<AppConfig, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_defaults_applied() {
        let cfg = from_toml_str(
            r#"
            [server]
            [database]
            url = "sqlite::memory:"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.database.max_connections, 10);
        assert_eq!(cfg.database.min_connections, 1);
        assert_eq!(cfg.ledger.payment_methods, vec!["cash", "bank_transfer"]);
        assert_eq!(
            cfg.ledger.payment_method_aliases.get("bank").map(String::as_str),
            Some("bank_transfer")
        );
    }

    #[test]
    fn test_custom_payment_methods() {
        let cfg = from_toml_str(
            r#"
            [server]
            port = 9000
            [database]
            url = "postgres://localhost/samiti"
            [ledger]
            payment_methods = ["cash", "upi", "cheque"]
            [ledger.payment_method_aliases]
            gpay = "upi"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.ledger.payment_methods, vec!["cash", "upi", "cheque"]);
        assert_eq!(
            cfg.ledger.payment_method_aliases.get("gpay").map(String::as_str),
            Some("upi")
        );
    }

    #[test]
    fn test_missing_database_url_fails() {
        let result = from_toml_str("[server]\n[database]\n");
        assert!(result.is_err());
    }
}
