//! Database configuration
//!
//! Configuration is supplied once, at [`Store::connect`](crate::Store::connect)
//! time. There is no hot reload and no process-wide mutable state; a `Store`
//! keeps the settings it was built with for its whole lifetime.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Number of entities staged per commit generation during bulk writes
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Enable statement logging through sqlx
    #[serde(default = "default_sqlx_logging")]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgresql://localhost/seabatch".to_string(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            batch_size: default_batch_size(),
            sqlx_logging: default_sqlx_logging(),
        }
    }
}

impl DatabaseConfig {
    /// Load a configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&raw)?;
        Ok(config)
    }

    /// Merge database configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.url.is_empty() && other.url != "postgresql://localhost/seabatch" {
            self.url = other.url;
        }
        if other.max_connections != default_max_connections() {
            self.max_connections = other.max_connections;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        if other.batch_size != default_batch_size() {
            self.batch_size = other.batch_size;
        }
        if other.sqlx_logging != default_sqlx_logging() {
            self.sqlx_logging = other.sqlx_logging;
        }
        self
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout() -> u64 {
    5
}

fn default_batch_size() -> usize {
    100
}

fn default_sqlx_logging() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "postgresql://localhost/seabatch");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.connection_timeout, 5);
        assert_eq!(config.batch_size, 100);
        assert!(config.sqlx_logging);
    }

    #[test]
    fn test_database_config_serialization() {
        let config = DatabaseConfig {
            url: "postgresql://test".to_string(),
            max_connections: 15,
            connection_timeout: 45,
            batch_size: 250,
            sqlx_logging: false,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["url"], "postgresql://test");
        assert_eq!(json["max_connections"], 15);
        assert_eq!(json["batch_size"], 250);
    }

    #[test]
    fn test_database_config_deserialization_defaults() {
        let json = r#"{"url": "sqlite::memory:"}"#;
        let config: DatabaseConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.batch_size, 100);
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn test_database_config_merge_url() {
        let base = DatabaseConfig::default();
        let other = DatabaseConfig {
            url: "postgresql://new-host/new-db".to_string(),
            ..DatabaseConfig::default()
        };
        let merged = base.merge(other);
        assert_eq!(merged.url, "postgresql://new-host/new-db");
    }

    #[test]
    fn test_database_config_merge_batch_size() {
        let base = DatabaseConfig::default();
        let other = DatabaseConfig {
            batch_size: 50,
            ..DatabaseConfig::default()
        };
        let merged = base.merge(other);
        assert_eq!(merged.batch_size, 50);
        assert_eq!(merged.url, "postgresql://localhost/seabatch");
    }

    #[test]
    fn test_database_config_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "url: \"sqlite::memory:\"\nbatch_size: 25").unwrap();
        let config = DatabaseConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.batch_size, 25);
        assert_eq!(config.connection_timeout, 5);
    }

    #[test]
    fn test_database_config_clone() {
        let config = DatabaseConfig::default();
        let cloned = config.clone();
        assert_eq!(config.url, cloned.url);
        assert_eq!(config.batch_size, cloned.batch_size);
    }
}
