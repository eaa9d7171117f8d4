/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    /// JWT signing secret. Has no default on purpose: the server refuses
    /// to start without one (set `TUNEDECK_AUTH__JWT_SECRET`).
    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_token_expiration_days")]
    pub token_expiration_days: u64,
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        Self::load_from(PathBuf::from("config.toml"))
    }

    /// Load configuration from a specific file path plus environment
    pub fn load_from(config_path: PathBuf) -> Result<Self> {
        let mut settings = config::Config::builder();

        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with TUNEDECK_).
        // The section separator is a double underscore so field names that
        // contain underscores stay addressable, e.g.
        // TUNEDECK_AUTH__JWT_SECRET -> auth.jwt_secret.
        settings = settings.add_source(
            config::Environment::with_prefix("TUNEDECK")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ServerError::Config(
                "JWT secret is required (set TUNEDECK_AUTH__JWT_SECRET)".to_string(),
            ));
        }

        if self.auth.token_expiration_days == 0 {
            return Err(ServerError::Config(
                "Token expiration must be at least one day".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/tunedeck.db".to_string()
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: String::new(),
        token_expiration_days: default_token_expiration_days(),
    }
}

fn default_token_expiration_days() -> u64 {
    7
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_fails_validation_without_secret() {
        let config = ServerConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn env_overrides_reach_nested_fields() {
        std::env::set_var("TUNEDECK_AUTH__JWT_SECRET", "from-env");
        std::env::set_var("TUNEDECK_STORAGE__DATABASE_URL", "sqlite://env.db");

        let config = ServerConfig::load_from(PathBuf::from("no-such-file.toml")).unwrap();

        std::env::remove_var("TUNEDECK_AUTH__JWT_SECRET");
        std::env::remove_var("TUNEDECK_STORAGE__DATABASE_URL");

        assert_eq!(config.auth.jwt_secret, "from-env");
        assert_eq!(config.storage.database_url, "sqlite://env.db");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_with_secret_validates() {
        let mut config = ServerConfig::default();
        config.auth.jwt_secret = "secret".to_string();
        assert!(config.validate().is_ok());
        assert_eq!(config.auth.token_expiration_days, 7);
        assert_eq!(config.server.port, 5000);
    }
}
