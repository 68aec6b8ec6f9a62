use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the IAC authorization endpoint. Empty by default, which
    /// makes every authorization attempt fail closed until configured.
    pub base_url: String,
    pub system_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 9082,
            },
            auth: AuthConfig {
                base_url: String::new(),
                system_id: String::new(),
            },
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by `Rename.toml`, overridden by environment
    /// variables like `RENAME_SERVER__PORT` and `RENAME_AUTH__BASE_URL`.
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("Rename.toml"))
            .merge(Env::prefixed("RENAME_").split("__"))
            .extract()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 9082);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.auth.base_url.is_empty());
    }

    #[test]
    fn test_env_overrides() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("RENAME_SERVER__PORT", "9090");
            jail.set_env("RENAME_AUTH__BASE_URL", "http://iac.local/valid");
            let config = AppConfig::load().expect("config should load");
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.auth.base_url, "http://iac.local/valid");
            Ok(())
        });
    }
}
