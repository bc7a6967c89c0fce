//! Server configuration: built-in defaults, YAML file, environment

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Effective configuration of the catalog server process
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub catalog: catalog_service::Config,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlite:// or postgres:// connection URL
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://catalog.db?mode=rwc".to_string(),
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` wins when set
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Layer defaults, the optional YAML file, `CATALOG__*` variables and the
/// bare `PORT` / `DATABASE_URL` variables, in increasing precedence.
pub fn load(path: Option<&Path>) -> Result<AppConfig, figment::Error> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Some(path) = path {
        if !path.is_file() {
            return Err(format!("config file {} not found", path.display()).into());
        }
        figment = figment.merge(Yaml::file_exact(path));
    }

    figment
        .merge(Env::prefixed("CATALOG__").split("__"))
        .merge(
            Env::raw()
                .only(&["PORT", "DATABASE_URL"])
                .map(|key| {
                    if key == "PORT" {
                        "server.port".into()
                    } else if key == "DATABASE_URL" {
                        "database.url".into()
                    } else {
                        key.into()
                    }
                }),
        )
        .extract()
}
