use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::config::constants::{env, prod};

/// Service settings loaded from an optional `photokeep.json` file layered
/// under `PHOTOKEEP__`-prefixed environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    pub app: AppSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub host: String,
    pub port: u16,
}

impl AppSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ServiceSettings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let (default_host, default_port) = prod::APP_ADDRESS
            .split_once(':')
            .expect("default app address has a host and a port");

        Config::builder()
            .set_default("app.host", default_host)?
            .set_default("app.port", default_port)?
            .add_source(File::with_name(env::SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::SETTINGS_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
