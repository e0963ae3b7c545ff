use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    5500
}

impl Config {
    /// Load the shared settings from `configuration.*`, `APP__*` variables and
    /// a bare `PORT` variable, in increasing order of precedence.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let port_override = std::env::var("PORT")
            .ok()
            .map(|raw| {
                raw.trim().parse::<u16>().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!("Invalid PORT value '{}': {}", raw, e))
                })
            })
            .transpose()?;

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", port_override.map(i64::from))?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.port, 5500);
    }
}
