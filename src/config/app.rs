// src/config/app.rs
use super::defaults::*;
use crate::consts::MASTER_SECRET_ENV;
use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub keys: Keys,
    pub paths: Paths,
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Keys {
    /// Hex master secret; absent means the ephemeral-key fallback kicks in
    pub master_secret_hex: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    pub creds_db: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    /// Refuse to start without an explicit master secret
    pub require_master_secret: bool,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("YTKV_CONFIG").unwrap_or_else(|_| "ytkv-config.toml".to_string());

        let mut conf = if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read ytkv-config.toml");
            toml::from_str(&content).expect("Invalid TOML in ytkv-config.toml")
        } else {
            Config {
                keys: default_keys(),
                paths: default_paths(),
                features: default_features(),
            }
        };

        // Environment always wins over the config file
        if let Ok(secret) = std::env::var(MASTER_SECRET_ENV) {
            conf.keys.master_secret_hex = Some(secret);
        }

        conf
    })
}
