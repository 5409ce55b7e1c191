// src/config/defaults.rs
use crate::config::app::{Features, Keys, Paths};

pub fn default_keys() -> Keys {
    Keys {
        master_secret_hex: None,
    }
}

pub fn default_paths() -> Paths {
    let base = dirs::data_local_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    Paths {
        creds_db: base
            .join("youtube-key-vault")
            .join("creds.db")
            .to_string_lossy()
            .into_owned(),
    }
}

pub fn default_features() -> Features {
    Features {
        require_master_secret: false,
    }
}
