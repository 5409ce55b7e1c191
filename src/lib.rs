// src/lib.rs
//! youtube-key-vault — credential protection core for per-user YouTube API keys
//!
//! Features:
//! - AES-256-CBC encryption at rest (hex ciphertext + per-call random IV)
//! - Single 32-byte master key, derived once at startup and passed explicitly
//! - One credential row per user with soft-delete and validation tracking
//! - Full secure-gate v0.5 integration for in-memory secret hygiene

pub mod aliases;
pub mod api_keys;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod db;
pub mod error;
pub mod key_ops;

// Re-export everything callers need at the crate root
pub use aliases::{MasterKey32, PlainApiKey, SecureConversionsExt, SecureRandomExt};
pub use api_keys::{
    delete_api_key, get_decrypted_api_key, has_api_key, mark_validated, require_decrypted_api_key,
    save_api_key,
};
pub use config::load as load_config;
pub use crypto::{decrypt_api_key, encrypt_api_key, EncryptedApiKey};
pub use db::{
    count_active_credentials, deactivate_credential, delete_credential, get_credential,
    open_creds_db, open_creds_db_at, touch_validated, upsert_credential, CredentialLookup,
    StoredCredential,
};
pub use error::CoreError;
pub use key_ops::{derive_master_key, generate_master_key, MasterKey};

pub type Result<T> = std::result::Result<T, CoreError>;
