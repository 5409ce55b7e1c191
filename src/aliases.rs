// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical types used throughout youtube-key-vault.

pub use secure_gate::{
    dynamic_alias, fixed_alias, random_alias, SecureConversionsExt, SecureRandomExt,
};

// Fixed-size secrets
fixed_alias!(MasterKey32, 32); // AES-256 master key, derived once per process

// Dynamic secrets
dynamic_alias!(PlainApiKey, String); // Decrypted user API key; transient only, never persisted

// Random secrets
random_alias!(RandomMasterKey32, 32);
