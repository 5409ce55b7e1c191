// src/consts.rs
//! Shared constants — cipher parameters and input limits

/// Master key size for AES-256
pub const MASTER_KEY_LEN: usize = 32;

/// Hex characters consumed from the configured master secret
pub const MASTER_SECRET_HEX_LEN: usize = 64;

/// CBC initialization vector size
pub const IV_LEN: usize = 16;

/// Hex length of a stored IV (16 bytes)
pub const IV_HEX_LEN: usize = 32;

/// AES block size; ciphertext length must be a multiple of this
pub const AES_BLOCK_LEN: usize = 16;

/// Upper bound on a submitted API key; real Google keys are ~39 characters
pub const MAX_API_KEY_LEN: usize = 512;

/// Environment variable carrying the master secret (hex)
pub const MASTER_SECRET_ENV: &str = "YOUTUBE_API_ENCRYPTION_KEY";
