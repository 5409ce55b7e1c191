// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Ciphertext/IV/key mismatch, malformed hex, or corrupt padding.
    /// The stored credential is unusable; prompt the user to reconnect
    /// their API key instead of retrying.
    #[error("stored API key could not be decrypted; please reconnect your API key")]
    Decryption,

    /// No active credential for the user. Expected state, not a fault.
    #[error("no active API key for this user")]
    NotFound,

    /// Rejected before encryption ever runs.
    #[error("invalid API key input: {0}")]
    InvalidInput(&'static str),

    /// Backing store failure. Retryable with backoff, and never to be
    /// conflated with "no key configured".
    #[error("credential store unavailable: {0}")]
    StoreUnavailable(#[from] rusqlite::Error),
}
