// src/key_ops.rs
//! Master key derivation and generation
//!
//! The master key is derived exactly once at process start and passed
//! by reference into the cipher functions. There is no module-level
//! key singleton.

use log::warn;

use crate::aliases::{MasterKey32, RandomMasterKey32, SecureRandomExt};
use crate::consts::{MASTER_KEY_LEN, MASTER_SECRET_HEX_LEN};
use crate::error::CoreError;

pub type MasterKey = MasterKey32;

/// Generate a fresh random 256-bit master key
#[inline]
pub fn generate_master_key() -> MasterKey {
    MasterKey::new(**RandomMasterKey32::new())
}

/// Derive the process master key from an optional hex secret.
///
/// With a secret: the first 64 hex characters decode to exactly 32 bytes.
/// Without one: a random key is generated for this process only, and every
/// credential encrypted under it is permanently undecryptable after restart.
/// That hazard is warned about here, not silently tolerated.
pub fn derive_master_key(secret_hex: Option<&str>) -> Result<MasterKey, CoreError> {
    match secret_hex {
        Some(secret) => master_key_from_hex(secret),
        None => {
            warn!(
                "no master key secret configured; using an ephemeral random key. \
                 All stored API keys become undecryptable after this process exits"
            );
            Ok(generate_master_key())
        }
    }
}

/// Decode the first 64 hex characters of `secret` into a 32-byte key
pub fn master_key_from_hex(secret: &str) -> Result<MasterKey, CoreError> {
    let head = secret
        .get(..MASTER_SECRET_HEX_LEN)
        .ok_or(CoreError::InvalidInput(
            "master key secret must be at least 64 hex characters",
        ))?;
    let bytes = hex::decode(head)
        .map_err(|_| CoreError::InvalidInput("master key secret must be hex-encoded"))?;
    let key: [u8; MASTER_KEY_LEN] = bytes
        .try_into()
        .map_err(|_| CoreError::InvalidInput("master key secret must decode to 32 bytes"))?;
    Ok(MasterKey::new(key))
}
