// src/api_keys.rs
//! Caller-facing API key workflows
//!
//! This is the surface the RPC layer consumes, composing the pure
//! crypto primitives with the credential store. The decrypted key is
//! only ever handed back for server-side use against the upstream API;
//! nothing here returns it to a client-facing response.

use chrono::Utc;
use log::{debug, warn};
use rusqlite::Connection;

use crate::aliases::PlainApiKey;
use crate::crypto::{decrypt_api_key, encrypt_api_key};
use crate::db::{
    deactivate_credential, get_credential, touch_validated, upsert_credential, CredentialLookup,
    StoredCredential,
};
use crate::error::CoreError;
use crate::key_ops::MasterKey;

/// Encrypt and store a user's API key, replacing any previous one
pub fn save_api_key(
    conn: &Connection,
    master: &MasterKey,
    user_id: i64,
    api_key: &str,
) -> Result<StoredCredential, CoreError> {
    let plaintext = PlainApiKey::new(api_key.trim().to_owned());
    let encrypted = encrypt_api_key(&plaintext, master)?;
    upsert_credential(conn, user_id, &encrypted)
}

/// Does the user currently have an active API key?
pub fn has_api_key(conn: &Connection, user_id: i64) -> Result<bool, CoreError> {
    Ok(matches!(
        get_credential(conn, user_id)?,
        CredentialLookup::Active(_)
    ))
}

/// Remove the user's API key (soft-deactivation; the audit row stays)
pub fn delete_api_key(conn: &Connection, user_id: i64) -> Result<(), CoreError> {
    deactivate_credential(conn, user_id)
}

/// Fetch and decrypt the user's API key for server-side use.
///
/// Returns `None` when no active credential exists, a normal state.
/// A credential that no longer decrypts propagates `Decryption`; the
/// user has to reconnect their key.
pub fn get_decrypted_api_key(
    conn: &Connection,
    master: &MasterKey,
    user_id: i64,
) -> Result<Option<PlainApiKey>, CoreError> {
    match get_credential(conn, user_id)? {
        CredentialLookup::Active(cred) => {
            match decrypt_api_key(&cred.ciphertext, &cred.iv, master) {
                Ok(plaintext) => Ok(Some(plaintext)),
                Err(err) => {
                    warn!("stored API key for user {user_id} failed to decrypt; re-entry required");
                    Err(err)
                }
            }
        }
        lookup => {
            debug!("no active API key for user {user_id} ({lookup:?})");
            Ok(None)
        }
    }
}

/// Like [`get_decrypted_api_key`], but absence is an error.
///
/// For call sites that cannot proceed without a key, such as an upstream
/// search about to run. `NotFound` tells them to prompt the user to
/// configure one.
pub fn require_decrypted_api_key(
    conn: &Connection,
    master: &MasterKey,
    user_id: i64,
) -> Result<PlainApiKey, CoreError> {
    get_decrypted_api_key(conn, master, user_id)?.ok_or(CoreError::NotFound)
}

/// Stamp the credential after a successful upstream validation call
pub fn mark_validated(conn: &Connection, user_id: i64) -> Result<(), CoreError> {
    touch_validated(conn, user_id, Utc::now())
}
