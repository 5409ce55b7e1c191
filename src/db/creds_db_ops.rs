// src/db/creds_db_ops.rs
//! Credential row operations and lifecycle rules
//!
//! One row per user, enforced by the UNIQUE constraint on user_id.
//! Upsert is a single conflict-clause statement, so concurrent saves
//! for the same user resolve to last-writer-wins without explicit locks.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;

use crate::crypto::EncryptedApiKey;
use crate::error::CoreError;

/// One user's stored credential, exactly as persisted.
/// Holds only ciphertext, so it is safe to serialize and display.
#[derive(Debug, Clone, Serialize)]
pub struct StoredCredential {
    pub user_id: i64,
    pub ciphertext: String,
    pub iv: String,
    pub is_active: bool,
    pub last_validated: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Three-way lookup result: callers must be able to tell "never
/// configured" apart from "configured but disabled".
#[derive(Debug, Clone)]
pub enum CredentialLookup {
    Active(StoredCredential),
    Inactive,
    Missing,
}

fn row_to_credential(row: &Row) -> rusqlite::Result<StoredCredential> {
    Ok(StoredCredential {
        user_id: row.get(0)?,
        ciphertext: row.get(1)?,
        iv: row.get(2)?,
        is_active: row.get(3)?,
        last_validated: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

const CREDENTIAL_COLUMNS: &str =
    "user_id, encrypted_api_key, iv, is_active, last_validated, created_at, updated_at";

/// Insert or replace the credential for `user_id` in one atomic statement.
///
/// A replaced row is re-activated and loses its `last_validated` stamp;
/// the new key has not been checked against the upstream API yet.
pub fn upsert_credential(
    conn: &Connection,
    user_id: i64,
    encrypted: &EncryptedApiKey,
) -> Result<StoredCredential, CoreError> {
    let now = Utc::now();
    conn.execute(
        "INSERT INTO youtube_api_keys
             (user_id, encrypted_api_key, iv, is_active, last_validated, created_at, updated_at)
         VALUES (?1, ?2, ?3, 1, NULL, ?4, ?4)
         ON CONFLICT(user_id) DO UPDATE SET
             encrypted_api_key = excluded.encrypted_api_key,
             iv = excluded.iv,
             is_active = 1,
             last_validated = NULL,
             updated_at = excluded.updated_at",
        params![user_id, encrypted.ciphertext, encrypted.iv, now],
    )?;

    let stored = conn.query_row(
        &format!("SELECT {CREDENTIAL_COLUMNS} FROM youtube_api_keys WHERE user_id = ?1"),
        [user_id],
        row_to_credential,
    )?;
    Ok(stored)
}

/// Fetch the credential state for `user_id`
pub fn get_credential(conn: &Connection, user_id: i64) -> Result<CredentialLookup, CoreError> {
    let row = conn
        .query_row(
            &format!("SELECT {CREDENTIAL_COLUMNS} FROM youtube_api_keys WHERE user_id = ?1"),
            [user_id],
            row_to_credential,
        )
        .optional()?;

    Ok(match row {
        None => CredentialLookup::Missing,
        Some(cred) if cred.is_active => CredentialLookup::Active(cred),
        Some(_) => CredentialLookup::Inactive,
    })
}

/// Soft-delete the credential for `user_id`.
///
/// Idempotent: a missing or already-inactive row is a silent success.
pub fn deactivate_credential(conn: &Connection, user_id: i64) -> Result<(), CoreError> {
    conn.execute(
        "UPDATE youtube_api_keys SET is_active = 0, updated_at = ?2
         WHERE user_id = ?1 AND is_active = 1",
        params![user_id, Utc::now()],
    )?;
    Ok(())
}

/// Physically remove the credential row. Idempotent.
pub fn delete_credential(conn: &Connection, user_id: i64) -> Result<(), CoreError> {
    conn.execute(
        "DELETE FROM youtube_api_keys WHERE user_id = ?1",
        [user_id],
    )?;
    Ok(())
}

/// Record a successful validation against the upstream API.
///
/// A row that was deactivated or deleted while the validation request was
/// in flight is left alone.
pub fn touch_validated(
    conn: &Connection,
    user_id: i64,
    when: DateTime<Utc>,
) -> Result<(), CoreError> {
    conn.execute(
        "UPDATE youtube_api_keys SET last_validated = ?2, updated_at = ?2
         WHERE user_id = ?1 AND is_active = 1",
        params![user_id, when],
    )?;
    Ok(())
}

/// Number of users with an active credential
pub fn count_active_credentials(conn: &Connection) -> Result<u64, CoreError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM youtube_api_keys WHERE is_active = 1",
        [],
        |row| row.get(0),
    )?;
    Ok(count as u64)
}
