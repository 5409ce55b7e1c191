// tests/common.rs
//! Shared test utilities — per-test isolated credential databases
#![allow(dead_code)]

use rusqlite::Connection;
use tempfile::TempDir;
use youtube_key_vault::key_ops::{master_key_from_hex, MasterKey};
use youtube_key_vault::open_creds_db_at;

/// Fixed 64-hex-char secret used wherever a test needs a stable key
pub const TEST_SECRET_HEX: &str =
    "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

pub fn test_master_key() -> MasterKey {
    master_key_from_hex(TEST_SECRET_HEX).expect("test secret is valid hex")
}

/// Fresh on-disk credential database, deleted when the test ends
pub struct TestDb {
    pub conn: Connection,
    _dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let conn = open_creds_db_at(&dir.path().join("creds.db")).expect("open creds db");
        TestDb { conn, _dir: dir }
    }

    pub fn row_count(&self) -> i64 {
        self.conn
            .query_row("SELECT COUNT(*) FROM youtube_api_keys", [], |r| r.get(0))
            .unwrap()
    }
}
