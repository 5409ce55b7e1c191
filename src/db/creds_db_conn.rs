// src/db/creds_db_conn.rs
use rusqlite::{Connection, Result};
use std::{env, fs, path::Path, time::Duration};

/// Open the credential database at the configured location.
///
/// `YTKV_CREDS_DB` overrides the config path for full test isolation.
pub fn open_creds_db() -> Result<Connection> {
    let config = crate::config::load();

    let db_path = env::var("YTKV_CREDS_DB").unwrap_or_else(|_| config.paths.creds_db.clone());
    open_creds_db_at(Path::new(&db_path))
}

/// Open (and if needed create) a credential database at an explicit path
pub fn open_creds_db_at(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let conn = Connection::open(db_path)?;

    // Writers queue here instead of failing with SQLITE_BUSY
    conn.busy_timeout(Duration::from_secs(5))?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS youtube_api_keys (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL UNIQUE,
            encrypted_api_key TEXT NOT NULL,
            iv TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            last_validated TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    Ok(conn)
}
