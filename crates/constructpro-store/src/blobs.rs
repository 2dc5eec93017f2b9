//! Raw blob access over the panel_blobs table
//!
//! Keys and values mirror the original key-value layout: one JSON blob
//! per collection under keys like `constructpro_banners`.

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension};

/// Read a blob by key
pub fn read_blob(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM panel_blobs WHERE key = ?",
        [key],
        |row| row.get(0),
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Write a blob, replacing any previous value under the key
pub fn write_blob(conn: &Connection, key: &str, value: &str) -> Result<()> {
    let now = chrono::Utc::now().timestamp();
    conn.execute(
        "INSERT INTO panel_blobs (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
        rusqlite::params![key, value, now],
    )
    .map_err(from_rusqlite)?;
    Ok(())
}

/// Delete a blob by key, returning whether a row was removed
pub fn delete_blob(conn: &Connection, key: &str) -> Result<bool> {
    let removed = conn
        .execute("DELETE FROM panel_blobs WHERE key = ?", [key])
        .map_err(from_rusqlite)?;
    Ok(removed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::apply_migrations;

    fn setup() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_missing_key_reads_none() {
        let conn = setup();
        assert!(read_blob(&conn, "constructpro_banners").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let conn = setup();
        write_blob(&conn, "constructpro_banners", "[]").unwrap();
        assert_eq!(
            read_blob(&conn, "constructpro_banners").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_write_replaces() {
        let conn = setup();
        write_blob(&conn, "k", "first").unwrap();
        write_blob(&conn, "k", "second").unwrap();
        assert_eq!(read_blob(&conn, "k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_delete() {
        let conn = setup();
        write_blob(&conn, "k", "v").unwrap();
        assert!(delete_blob(&conn, "k").unwrap());
        assert!(!delete_blob(&conn, "k").unwrap());
        assert!(read_blob(&conn, "k").unwrap().is_none());
    }
}
