//! Key-value repository over the `kv_store` table.

use rusqlite::{params, OptionalExtension};

use super::{Database, DatabaseError};

/// Returns the value stored under `key`, if any.
pub fn get(db: &Database, key: &str) -> Result<Option<String>, DatabaseError> {
    db.with_conn(|conn| {
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    })
}

/// Writes `value` under `key`, replacing any previous value.
pub fn set(db: &Database, key: &str, value: &str) -> Result<(), DatabaseError> {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(get(&db, "jobs").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let db = Database::open_in_memory().unwrap();
        set(&db, "jobs", "[]").unwrap();
        assert_eq!(get(&db, "jobs").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_overwrites() {
        let db = Database::open_in_memory().unwrap();
        set(&db, "jobs", "[1]").unwrap();
        set(&db, "jobs", "[2]").unwrap();
        assert_eq!(get(&db, "jobs").unwrap().as_deref(), Some("[2]"));

        let rows: u32 = db
            .with_conn(|conn| {
                Ok(conn.query_row("SELECT COUNT(*) FROM kv_store", [], |r| r.get(0))?)
            })
            .unwrap();
        assert_eq!(rows, 1);
    }
}
