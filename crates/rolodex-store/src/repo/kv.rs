use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension};

/// String values addressed by key, one row per key.
pub struct KvRepo<'a> {
    conn: &'a Connection,
}

impl<'a> KvRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<bool> {
        let removed = self.conn.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(removed > 0)
    }
}
