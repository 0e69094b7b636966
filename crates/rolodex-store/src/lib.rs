pub mod book;
pub mod db;
pub mod error;
pub mod migrate;
pub mod paths;
pub mod repo;

pub use book::{ContactBook, LoadOutcome, SaveOutcome};

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(&self.conn)
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn kv(&self) -> repo::KvRepo<'_> {
        repo::KvRepo::new(&self.conn)
    }

    pub fn contacts(&self) -> repo::ContactsRepo<'_> {
        repo::ContactsRepo::new(&self.conn)
    }
}
