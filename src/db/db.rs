use crate::db::{calls, clients, tariffs, vip_clients};
use rusqlite::{Connection, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DB_FILE_NAME: &str = "telebill.db";

/// Owns the single connection handle to the backing file.
pub struct Db {
    pub conn: Connection,
    pub path: PathBuf,
}

impl Db {
    /// Opens the backing file and ensures the four tables exist.
    pub fn open(path: &Path) -> Result<Db> {
        let conn = Connection::open(path)?;
        Self::ensure_schema(&conn)?;
        debug!(path = %path.display(), "database opened");

        Ok(Db {
            conn,
            path: path.to_path_buf(),
        })
    }

    // Idempotent: every statement is CREATE TABLE IF NOT EXISTS.
    fn ensure_schema(conn: &Connection) -> Result<()> {
        conn.execute(tariffs::SCHEMA_TARIFFS, [])?;
        conn.execute(clients::SCHEMA_CLIENTS, [])?;
        conn.execute(vip_clients::SCHEMA_VIP_CLIENTS, [])?;
        conn.execute(calls::SCHEMA_CALLS, [])?;
        Ok(())
    }
}
