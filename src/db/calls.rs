use rusqlite::{params, Connection, Result};
use serde::{Deserialize, Serialize};

pub const SCHEMA_CALLS: &str = "CREATE TABLE IF NOT EXISTS calls (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    client_name TEXT,
    destination TEXT,
    duration INTEGER,
    cost REAL
)";
const INSERT_CALL: &str = "INSERT INTO calls (client_name, destination, duration, cost) VALUES (?1, ?2, ?3, ?4)";
const DELETE_CALL: &str = "DELETE FROM calls WHERE id = ?1";
const SELECT_CALLS: &str = "SELECT id, client_name, destination, duration, cost FROM calls";
pub const CLEAR_CALLS: &str = "DELETE FROM calls";

/// A single billed call. The id is assigned by the store on insert;
/// deletion goes through it so duplicate-valued rows stay unambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub id: Option<i64>,
    pub caller_name: String,
    pub destination: String,
    pub duration_minutes: i64,
    pub cost: f64,
}

impl Call {
    pub fn new(caller_name: &str, destination: &str, duration_minutes: i64, cost: f64) -> Self {
        Self {
            id: None,
            caller_name: caller_name.to_string(),
            destination: destination.to_string(),
            duration_minutes,
            cost,
        }
    }
}

pub fn insert(conn: &Connection, call: &Call) -> Result<i64> {
    conn.execute(INSERT_CALL, params![call.caller_name, call.destination, call.duration_minutes, call.cost])?;
    Ok(conn.last_insert_rowid())
}

pub fn delete(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute(DELETE_CALL, params![id])
}

pub fn load(conn: &Connection) -> Result<Vec<Call>> {
    let mut stmt = conn.prepare(SELECT_CALLS)?;
    let call_iter = stmt.query_map([], |row| {
        Ok(Call {
            id: row.get(0)?,
            caller_name: row.get(1)?,
            destination: row.get(2)?,
            duration_minutes: row.get(3)?,
            cost: row.get(4)?,
        })
    })?;

    let mut calls = Vec::new();
    for call in call_iter {
        calls.push(call?);
    }
    Ok(calls)
}
