use rusqlite::{params, Connection, Result};
use serde::{Deserialize, Serialize};

pub const SCHEMA_CLIENTS: &str = "CREATE TABLE IF NOT EXISTS clients (
    name TEXT PRIMARY KEY,
    phone TEXT,
    balance REAL
)";
const INSERT_CLIENT: &str = "INSERT INTO clients (name, phone, balance) VALUES (?1, ?2, ?3)";
const DELETE_CLIENT: &str = "DELETE FROM clients WHERE name = ?1";
const SELECT_CLIENTS: &str = "SELECT name, phone, balance FROM clients";
pub const CLEAR_CLIENTS: &str = "DELETE FROM clients";

/// A regular client account, keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub phone: String,
    pub balance: f64,
}

impl Client {
    pub fn new(name: &str, phone: &str, balance: f64) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            balance,
        }
    }
}

pub fn insert(conn: &Connection, client: &Client) -> Result<()> {
    conn.execute(INSERT_CLIENT, params![client.name, client.phone, client.balance])?;
    Ok(())
}

pub fn delete(conn: &Connection, name: &str) -> Result<usize> {
    conn.execute(DELETE_CLIENT, params![name])
}

pub fn load(conn: &Connection) -> Result<Vec<Client>> {
    let mut stmt = conn.prepare(SELECT_CLIENTS)?;
    let client_iter = stmt.query_map([], |row| {
        Ok(Client {
            name: row.get(0)?,
            phone: row.get(1)?,
            balance: row.get(2)?,
        })
    })?;

    let mut clients = Vec::new();
    for client in client_iter {
        clients.push(client?);
    }
    Ok(clients)
}
