use rusqlite::{params, Connection, Result};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VIP_CLIENTS: &str = "CREATE TABLE IF NOT EXISTS vip_clients (
    name TEXT PRIMARY KEY,
    phone TEXT,
    balance REAL,
    discount REAL,
    manager TEXT
)";
const INSERT_VIP_CLIENT: &str = "INSERT INTO vip_clients (name, phone, balance, discount, manager) VALUES (?1, ?2, ?3, ?4, ?5)";
const DELETE_VIP_CLIENT: &str = "DELETE FROM vip_clients WHERE name = ?1";
const SELECT_VIP_CLIENTS: &str = "SELECT name, phone, balance, discount, manager FROM vip_clients";
pub const CLEAR_VIP_CLIENTS: &str = "DELETE FROM vip_clients";

/// A premium client account carrying a discount rate and an assigned
/// personal manager. Shares no table with regular clients; the name
/// namespaces are only joined for call referential checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VipClient {
    pub name: String,
    pub phone: String,
    pub balance: f64,
    pub discount_percent: f64,
    pub personal_manager: String,
}

impl VipClient {
    pub fn new(name: &str, phone: &str, balance: f64, discount_percent: f64, personal_manager: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: phone.to_string(),
            balance,
            discount_percent,
            personal_manager: personal_manager.to_string(),
        }
    }
}

pub fn insert(conn: &Connection, client: &VipClient) -> Result<()> {
    conn.execute(
        INSERT_VIP_CLIENT,
        params![client.name, client.phone, client.balance, client.discount_percent, client.personal_manager],
    )?;
    Ok(())
}

pub fn delete(conn: &Connection, name: &str) -> Result<usize> {
    conn.execute(DELETE_VIP_CLIENT, params![name])
}

pub fn load(conn: &Connection) -> Result<Vec<VipClient>> {
    let mut stmt = conn.prepare(SELECT_VIP_CLIENTS)?;
    let client_iter = stmt.query_map([], |row| {
        Ok(VipClient {
            name: row.get(0)?,
            phone: row.get(1)?,
            balance: row.get(2)?,
            discount_percent: row.get(3)?,
            personal_manager: row.get(4)?,
        })
    })?;

    let mut clients = Vec::new();
    for client in client_iter {
        clients.push(client?);
    }
    Ok(clients)
}
