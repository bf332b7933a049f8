use rusqlite::{params, Connection, Result};
use serde::{Deserialize, Serialize};

pub const SCHEMA_TARIFFS: &str = "CREATE TABLE IF NOT EXISTS tariffs (
    city TEXT PRIMARY KEY,
    price REAL,
    fee REAL
)";
const INSERT_TARIFF: &str = "INSERT INTO tariffs (city, price, fee) VALUES (?1, ?2, ?3)";
const DELETE_TARIFF: &str = "DELETE FROM tariffs WHERE city = ?1";
const SELECT_TARIFFS: &str = "SELECT city, price, fee FROM tariffs";
pub const CLEAR_TARIFFS: &str = "DELETE FROM tariffs";

/// A tariff plan, keyed by destination city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    pub city: String,
    pub price_per_minute: f64,
    pub connection_fee: f64,
}

impl Tariff {
    pub fn new(city: &str, price_per_minute: f64, connection_fee: f64) -> Self {
        Self {
            city: city.to_string(),
            price_per_minute,
            connection_fee,
        }
    }
}

pub fn insert(conn: &Connection, tariff: &Tariff) -> Result<()> {
    conn.execute(INSERT_TARIFF, params![tariff.city, tariff.price_per_minute, tariff.connection_fee])?;
    Ok(())
}

pub fn delete(conn: &Connection, city: &str) -> Result<usize> {
    conn.execute(DELETE_TARIFF, params![city])
}

pub fn load(conn: &Connection) -> Result<Vec<Tariff>> {
    let mut stmt = conn.prepare(SELECT_TARIFFS)?;
    let tariff_iter = stmt.query_map([], |row| {
        Ok(Tariff {
            city: row.get(0)?,
            price_per_minute: row.get(1)?,
            connection_fee: row.get(2)?,
        })
    })?;

    let mut tariffs = Vec::new();
    for tariff in tariff_iter {
        tariffs.push(tariff?);
    }
    Ok(tariffs)
}
