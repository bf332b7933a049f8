//! Database layer for the telebill application.
//!
//! A persistence layer built on SQLite with an in-memory mirror: the four
//! entity tables live in one backing file, and every collection is cached
//! in insertion order for fast reads. Writes go to the store first and the
//! cache second, so after any successful mutation the cache equals
//! committed store state.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use telebill::db::clients::Client;
//! use telebill::db::exchange::Exchange;
//!
//! let mut exchange = Exchange::open("billing.db")?;
//! exchange.add_client(Client::new("Ivanov", "+79001234567", 100.0))?;
//! let revenue = exchange.total_revenue();
//! # Ok::<(), telebill::libs::error::StoreError>(())
//! ```

/// Connection handle and idempotent schema creation.
pub mod db;

/// Cache-backed facade: CRUD, referential checks, statistics, sorting,
/// backup/restore and clear-all.
pub mod exchange;

/// Tariff plans keyed by destination city.
pub mod tariffs;

/// Regular client accounts keyed by name.
pub mod clients;

/// VIP client accounts with discount and personal manager.
pub mod vip_clients;

/// Call records with a store-assigned synthetic id.
pub mod calls;
