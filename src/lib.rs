//! # Telebill - telephony billing record keeper
//!
//! A command-line record keeper for a small telephony billing system:
//! tariff plans, regular and VIP clients, and call records persisted to a
//! SQLite file with an in-memory mirror for fast reads.
//!
//! ## Features
//!
//! - **Entity Management**: Add, update, remove and list tariffs, clients,
//!   VIP clients and call records
//! - **Referential Checks**: A call is only recorded for a known caller
//! - **Statistics**: Per-client totals, call counts and overall revenue
//! - **Sorting**: In-memory ordering by price, name, discount or duration
//! - **Backup/Restore**: File-level snapshots of the backing store
//! - **Data Export**: Call ledger and per-client summaries as CSV
//!
//! ## Usage
//!
//! ```rust,no_run
//! use telebill::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
