//! Shared infrastructure: configuration, error types, data directory
//! resolution, table rendering and CSV export.

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod view;
