//! CSV export of the billing records.
//!
//! Two data sets can be exported: the raw call ledger, one row per call,
//! and a per-client summary with call counts and totals. The output path
//! defaults to a timestamped file name in the current directory so
//! repeated exports never clobber each other.

use crate::db::exchange::Exchange;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::path::PathBuf;

/// Which data set to write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportData {
    /// One row per recorded call.
    Calls,
    /// One row per known client or VIP client: call count and total cost.
    Summary,
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    name: &'a str,
    vip: bool,
    calls: usize,
    total_cost: f64,
}

pub struct Exporter {
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }

    /// Writes the chosen data set and returns the path it went to.
    pub fn export(&self, exchange: &Exchange, data: ExportData) -> Result<PathBuf> {
        let path = match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(Self::default_file_name(data)),
        };

        let mut writer = csv::Writer::from_path(&path)?;
        match data {
            ExportData::Calls => {
                for call in exchange.calls() {
                    writer.serialize(call)?;
                }
            }
            ExportData::Summary => {
                for client in exchange.clients() {
                    writer.serialize(SummaryRow {
                        name: &client.name,
                        vip: false,
                        calls: exchange.call_count(&client.name),
                        total_cost: exchange.total_cost(&client.name),
                    })?;
                }
                for client in exchange.vip_clients() {
                    writer.serialize(SummaryRow {
                        name: &client.name,
                        vip: true,
                        calls: exchange.call_count(&client.name),
                        total_cost: exchange.total_cost(&client.name),
                    })?;
                }
            }
        }
        writer.flush()?;

        Ok(path)
    }

    fn default_file_name(data: ExportData) -> String {
        let stem = match data {
            ExportData::Calls => "calls",
            ExportData::Summary => "summary",
        };
        format!("telebill-{}-{}.csv", stem, Local::now().format("%Y%m%d-%H%M%S"))
    }
}
