use crate::db::exchange::Exchange;
use crate::libs::export::{ExportData, Exporter};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, help = "Export per-client totals instead of the raw call ledger")]
    summary: bool,
    #[arg(long, short, help = "Output file; defaults to a timestamped name")]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs, db_path: &Path) -> Result<()> {
    let exchange = Exchange::open(db_path)?;
    let data = if args.summary { ExportData::Summary } else { ExportData::Calls };

    let path = Exporter::new(args.output).export(&exchange, data)?;
    println!("Exported to {}.", path.display());
    Ok(())
}
