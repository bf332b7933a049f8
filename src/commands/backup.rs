use crate::db::exchange::Exchange;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct BackupArgs {
    #[arg(help = "Destination file; defaults to a timestamped name")]
    destination: Option<PathBuf>,
}

pub fn cmd(args: BackupArgs, db_path: &Path) -> Result<()> {
    let exchange = Exchange::open(db_path)?;
    let destination = args
        .destination
        .unwrap_or_else(|| PathBuf::from(format!("telebill-backup-{}.db", Local::now().format("%Y%m%d-%H%M%S"))));

    let bytes = exchange.backup(&destination)?;
    println!("Backup written to {} ({} bytes).", destination.display(), bytes);
    Ok(())
}
