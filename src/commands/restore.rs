use crate::db::exchange::Exchange;
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct RestoreArgs {
    #[arg(help = "Backup file to restore from")]
    source: PathBuf,
}

pub fn cmd(args: RestoreArgs, db_path: &Path) -> Result<()> {
    let mut exchange = Exchange::open(db_path)?;
    exchange.restore(&args.source)?;

    println!(
        "Store restored from {}: {} tariffs, {} clients, {} VIP clients, {} calls.",
        args.source.display(),
        exchange.tariffs().len(),
        exchange.clients().len(),
        exchange.vip_clients().len(),
        exchange.calls().len()
    );
    Ok(())
}
