use crate::db::exchange::Exchange;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[arg(long, short, help = "Show totals for one client instead of overall revenue")]
    client: Option<String>,
}

pub fn cmd(args: StatsArgs, db_path: &Path) -> Result<()> {
    let exchange = Exchange::open(db_path)?;

    match args.client {
        Some(name) => {
            View::client_stats(&name, exchange.call_count(&name), exchange.total_cost(&name));
        }
        None => {
            View::revenue(exchange.calls().len(), exchange.total_revenue());
        }
    }
    Ok(())
}
