use crate::db::exchange::Exchange;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::Path;

#[derive(Debug, Args)]
pub struct ClearArgs {
    #[arg(long, short, help = "Skip the confirmation prompt")]
    yes: bool,
}

pub fn cmd(args: ClearArgs, db_path: &Path) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Delete ALL tariffs, clients, VIP clients and calls?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let mut exchange = Exchange::open(db_path)?;
    exchange.clear_all()?;
    println!("All records deleted.");
    Ok(())
}
