use crate::db::exchange::Exchange;
use crate::libs::config::Config;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long, help = "Seed the store with demo tariffs and clients")]
    demo: bool,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    let config = Config::init()?;
    config.save()?;
    println!("Configuration saved.");

    if args.demo {
        // Seed the path that is effective after the prompt, not the one
        // resolved before it.
        let db_path = config.resolve_db_path()?;
        let mut exchange = Exchange::open(&db_path)?;
        exchange.seed_demo()?;
        println!("Demo data seeded into {}.", db_path.display());
    }
    Ok(())
}
