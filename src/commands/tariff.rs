use crate::db::exchange::Exchange;
use crate::db::tariffs::Tariff;
use crate::libs::view::View;
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Debug, Args)]
pub struct TariffArgs {
    #[command(subcommand)]
    command: TariffCommand,
}

#[derive(Debug, Subcommand)]
enum TariffCommand {
    #[command(about = "Add a tariff plan")]
    Add {
        city: String,
        price_per_minute: f64,
        connection_fee: f64,
    },
    #[command(about = "Remove the tariff for a city")]
    Remove { city: String },
    #[command(about = "Update the tariff stored under a city")]
    Update {
        city: String,
        #[arg(long, help = "Move the tariff to a new city key")]
        rename: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        fee: Option<f64>,
    },
    #[command(about = "List tariff plans")]
    List {
        #[arg(long, help = "Order by price per minute")]
        by_price: bool,
        #[arg(long, help = "Descending order")]
        desc: bool,
    },
}

pub fn cmd(args: TariffArgs, db_path: &Path) -> Result<()> {
    let mut exchange = Exchange::open(db_path)?;

    match args.command {
        TariffCommand::Add {
            city,
            price_per_minute,
            connection_fee,
        } => {
            exchange.add_tariff(Tariff::new(&city, price_per_minute, connection_fee))?;
            println!("Tariff for '{}' added.", city);
        }
        TariffCommand::Remove { city } => {
            exchange.remove_tariff(&city)?;
            println!("Tariff for '{}' removed.", city);
        }
        TariffCommand::Update { city, rename, price, fee } => {
            let current = exchange
                .find_tariff(&city)
                .ok_or_else(|| anyhow::anyhow!("no tariff for city '{}'", city))?;
            let updated = Tariff::new(
                rename.as_deref().unwrap_or(&city),
                price.unwrap_or(current.price_per_minute),
                fee.unwrap_or(current.connection_fee),
            );
            exchange.update_tariff(&city, updated)?;
            println!("Tariff for '{}' updated.", city);
        }
        TariffCommand::List { by_price, desc } => {
            if by_price {
                exchange.sort_tariffs_by_price(!desc);
            }
            View::tariffs(exchange.tariffs());
        }
    }
    Ok(())
}
