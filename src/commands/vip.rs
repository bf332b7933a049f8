use crate::db::exchange::Exchange;
use crate::db::vip_clients::VipClient;
use crate::libs::view::View;
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Debug, Args)]
pub struct VipArgs {
    #[command(subcommand)]
    command: VipCommand,
}

#[derive(Debug, Subcommand)]
enum VipCommand {
    #[command(about = "Add a VIP client")]
    Add {
        name: String,
        phone: String,
        balance: f64,
        discount_percent: f64,
        personal_manager: String,
    },
    #[command(about = "Remove a VIP client by name")]
    Remove { name: String },
    #[command(about = "Update the VIP client stored under a name")]
    Update {
        name: String,
        #[arg(long, help = "Move the VIP client to a new name key")]
        rename: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        balance: Option<f64>,
        #[arg(long)]
        discount: Option<f64>,
        #[arg(long)]
        manager: Option<String>,
    },
    #[command(about = "List VIP clients")]
    List {
        #[arg(long, help = "Order by discount rate")]
        by_discount: bool,
        #[arg(long, help = "Descending order")]
        desc: bool,
    },
}

pub fn cmd(args: VipArgs, db_path: &Path) -> Result<()> {
    let mut exchange = Exchange::open(db_path)?;

    match args.command {
        VipCommand::Add {
            name,
            phone,
            balance,
            discount_percent,
            personal_manager,
        } => {
            exchange.add_vip_client(VipClient::new(&name, &phone, balance, discount_percent, &personal_manager))?;
            println!("VIP client '{}' added.", name);
        }
        VipCommand::Remove { name } => {
            exchange.remove_vip_client(&name)?;
            println!("VIP client '{}' removed.", name);
        }
        VipCommand::Update {
            name,
            rename,
            phone,
            balance,
            discount,
            manager,
        } => {
            let current = exchange
                .vip_clients()
                .iter()
                .find(|c| c.name == name)
                .ok_or_else(|| anyhow::anyhow!("no VIP client named '{}'", name))?;
            let updated = VipClient::new(
                rename.as_deref().unwrap_or(&name),
                phone.as_deref().unwrap_or(&current.phone),
                balance.unwrap_or(current.balance),
                discount.unwrap_or(current.discount_percent),
                manager.as_deref().unwrap_or(&current.personal_manager),
            );
            exchange.update_vip_client(&name, updated)?;
            println!("VIP client '{}' updated.", name);
        }
        VipCommand::List { by_discount, desc } => {
            if by_discount {
                exchange.sort_vip_clients_by_discount(!desc);
            }
            View::vip_clients(exchange.vip_clients());
        }
    }
    Ok(())
}
