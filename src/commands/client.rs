use crate::db::clients::Client;
use crate::db::exchange::Exchange;
use crate::libs::view::View;
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Debug, Args)]
pub struct ClientArgs {
    #[command(subcommand)]
    command: ClientCommand,
}

#[derive(Debug, Subcommand)]
enum ClientCommand {
    #[command(about = "Add a client")]
    Add { name: String, phone: String, balance: f64 },
    #[command(about = "Remove a client by name")]
    Remove { name: String },
    #[command(about = "Update the client stored under a name")]
    Update {
        name: String,
        #[arg(long, help = "Move the client to a new name key")]
        rename: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        balance: Option<f64>,
    },
    #[command(about = "List clients")]
    List {
        #[arg(long, help = "Order by name")]
        by_name: bool,
        #[arg(long, help = "Descending order")]
        desc: bool,
    },
}

pub fn cmd(args: ClientArgs, db_path: &Path) -> Result<()> {
    let mut exchange = Exchange::open(db_path)?;

    match args.command {
        ClientCommand::Add { name, phone, balance } => {
            exchange.add_client(Client::new(&name, &phone, balance))?;
            println!("Client '{}' added.", name);
        }
        ClientCommand::Remove { name } => {
            exchange.remove_client(&name)?;
            println!("Client '{}' removed.", name);
        }
        ClientCommand::Update { name, rename, phone, balance } => {
            let current = exchange
                .clients()
                .iter()
                .find(|c| c.name == name)
                .ok_or_else(|| anyhow::anyhow!("no client named '{}'", name))?;
            let updated = Client::new(
                rename.as_deref().unwrap_or(&name),
                phone.as_deref().unwrap_or(&current.phone),
                balance.unwrap_or(current.balance),
            );
            exchange.update_client(&name, updated)?;
            println!("Client '{}' updated.", name);
        }
        ClientCommand::List { by_name, desc } => {
            if by_name {
                exchange.sort_clients_by_name(!desc);
            }
            View::clients(exchange.clients());
        }
    }
    Ok(())
}
