use crate::db::calls::Call;
use crate::db::exchange::Exchange;
use crate::libs::view::View;
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Debug, Args)]
pub struct CallArgs {
    #[command(subcommand)]
    command: CallCommand,
}

#[derive(Debug, Subcommand)]
enum CallCommand {
    #[command(about = "Record a call; the caller must be a known client or VIP client")]
    Add {
        caller: String,
        destination: String,
        duration_minutes: i64,
        cost: f64,
    },
    #[command(about = "Remove a call record by id")]
    Remove { id: i64 },
    #[command(about = "List call records")]
    List {
        #[arg(long, help = "Order by duration")]
        by_duration: bool,
        #[arg(long, help = "Descending order")]
        desc: bool,
    },
}

pub fn cmd(args: CallArgs, db_path: &Path) -> Result<()> {
    let mut exchange = Exchange::open(db_path)?;

    match args.command {
        CallCommand::Add {
            caller,
            destination,
            duration_minutes,
            cost,
        } => {
            let id = exchange.add_call(Call::new(&caller, &destination, duration_minutes, cost))?;
            println!("Call #{} recorded for '{}'.", id, caller);
        }
        CallCommand::Remove { id } => {
            exchange.remove_call(id)?;
            println!("Call #{} removed.", id);
        }
        CallCommand::List { by_duration, desc } => {
            if by_duration {
                exchange.sort_calls_by_duration(!desc);
            }
            View::calls(exchange.calls());
        }
    }
    Ok(())
}
