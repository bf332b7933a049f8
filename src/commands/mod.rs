pub mod backup;
pub mod call;
pub mod clear;
pub mod client;
pub mod export;
pub mod init;
pub mod restore;
pub mod stats;
pub mod tariff;
pub mod vip;

use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage tariff plans")]
    Tariff(tariff::TariffArgs),
    #[command(about = "Manage clients")]
    Client(client::ClientArgs),
    #[command(about = "Manage VIP clients")]
    Vip(vip::VipArgs),
    #[command(about = "Manage call records")]
    Call(call::CallArgs),
    #[command(about = "Per-client totals or overall revenue")]
    Stats(stats::StatsArgs),
    #[command(about = "Export records to CSV")]
    Export(export::ExportArgs),
    #[command(about = "Copy the backing store to a backup file")]
    Backup(backup::BackupArgs),
    #[command(about = "Replace the backing store from a backup file")]
    Restore(restore::RestoreArgs),
    #[command(about = "Delete all records from all tables")]
    Clear(clear::ClearArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Backing store path; overrides the configured one
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let db_path = match &cli.db {
            Some(path) => path.clone(),
            None => Config::read()?.resolve_db_path()?,
        };

        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Tariff(args) => tariff::cmd(args, &db_path),
            Commands::Client(args) => client::cmd(args, &db_path),
            Commands::Vip(args) => vip::cmd(args, &db_path),
            Commands::Call(args) => call::cmd(args, &db_path),
            Commands::Stats(args) => stats::cmd(args, &db_path),
            Commands::Export(args) => export::cmd(args, &db_path),
            Commands::Backup(args) => backup::cmd(args, &db_path),
            Commands::Restore(args) => restore::cmd(args, &db_path),
            Commands::Clear(args) => clear::cmd(args, &db_path),
        }
    }
}
