//! Top-level argument structures

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{tenpista::TenpistaCommands, tx::TxCommands};

#[derive(Parser, Debug)]
#[command(
    name = "tat",
    version,
    about = "Tenpo Admin Toolkit - manage tenpistas and their transactions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage tenpistas
    #[command(subcommand)]
    Tenpista(TenpistaCommands),

    /// Manage transactions
    #[command(subcommand)]
    Tx(TxCommands),
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Base URL of the Tenpo API
    #[arg(long, global = true, env = "TENPO_API_URL")]
    pub api_url: Option<String>,

    /// Output format for list and show commands
    #[arg(long, short = 'f', global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Bypass the collection cache and refetch
    #[arg(long, global = true)]
    pub refresh: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
