use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// walletctl: node and storage settings for the local wallet.
#[derive(Parser, Debug)]
#[command(name = "walletctl", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Directory holding the wallet database (env: WALLET_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Remote wallet service URL; the local database is used if unset
    /// (env: WALLET_SERVICE_URL)
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the node configuration of the active wallet
    Show(ShowArgs),

    /// Change node configuration fields and save
    Set(SetArgs),

    /// Edit the node configuration interactively
    Edit,

    /// Delete all local wallet data (asks for confirmation)
    ClearStorage,

    /// Create a wallet with the default node configuration and make it active
    Create(CreateArgs),
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output as JSON instead of TSV
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `set` subcommand. Omitted fields keep their value.
#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Node URL
    #[arg(long)]
    pub node_url: Option<String>,

    /// Chain indexing URL
    #[arg(long)]
    pub indexing_url: Option<String>,

    /// Chain ID
    #[arg(long)]
    pub chain_id: Option<String>,

    /// Network fee (integer, at least 1)
    #[arg(long)]
    pub network_fee: Option<String>,

    /// Gas limit (integer, at least 1)
    #[arg(long)]
    pub gas_limit: Option<String>,
}

/// Arguments for the `create` subcommand.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Wallet name
    pub name: String,

    /// Wallet address
    #[arg(long, default_value = "")]
    pub address: String,
}
