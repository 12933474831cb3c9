use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fetch bank accounts from the Bitwave APIM gateway.
#[derive(Parser, Debug)]
pub struct Args {
    /// YAML file overriding the built-in endpoints and OIDC parameters
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Bearer token to send to the gateway. Prompted for if not given.
    #[clap(long, env = "BITWAVE_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Override the accounts endpoint
    #[clap(long, global = true)]
    pub accounts_url: Option<String>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the list of accounts and print them with their balances
    Accounts,

    /// Print the effective configuration
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}
