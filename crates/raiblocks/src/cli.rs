use clap::{Parser, Subcommand};

/// raiblocks — query and control a RaiBlocks node over its JSON RPC.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Node RPC URL.
    #[arg(long, default_value = raiblocks_core::DEFAULT_ENDPOINT, env = "RAIBLOCKS_RPC_URL")]
    pub rpc_url: String,

    /// Whole-request timeout in seconds. No timeout when omitted.
    #[arg(long, env = "RAIBLOCKS_RPC_TIMEOUT")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// RAW owned and not yet received by an account.
    AccountBalance { account: String },

    /// Number of blocks in an account's chain.
    AccountBlockCount { account: String },

    /// Frontier, balance, block count and other details of an account.
    AccountInfo {
        account: String,

        /// Include the account's representative.
        #[arg(long)]
        representative: bool,

        /// Include the voting weight delegated to the account.
        #[arg(long)]
        weight: bool,

        /// Include RAW not yet received.
        #[arg(long)]
        pending: bool,
    },

    /// Create an account from the next deterministic key of a wallet.
    AccountCreate { wallet: String },

    /// Account address for a public key.
    AccountGet { key: String },

    /// Send/receive history of an account.
    AccountHistory {
        account: String,

        /// Maximum number of entries.
        #[arg(long, default_value = "10")]
        count: u64,
    },

    /// Accounts held in a wallet.
    AccountList { wallet: String },

    /// Public key of an account.
    AccountKey { account: String },

    /// Representative chosen by an account.
    AccountRepresentative { account: String },

    /// Voting weight delegated to an account.
    AccountWeight { account: String },

    /// Circulating supply in RAW.
    AvailableSupply,

    /// Checked and unchecked block counts.
    BlockCount,

    /// RPC and store versions of the node.
    Version,

    /// Shut the node down.
    Stop,

    /// Send any action with string parameters and print the raw response.
    Call {
        action: String,

        /// Request field as `key=value` (repeatable).
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected `key=value`, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{raw}`"));
    }
    Ok((key.to_owned(), value.to_owned()))
}
