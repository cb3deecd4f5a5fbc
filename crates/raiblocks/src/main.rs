mod cli;

use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};
use serde::Serialize;
use serde_json::{Map, Value};

use raiblocks_core::rpc::{AccountInfoOptions, HttpRpcClient, NodeRpc};
use raiblocks_core::{Account, PublicKey, Wallet};

use cli::Command;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so stdout carries only the JSON result.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let mut builder = reqwest::Client::builder();
    if let Some(secs) = args.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let connection = builder.build().context("build HTTP client")?;
    let rpc = HttpRpcClient::with_client(Some(&args.rpc_url), connection);

    tracing::debug!(rpc_url = %rpc.endpoint(), "sending request");
    let output = run(&rpc, args.command).await.map_err(|err| {
        let message = format_rpc_error(rpc.endpoint(), &format!("{err:#}"));
        eyre!(message).wrap_err("while talking to the node RPC")
    })?;

    println!("{output}");
    Ok(())
}

/// Execute one subcommand and render its result as pretty JSON.
async fn run(rpc: &dyn NodeRpc, command: Command) -> eyre::Result<String> {
    match command {
        Command::AccountBalance { account } => {
            render(&rpc.account_balance(&Account::from(account)).await?)
        }
        Command::AccountBlockCount { account } => {
            render(&rpc.account_block_count(&Account::from(account)).await?)
        }
        Command::AccountInfo {
            account,
            representative,
            weight,
            pending,
        } => {
            let options = AccountInfoOptions {
                representative,
                weight,
                pending,
            };
            render(&rpc.account_info(&Account::from(account), options).await?)
        }
        Command::AccountCreate { wallet } => {
            render(&rpc.account_create(&Wallet::from(wallet)).await?)
        }
        Command::AccountGet { key } => render(&rpc.account_get(&PublicKey::from(key)).await?),
        Command::AccountHistory { account, count } => {
            render(&rpc.account_history(&Account::from(account), count).await?)
        }
        Command::AccountList { wallet } => {
            render(&rpc.account_list(&Wallet::from(wallet)).await?)
        }
        Command::AccountKey { account } => {
            render(&rpc.account_key(&Account::from(account)).await?)
        }
        Command::AccountRepresentative { account } => {
            render(&rpc.account_representative(&Account::from(account)).await?)
        }
        Command::AccountWeight { account } => {
            render(&rpc.account_weight(&Account::from(account)).await?)
        }
        Command::AvailableSupply => render(&rpc.available_supply().await?),
        Command::BlockCount => render(&rpc.block_count().await?),
        Command::Version => render(&rpc.version().await?),
        Command::Stop => render(&rpc.stop().await?),
        Command::Call { action, params } => {
            let params: Map<String, Value> = params
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect();
            render(&rpc.call(&action, params).await?)
        }
    }
}

// RAW amounts exceed u64, so results are written straight to a string
// rather than through `serde_json::Value`.
fn render<T: Serialize + ?Sized>(value: &T) -> eyre::Result<String> {
    serde_json::to_string_pretty(value).context("encode result as JSON")
}

fn format_rpc_error(rpc_url: &str, source_error: &str) -> String {
    let mut lines = vec![
        format!("request to RPC endpoint `{rpc_url}` failed"),
        format!("error: {source_error}"),
    ];

    if source_error.contains("dns error") || source_error.contains("failed to lookup address") {
        lines.push(
            "hint: hostname resolution failed; verify the endpoint hostname and your DNS/network"
                .into(),
        );
    } else if source_error.contains("Connection refused") {
        lines.push(
            "hint: nothing is listening there; check that the node runs with rpc_enable and the port matches"
                .into(),
        );
    } else if source_error.contains("timed out") {
        lines.push("hint: the node did not answer in time; raise --timeout-secs".into());
    } else if source_error.contains("builder error") {
        lines.push("hint: the RPC URL could not be parsed; use a full http:// URL".into());
    } else if source_error.contains("expected value") || source_error.contains("invalid type") {
        lines.push(
            "hint: the endpoint did not answer with a JSON object; verify it is a node RPC port"
                .into(),
        );
    }

    lines.join("\n")
}
