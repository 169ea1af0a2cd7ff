//! `halo`: command-line client for the halo chain.
//!
//! # Architecture Overview
//!
//! ```text
//!   flags / env / config.toml
//!            │
//!            ▼
//!   ┌─────────────────┐   queries    ┌──────────────┐
//!   │   ClientConfig  │─────────────▶│ RouterClient │──▶ GET /info, /balance, ...
//!   └────────┬────────┘              └──────▲───────┘
//!            │ tx commands                  │
//!            ▼                              │
//!   ┌─────────────────┐  sign   ┌───────────┴──┐
//!   │ TxParams + wallet│───────▶│  HaloClient  │──▶ POST /submit
//!   └─────────────────┘         └──────────────┘
//! ```

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use halo_client::config::{finish, load_or_default, ClientConfig};
use halo_client::genesis::RouterState;
use halo_client::observability::logging;
use halo_client::transaction::{
    parse_amount, CallParams, ProposeParams, StakeParams, TransferParams,
};
use halo_client::{HaloClient, RouterClient, Signer, TxParams};

#[derive(Parser)]
#[command(name = "halo", version)]
#[command(about = "Sign and submit halo transactions", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Router base URL
    #[arg(short, long, env = "HALO_ROUTER")]
    router: Option<String>,

    /// Wallet file: hex private key or Arweave JWK
    #[arg(short, long, env = "HALO_WALLET")]
    wallet: Option<PathBuf>,

    /// Token decimals used to scale amounts
    #[arg(long)]
    decimals: Option<u8>,

    #[arg(long)]
    log_level: Option<String>,

    /// Print the signed transaction instead of submitting it
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transfer tokens to another account
    Transfer {
        #[arg(long)]
        to: String,
        /// Human-readable amount, e.g. 1.5
        #[arg(long)]
        amount: String,
    },
    /// Stake tokens into a pool
    Stake {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        amount: String,
    },
    /// Withdraw staked tokens
    Unstake {
        #[arg(long)]
        pool: String,
        #[arg(long)]
        amount: String,
    },
    /// Join as a router
    Join {
        /// JSON file with the router state
        #[arg(long)]
        state: PathBuf,
    },
    /// Leave the router set
    Leave,
    /// Submit a governance proposal
    Propose {
        #[arg(long)]
        name: String,
        /// File containing the proposal source
        #[arg(long)]
        source: PathBuf,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Start of the active window (unix seconds)
        #[arg(long, default_value_t = 0)]
        start: i64,
        /// End of the active window (unix seconds)
        #[arg(long, default_value_t = 0)]
        end: i64,
        #[arg(long, default_value_t = 0)]
        run_times: i64,
        #[arg(long, default_value = "")]
        init_data: String,
        /// Tx actions the proposal reacts to, comma separated
        #[arg(long, value_delimiter = ',')]
        accept: Vec<String>,
    },
    /// Call a function of an accepted proposal
    Call {
        #[arg(long)]
        proposal: String,
        #[arg(long)]
        function: String,
        #[arg(long, default_value = "")]
        params: String,
    },
    /// Show chain info
    Info,
    /// Show an account's balance and stakes
    Balance { account: String },
    /// Show a transaction by hash
    Tx { hash: String },
    /// Show a proposal
    Proposal {
        id: String,
        /// Include executed transactions
        #[arg(long)]
        detail: bool,
    },
    /// Show token state
    Token,
    /// List recent transactions
    Txs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    logging::init(&config.observability.log_level);

    tracing::debug!(
        router = %config.router.url,
        decimals = config.token.decimals,
        "Configuration loaded"
    );

    let router = RouterClient::new(&config.router)?;

    let params = match cli.command {
        Commands::Info => return print_json(&router.get_json::<serde_json::Value>("/info").await?),
        Commands::Balance { account } => return print_json(&router.get_balance(&account).await?),
        Commands::Tx { hash } => return print_json(&router.get_tx(&hash).await?),
        Commands::Proposal { id, detail } => {
            return print_json(&router.get_proposal(&id, detail).await?)
        }
        Commands::Token => return print_json(&router.get_token().await?),
        Commands::Txs => return print_json(&router.get_txs().await?),

        Commands::Transfer { to, amount } => {
            let amount = parse_amount(&amount, config.token.decimals)?;
            TxParams::Transfer(TransferParams::new(&to, &amount)?)
        }
        Commands::Stake { pool, amount } => {
            let amount = parse_amount(&amount, config.token.decimals)?;
            TxParams::Stake(StakeParams::new(&pool, &amount)?)
        }
        Commands::Unstake { pool, amount } => {
            let amount = parse_amount(&amount, config.token.decimals)?;
            TxParams::Unstake(StakeParams::new(&pool, &amount)?)
        }
        Commands::Join { state } => {
            let state: RouterState = serde_json::from_str(&fs::read_to_string(&state)?)?;
            TxParams::Join(state)
        }
        Commands::Leave => TxParams::Leave,
        Commands::Propose {
            name,
            source,
            category,
            description,
            start,
            end,
            run_times,
            init_data,
            accept,
        } => TxParams::Propose(ProposeParams {
            name,
            category,
            description,
            start,
            end,
            run_times,
            source: fs::read_to_string(&source)?,
            init_data,
            only_accepted_tx_actions: accept,
        }),
        Commands::Call {
            proposal,
            function,
            params,
        } => TxParams::Call(CallParams::new(&proposal, &function, &params)?),
    };

    // Local checks run before the wallet is touched.
    params.validate()?;

    let signer = Signer::from_path_or_env(cli.wallet.as_deref())?;
    let client = HaloClient::connect(router, signer).await?;

    if cli.dry_run {
        let tx = client.prepare(&params).await?;
        tracing::info!(hash = %tx.hex_hash(), "Dry run, not submitting");
        return print_json(&tx);
    }

    let resp = client.send(&params).await?;
    println!("submit tx return: {}", resp.body);
    Ok(())
}

/// Defaults, then the config file, then flags and environment.
fn build_config(cli: &Cli) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let mut config = load_or_default(cli.config.as_deref())?;

    if let Some(url) = &cli.router {
        config.router.url = url.clone();
    }
    if let Some(decimals) = cli.decimals {
        config.token.decimals = decimals;
    }
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }

    Ok(finish(config)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_transfer() {
        let cli = Cli::try_parse_from([
            "halo",
            "--router",
            "http://10.0.0.1:8080",
            "--dry-run",
            "transfer",
            "--to",
            "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
            "--amount",
            "1.5",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert!(matches!(cli.command, Commands::Transfer { .. }));

        let config = build_config(&cli).unwrap();
        assert_eq!(config.router.url, "http://10.0.0.1:8080");
    }

    #[test]
    fn test_parse_propose_actions() {
        let cli = Cli::try_parse_from([
            "halo",
            "propose",
            "--name",
            "fees",
            "--source",
            "fees.js",
            "--run-times",
            "1",
            "--accept",
            "transfer,stake",
        ])
        .unwrap();
        match cli.command {
            Commands::Propose { accept, run_times, .. } => {
                assert_eq!(accept, vec!["transfer", "stake"]);
                assert_eq!(run_times, 1);
            }
            _ => panic!("expected propose"),
        }
    }

    #[test]
    fn test_bad_router_url_rejected() {
        let cli = Cli::try_parse_from(["halo", "--router", "ftp://x", "info"]).unwrap();
        assert!(build_config(&cli).is_err());
    }
}
