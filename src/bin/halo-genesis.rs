//! `halo-genesis`: posts the halo genesis payload through everPay.

use std::path::PathBuf;

use clap::Parser;

use halo_client::config::{finish, load_or_default, ClientConfig};
use halo_client::everpay::EverpayClient;
use halo_client::genesis::{self, build_genesis_tx, load_params, submit_genesis};
use halo_client::observability::logging;
use halo_client::Signer;

#[derive(Parser)]
#[command(name = "halo-genesis", version)]
#[command(about = "Submit the halo genesis transaction", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// everPay API base URL
    #[arg(long, env = "HALO_PAY")]
    pay: Option<String>,

    /// Wallet file: hex private key or Arweave JWK
    #[arg(short, long, env = "HALO_WALLET")]
    wallet: Option<PathBuf>,

    /// Receiver of the genesis transfer
    #[arg(long)]
    halo_address: Option<String>,

    /// everPay token tag (or symbol) to transfer
    #[arg(long)]
    token: Option<String>,

    /// Genesis params JSON; defaults to the embedded mainnet table
    #[arg(long)]
    params: Option<PathBuf>,

    /// Validate the params and exit
    #[arg(long)]
    check: bool,

    /// Print the signed everPay transaction instead of posting it
    #[arg(long)]
    dry_run: bool,

    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    logging::init(&config.observability.log_level);

    let params = load_params(cli.params.as_deref())?;

    if cli.check {
        genesis::validate(&params)?;
        println!(
            "genesis params ok: dapp={} chainID={} routers={} stakers={}",
            params.dapp,
            params.chain_id,
            params.routers.len(),
            params.token_stake.len()
        );
        return Ok(());
    }

    let signer = Signer::from_path_or_env(cli.wallet.as_deref())?;
    let everpay = EverpayClient::new(&config.everpay)?;
    let token = &config.everpay.token_tag;
    let halo_address = &config.genesis.halo_address;

    if cli.dry_run {
        let tx = build_genesis_tx(&everpay, &signer, &params, token, halo_address).await?;
        println!("{}", serde_json::to_string_pretty(&tx)?);
        return Ok(());
    }

    let resp = submit_genesis(&everpay, &signer, &params, token, halo_address).await?;
    println!("{} {}", resp.ever_hash, resp.body);
    Ok(())
}

fn build_config(cli: &Cli) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let mut config = load_or_default(cli.config.as_deref())?;

    if let Some(url) = &cli.pay {
        config.everpay.url = url.clone();
    }
    if let Some(address) = &cli.halo_address {
        config.genesis.halo_address = address.clone();
    }
    if let Some(token) = &cli.token {
        config.everpay.token_tag = token.clone();
    }
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }

    Ok(finish(config)?)
}
