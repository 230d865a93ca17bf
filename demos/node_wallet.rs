//! Check (and optionally unlock) a node wallet.
//!
//! ```bash
//! cargo run --example node_wallet
//! ```
//!
//! Env vars:
//! - `ERGO_NODE_URL` (default: `http://127.0.0.1:9053`)
//! - `ERGO_API_KEY` (required by every wallet endpoint)
//! - `ERGO_WALLET_PASS` (optional; unlocks the wallet when set)

use ergo_api_sdk::{Client, UnlockWalletRequest};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url = env_or("ERGO_NODE_URL", "http://127.0.0.1:9053");

    let mut builder = Client::builder(&base_url)?
        .no_system_proxy()
        .timeout(Duration::from_secs(30));
    if let Some(key) = env_opt("ERGO_API_KEY") {
        builder = builder.api_key(key);
    }
    let client = builder.build()?;

    let info = client.info().info().await?;
    println!(
        "{} {} full={:?} headers={:?}",
        info.name, info.app_version, info.full_height, info.headers_height
    );

    let mut status = client.wallet().status().await?;
    if !status.is_unlocked
        && let Some(pass) = env_opt("ERGO_WALLET_PASS")
    {
        client.wallet().unlock(&UnlockWalletRequest::new(pass)).await?;
        status = client.wallet().status().await?;
    }

    println!(
        "wallet: initialized={} unlocked={} height={}",
        status.is_initialized, status.is_unlocked, status.wallet_height
    );
    if let Some(address) = &status.change_address {
        println!("change address: {address}");
    }
    Ok(())
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
