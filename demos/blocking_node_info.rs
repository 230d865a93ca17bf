//! Blocking node summary.
//!
//! Build with:
//! ```bash
//! cargo run --no-default-features --features blocking,rustls --example blocking_node_info
//! ```
//!
//! Env vars:
//! - `ERGO_NODE_URL` (default: `http://127.0.0.1:9053`)
//! - `ERGO_HEIGHT` (optional; lists block ids at that height)

use ergo_api_sdk::BlockingClient;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let base_url = env_or("ERGO_NODE_URL", "http://127.0.0.1:9053");

    let client = BlockingClient::builder(&base_url)?
        .no_system_proxy()
        .timeout(Duration::from_secs(20))
        .with_retry(2, Duration::from_millis(200))
        .build()?;

    let info = client.info().info()?;
    println!("node:   {} ({})", info.name, info.app_version);
    println!("state:  {}", info.state_type);
    println!("peers:  {}", info.peers_count);
    println!("mempool: {}", info.unconfirmed_count);

    let height = match std::env::var("ERGO_HEIGHT") {
        Ok(raw) => Some(raw.parse::<u32>()?),
        Err(_) => info.full_height,
    };
    if let Some(height) = height {
        for id in client.blocks().at_height(height)? {
            println!("block at {height}: {id}");
        }
    }
    Ok(())
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}
