//! Walk the latest explorer blocks page by page.
//!
//! ```bash
//! cargo run --example explorer_blocks
//! ```
//!
//! Env vars:
//! - `ERGO_EXPLORER_URL` (default: `https://api.ergoplatform.com/api/v0`)
//! - `ERGO_PAGES` (default: `2`)

use ergo_api_sdk::{Client, Paging, SortDirection};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url = env_or("ERGO_EXPLORER_URL", "https://api.ergoplatform.com/api/v0");
    let pages: u32 = env_or("ERGO_PAGES", "2").parse()?;

    let client = Client::builder(&base_url)?
        .timeout(Duration::from_secs(20))
        .with_retry(2, Duration::from_millis(250))
        .build()?;

    let mut paging = Paging::new(0, 10).sort("height", SortDirection::Desc);
    for _ in 0..pages {
        let page = client.blocks().list(&paging).await?;
        for block in &page.items {
            println!(
                "{:>8}  {}  txs={:<3} miner={}",
                block.height, block.id, block.transactions_count, block.miner.name
            );
        }
        if !page.has_more(paging.offset) {
            break;
        }
        paging = paging.next();
    }
    Ok(())
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}
