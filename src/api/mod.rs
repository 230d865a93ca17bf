//! High-level Ergo API services.
//!
//! Explorer and node share one client type; point it at the right base URL:
//! - explorer: `Client::blocks()`, `Client::stats()`
//! - node: `Client::info()`, `Client::wallet()`
//!
//! Every service has a blocking twin on `BlockingClient`.

pub mod blocks;
pub mod info;
pub mod stats;
pub mod wallet;

pub use blocks::*;
pub use info::*;
pub use stats::*;
pub use wallet::*;
