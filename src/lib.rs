//! Ergo-API-SDK – typed clients for the Ergo explorer and node REST APIs.
//!
//! Pick **async** (`reqwest`) and/or **blocking** (`ureq`) at compile time:
//!
//! ```no_run
//! # #[cfg(feature = "async")]
//! # async fn demo() -> Result<(), ergo_api_sdk::Error> {
//! use ergo_api_sdk::{Client, Paging};
//!
//! let explorer = Client::new("https://api.ergoplatform.com/api/v0")?;
//! let page = explorer.blocks().list(&Paging::default()).await?;
//! for block in page.items {
//!     println!("{} mined by {}", block.height, block.miner.name);
//! }
//! # Ok(())
//! # }
//! ```

// compile-time guard: enable at least one client kind.
#[cfg(not(any(feature = "async", feature = "blocking")))]
compile_error!("Enable at least one of: `async` (default) or `blocking`.");

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod request_hook;
pub mod types;

#[cfg(feature = "unstable-raw")]
pub mod raw;

mod transport;
mod util;

pub use auth::{Auth, SecretString};
#[cfg(feature = "async")]
pub use client::{Client, ClientBuilder};
#[cfg(feature = "blocking")]
pub use client::{BlockingClient, BlockingClientBuilder};
pub use error::{BodySnippetConfig, Error, ErrorKind, HttpError, Result, TransportErrorKind};
pub use request_hook::{RequestHook, RequestHookContext};
pub use transport::middleware::RetryConfig;
pub use types::*;
