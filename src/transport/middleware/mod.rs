//! Transport wrappers layered over the base HTTP transport.
//!
//! Order at build time: hook (innermost), then retry.

pub mod retry;

#[cfg(feature = "async")]
pub mod retry_async;
#[cfg(feature = "blocking")]
pub mod retry_blocking;

pub mod hook;

#[cfg(feature = "async")]
pub use retry_async::RetryAsync;
#[cfg(feature = "blocking")]
pub use retry_blocking::RetryBlocking;

pub use retry::RetryConfig;

pub use hook::Hooked;
