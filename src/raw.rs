//! Unstable escape hatch for endpoints the typed services do not cover.
//!
//! This module is behind the `unstable-raw` feature and is not SemVer-stable.
//!
//! ```no_run
//! # #[cfg(feature = "async")]
//! # async fn demo(node: ergo_api_sdk::Client) -> Result<(), ergo_api_sdk::Error> {
//! use ergo_api_sdk::raw::Request;
//!
//! let resp = node.execute(&Request::get(["peers", "connected"])).await?;
//! println!("{}", resp.text_lossy());
//! # Ok(())
//! # }
//! ```

pub use crate::transport::request::{Request, RequestBody, Response};

pub mod transport {
    pub use crate::transport::{
        ResponseMeta, TransportBody, TransportOptions, TransportRequest, TransportResponse,
    };

    #[cfg(feature = "async")]
    pub use crate::transport::async_transport::{AsyncTransport, DynAsyncTransport, ReqwestAsync};
    #[cfg(feature = "blocking")]
    pub use crate::transport::blocking_transport::{
        BlockingTransport, DynBlockingTransport, UreqBlocking,
    };
}

pub mod middleware {
    pub use crate::transport::middleware::*;
}
