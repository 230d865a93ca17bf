//! HTTP transport layers.
//!
//! `ReqwestAsync` and `UreqBlocking` are configured from the same
//! [`TransportOptions`]. Middleware (retry, request hook) wraps a transport and
//! is itself a transport.

#[cfg(feature = "async")]
pub mod async_transport;
#[cfg(feature = "blocking")]
pub mod blocking_transport;
#[cfg(feature = "metrics")]
pub(crate) mod metrics;
pub mod middleware;
pub mod request;

use http::{HeaderMap, HeaderValue, Method, StatusCode};
use std::time::Duration;
use url::Url;

/// Connection settings shared by both HTTP backends.
#[derive(Clone, Debug)]
pub struct TransportOptions {
    pub user_agent: String,
    /// Upper bound for a whole request, unless the request overrides it.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Maximum idle time while reading the response.
    pub read_timeout: Option<Duration>,
    /// Accept invalid TLS certificates (self-signed node setups).
    pub accept_invalid_certs: bool,
    /// Ignore `HTTP_PROXY`/`HTTPS_PROXY` and friends.
    pub no_proxy: bool,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            read_timeout: None,
            accept_invalid_certs: false,
            no_proxy: false,
        }
    }
}

/// Fully resolved request handed to a transport.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    /// Absolute URL without query; `query` is appended by the transport.
    pub url: Url,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: Option<TransportBody>,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct TransportBody {
    pub bytes: Vec<u8>,
    pub content_type: Option<HeaderValue>,
}

#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    pub meta: ResponseMeta,
}

/// Bookkeeping filled in by middleware.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResponseMeta {
    /// Attempts replayed by the retry layer.
    pub retries: usize,
}
