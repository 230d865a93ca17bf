//! Error types shared by every client and service.

use http::{Method, StatusCode};
use std::{error::Error as StdError, fmt, time::Duration};
use thiserror::Error;
use url::Url;

pub type Result<T> = std::result::Result<T, Error>;

/// How much of an error response body is kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodySnippetConfig {
    pub enabled: bool,
    /// Cut at a UTF-8 boundary at or below this many bytes.
    pub max_bytes: usize,
}

impl BodySnippetConfig {
    pub const DEFAULT_MAX_BYTES: usize = 4096;

    /// Never keep response bodies.
    pub const DISABLED: Self = Self {
        enabled: false,
        max_bytes: 0,
    };
}

impl Default for BodySnippetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_bytes: Self::DEFAULT_MAX_BYTES,
        }
    }
}

/// Coarse classification of [`Error`], stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// `401`/`403`: missing or wrong `api_key`.
    Auth,
    /// `400`: rejected by the node, e.g. a locked wallet.
    BadRequest,
    NotFound,
    RateLimited,
    /// Any other non-2xx status.
    Api,
    Transport,
    Decode,
    InvalidConfig,
}

impl ErrorKind {
    /// Kind reported for an error response with `status`.
    #[must_use]
    pub fn for_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Auth,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            _ => Self::Api,
        }
    }
}

/// What went wrong below HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TransportErrorKind {
    /// The request or a read exceeded its timeout.
    Timeout,
    /// DNS, refused or reset connections.
    Connect,
    Other,
}

/// An error status answered by the explorer or node.
#[derive(Debug, Clone)]
pub struct HttpError {
    pub status: StatusCode,
    pub method: Method,
    /// Request URL without credentials, query or fragment.
    pub url: Box<Url>,
    /// Most specific human-readable text found in the body.
    pub message: Option<Box<str>>,
    /// The node's `reason` field, when the body was a node error.
    pub reason: Option<Box<str>>,
    pub request_id: Option<Box<str>>,
    pub body_snippet: Option<Box<str>>,
}

impl HttpError {
    #[must_use]
    pub fn path(&self) -> &str {
        self.url.path()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} ({} {})", self.status, self.method, self.path())?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " [request-id: {request_id}]")?;
        }
        Ok(())
    }
}

type BoxError = Box<dyn StdError + Send + Sync>;

/// All errors returned by the SDK.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("{0}")]
    Auth(Box<HttpError>),

    #[error("{0}")]
    BadRequest(Box<HttpError>),

    #[error("{0}")]
    NotFound(Box<HttpError>),

    #[error("{error}")]
    RateLimited {
        error: Box<HttpError>,
        /// From the `Retry-After` header, if the server sent one.
        retry_after: Option<Duration>,
    },

    #[error("{0}")]
    Api(Box<HttpError>),

    #[error("{method} {path} failed before a response arrived: {source}")]
    Transport {
        method: Method,
        path: Box<str>,
        kind: TransportErrorKind,
        /// Attempts replayed by the retry layer before giving up.
        retries: usize,
        #[source]
        source: BoxError,
    },

    /// The body of a successful response did not match the expected model.
    #[error("Unexpected response body for {method} {path} (HTTP {status}): {source}")]
    Decode {
        status: StatusCode,
        method: Method,
        path: Box<str>,
        request_id: Option<Box<str>>,
        body_snippet: Option<Box<str>>,
        #[source]
        source: BoxError,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: Box<str>,
        #[source]
        source: Option<BoxError>,
    },
}

impl Error {
    pub(crate) fn from_http(error: HttpError, retry_after: Option<Duration>) -> Self {
        let kind = ErrorKind::for_status(error.status);
        let error = Box::new(error);
        match kind {
            ErrorKind::Auth => Self::Auth(error),
            ErrorKind::BadRequest => Self::BadRequest(error),
            ErrorKind::NotFound => Self::NotFound(error),
            ErrorKind::RateLimited => Self::RateLimited { error, retry_after },
            _ => Self::Api(error),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::InvalidConfig { .. } => ErrorKind::InvalidConfig,
            Self::Auth(_) => ErrorKind::Auth,
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::Api(_) => ErrorKind::Api,
        }
    }

    /// The HTTP error details, if the server answered with an error status.
    #[must_use]
    pub fn http(&self) -> Option<&HttpError> {
        match self {
            Self::Auth(e) | Self::BadRequest(e) | Self::NotFound(e) | Self::Api(e) => Some(&**e),
            Self::RateLimited { error, .. } => Some(&**error),
            Self::Transport { .. } | Self::Decode { .. } | Self::InvalidConfig { .. } => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Decode { status, .. } => Some(*status),
            other => other.http().map(|e| e.status),
        }
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Decode { request_id, .. } => request_id.as_deref(),
            other => other.http().and_then(|e| e.request_id.as_deref()),
        }
    }

    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Retries spent on a transport failure. HTTP errors report theirs in metrics only.
    #[must_use]
    pub fn retries(&self) -> usize {
        match self {
            Self::Transport { retries, .. } => *retries,
            _ => 0,
        }
    }

    pub(crate) fn with_retries(mut self, count: usize) -> Self {
        if let Self::Transport { retries, .. } = &mut self {
            *retries = retries.saturating_add(count);
        }
        self
    }

    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        self.kind() == ErrorKind::Auth
    }

    /// Whether sending the same request again may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited { .. } => true,
            Self::Api(e) => matches!(
                e.status,
                StatusCode::BAD_GATEWAY
                    | StatusCode::SERVICE_UNAVAILABLE
                    | StatusCode::GATEWAY_TIMEOUT
            ),
            Self::Transport { kind, .. } => {
                matches!(kind, TransportErrorKind::Timeout | TransportErrorKind::Connect)
            }
            _ => false,
        }
    }
}
