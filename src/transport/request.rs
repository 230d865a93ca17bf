//! Transport-agnostic request description and buffered response.

use crate::Error;
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct RequestBody {
    pub bytes: Vec<u8>,
    pub content_type: Option<HeaderValue>,
}

impl RequestBody {
    #[must_use]
    pub fn new(bytes: Vec<u8>, content_type: Option<HeaderValue>) -> Self {
        Self {
            bytes,
            content_type,
        }
    }

    /// Serialize `value` as an `application/json` body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, Error> {
        serde_json::to_vec(value)
            .map(|bytes| Self::new(bytes, Some(HeaderValue::from_static("application/json"))))
            .map_err(|err| Error::InvalidConfig {
                message: "failed to encode JSON request body".into(),
                source: Some(Box::new(err)),
            })
    }
}

/// One API call relative to the client's base URL.
///
/// `segments` are percent-encoded individually, so ids containing `/` stay
/// a single path segment.
#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
    pub timeout_override: Option<Duration>,
    /// Response bodies may hold wallet secrets; never keep a body snippet.
    pub sensitive: bool,
}

impl Request {
    #[must_use]
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            timeout_override: None,
            sensitive: false,
        }
    }

    #[must_use]
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    #[must_use]
    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments)
    }

    /// Relative path for logs and errors, e.g. `wallet/unlock`.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    #[must_use]
    pub fn query_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Attach `value` as a JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, Error> {
        self.body = Some(RequestBody::json(value)?);
        Ok(self)
    }

    /// Mark the exchange as carrying secrets (passwords, mnemonics).
    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    #[must_use]
    #[cfg(feature = "unstable-raw")]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    #[cfg(feature = "unstable-raw")]
    pub fn header(mut self, name: http::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    #[must_use]
    #[cfg(feature = "unstable-raw")]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_override = Some(timeout);
        self
    }
}

/// A successful (non-error status) response, fully buffered.
#[derive(Clone, Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    #[cfg(feature = "unstable-raw")]
    pub retries: usize,
}

impl Response {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    #[must_use]
    #[cfg(feature = "unstable-raw")]
    pub fn text_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
