//! Request pipeline shared by the async and blocking clients.
//!
//! A client call goes `prepare` → transport → `complete` (→ `decode`); only
//! the transport step differs between the two client flavours.

use crate::{
    Auth, BodySnippetConfig, Error, ErrorKind, HttpError, RequestHook, RetryConfig,
    transport::{
        TransportBody, TransportOptions, TransportRequest, TransportResponse,
        middleware::retry::parse_retry_after,
        request::{Request, Response},
    },
    util::{
        diagnostics,
        redact::redact_text,
        url::{BaseUrl, redacted_url},
    },
};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, SystemTime};
use url::Url;

#[cfg(feature = "metrics")]
use crate::transport::metrics;
#[cfg(feature = "tracing")]
use tracing::field;

/// Builder state common to both client flavours.
pub(crate) struct Settings {
    pub(crate) base_url: BaseUrl,
    pub(crate) auth: Option<Auth>,
    pub(crate) transport: TransportOptions,
    pub(crate) retry: Option<RetryConfig>,
    pub(crate) default_headers: HeaderMap,
    pub(crate) body_snippet: BodySnippetConfig,
    pub(crate) request_hook: Option<RequestHook>,
}

impl Settings {
    pub(crate) fn try_new(base: &str) -> Result<Self, Error> {
        Ok(Self {
            base_url: BaseUrl::parse(base)?,
            auth: None,
            transport: TransportOptions::default(),
            retry: None,
            default_headers: HeaderMap::new(),
            body_snippet: BodySnippetConfig::default(),
            request_hook: None,
        })
    }

    pub(crate) fn into_shared(self) -> Shared {
        Shared {
            base: self.base_url,
            auth: self.auth,
            timeout: self.transport.timeout,
            default_headers: self.default_headers,
            body_snippet: self.body_snippet,
        }
    }
}

/// Builder methods identical for `ClientBuilder` and `BlockingClientBuilder`.
/// Expands inside an `impl` block of a type with a `settings: Settings` field.
macro_rules! settings_setters {
    () => {
        /// Apply an authentication strategy.
        pub fn auth(mut self, auth: $crate::Auth) -> Self {
            self.settings.auth = Some(auth);
            self
        }

        /// Send the node `api_key` header on every request.
        pub fn api_key(mut self, key: impl Into<String>) -> Self {
            self.settings.auth = Some($crate::Auth::api_key(key));
            self
        }

        /// Ignore system proxy environment variables.
        pub fn no_system_proxy(mut self) -> Self {
            self.settings.transport.no_proxy = true;
            self
        }

        /// Accept invalid TLS certificates (**dangerous**).
        pub fn danger_accept_invalid_certs(mut self, yes: bool) -> Self {
            self.settings.transport.accept_invalid_certs = yes;
            self
        }

        /// Override the default `User-Agent` header.
        pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
            self.settings.transport.user_agent = ua.into();
            self
        }

        /// Per-request timeout. Default: 30s.
        pub fn timeout(mut self, value: ::std::time::Duration) -> Self {
            self.settings.transport.timeout = value;
            self
        }

        /// Connection establishment timeout. Default: 10s.
        pub fn connect_timeout(mut self, value: ::std::time::Duration) -> Self {
            self.settings.transport.connect_timeout = value;
            self
        }

        /// Maximum idle time while reading a response body.
        pub fn read_timeout(mut self, value: ::std::time::Duration) -> Self {
            self.settings.transport.read_timeout = Some(value);
            self
        }

        /// Add a default header applied to every request.
        pub fn default_header(
            mut self,
            name: ::http::header::HeaderName,
            value: ::http::HeaderValue,
        ) -> Self {
            self.settings.default_headers.insert(name, value);
            self
        }

        /// Add a set of default headers applied to every request.
        pub fn default_headers(mut self, headers: ::http::HeaderMap) -> Self {
            self.settings.default_headers.extend(headers);
            self
        }

        /// Enable/disable capturing `body_snippet` on errors and decode failures.
        pub fn capture_body_snippet(mut self, enabled: bool) -> Self {
            self.settings.body_snippet.enabled = enabled;
            self
        }

        /// Set max bytes to keep for `body_snippet`.
        pub fn max_body_snippet_bytes(mut self, max_bytes: usize) -> Self {
            self.settings.body_snippet.max_bytes = max_bytes;
            self
        }

        /// Retry transient failures with exponential backoff.
        pub fn with_retry(mut self, max_retries: usize, base_delay: ::std::time::Duration) -> Self {
            self.settings.retry = Some($crate::RetryConfig::new(max_retries, base_delay));
            self
        }

        /// Use a custom retry configuration.
        pub fn retry_config(mut self, config: $crate::RetryConfig) -> Self {
            self.settings.retry = Some(config);
            self
        }

        /// Add a hook invoked for every request attempt (including retries).
        pub fn request_hook<F>(mut self, hook: F) -> Self
        where
            F: for<'a> Fn($crate::RequestHookContext<'a>) -> ::std::result::Result<(), $crate::Error>
                + Send
                + Sync
                + 'static,
        {
            self.settings.request_hook = Some(::std::sync::Arc::new(hook));
            self
        }
    };
}

pub(crate) use settings_setters;

/// Immutable per-client state used to turn [`Request`]s into results.
pub(crate) struct Shared {
    base: BaseUrl,
    auth: Option<Auth>,
    timeout: Duration,
    default_headers: HeaderMap,
    body_snippet: BodySnippetConfig,
}

impl Shared {
    /// Resolve the URL and merge headers: defaults, then auth, then per-request.
    pub(crate) fn prepare(&self, req: &Request) -> Result<TransportRequest, Error> {
        let url = self.base.join(req.segments.iter().map(String::as_str))?;

        let mut headers = self.default_headers.clone();
        if let Some(auth) = &self.auth {
            auth.apply(&mut headers)?;
        }
        headers.extend(req.headers.clone());

        Ok(TransportRequest {
            method: req.method.clone(),
            url,
            headers,
            query: req.query.clone(),
            body: req.body.clone().map(|body| TransportBody {
                bytes: body.bytes,
                content_type: body.content_type,
            }),
            timeout: req.timeout_override.unwrap_or(self.timeout),
        })
    }

    /// Map error statuses to [`Error`] and record the outcome.
    pub(crate) fn complete(
        &self,
        req: &Request,
        url: &Url,
        resp: TransportResponse,
        observer: &Observer,
    ) -> Result<Response, Error> {
        let request_id = diagnostics::request_id(&resp.headers);
        let retries = resp.meta.retries;

        if !(resp.status.is_client_error() || resp.status.is_server_error()) {
            observer.record(Some(resp.status), retries, request_id.as_deref(), None);
            return Ok(Response {
                status: resp.status,
                headers: resp.headers,
                body: resp.body,
                #[cfg(feature = "unstable-raw")]
                retries,
            });
        }

        let redact = |text: Box<str>| redact_text(text.into(), self.auth.as_ref()).into_boxed_str();
        let http_error = HttpError {
            status: resp.status,
            method: req.method.clone(),
            url: Box::new(redacted_url(url)),
            message: diagnostics::extract_message(&resp.body).map(redact),
            reason: diagnostics::node_reason(&resp.body).map(redact),
            request_id,
            body_snippet: self.snippet(req, &resp.body),
        };
        let retry_after = parse_retry_after(&resp.headers, SystemTime::now());
        let err = Error::from_http(http_error, retry_after);

        observer.record(err.status(), retries, err.request_id(), Some(err.kind()));
        Err(err)
    }

    pub(crate) fn decode<T: DeserializeOwned>(
        &self,
        req: &Request,
        resp: &Response,
    ) -> Result<T, Error> {
        resp.json().map_err(|source| {
            let path = self
                .base
                .join(req.segments.iter().map(String::as_str))
                .map(|url| url.path().to_owned())
                .unwrap_or_else(|_| req.path());
            #[cfg(feature = "tracing")]
            tracing::debug!(%path, error = %source, "failed to decode ergo response");
            Error::Decode {
                status: resp.status,
                method: req.method.clone(),
                path: path.into_boxed_str(),
                request_id: diagnostics::request_id(&resp.headers),
                body_snippet: self.snippet(req, &resp.body),
                source: Box::new(source),
            }
        })
    }

    fn snippet(&self, req: &Request, body: &[u8]) -> Option<Box<str>> {
        if req.sensitive {
            return None;
        }
        diagnostics::body_snippet(body, self.body_snippet, self.auth.as_ref())
    }
}

/// Tracing span and metrics for one logical request (all retry attempts).
pub(crate) struct Observer {
    #[cfg(feature = "tracing")]
    pub(crate) span: tracing::Span,
    #[cfg(any(feature = "tracing", feature = "metrics"))]
    start: std::time::Instant,
    #[cfg(feature = "metrics")]
    method: http::Method,
    #[cfg(feature = "metrics")]
    area: &'static str,
    #[cfg(feature = "metrics")]
    _inflight: metrics::InFlightGuard,
}

impl Observer {
    #[cfg_attr(
        not(all(feature = "tracing", feature = "metrics")),
        allow(unused_variables)
    )]
    pub(crate) fn start(req: &Request, sent: &TransportRequest) -> Self {
        #[cfg(feature = "metrics")]
        let area = metrics::area_label(req.segments.first().map(String::as_str));
        Self {
            #[cfg(feature = "tracing")]
            span: tracing::info_span!(
                "ergo.request",
                http.method = %sent.method,
                http.host = %sent.url.host_str().unwrap_or_default(),
                http.path = %sent.url.path(),
                http.status = field::Empty,
                request_id = field::Empty,
                retries = field::Empty,
                latency_ms = field::Empty,
                error_kind = field::Empty,
            ),
            #[cfg(any(feature = "tracing", feature = "metrics"))]
            start: std::time::Instant::now(),
            #[cfg(feature = "metrics")]
            method: sent.method.clone(),
            #[cfg(feature = "metrics")]
            area,
            #[cfg(feature = "metrics")]
            _inflight: metrics::InFlightGuard::new(&sent.method, area),
        }
    }

    /// Record a transport failure (no HTTP status).
    pub(crate) fn failed(&self, err: &Error) {
        self.record(err.status(), err.retries(), None, Some(err.kind()));
    }

    #[cfg_attr(
        not(any(feature = "tracing", feature = "metrics")),
        allow(unused_variables)
    )]
    fn record(
        &self,
        status: Option<StatusCode>,
        retries: usize,
        request_id: Option<&str>,
        error_kind: Option<ErrorKind>,
    ) {
        #[cfg(feature = "tracing")]
        {
            if let Some(status) = status {
                self.span.record("http.status", status.as_u16() as i64);
            }
            if let Some(rid) = request_id {
                self.span.record("request_id", field::display(rid));
            }
            if let Some(kind) = error_kind {
                self.span.record("error_kind", field::debug(kind));
            }
            self.span.record("retries", retries as i64);
            self.span
                .record("latency_ms", self.start.elapsed().as_millis() as i64);
        }
        #[cfg(feature = "metrics")]
        metrics::record(
            &self.method,
            self.area,
            &metrics::Outcome {
                status,
                latency: self.start.elapsed(),
                retries,
                error_kind,
            },
        );
    }
}
