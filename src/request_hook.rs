use crate::{Error, transport::TransportRequest};
use http::{HeaderMap, HeaderValue, Method};
use std::sync::Arc;
use url::Url;

/// Request hook context passed to `ClientBuilder::request_hook`.
///
/// The hook can inspect request parts and mutate headers before the request is sent.
/// It runs once per attempt, so retried requests hit it again.
pub struct RequestHookContext<'a> {
    pub method: &'a Method,
    /// URL without query/fragment.
    pub url: &'a Url,
    pub headers: &'a mut HeaderMap,
    /// Query pairs appended by the transport.
    pub query: &'a [(String, String)],
    pub body: Option<&'a [u8]>,
    pub content_type: Option<&'a HeaderValue>,
}

pub type RequestHook =
    Arc<dyn for<'a> Fn(RequestHookContext<'a>) -> Result<(), Error> + Send + Sync + 'static>;

/// Run `hook` against the parts of an outgoing transport request.
pub(crate) fn run(hook: &RequestHook, req: &mut TransportRequest) -> Result<(), Error> {
    let body = req.body.as_ref();
    let result = hook(RequestHookContext {
        method: &req.method,
        url: &req.url,
        headers: &mut req.headers,
        query: &req.query,
        body: body.map(|b| b.bytes.as_slice()),
        content_type: body.and_then(|b| b.content_type.as_ref()),
    });

    #[cfg(feature = "tracing")]
    if let Err(err) = &result {
        tracing::debug!(path = %req.url.path(), error = %err, "request hook rejected request");
    }
    result
}
