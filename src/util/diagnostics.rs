use crate::{ApiError, Auth, BodySnippetConfig};
use http::HeaderMap;

use super::redact::{redact_text, truncate_utf8};

pub(crate) fn request_id(headers: &HeaderMap) -> Option<Box<str>> {
    ["x-request-id", "x-correlation-id", "x-amzn-requestid", "cf-ray"]
        .into_iter()
        .filter_map(|name| headers.get(name).and_then(|v| v.to_str().ok()))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(Into::into)
}

/// Human-readable message from an error body.
///
/// The node answers with `{"error": 400, "reason": "...", "detail": "..."}`;
/// `detail` is the most specific field, `reason` the fallback. Gateways in front
/// of the explorer tend to use `message` or `error` instead.
pub(crate) fn extract_message(body: &[u8]) -> Option<Box<str>> {
    if let Ok(err) = serde_json::from_slice::<ApiError>(body) {
        let detail = err.detail.as_deref().map(str::trim).unwrap_or_default();
        let msg = if detail.is_empty() { err.reason.trim() } else { detail };
        if !msg.is_empty() {
            return Some(msg.into());
        }
    }

    let value = serde_json::from_slice::<serde_json::Value>(body).ok()?;
    ["message", "error", "error_message"]
        .into_iter()
        .filter_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(Into::into)
}

/// The `reason` of a node error body, e.g. `"bad.request"`.
pub(crate) fn node_reason(body: &[u8]) -> Option<Box<str>> {
    let err = serde_json::from_slice::<ApiError>(body).ok()?;
    let reason = err.reason.trim();
    (!reason.is_empty()).then(|| reason.into())
}

pub(crate) fn body_snippet(
    body: &[u8],
    config: BodySnippetConfig,
    auth: Option<&Auth>,
) -> Option<Box<str>> {
    if !config.enabled || body.is_empty() {
        return None;
    }

    // Redact first; truncation may otherwise split a secret.
    let body = redact_text(String::from_utf8_lossy(body).into_owned(), auth);
    Some(truncate_utf8(&body, config.max_bytes).into())
}
