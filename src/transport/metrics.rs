//! `metrics` facade integration. Every series carries `method` and `area`
//! (`blocks`, `stats`, `info`, `wallet` or `other`) labels.

use crate::ErrorKind;
use http::{Method, StatusCode};
use metrics::SharedString;
use std::time::Duration;

/// Tracks requests currently in flight in the `ergo_sdk_inflight` gauge.
pub(crate) struct InFlightGuard {
    gauge: metrics::Gauge,
}

impl InFlightGuard {
    pub(crate) fn new(method: &Method, area: &'static str) -> Self {
        let gauge = metrics::gauge!(
            "ergo_sdk_inflight",
            "method" => method_label(method),
            "area" => area
        );
        gauge.increment(1.0);
        Self { gauge }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.gauge.decrement(1.0);
    }
}

/// API area of a request, from the first path segment after the base URL.
pub(crate) fn area_label(first_segment: Option<&str>) -> &'static str {
    match first_segment {
        Some("blocks") => "blocks",
        Some("stats") => "stats",
        Some("info") => "info",
        Some("wallet") => "wallet",
        _ => "other",
    }
}

fn status_class(status: Option<StatusCode>) -> &'static str {
    const CLASSES: [&str; 6] = ["other", "1xx", "2xx", "3xx", "4xx", "5xx"];
    match status {
        Some(status) => CLASSES
            .get(usize::from(status.as_u16() / 100))
            .copied()
            .unwrap_or("other"),
        None => "transport",
    }
}

fn error_kind_label(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Auth => "auth",
        ErrorKind::BadRequest => "bad_request",
        ErrorKind::NotFound => "not_found",
        ErrorKind::RateLimited => "rate_limited",
        ErrorKind::Api => "api",
        ErrorKind::Transport => "transport",
        ErrorKind::Decode => "decode",
        ErrorKind::InvalidConfig => "invalid_config",
    }
}

fn method_label(method: &Method) -> SharedString {
    if *method == Method::GET {
        SharedString::const_str("GET")
    } else if *method == Method::POST {
        SharedString::const_str("POST")
    } else {
        SharedString::from(method.as_str().to_owned())
    }
}

/// Outcome of one logical request, after all retries.
pub(crate) struct Outcome {
    pub(crate) status: Option<StatusCode>,
    pub(crate) latency: Duration,
    pub(crate) retries: usize,
    pub(crate) error_kind: Option<ErrorKind>,
}

pub(crate) fn record(method: &Method, area: &'static str, outcome: &Outcome) {
    let method = method_label(method);
    let status_class = status_class(outcome.status);

    metrics::counter!(
        "ergo_sdk_requests_total",
        "method" => method.clone(),
        "area" => area,
        "status_class" => status_class
    )
    .increment(1);
    metrics::histogram!(
        "ergo_sdk_request_duration_seconds",
        "method" => method.clone(),
        "area" => area
    )
    .record(outcome.latency);

    if outcome.retries > 0 {
        metrics::counter!("ergo_sdk_retries_total", "method" => method.clone(), "area" => area)
            .increment(outcome.retries as u64);
    }

    if let Some(kind) = outcome.error_kind {
        metrics::counter!(
            "ergo_sdk_errors_total",
            "method" => method,
            "area" => area,
            "kind" => error_kind_label(kind)
        )
        .increment(1);
    }
}
