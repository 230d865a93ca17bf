use crate::{Error, TransportErrorKind, transport::TransportResponse};
use http::{HeaderMap, Method, StatusCode};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Retry configuration for both async and blocking clients.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: usize,
    /// Base delay used for exponential backoff (`base * 2^n`).
    pub base_delay: Duration,
    /// Maximum delay cap for exponential backoff.
    pub max_delay: Duration,
    /// Add jitter to backoff delays to avoid retry storms.
    pub jitter: bool,
    /// Retry non-idempotent methods (e.g. `POST /wallet/unlock`). Defaults to `false`.
    pub retry_non_idempotent: bool,
    /// Prefer the server-provided `Retry-After` header when present.
    pub respect_retry_after: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            jitter: true,
            retry_non_idempotent: false,
            respect_retry_after: true,
        }
    }
}

impl RetryConfig {
    #[must_use]
    pub fn new(max_retries: usize, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            ..Self::default()
        }
    }
}

/// Per-request retry bookkeeping shared by the async and blocking wrappers.
///
/// Each `after_*` call either returns the delay to sleep before the next
/// attempt (and counts it) or `None` when the outcome is final.
pub(crate) struct RetryState<'a> {
    config: &'a RetryConfig,
    can_retry: bool,
    retries: usize,
}

impl<'a> RetryState<'a> {
    pub(crate) fn new(config: &'a RetryConfig, method: &Method) -> Self {
        Self {
            config,
            can_retry: config.retry_non_idempotent || is_idempotent(method),
            retries: 0,
        }
    }

    pub(crate) fn retries(&self) -> usize {
        self.retries
    }

    fn budget_left(&self) -> bool {
        self.can_retry && self.retries < self.config.max_retries
    }

    fn backoff(&self) -> Duration {
        let cap = backoff_delay(self.config, self.retries + 1);
        if self.config.jitter {
            jitter_delay(cap)
        } else {
            cap
        }
    }

    pub(crate) fn after_response(&mut self, resp: &TransportResponse) -> Option<Duration> {
        if !self.budget_left() || !is_retryable_status(resp.status) {
            return None;
        }

        let retry_after = self
            .config
            .respect_retry_after
            .then(|| parse_retry_after(&resp.headers, SystemTime::now()))
            .flatten();
        let delay = retry_after.unwrap_or_else(|| self.backoff());
        self.retries += 1;
        Some(delay)
    }

    pub(crate) fn after_error(&mut self, err: &Error) -> Option<Duration> {
        let transient = matches!(
            err,
            Error::Transport {
                kind: TransportErrorKind::Timeout | TransportErrorKind::Connect,
                ..
            }
        );
        if !self.budget_left() || !transient {
            return None;
        }

        let delay = self.backoff();
        self.retries += 1;
        Some(delay)
    }
}

pub(crate) fn is_idempotent(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::PUT | Method::DELETE | Method::OPTIONS | Method::TRACE
    )
}

pub(crate) fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

pub(crate) fn backoff_delay(config: &RetryConfig, attempt: usize) -> Duration {
    if attempt == 0 {
        return Duration::ZERO;
    }

    let exp = 2u32.saturating_pow((attempt - 1).min(31) as u32);
    let scaled = config.base_delay.saturating_mul(exp);
    scaled.min(config.max_delay)
}

pub(crate) fn parse_retry_after(headers: &HeaderMap, now: SystemTime) -> Option<Duration> {
    let value = headers.get(http::header::RETRY_AFTER)?;
    let text = value.to_str().ok()?.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(secs) = text.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }

    let at = httpdate::parse_http_date(text).ok()?;
    Some(at.duration_since(now).unwrap_or(Duration::ZERO))
}

pub(crate) fn jitter_delay(cap: Duration) -> Duration {
    let max_ms = cap.as_millis().min(u128::from(u64::MAX)) as u64;
    if max_ms == 0 {
        return cap;
    }

    // Full jitter: random delay in [0, cap].
    let mut x = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos() as u64;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    Duration::from_millis(x % (max_ms + 1))
}
