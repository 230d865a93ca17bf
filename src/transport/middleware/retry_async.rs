//! Conservative retry wrapper (async).

use super::retry::{RetryConfig, RetryState};
use crate::{
    Error,
    transport::{
        TransportRequest, TransportResponse,
        async_transport::{AsyncTransport, DynAsyncTransport},
    },
};
use async_trait::async_trait;
use tokio::time::sleep;

#[derive(Clone)]
pub struct RetryAsync {
    inner: DynAsyncTransport,
    config: RetryConfig,
}

impl RetryAsync {
    #[must_use]
    pub fn new(inner: DynAsyncTransport, config: RetryConfig) -> Self {
        Self { inner, config }
    }
}

#[async_trait]
impl AsyncTransport for RetryAsync {
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        let mut state = RetryState::new(&self.config, &req.method);
        loop {
            let delay = match self.inner.send(req.clone()).await {
                Ok(mut resp) => match state.after_response(&resp) {
                    Some(delay) => delay,
                    None => {
                        resp.meta.retries = resp.meta.retries.saturating_add(state.retries());
                        return Ok(resp);
                    }
                },
                Err(err) => match state.after_error(&err) {
                    Some(delay) => delay,
                    None => return Err(err.with_retries(state.retries())),
                },
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(
                attempt = state.retries(),
                delay_ms = delay.as_millis() as u64,
                "retrying ergo request"
            );
            if !delay.is_zero() {
                sleep(delay).await;
            }
        }
    }
}
