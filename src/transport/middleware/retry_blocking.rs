//! Conservative retry wrapper (blocking).

use super::retry::{RetryConfig, RetryState};
use crate::{
    Error,
    transport::{
        TransportRequest, TransportResponse,
        blocking_transport::{BlockingTransport, DynBlockingTransport},
    },
};
use std::thread::sleep;

#[derive(Clone)]
pub struct RetryBlocking {
    inner: DynBlockingTransport,
    config: RetryConfig,
}

impl RetryBlocking {
    #[must_use]
    pub fn new(inner: DynBlockingTransport, config: RetryConfig) -> Self {
        Self { inner, config }
    }
}

impl BlockingTransport for RetryBlocking {
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        let mut state = RetryState::new(&self.config, &req.method);
        loop {
            let delay = match self.inner.send(req.clone()) {
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
                sleep(delay);
            }
        }
    }
}
