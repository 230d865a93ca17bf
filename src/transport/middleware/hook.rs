//! Runs the client's [`RequestHook`](crate::RequestHook) before each attempt.

use crate::transport::TransportRequest;
use crate::{Error, RequestHook, request_hook};

/// Transport wrapper that lets a hook edit every outgoing request.
///
/// Implements [`AsyncTransport`](crate::transport::async_transport::AsyncTransport)
/// or [`BlockingTransport`](crate::transport::blocking_transport::BlockingTransport)
/// depending on what it wraps.
#[derive(Clone)]
pub struct Hooked<T> {
    inner: T,
    hook: RequestHook,
}

impl<T> Hooked<T> {
    pub fn new(inner: T, hook: RequestHook) -> Self {
        Self { inner, hook }
    }

    fn apply(&self, mut req: TransportRequest) -> Result<TransportRequest, Error> {
        request_hook::run(&self.hook, &mut req)?;
        Ok(req)
    }
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl<T: crate::transport::async_transport::AsyncTransport>
    crate::transport::async_transport::AsyncTransport for Hooked<T>
{
    async fn send(
        &self,
        req: TransportRequest,
    ) -> Result<crate::transport::TransportResponse, Error> {
        let req = self.apply(req)?;
        self.inner.send(req).await
    }
}

#[cfg(feature = "blocking")]
impl<T: crate::transport::blocking_transport::BlockingTransport>
    crate::transport::blocking_transport::BlockingTransport for Hooked<T>
{
    fn send(&self, req: TransportRequest) -> Result<crate::transport::TransportResponse, Error> {
        self.inner.send(self.apply(req)?)
    }
}
