//! High-level blocking Ergo API client.

use super::shared::{Observer, Settings, Shared, settings_setters};
use crate::{
    Error, api,
    transport::{
        blocking_transport::{DynBlockingTransport, UreqBlocking},
        middleware::{Hooked, RetryBlocking},
        request::{Request, Response},
    },
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Configures and constructs [`BlockingClient`].
pub struct BlockingClientBuilder {
    settings: Settings,
}

impl BlockingClientBuilder {
    settings_setters!();

    pub fn build(mut self) -> Result<BlockingClient, Error> {
        let mut transport: DynBlockingTransport =
            Arc::new(UreqBlocking::new(&self.settings.transport)?);
        if let Some(hook) = self.settings.request_hook.take() {
            transport = Arc::new(Hooked::new(transport, hook));
        }
        if let Some(retry) = self.settings.retry.take() {
            transport = Arc::new(RetryBlocking::new(transport, retry));
        }

        Ok(BlockingClient {
            inner: Arc::new(Inner {
                shared: self.settings.into_shared(),
                transport,
            }),
        })
    }
}

/// Blocking client for one Ergo explorer or node endpoint. Cheap to clone.
#[derive(Clone)]
pub struct BlockingClient {
    inner: Arc<Inner>,
}

struct Inner {
    shared: Shared,
    transport: DynBlockingTransport,
}

impl BlockingClient {
    pub fn builder(base: impl AsRef<str>) -> Result<BlockingClientBuilder, Error> {
        Ok(BlockingClientBuilder {
            settings: Settings::try_new(base.as_ref())?,
        })
    }

    pub fn new(base: impl AsRef<str>) -> Result<Self, Error> {
        Self::builder(base)?.build()
    }

    /// Explorer: `/blocks` endpoints.
    #[must_use]
    pub fn blocks(&self) -> api::BlockingBlocksService {
        api::BlockingBlocksService::new(self.clone())
    }

    /// Explorer: `/stats` endpoints.
    #[must_use]
    pub fn stats(&self) -> api::BlockingStatsService {
        api::BlockingStatsService::new(self.clone())
    }

    /// Node: `/info` endpoints.
    #[must_use]
    pub fn info(&self) -> api::BlockingInfoService {
        api::BlockingInfoService::new(self.clone())
    }

    /// Node: `/wallet` endpoints.
    #[must_use]
    pub fn wallet(&self) -> api::BlockingWalletService {
        api::BlockingWalletService::new(self.clone())
    }

    pub(crate) fn send_json<T: DeserializeOwned>(&self, req: Request) -> Result<T, Error> {
        let resp = self.execute_request(&req)?;
        self.inner.shared.decode(&req, &resp)
    }

    pub(crate) fn send_unit(&self, req: Request) -> Result<(), Error> {
        self.execute_request(&req).map(drop)
    }

    #[cfg(feature = "unstable-raw")]
    pub fn execute(&self, req: &Request) -> Result<Response, Error> {
        self.execute_request(req)
    }

    pub(crate) fn execute_request(&self, req: &Request) -> Result<Response, Error> {
        let transport_req = self.inner.shared.prepare(req)?;
        let url = transport_req.url.clone();
        let observer = Observer::start(req, &transport_req);
        #[cfg(feature = "tracing")]
        let _enter = observer.span.enter();

        match self.inner.transport.send(transport_req) {
            Ok(resp) => self.inner.shared.complete(req, &url, resp, &observer),
            Err(err) => {
                observer.failed(&err);
                Err(err)
            }
        }
    }
}
