//! High-level asynchronous Ergo API client.

use super::shared::{Observer, Settings, Shared, settings_setters};
use crate::{
    Error, api,
    transport::{
        async_transport::{DynAsyncTransport, ReqwestAsync},
        middleware::{Hooked, RetryAsync},
        request::{Request, Response},
    },
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Configures and constructs [`Client`].
pub struct ClientBuilder {
    settings: Settings,
}

impl ClientBuilder {
    settings_setters!();

    /// Finalise configuration and build the client.
    pub fn build(mut self) -> Result<Client, Error> {
        let mut transport: DynAsyncTransport =
            Arc::new(ReqwestAsync::new(&self.settings.transport)?);
        if let Some(hook) = self.settings.request_hook.take() {
            transport = Arc::new(Hooked::new(transport, hook));
        }
        if let Some(retry) = self.settings.retry.take() {
            transport = Arc::new(RetryAsync::new(transport, retry));
        }

        Ok(Client {
            inner: Arc::new(Inner {
                shared: self.settings.into_shared(),
                transport,
            }),
        })
    }
}

/// Async client for one Ergo explorer or node endpoint. Cheap to clone.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

struct Inner {
    shared: Shared,
    transport: DynAsyncTransport,
}

impl Client {
    pub fn builder(base: impl AsRef<str>) -> Result<ClientBuilder, Error> {
        Ok(ClientBuilder {
            settings: Settings::try_new(base.as_ref())?,
        })
    }

    pub fn new(base: impl AsRef<str>) -> Result<Self, Error> {
        Self::builder(base)?.build()
    }

    /// Explorer: `/blocks` endpoints.
    #[must_use]
    pub fn blocks(&self) -> api::BlocksService {
        api::BlocksService::new(self.clone())
    }

    /// Explorer: `/stats` endpoints.
    #[must_use]
    pub fn stats(&self) -> api::StatsService {
        api::StatsService::new(self.clone())
    }

    /// Node: `/info` endpoints.
    #[must_use]
    pub fn info(&self) -> api::InfoService {
        api::InfoService::new(self.clone())
    }

    /// Node: `/wallet` endpoints.
    #[must_use]
    pub fn wallet(&self) -> api::WalletService {
        api::WalletService::new(self.clone())
    }

    pub(crate) async fn send_json<T: DeserializeOwned + Send + 'static>(
        &self,
        req: Request,
    ) -> Result<T, Error> {
        let resp = self.execute_request(&req).await?;
        self.inner.shared.decode(&req, &resp)
    }

    pub(crate) async fn send_unit(&self, req: Request) -> Result<(), Error> {
        self.execute_request(&req).await.map(drop)
    }

    #[cfg(feature = "unstable-raw")]
    pub async fn execute(&self, req: &Request) -> Result<Response, Error> {
        self.execute_request(req).await
    }

    pub(crate) async fn execute_request(&self, req: &Request) -> Result<Response, Error> {
        let transport_req = self.inner.shared.prepare(req)?;
        let url = transport_req.url.clone();
        let observer = Observer::start(req, &transport_req);

        let send = self.inner.transport.send(transport_req);
        #[cfg(feature = "tracing")]
        let send = tracing::Instrument::instrument(send, observer.span.clone());

        match send.await {
            Ok(resp) => self.inner.shared.complete(req, &url, resp, &observer),
            Err(err) => {
                observer.failed(&err);
                Err(err)
            }
        }
    }
}
