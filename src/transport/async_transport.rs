use super::{ResponseMeta, TransportOptions, TransportRequest, TransportResponse};
use crate::error::{Error, TransportErrorKind};
use async_trait::async_trait;
use std::sync::Arc;

/// Trait implemented by any async HTTP layer.
#[async_trait]
pub trait AsyncTransport: Send + Sync + 'static {
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error>;
}

pub type DynAsyncTransport = Arc<dyn AsyncTransport>;

#[async_trait]
impl<T: AsyncTransport + ?Sized> AsyncTransport for Arc<T> {
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        (**self).send(req).await
    }
}

/// Default async transport built on `reqwest`.
#[derive(Clone)]
pub struct ReqwestAsync {
    client: reqwest::Client,
}

impl ReqwestAsync {
    pub fn new(options: &TransportOptions) -> Result<Self, Error> {
        #[cfg(feature = "rustls")]
        {
            static PROVIDER: std::sync::Once = std::sync::Once::new();
            PROVIDER.call_once(|| {
                let _ = rustls::crypto::ring::default_provider().install_default();
            });
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(options.timeout)
            .connect_timeout(options.connect_timeout)
            .danger_accept_invalid_certs(options.accept_invalid_certs);
        if let Some(read_timeout) = options.read_timeout {
            builder = builder.read_timeout(read_timeout);
        }
        if options.no_proxy {
            builder = builder.no_proxy();
        }

        builder
            .build()
            .map(|client| Self { client })
            .map_err(|err| Error::InvalidConfig {
                message: "failed to build async HTTP client".into(),
                source: Some(Box::new(err)),
            })
    }
}

#[async_trait]
impl AsyncTransport for ReqwestAsync {
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        let fail = |err: reqwest::Error| {
            let kind = if err.is_timeout() {
                TransportErrorKind::Timeout
            } else if err.is_connect() {
                TransportErrorKind::Connect
            } else {
                TransportErrorKind::Other
            };
            Error::Transport {
                method: req.method.clone(),
                path: req.url.path().into(),
                kind,
                retries: 0,
                source: Box::new(err),
            }
        };

        let mut builder = self
            .client
            .request(req.method.clone(), req.url.clone())
            .query(&req.query)
            .timeout(req.timeout)
            .headers(req.headers.clone());
        if let Some(body) = &req.body {
            if let Some(content_type) = &body.content_type {
                builder = builder.header(http::header::CONTENT_TYPE, content_type.clone());
            }
            builder = builder.body(body.bytes.clone());
        }

        let resp = builder.send().await.map_err(fail)?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(fail)?;

        Ok(TransportResponse {
            status,
            headers,
            body: body.into(),
            meta: ResponseMeta::default(),
        })
    }
}
