use super::{ResponseMeta, TransportBody, TransportOptions, TransportRequest, TransportResponse};
use crate::error::{Error, TransportErrorKind};
use http::Method;
use std::{io, sync::Arc};
use ureq::{Agent, RequestBuilder, typestate::WithBody};

/// Trait implemented by any blocking HTTP layer.
pub trait BlockingTransport: Send + Sync + 'static {
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error>;
}

pub type DynBlockingTransport = Arc<dyn BlockingTransport>;

impl<T: BlockingTransport + ?Sized> BlockingTransport for Arc<T> {
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        (**self).send(req)
    }
}

/// Default blocking transport built on `ureq`.
#[derive(Clone)]
pub struct UreqBlocking {
    agent: Agent,
}

impl UreqBlocking {
    pub fn new(options: &TransportOptions) -> Result<Self, Error> {
        let mut config = Agent::config_builder()
            .http_status_as_error(false)
            .user_agent(options.user_agent.as_str())
            .timeout_global(Some(options.timeout))
            .timeout_connect(Some(options.connect_timeout))
            .timeout_recv_body(options.read_timeout);
        if options.no_proxy {
            config = config.proxy(None);
        }
        if options.accept_invalid_certs {
            config = config.tls_config(
                ureq::tls::TlsConfig::builder()
                    .disable_verification(true)
                    .build(),
            );
        }
        Ok(Self {
            agent: Agent::new_with_config(config.build()),
        })
    }
}

fn error_kind(err: &ureq::Error) -> TransportErrorKind {
    match err {
        ureq::Error::Timeout(_) => TransportErrorKind::Timeout,
        ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => TransportErrorKind::Connect,
        ureq::Error::Io(io) => match io.kind() {
            io::ErrorKind::TimedOut => TransportErrorKind::Timeout,
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected => TransportErrorKind::Connect,
            _ => TransportErrorKind::Other,
        },
        _ => TransportErrorKind::Other,
    }
}

/// Query, headers and the per-request timeout apply to every method.
fn prepare<B>(mut builder: RequestBuilder<B>, req: &TransportRequest) -> RequestBuilder<B> {
    builder = builder.query_pairs(req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    for (name, value) in &req.headers {
        builder = builder.header(name, value);
    }
    builder.config().timeout_global(Some(req.timeout)).build()
}

fn send_body(
    builder: RequestBuilder<WithBody>,
    body: Option<&TransportBody>,
) -> Result<http::Response<ureq::Body>, ureq::Error> {
    let Some(body) = body else {
        return builder.send_empty();
    };
    match &body.content_type {
        Some(content_type) => builder
            .header(http::header::CONTENT_TYPE, content_type)
            .send(body.bytes.as_slice()),
        None => builder.send(body.bytes.as_slice()),
    }
}

impl BlockingTransport for UreqBlocking {
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, Error> {
        let fail = |err: ureq::Error| Error::Transport {
            method: req.method.clone(),
            path: req.url.path().into(),
            kind: error_kind(&err),
            retries: 0,
            source: Box::new(err),
        };

        let url = req.url.as_str();
        let body = req.body.as_ref();
        let result = match req.method {
            Method::GET => prepare(self.agent.get(url), &req).call(),
            Method::HEAD => prepare(self.agent.head(url), &req).call(),
            Method::DELETE => prepare(self.agent.delete(url), &req).call(),
            Method::POST => send_body(prepare(self.agent.post(url), &req), body),
            Method::PUT => send_body(prepare(self.agent.put(url), &req), body),
            Method::PATCH => send_body(prepare(self.agent.patch(url), &req), body),
            ref other => {
                return Err(Error::InvalidConfig {
                    message: format!("unsupported HTTP method for blocking client: {other}").into(),
                    source: None,
                });
            }
        };
        let mut response = result.map_err(fail)?;

        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(fail)?;

        Ok(TransportResponse {
            status: response.status(),
            headers: response.headers().clone(),
            body,
            meta: ResponseMeta::default(),
        })
    }
}
