use crate::transport::request::Request;
use crate::{Error, NodeInfo};

/// Node status (`/info`).
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct InfoService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl InfoService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /info`
    pub async fn info(&self) -> Result<NodeInfo, Error> {
        self.client.send_json(Request::get(["info"])).await
    }
}

/// Node status (`/info`, blocking).
#[cfg(feature = "blocking")]
#[derive(Clone)]
pub struct BlockingInfoService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingInfoService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `GET /info`
    pub fn info(&self) -> Result<NodeInfo, Error> {
        self.client.send_json(Request::get(["info"]))
    }
}
