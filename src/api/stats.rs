use crate::Error;
use crate::transport::request::Request;
use serde_json::Value;

/// Explorer network statistics.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct StatsService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl StatsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /stats`
    pub async fn info(&self) -> Result<Value, Error> {
        self.client.send_json(Request::get(["stats"])).await
    }

    /// `GET /stats/forks`
    pub async fn forks(&self) -> Result<Value, Error> {
        self.client.send_json(Request::get(["stats", "forks"])).await
    }
}

/// Explorer network statistics (blocking).
#[cfg(feature = "blocking")]
#[derive(Clone)]
pub struct BlockingStatsService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingStatsService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }

    /// `GET /stats`
    pub fn info(&self) -> Result<Value, Error> {
        self.client.send_json(Request::get(["stats"]))
    }

    /// `GET /stats/forks`
    pub fn forks(&self) -> Result<Value, Error> {
        self.client.send_json(Request::get(["stats", "forks"]))
    }
}
