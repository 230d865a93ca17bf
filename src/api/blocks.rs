use crate::transport::request::Request;
use crate::{BlockId, BlockInfo, Error, Items, Paging};
use serde_json::Value;

fn list_request(paging: &Paging) -> Request {
    Request::get(["blocks"]).query_pairs(paging.query_pairs())
}

/// Explorer block APIs.
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct BlocksService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl BlocksService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "async")]
impl BlocksService {
    /// `GET /blocks?offset=&limit=&sortBy=&sortDirection=`
    pub async fn list(&self, paging: &Paging) -> Result<Items<BlockInfo>, Error> {
        self.client.send_json(list_request(paging)).await
    }

    /// `GET /blocks/<id>`: header, transactions, extension and references.
    pub async fn get(&self, id: impl Into<BlockId>) -> Result<Value, Error> {
        let id = id.into();
        self.client
            .send_json(Request::get(["blocks", id.as_str()]))
            .await
    }

    /// `GET /blocks/at/<height>`: ids of every block at that height (forks included).
    pub async fn at_height(&self, height: u32) -> Result<Vec<BlockId>, Error> {
        self.client
            .send_json(Request::get(["blocks".to_owned(), "at".to_owned(), height.to_string()]))
            .await
    }
}

/// Explorer block APIs (blocking).
#[cfg(feature = "blocking")]
#[derive(Clone)]
pub struct BlockingBlocksService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingBlocksService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }
}

#[cfg(feature = "blocking")]
impl BlockingBlocksService {
    /// `GET /blocks?offset=&limit=&sortBy=&sortDirection=`
    pub fn list(&self, paging: &Paging) -> Result<Items<BlockInfo>, Error> {
        self.client.send_json(list_request(paging))
    }

    /// `GET /blocks/<id>`
    pub fn get(&self, id: impl Into<BlockId>) -> Result<Value, Error> {
        let id = id.into();
        self.client.send_json(Request::get(["blocks", id.as_str()]))
    }

    /// `GET /blocks/at/<height>`
    pub fn at_height(&self, height: u32) -> Result<Vec<BlockId>, Error> {
        self.client
            .send_json(Request::get(["blocks".to_owned(), "at".to_owned(), height.to_string()]))
    }
}
