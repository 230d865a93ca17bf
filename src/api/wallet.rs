use crate::transport::request::Request;
use crate::{
    Address, Error, InitWalletRequest, InitWalletResult, RestoreWalletRequest,
    UnlockWalletRequest, WalletStatus,
};
use serde_json::Value;

/// Node wallet APIs. All of them require an `api_key` ([`crate::Auth::api_key`]).
#[derive(Clone)]
#[cfg(feature = "async")]
pub struct WalletService {
    client: crate::Client,
}

#[cfg(feature = "async")]
impl WalletService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "async")]
impl WalletService {
    /// `GET /wallet/status`
    pub async fn status(&self) -> Result<WalletStatus, Error> {
        self.client
            .send_json(Request::get(["wallet", "status"]))
            .await
    }

    /// `POST /wallet/unlock` with `{"pass": ...}`.
    pub async fn unlock(&self, body: &UnlockWalletRequest) -> Result<(), Error> {
        self.client
            .send_unit(Request::post(["wallet", "unlock"]).sensitive().json(body)?)
            .await
    }

    /// `GET /wallet/lock`
    pub async fn lock(&self) -> Result<(), Error> {
        self.client
            .send_unit(Request::get(["wallet", "lock"]))
            .await
    }

    /// `POST /wallet/init`: create a new wallet and return its mnemonic.
    pub async fn init(&self, body: &InitWalletRequest) -> Result<InitWalletResult, Error> {
        self.client
            .send_json(Request::post(["wallet", "init"]).sensitive().json(body)?)
            .await
    }

    /// `POST /wallet/restore`
    pub async fn restore(&self, body: &RestoreWalletRequest) -> Result<(), Error> {
        self.client
            .send_unit(Request::post(["wallet", "restore"]).sensitive().json(body)?)
            .await
    }

    /// `GET /wallet/addresses`
    pub async fn addresses(&self) -> Result<Vec<Address>, Error> {
        self.client
            .send_json(Request::get(["wallet", "addresses"]))
            .await
    }

    /// `GET /wallet/balances`
    pub async fn balances(&self) -> Result<Value, Error> {
        self.client
            .send_json(Request::get(["wallet", "balances"]))
            .await
    }
}

/// Node wallet APIs (blocking).
#[cfg(feature = "blocking")]
#[derive(Clone)]
pub struct BlockingWalletService {
    client: crate::BlockingClient,
}

#[cfg(feature = "blocking")]
impl BlockingWalletService {
    pub(crate) fn new(client: crate::BlockingClient) -> Self {
        Self { client }
    }
}

#[cfg(feature = "blocking")]
impl BlockingWalletService {
    /// `GET /wallet/status`
    pub fn status(&self) -> Result<WalletStatus, Error> {
        self.client.send_json(Request::get(["wallet", "status"]))
    }

    /// `POST /wallet/unlock`
    pub fn unlock(&self, body: &UnlockWalletRequest) -> Result<(), Error> {
        self.client
            .send_unit(Request::post(["wallet", "unlock"]).sensitive().json(body)?)
    }

    /// `GET /wallet/lock`
    pub fn lock(&self) -> Result<(), Error> {
        self.client.send_unit(Request::get(["wallet", "lock"]))
    }

    /// `POST /wallet/init`
    pub fn init(&self, body: &InitWalletRequest) -> Result<InitWalletResult, Error> {
        self.client
            .send_json(Request::post(["wallet", "init"]).sensitive().json(body)?)
    }

    /// `POST /wallet/restore`
    pub fn restore(&self, body: &RestoreWalletRequest) -> Result<(), Error> {
        self.client
            .send_unit(Request::post(["wallet", "restore"]).sensitive().json(body)?)
    }

    /// `GET /wallet/addresses`
    pub fn addresses(&self) -> Result<Vec<Address>, Error> {
        self.client.send_json(Request::get(["wallet", "addresses"]))
    }

    /// `GET /wallet/balances`
    pub fn balances(&self) -> Result<Value, Error> {
        self.client.send_json(Request::get(["wallet", "balances"]))
    }
}
