//! Request and response bodies of the node API.
//!
//! Passwords and mnemonics are held in [`SecretString`]: they serialize to the
//! real value but print as `<redacted>`.

use super::common::{Address, BlockId};
use crate::SecretString;
use serde::{Deserialize, Serialize};

/// Body of `POST /wallet/unlock`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnlockWalletRequest {
    /// Password to decrypt wallet file with.
    pub pass: SecretString,
}

impl UnlockWalletRequest {
    #[must_use]
    pub fn new(pass: impl Into<SecretString>) -> Self {
        Self { pass: pass.into() }
    }

    #[must_use]
    pub fn with_pass(mut self, pass: impl Into<SecretString>) -> Self {
        self.pass = pass.into();
        self
    }
}

/// Body of `POST /wallet/init`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitWalletRequest {
    /// Password to encrypt wallet file with.
    pub pass: SecretString,
    /// Optional BIP-39 mnemonic password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonic_pass: Option<SecretString>,
}

impl InitWalletRequest {
    #[must_use]
    pub fn new(pass: impl Into<SecretString>) -> Self {
        Self {
            pass: pass.into(),
            mnemonic_pass: None,
        }
    }

    #[must_use]
    pub fn with_mnemonic_pass(mut self, mnemonic_pass: impl Into<SecretString>) -> Self {
        self.mnemonic_pass = Some(mnemonic_pass.into());
        self
    }
}

/// Response of `POST /wallet/init`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InitWalletResult {
    /// Freshly generated mnemonic phrase. Store it; the node will not show it again.
    pub mnemonic: SecretString,
}

/// Body of `POST /wallet/restore`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreWalletRequest {
    pub pass: SecretString,
    pub mnemonic: SecretString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonic_pass: Option<SecretString>,
}

impl RestoreWalletRequest {
    #[must_use]
    pub fn new(pass: impl Into<SecretString>, mnemonic: impl Into<SecretString>) -> Self {
        Self {
            pass: pass.into(),
            mnemonic: mnemonic.into(),
            mnemonic_pass: None,
        }
    }

    #[must_use]
    pub fn with_mnemonic_pass(mut self, mnemonic_pass: impl Into<SecretString>) -> Self {
        self.mnemonic_pass = Some(mnemonic_pass.into());
        self
    }
}

/// Response of `GET /wallet/status`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct WalletStatus {
    pub is_initialized: bool,
    pub is_unlocked: bool,
    /// `None` while the wallet is locked; the node sends `""` then.
    #[serde(default, with = "empty_as_none")]
    pub change_address: Option<Address>,
    pub wallet_height: u32,
    /// Last wallet error, empty if none.
    #[serde(default)]
    pub error: String,
}

mod empty_as_none {
    use super::Address;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        value: &Option<Address>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_ref().map_or("", Address::as_str))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Address>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|s| !s.is_empty()).map(Address::from))
    }
}

/// Subset of `GET /info`. Fields the node adds over time are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct NodeInfo {
    pub name: String,
    pub app_version: String,
    /// `None` until the node has applied its first full block.
    pub full_height: Option<u32>,
    pub headers_height: Option<u32>,
    pub best_full_header_id: Option<BlockId>,
    pub state_type: String,
    pub is_mining: bool,
    pub peers_count: u32,
    pub unconfirmed_count: u32,
}

/// Error body returned by the node for non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ApiError {
    /// Mirrors the HTTP status code.
    pub error: u16,
    pub reason: String,
    #[serde(default)]
    pub detail: Option<String>,
}
