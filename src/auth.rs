use crate::Error;
use http::{HeaderMap, HeaderValue, header::HeaderName};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Header the Ergo node checks on protected endpoints.
pub const API_KEY_HEADER: &str = "api_key";

/// A string that never shows up in `Debug`/`Display` output.
///
/// Serialization writes the real value, so request bodies still carry it.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct SecretString(String);

impl SecretString {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl Serialize for SecretString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self)
    }
}

#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Auth {
    /// Ergo node API key, sent as the `api_key` header.
    ApiKey { key: SecretString },
}

impl Auth {
    #[must_use]
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey {
            key: SecretString::new(key),
        }
    }

    pub(crate) fn secrets(&self) -> Vec<&str> {
        match self {
            Self::ApiKey { key } => vec![key.expose()],
        }
    }

    pub(crate) fn apply(&self, headers: &mut HeaderMap) -> Result<(), Error> {
        match self {
            Self::ApiKey { key } => {
                let mut value =
                    HeaderValue::from_str(key.expose()).map_err(|err| Error::InvalidConfig {
                        message: "invalid api_key header value".into(),
                        source: Some(Box::new(err)),
                    })?;
                value.set_sensitive(true);
                headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
            }
        }
        Ok(())
    }
}
