//! Data structures returned by the explorer API.

use super::common::{Address, BlockId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The miner credited with a block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Miner {
    /// Reward address of the miner.
    pub address: Address,
    /// Display name, e.g. `"BTC.com"`; pools are named, solo miners get a shortened address.
    pub name: String,
}

impl Miner {
    #[must_use]
    pub fn new(address: impl Into<Address>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<Address>) -> Self {
        self.address = address.into();
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// One entry of `GET /blocks`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct BlockInfo {
    pub id: BlockId,
    pub height: u32,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub transactions_count: u32,
    pub miner: Miner,
    /// Block size in bytes.
    pub size: u32,
    pub difficulty: u64,
    /// Reward in nanoErgs.
    pub miner_reward: u64,
}

/// Paginated envelope used by explorer list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Items<T> {
    pub items: Vec<T>,
    /// Total number of entries on the server, not just this page.
    pub total: u64,
}

impl<T> Items<T> {
    /// Whether entries remain after a page that started at `offset`.
    #[must_use]
    pub fn has_more(&self, offset: u32) -> bool {
        (offset as u64).saturating_add(self.items.len() as u64) < self.total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paging and sort parameters for explorer list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Paging {
    pub offset: u32,
    pub limit: u32,
    /// Field to sort by, e.g. `"height"`.
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 20,
            sort_by: None,
            sort_direction: None,
        }
    }
}

impl Paging {
    #[must_use]
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset,
            limit,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn sort(mut self, by: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(by.into());
        self.sort_direction = Some(direction);
        self
    }

    /// The page following this one.
    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit),
            ..self.clone()
        }
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(by) = &self.sort_by {
            pairs.push(("sortBy", by.clone()));
        }
        if let Some(direction) = self.sort_direction {
            pairs.push(("sortDirection", direction.as_str().to_owned()));
        }
        pairs
    }
}
