//! Shaped responses of the typed node actions.
//!
//! Only the fields an action is known to return as integer strings are
//! lifted into typed members. Everything else the node sent is kept
//! verbatim in `fields`, so an unexpected or error response is never lost.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// A quantity of RAW, the node's base unit.
pub type Raw = u128;

// ==============================================================================
// Request Options
// ==============================================================================

/// Optional attributes requested from `account_info`. A flag left `false`
/// is not sent at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountInfoOptions {
    pub representative: bool,
    pub weight: bool,
    pub pending: bool,
}

// ==============================================================================
// Account Responses
// ==============================================================================

/// `account_balance` result: every returned field as RAW, typically
/// `balance` and `pending`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccountBalance {
    entries: BTreeMap<String, Raw>,
}

impl AccountBalance {
    pub(crate) fn from_entries(entries: BTreeMap<String, Raw>) -> Self {
        Self { entries }
    }

    pub fn balance(&self) -> Option<Raw> {
        self.get("balance")
    }

    pub fn pending(&self) -> Option<Raw> {
        self.get("pending")
    }

    pub fn get(&self, field: &str) -> Option<Raw> {
        self.entries.get(field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Raw)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `account_info` result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Raw>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<Raw>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Raw>,
    /// `frontier`, `open_block`, `representative_block`, `representative`
    /// and anything else, as returned.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl AccountInfo {
    pub fn frontier(&self) -> Option<&str> {
        self.fields.get("frontier").and_then(Value::as_str)
    }

    pub fn open_block(&self) -> Option<&str> {
        self.fields.get("open_block").and_then(Value::as_str)
    }

    pub fn representative_block(&self) -> Option<&str> {
        self.fields.get("representative_block").and_then(Value::as_str)
    }

    pub fn representative(&self) -> Option<&str> {
        self.fields.get("representative").and_then(Value::as_str)
    }
}

/// One `account_history` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub amount: Raw,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl HistoryEntry {
    pub fn hash(&self) -> Option<&str> {
        self.fields.get("hash").and_then(Value::as_str)
    }

    /// `send` or `receive`.
    pub fn kind(&self) -> Option<&str> {
        self.fields.get("type").and_then(Value::as_str)
    }

    pub fn account(&self) -> Option<&str> {
        self.fields.get("account").and_then(Value::as_str)
    }
}

// ==============================================================================
// Node Responses
// ==============================================================================

/// `version` result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Version {
    pub rpc_version: u64,
    pub store_version: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Version {
    pub fn node_vendor(&self) -> Option<&str> {
        self.fields.get("node_vendor").and_then(Value::as_str)
    }
}

/// `block_count` result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockCount {
    pub count: u64,
    pub unchecked: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
