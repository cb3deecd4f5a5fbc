//! Per-action response shaping.
//!
//! Each function coerces exactly the fields its action is documented to
//! return as integer strings. New numeric-looking fields added by a node
//! stay untouched in the verbatim remainder.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::{Account, PublicKey};

use super::parsing::{
    into_object, into_string, parse_integer, required_integer, required_string, take_integer,
    take_list, take_required_integer,
};
use super::types::{AccountBalance, AccountInfo, BlockCount, HistoryEntry, Raw, Version};

pub(super) fn account_balance(resp: Map<String, Value>) -> Result<AccountBalance, CoreError> {
    let entries = resp
        .iter()
        .map(|(field, value)| {
            parse_integer::<Raw>("account_balance", field, value).map(|raw| (field.clone(), raw))
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;
    Ok(AccountBalance::from_entries(entries))
}

pub(super) fn account_block_count(resp: Map<String, Value>) -> Result<u64, CoreError> {
    required_integer("account_block_count", &resp, "block_count")
}

pub(super) fn account_info(mut resp: Map<String, Value>) -> Result<AccountInfo, CoreError> {
    const ACTION: &str = "account_info";
    Ok(AccountInfo {
        modified_timestamp: take_integer(ACTION, &mut resp, "modified_timestamp")?,
        block_count: take_integer(ACTION, &mut resp, "block_count")?,
        balance: take_integer(ACTION, &mut resp, "balance")?,
        pending: take_integer(ACTION, &mut resp, "pending")?,
        weight: take_integer(ACTION, &mut resp, "weight")?,
        fields: resp,
    })
}

pub(super) fn account(
    action: &'static str,
    resp: Map<String, Value>,
) -> Result<Account, CoreError> {
    required_string(action, &resp, "account").map(Account::from)
}

pub(super) fn account_history(
    mut resp: Map<String, Value>,
) -> Result<Vec<HistoryEntry>, CoreError> {
    const ACTION: &str = "account_history";
    take_list(ACTION, &mut resp, "history")?
        .into_iter()
        .map(|entry| {
            let mut fields = into_object(ACTION, "history", entry)?;
            let amount = take_required_integer(ACTION, &mut fields, "amount")?;
            Ok(HistoryEntry { amount, fields })
        })
        .collect()
}

pub(super) fn account_list(mut resp: Map<String, Value>) -> Result<Vec<Account>, CoreError> {
    const ACTION: &str = "account_list";
    take_list(ACTION, &mut resp, "accounts")?
        .into_iter()
        .map(|entry| into_string(ACTION, "accounts", entry).map(Account::from))
        .collect()
}

pub(super) fn version(mut resp: Map<String, Value>) -> Result<Version, CoreError> {
    const ACTION: &str = "version";
    Ok(Version {
        rpc_version: take_required_integer(ACTION, &mut resp, "rpc_version")?,
        store_version: take_required_integer(ACTION, &mut resp, "store_version")?,
        fields: resp,
    })
}

/// The node acknowledges `stop` with a `success` key; its value is not
/// meaningful.
pub(super) fn stop(resp: &Map<String, Value>) -> bool {
    resp.contains_key("success")
}

pub(super) fn account_key(resp: Map<String, Value>) -> Result<PublicKey, CoreError> {
    required_string("account_key", &resp, "key").map(PublicKey::from)
}

pub(super) fn account_representative(resp: Map<String, Value>) -> Result<Account, CoreError> {
    required_string("account_representative", &resp, "representative").map(Account::from)
}

pub(super) fn account_weight(resp: Map<String, Value>) -> Result<Raw, CoreError> {
    required_integer("account_weight", &resp, "weight")
}

pub(super) fn available_supply(resp: Map<String, Value>) -> Result<Raw, CoreError> {
    required_integer("available_supply", &resp, "available")
}

pub(super) fn block_count(mut resp: Map<String, Value>) -> Result<BlockCount, CoreError> {
    const ACTION: &str = "block_count";
    Ok(BlockCount {
        count: take_required_integer(ACTION, &mut resp, "count")?,
        unchecked: take_required_integer(ACTION, &mut resp, "unchecked")?,
        fields: resp,
    })
}
