//! RaiBlocks node RPC abstraction layer.
//!
//! Defines the [`NodeRpc`] trait and provides an HTTP implementation
//! ([`HttpRpcClient`]) plus a test mock (`mock::MockRpc`).

mod http_adapter;
#[cfg(test)]
pub mod mock;
mod parsing;
mod protocol;
mod response;
pub mod types;

pub use http_adapter::{HttpRpcClient, DEFAULT_ENDPOINT};
pub use types::{
    AccountBalance, AccountInfo, AccountInfoOptions, BlockCount, HistoryEntry, Raw, Version,
};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::{Account, PublicKey, Wallet};

use self::protocol::{with_action, Payload};

/// The node actions this crate knows how to shape.
///
/// Implementations only provide [`NodeRpc::send_payload`], a single
/// request/response exchange. Every other method is built on it: the typed
/// methods normalize their arguments into the payload the action expects,
/// go through [`NodeRpc::call`], then coerce the fields the action returns
/// as integer strings.
#[async_trait]
pub trait NodeRpc: Send + Sync {
    /// Send a complete request body and decode the response object.
    async fn send_payload(&self, payload: Map<String, Value>)
        -> Result<Map<String, Value>, CoreError>;

    /// Invoke `action` with `params`. The `action` key is set (or
    /// overwritten) in `params`; nothing else is changed.
    async fn call(
        &self,
        action: &str,
        params: Map<String, Value>,
    ) -> Result<Map<String, Value>, CoreError> {
        self.send_payload(with_action(action, params)).await
    }

    /// How many RAW `account` owns and how many are not yet received.
    async fn account_balance(&self, account: &Account) -> Result<AccountBalance, CoreError> {
        let params = Payload::new().field("account", account).into_params();
        let resp = self.call("account_balance", params).await?;
        response::account_balance(resp)
    }

    /// Number of blocks in `account`'s chain.
    async fn account_block_count(&self, account: &Account) -> Result<u64, CoreError> {
        let params = Payload::new().field("account", account).into_params();
        let resp = self.call("account_block_count", params).await?;
        response::account_block_count(resp)
    }

    /// Frontier, open block, representative block, balance, last modified
    /// timestamp and block count for `account`, plus whichever optional
    /// attributes `options` enables.
    async fn account_info(
        &self,
        account: &Account,
        options: AccountInfoOptions,
    ) -> Result<AccountInfo, CoreError> {
        let params = Payload::new()
            .field("account", account)
            .flag("representative", options.representative)
            .flag("weight", options.weight)
            .flag("pending", options.pending)
            .into_params();
        let resp = self.call("account_info", params).await?;
        response::account_info(resp)
    }

    /// Create a new account from the next deterministic key in `wallet`.
    /// Requires `enable_control` on the node.
    async fn account_create(&self, wallet: &Wallet) -> Result<Account, CoreError> {
        let params = Payload::new().field("wallet", wallet).into_params();
        let resp = self.call("account_create", params).await?;
        response::account("account_create", resp)
    }

    /// Account address for a public key.
    async fn account_get(&self, key: &PublicKey) -> Result<Account, CoreError> {
        let params = Payload::new().field("key", key).into_params();
        let resp = self.call("account_get", params).await?;
        response::account("account_get", resp)
    }

    /// Up to `count` send/receive entries of `account`, newest first.
    async fn account_history(
        &self,
        account: &Account,
        count: u64,
    ) -> Result<Vec<HistoryEntry>, CoreError> {
        let params = Payload::new()
            .field("account", account)
            .count("count", count)
            .into_params();
        let resp = self.call("account_history", params).await?;
        response::account_history(resp)
    }

    /// Every account held in `wallet`.
    async fn account_list(&self, wallet: &Wallet) -> Result<Vec<Account>, CoreError> {
        let params = Payload::new().field("wallet", wallet).into_params();
        let resp = self.call("account_list", params).await?;
        response::account_list(resp)
    }

    /// Public key of `account`.
    async fn account_key(&self, account: &Account) -> Result<PublicKey, CoreError> {
        let params = Payload::new().field("account", account).into_params();
        let resp = self.call("account_key", params).await?;
        response::account_key(resp)
    }

    /// Representative currently chosen by `account`.
    async fn account_representative(&self, account: &Account) -> Result<Account, CoreError> {
        let params = Payload::new().field("account", account).into_params();
        let resp = self.call("account_representative", params).await?;
        response::account_representative(resp)
    }

    /// Voting weight delegated to `account`, in RAW.
    async fn account_weight(&self, account: &Account) -> Result<Raw, CoreError> {
        let params = Payload::new().field("account", account).into_params();
        let resp = self.call("account_weight", params).await?;
        response::account_weight(resp)
    }

    /// Circulating supply in RAW.
    async fn available_supply(&self) -> Result<Raw, CoreError> {
        let resp = self.call("available_supply", Map::new()).await?;
        response::available_supply(resp)
    }

    /// Checked and unchecked block counts of the node's ledger.
    async fn block_count(&self) -> Result<BlockCount, CoreError> {
        let resp = self.call("block_count", Map::new()).await?;
        response::block_count(resp)
    }

    /// RPC protocol and store versions plus the node vendor string.
    async fn version(&self) -> Result<Version, CoreError> {
        let resp = self.call("version", Map::new()).await?;
        response::version(resp)
    }

    /// Ask the node to shut down. Requires `enable_control`.
    async fn stop(&self) -> Result<bool, CoreError> {
        let resp = self.call("stop", Map::new()).await?;
        Ok(response::stop(&resp))
    }
}
