//! Client for the RaiBlocks node JSON RPC.
//!
//! Every node action is a single HTTP POST whose body is a JSON object
//! carrying an `action` field. [`rpc::NodeRpc`] shapes the request and
//! response of each supported action; [`rpc::HttpRpcClient`] performs the
//! round trip.

pub mod error;
pub mod rpc;
pub mod types;

#[cfg(test)]
pub(crate) mod test_util;

pub use error::{CoreError, RpcError};
pub use rpc::{HttpRpcClient, NodeRpc, DEFAULT_ENDPOINT};
pub use types::{Account, PublicKey, Wallet};
