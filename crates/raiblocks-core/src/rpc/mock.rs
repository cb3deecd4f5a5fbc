use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::{CoreError, RpcError};

use super::protocol::ACTION_FIELD;
use super::NodeRpc;

/// A mock node for testing. Answers each action with a canned response
/// registered via the builder and records every payload it receives.
/// Actions without a registered response answer `{}`.
pub struct MockRpc {
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<Map<String, Value>>>,
}

impl MockRpc {
    pub fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            responses: HashMap::new(),
        }
    }

    /// Every payload sent so far, oldest first.
    pub fn requests(&self) -> Vec<Map<String, Value>> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .clone()
    }

    pub fn last_request(&self) -> Option<Map<String, Value>> {
        self.requests().pop()
    }
}

pub struct MockRpcBuilder {
    responses: HashMap<String, Value>,
}

impl MockRpcBuilder {
    pub fn with_response(mut self, action: &str, response: Value) -> Self {
        self.responses.insert(action.to_owned(), response);
        self
    }

    pub fn build(self) -> MockRpc {
        MockRpc {
            responses: self.responses,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl NodeRpc for MockRpc {
    async fn send_payload(
        &self,
        payload: Map<String, Value>,
    ) -> Result<Map<String, Value>, CoreError> {
        let response = payload
            .get(ACTION_FIELD)
            .and_then(Value::as_str)
            .and_then(|action| self.responses.get(action))
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));

        self.requests
            .lock()
            .expect("mock request log poisoned")
            .push(payload);

        // Same decode path as a real body, so a non-object canned response
        // fails the way a non-object HTTP body would.
        let decoded = serde_json::from_value(response).map_err(RpcError::Decode)?;
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn unregistered_action_answers_empty_object() {
        let rpc = MockRpc::builder().build();
        let resp = rpc.call("block_count", Map::new()).await.unwrap();
        assert!(resp.is_empty());
        assert_eq!(rpc.requests().len(), 1);
    }

    #[tokio::test]
    async fn non_object_response_is_decode_error() {
        let rpc = MockRpc::builder()
            .with_response("version", json!(["not", "an", "object"]))
            .build();

        let err = rpc.call("version", Map::new()).await.expect_err("must fail");
        assert!(matches!(err, CoreError::Rpc(RpcError::Decode(_))));
    }
}
