/// Failure of the round trip itself. Both variants carry the underlying
/// error untouched.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("RPC communication failure")]
    Rpc(#[from] RpcError),

    #[error("`{action}` response is missing field `{field}`")]
    MissingField {
        action: &'static str,
        field: String,
    },

    #[error("`{action}` response field `{field}` is not an integer: {value}")]
    InvalidInteger {
        action: &'static str,
        field: String,
        value: String,
    },

    #[error("`{action}` response field `{field}` is not {expected}")]
    UnexpectedType {
        action: &'static str,
        field: String,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn rpc_failure_leaves_detail_to_source_chain() {
        let decode = serde_json::from_str::<serde_json::Value>("<html>")
            .expect_err("html is not JSON");
        let detail = decode.to_string();
        let err = CoreError::from(RpcError::from(decode));

        assert_eq!(err.to_string(), "RPC communication failure");
        let source = err.source().expect("rpc failure must expose its cause");
        assert_eq!(source.to_string(), detail);
    }
}
