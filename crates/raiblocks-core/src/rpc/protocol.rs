use serde_json::{Map, Value};

/// Field name the node dispatches on.
pub(super) const ACTION_FIELD: &str = "action";

/// Request body under construction. Every field value is a JSON string,
/// including booleans and counts.
#[derive(Debug, Default)]
pub(super) struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn field(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.fields
            .insert(key.to_owned(), Value::String(value.as_ref().to_owned()));
        self
    }

    pub(super) fn count(self, key: &str, value: u64) -> Self {
        self.field(key, value.to_string())
    }

    /// Adds `key` only when `enabled`. A disabled flag is left out of the
    /// body entirely rather than sent as `"false"`.
    pub(super) fn flag(self, key: &str, enabled: bool) -> Self {
        if enabled {
            self.field(key, strbool(enabled))
        } else {
            self
        }
    }

    pub(super) fn into_params(self) -> Map<String, Value> {
        self.fields
    }
}

/// The node's spelling of a boolean parameter.
fn strbool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Sets the `action` field, overwriting any value already present. No other
/// key is touched.
pub(super) fn with_action(action: &str, mut params: Map<String, Value>) -> Map<String, Value> {
    params.insert(ACTION_FIELD.to_owned(), Value::String(action.to_owned()));
    params
}
