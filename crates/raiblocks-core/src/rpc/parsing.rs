use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::CoreError;

/// Coerce a node value to an integer. The node sends integers as decimal
/// strings; plain JSON integers are accepted too.
pub(super) fn parse_integer<T: FromStr>(
    action: &'static str,
    field: &str,
    value: &Value,
) -> Result<T, CoreError> {
    let invalid = || CoreError::InvalidInteger {
        action,
        field: field.to_owned(),
        value: value.to_string(),
    };

    match value {
        Value::String(s) => s.trim().parse().map_err(|_| invalid()),
        Value::Number(n) if n.is_u64() || n.is_i64() => {
            n.to_string().parse().map_err(|_| invalid())
        }
        _ => Err(invalid()),
    }
}

pub(super) fn required_integer<T: FromStr>(
    action: &'static str,
    resp: &Map<String, Value>,
    field: &str,
) -> Result<T, CoreError> {
    let value = resp.get(field).ok_or_else(|| missing(action, field))?;
    parse_integer(action, field, value)
}

/// Remove `field` from `resp` and coerce it, if the node sent it.
pub(super) fn take_integer<T: FromStr>(
    action: &'static str,
    resp: &mut Map<String, Value>,
    field: &str,
) -> Result<Option<T>, CoreError> {
    resp.remove(field)
        .map(|value| parse_integer(action, field, &value))
        .transpose()
}

pub(super) fn take_required_integer<T: FromStr>(
    action: &'static str,
    resp: &mut Map<String, Value>,
    field: &str,
) -> Result<T, CoreError> {
    take_integer(action, resp, field)?.ok_or_else(|| missing(action, field))
}

pub(super) fn required_string(
    action: &'static str,
    resp: &Map<String, Value>,
    field: &str,
) -> Result<String, CoreError> {
    match resp.get(field) {
        None => Err(missing(action, field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(unexpected(action, field, "a string")),
    }
}

/// Take the list under `field`. The node reports an empty list as `""`, so
/// a missing, null or empty-string value is an empty list.
pub(super) fn take_list(
    action: &'static str,
    resp: &mut Map<String, Value>,
    field: &str,
) -> Result<Vec<Value>, CoreError> {
    match resp.remove(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) if s.is_empty() => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(unexpected(action, field, "a list")),
    }
}

pub(super) fn into_object(
    action: &'static str,
    field: &str,
    value: Value,
) -> Result<Map<String, Value>, CoreError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(unexpected(action, field, "an object")),
    }
}

pub(super) fn into_string(
    action: &'static str,
    field: &str,
    value: Value,
) -> Result<String, CoreError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(unexpected(action, field, "a string")),
    }
}

fn missing(action: &'static str, field: &str) -> CoreError {
    CoreError::MissingField {
        action,
        field: field.to_owned(),
    }
}

fn unexpected(action: &'static str, field: &str, expected: &'static str) -> CoreError {
    CoreError::UnexpectedType {
        action,
        field: field.to_owned(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::object;
    use serde_json::json;

    #[test]
    fn parse_integer_accepts_numeric_strings_beyond_u64() {
        let value = json!("235580100176034320859259343606608761791");
        let raw: u128 = parse_integer("account_info", "balance", &value).expect("should parse");
        assert_eq!(raw, 235_580_100_176_034_320_859_259_343_606_608_761_791);
    }

    #[test]
    fn parse_integer_accepts_json_integers() {
        let n: u64 = parse_integer("version", "rpc_version", &json!(7)).expect("should parse");
        assert_eq!(n, 7);
    }

    #[test]
    fn parse_integer_tolerates_surrounding_whitespace() {
        let n: u64 =
            parse_integer("version", "rpc_version", &json!(" 12 ")).expect("should parse");
        assert_eq!(n, 12);
    }

    #[test]
    fn parse_integer_rejects_non_numeric_text() {
        let err = parse_integer::<u128>("account_balance", "error", &json!("Bad account number"))
            .expect_err("must reject text");
        assert!(matches!(
            err,
            CoreError::InvalidInteger { action: "account_balance", ref field, .. } if field == "error"
        ));
    }

    #[test]
    fn parse_integer_rejects_floats_and_null() {
        assert!(parse_integer::<u64>("a", "f", &json!(1.5)).is_err());
        assert!(parse_integer::<u64>("a", "f", &Value::Null).is_err());
        assert!(parse_integer::<u64>("a", "f", &json!(19.0)).is_err());
        assert!(parse_integer::<u64>("a", "f", &json!("1_000")).is_err());
    }

    #[test]
    fn required_integer_reports_missing_field() {
        let resp = object(json!({ "other": "1" }));
        let err = required_integer::<u64>("account_block_count", &resp, "block_count")
            .expect_err("must report missing field");
        assert!(err.to_string().contains("missing field `block_count`"));
    }

    #[test]
    fn take_integer_leaves_absent_fields_as_none() {
        let mut resp = object(json!({ "balance": "10" }));
        assert_eq!(take_integer::<u128>("a", &mut resp, "weight").expect("ok"), None);
        assert_eq!(take_integer::<u128>("a", &mut resp, "balance").expect("ok"), Some(10));
        assert!(resp.is_empty());
    }

    #[test]
    fn take_list_treats_empty_string_and_null_as_empty() {
        let mut resp = object(json!({ "a": "", "b": null, "c": ["x"] }));
        assert!(take_list("t", &mut resp, "a").expect("ok").is_empty());
        assert!(take_list("t", &mut resp, "b").expect("ok").is_empty());
        assert!(take_list("t", &mut resp, "missing").expect("ok").is_empty());
        assert_eq!(take_list("t", &mut resp, "c").expect("ok"), vec![json!("x")]);
    }

    #[test]
    fn take_list_rejects_non_list_values() {
        let mut resp = object(json!({ "history": { "not": "a list" } }));
        let err = take_list("account_history", &mut resp, "history").expect_err("must reject");
        assert!(matches!(err, CoreError::UnexpectedType { expected: "a list", .. }));
    }

    #[test]
    fn required_string_returns_value_verbatim() {
        let resp = object(json!({ "account": "xrb_1e5aqegc" }));
        assert_eq!(
            required_string("account_get", &resp, "account").expect("ok"),
            "xrb_1e5aqegc"
        );
    }
}
