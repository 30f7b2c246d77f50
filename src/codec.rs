//! Conversion between typed records and the JSON shapes spoken by the gateway.
//!
//! Outgoing records are serialized with serde and then pruned: every value equal to the empty
//! value of its type (`null`, `0`, `""`, `[]`, `{}`) is dropped, bottom-up, so that a nested
//! record which ends up empty is itself removed from its parent. Booleans are never pruned;
//! request records model them as `Option<bool>` so that an unset flag serializes to `null`
//! (and is dropped) while an explicit `false` reaches the wire.
//!
//! Elements of arrays stay in place: scalars are kept verbatim and only nested records are pruned.
//!
//! Keys of the produced objects are emitted in lexicographic order.
//!
//! Incoming responses are decoded leniently: missing keys become `None`, missing or `null`
//! arrays become empty vectors and identifier-like fields accept both strings and numbers.
//! Amounts also accept numeric strings.

use crate::{endpoints::Operation, Error};
use anyhow::anyhow;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Serializes a request record into the minimal JSON object sent to the gateway.
pub fn to_payload<T>(record: &T) -> Result<Map<String, Value>, Error>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(record).map_err(|e| Error::Other(e.into()))?;

    match prune(value) {
        None => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(Error::Other(anyhow!(
            "Request payload must be a JSON object, got: {}",
            other
        ))),
    }
}

/// Removes empty values from `value`, returning `None` if `value` itself is empty.
pub fn prune(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(Value::Bool(b)),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(Value::Number(n)),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(Value::String(s)),
        Value::Array(items) if items.is_empty() => None,
        // Elements are kept in place, only nested records get pruned
        Value::Array(items) => Some(Value::Array(items.into_iter().map(prune_element).collect())),
        Value::Object(map) => {
            let map: Map<String, Value> = map
                .into_iter()
                .filter_map(|(k, v)| prune(v).map(|v| (k, v)))
                .collect();

            if map.is_empty() {
                None
            } else {
                Some(Value::Object(map))
            }
        }
    }
}

fn prune_element(item: Value) -> Value {
    match item {
        Value::Object(_) => prune(item).unwrap_or_else(|| Value::Object(Map::new())),
        Value::Array(_) => prune(item).unwrap_or_else(|| Value::Array(Vec::new())),
        scalar => scalar,
    }
}

/// Inserts `value` under `key` unless the payload already carries a value for it.
///
/// The stamped value is sent as is: configuration records keep their zero fields.
pub(crate) fn stamp<T>(payload: &mut Map<String, Value>, key: &str, value: &T) -> Result<(), Error>
where
    T: Serialize + ?Sized,
{
    if payload.contains_key(key) {
        return Ok(());
    }

    match serde_json::to_value(value).map_err(|e| Error::Other(e.into()))? {
        Value::Null => {}
        value => {
            payload.insert(key.to_string(), value);
        }
    }

    Ok(())
}

/// Decodes the JSON returned by `operation` into a typed response record.
pub fn decode<T>(operation: Operation, value: Value) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value).map_err(|source| Error::MalformedResponse {
        operation: operation.to_string(),
        source,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

/// Accepts a JSON string or number (or `null`) for fields whose type drifted across API versions.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

/// Accepts a JSON integer or a numeric string (or `null`).
pub(crate) fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("expected an integer, got {}", n))),
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => Ok(None),
        Some(StringOrNumber::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got {:?}", s))),
    }
}

/// Accepts a JSON number or a numeric string (or `null`) for amounts.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {}", n))),
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => Ok(None),
        Some(StringOrNumber::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got {:?}", s))),
    }
}

/// Treats a `null` array the same as a missing one.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct Inner {
        line1: String,
        zip: String,
    }

    #[derive(Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct Outer {
        amount: f64,
        order_id: String,
        add_to_vault: Option<bool>,
        transaction_id: u64,
        address: Option<Inner>,
        user_defined_fields: Vec<Inner>,
    }

    #[test]
    fn only_non_empty_fields_are_serialized() {
        let payload = to_payload(&Outer {
            amount: 10.0,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(Value::Object(payload), json!({ "amount": 10.0 }));
    }

    #[test]
    fn default_record_serializes_to_empty_object() {
        assert!(to_payload(&Outer::default()).unwrap().is_empty());
    }

    #[test]
    fn empty_nested_records_are_dropped() {
        let payload = to_payload(&Outer {
            order_id: "o-1".into(),
            address: Some(Inner::default()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(Value::Object(payload), json!({ "orderId": "o-1" }));
    }

    #[test]
    fn nested_records_are_pruned_recursively() {
        let payload = to_payload(&Outer {
            address: Some(Inner {
                line1: "1 Main St".into(),
                zip: String::new(),
            }),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            Value::Object(payload),
            json!({ "address": { "line1": "1 Main St" } })
        );
    }

    #[test]
    fn explicit_false_is_kept() {
        let payload = to_payload(&Outer {
            add_to_vault: Some(false),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(Value::Object(payload), json!({ "addToVault": false }));
    }

    #[test]
    fn scalar_array_elements_are_kept_verbatim() {
        let payload = to_payload(&json!({
            "ids": [0, 5, ""],
            "tags": ["a", ""],
            "fields": [{ "name": "n", "value": "" }, { "name": "" }],
            "empty": []
        }))
        .unwrap();

        assert_eq!(
            Value::Object(payload),
            json!({
                "ids": [0, 5, ""],
                "tags": ["a", ""],
                "fields": [{ "name": "n" }, {}]
            })
        );
    }

    #[test]
    fn stamp_does_not_override_existing_keys() {
        let mut payload = Map::new();
        stamp(&mut payload, "publicKey", "first").unwrap();
        stamp(&mut payload, "publicKey", "second").unwrap();

        assert_eq!(payload["publicKey"], json!("first"));
    }

    #[test]
    fn stamped_records_keep_their_zero_fields() {
        let mut payload = Map::new();
        stamp(
            &mut payload,
            "developerApplication",
            &json!({ "developerId": 1, "integrationType": 0 }),
        )
        .unwrap();

        assert_eq!(payload["developerApplication"]["integrationType"], json!(0));
    }

    #[test]
    fn non_object_payloads_are_rejected() {
        assert!(to_payload(&vec![1, 2, 3]).is_err());
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(default, rename_all = "camelCase")]
    struct Lenient {
        #[serde(deserialize_with = "lenient_string")]
        order_id: Option<String>,
        #[serde(deserialize_with = "null_as_empty")]
        items: Vec<u32>,
    }

    #[test]
    fn identifiers_accept_strings_and_numbers() {
        let a: Lenient = serde_json::from_value(json!({ "orderId": 42 })).unwrap();
        let b: Lenient = serde_json::from_value(json!({ "orderId": "42" })).unwrap();

        assert_eq!(a.order_id.as_deref(), Some("42"));
        assert_eq!(b.order_id.as_deref(), Some("42"));
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(default, rename_all = "camelCase")]
    struct Counted {
        #[serde(deserialize_with = "lenient_integer")]
        batch_id: Option<i64>,
    }

    #[test]
    fn integers_accept_numeric_strings() {
        let a: Counted = serde_json::from_value(json!({ "batchId": 7 })).unwrap();
        let b: Counted = serde_json::from_value(json!({ "batchId": " 7" })).unwrap();
        let c: Counted = serde_json::from_value(json!({ "batchId": null })).unwrap();

        assert_eq!(a.batch_id, Some(7));
        assert_eq!(b.batch_id, Some(7));
        assert_eq!(c.batch_id, None);
        assert!(serde_json::from_value::<Counted>(json!({ "batchId": "seven" })).is_err());
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(default, rename_all = "camelCase")]
    struct Priced {
        #[serde(deserialize_with = "lenient_f64")]
        amount: Option<f64>,
    }

    #[test]
    fn amounts_accept_numeric_strings() {
        let a: Priced = serde_json::from_value(json!({ "amount": 5.25 })).unwrap();
        let b: Priced = serde_json::from_value(json!({ "amount": "5.00" })).unwrap();
        let c: Priced = serde_json::from_value(json!({ "amount": "" })).unwrap();
        let d: Priced = serde_json::from_value(json!({})).unwrap();

        assert_eq!(a.amount, Some(5.25));
        assert_eq!(b.amount, Some(5.0));
        assert_eq!(c.amount, None);
        assert_eq!(d.amount, None);
        assert!(serde_json::from_value::<Priced>(json!({ "amount": "five" })).is_err());
    }

    #[test]
    fn null_and_missing_arrays_are_empty() {
        let a: Lenient = serde_json::from_value(json!({ "items": null })).unwrap();
        let b: Lenient = serde_json::from_value(json!({})).unwrap();

        assert!(a.items.is_empty());
        assert!(b.items.is_empty());
        assert_eq!(a.order_id, None);
    }

    #[test]
    fn shape_mismatches_are_malformed_responses() {
        let err = decode::<Lenient>(Operation::GetBatch, json!({ "items": "nope" })).unwrap_err();

        assert_eq!(err.kind(), crate::error::ErrorKind::MalformedResponse);
    }
}
