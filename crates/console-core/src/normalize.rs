//! Response shape normalization.
//!
//! The backend is inconsistent about list envelopes: some endpoints return a
//! bare array, some `{ "<key>": [...] }`, some `{ "data": [...] }` and some
//! `{ "data": { "<key>": [...] } }`. Everything here fails open: an
//! unexpected shape yields no items instead of an error.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Extracts the items of a list payload, one level deep.
///
/// An array is returned as-is and `key` is ignored. An object yields the
/// array stored under `key`. Anything else yields an empty slice. Nested
/// wrappers such as `{ "data": { "assets": [...] } }` must be unwrapped by
/// the caller first (see [`unwrap_data`]).
pub fn extract_list<'a>(payload: &'a Value, key: &str) -> &'a [Value] {
    match payload {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get(key) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    }
}

/// Returns `payload.data` when present, otherwise the payload itself.
pub fn unwrap_data(payload: &Value) -> &Value {
    match payload {
        Value::Object(map) => map.get("data").unwrap_or(payload),
        _ => payload,
    }
}

/// Picks a singular record out of `{key: {...}}`, `{data: {key: {...}}}`,
/// `{data: {...}}` or a bare object. Returns `None` for non-objects.
pub fn extract_record<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    let inner = unwrap_data(payload);
    let record = match inner {
        Value::Object(map) => match map.get(key) {
            Some(value @ Value::Object(_)) => value,
            _ => inner,
        },
        _ => return None,
    };
    record.is_object().then_some(record)
}

/// Typed list extraction after one `data` unwrap. Elements that do not
/// deserialize into `T` are skipped.
pub fn normalize_list<T: DeserializeOwned>(payload: &Value, key: &str) -> Vec<T> {
    let items = match extract_list(payload, key) {
        [] => extract_list(unwrap_data(payload), key),
        items => items,
    };

    items
        .iter()
        .filter_map(|item| match T::deserialize(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed {} entry: {}", key, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_array_passthrough_ignores_key() {
        let payload = json!([1, 2, 3]);
        assert_eq!(extract_list(&payload, "anything"), &[json!(1), json!(2), json!(3)]);
        assert!(std::ptr::eq(
            extract_list(&payload, "anything"),
            payload.as_array().unwrap().as_slice()
        ));
    }

    #[test]
    fn test_keyed_array() {
        let payload = json!({ "assets": [{ "id": "a" }] });
        assert_eq!(extract_list(&payload, "assets"), &[json!({ "id": "a" })]);
    }

    #[test]
    fn test_degenerate_shapes_are_empty() {
        assert!(extract_list(&json!([]), "assets").is_empty());
        assert!(extract_list(&Value::Null, "assets").is_empty());
        assert!(extract_list(&json!("text"), "assets").is_empty());
        assert!(extract_list(&json!(42), "assets").is_empty());
        assert!(extract_list(&json!({ "assets": "not-array" }), "assets").is_empty());
        assert!(extract_list(&json!({ "other": [1] }), "assets").is_empty());
    }

    #[test]
    fn test_does_not_recurse_into_data() {
        let payload = json!({ "data": { "assets": [{ "id": "a" }] } });
        assert!(extract_list(&payload, "assets").is_empty());
        assert_eq!(extract_list(unwrap_data(&payload), "assets").len(), 1);
    }

    #[test]
    fn test_normalize_list_handles_every_envelope() {
        let shapes = [
            json!([{ "id": "a" }]),
            json!({ "assets": [{ "id": "a" }] }),
            json!({ "data": [{ "id": "a" }] }),
            json!({ "data": { "assets": [{ "id": "a" }] } }),
        ];
        for shape in shapes {
            let items: Vec<Item> = normalize_list(&shape, "assets");
            assert_eq!(items, vec![Item { id: "a".into() }], "shape {}", shape);
        }
    }

    #[test]
    fn test_normalize_list_skips_malformed_entries() {
        let payload = json!([{ "id": "a" }, { "name": "no id" }, 7, { "id": "b" }]);
        let items: Vec<Item> = normalize_list(&payload, "assets");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, "b");
    }

    #[test]
    fn test_extract_record_shapes() {
        let wrapped = json!({ "asset": { "id": "a" } });
        let nested = json!({ "data": { "asset": { "id": "a" } } });
        let data_only = json!({ "data": { "id": "a" } });
        let bare = json!({ "id": "a" });
        for payload in [&wrapped, &nested, &data_only, &bare] {
            let record = extract_record(payload, "asset").unwrap();
            assert_eq!(record["id"], "a");
        }
        assert!(extract_record(&json!([1]), "asset").is_none());
        assert!(extract_record(&Value::Null, "asset").is_none());
    }
}
