//! Key order normalization
//!
//! The top `keep_order_depth` levels of a document keep the order their keys
//! were written in. Every level below is sorted by key, and once a level is
//! sorted all of its descendants are sorted too.

use serde_json::{Map, Value};

/// Rewrite the key order of `value`.
///
/// Mappings at depth `< keep_order_depth` keep their order; all other
/// mappings are sorted lexicographically by key. Non-mapping values are
/// returned unchanged. The depth is signed so that it keeps decreasing
/// below zero and never re-enables order preservation further down.
///
/// # Examples
///
/// ```
/// use keysync_tree::normalize_order;
/// use serde_json::json;
///
/// let doc = json!({"z": {"b": 1, "a": 2}, "y": 0});
/// let kept = normalize_order(doc, 1);
///
/// let keys: Vec<_> = kept.as_object().unwrap().keys().cloned().collect();
/// assert_eq!(keys, ["z", "y"]);
/// let inner: Vec<_> = kept["z"].as_object().unwrap().keys().cloned().collect();
/// assert_eq!(inner, ["a", "b"]);
/// ```
pub fn normalize_order(value: Value, keep_order_depth: i32) -> Value {
    let map = match value {
        Value::Object(map) => map,
        leaf => return leaf,
    };
    let next_depth = keep_order_depth.saturating_sub(1);

    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    if keep_order_depth <= 0 {
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    Value::Object(
        entries
            .into_iter()
            .map(|(key, child)| (key, normalize_order(child, next_depth)))
            .collect::<Map<String, Value>>(),
    )
}
