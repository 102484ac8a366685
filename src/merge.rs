// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Locsync Contributors

//! Deep merge over JSON trees
//!
//! The merge walks a source tree and a target tree in parallel: nested
//! objects are combined key-by-key, everything else (strings, numbers,
//! arrays, null) is a leaf and overwrites the target value wholesale.
//! Arrays are never concatenated or diffed.

use serde::Serialize;
use serde_json::{Map, Value};

/// Recursively merge `source` into `target`, mutating `target` in place.
///
/// For every key in a source object: if the source value is itself an
/// object, the target gets an object at that key (any non-object value is
/// replaced by an empty one) and the merge recurses; otherwise the source
/// value is cloned over whatever the target held. Keys of `target` absent
/// from `source` are left untouched. Total over any two JSON values.
pub fn deep_merge(target: &mut Value, source: &Value) {
    let Value::Object(src) = source else {
        // Leaf source replaces the target outright.
        *target = source.clone();
        return;
    };

    if !matches!(target, Value::Object(_)) {
        *target = Value::Object(Map::new());
    }

    if let Value::Object(tgt) = target {
        for (key, value) in src {
            match value {
                Value::Object(_) => {
                    let node = tgt
                        .entry(key.clone())
                        .or_insert_with(|| Value::Object(Map::new()));
                    deep_merge(node, value);
                }
                _ => {
                    tgt.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

/// Pure variant: returns `base` with `payload` merged on top, leaving both
/// inputs untouched.
pub fn merged(base: &Value, payload: &Value) -> Value {
    let mut out = base.clone();
    deep_merge(&mut out, payload);
    out
}

/// Per-merge leaf key accounting, reported by `apply` and `--dry-run`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeStats {
    /// Leaf keys the base did not have at all
    pub added: usize,
    /// Leaf keys whose value changes
    pub overwritten: usize,
    /// Leaf keys already holding the payload's value
    pub unchanged: usize,
}

impl MergeStats {
    /// Total leaf keys carried by the payload
    pub fn total(&self) -> usize {
        self.added + self.overwritten + self.unchanged
    }
}

/// Count what merging `payload` into `base` would do, without merging.
pub fn merge_stats(base: &Value, payload: &Value) -> MergeStats {
    let mut stats = MergeStats::default();
    collect_stats(base, payload, &mut stats);
    stats
}

fn collect_stats(base: &Value, payload: &Value, stats: &mut MergeStats) {
    let Value::Object(src) = payload else {
        return;
    };
    for (key, value) in src {
        let existing = base.as_object().and_then(|m| m.get(key));
        match value {
            Value::Object(_) => {
                // Recurse through intermediate nodes; a scalar in the way
                // counts against its replacement leaves below.
                collect_stats(existing.unwrap_or(&Value::Null), value, stats);
            }
            _ => match existing {
                None => stats.added += 1,
                Some(old) if old == value => stats.unchanged += 1,
                Some(_) => stats.overwritten += 1,
            },
        }
    }
}

/// Number of leaf keys (non-object values) in a tree.
pub fn leaf_count(tree: &Value) -> usize {
    match tree {
        Value::Object(map) => map.values().map(leaf_count).sum(),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_adds_new_nested_keys() {
        let mut target = json!({});
        deep_merge(&mut target, &json!({"a": {"b": "c"}}));
        assert_eq!(target, json!({"a": {"b": "c"}}));
    }

    #[test]
    fn test_merge_preserves_sibling_keys() {
        let mut target = json!({"a": {"b": "old", "c": "keep"}});
        deep_merge(&mut target, &json!({"a": {"b": "new"}}));
        assert_eq!(target, json!({"a": {"b": "new", "c": "keep"}}));
    }

    #[test]
    fn test_merge_preserves_top_level_keys() {
        let mut target = json!({"Dashboard": {"Title": "Home"}, "Faq": {"Q1": "?"}});
        deep_merge(&mut target, &json!({"Faq": {"Q1": "!"}}));
        assert_eq!(target["Dashboard"]["Title"], "Home");
        assert_eq!(target["Faq"]["Q1"], "!");
    }

    #[test]
    fn test_merge_replaces_array_wholesale() {
        let mut target = json!({"steps": ["one", "two", "three"]});
        deep_merge(&mut target, &json!({"steps": ["uno"]}));
        assert_eq!(target, json!({"steps": ["uno"]}));
    }

    #[test]
    fn test_merge_scalar_replaces_mapping() {
        let mut target = json!({"a": {"deep": {"tree": 1}}});
        deep_merge(&mut target, &json!({"a": "flat"}));
        assert_eq!(target, json!({"a": "flat"}));
    }

    #[test]
    fn test_merge_mapping_replaces_scalar() {
        let mut target = json!({"a": "flat"});
        deep_merge(&mut target, &json!({"a": {"deep": "tree"}}));
        assert_eq!(target, json!({"a": {"deep": "tree"}}));
    }

    #[test]
    fn test_merge_empty_payload_is_noop() {
        let mut target = json!({"a": {"b": ["x"]}});
        let before = target.clone();
        deep_merge(&mut target, &json!({}));
        assert_eq!(target, before);
    }

    #[test]
    fn test_merge_into_non_object_target() {
        let mut target = json!("just a string");
        deep_merge(&mut target, &json!({"a": "b"}));
        assert_eq!(target, json!({"a": "b"}));
    }

    #[test]
    fn test_merge_leaf_source_replaces_target() {
        let mut target = json!({"a": "b"});
        deep_merge(&mut target, &json!(42));
        assert_eq!(target, json!(42));
    }

    #[test]
    fn test_merged_leaves_inputs_untouched() {
        let base = json!({"a": {"b": "old"}});
        let payload = json!({"a": {"b": "new"}});
        let result = merged(&base, &payload);
        assert_eq!(result, json!({"a": {"b": "new"}}));
        assert_eq!(base, json!({"a": {"b": "old"}}));
    }

    #[test]
    fn test_merge_stats_counts() {
        let base = json!({"a": {"b": "old", "c": "keep"}});
        let payload = json!({"a": {"b": "new", "c": "keep", "d": "add"}});
        let stats = merge_stats(&base, &payload);
        assert_eq!(
            stats,
            MergeStats {
                added: 1,
                overwritten: 1,
                unchanged: 1,
            }
        );
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_merge_stats_through_scalar_intermediate() {
        // Payload drills through a key the base holds as a scalar.
        let base = json!({"a": "flat"});
        let payload = json!({"a": {"b": "new"}});
        let stats = merge_stats(&base, &payload);
        assert_eq!(stats.added, 1);
        assert_eq!(stats.overwritten, 0);
    }

    #[test]
    fn test_merge_stats_empty_payload() {
        let stats = merge_stats(&json!({"a": 1}), &json!({}));
        assert_eq!(stats, MergeStats::default());
    }

    #[test]
    fn test_leaf_count() {
        assert_eq!(leaf_count(&json!({})), 0);
        assert_eq!(leaf_count(&json!("s")), 1);
        assert_eq!(leaf_count(&json!({"a": {"b": "x", "c": ["y"]}, "d": 1})), 3);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn json_leaf() -> impl Strategy<Value = Value> {
            prop_oneof![
                Just(Value::Null),
                any::<bool>().prop_map(Value::Bool),
                any::<i64>().prop_map(|n| Value::Number(n.into())),
                "[a-z]{0,8}".prop_map(Value::String),
            ]
        }

        fn json_tree() -> impl Strategy<Value = Value> {
            json_leaf().prop_recursive(3, 24, 4, |inner| {
                prop_oneof![
                    prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                    prop::collection::btree_map("[a-e]{1,3}", inner, 0..4)
                        .prop_map(|m| Value::Object(m.into_iter().collect())),
                ]
            })
        }

        fn json_object() -> impl Strategy<Value = Value> {
            prop::collection::btree_map("[a-e]{1,3}", json_tree(), 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect()))
        }

        /// Every leaf path of `payload` must hold `payload`'s value in
        /// `result`, and every payload object must be an object there.
        fn assert_payload_applied(result: &Value, payload: &Value) {
            let Value::Object(src) = payload else {
                assert_eq!(result, payload);
                return;
            };
            let map = result.as_object().expect("payload object lost in merge");
            for (key, value) in src {
                let node = map.get(key).expect("payload key missing from merge");
                match value {
                    Value::Object(_) => assert_payload_applied(node, value),
                    _ => assert_eq!(node, value),
                }
            }
        }

        proptest! {
            #[test]
            fn merge_keeps_keys_absent_from_payload(
                base in json_object(),
                payload in json_object(),
            ) {
                let result = merged(&base, &payload);
                let base_map = base.as_object().unwrap();
                let payload_map = payload.as_object().unwrap();
                let result_map = result.as_object().unwrap();
                for (key, value) in base_map {
                    if !payload_map.contains_key(key) {
                        prop_assert_eq!(result_map.get(key), Some(value));
                    }
                }
            }

            #[test]
            fn merge_applies_every_payload_leaf(
                base in json_object(),
                payload in json_object(),
            ) {
                let result = merged(&base, &payload);
                assert_payload_applied(&result, &payload);
            }

            #[test]
            fn merge_is_idempotent(base in json_object(), payload in json_object()) {
                let once = merged(&base, &payload);
                let twice = merged(&once, &payload);
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn stats_total_bounded_by_payload_leaves(
                base in json_object(),
                payload in json_object(),
            ) {
                let stats = merge_stats(&base, &payload);
                prop_assert!(stats.total() <= leaf_count(&payload));
            }
        }
    }
}
