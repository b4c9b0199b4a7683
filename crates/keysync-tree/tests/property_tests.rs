use std::collections::BTreeSet;

use keysync_tree::{ExclusionSet, KeyPath, RecordingReporter, Reconciler, normalize_order};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 32, 4, |inner| {
        // A small key alphabet so reference and derived documents overlap.
        prop::collection::btree_map("[a-e]", inner, 0..4)
            .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>()))
    })
}

fn document() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-e]", tree(), 0..5)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>()))
}

fn rules() -> impl Strategy<Value = Vec<KeyPath>> {
    prop::collection::vec(prop::collection::vec("[a-e]", 1..=3).prop_map(KeyPath::new), 0..3)
}

fn key_paths(value: &Value) -> BTreeSet<Vec<String>> {
    fn walk(value: &Value, prefix: &mut Vec<String>, out: &mut BTreeSet<Vec<String>>) {
        if let Value::Object(map) = value {
            for (key, child) in map {
                prefix.push(key.clone());
                out.insert(prefix.clone());
                walk(child, prefix, out);
                prefix.pop();
            }
        }
    }
    let mut out = BTreeSet::new();
    walk(value, &mut Vec::new(), &mut out);
    out
}

/// True when `path` exists in `value`, or when the walk reaches a value
/// that is not a mapping before the path ends.
fn covered(value: &Value, path: &[String]) -> bool {
    match path.split_first() {
        None => true,
        Some((key, rest)) => match value {
            Value::Object(map) => map.get(key).is_some_and(|child| covered(child, rest)),
            _ => true,
        },
    }
}

/// The rule that suppresses `path` or one of its ancestors, if any.
fn excluding_rule<'r>(rules: &'r [KeyPath], path: &[String]) -> Option<&'r KeyPath> {
    rules.iter().find(|rule| path.starts_with(rule.segments()))
}

fn reconcile(derived: Value, reference: &Value, check_only: bool) -> keysync_tree::Reconciliation {
    reconcile_excluding(derived, reference, check_only, &[])
}

fn reconcile_excluding(
    derived: Value,
    reference: &Value,
    check_only: bool,
    rules: &[KeyPath],
) -> keysync_tree::Reconciliation {
    let reporter = RecordingReporter::new();
    Reconciler::new("derived.json", &reporter)
        .check_only(check_only)
        .reconcile(derived, reference, &ExclusionSet::new(rules))
}

proptest! {
    #[test]
    fn test_reconcile_is_idempotent(derived in document(), reference in document()) {
        let first = reconcile(derived, &reference, false);
        let second = reconcile(first.document.clone(), &reference, false);

        prop_assert_eq!(&second.document, &first.document);
        prop_assert!(second.additions.is_empty());
    }

    #[test]
    fn test_reconcile_never_deletes(derived in document(), reference in document(), check_only in any::<bool>()) {
        let before = key_paths(&derived);
        let outcome = reconcile(derived, &reference, check_only);
        let after = key_paths(&outcome.document);

        prop_assert!(before.is_subset(&after));
    }

    #[test]
    fn test_reference_keys_are_closed_over(derived in document(), reference in document()) {
        let outcome = reconcile(derived, &reference, false);

        for path in key_paths(&reference) {
            prop_assert!(covered(&outcome.document, &path), "missing {:?}", path);
        }
    }

    #[test]
    fn test_check_only_never_mutates(derived in document(), reference in document()) {
        let outcome = reconcile(derived.clone(), &reference, true);

        prop_assert_eq!(outcome.document, derived);
        prop_assert!(outcome.additions.is_empty());
    }

    #[test]
    fn test_additions_are_new_paths(derived in document(), reference in document()) {
        let before = key_paths(&derived);
        let outcome = reconcile(derived, &reference, false);

        for addition in &outcome.additions {
            prop_assert!(!before.contains(addition.segments()));
        }
    }

    #[test]
    fn test_normalize_keeps_content(doc in document(), depth in -2i32..4) {
        prop_assert_eq!(normalize_order(doc.clone(), depth), doc);
    }

    #[test]
    fn test_closure_holds_outside_excluded_branches(
        derived in document(),
        reference in document(),
        rules in rules(),
    ) {
        let outcome = reconcile_excluding(derived, &reference, false, &rules);

        for path in key_paths(&reference) {
            if excluding_rule(&rules, &path).is_none() {
                prop_assert!(covered(&outcome.document, &path), "missing {:?}", path);
            }
        }
    }

    #[test]
    fn test_excluded_branches_keep_their_keys(
        derived in document(),
        reference in document(),
        rules in rules(),
        check_only in any::<bool>(),
    ) {
        let before = key_paths(&derived);
        let outcome = reconcile_excluding(derived, &reference, check_only, &rules);
        let after = key_paths(&outcome.document);

        // A branch the derived document already reaches is never healed or
        // pruned. Excluded paths under a freshly copied parent are not
        // reached and come along with the copy.
        for path in before.union(&after) {
            let Some(rule) = excluding_rule(&rules, path) else { continue };
            let parent = &rule.segments()[..rule.segments().len() - 1];
            if parent.is_empty() || before.contains(parent) {
                prop_assert_eq!(before.contains(path), after.contains(path), "{:?}", path);
            }
        }
    }

    #[test]
    fn test_excluded_keys_are_never_reported(
        derived in document(),
        reference in document(),
        rules in rules(),
        check_only in any::<bool>(),
    ) {
        let outcome = reconcile_excluding(derived, &reference, check_only, &rules);

        for discrepancy in &outcome.discrepancies {
            let path = match discrepancy {
                keysync_tree::Discrepancy::NotInReference { path, .. }
                | keysync_tree::Discrepancy::MissingFromDocument { path, .. } => path,
            };
            prop_assert!(excluding_rule(&rules, path.segments()).is_none(), "{}", path);
        }
        for addition in &outcome.additions {
            prop_assert!(excluding_rule(&rules, addition.segments()).is_none(), "{}", addition);
        }
    }
}
