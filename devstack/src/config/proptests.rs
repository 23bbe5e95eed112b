//! Property-based tests for configuration system.

use super::environment::resolve_env_reference;
use super::merger::ConfigMerger;
use super::size::SizeInBytes;
use super::validator::prepend_unique;
use crate::project::{sanitize_project_id, ProjectId};
use proptest::prelude::*;
use std::collections::HashMap;

// Strategy for schema lists drawn from a small alphabet so duplicates are common
fn schema_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["public", "storage", "graphql_public", "app", "extensions"]),
        0..12,
    )
    .prop_map(|names| names.into_iter().map(String::from).collect())
}

// Strategy for flat TOML tables with integer values
fn flat_table_strategy() -> impl Strategy<Value = toml::Table> {
    prop::collection::btree_map("[a-e]", any::<i32>(), 0..5).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(k, v)| (k, toml::Value::Integer(i64::from(v))))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Sanitizing is idempotent
    #[test]
    fn sanitize_is_idempotent(input in ".{0,40}") {
        let once = sanitize_project_id(&input);
        prop_assert_eq!(sanitize_project_id(&once), once.clone());
    }

    // A non-empty sanitized id is always a valid project id
    #[test]
    fn sanitized_ids_parse(input in ".{0,40}") {
        let sanitized = sanitize_project_id(&input);
        prop_assume!(!sanitized.is_empty());
        prop_assert!(ProjectId::parse(&sanitized).is_ok(), "{:?} -> {:?}", input, sanitized);
    }

    // Already valid ids survive sanitizing unchanged
    #[test]
    fn valid_ids_are_fixed_points(id in "[a-zA-Z0-9][a-zA-Z0-9_.-]{0,30}") {
        prop_assert_eq!(sanitize_project_id(&id), id);
    }

    // Required entries lead the list, in order, and nothing repeats
    #[test]
    fn prepend_unique_heads_and_dedups(values in schema_list_strategy()) {
        let result = prepend_unique(&["public", "storage"], values.clone());
        prop_assert_eq!(&result[..2], ["public", "storage"]);

        let mut seen = std::collections::HashSet::new();
        for name in &result {
            prop_assert!(seen.insert(name.clone()), "duplicate {}", name);
        }
        for name in &values {
            prop_assert!(result.contains(name));
        }
    }

    // Later layers win key by key, untouched keys survive
    #[test]
    fn merge_higher_layer_wins(low in flat_table_strategy(), high in flat_table_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, high.clone());

        for (key, value) in &high {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for (key, value) in &low {
            if !high.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
    }

    // Values that are not references pass through untouched
    #[test]
    fn non_references_are_unchanged(value in "[a-z0-9 ]{0,20}") {
        let vars: HashMap<String, String> = HashMap::new();
        prop_assert_eq!(resolve_env_reference(&value, &vars).unwrap(), value);
    }

    // A set, non-empty variable always resolves to its value
    #[test]
    fn references_resolve(name in "[A-Z_]{1,16}", value in "[a-z0-9]{1,16}") {
        let vars = HashMap::from([(name.clone(), value.clone())]);
        let expression = format!("env({name})");
        prop_assert_eq!(resolve_env_reference(&expression, &vars).unwrap(), value);
    }

    // Unit-less integers are byte counts and `k` is 1024
    #[test]
    fn size_units_scale_by_1024(n in 0u64..1_000_000) {
        prop_assert_eq!(n.to_string().parse::<SizeInBytes>().unwrap().bytes(), n);
        prop_assert_eq!(format!("{n}KB").parse::<SizeInBytes>().unwrap().bytes(), n * 1024);
        prop_assert_eq!(format!("{n}m").parse::<SizeInBytes>().unwrap().bytes(), n * 1024 * 1024);
    }
}
