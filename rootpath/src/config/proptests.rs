//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, DatabaseSettings};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn database_strategy() -> impl Strategy<Value = DatabaseSettings> {
    (
        prop::option::of("[a-z][a-z0-9_-]{0,15}"),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(1u64..=60_000),
    )
        .prop_map(|(file_name, read_only, shared_cache, busy_timeout_ms)| DatabaseSettings {
            file_name,
            read_only,
            shared_cache,
            busy_timeout_ms,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("/[a-z]{1,8}(/[a-z]{1,8}){0,3}"),
        prop::option::of("[A-Za-z]{1,10}(/[A-Za-z]{1,10}){0,2}"),
        prop::option::of(database_strategy()),
    )
        .prop_map(|(root_directory, database_directory, database)| Config {
            root_directory,
            database_directory,
            database,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Higher precedence wins field by field when it is Some
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(
            &result.root_directory,
            if high.root_directory.is_some() { &high.root_directory } else { &low.root_directory }
        );
        prop_assert_eq!(
            &result.database_directory,
            if high.database_directory.is_some() { &high.database_directory } else { &low.database_directory }
        );

        if let Some(ref high_db) = high.database {
            let merged = result.database.as_ref().unwrap();
            let low_db = low.database.clone().unwrap_or_default();
            prop_assert_eq!(merged.read_only, high_db.read_only.or(low_db.read_only));
            prop_assert_eq!(merged.busy_timeout_ms, high_db.busy_timeout_ms.or(low_db.busy_timeout_ms));
        } else {
            prop_assert_eq!(&result.database, &low.database);
        }
    }

    // Empty config is identity element for merge
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merging is associative
    #[test]
    fn config_merge_associative(a in config_strategy(), b in config_strategy(), c in config_strategy()) {
        let mut left = a.clone();
        ConfigMerger::merge_into(&mut left, &b);
        ConfigMerger::merge_into(&mut left, &c);

        let mut b_merge_c = b;
        ConfigMerger::merge_into(&mut b_merge_c, &c);
        let mut right = a;
        ConfigMerger::merge_into(&mut right, &b_merge_c);

        prop_assert_eq!(left, right);
    }

    // Generated configs are valid, and remain valid after merging
    #[test]
    fn valid_configs_stay_valid_after_merge(a in config_strategy(), b in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&a).is_ok());
        let mut merged = a;
        ConfigMerger::merge_into(&mut merged, &b);
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }

    // YAML serialization preserves every field
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
