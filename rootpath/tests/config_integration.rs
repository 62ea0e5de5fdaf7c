//! Integration tests for layered configuration.
//!
//! Tests that touch `ROOTPATH_*` environment variables are marked `#[serial]`
//! since the environment is process-global. Every builder here points at a
//! temporary configuration directory so the real user configuration is never
//! read.

mod common;

use common::{clear_rootpath_env_vars, create_temp_config, EnvGuard};
use serial_test::serial;
use tempfile::TempDir;

use rootpath::config::{Config, ConfigBuilder, DatabaseSettings};
use rootpath::database::DatabaseOptions;
use rootpath::error::Error;
use rootpath::StorageLayout;

const USER_CONFIG: &str = r"
root_directory: /srv/from-file
database_directory: stores
database:
  file_name: inventory
  busy_timeout_ms: 750
";

fn builder_for(dir: &TempDir) -> ConfigBuilder {
    ConfigBuilder::new().with_config_dir(dir.path())
}

// ============================================================================
// Precedence
// ============================================================================

#[test]
#[serial]
fn test_defaults_when_nothing_configured() {
    let _guards = clear_rootpath_env_vars();
    let dir = TempDir::new().unwrap();

    let config = builder_for(&dir).build().unwrap();
    assert_eq!(config, Config::with_defaults());
}

#[test]
#[serial]
fn test_file_overrides_defaults() {
    let _guards = clear_rootpath_env_vars();
    let dir = TempDir::new().unwrap();
    create_temp_config(dir.path(), "config.yaml", USER_CONFIG);

    let config = builder_for(&dir).build().unwrap();
    assert_eq!(config.root_directory.as_deref(), Some("/srv/from-file"));
    assert_eq!(config.database_directory(), "stores");

    let database = config.database.unwrap();
    assert_eq!(database.file_name.as_deref(), Some("inventory"));
    assert_eq!(database.busy_timeout_ms, Some(750));
    // Unset fields keep their defaults
    assert_eq!(database.shared_cache, Some(true));
    assert_eq!(database.read_only, Some(false));
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let _guards = clear_rootpath_env_vars();
    let dir = TempDir::new().unwrap();
    create_temp_config(dir.path(), "config.yaml", USER_CONFIG);

    let _root = EnvGuard::set("ROOTPATH_ROOT_DIR", "/srv/from-env");
    let _read_only = EnvGuard::set("ROOTPATH_READ_ONLY", "yes");

    let config = builder_for(&dir).build().unwrap();
    assert_eq!(config.root_directory.as_deref(), Some("/srv/from-env"));
    assert_eq!(config.database_directory(), "stores");

    let database = config.database.unwrap();
    assert_eq!(database.read_only, Some(true));
    assert_eq!(database.file_name.as_deref(), Some("inventory"));
}

#[test]
#[serial]
fn test_programmatic_overrides_win() {
    let _guards = clear_rootpath_env_vars();
    let dir = TempDir::new().unwrap();
    create_temp_config(dir.path(), "config.yaml", USER_CONFIG);
    let _file = EnvGuard::set("ROOTPATH_DATABASE_FILE", "from-env");

    let config = builder_for(&dir)
        .with_config(Config {
            database: Some(DatabaseSettings {
                file_name: Some("first".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        })
        .with_config(Config {
            database: Some(DatabaseSettings {
                file_name: Some("second".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        })
        .build()
        .unwrap();

    let database = config.database.unwrap();
    assert_eq!(database.file_name.as_deref(), Some("second"));
    assert_eq!(database.busy_timeout_ms, Some(750));
}

#[test]
#[serial]
fn test_skip_sources() {
    let _guards = clear_rootpath_env_vars();
    let dir = TempDir::new().unwrap();
    create_temp_config(dir.path(), "config.yaml", USER_CONFIG);
    let _root = EnvGuard::set("ROOTPATH_ROOT_DIR", "/srv/from-env");

    let no_files = builder_for(&dir).skip_files().build().unwrap();
    assert_eq!(no_files.root_directory.as_deref(), Some("/srv/from-env"));
    assert_eq!(no_files.database_directory(), "Databases");

    let no_env = builder_for(&dir).skip_env().build().unwrap();
    assert_eq!(no_env.root_directory.as_deref(), Some("/srv/from-file"));
}

// ============================================================================
// Invalid sources
// ============================================================================

#[test]
#[serial]
fn test_invalid_env_values() {
    let _guards = clear_rootpath_env_vars();
    let dir = TempDir::new().unwrap();

    {
        let _bad = EnvGuard::set("ROOTPATH_READ_ONLY", "sometimes");
        let err = builder_for(&dir).build().unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "ROOTPATH_READ_ONLY"));
    }

    {
        let _bad = EnvGuard::set("ROOTPATH_BUSY_TIMEOUT_MS", "-5");
        assert!(builder_for(&dir).build().is_err());
    }

    {
        let _bad = EnvGuard::set("ROOTPATH_ROOT_DIR", "relative/root");
        let err = builder_for(&dir).build().unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "root_directory"));
    }
}

#[test]
#[serial]
fn test_invalid_file_contents() {
    let _guards = clear_rootpath_env_vars();

    let cases = [
        "root_directory: [unclosed",
        "unknown_key: true",
        "database_directory: /absolute",
        "database_directory: ../outside",
        "database:\n  busy_timeout_ms: 0",
        "database:\n  file_name: nested/name",
    ];

    for content in cases {
        let dir = TempDir::new().unwrap();
        create_temp_config(dir.path(), "config.yaml", content);
        let result = builder_for(&dir).build();
        assert!(
            matches!(result, Err(Error::Validation { .. })),
            "expected validation error for {content:?}, got {result:?}"
        );
    }
}

#[test]
#[serial]
fn test_empty_file_is_ignored() {
    let _guards = clear_rootpath_env_vars();
    let dir = TempDir::new().unwrap();
    create_temp_config(dir.path(), "config.yaml", "   \n");

    let config = builder_for(&dir).build().unwrap();
    assert_eq!(config, Config::with_defaults());
}

// ============================================================================
// From configuration to storage
// ============================================================================

#[test]
#[serial]
fn test_config_drives_layout_and_database_options() {
    let _guards = clear_rootpath_env_vars();
    let dir = TempDir::new().unwrap();
    create_temp_config(dir.path(), "config.yaml", USER_CONFIG);
    let _drive = EnvGuard::set("ROOTPATH_ROOT_DIR", "c:/Data//App/");

    let config = builder_for(&dir).build().unwrap();
    let layout = StorageLayout::from_config(&config).unwrap();
    let options = DatabaseOptions::from_config(&config).unwrap();

    assert_eq!(layout.root_directory().as_str(), "c:\\Data\\App");
    assert_eq!(layout.database_directory().as_str(), "c:\\Data\\App\\stores");
    assert_eq!(
        layout.database_file(&options).unwrap().as_str(),
        "c:\\Data\\App\\stores\\inventory.db3"
    );
}
