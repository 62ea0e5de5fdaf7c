//! Configuration system for rootpath.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file (`config.yaml` in the configuration directory)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of every field
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ROOTPATH_*`)
//! 3. User config (`{config_dir}/config.yaml`, by default under the root directory)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use rootpath::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_config_dir("/etc/rootpath")
//!     .build()
//!     .unwrap();
//!
//! println!("Databases live in {}", config.database_directory());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use rootpath::config::{Config, ConfigBuilder, DatabaseSettings};
//!
//! let custom = Config {
//!     database: Some(DatabaseSettings {
//!         file_name: Some("inventory".to_string()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! let database = config.database.unwrap();
//! assert_eq!(database.file_name.as_deref(), Some("inventory"));
//! assert_eq!(database.busy_timeout_ms, Some(5000));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DatabaseSettings};
pub use validator::ConfigValidator;
