//! Settings for tablesift tables
//!
//! Table settings are assembled from layered sources, highest priority
//! last:
//!
//! 1. [`sources::DefaultSource`] (priority 0)
//! 2. [`sources::TomlFileSource`] (priority 50)
//! 3. [`sources::EnvSource`] reading `TABLESIFT_*` variables (priority 100)
//!
//! ```rust,no_run
//! use tablesift_conf::SettingsBuilder;
//!
//! let settings = SettingsBuilder::from_file_and_env("table.toml").build()?;
//! let page_config = settings.page_config()?;
//! # Ok::<(), tablesift_conf::SettingsError>(())
//! ```

pub mod builder;
pub mod error;
pub mod settings;
pub mod sources;

pub use builder::SettingsBuilder;
pub use error::{SettingsError, SettingsResult};
pub use settings::{GlobalSearchSetting, TableSettings};
