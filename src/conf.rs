//! Layered table settings.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tablesift::conf::{SettingsBuilder, TableSettings};
//! ```

pub use tablesift_conf::*;
