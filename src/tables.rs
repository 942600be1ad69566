//! Columns, visibility and the `DataTable` composition.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "export")]
//! use tablesift::tables::export::export_csv;
//! use tablesift::tables::{DataTable, is_visible};
//! ```

pub use tablesift_tables::*;
