//! Core types shared by the tablesift crates
//!
//! - [`Value`]: an untyped scalar with string conversion and truthiness
//! - [`Row`]: an ordered mapping from field name to [`Value`]
//! - [`TableError`]: configuration errors
//!
//! # Example
//!
//! ```rust
//! use tablesift_core::{Value, row};
//!
//! let row = row! { "id" => 1, "name" => "Anna" };
//! assert_eq!(row.get("id").to_string(), "1");
//! assert!(row.get("missing").is_undefined());
//! assert!(!Value::from("").is_truthy());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod row;
pub mod value;

pub use error::{Result, TableError};
pub use row::Row;
pub use value::Value;
