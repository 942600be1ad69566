//! Values, rows and the shared error type.
//!
//! # Examples
//!
//! ```rust
//! use tablesift::core::{Row, Value, row};
//!
//! let row: Row = row! { "name" => "Alice", "active" => true };
//! assert_eq!(row.get("name"), &Value::from("Alice"));
//! assert!(row.get("age").is_undefined());
//! ```

pub use tablesift_core::*;
