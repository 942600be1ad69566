//! Filter definitions, applied filter values and the filter engine.
//!
//! # Examples
//!
//! ```rust
//! use tablesift::core::row;
//! use tablesift::filters::{FilterDefinition, FilterEngine};
//!
//! let rows = vec![row! { "status" => "active" }, row! { "status" => "Active" }];
//! let mut engine = FilterEngine::new(vec![FilterDefinition::select("status")]);
//! engine.set_filter_value("status", "active");
//!
//! assert_eq!(engine.apply(&rows).len(), 1);
//! ```

pub use tablesift_filters::*;
