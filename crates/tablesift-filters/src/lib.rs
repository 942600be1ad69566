//! Filtering for tablesift
//!
//! Filters are declared per field with a [`FilterDefinition`] and receive
//! their current values through [`AppliedFilters`]. The [`FilterEngine`]
//! keeps a row only if it matches **every** applied filter.
//!
//! ## Matching rules
//!
//! | Kind | Rule |
//! |------|------|
//! | `Select` | string conversions are equal (case-sensitive) |
//! | `Input` | lower-cased field contains the lower-cased value |
//! | `Toggle` | truthiness of field and value are equal |
//! | `GlobalSearch` | some scanned field contains the value, case-insensitive |
//!
//! An applied key without a matching definition, such as the reserved
//! [`GLOBAL_SEARCH_KEY`], uses `GlobalSearch`.

pub mod applied;
pub mod definition;
pub mod engine;
pub mod matcher;
pub mod scope;

pub use applied::{AppliedFilters, GLOBAL_SEARCH_KEY};
pub use definition::{FilterChangeHandler, FilterDefinition, FilterKind, SelectOption};
pub use engine::{FilterChange, FilterEngine};
pub use scope::GlobalSearchScope;
