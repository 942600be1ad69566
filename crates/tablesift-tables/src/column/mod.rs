//! Column definitions and visibility rules

pub mod base;
pub mod visibility;

pub use base::{ColumnDefinition, RenderFn};
pub use visibility::{display_value, is_hidden_value, is_visible, visible_columns};
