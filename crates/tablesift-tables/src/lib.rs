//! Data tables over untyped rows
//!
//! This crate composes the tablesift filter engine and paginator with
//! column definitions into a [`DataTable`] a renderer can read from.
//!
//! # Features
//!
//! - **Columns**: titles, data indexes, custom renderers and the `visible`
//!   attribute with its hidden set (`false`, `"0"`, `"false"`, `0`)
//! - **Filtering**: select, input, toggle and global-search filters, ANDed
//! - **Pagination**: page slicing shown only when rows overflow one page
//! - **Row identity**: `row_key` with a `"key"` fallback
//! - **Export**: CSV and JSON export (requires `export` feature)
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[DataTable] --> B[Columns]
//!     A --> C[Rows]
//!     A --> D[FilterEngine]
//!     A --> E[Paginator]
//!     B --> F[Visibility]
//!     B --> G[Display values]
//!     A --> K[Export]
//!     K --> L[CSV]
//!     K --> M[JSON]
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
#[cfg(feature = "export")]
pub mod export;
pub mod table;

// Re-exports for convenience
pub use column::{ColumnDefinition, display_value, is_visible, visible_columns};
pub use table::{DataTable, DataTableBuilder, row_key};
