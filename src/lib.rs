//! # tablesift
//!
//! Filtering, pagination and column visibility for data tables whose rows
//! are untyped field maps.
//!
//! A table owns its rows, column definitions and filter definitions. User
//! input flows into the filter engine and the paginator; the renderer reads
//! back the visible rows, the visible columns and each cell's display value.
//!
//! ## Feature Flags
//!
//! Filters, pagination and tables are always built.
//!
//! - `full` (default) - Everything below
//! - `conf` - Layered settings from defaults, a TOML file and the environment
//! - `export` - CSV and JSON export of the filtered rows
//!
//! ## Quick Example
//!
//! ```rust
//! use tablesift::prelude::*;
//!
//! let mut table = DataTable::builder()
//!     .rows(vec![
//!         row! { "id" => 1, "name" => "Al", "active" => true },
//!         row! { "id" => 2, "name" => "Bo", "active" => false },
//!     ])
//!     .columns(vec![
//!         ColumnDefinition::new("name", "Name", "name"),
//!         ColumnDefinition::new("active", "Active", "active"),
//!     ])
//!     .filters(vec![FilterDefinition::toggle("active")])
//!     .paginate(1, 50)
//!     .build()?;
//!
//! table.change_filter("active", true);
//!
//! let rows = table.visible_rows();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].get("id"), &Value::from(1));
//! assert!(!table.show_pagination());
//! # Ok::<(), TableError>(())
//! ```

#[cfg(feature = "conf")]
pub mod conf;
pub mod core;
pub mod filters;
pub mod pagination;
pub mod tables;

// Re-export the main types at the crate root
pub use tablesift_core::{Result, Row, TableError, Value, row};
pub use tablesift_filters::{
	AppliedFilters, FilterChange, FilterDefinition, FilterEngine, FilterKind, GLOBAL_SEARCH_KEY,
	GlobalSearchScope, SelectOption,
};
pub use tablesift_pagination::{PageConfig, PageCountPolicy, PageInfo, Paginator};
pub use tablesift_tables::{ColumnDefinition, DataTable, DataTableBuilder, is_visible, row_key};

#[cfg(feature = "conf")]
pub use tablesift_conf::{GlobalSearchSetting, SettingsBuilder, SettingsError, TableSettings};

pub mod prelude {
	// Always available
	pub use crate::{
		AppliedFilters, ColumnDefinition, DataTable, FilterChange, FilterDefinition, FilterEngine,
		FilterKind, GLOBAL_SEARCH_KEY, PageConfig, PageCountPolicy, Row, TableError, Value, row,
	};

	// Settings
	#[cfg(feature = "conf")]
	pub use crate::{SettingsBuilder, TableSettings};

	// Export
	#[cfg(feature = "export")]
	pub use tablesift_tables::export::{export_csv, export_json};
}
