//! Table settings

use crate::error::SettingsResult;
use serde::{Deserialize, Serialize};
use tablesift_pagination::{PageConfig, PageCountPolicy};

/// Which fields the global search scans
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalSearchSetting {
	/// Every field of the row, hidden columns included
	#[default]
	AllFields,
	/// Only the fields of visible columns
	VisibleColumns,
}

/// Settings of one table
///
/// Every key is optional; missing keys take the defaults below.
///
/// ```toml
/// page_length = 50          # absent: no pagination
/// current_page = 1
/// page_count_policy = "floor"   # or "ceil"
/// global_search = "all_fields"  # or "visible_columns"
/// row_key = "id"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Rows per page; `None` disables pagination
	pub page_length: Option<usize>,
	/// Page shown first
	pub current_page: usize,
	/// How a trailing partial page is counted
	pub page_count_policy: PageCountPolicy,
	/// Which fields the global search scans
	pub global_search: GlobalSearchSetting,
	/// Field identifying each row
	pub row_key: Option<String>,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			page_length: None,
			current_page: 1,
			page_count_policy: PageCountPolicy::default(),
			global_search: GlobalSearchSetting::default(),
			row_key: None,
		}
	}
}

impl TableSettings {
	/// Returns the validated page configuration, if pagination is enabled
	///
	/// # Examples
	///
	/// ```
	/// use tablesift_conf::TableSettings;
	///
	/// let settings = TableSettings {
	///     page_length: Some(50),
	///     ..TableSettings::default()
	/// };
	/// let config = settings.page_config().unwrap().unwrap();
	/// assert_eq!(config.page_length(), 50);
	///
	/// assert!(TableSettings::default().page_config().unwrap().is_none());
	/// ```
	pub fn page_config(&self) -> SettingsResult<Option<PageConfig>> {
		self.page_length
			.map(|length| PageConfig::new(self.current_page, length))
			.transpose()
			.map_err(Into::into)
	}
}
