//! The `DataTable` composition of filtering, pagination and columns

use crate::column::{self, ColumnDefinition};
#[cfg(feature = "conf")]
use tablesift_conf::{GlobalSearchSetting, TableSettings};
use tablesift_core::{Result, Row, TableError, Value};
use tablesift_filters::{AppliedFilters, FilterChange, FilterDefinition, FilterEngine, GlobalSearchScope};
use tablesift_pagination::{PageConfig, PageCountPolicy, PageInfo, Paginator};
use tracing::{debug, trace};

/// Field read by [`row_key`] when no row-key field is configured or present
pub const DEFAULT_ROW_KEY_FIELD: &str = "key";

/// Returns the identity of `row` for the renderer
///
/// `row[key_field]` when a key field is given and present in the row, else
/// `row["key"]` when present, else `None`. Uniqueness is not checked.
///
/// # Examples
///
/// ```
/// use tablesift_core::{Value, row};
/// use tablesift_tables::table::row_key;
///
/// let row = row! { "id" => 7, "key" => "k7" };
/// assert_eq!(row_key(&row, Some("id")), Some(&Value::from(7)));
/// assert_eq!(row_key(&row, Some("uuid")), Some(&Value::from("k7")));
/// assert_eq!(row_key(&row! { "id" => 7 }, None), None);
/// ```
pub fn row_key<'a>(row: &'a Row, key_field: Option<&str>) -> Option<&'a Value> {
	key_field
		.filter(|field| row.contains(field))
		.or_else(|| row.contains(DEFAULT_ROW_KEY_FIELD).then_some(DEFAULT_ROW_KEY_FIELD))
		.map(|field| row.get(field))
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// A table of untyped rows with filters, pagination and column visibility
///
/// The filtered set is recomputed whenever rows or filters change, so the
/// read accessors never do filtering work.
///
/// ```mermaid
/// graph LR
///     Rows --> FilterEngine
///     AppliedFilters --> FilterEngine
///     FilterEngine --> Filtered["filtered rows"]
///     Filtered --> Paginator
///     Paginator --> Visible["visible rows"]
///     Columns --> Visibility["visible columns"]
/// ```
///
/// # Example
///
/// ```rust
/// use tablesift_core::row;
/// use tablesift_filters::FilterDefinition;
/// use tablesift_tables::column::ColumnDefinition;
/// use tablesift_tables::DataTable;
///
/// let mut table = DataTable::builder()
///     .rows(vec![
///         row! { "key" => 1, "name" => "Alice", "active" => true },
///         row! { "key" => 2, "name" => "Bob", "active" => false },
///     ])
///     .columns(vec![
///         ColumnDefinition::new("name", "Name", "name"),
///         ColumnDefinition::new("active", "Active", "active"),
///     ])
///     .filters(vec![FilterDefinition::toggle("active")])
///     .build()
///     .unwrap();
///
/// table.change_filter("active", true);
/// assert_eq!(table.filtered_rows_count(), 1);
/// assert_eq!(table.display_value(&table.columns()[1], table.visible_rows()[0]), "True");
/// ```
#[derive(Debug, Clone)]
pub struct DataTable {
	rows: Vec<Row>,
	columns: Vec<ColumnDefinition>,
	engine: FilterEngine,
	paginator: Option<Paginator>,
	row_key: Option<String>,
	filtered: Vec<usize>,
}

impl DataTable {
	/// Starts building a table
	pub fn builder() -> DataTableBuilder {
		DataTableBuilder::new()
	}

	/// Returns every row, unfiltered
	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	/// Returns the column definitions in declaration order
	pub fn columns(&self) -> &[ColumnDefinition] {
		&self.columns
	}

	/// Returns the filter engine
	pub fn engine(&self) -> &FilterEngine {
		&self.engine
	}

	/// Returns the applied filter values
	pub fn applied_filters(&self) -> &AppliedFilters {
		self.engine.applied()
	}

	/// Returns the paginator, if pagination is configured
	pub fn paginator(&self) -> Option<&Paginator> {
		self.paginator.as_ref()
	}

	/// Returns the configured row-key field
	pub fn row_key_field(&self) -> Option<&str> {
		self.row_key.as_deref()
	}

	/// Replaces the rows
	pub fn set_rows(&mut self, rows: Vec<Row>) {
		debug!(rows = rows.len(), "table rows replaced");
		self.rows = rows;
		self.refilter();
	}

	/// Writes a filter value directly, bypassing any override strategy
	pub fn set_filter_value(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.engine.set_filter_value(key, value);
		self.refilter();
	}

	/// Routes a user change through the filter's override strategy, if any
	pub fn change_filter(&mut self, key: &str, value: impl Into<Value>) -> FilterChange {
		let change = self.engine.change_filter(key, value);
		self.refilter();
		change
	}

	/// Removes every applied filter
	pub fn clear_filters(&mut self) {
		self.engine.clear();
		self.refilter();
	}

	/// Moves to `page` without bounds checks
	///
	/// Does nothing when pagination is not configured.
	pub fn set_page(&mut self, page: usize) {
		if let Some(paginator) = self.paginator.as_mut() {
			paginator.set_page(page);
		}
	}

	/// Advances one page; returns false on the last page or without pagination
	pub fn next_page(&mut self) -> bool {
		let total = self.filtered.len();
		self.paginator
			.as_mut()
			.is_some_and(|paginator| paginator.next_page(total))
	}

	/// Goes back one page; returns false on the first page or without pagination
	pub fn prev_page(&mut self) -> bool {
		self.paginator
			.as_mut()
			.is_some_and(|paginator| paginator.prev_page())
	}

	/// Returns the rows matching every applied filter, in input order
	pub fn filtered_rows(&self) -> Vec<&Row> {
		self.filtered.iter().map(|&i| &self.rows[i]).collect()
	}

	/// Returns the number of rows matching every applied filter
	pub fn filtered_rows_count(&self) -> usize {
		self.filtered.len()
	}

	/// Returns the rows to render
	///
	/// The current page of the filtered rows when pagination controls are
	/// shown, otherwise every filtered row.
	pub fn visible_rows(&self) -> Vec<&Row> {
		let indices = match self.paginator.as_ref() {
			Some(paginator) if paginator.should_paginate(self.filtered.len()) => {
				paginator.slice(&self.filtered)
			}
			_ => &self.filtered[..],
		};
		indices.iter().map(|&i| &self.rows[i]).collect()
	}

	/// Returns the number of pages of the filtered rows
	///
	/// Zero when pagination is not configured.
	pub fn page_count(&self) -> usize {
		self.paginator
			.as_ref()
			.map_or(0, |paginator| paginator.page_count(self.filtered.len()))
	}

	/// Returns true if the filtered rows do not fit on one page
	pub fn show_pagination(&self) -> bool {
		self.paginator
			.as_ref()
			.is_some_and(|paginator| paginator.should_paginate(self.filtered.len()))
	}

	/// Returns the page footer data, if pagination is configured
	pub fn page_info(&self) -> Option<PageInfo> {
		self.paginator
			.as_ref()
			.map(|paginator| paginator.page_info(self.filtered.len()))
	}

	/// Returns the visible columns in declaration order
	pub fn visible_columns(&self) -> Vec<&ColumnDefinition> {
		column::visible_columns(&self.columns)
	}

	/// Looks up a column by key
	pub fn column(&self, key: &str) -> Result<&ColumnDefinition> {
		self.columns
			.iter()
			.find(|c| c.key() == key)
			.ok_or_else(|| TableError::UnknownColumn(key.to_string()))
	}

	/// Returns the text shown in the cell of `column` for `row`
	pub fn display_value(&self, column: &ColumnDefinition, row: &Row) -> String {
		column::display_value(column, row)
	}

	/// Returns the text of the cell in column `key` for `row`
	pub fn cell(&self, key: &str, row: &Row) -> Result<String> {
		Ok(column::display_value(self.column(key)?, row))
	}

	/// Returns the identity of `row` using the configured row-key field
	pub fn row_key<'a>(&self, row: &'a Row) -> Option<&'a Value> {
		row_key(row, self.row_key.as_deref())
	}

	fn refilter(&mut self) {
		self.filtered = self.engine.apply_indices(&self.rows);
		trace!(
			total = self.rows.len(),
			filtered = self.filtered.len(),
			"table filtered set recomputed"
		);
	}
}

/// Builder for [`DataTable`]
#[derive(Debug, Default)]
pub struct DataTableBuilder {
	rows: Vec<Row>,
	columns: Vec<ColumnDefinition>,
	filters: Vec<FilterDefinition>,
	row_key: Option<String>,
	page_config: Option<PageConfig>,
	page: Option<(usize, usize)>,
	page_count_policy: PageCountPolicy,
	visible_columns_scope: bool,
	global_search_scope: Option<GlobalSearchScope>,
}

impl DataTableBuilder {
	/// Creates an empty builder
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the rows
	pub fn rows(mut self, rows: Vec<Row>) -> Self {
		self.rows = rows;
		self
	}

	/// Sets the column definitions
	pub fn columns(mut self, columns: Vec<ColumnDefinition>) -> Self {
		self.columns = columns;
		self
	}

	/// Sets the filter definitions
	pub fn filters(mut self, filters: Vec<FilterDefinition>) -> Self {
		self.filters = filters;
		self
	}

	/// Sets the field used by [`DataTable::row_key`]
	pub fn row_key(mut self, field: impl Into<String>) -> Self {
		self.row_key = Some(field.into());
		self
	}

	/// Enables pagination with an already validated configuration
	pub fn page_config(mut self, config: PageConfig) -> Self {
		self.page_config = Some(config);
		self.page = None;
		self
	}

	/// Enables pagination starting on `current_page`
	///
	/// Validated by [`build`](Self::build).
	pub fn paginate(mut self, current_page: usize, page_length: usize) -> Self {
		self.page = Some((current_page, page_length));
		self.page_config = None;
		self
	}

	/// Sets how a trailing partial page is counted
	pub fn page_count_policy(mut self, policy: PageCountPolicy) -> Self {
		self.page_count_policy = policy;
		self
	}

	/// Restricts the global search to the fields of the visible columns
	pub fn search_visible_columns_only(mut self, enabled: bool) -> Self {
		self.visible_columns_scope = enabled;
		self
	}

	/// Restricts the global search to an explicit field list
	///
	/// Takes precedence over [`search_visible_columns_only`](Self::search_visible_columns_only).
	pub fn global_search_scope(mut self, scope: GlobalSearchScope) -> Self {
		self.global_search_scope = Some(scope);
		self
	}

	/// Applies loaded settings
	#[cfg(feature = "conf")]
	pub fn settings(mut self, settings: &TableSettings) -> Self {
		if let Some(page_length) = settings.page_length {
			self = self.paginate(settings.current_page, page_length);
		}
		if let Some(field) = &settings.row_key {
			self.row_key = Some(field.clone());
		}
		self.page_count_policy = settings.page_count_policy;
		self.visible_columns_scope =
			settings.global_search == GlobalSearchSetting::VisibleColumns;
		self
	}

	/// Builds the table and computes the initial filtered set
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidPageConfiguration`] if a page number or
	/// page length given to [`paginate`](Self::paginate) is zero.
	pub fn build(self) -> Result<DataTable> {
		let config = match (self.page_config, self.page) {
			(Some(config), _) => Some(config),
			(None, Some((current_page, page_length))) => {
				Some(PageConfig::new(current_page, page_length)?)
			}
			(None, None) => None,
		};
		let paginator = config.map(|config| Paginator::new(config).with_policy(self.page_count_policy));

		let scope = match (self.global_search_scope, self.visible_columns_scope) {
			(Some(scope), _) => scope,
			(None, false) => GlobalSearchScope::AllFields,
			(None, true) => GlobalSearchScope::fields(
				column::visible_columns(&self.columns)
					.into_iter()
					.map(|c| c.data_index().to_string()),
			),
		};

		let mut table = DataTable {
			rows: self.rows,
			columns: self.columns,
			engine: FilterEngine::new(self.filters).with_global_search_scope(scope),
			paginator,
			row_key: self.row_key,
			filtered: Vec::new(),
		};
		table.refilter();
		Ok(table)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use tablesift_core::row;

	#[rstest]
	#[case(Some("id"), Some(Value::from(1)))]
	#[case(Some("missing"), Some(Value::from("k1")))]
	#[case(None, Some(Value::from("k1")))]
	fn test_row_key_with_key_field(#[case] field: Option<&str>, #[case] expected: Option<Value>) {
		let row = row! { "id" => 1, "key" => "k1" };
		assert_eq!(row_key(&row, field), expected.as_ref());
	}

	#[rstest]
	fn test_row_key_absent() {
		let row = row! { "id" => 1 };
		assert_eq!(row_key(&row, None), None);
		assert_eq!(row_key(&row, Some("uuid")), None);
	}

	#[rstest]
	fn test_row_key_null_value_is_returned() {
		let row = row! { "id" => Value::Null };
		assert_eq!(row_key(&row, Some("id")), Some(&Value::Null));
	}

	#[rstest]
	fn test_build_rejects_zero_page_length() {
		let result = DataTable::builder().paginate(1, 0).build();
		assert!(matches!(
			result,
			Err(TableError::InvalidPageConfiguration { page_length: 0, .. })
		));
	}

	#[rstest]
	fn test_last_pagination_call_wins() {
		let table = DataTable::builder()
			.paginate(1, 0)
			.page_config(PageConfig::new(1, 5).unwrap())
			.build()
			.unwrap();
		assert_eq!(table.paginator().map(|p| p.page_length()), Some(5));
	}

	#[rstest]
	fn test_without_pagination() {
		let mut table = DataTable::builder()
			.rows((0..30).map(|i| row! { "n" => i }).collect())
			.build()
			.unwrap();

		assert_eq!(table.visible_rows().len(), 30);
		assert_eq!(table.page_count(), 0);
		assert!(!table.show_pagination());
		assert!(table.page_info().is_none());
		assert!(!table.next_page());
	}

	#[rstest]
	fn test_unknown_column() {
		let table = DataTable::builder()
			.columns(vec![ColumnDefinition::new("a", "A", "a")])
			.build()
			.unwrap();

		assert!(table.column("a").is_ok());
		assert!(matches!(table.column("b"), Err(TableError::UnknownColumn(key)) if key == "b"));
	}

	#[rstest]
	fn test_visible_columns_scope_without_settings() {
		let table = DataTable::builder()
			.columns(vec![
				ColumnDefinition::new("name", "Name", "name"),
				ColumnDefinition::new("secret", "Secret", "secret").visible("0"),
			])
			.search_visible_columns_only(true)
			.build()
			.unwrap();

		let scope = table.engine().global_search_scope();
		assert!(scope.includes("name"));
		assert!(!scope.includes("secret"));
	}

	#[cfg(feature = "conf")]
	#[rstest]
	fn test_settings_visible_columns_scope() {
		let settings = TableSettings {
			global_search: GlobalSearchSetting::VisibleColumns,
			..TableSettings::default()
		};
		let table = DataTable::builder()
			.columns(vec![
				ColumnDefinition::new("name", "Name", "name"),
				ColumnDefinition::new("secret", "Secret", "secret").visible(false),
			])
			.settings(&settings)
			.build()
			.unwrap();

		let scope = table.engine().global_search_scope();
		assert!(scope.includes("name"));
		assert!(!scope.includes("secret"));
	}
}
