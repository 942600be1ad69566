//! Builds a table with the settings layer compiled out

#![cfg(not(feature = "conf"))]

use rstest::*;
use tablesift_core::{Value, row};
use tablesift_filters::FilterDefinition;
use tablesift_pagination::PageCountPolicy;
use tablesift_tables::DataTable;
use tablesift_tables::column::ColumnDefinition;

#[rstest]
fn test_builder_covers_every_setting_without_conf() {
	let rows = (1..=5)
		.map(|i| row! { "id" => i, "name" => format!("user-{i}"), "active" => i % 2 == 1 })
		.collect();
	let mut table = DataTable::builder()
		.rows(rows)
		.columns(vec![
			ColumnDefinition::new("id", "ID", "id"),
			ColumnDefinition::new("name", "Name", "name"),
		])
		.filters(vec![FilterDefinition::toggle("active")])
		.paginate(1, 2)
		.page_count_policy(PageCountPolicy::Ceil)
		.search_visible_columns_only(true)
		.row_key("id")
		.build()
		.unwrap();

	table.change_filter("active", true);
	assert_eq!(table.filtered_rows_count(), 3);
	assert_eq!(table.page_count(), 2);

	let first = table.visible_rows()[0];
	assert_eq!(table.row_key(first), Some(&Value::from(1)));
}
