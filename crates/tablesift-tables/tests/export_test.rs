#![cfg(feature = "export")]

use rstest::*;
use tablesift_core::{Row, row};
use tablesift_filters::FilterDefinition;
use tablesift_tables::DataTable;
use tablesift_tables::column::ColumnDefinition;
use tablesift_tables::export::{export_csv, export_json};

#[fixture]
fn table() -> DataTable {
	let rows: Vec<Row> = vec![
		row! { "id" => 1, "name" => "Alice", "email" => "alice@example.com", "active" => true },
		row! { "id" => 2, "name" => "Bob, Jr.", "email" => "bob@example.com", "active" => false },
		row! { "id" => 3, "name" => "Charlie", "email" => "charlie@example.com", "active" => true },
	];
	DataTable::builder()
		.rows(rows)
		.columns(vec![
			ColumnDefinition::new("id", "ID", "id"),
			ColumnDefinition::new("name", "Name", "name"),
			ColumnDefinition::new("email", "Email", "email").visible(false),
			ColumnDefinition::new("active", "Active", "active"),
		])
		.filters(vec![FilterDefinition::toggle("active")])
		.paginate(1, 1)
		.build()
		.unwrap()
}

#[rstest]
fn test_csv_export_covers_all_filtered_rows(table: DataTable) {
	let mut out = Vec::new();
	export_csv(&table, &mut out).unwrap();

	let csv = String::from_utf8(out).unwrap();
	assert_eq!(
		csv,
		"ID,Name,Active\n1,Alice,True\n2,\"Bob, Jr.\",False\n3,Charlie,True\n"
	);
}

#[rstest]
fn test_csv_export_respects_filters(mut table: DataTable) {
	table.set_filter_value("active", false);

	let mut out = Vec::new();
	export_csv(&table, &mut out).unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), "ID,Name,Active\n2,\"Bob, Jr.\",False\n");
}

#[rstest]
fn test_json_export_uses_raw_values(mut table: DataTable) {
	table.set_filter_value("active", true);

	let json = export_json(&table);
	assert_eq!(
		json,
		serde_json::json!([
			{ "id": 1, "name": "Alice", "active": true },
			{ "id": 3, "name": "Charlie", "active": true },
		])
	);
}
