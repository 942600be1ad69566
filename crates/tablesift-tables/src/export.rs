//! CSV and JSON export of the filtered rows
//!
//! Both formats cover every filtered row, not only the current page, and
//! only the visible columns.

use crate::table::DataTable;
use std::io;
use thiserror::Error;

/// Export failures
#[derive(Debug, Error)]
pub enum ExportError {
	/// CSV encoding failed
	#[error("CSV export failed: {0}")]
	Csv(#[from] csv::Error),

	/// Writing to the output failed
	#[error("I/O error during export: {0}")]
	Io(#[from] io::Error),
}

/// Writes the visible column titles, then one record of display values per
/// filtered row
///
/// # Examples
///
/// ```
/// use tablesift_core::row;
/// use tablesift_tables::DataTable;
/// use tablesift_tables::column::ColumnDefinition;
/// use tablesift_tables::export::export_csv;
///
/// let table = DataTable::builder()
///     .rows(vec![row! { "name" => "Alice", "active" => true }])
///     .columns(vec![
///         ColumnDefinition::new("name", "Name", "name"),
///         ColumnDefinition::new("active", "Active", "active"),
///     ])
///     .build()
///     .unwrap();
///
/// let mut out = Vec::new();
/// export_csv(&table, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Name,Active\nAlice,True\n");
/// ```
pub fn export_csv<W: io::Write>(table: &DataTable, writer: W) -> Result<(), ExportError> {
	let columns = table.visible_columns();
	let mut csv = csv::Writer::from_writer(writer);

	csv.write_record(columns.iter().map(|c| c.title()))?;
	for row in table.filtered_rows() {
		csv.write_record(columns.iter().map(|c| table.display_value(c, row)))?;
	}
	csv.flush()?;
	Ok(())
}

/// Returns a JSON array with one object per filtered row, keyed by visible
/// column key and holding the raw cell values
pub fn export_json(table: &DataTable) -> serde_json::Value {
	let columns = table.visible_columns();
	let rows = table
		.filtered_rows()
		.into_iter()
		.map(|row| {
			let object = columns
				.iter()
				.map(|c| (c.key().to_string(), serde_json::Value::from(row.get(c.data_index()))))
				.collect::<serde_json::Map<_, _>>();
			serde_json::Value::Object(object)
		})
		.collect();
	serde_json::Value::Array(rows)
}
