//! Column visibility and cell display values

use super::base::ColumnDefinition;
use tablesift_core::{Row, Value};

/// Returns true if `visible` is one of `false`, `"0"`, `"false"` or `0`
///
/// This is an explicit set, not truthiness: `""`, `NaN`, `null` and an
/// absent attribute all leave the column visible.
pub fn is_hidden_value(visible: &Value) -> bool {
	match visible {
		Value::Bool(b) => !b,
		Value::Number(n) => *n == 0.0,
		Value::String(s) => s == "0" || s == "false",
		Value::Undefined | Value::Null => false,
	}
}

/// Returns true unless the column's `visible` attribute is in the hidden set
///
/// # Examples
///
/// ```
/// use tablesift_tables::column::{ColumnDefinition, is_visible};
///
/// assert!(is_visible(&ColumnDefinition::new("a", "A", "a")));
/// assert!(is_visible(&ColumnDefinition::new("a", "A", "a").visible("yes")));
/// assert!(!is_visible(&ColumnDefinition::new("a", "A", "a").visible("0")));
/// ```
pub fn is_visible(column: &ColumnDefinition) -> bool {
	!is_hidden_value(column.visibility())
}

/// Returns the visible columns in declaration order
pub fn visible_columns(columns: &[ColumnDefinition]) -> Vec<&ColumnDefinition> {
	columns.iter().filter(|c| is_visible(c)).collect()
}

/// Returns the text shown in the cell of `column` for `row`
///
/// A custom renderer wins. Otherwise booleans read `"True"`/`"False"` and
/// every other value uses its string conversion.
pub fn display_value(column: &ColumnDefinition, row: &Row) -> String {
	let value = row.get(column.data_index());
	match column.renderer() {
		Some(render) => render(value, row),
		None => match value {
			Value::Bool(true) => "True".to_string(),
			Value::Bool(false) => "False".to_string(),
			other => other.to_string(),
		},
	}
}
