//! Per-kind matching rules
//!
//! Each [`FilterKind`] has one rule. The engine compiles every applied
//! filter into a [`Matcher`] once per `apply` call so the applied value is
//! converted a single time rather than once per row.

use crate::definition::FilterKind;
use crate::scope::GlobalSearchScope;
use tablesift_core::{Row, Value};

/// Exact, case-sensitive equality of the string conversions
pub fn select_matches(cell: &Value, value: &Value) -> bool {
	cell.to_string() == value.to_string()
}

/// Case-insensitive substring test of the string conversions
pub fn input_matches(cell: &Value, value: &Value) -> bool {
	cell.to_lowercase_string()
		.contains(&value.to_lowercase_string())
}

/// Equality of the truthiness of both values
pub fn toggle_matches(cell: &Value, value: &Value) -> bool {
	cell.is_truthy() == value.is_truthy()
}

/// Case-insensitive substring test against every scanned field of the row
pub fn global_search_matches(row: &Row, value: &Value, scope: &GlobalSearchScope) -> bool {
	Matcher::compile(FilterKind::GlobalSearch, "", value, scope).matches(row)
}

/// One applied filter, ready to test rows
pub(crate) enum Matcher<'a> {
	Select {
		field: &'a str,
		expected: String,
	},
	Input {
		field: &'a str,
		needle: String,
	},
	Toggle {
		field: &'a str,
		expected: bool,
	},
	GlobalSearch {
		needle: String,
		scope: &'a GlobalSearchScope,
	},
}

impl<'a> Matcher<'a> {
	pub(crate) fn compile(
		kind: FilterKind,
		field: &'a str,
		value: &Value,
		scope: &'a GlobalSearchScope,
	) -> Self {
		match kind {
			FilterKind::Select => Self::Select {
				field,
				expected: value.to_string(),
			},
			FilterKind::Input => Self::Input {
				field,
				needle: value.to_lowercase_string(),
			},
			FilterKind::Toggle => Self::Toggle {
				field,
				expected: value.is_truthy(),
			},
			FilterKind::GlobalSearch => Self::GlobalSearch {
				needle: value.to_lowercase_string(),
				scope,
			},
		}
	}

	pub(crate) fn matches(&self, row: &Row) -> bool {
		match self {
			Self::Select { field, expected } => row.get(field).to_string() == *expected,
			Self::Input { field, needle } => row.get(field).to_lowercase_string().contains(needle),
			Self::Toggle { field, expected } => row.get(field).is_truthy() == *expected,
			Self::GlobalSearch { needle, scope } => row
				.fields()
				.filter(|(name, _)| scope.includes(name))
				.any(|(_, cell)| cell.to_lowercase_string().contains(needle)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use tablesift_core::row;

	#[rstest]
	#[case(Value::from("active"), Value::from("active"), true)]
	#[case(Value::from("Active"), Value::from("active"), false)]
	#[case(Value::from(1), Value::from("1"), true)]
	#[case(Value::Bool(true), Value::from("true"), true)]
	#[case(Value::Undefined, Value::from("undefined"), true)]
	#[case(Value::from(1e-7), Value::from("1e-7"), true)]
	#[case(Value::from(1e21), Value::from("1e+21"), true)]
	fn test_select(#[case] cell: Value, #[case] value: Value, #[case] expected: bool) {
		assert_eq!(select_matches(&cell, &value), expected);
	}

	#[rstest]
	#[case(Value::from("Anna"), Value::from("an"), true)]
	#[case(Value::from("banana"), Value::from("AN"), true)]
	#[case(Value::from("Bob"), Value::from("an"), false)]
	#[case(Value::from("anything"), Value::from(""), true)]
	#[case(Value::from(1234), Value::from(23), true)]
	#[case(Value::Undefined, Value::from("def"), true)]
	fn test_input(#[case] cell: Value, #[case] value: Value, #[case] expected: bool) {
		assert_eq!(input_matches(&cell, &value), expected);
	}

	#[rstest]
	#[case(Value::from(1), Value::Bool(true), true)]
	#[case(Value::from("yes"), Value::Bool(true), true)]
	#[case(Value::from(0), Value::Bool(true), false)]
	#[case(Value::from(""), Value::Bool(true), false)]
	#[case(Value::Undefined, Value::Bool(false), true)]
	#[case(Value::Bool(false), Value::from("false"), false)]
	fn test_toggle(#[case] cell: Value, #[case] value: Value, #[case] expected: bool) {
		assert_eq!(toggle_matches(&cell, &value), expected);
	}

	#[rstest]
	fn test_global_search_scans_every_field() {
		let row = row! { "name" => "Al", "secret" => "Hidden-Token" };
		let scope = GlobalSearchScope::AllFields;

		assert!(global_search_matches(&row, &Value::from("token"), &scope));
		assert!(global_search_matches(&row, &Value::from("al"), &scope));
		assert!(!global_search_matches(&row, &Value::from("zzz"), &scope));
	}

	#[rstest]
	fn test_global_search_respects_restricted_scope() {
		let row = row! { "name" => "Al", "secret" => "Hidden-Token" };
		let scope = GlobalSearchScope::fields(["name"]);

		assert!(!global_search_matches(&row, &Value::from("token"), &scope));
		assert!(global_search_matches(&row, &Value::from("al"), &scope));
	}

	#[rstest]
	fn test_global_search_on_empty_row_never_matches() {
		let row = Row::new();
		assert!(!global_search_matches(
			&row,
			&Value::from(""),
			&GlobalSearchScope::AllFields
		));
	}
}
