//! Rows: open-ended mappings from field name to [`Value`]

use crate::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

static UNDEFINED: Value = Value::Undefined;

/// One record of tabular data
///
/// Field order follows insertion order. Looking up a field the row does
/// not carry yields [`Value::Undefined`] instead of failing.
///
/// # Example
///
/// ```rust
/// use tablesift_core::{Row, Value, row};
///
/// let row = row! { "id" => 1, "name" => "Al", "active" => true };
/// assert_eq!(row.get("name"), &Value::from("Al"));
/// assert!(row.get("email").is_undefined());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
	fields: IndexMap<String, Value>,
}

impl Row {
	/// Creates an empty row
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a field, returning the previous value if any
	pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.fields.insert(field.into(), value.into())
	}

	/// Builder-style variant of [`Row::insert`]
	pub fn with_field(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(field, value);
		self
	}

	/// Returns the value of `field`, or [`Value::Undefined`] when absent
	pub fn get(&self, field: &str) -> &Value {
		self.fields.get(field).unwrap_or(&UNDEFINED)
	}

	/// Returns true if the row carries `field`
	pub fn contains(&self, field: &str) -> bool {
		self.fields.contains_key(field)
	}

	/// Iterates over `(field, value)` pairs in insertion order
	pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Iterates over the values in insertion order
	pub fn values(&self) -> impl Iterator<Item = &Value> {
		self.fields.values()
	}

	/// Returns the number of fields
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Returns true if the row has no fields
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for Row
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			fields: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

/// Builds a [`Row`] from `field => value` pairs
#[macro_export]
macro_rules! row {
	() => {
		$crate::Row::new()
	};
	($($field:expr => $value:expr),+ $(,)?) => {{
		let mut row = $crate::Row::new();
		$(row.insert($field, $value);)+
		row
	}};
}
