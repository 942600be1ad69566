//! The live mapping of filter key to current value

use indexmap::IndexMap;
use tablesift_core::Value;

/// Reserved key of the catch-all search box
pub const GLOBAL_SEARCH_KEY: &str = "globalSearch";

/// Current filter values keyed by `data_index` (or [`GLOBAL_SEARCH_KEY`])
///
/// Setting a key replaces any previous value for that key and leaves the
/// others untouched. Key order has no effect on filtering results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedFilters {
	values: IndexMap<String, Value>,
}

impl AppliedFilters {
	/// Creates an empty set of applied filters
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the value for `key`, returning the previous value if any
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.values.insert(key.into(), value.into())
	}

	/// Returns the value applied for `key`
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}

	/// Removes the value for `key`
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.values.shift_remove(key)
	}

	/// Returns true if a value is applied for `key`
	pub fn contains_key(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	/// Returns the global search value, if one is applied
	pub fn global_search(&self) -> Option<&Value> {
		self.get(GLOBAL_SEARCH_KEY)
	}

	/// Removes every applied value
	pub fn clear(&mut self) {
		self.values.clear();
	}

	/// Returns the number of applied values
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns true if nothing is applied
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterates over `(key, value)` pairs
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl<K, V> FromIterator<(K, V)> for AppliedFilters
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			values: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_set_replaces_only_that_key() {
		let mut applied = AppliedFilters::new();
		applied.set("status", "active");
		applied.set("name", "an");

		let previous = applied.set("status", "archived");

		assert_eq!(previous, Some(Value::from("active")));
		assert_eq!(applied.get("status"), Some(&Value::from("archived")));
		assert_eq!(applied.get("name"), Some(&Value::from("an")));
		assert_eq!(applied.len(), 2);
	}

	#[rstest]
	fn test_global_search_uses_reserved_key() {
		let mut applied = AppliedFilters::new();
		assert!(applied.global_search().is_none());

		applied.set(GLOBAL_SEARCH_KEY, "bo");
		assert_eq!(applied.global_search(), Some(&Value::from("bo")));
	}

	#[rstest]
	fn test_clear() {
		let mut applied: AppliedFilters = vec![("a", 1), ("b", 2)].into_iter().collect();
		applied.clear();
		assert!(applied.is_empty());
	}
}
