//! The filter engine
//!
//! [`FilterEngine`] owns the filter definitions and the applied filter
//! values. [`FilterEngine::apply`] is a pure function of those and the rows
//! it is given: it recomputes the full filtered set on every call.

use crate::applied::{AppliedFilters, GLOBAL_SEARCH_KEY};
use crate::definition::{FilterDefinition, FilterKind};
use crate::matcher::Matcher;
use crate::scope::GlobalSearchScope;
use tablesift_core::{Row, Value};

/// Outcome of [`FilterEngine::change_filter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
	/// The value was merged into the applied filters
	Merged,
	/// The definition's override strategy handled the change
	Delegated,
}

/// Filters rows by the AND of every applied filter
///
/// # Example
///
/// ```rust
/// use tablesift_core::row;
/// use tablesift_filters::{FilterDefinition, FilterEngine};
///
/// let rows = vec![
///     row! { "id" => 1, "name" => "Al", "active" => true },
///     row! { "id" => 2, "name" => "Bo", "active" => false },
/// ];
///
/// let mut engine = FilterEngine::new(vec![FilterDefinition::toggle("active")]);
/// engine.set_filter_value("active", true);
///
/// let filtered = engine.apply(&rows);
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].get("id").to_string(), "1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
	definitions: Vec<FilterDefinition>,
	applied: AppliedFilters,
	global_search_scope: GlobalSearchScope,
}

impl FilterEngine {
	/// Creates an engine with the given definitions and nothing applied
	pub fn new(definitions: Vec<FilterDefinition>) -> Self {
		Self {
			definitions,
			..Self::default()
		}
	}

	/// Sets which fields the global search scans
	pub fn with_global_search_scope(mut self, scope: GlobalSearchScope) -> Self {
		self.global_search_scope = scope;
		self
	}

	/// Replaces the global search scope
	pub fn set_global_search_scope(&mut self, scope: GlobalSearchScope) {
		self.global_search_scope = scope;
	}

	/// Returns the global search scope
	pub fn global_search_scope(&self) -> &GlobalSearchScope {
		&self.global_search_scope
	}

	/// Returns the filter definitions
	pub fn definitions(&self) -> &[FilterDefinition] {
		&self.definitions
	}

	/// Returns the definition whose `data_index` equals `key`
	pub fn definition(&self, key: &str) -> Option<&FilterDefinition> {
		self.definitions.iter().find(|d| d.data_index() == key)
	}

	/// Returns the matching rule used for `key`
	///
	/// Keys without a definition fall back to [`FilterKind::GlobalSearch`].
	pub fn kind_for(&self, key: &str) -> FilterKind {
		self.definition(key)
			.map_or(FilterKind::GlobalSearch, FilterDefinition::kind)
	}

	/// Returns the currently applied filters
	pub fn applied(&self) -> &AppliedFilters {
		&self.applied
	}

	/// Merges `{key: value}` into the applied filters
	///
	/// Any previous value for `key` is replaced. The value's type is not
	/// checked against the filter kind.
	pub fn set_filter_value(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.applied.set(key, value);
	}

	/// Routes a user change of filter `key`
	///
	/// Runs the definition's override strategy when one is installed,
	/// otherwise merges the value like [`FilterEngine::set_filter_value`].
	pub fn change_filter(&mut self, key: &str, value: impl Into<Value>) -> FilterChange {
		let value = value.into();
		let handler = self
			.definition(key)
			.and_then(FilterDefinition::change_handler)
			.cloned();

		match handler {
			Some(handler) => {
				tracing::debug!(key, "filter change handled by override strategy");
				handler(&mut self.applied, &value);
				FilterChange::Delegated
			}
			None => {
				self.applied.set(key, value);
				FilterChange::Merged
			}
		}
	}

	/// Removes every applied filter
	pub fn clear(&mut self) {
		tracing::debug!(cleared = self.applied.len(), "clearing applied filters");
		self.applied.clear();
	}

	/// Returns true if `row` satisfies every applied filter
	pub fn matches(&self, row: &Row) -> bool {
		let matchers = self.compile();
		matchers.iter().all(|m| m.matches(row))
	}

	/// Returns the rows satisfying every applied filter, in input order
	///
	/// With nothing applied every row passes.
	pub fn apply<'a, I>(&self, rows: I) -> Vec<&'a Row>
	where
		I: IntoIterator<Item = &'a Row>,
	{
		let matchers = self.compile();
		let mut total = 0usize;
		let filtered: Vec<&'a Row> = rows
			.into_iter()
			.inspect(|_| total += 1)
			.filter(|row| matchers.iter().all(|m| m.matches(row)))
			.collect();

		tracing::trace!(
			total,
			matched = filtered.len(),
			filters = self.applied.len(),
			"applied filters"
		);
		filtered
	}

	/// Returns the positions of the rows satisfying every applied filter
	pub fn apply_indices(&self, rows: &[Row]) -> Vec<usize> {
		let matchers = self.compile();
		rows.iter()
			.enumerate()
			.filter(|(_, row)| matchers.iter().all(|m| m.matches(row)))
			.map(|(i, _)| i)
			.collect()
	}

	fn compile(&self) -> Vec<Matcher<'_>> {
		self.applied
			.iter()
			.map(|(key, value)| {
				let kind = self.kind_for(key);
				if kind == FilterKind::GlobalSearch && key != GLOBAL_SEARCH_KEY {
					tracing::debug!(key, "no filter definition for key, using global search");
				}
				Matcher::compile(kind, key, value, &self.global_search_scope)
			})
			.collect()
	}
}
