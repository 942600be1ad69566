//! Filter definitions
//!
//! A [`FilterDefinition`] describes how one field can be filtered: which
//! matching rule applies ([`FilterKind`]), how the input is labelled, and
//! optionally a caller-supplied strategy that replaces the default handling
//! of value changes.

use crate::applied::AppliedFilters;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::sync::Arc;
use tablesift_core::Value;

/// Matching rule of a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
	/// Exact, case-sensitive string equality
	Select,
	/// Case-insensitive substring test
	Input,
	/// Boolean equality after truthiness coercion
	Toggle,
	/// Case-insensitive substring test across every field of the row
	///
	/// This is the fallback for applied keys without a definition.
	GlobalSearch,
}

impl FilterKind {
	/// Returns the name used in configuration files
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Select => "select",
			Self::Input => "input",
			Self::Toggle => "toggle",
			Self::GlobalSearch => "globalSearch",
		}
	}
}

impl fmt::Display for FilterKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One choice offered by a select filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
	/// Text shown to the user
	pub label: String,
	/// Value applied when the option is chosen
	pub value: Value,
}

impl SelectOption {
	/// Creates a new select option
	pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
		}
	}
}

/// Strategy that replaces the default merge of a changed filter value
///
/// It receives the engine's applied filters and the new value, and decides
/// itself what (if anything) to record.
pub type FilterChangeHandler = Arc<dyn Fn(&mut AppliedFilters, &Value) + Send + Sync>;

/// Describes how one field can be filtered
///
/// # Example
///
/// ```rust
/// use tablesift_filters::{FilterDefinition, FilterKind, SelectOption};
///
/// let status = FilterDefinition::select("status")
///     .label("Status")
///     .options(vec![
///         SelectOption::new("Active", "active"),
///         SelectOption::new("Archived", "archived"),
///     ]);
/// assert_eq!(status.kind(), FilterKind::Select);
/// assert_eq!(status.data_index(), "status");
/// ```
#[derive(Clone)]
pub struct FilterDefinition {
	kind: FilterKind,
	data_index: String,
	label: String,
	placeholder: String,
	options: Vec<SelectOption>,
	on_filter_change: Option<FilterChangeHandler>,
}

impl FilterDefinition {
	/// Creates a definition of the given kind for `data_index`
	pub fn new(kind: FilterKind, data_index: impl Into<String>) -> Self {
		Self {
			kind,
			data_index: data_index.into(),
			label: String::new(),
			placeholder: String::new(),
			options: Vec::new(),
			on_filter_change: None,
		}
	}

	/// Creates a select filter
	pub fn select(data_index: impl Into<String>) -> Self {
		Self::new(FilterKind::Select, data_index)
	}

	/// Creates a text input filter
	pub fn input(data_index: impl Into<String>) -> Self {
		Self::new(FilterKind::Input, data_index)
	}

	/// Creates a toggle filter
	pub fn toggle(data_index: impl Into<String>) -> Self {
		Self::new(FilterKind::Toggle, data_index)
	}

	/// Sets the label
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}

	/// Sets the placeholder text
	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	/// Sets the options of a select filter
	pub fn options(mut self, options: Vec<SelectOption>) -> Self {
		self.options = options;
		self
	}

	/// Installs a strategy replacing the default merge for this filter
	pub fn on_filter_change<F>(mut self, handler: F) -> Self
	where
		F: Fn(&mut AppliedFilters, &Value) + Send + Sync + 'static,
	{
		self.on_filter_change = Some(Arc::new(handler));
		self
	}

	/// Returns the matching rule
	pub fn kind(&self) -> FilterKind {
		self.kind
	}

	/// Returns the field this filter applies to
	pub fn data_index(&self) -> &str {
		&self.data_index
	}

	/// Returns the label
	pub fn label_text(&self) -> &str {
		&self.label
	}

	/// Returns the placeholder text
	pub fn placeholder_text(&self) -> &str {
		&self.placeholder
	}

	/// Returns the options of a select filter
	pub fn select_options(&self) -> &[SelectOption] {
		&self.options
	}

	/// Returns the override strategy, if one was installed
	pub fn change_handler(&self) -> Option<&FilterChangeHandler> {
		self.on_filter_change.as_ref()
	}
}

impl Debug for FilterDefinition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FilterDefinition")
			.field("kind", &self.kind)
			.field("data_index", &self.data_index)
			.field("label", &self.label)
			.field("placeholder", &self.placeholder)
			.field("options", &self.options)
			.field("on_filter_change", &self.on_filter_change.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_constructors_set_kind() {
		assert_eq!(FilterDefinition::select("a").kind(), FilterKind::Select);
		assert_eq!(FilterDefinition::input("a").kind(), FilterKind::Input);
		assert_eq!(FilterDefinition::toggle("a").kind(), FilterKind::Toggle);
	}

	#[rstest]
	fn test_builder() {
		let def = FilterDefinition::input("name")
			.label("Name")
			.placeholder("Search names");

		assert_eq!(def.data_index(), "name");
		assert_eq!(def.label_text(), "Name");
		assert_eq!(def.placeholder_text(), "Search names");
		assert!(def.select_options().is_empty());
		assert!(def.change_handler().is_none());
	}

	#[rstest]
	fn test_debug_reports_handler_presence() {
		let def = FilterDefinition::toggle("active").on_filter_change(|_, _| {});
		let debug = format!("{:?}", def);
		assert!(debug.contains("on_filter_change: true"));
	}

	#[rstest]
	#[case("\"select\"", FilterKind::Select)]
	#[case("\"input\"", FilterKind::Input)]
	#[case("\"toggle\"", FilterKind::Toggle)]
	#[case("\"globalSearch\"", FilterKind::GlobalSearch)]
	fn test_kind_deserializes_from_config_name(#[case] json: &str, #[case] expected: FilterKind) {
		let kind: FilterKind = serde_json::from_str(json).unwrap();
		assert_eq!(kind, expected);
		assert_eq!(format!("\"{}\"", kind), json);
	}
}
