//! Column definitions

use std::fmt::{self, Debug};
use std::sync::Arc;
use tablesift_core::{Row, Value};

/// Custom cell renderer: receives the cell value and the whole row
pub type RenderFn = Arc<dyn Fn(&Value, &Row) -> String + Send + Sync>;

/// Describes how one field of a row is labelled, shown and hidden
///
/// # Example
///
/// ```rust
/// use tablesift_tables::column::ColumnDefinition;
///
/// let name = ColumnDefinition::new("name", "User Name", "name");
/// let email = ColumnDefinition::new("email", "Email", "email")
///     .visible("false")
///     .render(|value, _row| format!("<{}>", value));
///
/// assert_eq!(name.title(), "User Name");
/// assert!(email.renderer().is_some());
/// ```
#[derive(Clone)]
pub struct ColumnDefinition {
	key: String,
	title: String,
	data_index: String,
	visible: Value,
	render: Option<RenderFn>,
}

impl ColumnDefinition {
	/// Creates a visible column reading `data_index` from each row
	pub fn new(
		key: impl Into<String>,
		title: impl Into<String>,
		data_index: impl Into<String>,
	) -> Self {
		Self {
			key: key.into(),
			title: title.into(),
			data_index: data_index.into(),
			visible: Value::Undefined,
			render: None,
		}
	}

	/// Sets the raw `visible` attribute
	///
	/// See [`is_visible`](crate::column::is_visible) for how it is read.
	pub fn visible(mut self, visible: impl Into<Value>) -> Self {
		self.visible = visible.into();
		self
	}

	/// Sets a custom cell renderer
	pub fn render<F>(mut self, render: F) -> Self
	where
		F: Fn(&Value, &Row) -> String + Send + Sync + 'static,
	{
		self.render = Some(Arc::new(render));
		self
	}

	/// Returns the unique key of this column
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Returns the header text
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Returns the row field this column shows
	pub fn data_index(&self) -> &str {
		&self.data_index
	}

	/// Returns the raw `visible` attribute
	pub fn visibility(&self) -> &Value {
		&self.visible
	}

	/// Returns the custom renderer, if any
	pub fn renderer(&self) -> Option<&RenderFn> {
		self.render.as_ref()
	}
}

impl Debug for ColumnDefinition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ColumnDefinition")
			.field("key", &self.key)
			.field("title", &self.title)
			.field("data_index", &self.data_index)
			.field("visible", &self.visible)
			.finish_non_exhaustive()
	}
}
