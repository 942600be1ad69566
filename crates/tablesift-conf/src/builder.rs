//! Merges configuration sources into [`TableSettings`]

use crate::error::SettingsResult;
use crate::settings::TableSettings;
use crate::sources::{ConfigSource, EnvSource, TomlFileSource};
use indexmap::IndexMap;
use serde_json::Value;
use std::path::PathBuf;

/// Builds [`TableSettings`] from layered sources
///
/// Sources are applied in ascending priority, so a key set by a
/// higher-priority source replaces the same key from a lower one.
///
/// # Example
///
/// ```rust
/// use tablesift_conf::SettingsBuilder;
/// use tablesift_conf::sources::DefaultSource;
/// use serde_json::Value;
///
/// let settings = SettingsBuilder::new()
///     .add_source(DefaultSource::new().with_value("page_length", Value::from(50)))
///     .build()
///     .unwrap();
/// assert_eq!(settings.page_length, Some(50));
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Creates a builder without sources
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a builder reading `path` and `TABLESIFT_*` variables
	pub fn from_file_and_env(path: impl Into<PathBuf>) -> Self {
		Self::new()
			.add_source(TomlFileSource::new(path))
			.add_source(EnvSource::new())
	}

	/// Adds a source
	pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Loads and merges every source, then validates the result
	pub fn build(mut self) -> SettingsResult<TableSettings> {
		self.sources.sort_by_key(|s| s.priority());

		let mut merged: IndexMap<String, Value> = IndexMap::new();
		for source in &self.sources {
			let values = source.load()?;
			tracing::debug!(
				source = %source.description(),
				keys = values.len(),
				"loaded settings source"
			);
			merged.extend(values);
		}

		let object: serde_json::Map<String, Value> = merged.into_iter().collect();
		let settings: TableSettings = serde_json::from_value(Value::Object(object))?;
		settings.page_config()?;
		Ok(settings)
	}
}
