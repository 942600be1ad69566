use crate::sources::SourceError;
use tablesift_core::TableError;
use thiserror::Error;

/// Errors raised while building table settings
#[derive(Debug, Error)]
pub enum SettingsError {
	/// A configuration source failed to load
	#[error("Settings source error: {0}")]
	Source(#[from] SourceError),

	/// The merged values do not form valid settings
	#[error("Settings deserialization error: {0}")]
	Deserialize(#[from] serde_json::Error),

	/// The settings describe an invalid table configuration
	#[error("Invalid settings: {0}")]
	Invalid(#[from] TableError),
}

/// Result type for settings operations
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;
