use thiserror::Error;

/// Errors raised while configuring a table
///
/// Filtering and slicing never fail at runtime. These variants only guard
/// construction of configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
	/// Page number or page length is below one
	#[error(
		"Invalid page configuration: current_page={current_page}, page_length={page_length} (both must be >= 1)"
	)]
	InvalidPageConfiguration {
		/// Requested page number
		current_page: usize,
		/// Requested rows per page
		page_length: usize,
	},

	/// A column key does not exist in the table
	#[error("Unknown column: {0}")]
	UnknownColumn(String),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
