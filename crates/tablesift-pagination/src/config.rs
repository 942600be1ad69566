//! Page configuration and page-count policy

use serde::{Deserialize, Serialize};
use tablesift_core::{Result, TableError};

/// How a trailing partial page is counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageCountPolicy {
	/// `floor(total / page_length)`: a trailing partial page gets no number
	#[default]
	Floor,
	/// `ceil(total / page_length)`: a trailing partial page is counted
	Ceil,
}

/// Policy used unless a consumer opts into another one
pub const DEFAULT_PAGE_COUNT_POLICY: PageCountPolicy = PageCountPolicy::Floor;

impl PageCountPolicy {
	/// Returns the number of pages for `total` rows
	///
	/// # Examples
	///
	/// ```
	/// use tablesift_pagination::PageCountPolicy;
	///
	/// assert_eq!(PageCountPolicy::Floor.page_count(125, 50), 2);
	/// assert_eq!(PageCountPolicy::Ceil.page_count(125, 50), 3);
	/// ```
	pub fn page_count(&self, total: usize, page_length: usize) -> usize {
		if page_length == 0 {
			return 0;
		}
		match self {
			Self::Floor => total / page_length,
			Self::Ceil => total.div_ceil(page_length),
		}
	}
}

/// Current page and rows per page
///
/// Both values are at least one; [`PageConfig::new`] rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageConfig")]
pub struct PageConfig {
	current_page: usize,
	page_length: usize,
}

impl PageConfig {
	/// Creates a validated page configuration
	///
	/// # Examples
	///
	/// ```
	/// use tablesift_pagination::PageConfig;
	///
	/// let config = PageConfig::new(1, 50).unwrap();
	/// assert_eq!(config.page_length(), 50);
	/// assert!(PageConfig::new(1, 0).is_err());
	/// ```
	pub fn new(current_page: usize, page_length: usize) -> Result<Self> {
		if current_page == 0 || page_length == 0 {
			return Err(TableError::InvalidPageConfiguration {
				current_page,
				page_length,
			});
		}
		Ok(Self {
			current_page,
			page_length,
		})
	}

	/// Starts on page one with `page_length` rows per page
	pub fn with_page_length(page_length: usize) -> Result<Self> {
		Self::new(1, page_length)
	}

	/// Returns the current page (1-indexed)
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Returns the number of rows per page
	pub fn page_length(&self) -> usize {
		self.page_length
	}

	/// Returns the 0-indexed start of the current page
	///
	/// `None` for page zero, which precedes every row.
	pub fn start_index(&self) -> Option<usize> {
		self.current_page
			.checked_sub(1)
			.map(|p| p.saturating_mul(self.page_length))
	}

	pub(crate) fn set_current_page(&mut self, page: usize) {
		self.current_page = page;
	}
}

#[derive(Deserialize)]
struct RawPageConfig {
	#[serde(default = "first_page")]
	current_page: usize,
	page_length: usize,
}

fn first_page() -> usize {
	1
}

impl TryFrom<RawPageConfig> for PageConfig {
	type Error = TableError;

	fn try_from(raw: RawPageConfig) -> Result<Self> {
		Self::new(raw.current_page, raw.page_length)
	}
}
