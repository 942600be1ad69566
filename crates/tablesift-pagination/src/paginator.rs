//! Slicing filtered rows into pages

use crate::config::{PageConfig, PageCountPolicy};
use serde::Serialize;
use std::ops::RangeInclusive;

/// Returns the rows of the configured page, clipped to what is available
///
/// The window is `[(current_page - 1) * page_length, current_page * page_length)`.
/// Pages past the end, and page zero, yield an empty slice.
///
/// # Examples
///
/// ```
/// use tablesift_pagination::{PageConfig, slice};
///
/// let rows: Vec<u32> = (0..125).collect();
/// let config = PageConfig::new(3, 50).unwrap();
/// assert_eq!(slice(&rows, &config), &rows[100..125]);
/// ```
pub fn slice<'a, T>(rows: &'a [T], config: &PageConfig) -> &'a [T] {
	let Some(start) = config.start_index() else {
		tracing::debug!("page 0 requested, returning no rows");
		return &[];
	};
	if start >= rows.len() {
		if start > 0 {
			tracing::debug!(
				page = config.current_page(),
				total = rows.len(),
				"requested page lies beyond the available rows"
			);
		}
		return &[];
	}
	let end = start.saturating_add(config.page_length()).min(rows.len());
	&rows[start..end]
}

/// Returns the number of navigable pages under the default policy
pub fn page_count(total: usize, page_length: usize) -> usize {
	crate::config::DEFAULT_PAGE_COUNT_POLICY.page_count(total, page_length)
}

/// Page footer metadata for a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
	/// Current page number (1-indexed)
	pub number: usize,
	/// Number of navigable pages
	pub page_count: usize,
	/// Number of filtered rows across all pages
	pub total: usize,
	/// Rows per page
	pub page_length: usize,
	/// Whether pagination controls should be shown
	pub show_controls: bool,
	/// 1-indexed position of the first row on this page, 0 when empty
	pub start_index: usize,
	/// 1-indexed position of the last row on this page, 0 when empty
	pub end_index: usize,
}

impl PageInfo {
	/// Returns true if a later navigable page exists
	pub fn has_next(&self) -> bool {
		self.number < self.page_count
	}

	/// Returns true if an earlier page exists
	pub fn has_previous(&self) -> bool {
		self.number > 1
	}
}

/// Owns the current page and slices filtered rows
///
/// # Example
///
/// ```rust
/// use tablesift_pagination::{PageConfig, Paginator};
///
/// let rows: Vec<u32> = (0..125).collect();
/// let mut paginator = Paginator::new(PageConfig::new(1, 50).unwrap());
///
/// assert_eq!(paginator.slice(&rows).len(), 50);
/// assert_eq!(paginator.page_count(rows.len()), 2);
///
/// paginator.set_page(4);
/// assert!(paginator.slice(&rows).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
	config: PageConfig,
	policy: PageCountPolicy,
}

impl Paginator {
	/// Creates a paginator using the default page-count policy
	pub fn new(config: PageConfig) -> Self {
		Self {
			config,
			policy: PageCountPolicy::default(),
		}
	}

	/// Sets the page-count policy
	pub fn with_policy(mut self, policy: PageCountPolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Returns the page configuration
	pub fn config(&self) -> &PageConfig {
		&self.config
	}

	/// Returns the page-count policy
	pub fn policy(&self) -> PageCountPolicy {
		self.policy
	}

	/// Returns the current page (1-indexed)
	pub fn current_page(&self) -> usize {
		self.config.current_page()
	}

	/// Returns the number of rows per page
	pub fn page_length(&self) -> usize {
		self.config.page_length()
	}

	/// Moves to `page` without checking it against the page count
	pub fn set_page(&mut self, page: usize) {
		tracing::debug!(from = self.current_page(), to = page, "page changed");
		self.config.set_current_page(page);
	}

	/// Moves to the next page if one is navigable; returns whether it moved
	pub fn next_page(&mut self, total: usize) -> bool {
		if self.current_page() < self.page_count(total) {
			self.set_page(self.current_page() + 1);
			true
		} else {
			false
		}
	}

	/// Moves to the previous page if there is one; returns whether it moved
	pub fn prev_page(&mut self) -> bool {
		if self.current_page() > 1 {
			self.set_page(self.current_page() - 1);
			true
		} else {
			false
		}
	}

	/// Returns the rows of the current page
	pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
		slice(rows, &self.config)
	}

	/// Returns the number of navigable pages for `total` rows
	pub fn page_count(&self, total: usize) -> usize {
		self.policy.page_count(total, self.page_length())
	}

	/// Returns true if pagination controls should be shown for `total` rows
	///
	/// At or below one page length every row is shown as a single page.
	pub fn should_paginate(&self, total: usize) -> bool {
		total > self.page_length()
	}

	/// Returns the navigable page numbers for `total` rows
	pub fn page_numbers(&self, total: usize) -> RangeInclusive<usize> {
		1..=self.page_count(total)
	}

	/// Returns footer metadata for `total` rows
	pub fn page_info(&self, total: usize) -> PageInfo {
		let (start_index, end_index) = match self.config.start_index() {
			Some(start) if start < total => {
				let end = start.saturating_add(self.page_length()).min(total);
				(start + 1, end)
			}
			_ => (0, 0),
		};

		PageInfo {
			number: self.current_page(),
			page_count: self.page_count(total),
			total,
			page_length: self.page_length(),
			show_controls: self.should_paginate(total),
			start_index,
			end_index,
		}
	}
}
