use proptest::prelude::*;
use rstest::*;
use tablesift_core::{Row, TableError, row};
use tablesift_pagination::{PageConfig, PageCountPolicy, Paginator, page_count, slice};

#[fixture]
fn filtered_rows() -> Vec<Row> {
	(0..125).map(|i| row! { "id" => i }).collect()
}

#[rstest]
fn test_pagination_slicing_125_rows(filtered_rows: Vec<Row>) {
	let mut paginator = Paginator::new(PageConfig::new(1, 50).unwrap());

	let first = paginator.slice(&filtered_rows);
	assert_eq!(first.len(), 50);
	assert_eq!(first[0].get("id").to_string(), "0");
	assert_eq!(first[49].get("id").to_string(), "49");

	paginator.set_page(3);
	let third = paginator.slice(&filtered_rows);
	assert_eq!(third.len(), 25);
	assert_eq!(third[0].get("id").to_string(), "100");
	assert_eq!(third[24].get("id").to_string(), "124");

	paginator.set_page(4);
	assert!(paginator.slice(&filtered_rows).is_empty());

	// Floor division: the partial third page has no page number
	assert_eq!(paginator.page_count(filtered_rows.len()), 2);
	assert_eq!(page_count(filtered_rows.len(), 50), 2);
}

#[rstest]
fn test_free_slice_with_explicit_config(filtered_rows: Vec<Row>) {
	let config = PageConfig::new(2, 100).unwrap();
	assert_eq!(slice(&filtered_rows, &config).len(), 25);
}

#[rstest]
fn test_invalid_page_length_is_rejected() {
	assert!(matches!(
		PageConfig::with_page_length(0),
		Err(TableError::InvalidPageConfiguration { page_length: 0, .. })
	));
}

#[rstest]
fn test_ceil_policy_counts_partial_page(filtered_rows: Vec<Row>) {
	let paginator =
		Paginator::new(PageConfig::new(1, 50).unwrap()).with_policy(PageCountPolicy::Ceil);
	assert_eq!(paginator.page_count(filtered_rows.len()), 3);
}

#[rstest]
fn test_small_sets_are_a_single_implicit_page() {
	let paginator = Paginator::new(PageConfig::new(1, 10).unwrap());
	assert!(!paginator.should_paginate(10));
	assert!(paginator.should_paginate(11));
}

proptest! {
	/// Test: a page never exceeds page_length and always lies inside the rows
	///
	/// Category: Property
	#[rstest]
	fn prop_slice_within_bounds(
		total in 0usize..300,
		page in 0usize..20,
		page_length in 1usize..60,
	) {
		let rows: Vec<usize> = (0..total).collect();
		let mut paginator = Paginator::new(PageConfig::new(1, page_length).unwrap());
		paginator.set_page(page);

		let window = paginator.slice(&rows);
		prop_assert!(window.len() <= page_length);
		if let Some(first) = window.first() {
			prop_assert_eq!(*first, (page - 1) * page_length);
		}
	}

	/// Test: pages 1..=ceil(n/len) partition the rows in order
	///
	/// Category: Property
	#[rstest]
	fn prop_pages_partition_rows(total in 0usize..300, page_length in 1usize..60) {
		let rows: Vec<usize> = (0..total).collect();
		let mut paginator = Paginator::new(PageConfig::new(1, page_length).unwrap())
			.with_policy(PageCountPolicy::Ceil);

		let mut seen = Vec::new();
		for page in paginator.page_numbers(total) {
			paginator.set_page(page);
			seen.extend_from_slice(paginator.slice(&rows));
		}
		prop_assert_eq!(seen, rows);
	}
}
