//! Pagination for tablesift
//!
//! A [`Paginator`] owns the current page of a [`PageConfig`] and slices an
//! already filtered row set into the visible window.
//!
//! ## Page counts
//!
//! The number of navigable pages is `floor(total / page_length)` by default,
//! so a trailing partial page gets no page number of its own. Consumers that
//! want the partial page counted opt into [`PageCountPolicy::Ceil`].
//!
//! ```rust
//! use tablesift_pagination::{PageConfig, PageCountPolicy, Paginator};
//!
//! let config = PageConfig::with_page_length(50).unwrap();
//! assert_eq!(Paginator::new(config).page_count(125), 2);
//! assert_eq!(
//!     Paginator::new(config).with_policy(PageCountPolicy::Ceil).page_count(125),
//!     3
//! );
//! ```

pub mod config;
pub mod paginator;

pub use config::{DEFAULT_PAGE_COUNT_POLICY, PageConfig, PageCountPolicy};
pub use paginator::{PageInfo, Paginator, page_count, slice};
