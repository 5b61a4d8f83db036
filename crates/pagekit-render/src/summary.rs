//! Serializable pagination snapshot.

use pagekit_core::PageState;
use serde::Serialize;

/// Flat snapshot of a [`PageState`], ready for JSON handoff to a front
/// end or for assertions in tests.
///
/// # Examples
///
/// ```
/// use pagekit_core::{PageState, SimpleRequest};
/// use pagekit_render::PageSummary;
///
/// let state = PageState::new(&SimpleRequest::new("/").query("page", "2"), 30);
/// let summary = PageSummary::from_state(&state);
///
/// assert_eq!(summary.current, 2);
/// assert_eq!(summary.range, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
	/// All page numbers, first to last.
	pub range: Vec<usize>,
	/// Current page number.
	pub current: usize,
	/// Previous page number.
	pub previous: usize,
	/// Next page number.
	pub next: usize,
	/// Total number of records across all pages.
	pub total_records: usize,
	/// Total number of pages.
	pub page_count: usize,
	/// Number of records per page.
	pub per_page: usize,
}

impl PageSummary {
	/// Build a snapshot from `state`.
	pub fn from_state(state: &PageState) -> Self {
		Self {
			range: state.range().collect(),
			current: state.current(),
			previous: state.previous(),
			next: state.next(),
			total_records: state.total_records(),
			page_count: state.page_count(),
			per_page: state.per_page(),
		}
	}
}
