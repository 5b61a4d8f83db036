//! Pagination state and navigation URL derivation.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::error::{PageError, Result};
use crate::query;
use crate::request::RequestContext;

/// Default number of records per page.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Default query parameter carrying the page number.
pub const DEFAULT_PAGE_KEY: &str = "page";

/// Immutable pagination state for one request.
///
/// Construction snapshots the request (absolute URL, path, ordered query
/// pairs) and derives every field synchronously: the page count, the
/// clamped current page and its neighbours, and the base query with the
/// page key removed. Nothing mutates afterwards, so instances are cheap to
/// share across rendering code.
///
/// The requested page is read from the request's query string under the
/// configured page key. Missing, non-numeric, zero or negative values
/// resolve to page 1; values beyond the last page resolve to the last
/// page.
///
/// # Examples
///
/// ```
/// use pagekit_core::{PageState, SimpleRequest};
///
/// let request = SimpleRequest::new("/news").query("id", "3").query("page", "5");
/// let state = PageState::new(&request, 30);
///
/// assert_eq!(state.page_count(), 3);
/// assert_eq!(state.current(), 3); // clamped to the last page
/// assert_eq!(state.offset(), 20);
/// assert_eq!(state.url_for(5), "http://localhost/news?id=3&page=3");
/// assert_eq!(state.first_page_url(), "http://localhost/news?id=3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
	total_records: usize,
	per_page: usize,
	page_key: String,
	page_count: usize,
	current: usize,
	previous: usize,
	next: usize,
	base_url: String,
	path: String,
	query_pairs: Vec<(String, String)>,
	base_query: Vec<(String, String)>,
}

impl PageState {
	/// Build state with the default page size and page key.
	///
	/// Never fails: every malformed page indicator normalizes to a valid
	/// page.
	pub fn new(request: &impl RequestContext, total_records: usize) -> Self {
		Self::build(
			request,
			total_records,
			DEFAULT_PER_PAGE,
			DEFAULT_PAGE_KEY.to_string(),
		)
	}

	/// Build state with an explicit page size and page key.
	///
	/// # Errors
	///
	/// Returns [`PageError::ZeroPerPage`] for a zero `per_page` and
	/// [`PageError::EmptyPageKey`] for an empty key. Both are host
	/// configuration mistakes; page indicators themselves never error.
	pub fn with_config(
		request: &impl RequestContext,
		total_records: usize,
		per_page: usize,
		page_key: impl Into<String>,
	) -> Result<Self> {
		if per_page == 0 {
			return Err(PageError::ZeroPerPage);
		}
		let page_key = page_key.into();
		if page_key.is_empty() {
			return Err(PageError::EmptyPageKey);
		}
		Ok(Self::build(request, total_records, per_page, page_key))
	}

	fn build(
		request: &impl RequestContext,
		total_records: usize,
		per_page: usize,
		page_key: String,
	) -> Self {
		let query_pairs = request.query_pairs().to_vec();
		let base_query = query::without_key(&query_pairs, &page_key);
		let page_count = total_records.div_ceil(per_page).max(1);

		let requested = request
			.query_value(&page_key)
			.and_then(|raw| raw.trim().parse::<i64>().ok())
			.unwrap_or(1);
		let current = clamp_page(requested, page_count);
		let previous = if current > 1 { current - 1 } else { current };
		let next = if current < page_count {
			current + 1
		} else {
			current
		};

		Self {
			total_records,
			per_page,
			page_key,
			page_count,
			current,
			previous,
			next,
			base_url: request.absolute_url(),
			path: request.path().to_string(),
			query_pairs,
			base_query,
		}
	}

	/// Whether a single page holds every record.
	pub fn has_only_one_page(&self) -> bool {
		self.total_records <= self.per_page
	}

	/// Current page number, in `[1, page_count]`.
	pub fn current(&self) -> usize {
		self.current
	}

	/// Previous page number; equals `current()` on the first page.
	pub fn previous(&self) -> usize {
		self.previous
	}

	/// Next page number; equals `current()` on the last page.
	pub fn next(&self) -> usize {
		self.next
	}

	/// Total number of pages, at least 1.
	pub fn page_count(&self) -> usize {
		self.page_count
	}

	/// Number of records per page.
	pub fn per_page(&self) -> usize {
		self.per_page
	}

	/// Total number of records across all pages.
	pub fn total_records(&self) -> usize {
		self.total_records
	}

	/// Query parameter carrying the page number.
	pub fn page_key(&self) -> &str {
		&self.page_key
	}

	/// Whether the current page is the first one.
	pub fn is_first_page(&self) -> bool {
		self.current == 1
	}

	/// Whether the current page is the last one.
	pub fn is_last_page(&self) -> bool {
		self.current == self.page_count
	}

	/// Whether `page` is the current page.
	pub fn is_current_page(&self, page: usize) -> bool {
		self.current == page
	}

	/// Zero-based index of the first record on the current page.
	pub fn offset(&self) -> usize {
		if self.is_first_page() {
			0
		} else {
			(self.current - 1) * self.per_page
		}
	}

	/// Maximum number of records on the current page.
	pub fn limit(&self) -> usize {
		self.per_page
	}

	/// Cut the current page's window out of the full record set.
	///
	/// The window is `offset()..offset() + limit()`, clamped to the slice
	/// bounds.
	///
	/// # Examples
	///
	/// ```
	/// use pagekit_core::{PageState, SimpleRequest};
	///
	/// let request = SimpleRequest::new("/news").query("page", "2");
	/// let records: Vec<i32> = (1..=25).collect();
	/// let state = PageState::new(&request, records.len());
	///
	/// assert_eq!(state.slice(&records), &(11..=20).collect::<Vec<_>>()[..]);
	/// ```
	pub fn slice<'a, T>(&self, records: &'a [T]) -> &'a [T] {
		let start = self.offset().min(records.len());
		let end = (start + self.per_page).min(records.len());
		&records[start..end]
	}

	/// URL for `page`, clamped the same way as the current page.
	///
	/// A clamped result of 1 yields [`first_page_url`](Self::first_page_url)
	/// (no page key at all). Otherwise the original query string is kept
	/// intact with the page key set to the clamped number: a key already on
	/// the request is replaced in place, an absent one is appended last.
	pub fn url_for(&self, page: i64) -> String {
		let page = clamp_page(page, self.page_count);
		if page == 1 {
			return self.first_page_url();
		}
		let pairs = query::with_key(&self.query_pairs, &self.page_key, &page.to_string());
		query::append_query(&self.base_url, &self.path, &query::encode_pairs(&pairs))
	}

	/// URL of the first page: the current URL with the page key removed.
	///
	/// When no other query parameters remain the bare URL is returned,
	/// without a `?`.
	pub fn first_page_url(&self) -> String {
		query::append_query(
			&self.base_url,
			&self.path,
			&query::encode_pairs(&self.base_query),
		)
	}

	/// URL of the last page.
	pub fn last_page_url(&self) -> String {
		if self.has_only_one_page() {
			return self.first_page_url();
		}
		self.url_for(self.page_count as i64)
	}

	/// URL of the previous page.
	pub fn previous_url(&self) -> String {
		if self.previous < 2 {
			return self.first_page_url();
		}
		self.url_for(self.previous as i64)
	}

	/// URL of the current page.
	pub fn current_url(&self) -> String {
		if self.has_only_one_page() || self.is_first_page() {
			return self.first_page_url();
		}
		self.url_for(self.current as i64)
	}

	/// URL of the next page.
	pub fn next_url(&self) -> String {
		if self.has_only_one_page() {
			return self.first_page_url();
		}
		self.url_for(self.next as i64)
	}

	/// All page numbers, first to last.
	pub fn range(&self) -> RangeInclusive<usize> {
		1..=self.page_count
	}

	/// Ordered map from page number to its URL across [`range`](Self::range).
	///
	/// # Examples
	///
	/// ```
	/// use pagekit_core::{PageState, SimpleRequest};
	///
	/// let state = PageState::new(&SimpleRequest::new("/news"), 57);
	/// let urls = state.url_list();
	///
	/// assert_eq!(urls.len(), 6);
	/// assert_eq!(urls[&1], "http://localhost/news");
	/// assert_eq!(urls[&6], "http://localhost/news?page=6");
	/// ```
	pub fn url_list(&self) -> BTreeMap<usize, String> {
		self.range()
			.map(|page| (page, self.url_for(page as i64)))
			.collect()
	}
}

/// Reusable pagination configuration applied per request.
///
/// Holds the page size and page key once; [`state`](Self::state) builds the
/// per-request [`PageState`].
///
/// # Examples
///
/// ```
/// use pagekit_core::{Pager, SimpleRequest};
///
/// let pager = Pager::new().per_page(25).page_key("p");
/// let request = SimpleRequest::new("/items").query("p", "2");
/// let state = pager.state(&request, 60)?;
///
/// assert_eq!(state.current(), 2);
/// assert_eq!(state.page_count(), 3);
/// # Ok::<(), pagekit_core::PageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pager {
	per_page: usize,
	page_key: String,
}

impl Pager {
	/// Create a configuration with the default page size and page key.
	pub fn new() -> Self {
		Self {
			per_page: DEFAULT_PER_PAGE,
			page_key: DEFAULT_PAGE_KEY.to_string(),
		}
	}

	/// Set the number of records per page.
	pub fn per_page(mut self, per_page: usize) -> Self {
		self.per_page = per_page;
		self
	}

	/// Set the query parameter carrying the page number.
	pub fn page_key(mut self, page_key: impl Into<String>) -> Self {
		self.page_key = page_key.into();
		self
	}

	/// Build the pagination state for one request.
	///
	/// # Errors
	///
	/// Propagates the precondition errors of [`PageState::with_config`].
	pub fn state(&self, request: &impl RequestContext, total_records: usize) -> Result<PageState> {
		PageState::with_config(request, total_records, self.per_page, self.page_key.clone())
	}
}

impl Default for Pager {
	fn default() -> Self {
		Self::new()
	}
}

fn clamp_page(page: i64, page_count: usize) -> usize {
	if page < 1 {
		1
	} else {
		(page as usize).min(page_count)
	}
}
