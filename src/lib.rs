//! # Pagekit
//!
//! Pagination metadata and navigation rendering for web applications.
//!
//! Pagekit computes page counts, offsets and adjacent-page numbers from a
//! record count and the page requested on a query string, derives
//! shareable navigation URLs that keep unrelated query parameters intact,
//! and renders ready-to-serve navigation markup.
//!
//! The crate is a facade over the workspace members:
//!
//! - `pagekit-core` — pagination state, URL derivation, request adapters
//! - `pagekit-render` — markup renderers (behind the `render` feature)
//!
//! ## Feature Flags
//!
//! - `render` (default) — the markup renderers
//!
//! ## Quick Example
//!
//! ```rust
//! use pagekit::{PageState, Paginator, SelectPaginator, SimpleRequest};
//!
//! let request = SimpleRequest::new("/news").query("page", "2");
//! let records: Vec<i32> = (1..=57).collect();
//!
//! let state = PageState::new(&request, records.len());
//! let page = state.slice(&records).to_vec();
//! assert_eq!(state.current(), 2);
//! assert_eq!(page.first(), Some(&11));
//!
//! let html = SelectPaginator::new(state, page).render();
//! assert!(html.contains("http://localhost/news?page=3"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub use pagekit_core::{
	DEFAULT_PAGE_KEY, DEFAULT_PER_PAGE, PageError, PageState, Pager, RequestContext, Result,
	SimpleRequest,
};

#[cfg(feature = "render")]
pub use pagekit_render::{ComponentPaginator, PageSummary, Paginator, SelectPaginator};
