//! Navigation markup rendering over Pagekit pagination state
//!
//! Renderers pair a [`PageState`](pagekit_core::PageState) with the records
//! already sliced for the current page and produce a markup string. When a
//! single page holds every record there is nothing to navigate, so every
//! renderer produces an empty string.
//!
//! Two variants are provided:
//!
//! - [`SelectPaginator`] — a compact form with previous/next controls
//!   around a page selector
//! - [`ComponentPaginator`] — a single custom-element tag carrying the URL
//!   map and navigation URLs as attributes, for a front-end component to
//!   hydrate
//!
//! # Example
//!
//! ```rust
//! use pagekit_core::{PageState, SimpleRequest};
//! use pagekit_render::{Paginator, SelectPaginator};
//!
//! let request = SimpleRequest::new("/news").query("page", "2");
//! let records: Vec<i32> = (1..=31).collect();
//!
//! let state = PageState::new(&request, records.len());
//! let page = state.slice(&records).to_vec();
//!
//! let html = SelectPaginator::new(state, page).render();
//! assert!(html.contains("of 4"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod component;
mod escape;
mod select;
mod summary;

pub use component::ComponentPaginator;
pub use select::SelectPaginator;
pub use summary::PageSummary;

use pagekit_core::PageState;

/// Shared rendering capability over pagination state and the current
/// page's records.
///
/// Variants implement [`html`](Self::html); everything else is provided.
/// [`render`](Self::render) is the entry point callers use — it gates on
/// the single-page case so templates can embed the result unconditionally.
pub trait Paginator {
	/// Record type carried for the current page.
	type Record;

	/// Pagination state the markup is derived from.
	fn state(&self) -> &PageState;

	/// Records sliced for the current page.
	fn records(&self) -> &[Self::Record];

	/// Variant-specific markup body.
	fn html(&self) -> String;

	/// Render the navigation markup.
	///
	/// Returns an empty string when a single page holds every record.
	///
	/// # Examples
	///
	/// ```
	/// use pagekit_core::{PageState, SimpleRequest};
	/// use pagekit_render::{Paginator, SelectPaginator};
	///
	/// let state = PageState::new(&SimpleRequest::new("/"), 8);
	/// let paginator = SelectPaginator::new(state, vec![0u8; 8]);
	/// assert!(paginator.render().is_empty());
	/// ```
	fn render(&self) -> String {
		if self.state().has_only_one_page() {
			return String::new();
		}
		self.html()
	}

	/// Whether the current page holds any records.
	fn has_records(&self) -> bool {
		!self.records().is_empty()
	}

	/// Total number of records across all pages.
	fn count(&self) -> usize {
		self.state().total_records()
	}

	/// Serializable snapshot of the pagination state.
	fn summary(&self) -> PageSummary {
		PageSummary::from_state(self.state())
	}
}
