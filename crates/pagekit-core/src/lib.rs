//! Pagination state and navigation URL derivation
//!
//! This crate computes pagination metadata from a record count and the
//! requested page carried on a request's query string, and derives the
//! navigation URLs for every page while preserving unrelated query
//! parameters in their original order.
//!
//! # Features
//!
//! - **State Computation**: page count, clamped current/previous/next page
//!   numbers, record offset and limit
//! - **Graceful Normalization**: missing, non-numeric or out-of-range page
//!   indicators collapse to the nearest valid page instead of failing
//! - **URL Derivation**: per-page URLs, first/last/previous/current/next
//!   URLs, and a full page-to-URL map
//! - **Request Adapters**: the [`RequestContext`] trait for host request
//!   types, with [`SimpleRequest`] as a plain built-in implementation
//! - **Reusable Configuration**: [`Pager`] holds the page size and page key
//!   once and builds per-request state
//!
//! # Example
//!
//! ```rust
//! use pagekit_core::{PageState, SimpleRequest};
//!
//! let request = SimpleRequest::new("/news").query("page", "2");
//! let records: Vec<i32> = (1..=57).collect();
//!
//! let state = PageState::new(&request, records.len());
//! assert_eq!(state.page_count(), 6);
//! assert_eq!(state.slice(&records).first(), Some(&11));
//! assert_eq!(state.next_url(), "http://localhost/news?page=3");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod error;
mod query;
pub mod request;
pub mod state;

// Re-exports for convenience
pub use error::{PageError, Result};
pub use request::{RequestContext, SimpleRequest};
pub use state::{DEFAULT_PAGE_KEY, DEFAULT_PER_PAGE, PageState, Pager};
