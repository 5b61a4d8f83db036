//! Error types for pagination configuration.

use thiserror::Error;

/// Errors raised when a pagination configuration violates its preconditions.
///
/// Page indicators never produce errors — out-of-range, missing or
/// non-numeric values normalize to the nearest valid page. Only the
/// configuration the host controls can be rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
	/// A zero `per_page` cannot form pages.
	#[error("per_page must be greater than zero")]
	ZeroPerPage,

	/// The page query key must be a non-empty string.
	#[error("page key must not be empty")]
	EmptyPageKey,
}

/// Result alias for pagination construction.
pub type Result<T> = std::result::Result<T, PageError>;
