//! Request accessor interface and a plain built-in implementation.

use crate::query;

/// Read-only view of the request pagination state is built from.
///
/// Implement this for the host framework's request type; a [`PageState`]
/// snapshots the three required accessors at construction and never calls
/// back afterwards. The provided methods cover single-value lookup and
/// query-override URL building.
///
/// [`PageState`]: crate::PageState
pub trait RequestContext {
	/// Request path, `/` for the root.
	fn path(&self) -> &str;

	/// Absolute URL for the request, query string excluded.
	///
	/// The root path yields the bare authority with no trailing slash
	/// (`http://localhost`, not `http://localhost/`).
	fn absolute_url(&self) -> String;

	/// Decoded query parameters in request order.
	fn query_pairs(&self) -> &[(String, String)];

	/// First value for `key`, when present.
	fn query_value(&self, key: &str) -> Option<&str> {
		self.query_pairs()
			.iter()
			.find(|(k, _)| k.as_str() == key)
			.map(|(_, v)| v.as_str())
	}

	/// Absolute URL with `overrides` merged into the query string.
	///
	/// Each override replaces its key in place when already present and is
	/// appended otherwise; unrelated parameters keep their positions.
	///
	/// # Examples
	///
	/// ```
	/// use pagekit_core::{RequestContext, SimpleRequest};
	///
	/// let request = SimpleRequest::new("/news").query("page", "1").query("id", "3");
	/// assert_eq!(
	/// 	request.url_with_query(&[("page", "2")]),
	/// 	"http://localhost/news?page=2&id=3"
	/// );
	/// ```
	fn url_with_query(&self, overrides: &[(&str, &str)]) -> String {
		let mut pairs = self.query_pairs().to_vec();
		for &(key, value) in overrides {
			pairs = query::with_key(&pairs, key, value);
		}
		query::append_query(
			&self.absolute_url(),
			self.path(),
			&query::encode_pairs(&pairs),
		)
	}
}

/// Minimal [`RequestContext`] implementation.
///
/// Serves tests and hosts without a framework request type. Requests are
/// built for `http://localhost` and customized through the chained
/// setters.
///
/// # Examples
///
/// ```
/// use pagekit_core::{RequestContext, SimpleRequest};
///
/// let request = SimpleRequest::new("/news").query("id", "3");
/// assert_eq!(request.absolute_url(), "http://localhost/news");
/// assert_eq!(request.query_value("id"), Some("3"));
/// ```
#[derive(Debug, Clone)]
pub struct SimpleRequest {
	scheme: String,
	host: String,
	path: String,
	query: Vec<(String, String)>,
}

impl SimpleRequest {
	/// Create a request for `path` on `http://localhost`.
	pub fn new(path: impl Into<String>) -> Self {
		let path = path.into();
		let path = if path.starts_with('/') {
			path
		} else {
			format!("/{}", path)
		};
		Self {
			scheme: "http".to_string(),
			host: "localhost".to_string(),
			path,
			query: Vec::new(),
		}
	}

	/// Replace the host.
	pub fn host(mut self, host: impl Into<String>) -> Self {
		self.host = host.into();
		self
	}

	/// Replace the scheme.
	pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
		self.scheme = scheme.into();
		self
	}

	/// Append a query parameter.
	pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.push((key.into(), value.into()));
		self
	}
}

impl RequestContext for SimpleRequest {
	fn path(&self) -> &str {
		&self.path
	}

	fn absolute_url(&self) -> String {
		if self.path == "/" {
			format!("{}://{}", self.scheme, self.host)
		} else {
			format!("{}://{}{}", self.scheme, self.host, self.path)
		}
	}

	fn query_pairs(&self) -> &[(String, String)] {
		&self.query
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	fn root_url_has_no_trailing_slash() {
		assert_eq!(SimpleRequest::new("/").absolute_url(), "http://localhost");
	}

	#[rstest]
	fn path_gains_a_leading_slash() {
		let request = SimpleRequest::new("news");
		assert_eq!(request.path(), "/news");
		assert_eq!(request.absolute_url(), "http://localhost/news");
	}

	#[rstest]
	fn host_and_scheme_are_replaceable() {
		let request = SimpleRequest::new("/news")
			.scheme("https")
			.host("example.com");
		assert_eq!(request.absolute_url(), "https://example.com/news");
	}

	#[rstest]
	fn query_value_returns_the_first_match() {
		let request = SimpleRequest::new("/").query("id", "1").query("id", "2");
		assert_eq!(request.query_value("id"), Some("1"));
		assert_eq!(request.query_value("missing"), None);
	}

	#[rstest]
	fn url_with_query_appends_new_keys() {
		let request = SimpleRequest::new("/").query("id", "3");
		assert_eq!(
			request.url_with_query(&[("page", "2")]),
			"http://localhost/?id=3&page=2"
		);
	}
}
