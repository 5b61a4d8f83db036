//! Query-string reconstruction helpers.
//!
//! Derived URLs must keep every unrelated parameter in its original
//! position, so these helpers operate on ordered `(key, value)` pairs
//! rather than maps.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in query keys and values. Everything outside the
/// RFC 3986 unreserved set is percent-encoded.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'.')
	.remove(b'_')
	.remove(b'~');

/// Encode ordered pairs into a query string, `key=value` joined with `&`.
pub(crate) fn encode_pairs(pairs: &[(String, String)]) -> String {
	pairs
		.iter()
		.map(|(key, value)| {
			format!(
				"{}={}",
				utf8_percent_encode(key, QUERY_SET),
				utf8_percent_encode(value, QUERY_SET)
			)
		})
		.collect::<Vec<_>>()
		.join("&")
}

/// Remove every occurrence of `key`, keeping the remaining pairs in order.
pub(crate) fn without_key(pairs: &[(String, String)], key: &str) -> Vec<(String, String)> {
	pairs
		.iter()
		.filter(|(k, _)| k.as_str() != key)
		.cloned()
		.collect()
}

/// Set `key` to `value` in an ordered pair list.
///
/// A key already present is replaced in place, with any later duplicates
/// dropped; an absent key is appended at the end. Existing links depend on
/// this placement, so it must not change.
pub(crate) fn with_key(pairs: &[(String, String)], key: &str, value: &str) -> Vec<(String, String)> {
	let mut out = Vec::with_capacity(pairs.len() + 1);
	let mut replaced = false;
	for (k, v) in pairs {
		if k.as_str() == key {
			if !replaced {
				out.push((k.clone(), value.to_string()));
				replaced = true;
			}
		} else {
			out.push((k.clone(), v.clone()));
		}
	}
	if !replaced {
		out.push((key.to_string(), value.to_string()));
	}
	out
}

/// Join an absolute URL and an encoded query string.
///
/// An empty query yields the URL untouched. The root path attaches the
/// query as `/?...` because the bare URL carries no trailing slash.
pub(crate) fn append_query(url: &str, path: &str, query: &str) -> String {
	if query.is_empty() {
		url.to_string()
	} else if path == "/" {
		format!("{}/?{}", url, query)
	} else {
		format!("{}?{}", url, query)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
		raw.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[rstest]
	#[case(&[("id", "3")], "id=3")]
	#[case(&[("id", "3"), ("page", "2")], "id=3&page=2")]
	#[case(&[("q", "Some query")], "q=Some%20query")]
	#[case(&[("tag", "a+b&c")], "tag=a%2Bb%26c")]
	#[case(&[], "")]
	fn encodes_pairs_in_order(#[case] input: &[(&str, &str)], #[case] expected: &str) {
		assert_eq!(encode_pairs(&pairs(input)), expected);
	}

	#[rstest]
	fn removes_only_the_named_key() {
		let out = without_key(&pairs(&[("page", "2"), ("id", "3"), ("page", "9")]), "page");
		assert_eq!(out, pairs(&[("id", "3")]));
	}

	#[rstest]
	fn replaces_present_key_in_place() {
		let out = with_key(&pairs(&[("page", "1"), ("id", "223")]), "page", "2");
		assert_eq!(out, pairs(&[("page", "2"), ("id", "223")]));
	}

	#[rstest]
	fn appends_missing_key_at_the_end() {
		let out = with_key(&pairs(&[("id", "3")]), "page", "3");
		assert_eq!(out, pairs(&[("id", "3"), ("page", "3")]));
	}

	#[rstest]
	#[case("/", "http://localhost", "id=3", "http://localhost/?id=3")]
	#[case("/news", "http://localhost/news", "id=3", "http://localhost/news?id=3")]
	#[case("/news", "http://localhost/news", "", "http://localhost/news")]
	fn joins_url_and_query(
		#[case] path: &str,
		#[case] url: &str,
		#[case] query: &str,
		#[case] expected: &str,
	) {
		assert_eq!(append_query(url, path, query), expected);
	}
}
