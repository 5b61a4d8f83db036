//! Custom-element pagination tag for component front ends.

use pagekit_core::PageState;

use crate::Paginator;
use crate::escape::html_escape;

/// Single custom-element tag carrying the full URL map and navigation
/// URLs as attributes.
///
/// The tag is inert on its own; a front-end component picks it up and
/// builds its own controls from the attributes. `:options` holds the
/// JSON-serialized page-to-URL map, HTML-entity escaped.
///
/// # Examples
///
/// ```
/// use pagekit_core::{PageState, SimpleRequest};
/// use pagekit_render::{ComponentPaginator, Paginator};
///
/// let state = PageState::new(&SimpleRequest::new("/news"), 30);
/// let tag = ComponentPaginator::new(state, vec![1, 2, 3]).render();
///
/// assert!(tag.starts_with("<pagekit-pager "));
/// assert!(tag.contains(r#":page-count="3""#));
/// ```
#[derive(Debug, Clone)]
pub struct ComponentPaginator<T> {
	state: PageState,
	records: Vec<T>,
}

impl<T> ComponentPaginator<T> {
	/// Create a paginator over `state` and the records sliced for the
	/// current page.
	pub fn new(state: PageState, records: Vec<T>) -> Self {
		Self { state, records }
	}

	fn attributes(&self) -> String {
		let options =
			serde_json::to_string(&self.state.url_list()).unwrap_or_else(|_| String::from("{}"));
		[
			(":options", html_escape(&options)),
			("current", html_escape(&self.state.current_url())),
			("previous", html_escape(&self.state.previous_url())),
			("next", html_escape(&self.state.next_url())),
			("first", html_escape(&self.state.first_page_url())),
			("last", html_escape(&self.state.last_page_url())),
			(":page-count", self.state.page_count().to_string()),
		]
		.iter()
		.map(|(key, value)| format!(r#"{}="{}""#, key, value))
		.collect::<Vec<_>>()
		.join(" ")
	}
}

impl<T> Paginator for ComponentPaginator<T> {
	type Record = T;

	fn state(&self) -> &PageState {
		&self.state
	}

	fn records(&self) -> &[T] {
		&self.records
	}

	fn html(&self) -> String {
		format!("<pagekit-pager {}></pagekit-pager>", self.attributes())
	}
}
