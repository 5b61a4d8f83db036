//! Compact link/selector pagination form.

use pagekit_core::PageState;

use crate::Paginator;
use crate::escape::html_escape;

const DEFAULT_PREV_LABEL: &str = "&lsaquo;";
const DEFAULT_NEXT_LABEL: &str = "&rsaquo;";

/// Compact pagination form: previous/next controls around a page
/// selector.
///
/// The previous and next controls render as anchors, or as disabled spans
/// on the first and last page respectively. The selector holds one option
/// per page with the page's URL as its value and the current page marked
/// `selected`.
///
/// # Examples
///
/// ```
/// use pagekit_core::{PageState, SimpleRequest};
/// use pagekit_render::{Paginator, SelectPaginator};
///
/// let request = SimpleRequest::new("/news").query("page", "2");
/// let state = PageState::new(&request, 31);
///
/// let html = SelectPaginator::new(state, vec!["record"; 10]).render();
/// assert!(html.starts_with(r#"<form class="pagekit-pager">"#));
/// assert!(html.contains("of 4"));
/// ```
#[derive(Debug, Clone)]
pub struct SelectPaginator<T> {
	state: PageState,
	records: Vec<T>,
	prev_label: String,
	next_label: String,
}

impl<T> SelectPaginator<T> {
	/// Create a paginator over `state` and the records sliced for the
	/// current page.
	pub fn new(state: PageState, records: Vec<T>) -> Self {
		Self {
			state,
			records,
			prev_label: DEFAULT_PREV_LABEL.to_string(),
			next_label: DEFAULT_NEXT_LABEL.to_string(),
		}
	}

	/// Replace the previous-control label.
	pub fn prev_label(mut self, label: impl Into<String>) -> Self {
		self.prev_label = label.into();
		self
	}

	/// Replace the next-control label.
	pub fn next_label(mut self, label: impl Into<String>) -> Self {
		self.next_label = label.into();
		self
	}

	fn previous_html(&self) -> String {
		if self.state.is_first_page() {
			return format!(
				r#"<span class="pager-button disabled">{}</span>"#,
				self.prev_label
			);
		}
		format!(
			r#"<a href="{}" class="pager-button">{}</a>"#,
			html_escape(&self.state.previous_url()),
			self.prev_label
		)
	}

	fn next_html(&self) -> String {
		if self.state.is_last_page() {
			return format!(
				r#"<span class="pager-button disabled">{}</span>"#,
				self.next_label
			);
		}
		format!(
			r#"<a href="{}" class="pager-button">{}</a>"#,
			html_escape(&self.state.next_url()),
			self.next_label
		)
	}

	fn select_html(&self) -> String {
		let mut html = String::from("<select>");
		for page in self.state.range() {
			html.push_str(&format!(
				r#"<option value="{}""#,
				html_escape(&self.state.url_for(page as i64))
			));
			if self.state.is_current_page(page) {
				html.push_str(" selected");
			}
			html.push('>');
			html.push_str(&page.to_string());
			html.push_str("</option>");
		}
		html.push_str("</select>");
		html
	}
}

impl<T> Paginator for SelectPaginator<T> {
	type Record = T;

	fn state(&self) -> &PageState {
		&self.state
	}

	fn records(&self) -> &[T] {
		&self.records
	}

	fn html(&self) -> String {
		let mut html = String::from(r#"<form class="pagekit-pager">"#);
		html.push_str(&self.previous_html());
		html.push_str(r#"<span class="pager-label">Page</span>"#);
		html.push_str(&self.select_html());
		html.push_str(&format!(
			r#"<span class="pager-label">of {}</span>"#,
			self.state.page_count()
		));
		html.push_str(&self.next_html());
		html.push_str("</form>");
		html
	}
}
