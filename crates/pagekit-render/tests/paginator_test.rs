use pagekit_core::{PageState, RequestContext, SimpleRequest};
use pagekit_render::{ComponentPaginator, PageSummary, Paginator, SelectPaginator};
use rstest::*;

fn get(path: &str) -> SimpleRequest {
	SimpleRequest::new(path)
}

fn records(count: usize) -> Vec<usize> {
	(1..=count).collect()
}

#[rstest]
fn returns_correct_records_collection() {
	let state = PageState::new(&get("/").query("page", "1"), 8);
	let paginator = SelectPaginator::new(state, Vec::<usize>::new());
	assert!(paginator.records().is_empty());

	let state = PageState::new(&get("/").query("page", "1"), 8);
	let paginator = SelectPaginator::new(state, records(8));
	assert_eq!(paginator.records(), &(1..=8).collect::<Vec<_>>()[..]);
}

#[rstest]
fn correctly_determines_whether_there_are_records_available() {
	let state = PageState::new(&get("/").query("page", "1"), 8);
	let paginator = SelectPaginator::new(state, Vec::<usize>::new());
	assert!(!paginator.has_records());

	let state = PageState::new(&get("/").query("page", "1"), 8);
	let paginator = SelectPaginator::new(state, records(8));
	assert!(paginator.has_records());
}

#[rstest]
fn returns_correct_total_number_of_records() {
	let state = PageState::new(&get("/").query("page", "1"), 187);
	let paginator = SelectPaginator::new(state, Vec::<usize>::new());
	assert_eq!(paginator.count(), 187);
}

#[rstest]
#[case(8)] // fewer records than one page holds
#[case(10)] // exactly one full page
fn renders_nothing_with_a_single_page(#[case] total: usize) {
	let state = PageState::new(&get("/").query("page", "1"), total);
	assert_eq!(SelectPaginator::new(state.clone(), records(total)).render(), "");
	assert_eq!(ComponentPaginator::new(state, records(total)).render(), "");
}

#[rstest]
fn renders_select_view_with_correct_links() {
	let request = get("/").query("page", "1");
	let state = PageState::new(&request, 31);
	let html = SelectPaginator::new(state, records(10)).render();

	assert!(html.contains(&request.absolute_url()));
	assert!(html.contains(&request.url_with_query(&[("page", "2")])));
	assert!(html.contains(&request.url_with_query(&[("page", "3")])));
	assert!(html.contains(&request.url_with_query(&[("page", "4")])));
	assert!(!html.contains(&request.url_with_query(&[("page", "5")])));
}

#[rstest]
fn marks_only_the_current_page_selected() {
	let state = PageState::new(&get("/news").query("page", "2"), 31);
	let html = SelectPaginator::new(state, records(10)).render();

	assert_eq!(html.matches(" selected").count(), 1);
	assert!(html.contains(r#"<option value="http://localhost/news?page=2" selected>2</option>"#));
}

#[rstest]
fn disables_previous_control_on_the_first_page() {
	let state = PageState::new(&get("/news"), 31);
	let html = SelectPaginator::new(state, records(10)).render();

	assert!(html.contains(r#"<span class="pager-button disabled">&lsaquo;</span>"#));
	assert!(html.contains(r#"<a href="http://localhost/news?page=2" class="pager-button">&rsaquo;</a>"#));
}

#[rstest]
fn disables_next_control_on_the_last_page() {
	let state = PageState::new(&get("/news").query("page", "4"), 31);
	let html = SelectPaginator::new(state, records(1)).render();

	assert!(html.contains(r#"<span class="pager-button disabled">&rsaquo;</span>"#));
	assert!(html.contains(r#"<a href="http://localhost/news?page=3" class="pager-button">&lsaquo;</a>"#));
}

#[rstest]
fn renders_custom_labels() {
	let state = PageState::new(&get("/news"), 31);
	let html = SelectPaginator::new(state, records(10))
		.prev_label("Prev")
		.next_label("Next")
		.render();

	assert!(html.contains(r#"<span class="pager-button disabled">Prev</span>"#));
	assert!(html.contains(">Next</a>"));
}

#[rstest]
fn renders_component_tag_with_navigation_attributes() {
	let state = PageState::new(&get("/news").query("page", "2"), 30);
	let tag = ComponentPaginator::new(state, records(10)).render();

	assert!(tag.starts_with("<pagekit-pager "));
	assert!(tag.ends_with("></pagekit-pager>"));
	assert!(tag.contains(r#"current="http://localhost/news?page=2""#));
	assert!(tag.contains(r#"previous="http://localhost/news""#));
	assert!(tag.contains(r#"next="http://localhost/news?page=3""#));
	assert!(tag.contains(r#"first="http://localhost/news""#));
	assert!(tag.contains(r#"last="http://localhost/news?page=3""#));
	assert!(tag.contains(r#":page-count="3""#));
}

#[rstest]
fn escapes_the_url_list_in_the_options_attribute() {
	let state = PageState::new(&get("/news"), 30);
	let tag = ComponentPaginator::new(state, records(10)).render();

	let expected = concat!(
		":options=\"{",
		"&quot;1&quot;:&quot;http://localhost/news&quot;,",
		"&quot;2&quot;:&quot;http://localhost/news?page=2&quot;,",
		"&quot;3&quot;:&quot;http://localhost/news?page=3&quot;",
		"}\""
	);
	assert!(tag.contains(expected), "tag: {}", tag);
}

#[rstest]
fn summarizes_the_pagination_state() {
	let state = PageState::new(&get("/news").query("page", "2"), 57);
	let paginator = SelectPaginator::new(state, records(10));

	let summary = paginator.summary();
	assert_eq!(
		summary,
		PageSummary {
			range: vec![1, 2, 3, 4, 5, 6],
			current: 2,
			previous: 1,
			next: 3,
			total_records: 57,
			page_count: 6,
			per_page: 10,
		}
	);

	let json = serde_json::to_value(&summary).expect("summary serializes");
	assert_eq!(json["current"], 2);
	assert_eq!(json["range"][5], 6);
}
