//! Assertions on rendered pages.

use scraper::{Html, Selector};

/// Assert that `html` parsed without errors.
#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The trimmed text of the first element matching `selector`, panics if
/// nothing matches.
#[track_caller]
pub(crate) fn must_get_text(html: &Html, selector: &str) -> String {
    let element = html
        .select(&Selector::parse(selector).unwrap())
        .next()
        .unwrap_or_else(|| panic!("No element found for {selector:?}"));

    element.text().collect::<String>().trim().to_owned()
}
