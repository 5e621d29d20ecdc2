//! Assertions on the rendered expense form.

use scraper::{ElementRef, Html, Selector};

/// The first form in `html`, panics if there is none.
#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

/// Assert that `form` has a required input `name` of type `type_` that is
/// pre-filled with `value`.
#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    let selector = Selector::parse(&format!("input[name=\"{name}\"]")).unwrap();
    let input = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""));
    let input = input.value();

    assert_eq!(
        input.attr("type").unwrap_or_default(),
        type_,
        "want input {name} with type \"{type_}\""
    );
    assert_eq!(
        input.attr("value").unwrap_or_default(),
        value,
        "want input {name} pre-filled with \"{value}\""
    );
    assert!(
        input.attr("required").is_some(),
        "want input {name} to be required"
    );
}

/// Assert that the note field of `form` holds `text`.
#[track_caller]
pub(crate) fn assert_form_note_with_text(form: &ElementRef<'_>, text: &str) {
    let note = form
        .select(&Selector::parse("textarea[name=\"note\"]").unwrap())
        .next()
        .expect("No note field found");

    assert_eq!(note.text().collect::<String>(), text);
}

/// Assert that the button of `form` submits it and reads `text`.
#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button[type=\"submit\"]").unwrap())
        .next()
        .expect("No submit button found");

    assert_eq!(submit_button.text().collect::<String>().trim(), text);
}
