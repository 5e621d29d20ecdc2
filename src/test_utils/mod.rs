//! Fixtures, test doubles and HTML assertions shared by the unit tests.

#![allow(missing_docs)]

pub(crate) mod fixtures;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod store;

pub(crate) use fixtures::fixture_expenses;
pub(crate) use form::{
    assert_form_input_with_value, assert_form_note_with_text, assert_form_submit_button_with_text,
    must_get_form,
};
pub(crate) use html::{assert_valid_html, must_get_text};
pub(crate) use store::{FailingRecordStore, MockDispatcher, seeded_record_store};
