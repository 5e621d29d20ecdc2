//! The form for entering the fields of an expense.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, macros::format_description};

use crate::{
    Error,
    expense::{Expense, ExpenseData},
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

const MISSING_FIELDS_MESSAGE: &str = "Please provide a description and amount.";

/// The raw fields of a submitted expense form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseForm {
    /// What the money was spent on.
    pub description: String,
    /// The amount in dollars, e.g. "12.34".
    pub amount: String,
    /// Any extra details, may be empty.
    #[serde(default)]
    pub note: String,
    /// The date of the expense as "YYYY-MM-DD".
    pub created_at: String,
}

impl ExpenseForm {
    /// Parse an `application/x-www-form-urlencoded` form body.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidForm] if a required field is missing.
    pub fn from_urlencoded(body: &str) -> Result<Self, Error> {
        serde_urlencoded::from_str(body).map_err(|error| Error::InvalidForm(error.to_string()))
    }

    /// Validate the fields and convert them to an expense.
    ///
    /// The amount is converted to cents and the date to milliseconds since the
    /// Unix epoch at midnight UTC.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidForm] if the description or amount is blank or
    /// the date is not a date, and [Error::InvalidAmount] if the amount is not
    /// a non-negative dollar amount with at most two decimal places.
    pub fn into_expense_data(self) -> Result<ExpenseData, Error> {
        let description = self.description.trim();

        if description.is_empty() || self.amount.trim().is_empty() {
            return Err(Error::InvalidForm(MISSING_FIELDS_MESSAGE.to_owned()));
        }

        Ok(ExpenseData {
            description: description.to_owned(),
            note: self.note,
            amount: parse_amount(&self.amount)?,
            created_at: parse_created_at(&self.created_at)?,
        })
    }
}

/// Renders the expense form, pre-filled with `expense` if given.
///
/// The form posts to `action`.
pub fn expense_form(expense: Option<&Expense>, action: &str) -> Markup {
    let description = expense.map(|expense| expense.description.as_str());
    let amount = expense.map(|expense| format_amount(expense.amount));
    let created_at = expense.and_then(|expense| format_created_at(expense.created_at));

    html! {
        form method="post" action=(action) class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="Description"
                    value=[description]
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="text"
                        inputmode="decimal"
                        pattern="[0-9]+(\\.[0-9]{0,2})?"
                        placeholder="0.00"
                        value=[amount]
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="created_at" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    name="created_at"
                    id="created_at"
                    type="date"
                    value=[created_at]
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="note" class=(FORM_LABEL_STYLE) { "Note" }

                textarea
                    name="note"
                    id="note"
                    placeholder="Add a note for your expense (optional)"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @if let Some(expense) = expense {
                        (expense.note)
                    }
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Expense" }
        }
    }
}

/// Parse a dollar amount such as "12", "12." or "12.3" into cents.
fn parse_amount(text: &str) -> Result<i64, Error> {
    let trimmed = text.trim();
    let invalid = || Error::InvalidAmount(text.to_owned());

    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

    if whole.is_empty()
        || fraction.len() > 2
        || !whole.bytes().all(|byte| byte.is_ascii_digit())
        || !fraction.bytes().all(|byte| byte.is_ascii_digit())
    {
        return Err(invalid());
    }

    let dollars: i64 = whole.parse().map_err(|_| invalid())?;
    let cents: i64 = format!("{fraction:0<2}").parse().map_err(|_| invalid())?;

    dollars
        .checked_mul(100)
        .and_then(|amount| amount.checked_add(cents))
        .ok_or_else(invalid)
}

fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

fn parse_created_at(text: &str) -> Result<i64, Error> {
    let date = Date::parse(text.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::InvalidForm(format!("\"{text}\" is not a valid date")))?;

    Ok(date.midnight().assume_utc().unix_timestamp() * 1000)
}

fn format_created_at(millis: i64) -> Option<String> {
    let date_time =
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()?;

    date_time
        .date()
        .format(format_description!("[year]-[month]-[day]"))
        .ok()
}
