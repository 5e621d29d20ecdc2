//! The page for editing or removing an expense.

use maud::{Markup, html};

use crate::{
    Error,
    endpoints::{self, format_endpoint},
    expense::{
        Expense, ExpenseData, ExpenseId, PartialExpense,
        form::{ExpenseForm, expense_form},
    },
    html::{BUTTON_DELETE_STYLE, FORM_CONTAINER_STYLE, PAGE_CONTAINER_STYLE, base, format_currency},
    navigation::History,
};

/// The page for editing or removing `expense`.
///
/// The page does not change anything itself: submitting the form calls
/// `edit_expense` and clicking the remove button calls `remove_expense`.
/// Either way the page then navigates back to the root page.
pub struct EditExpensePage<'a, E, R, H>
where
    H: ?Sized,
{
    /// The expense being edited.
    pub expense: &'a Expense,
    /// Called with the expense's ID and its new fields when the form is submitted.
    pub edit_expense: E,
    /// Called with the expense's ID when the remove button is clicked.
    pub remove_expense: R,
    /// Where to navigate once the expense has been edited or removed.
    pub history: &'a H,
}

impl<E, R, H> EditExpensePage<'_, E, R, H>
where
    E: Fn(ExpenseId, PartialExpense),
    R: Fn(ExpenseId),
    H: History + ?Sized,
{
    /// Handle the expense form being submitted with `expense`.
    pub fn on_submit(&self, expense: ExpenseData) {
        (self.edit_expense)(self.expense.id.clone(), expense.into());
        self.history.push(endpoints::ROOT);
    }

    /// Handle the remove button being clicked.
    pub fn on_remove(&self) {
        (self.remove_expense)(self.expense.id.clone());
        self.history.push(endpoints::ROOT);
    }

    /// Parse a submitted form body and handle it with [Self::on_submit].
    ///
    /// # Errors
    ///
    /// Returns an error if the form is invalid, see
    /// [ExpenseForm::into_expense_data]. Nothing is called in that case.
    pub fn handle_form_submission(&self, body: &str) -> Result<(), Error> {
        let expense = ExpenseForm::from_urlencoded(body)?.into_expense_data()?;
        self.on_submit(expense);

        Ok(())
    }

    /// Renders the page.
    pub fn render(&self) -> Markup {
        let expense = self.expense;
        let edit_endpoint = format_endpoint(endpoints::EDIT_EXPENSE_VIEW, expense.id.as_str());

        let content = html! {
            div class=(PAGE_CONTAINER_STYLE)
            {
                div class=(FORM_CONTAINER_STYLE)
                {
                    h1 class="text-xl font-bold leading-tight tracking-tight md:text-2xl"
                    {
                        "Edit Expense"
                    }

                    p class="mb-4 text-gray-500 dark:text-gray-400"
                    {
                        (expense.description) " · " (format_currency(expense.amount))
                    }

                    (expense_form(Some(expense), &edit_endpoint))

                    div class="mt-4"
                    {
                        button
                            id="remove-expense"
                            type="button"
                            class=(BUTTON_DELETE_STYLE)
                        {
                            "Remove Expense"
                        }
                    }
                }
            }
        };

        base("Edit Expense", &content)
    }
}
