//! Expenses: the data model, the actions that change the list of expenses,
//! the tasks that keep the record store in step with those actions, and the
//! page for editing an expense.

mod action;
mod core;
mod edit_page;
mod form;
mod reducer;
mod tasks;

pub use action::{ExpenseAction, add_expense, edit_expense, remove_expense, set_expenses};
pub use self::core::{Expense, ExpenseData, ExpenseId, PartialExpense};
pub use edit_page::EditExpensePage;
pub use form::ExpenseForm;
pub use reducer::expenses_reducer;
pub use tasks::{start_add_expense, start_edit_expense, start_remove_expense, start_set_expenses};

/// The record store path that holds every expense, keyed by ID.
pub const EXPENSES_PATH: &str = "expenses";
