//! Folds expense actions into the list of expenses.

use crate::expense::{Expense, ExpenseAction};

/// Apply `action` to `state` and return the new list of expenses.
///
/// Editing or removing an ID that is not in the list leaves the list as is.
pub fn expenses_reducer(mut state: Vec<Expense>, action: ExpenseAction) -> Vec<Expense> {
    match action {
        ExpenseAction::AddExpense { expense } => {
            state.push(expense);
            state
        }
        ExpenseAction::EditExpense { id, updates } => {
            if let Some(expense) = state.iter_mut().find(|expense| expense.id == id) {
                updates.apply_to(expense);
            }
            state
        }
        ExpenseAction::RemoveExpense { id } => {
            state.retain(|expense| expense.id != id);
            state
        }
        ExpenseAction::SetExpenses { expenses } => expenses,
    }
}
