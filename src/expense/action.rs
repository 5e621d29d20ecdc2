//! The actions that describe changes to the list of expenses.

use serde::{Deserialize, Serialize};

use crate::expense::{Expense, ExpenseId, PartialExpense};

/// A change to the list of expenses.
///
/// Serializes as an object tagged by `type`, e.g.
/// `{"type": "REMOVE_EXPENSE", "id": "123abc"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseAction {
    /// Add a new expense.
    AddExpense {
        /// The expense to add, including its generated ID.
        expense: Expense,
    },
    /// Change some of the fields of an existing expense.
    EditExpense {
        /// The ID of the expense to change.
        id: ExpenseId,
        /// The fields to change.
        updates: PartialExpense,
    },
    /// Remove an expense.
    RemoveExpense {
        /// The ID of the expense to remove.
        id: ExpenseId,
    },
    /// Replace the whole list of expenses.
    SetExpenses {
        /// The new list.
        expenses: Vec<Expense>,
    },
}

/// Create an action that adds `expense`.
pub fn add_expense(expense: Expense) -> ExpenseAction {
    ExpenseAction::AddExpense { expense }
}

/// Create an action that applies `updates` to the expense `id`.
pub fn edit_expense(id: ExpenseId, updates: PartialExpense) -> ExpenseAction {
    ExpenseAction::EditExpense { id, updates }
}

/// Create an action that removes the expense `id`.
pub fn remove_expense(id: ExpenseId) -> ExpenseAction {
    ExpenseAction::RemoveExpense { id }
}

/// Create an action that replaces the list of expenses with `expenses`.
pub fn set_expenses(expenses: Vec<Expense>) -> ExpenseAction {
    ExpenseAction::SetExpenses { expenses }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        expense::{ExpenseAction, ExpenseId, PartialExpense},
        test_utils::fixture_expenses,
    };

    use super::{add_expense, edit_expense, remove_expense, set_expenses};

    #[test]
    fn remove_expense_action_has_id() {
        let action = remove_expense(ExpenseId::from("123abc"));

        assert_eq!(
            action,
            ExpenseAction::RemoveExpense {
                id: ExpenseId::from("123abc")
            }
        );
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({ "type": "REMOVE_EXPENSE", "id": "123abc" })
        );
    }

    #[test]
    fn edit_expense_action_has_id_and_updates() {
        let updates = PartialExpense::default().note("New notes");

        let action = edit_expense(ExpenseId::from("123"), updates.clone());

        assert_eq!(
            action,
            ExpenseAction::EditExpense {
                id: ExpenseId::from("123"),
                updates,
            }
        );
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({ "type": "EDIT_EXPENSE", "id": "123", "updates": { "note": "New notes" } })
        );
    }

    #[test]
    fn add_expense_action_has_provided_values() {
        let expense = fixture_expenses()[2].clone();

        let action = add_expense(expense.clone());

        assert_eq!(action, ExpenseAction::AddExpense { expense });
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], "ADD_EXPENSE");
        assert!(value["expense"]["id"].is_string());
        assert_eq!(value["expense"]["description"], "Credit Card");
    }

    #[test]
    fn set_expenses_action_has_expenses() {
        let expenses = fixture_expenses();

        let action = set_expenses(expenses.clone());

        assert_eq!(action, ExpenseAction::SetExpenses { expenses });
        assert_eq!(
            serde_json::to_value(&action).unwrap()["type"],
            "SET_EXPENSES"
        );
    }

    #[test]
    fn same_input_gives_equal_actions() {
        let first = set_expenses(fixture_expenses());
        let second = set_expenses(fixture_expenses());

        assert_eq!(first, second);
    }

    #[test]
    fn actions_deserialize_from_tagged_objects() {
        let action: ExpenseAction =
            serde_json::from_value(json!({ "type": "REMOVE_EXPENSE", "id": "1" })).unwrap();

        assert_eq!(action, remove_expense(ExpenseId::from("1")));
    }
}
