//! The capability to dispatch expense actions, and the in-process list of
//! expenses that the actions are applied to.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::expense::{Expense, ExpenseAction, ExpenseId, expenses_reducer};

/// Something that accepts expense actions.
///
/// The tasks in [crate::expense] take a `Dispatch` and hand it the action
/// for a store write or read once the store has confirmed it.
pub trait Dispatch {
    /// Handle `action`.
    fn dispatch(&self, action: ExpenseAction);
}

impl<F> Dispatch for F
where
    F: Fn(ExpenseAction),
{
    fn dispatch(&self, action: ExpenseAction) {
        self(action)
    }
}

/// The in-process list of expenses, kept up to date by applying each
/// dispatched action with [expenses_reducer].
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: Mutex<Vec<Expense>>,
}

impl ExpenseStore {
    /// Create a store with no expenses.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the current list of expenses.
    pub fn expenses(&self) -> Vec<Expense> {
        self.lock().clone()
    }

    /// A copy of the expense with `id`, if it is in the list.
    pub fn get(&self, id: &ExpenseId) -> Option<Expense> {
        self.lock().iter().find(|expense| &expense.id == id).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Expense>> {
        self.expenses.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Dispatch for ExpenseStore {
    fn dispatch(&self, action: ExpenseAction) {
        tracing::debug!("Dispatching {action:?}");

        let mut expenses = self.lock();
        let state = std::mem::take(&mut *expenses);
        *expenses = expenses_reducer(state, action);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::{
        expense::{ExpenseAction, ExpenseId, remove_expense, set_expenses},
        test_utils::fixture_expenses,
    };

    use super::{Dispatch, ExpenseStore};

    #[test]
    fn dispatch_applies_reducer() {
        let store = ExpenseStore::new();

        store.dispatch(set_expenses(fixture_expenses()));
        store.dispatch(remove_expense(ExpenseId::from("1")));

        let want = fixture_expenses();
        assert_eq!(store.expenses(), vec![want[1].clone(), want[2].clone()]);
    }

    #[test]
    fn get_finds_expense_by_id() {
        let store = ExpenseStore::new();
        store.dispatch(set_expenses(fixture_expenses()));

        assert_eq!(
            store.get(&ExpenseId::from("3")),
            Some(fixture_expenses()[2].clone())
        );
        assert_eq!(store.get(&ExpenseId::from("-1")), None);
    }

    #[test]
    fn closures_can_dispatch() {
        let received = Mutex::new(Vec::new());
        let dispatch = |action: ExpenseAction| received.lock().unwrap().push(action);

        dispatch.dispatch(remove_expense(ExpenseId::from("1")));

        assert_eq!(
            received.into_inner().unwrap(),
            vec![remove_expense(ExpenseId::from("1"))]
        );
    }
}
