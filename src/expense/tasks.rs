//! Asynchronous tasks that write to or read from the record store and then
//! dispatch the matching action.
//!
//! Each task makes exactly one store call. An action is only dispatched once
//! the store has confirmed the call, so a failed call changes nothing locally.

use crate::{
    Error,
    dispatch::Dispatch,
    expense::{
        EXPENSES_PATH, Expense, ExpenseData, ExpenseId, PartialExpense, add_expense,
        edit_expense, remove_expense, set_expenses,
    },
    record_store::{RecordPath, RecordStore},
};

/// Create an expense from `expense`, save it to `store` and dispatch
/// [add_expense] with it.
///
/// Missing fields are filled with their defaults and a fresh ID is
/// generated. Returns the created expense.
///
/// # Errors
///
/// Returns the store's error if the write failed, in which case nothing is
/// dispatched.
pub async fn start_add_expense<S, D>(
    store: &S,
    dispatch: &D,
    expense: PartialExpense,
) -> Result<Expense, Error>
where
    S: RecordStore,
    D: Dispatch + ?Sized,
{
    let data = expense.with_defaults();
    let id = ExpenseId::generate();

    store
        .set(&expense_path(&id)?, serde_json::to_value(&data)?)
        .await?;

    let expense = Expense::new(id, data);
    tracing::info!("Saved expense {}", expense.id);
    dispatch.dispatch(add_expense(expense.clone()));

    Ok(expense)
}

/// Read every expense from `store` and dispatch [set_expenses] with them.
///
/// The expenses are in the store's key order. An empty store gives an empty
/// list. Returns the list that was dispatched.
///
/// # Errors
///
/// Returns the store's error if the read failed, or [Error::InvalidRecord] if
/// a stored expense is not an object.
pub async fn start_set_expenses<S, D>(store: &S, dispatch: &D) -> Result<Vec<Expense>, Error>
where
    S: RecordStore,
    D: Dispatch + ?Sized,
{
    let snapshot = store.once(EXPENSES_PATH).await?;

    let expenses = snapshot
        .children()
        .into_iter()
        .map(|child| -> Result<Expense, Error> {
            let data: ExpenseData = child.deserialize()?;
            let id = ExpenseId::from(child.key().unwrap_or_default());
            Ok(Expense::new(id, data))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("Fetched {} expenses", expenses.len());
    dispatch.dispatch(set_expenses(expenses.clone()));

    Ok(expenses)
}

/// Save `updates` to the expense `id` in `store` and dispatch
/// [edit_expense].
///
/// Only the fields set in `updates` are written.
///
/// # Errors
///
/// Returns [Error::InvalidPath] if `id` is not a single path segment, or the
/// store's error if the write failed. Nothing is dispatched in either case.
pub async fn start_edit_expense<S, D>(
    store: &S,
    dispatch: &D,
    id: ExpenseId,
    updates: PartialExpense,
) -> Result<(), Error>
where
    S: RecordStore,
    D: Dispatch + ?Sized,
{
    let path = expense_path(&id)?;
    store.update(&path, updates.to_record()?).await?;

    tracing::info!("Updated expense {id}");
    dispatch.dispatch(edit_expense(id, updates));

    Ok(())
}

/// Delete the expense `id` from `store` and dispatch [remove_expense].
///
/// # Errors
///
/// Returns [Error::InvalidPath] if `id` is not a single path segment, or the
/// store's error if the delete failed. Nothing is dispatched in either case.
pub async fn start_remove_expense<S, D>(store: &S, dispatch: &D, id: ExpenseId) -> Result<(), Error>
where
    S: RecordStore,
    D: Dispatch + ?Sized,
{
    let path = expense_path(&id)?;
    store.remove(&path).await?;

    tracing::info!("Removed expense {id}");
    dispatch.dispatch(remove_expense(id));

    Ok(())
}

/// The store path of the expense `id`.
///
/// The ID must be exactly one segment below [EXPENSES_PATH]. An empty ID or
/// one with slashes is rejected with [Error::InvalidPath].
fn expense_path(id: &ExpenseId) -> Result<String, Error> {
    let path = RecordPath::parse(EXPENSES_PATH)?.child(id.as_str())?;

    if path.key() != Some(id.as_str()) {
        return Err(Error::InvalidPath(id.to_string()));
    }

    Ok(path.to_string())
}
