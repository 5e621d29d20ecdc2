use crate::expense::{Expense, ExpenseData, ExpenseId};

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Three expenses with the IDs "1", "2" and "3", in ID order.
pub(crate) fn fixture_expenses() -> Vec<Expense> {
    vec![
        Expense::new(
            ExpenseId::from("1"),
            ExpenseData {
                description: "Gum".to_owned(),
                note: String::new(),
                amount: 195,
                created_at: 0,
            },
        ),
        Expense::new(
            ExpenseId::from("2"),
            ExpenseData {
                description: "Rent".to_owned(),
                note: String::new(),
                amount: 109500,
                created_at: -4 * DAY_MILLIS,
            },
        ),
        Expense::new(
            ExpenseId::from("3"),
            ExpenseData {
                description: "Credit Card".to_owned(),
                note: String::new(),
                amount: 4500,
                created_at: 4 * DAY_MILLIS,
            },
        ),
    ]
}
