use std::{cell::RefCell, error::Error, path::PathBuf, process::exit};

use clap::{Parser, Subcommand};
use rusqlite::Connection;
use tracing_subscriber::filter::LevelFilter;

use expensify_rs::{
    AppState, EditExpensePage, Expense, ExpenseId, MemoryHistory, PartialExpense,
    format_currency, setup_logging, start_add_expense, start_edit_expense, start_remove_expense,
    start_set_expenses,
};

/// A personal expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: PathBuf,

    /// The least severe level of log messages to print.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    /// File path to append debug logs to.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add an expense, leaving out fields fills them with blanks and zeroes.
    Add(ExpenseFields),
    /// List every expense.
    List,
    /// Change some fields of an expense.
    Edit {
        /// The ID of the expense.
        id: String,

        #[command(flatten)]
        fields: ExpenseFields,
    },
    /// Remove an expense.
    Remove {
        /// The ID of the expense.
        id: String,
    },
    /// Print the HTML page for editing an expense, or act on it.
    Page {
        /// The ID of the expense.
        id: String,

        /// Submit the page's form with this urlencoded body,
        /// e.g. "description=Rent&amount=1095.00&note=&created_at=2025-10-27".
        #[arg(long, conflicts_with = "remove")]
        submit: Option<String>,

        /// Click the page's remove button.
        #[arg(long)]
        remove: bool,
    },
}

#[derive(clap::Args, Debug)]
struct ExpenseFields {
    /// What the money was spent on.
    #[arg(long)]
    description: Option<String>,

    /// Any extra details about the expense.
    #[arg(long)]
    note: Option<String>,

    /// The amount spent in cents, must not be negative.
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    amount: Option<i64>,

    /// When the expense happened, in milliseconds since the Unix epoch.
    #[arg(long, allow_negative_numbers = true)]
    created_at: Option<i64>,
}

impl From<ExpenseFields> for PartialExpense {
    fn from(fields: ExpenseFields) -> Self {
        PartialExpense {
            description: fields.description,
            note: fields.note,
            amount: fields.amount,
            created_at: fields.created_at,
        }
    }
}

enum PageEvent {
    Edit(ExpenseId, PartialExpense),
    Remove(ExpenseId),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    setup_logging(args.log_level, args.log_file.as_deref())?;

    let connection = Connection::open(&args.db_path)?;
    let state = AppState::new(connection)?;
    let store = &state.record_store;
    let dispatch = state.expenses.as_ref();

    match args.command {
        Command::Add(fields) => {
            let expense = start_add_expense(store, dispatch, fields.into()).await?;
            print_expense(&expense);
        }
        Command::List => {
            for expense in start_set_expenses(store, dispatch).await? {
                print_expense(&expense);
            }
        }
        Command::Edit { id, fields } => {
            let updates = PartialExpense::from(fields);

            if updates.is_empty() {
                eprintln!("Nothing to change, pass at least one field to edit.");
                exit(1);
            }

            start_edit_expense(store, dispatch, ExpenseId::from(id), updates).await?;
        }
        Command::Remove { id } => {
            start_remove_expense(store, dispatch, ExpenseId::from(id)).await?;
        }
        Command::Page { id, submit, remove } => {
            start_set_expenses(store, dispatch).await?;

            let Some(expense) = state.expenses.get(&ExpenseId::from(id.as_str())) else {
                eprintln!("No expense with the ID {id:?}.");
                exit(1);
            };

            let event = RefCell::new(None);
            let history = MemoryHistory::new();
            let page = EditExpensePage {
                expense: &expense,
                edit_expense: |id, updates| {
                    event.replace(Some(PageEvent::Edit(id, updates)));
                },
                remove_expense: |id| {
                    event.replace(Some(PageEvent::Remove(id)));
                },
                history: &history,
            };

            match (submit, remove) {
                (Some(body), _) => page.handle_form_submission(&body)?,
                (None, true) => page.on_remove(),
                (None, false) => println!("{}", page.render().into_string()),
            }

            match event.into_inner() {
                Some(PageEvent::Edit(id, updates)) => {
                    start_edit_expense(store, dispatch, id, updates).await?
                }
                Some(PageEvent::Remove(id)) => start_remove_expense(store, dispatch, id).await?,
                None => {}
            }

            if let Some(location) = history.location() {
                tracing::info!("Page navigated to {location}");
            }
        }
    }

    Ok(())
}

fn print_expense(expense: &Expense) {
    println!(
        "{}\t{}\t{}\t{}\t{}",
        expense.id,
        expense.description,
        format_currency(expense.amount),
        expense.created_at,
        expense.note
    );
}

#[cfg(test)]
mod tests {
    use clap::{Parser, error::ErrorKind};

    use super::{Args, Command};

    #[test]
    fn add_accepts_amount_in_cents() {
        let args = Args::try_parse_from([
            "expensify",
            "--db-path",
            "test.db",
            "add",
            "--description",
            "Gum",
            "--amount",
            "195",
        ])
        .expect("Could not parse arguments");

        let Command::Add(fields) = args.command else {
            panic!("want add command, got {:?}", args.command);
        };
        assert_eq!(fields.amount, Some(195));
    }

    #[test]
    fn add_rejects_negative_amount() {
        let error = Args::try_parse_from([
            "expensify",
            "--db-path",
            "test.db",
            "add",
            "--amount=-100",
        ])
        .expect_err("want negative amount to be rejected");

        assert_eq!(error.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn edit_rejects_negative_amount() {
        let error = Args::try_parse_from([
            "expensify",
            "--db-path",
            "test.db",
            "edit",
            "1",
            "--amount=-1",
        ])
        .expect_err("want negative amount to be rejected");

        assert_eq!(error.kind(), ErrorKind::ValueValidation);
    }
}
