//! Defines the core data models for expenses.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// The identifier of an expense.
///
/// IDs are generated on the client when an expense is created and never
/// change afterwards. They double as the expense's key in the record store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Generate a fresh, unique ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExpenseId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ExpenseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ExpenseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fields of an expense as they are kept in the record store, i.e. an
/// [Expense] without its ID.
///
/// Missing fields are filled with empty strings and zeroes, both when
/// building from a [PartialExpense] and when reading a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpenseData {
    /// What the money was spent on.
    pub description: String,
    /// Any extra details about the expense.
    pub note: String,
    /// The amount spent in cents.
    pub amount: i64,
    /// When the expense happened, in milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// An amount of money that was spent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// What the money was spent on.
    pub description: String,
    /// Any extra details about the expense.
    pub note: String,
    /// The amount spent in cents.
    pub amount: i64,
    /// When the expense happened, in milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Expense {
    /// Attach `id` to the stored fields of an expense.
    pub fn new(id: ExpenseId, data: ExpenseData) -> Self {
        Self {
            id,
            description: data.description,
            note: data.note,
            amount: data.amount,
            created_at: data.created_at,
        }
    }

    /// The fields of the expense without its ID.
    pub fn data(&self) -> ExpenseData {
        ExpenseData {
            description: self.description.clone(),
            note: self.note.clone(),
            amount: self.amount,
            created_at: self.created_at,
        }
    }
}

/// An expense where any field may be left out.
///
/// Used for creating expenses, where missing fields get their default, and
/// for editing, where missing fields are left as they are.
///
/// # Examples
///
/// ```
/// use expensify_rs::PartialExpense;
///
/// let expense = PartialExpense::default()
///     .description("Coffee")
///     .amount(450)
///     .with_defaults();
///
/// assert_eq!(expense.description, "Coffee");
/// assert_eq!(expense.note, "");
/// assert_eq!(expense.created_at, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialExpense {
    /// What the money was spent on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Any extra details about the expense.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// The amount spent in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// When the expense happened, in milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl PartialExpense {
    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the amount in cents.
    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the creation time in milliseconds since the Unix epoch.
    pub fn created_at(mut self, created_at: i64) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Fill the missing fields with their defaults.
    pub fn with_defaults(self) -> ExpenseData {
        let defaults = ExpenseData::default();

        ExpenseData {
            description: self.description.unwrap_or(defaults.description),
            note: self.note.unwrap_or(defaults.note),
            amount: self.amount.unwrap_or(defaults.amount),
            created_at: self.created_at.unwrap_or(defaults.created_at),
        }
    }

    /// Overwrite the fields of `expense` that are set here.
    pub fn apply_to(&self, expense: &mut Expense) {
        if let Some(description) = &self.description {
            expense.description = description.clone();
        }
        if let Some(note) = &self.note {
            expense.note = note.clone();
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(created_at) = self.created_at {
            expense.created_at = created_at;
        }
    }

    /// The set fields as a record keyed by their stored names.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidRecord] if the fields could not be converted to JSON.
    pub fn to_record(&self) -> Result<Map<String, Value>, Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::InvalidRecord(format!(
                "expected an object, got {other}"
            ))),
        }
    }
}

impl From<ExpenseData> for PartialExpense {
    fn from(data: ExpenseData) -> Self {
        Self {
            description: Some(data.description),
            note: Some(data.note),
            amount: Some(data.amount),
            created_at: Some(data.created_at),
        }
    }
}
