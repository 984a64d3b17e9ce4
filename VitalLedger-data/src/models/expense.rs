use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage model for an expense entry. Immutable once inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-generated identifier, surfaced to clients as an opaque string
    pub id: Uuid,

    /// The API key that recorded this expense, stored verbatim as the owner
    /// reference. A weak back reference, not a validated foreign key.
    pub user: String,

    /// Free-form description of the expense
    pub description: String,

    /// Amount spent, coerced to floating point before storage
    pub amount: f64,

    /// Calendar date of the entry ("YYYY-MM-DD"), assigned from the current
    /// UTC date at insert time
    pub date: NaiveDate,
}

/// Input data for creating a new expense entry
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// The authenticated API key recording the expense
    pub user: String,

    /// Free-form description of the expense
    pub description: String,

    /// Amount spent
    pub amount: f64,
}

impl NewExpense {
    /// Materialize a stored document with a fresh id and the current UTC
    /// calendar date.
    pub fn into_document(self) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            user: self.user,
            description: self.description,
            amount: self.amount,
            date: Utc::now().date_naive(),
        }
    }
}
