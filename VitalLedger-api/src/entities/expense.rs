use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use vital_ledger_domain::error::ApiError;
use vital_ledger_domain::services::ExpenseSummary;

/// Raw body for `POST /expenses`, before validation
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RecordExpenseBody {
    /// Free-form description of the expense
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,

    /// Amount spent; must be a JSON number (string amounts are rejected)
    #[schema(value_type = Option<f64>)]
    pub amount: Option<Value>,
}

/// Validated payload for recording an expense
#[derive(Debug, Clone, PartialEq)]
pub struct RecordExpense {
    pub description: String,
    pub amount: f64,
}

impl RecordExpenseBody {
    pub fn validate(self) -> Result<RecordExpense, ApiError> {
        let description = self
            .description
            .ok_or_else(|| ApiError::Validation("Missing description field".to_string()))?;
        let description = description
            .as_str()
            .ok_or_else(|| ApiError::Validation("description must be a string".to_string()))?
            .to_string();

        let amount = self
            .amount
            .ok_or_else(|| ApiError::Validation("Missing amount field".to_string()))?;
        // Coerced to floating point; integers pass, strings do not.
        let amount = amount
            .as_f64()
            .ok_or_else(|| ApiError::Validation("Amount must be a number.".to_string()))?;

        Ok(RecordExpense {
            description,
            amount,
        })
    }
}

/// Budget summary returned by `GET /expenses/current-week`
#[derive(Debug, Serialize, ToSchema)]
pub struct ExpenseSummaryResponse {
    /// Sum of all recorded expense amounts for the key
    pub total_expenses: f64,

    /// The key record's budget (0 when absent)
    pub budget: f64,

    /// Remaining budget, rounded to two decimal places
    pub remaining_budget: f64,
}

impl From<ExpenseSummary> for ExpenseSummaryResponse {
    fn from(summary: ExpenseSummary) -> Self {
        Self {
            total_expenses: summary.total_expenses,
            budget: summary.budget,
            remaining_budget: summary.remaining_budget,
        }
    }
}
