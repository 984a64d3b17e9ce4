//! Expense summary computation.

use serde::Serialize;

use vital_ledger_data::models::Expense;

/// Budget summary for one API key's expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseSummary {
    /// Sum of all recorded expense amounts
    pub total_expenses: f64,

    /// The key record's budget, or 0 when the record or field is absent
    pub budget: f64,

    /// `budget - total_expenses`, rounded to two decimal places
    pub remaining_budget: f64,
}

/// Total `expenses` against `budget`.
///
/// Only the remaining budget is rounded; the total is reported as summed.
pub fn summarize(expenses: &[Expense], budget: Option<f64>) -> ExpenseSummary {
    let total: f64 = expenses.iter().map(|expense| expense.amount).sum();
    let budget = budget.unwrap_or(0.0);

    ExpenseSummary {
        total_expenses: total,
        budget,
        remaining_budget: round_to_cents(budget - total),
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
