pub mod blood_pressure;
pub mod expenses;
pub mod health;
pub mod weight;

// Re-export handlers for easier imports
pub use blood_pressure::{get_blood_pressure, record_blood_pressure};
pub use expenses::{get_expense_summary, record_expense};
pub use health::health_check;
pub use weight::{get_weight, record_weight};
