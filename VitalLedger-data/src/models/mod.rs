// Storage models for the four VitalLedger collections

pub mod api_key;
pub mod blood_pressure;
pub mod expense;
pub mod weight;

// Re-export commonly used types
pub use api_key::ApiKeyRecord;
pub use blood_pressure::{BloodPressureReading, NewBloodPressureReading};
pub use expense::{Expense, NewExpense};
pub use weight::{NewWeightReading, WeightReading};
