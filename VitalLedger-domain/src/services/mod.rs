// Domain services
pub mod expenses;

pub use expenses::{summarize, ExpenseSummary};
