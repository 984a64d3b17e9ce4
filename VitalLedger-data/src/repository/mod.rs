// Repository module structure
pub mod errors;
mod in_memory;
mod sqlite;

// Failing store for exercising error paths
#[cfg(any(test, feature = "mock"))]
pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{
    ApiKeyRecord, BloodPressureReading, Expense, NewBloodPressureReading, NewExpense,
    NewWeightReading, WeightReading,
};

// Re-export commonly used types
pub use errors::RepositoryError;
pub use in_memory::InMemoryStore;
pub use sqlite::SqliteStore;

#[cfg(any(test, feature = "mock"))]
pub use mock::FailingStore;

/// Repository trait for the `blood_pressure` collection
#[async_trait]
pub trait BloodPressureRepository: Send + Sync {
    /// Insert a new reading, assigning its id and timestamp server-side
    async fn insert(
        &self,
        reading: NewBloodPressureReading,
    ) -> Result<BloodPressureReading, RepositoryError>;

    /// Get every reading ever recorded, in store iteration order
    async fn get_all(&self) -> Result<Vec<BloodPressureReading>, RepositoryError>;
}

/// Repository trait for the `weight` collection
#[async_trait]
pub trait WeightRepository: Send + Sync {
    /// Insert a new reading, assigning its id and timestamp server-side
    async fn insert(&self, reading: NewWeightReading) -> Result<WeightReading, RepositoryError>;

    /// Get every reading ever recorded, in store iteration order
    async fn get_all(&self) -> Result<Vec<WeightReading>, RepositoryError>;
}

/// Repository trait for the `expenses` collection
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Insert a new expense, assigning its id and calendar date server-side
    async fn insert(&self, expense: NewExpense) -> Result<Expense, RepositoryError>;

    /// Get every expense whose owner reference equals `user`
    async fn find_by_user(&self, user: &str) -> Result<Vec<Expense>, RepositoryError>;
}

/// Repository trait for the `api_keys` collection
#[async_trait]
pub trait ApiKeyRepository: Send + Sync {
    /// Look up a key record by its credential. Read-only to the HTTP surface.
    async fn find_key(&self, key: &str) -> Result<Option<ApiKeyRecord>, RepositoryError>;
}

/// Shared handle to the `blood_pressure` collection
pub type BloodPressureCollection = Arc<dyn BloodPressureRepository>;

/// Shared handle to the `weight` collection
pub type WeightCollection = Arc<dyn WeightRepository>;

/// Shared handle to the `expenses` collection
pub type ExpenseCollection = Arc<dyn ExpenseRepository>;

/// Shared handle to the `api_keys` collection
pub type ApiKeyCollection = Arc<dyn ApiKeyRepository>;
