//! Failing store used to exercise error paths in handler tests.

use async_trait::async_trait;

use crate::database::DatabaseError;
use crate::models::{
    ApiKeyRecord, BloodPressureReading, Expense, NewBloodPressureReading, NewExpense,
    NewWeightReading, WeightReading,
};

use super::errors::RepositoryError;
use super::{ApiKeyRepository, BloodPressureRepository, ExpenseRepository, WeightRepository};

/// Store whose every operation fails with a simulated driver error.
#[derive(Debug, Clone, Default)]
pub struct FailingStore;

impl FailingStore {
    /// Create a new failing store
    pub fn new() -> Self {
        Self
    }

    fn failure() -> RepositoryError {
        RepositoryError::Database(DatabaseError::Query("simulated store failure".to_string()))
    }
}

#[async_trait]
impl BloodPressureRepository for FailingStore {
    async fn insert(
        &self,
        _reading: NewBloodPressureReading,
    ) -> Result<BloodPressureReading, RepositoryError> {
        Err(Self::failure())
    }

    async fn get_all(&self) -> Result<Vec<BloodPressureReading>, RepositoryError> {
        Err(Self::failure())
    }
}

#[async_trait]
impl WeightRepository for FailingStore {
    async fn insert(&self, _reading: NewWeightReading) -> Result<WeightReading, RepositoryError> {
        Err(Self::failure())
    }

    async fn get_all(&self) -> Result<Vec<WeightReading>, RepositoryError> {
        Err(Self::failure())
    }
}

#[async_trait]
impl ExpenseRepository for FailingStore {
    async fn insert(&self, _expense: NewExpense) -> Result<Expense, RepositoryError> {
        Err(Self::failure())
    }

    async fn find_by_user(&self, _user: &str) -> Result<Vec<Expense>, RepositoryError> {
        Err(Self::failure())
    }
}

#[async_trait]
impl ApiKeyRepository for FailingStore {
    async fn find_key(&self, _key: &str) -> Result<Option<ApiKeyRecord>, RepositoryError> {
        Err(Self::failure())
    }
}
