use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::models::{
    ApiKeyRecord, BloodPressureReading, Expense, NewBloodPressureReading, NewExpense,
    NewWeightReading, WeightReading,
};

use super::errors::RepositoryError;
use super::{ApiKeyRepository, BloodPressureRepository, ExpenseRepository, WeightRepository};

/// In-memory document store covering all four collections.
///
/// Collections live behind `Arc<Mutex<_>>` and are shared across clones, so a
/// cloned store observes the same documents. Vectors keep insertion order,
/// which is the only iteration-order contract list endpoints make.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    blood_pressure: Arc<Mutex<Vec<BloodPressureReading>>>,
    weight: Arc<Mutex<Vec<WeightReading>>>,
    expenses: Arc<Mutex<Vec<Expense>>>,
    api_keys: Arc<Mutex<Vec<ApiKeyRecord>>>,
}

impl InMemoryStore {
    /// Create a new store with empty collections
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an API key record. Keys are provisioned out-of-band; this is the
    /// hook tests and embedded deployments use instead of an HTTP endpoint.
    pub fn insert_api_key(&self, record: ApiKeyRecord) -> Result<(), RepositoryError> {
        let mut keys = self.api_keys.lock()?;
        keys.push(record);
        Ok(())
    }
}

#[async_trait]
impl BloodPressureRepository for InMemoryStore {
    async fn insert(
        &self,
        reading: NewBloodPressureReading,
    ) -> Result<BloodPressureReading, RepositoryError> {
        let document = reading.into_document();
        let mut readings = self.blood_pressure.lock()?;
        readings.push(document.clone());
        Ok(document)
    }

    async fn get_all(&self) -> Result<Vec<BloodPressureReading>, RepositoryError> {
        let readings = self.blood_pressure.lock()?;
        Ok(readings.clone())
    }
}

#[async_trait]
impl WeightRepository for InMemoryStore {
    async fn insert(&self, reading: NewWeightReading) -> Result<WeightReading, RepositoryError> {
        let document = reading.into_document();
        let mut readings = self.weight.lock()?;
        readings.push(document.clone());
        Ok(document)
    }

    async fn get_all(&self) -> Result<Vec<WeightReading>, RepositoryError> {
        let readings = self.weight.lock()?;
        Ok(readings.clone())
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryStore {
    async fn insert(&self, expense: NewExpense) -> Result<Expense, RepositoryError> {
        let document = expense.into_document();
        let mut expenses = self.expenses.lock()?;
        expenses.push(document.clone());
        Ok(document)
    }

    async fn find_by_user(&self, user: &str) -> Result<Vec<Expense>, RepositoryError> {
        let expenses = self.expenses.lock()?;
        Ok(expenses
            .iter()
            .filter(|expense| expense.user == user)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ApiKeyRepository for InMemoryStore {
    async fn find_key(&self, key: &str) -> Result<Option<ApiKeyRecord>, RepositoryError> {
        let keys = self.api_keys.lock()?;
        Ok(keys.iter().find(|record| record.key == key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[tokio::test]
    async fn readings_are_shared_across_clones() {
        let store = InMemoryStore::new();
        let clone = store.clone();

        BloodPressureRepository::insert(
            &store,
            NewBloodPressureReading {
                systolic: 120.0,
                diastolic: 80.0,
                heart_rate: 72.0,
            },
        )
        .await
        .unwrap();

        let readings = BloodPressureRepository::get_all(&clone).await.unwrap();
        assert_eq!(readings.len(), 1, "Cloned store should share storage");
        assert_eq!(readings[0].systolic, 120.0);
        assert_eq!(readings[0].diastolic, 80.0);
        assert_eq!(readings[0].heart_rate, 72.0);
    }

    #[tokio::test]
    async fn insert_assigns_server_timestamp() {
        let store = InMemoryStore::new();

        let before = Utc::now();
        let reading = WeightRepository::insert(&store, NewWeightReading { weight: 70.5 })
            .await
            .unwrap();
        let after = Utc::now();

        assert!(reading.timestamp >= before && reading.timestamp <= after);
        assert_eq!(reading.weight, 70.5);
    }

    #[tokio::test]
    async fn expenses_are_filtered_by_owner() {
        let store = InMemoryStore::new();

        for (user, amount) in [("alpha", 10.0), ("beta", 99.0), ("alpha", 20.0)] {
            ExpenseRepository::insert(
                &store,
                NewExpense {
                    user: user.to_string(),
                    description: "test".to_string(),
                    amount,
                },
            )
            .await
            .unwrap();
        }

        let alpha = store.find_by_user("alpha").await.unwrap();
        assert_eq!(alpha.len(), 2);
        assert!(alpha.iter().all(|expense| expense.user == "alpha"));

        let nobody = store.find_by_user("nobody").await.unwrap();
        assert!(nobody.is_empty());
    }

    #[tokio::test]
    async fn api_key_lookup_matches_exact_credential() {
        let store = InMemoryStore::new();
        store
            .insert_api_key(ApiKeyRecord {
                key: "secret".to_string(),
                budget: Some(50.0),
            })
            .unwrap();

        let found = store.find_key("secret").await.unwrap();
        assert_eq!(found.and_then(|record| record.budget), Some(50.0));

        assert!(store.find_key("SECRET").await.unwrap().is_none());
        assert!(store.find_key("other").await.unwrap().is_none());
    }
}
