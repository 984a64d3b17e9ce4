use async_trait::async_trait;
use rusqlite::params;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::database::DatabasePool;
use crate::models::{
    ApiKeyRecord, BloodPressureReading, Expense, NewBloodPressureReading, NewExpense,
    NewWeightReading, WeightReading,
};

use super::errors::RepositoryError;
use super::{ApiKeyRepository, BloodPressureRepository, ExpenseRepository, WeightRepository};

const BLOOD_PRESSURE_TABLE: &str = "blood_pressure";
const WEIGHT_TABLE: &str = "weight";
const EXPENSES_TABLE: &str = "expenses";
const API_KEYS_TABLE: &str = "api_keys";

/// SQLite-backed document store.
///
/// Each collection is a `(id TEXT, doc TEXT)` table holding one serialized
/// JSON document per row; reads come back in `rowid` (insertion) order.
/// Field-equality queries parse documents and filter in Rust.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DatabasePool,
}

impl SqliteStore {
    /// Create a store over an already-connected pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Seed an API key record. Keys are provisioned out-of-band; this is the
    /// hook deployment scripts use instead of an HTTP endpoint.
    ///
    /// The api_keys table is keyed by the credential itself, not a generated
    /// id, so this does not go through [`Self::insert_doc`].
    pub fn insert_api_key(&self, record: &ApiKeyRecord) -> Result<(), RepositoryError> {
        debug!("Inserting document into {}: key={}", API_KEYS_TABLE, record.key);
        let conn = self.pool.get()?;
        let doc = serde_json::to_string(record)?;
        conn.execute(
            &format!("INSERT INTO {API_KEYS_TABLE} (key, doc) VALUES (?1, ?2)"),
            params![record.key, doc],
        )?;
        Ok(())
    }

    fn insert_doc<T: Serialize>(
        &self,
        table: &str,
        id: &str,
        doc: &T,
    ) -> Result<(), RepositoryError> {
        debug!("Inserting document into {}: id={}", table, id);
        let conn = self.pool.get()?;
        let doc = serde_json::to_string(doc)?;
        conn.execute(
            &format!("INSERT INTO {table} (id, doc) VALUES (?1, ?2)"),
            params![id, doc],
        )?;
        Ok(())
    }

    fn all_docs<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, RepositoryError> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("SELECT doc FROM {table} ORDER BY rowid"))?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut docs = Vec::new();
        for row in rows {
            docs.push(serde_json::from_str(&row?)?);
        }
        Ok(docs)
    }
}

#[async_trait]
impl BloodPressureRepository for SqliteStore {
    async fn insert(
        &self,
        reading: NewBloodPressureReading,
    ) -> Result<BloodPressureReading, RepositoryError> {
        let document = reading.into_document();
        self.insert_doc(BLOOD_PRESSURE_TABLE, &document.id.to_string(), &document)?;
        Ok(document)
    }

    async fn get_all(&self) -> Result<Vec<BloodPressureReading>, RepositoryError> {
        self.all_docs(BLOOD_PRESSURE_TABLE)
    }
}

#[async_trait]
impl WeightRepository for SqliteStore {
    async fn insert(&self, reading: NewWeightReading) -> Result<WeightReading, RepositoryError> {
        let document = reading.into_document();
        self.insert_doc(WEIGHT_TABLE, &document.id.to_string(), &document)?;
        Ok(document)
    }

    async fn get_all(&self) -> Result<Vec<WeightReading>, RepositoryError> {
        self.all_docs(WEIGHT_TABLE)
    }
}

#[async_trait]
impl ExpenseRepository for SqliteStore {
    async fn insert(&self, expense: NewExpense) -> Result<Expense, RepositoryError> {
        let document = expense.into_document();
        self.insert_doc(EXPENSES_TABLE, &document.id.to_string(), &document)?;
        Ok(document)
    }

    async fn find_by_user(&self, user: &str) -> Result<Vec<Expense>, RepositoryError> {
        let expenses: Vec<Expense> = self.all_docs(EXPENSES_TABLE)?;
        Ok(expenses
            .into_iter()
            .filter(|expense| expense.user == user)
            .collect())
    }
}

#[async_trait]
impl ApiKeyRepository for SqliteStore {
    async fn find_key(&self, key: &str) -> Result<Option<ApiKeyRecord>, RepositoryError> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("SELECT doc FROM {API_KEYS_TABLE} WHERE key = ?1"))?;

        match stmt.query_row(params![key], |row| row.get::<_, String>(0)) {
            Ok(doc) => Ok(Some(serde_json::from_str(&doc)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(RepositoryError::Sqlite(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::database::connect;

    use super::*;

    fn temp_store() -> SqliteStore {
        let path = std::env::temp_dir().join(format!("vital_ledger_test_{}.db", Uuid::new_v4()));
        let pool = connect(path.to_str().unwrap()).expect("Failed to open temporary store");
        SqliteStore::new(pool)
    }

    #[tokio::test]
    async fn documents_round_trip_in_insertion_order() {
        let store = temp_store();

        for weight in [70.5, 71.0, 69.8] {
            WeightRepository::insert(&store, NewWeightReading { weight })
                .await
                .unwrap();
        }

        let readings = WeightRepository::get_all(&store).await.unwrap();
        let weights: Vec<f64> = readings.iter().map(|reading| reading.weight).collect();
        assert_eq!(weights, vec![70.5, 71.0, 69.8]);
    }

    #[tokio::test]
    async fn seeded_api_key_round_trips_with_budget() {
        let store = temp_store();

        store
            .insert_api_key(&ApiKeyRecord {
                key: "budgeted".to_string(),
                budget: Some(50.0),
            })
            .unwrap();

        let record = store.find_key("budgeted").await.unwrap().unwrap();
        assert_eq!(record.key, "budgeted");
        assert_eq!(record.budget, Some(50.0));
    }

    #[tokio::test]
    async fn api_key_lookup_returns_none_for_unknown_key() {
        let store = temp_store();

        store
            .insert_api_key(&ApiKeyRecord {
                key: "secret".to_string(),
                budget: None,
            })
            .unwrap();

        let found = store.find_key("secret").await.unwrap();
        assert_eq!(found.map(|record| record.key), Some("secret".to_string()));
        assert!(store.find_key("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn expenses_are_filtered_by_owner() {
        let store = temp_store();

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
        let amounts: Vec<f64> = alpha.iter().map(|expense| expense.amount).collect();
        assert_eq!(amounts, vec![10.0, 20.0]);
    }
}
