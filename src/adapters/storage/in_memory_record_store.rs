//! In-Memory Record Store Adapter
//!
//! Keeps the latest intake record in memory.
//! Useful for testing and for the command-line runner.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::domain::intake::UserRecord;
use crate::ports::{RecordStore, RecordStoreError, SaveAck};

/// In-memory storage for the aggregate record
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    record: Arc<RwLock<Option<UserRecord>>>,
    saves: Arc<AtomicUsize>,
    failure: Arc<RwLock<Option<String>>>,
}

impl InMemoryRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose every operation fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Arc::new(RwLock::new(Some(reason.into()))),
            ..Self::default()
        }
    }

    /// Makes every later operation fail with `reason`, or recover on `None`.
    /// Clones share the setting.
    pub async fn set_failure(&self, reason: Option<String>) {
        *self.failure.write().await = reason;
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    async fn check_available(&self) -> Result<(), RecordStoreError> {
        match self.failure.read().await.as_ref() {
            Some(reason) => Err(RecordStoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn save(&self, record: &UserRecord) -> Result<SaveAck, RecordStoreError> {
        self.check_available().await?;
        *self.record.write().await = Some(record.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(SaveAck {
            saved_at: Timestamp::now(),
            field_count: record.len(),
        })
    }

    async fn latest(&self) -> Result<Option<UserRecord>, RecordStoreError> {
        self.check_available().await?;
        Ok(self.record.read().await.clone())
    }

    async fn clear(&self) -> Result<(), RecordStoreError> {
        self.check_available().await?;
        *self.record.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::Field;
    use crate::domain::validation::FieldValue;

    fn record() -> UserRecord {
        let mut record = UserRecord::new();
        let values = [
            (Field::FullName, FieldValue::from("Ana Pérez")),
            (Field::City, FieldValue::from("Bogotá")),
        ];
        record.merge(values.iter().map(|(f, v)| (f, v)));
        record
    }

    #[tokio::test]
    async fn save_then_latest_returns_record() {
        let store = InMemoryRecordStore::new();
        let ack = store.save(&record()).await.unwrap();

        assert_eq!(ack.field_count, 2);
        assert_eq!(store.latest().await.unwrap(), Some(record()));
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn clear_forgets_record() {
        let store = InMemoryRecordStore::new();
        store.save(&record()).await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.latest().await.unwrap(), None);
    }

    #[tokio::test]
    async fn failing_store_rejects_everything() {
        let store = InMemoryRecordStore::failing("offline");
        assert_eq!(
            store.save(&record()).await,
            Err(RecordStoreError::Unavailable("offline".to_string()))
        );
        assert!(store.latest().await.is_err());
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn recovered_store_accepts_saves_through_clones() {
        let store = InMemoryRecordStore::failing("offline");
        let shared = store.clone();
        shared.set_failure(None).await;

        store.save(&record()).await.unwrap();
        assert_eq!(shared.save_count(), 1);
    }
}
