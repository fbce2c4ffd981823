//! RecordStore port - persistence of the aggregate intake record.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::Timestamp;
use crate::domain::intake::UserRecord;

/// Errors from a record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordStoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Acknowledgement of a successful save.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveAck {
    pub saved_at: Timestamp,
    pub field_count: usize,
}

/// Stores the latest aggregate record of an intake.
///
/// Each save replaces the previous record; there is no history.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Replaces the stored record.
    async fn save(&self, record: &UserRecord) -> Result<SaveAck, RecordStoreError>;

    /// The most recently saved record, if any.
    async fn latest(&self) -> Result<Option<UserRecord>, RecordStoreError>;

    /// Forgets the stored record.
    async fn clear(&self) -> Result<(), RecordStoreError>;
}
