//! FinalSubmitHandler - Saves the finished record.

use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use super::submit_step::{save_record, SaveStatus};
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::intake::{FormSession, UserRecord};
use crate::ports::RecordStore;

/// Result of a final submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalSubmitResult {
    pub session_id: SessionId,
    pub record: UserRecord,
    pub save: SaveStatus,
}

/// Handler for the final submission of a completed intake.
pub struct FinalSubmitHandler {
    store: Arc<dyn RecordStore>,
}

impl FinalSubmitHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Fails with `IntakeIncomplete` unless every step is completed.
    pub async fn handle(&self, session: &FormSession) -> Result<FinalSubmitResult, DomainError> {
        let record = session.final_record()?;
        let save = save_record(self.store.as_ref(), &record).await;

        info!(
            session_id = %session.id(),
            fields = record.len(),
            saved = !save.is_failed(),
            "Intake submitted"
        );

        Ok(FinalSubmitResult {
            session_id: session.id(),
            record,
            save,
        })
    }
}
