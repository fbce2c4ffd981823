//! SubmitStepHandler - Validates one step, saves the record, then advances.

use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::domain::foundation::DomainError;
use crate::domain::intake::{Field, FormSession, StepOutcome, UserRecord};
use crate::domain::validation::FieldValue;
use crate::ports::{RecordStore, SaveAck};

/// Command to submit the active step.
#[derive(Debug, Clone)]
pub struct SubmitStepCommand {
    pub step: u8,
    pub values: Vec<(Field, FieldValue)>,
}

/// What happened to the save that follows a step passing validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaveStatus {
    /// The step was rejected, so nothing was saved.
    NotAttempted,
    Saved(SaveAck),
    /// The store failed. The step stays active so the user can submit again.
    Failed { reason: String },
}

impl SaveStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, SaveStatus::Failed { .. })
    }
}

/// Result of a step submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitStepResult {
    pub outcome: StepOutcome,
    pub save: SaveStatus,
}

/// Handler for step submissions.
pub struct SubmitStepHandler {
    store: Arc<dyn RecordStore>,
}

impl SubmitStepHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        session: &mut FormSession,
        cmd: SubmitStepCommand,
    ) -> Result<SubmitStepResult, DomainError> {
        // 1. Validate without completing (caller errors propagate)
        let validated = session.validate_submission(cmd.step, cmd.values)?;
        let Some(record) = validated.record() else {
            return Ok(SubmitStepResult {
                outcome: validated,
                save: SaveStatus::NotAttempted,
            });
        };

        // 2. Save the record the step would produce
        let save = save_record(self.store.as_ref(), record).await;
        if save.is_failed() {
            return Ok(SubmitStepResult {
                outcome: validated,
                save,
            });
        }

        // 3. Complete and advance only once the save went through
        let outcome = session.commit_step(cmd.step)?;
        Ok(SubmitStepResult { outcome, save })
    }
}

/// Saves `record`, turning a store failure into a flag.
pub(crate) async fn save_record(store: &dyn RecordStore, record: &UserRecord) -> SaveStatus {
    match store.save(record).await {
        Ok(ack) => SaveStatus::Saved(ack),
        Err(e) => {
            warn!(error = %e, fields = record.len(), "Saving intake record failed");
            SaveStatus::Failed {
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRecordStore;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::intake::fixtures::personal;

    #[tokio::test]
    async fn advance_saves_record() {
        let store = InMemoryRecordStore::new();
        let handler = SubmitStepHandler::new(Arc::new(store.clone()));
        let mut session = FormSession::new();

        let result = handler
            .handle(
                &mut session,
                SubmitStepCommand {
                    step: 1,
                    values: personal(),
                },
            )
            .await
            .unwrap();

        assert!(result.outcome.is_advanced());
        assert!(matches!(result.save, SaveStatus::Saved(ref ack) if ack.field_count == 9));
        assert_eq!(store.latest().await.unwrap().unwrap().len(), 9);
    }

    #[tokio::test]
    async fn rejection_does_not_save() {
        let store = InMemoryRecordStore::new();
        let handler = SubmitStepHandler::new(Arc::new(store.clone()));
        let mut session = FormSession::new();

        let result = handler
            .handle(
                &mut session,
                SubmitStepCommand {
                    step: 1,
                    values: vec![],
                },
            )
            .await
            .unwrap();

        assert!(!result.outcome.is_advanced());
        assert_eq!(result.save, SaveStatus::NotAttempted);
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn save_failure_keeps_step_open_for_resubmit() {
        let store = InMemoryRecordStore::failing("disk full");
        let handler = SubmitStepHandler::new(Arc::new(store.clone()));
        let mut session = FormSession::new();
        let submit = || SubmitStepCommand {
            step: 1,
            values: personal(),
        };

        let result = handler.handle(&mut session, submit()).await.unwrap();
        assert!(result.save.is_failed());
        assert!(result.outcome.is_validated());
        assert_eq!(session.active_step(), Some(1));
        assert!(session.record().is_empty());

        store.set_failure(None).await;
        let retried = handler.handle(&mut session, submit()).await.unwrap();
        assert!(retried.outcome.is_advanced());
        assert!(matches!(retried.save, SaveStatus::Saved(ref ack) if ack.field_count == 9));
        assert_eq!(session.active_step(), Some(2));
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn locked_step_is_an_error() {
        let handler = SubmitStepHandler::new(Arc::new(InMemoryRecordStore::new()));
        let mut session = FormSession::new();

        let err = handler
            .handle(
                &mut session,
                SubmitStepCommand {
                    step: 2,
                    values: vec![],
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StepLocked);
    }

    #[test]
    fn save_status_serializes_with_status_tag() {
        let json = serde_json::to_value(SaveStatus::Failed {
            reason: "offline".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "offline");
    }
}
