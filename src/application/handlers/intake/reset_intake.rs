//! ResetIntakeHandler - Starts the form over.

use std::sync::Arc;
use tracing::warn;

use crate::domain::intake::FormSession;
use crate::ports::RecordStore;

/// Result of a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetIntakeResult {
    /// False if the store could not forget the saved record.
    pub store_cleared: bool,
}

/// Handler for resetting an intake.
pub struct ResetIntakeHandler {
    store: Arc<dyn RecordStore>,
}

impl ResetIntakeHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Resets the session, then clears the store. The session is reset
    /// even if clearing fails.
    pub async fn handle(&self, session: &mut FormSession) -> ResetIntakeResult {
        session.reset_all();

        let store_cleared = match self.store.clear().await {
            Ok(()) => true,
            Err(e) => {
                warn!(session_id = %session.id(), error = %e, "Clearing saved record failed");
                false
            }
        };

        ResetIntakeResult { store_cleared }
    }
}
