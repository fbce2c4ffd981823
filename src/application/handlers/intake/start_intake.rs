//! StartIntakeHandler - Opens a new intake session.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::country_lookup::{CountryLookup, DialCodeSource};
use crate::domain::intake::FormSession;
use crate::ports::RecordStore;

/// Command to start an intake.
#[derive(Debug, Clone, Default)]
pub struct StartIntakeCommand {
    /// Prefill the form from the last saved record, if there is one.
    pub resume: bool,
}

/// A fresh session with its dial codes loaded.
#[derive(Debug, Clone)]
pub struct StartIntakeResult {
    pub session: FormSession,
    pub dial_codes: DialCodeSource,
    pub resumed: bool,
}

/// Handler for starting intakes.
pub struct StartIntakeHandler {
    lookup: CountryLookup,
    store: Arc<dyn RecordStore>,
    default_dial_code: String,
}

impl StartIntakeHandler {
    pub fn new(
        lookup: CountryLookup,
        store: Arc<dyn RecordStore>,
        default_dial_code: impl Into<String>,
    ) -> Self {
        Self {
            lookup,
            store,
            default_dial_code: default_dial_code.into(),
        }
    }

    pub async fn handle(&self, cmd: StartIntakeCommand) -> StartIntakeResult {
        let mut session = FormSession::new();

        // 1. Dial codes (never fails, falls back)
        let dial_codes = self.lookup.fetch_dial_codes().await;
        session.load_dial_codes(dial_codes.entries, &self.default_dial_code);

        // 2. Optionally restore the last saved record
        let mut resumed = false;
        if cmd.resume {
            match self.store.latest().await {
                Ok(Some(record)) => {
                    session.prefill(&record);
                    resumed = true;
                }
                Ok(None) => {}
                Err(e) => warn!(error = %e, "Could not load saved record, starting empty"),
            }
        }

        info!(
            session_id = %session.id(),
            dial_codes = ?dial_codes.source,
            resumed,
            "Intake started"
        );

        StartIntakeResult {
            session,
            dial_codes: dial_codes.source,
            resumed,
        }
    }
}
