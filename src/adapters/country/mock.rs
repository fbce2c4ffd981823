//! Mock country directory for testing.
//!
//! Returns a fixed list or a fixed error, and counts how often it was asked.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::country::DialCodeEntry;
use crate::ports::{CountryDirectory, CountryLookupError};

/// Configurable in-process country directory.
#[derive(Debug, Clone)]
pub struct MockCountryDirectory {
    response: Result<Vec<DialCodeEntry>, CountryLookupError>,
    calls: Arc<AtomicUsize>,
}

impl MockCountryDirectory {
    /// A directory that always returns `entries`.
    pub fn with_entries(entries: Vec<DialCodeEntry>) -> Self {
        Self {
            response: Ok(entries),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A directory that always fails with `error`.
    pub fn failing(error: CountryLookupError) -> Self {
        Self {
            response: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of fetches so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryDirectory for MockCountryDirectory {
    async fn fetch_countries(&self) -> Result<Vec<DialCodeEntry>, CountryLookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
