//! CountryLookup - dial codes for the phone picker, never failing.
//!
//! Fetches the country list from a [`CountryDirectory`], orders it with the
//! popular countries first, and falls back to the built-in list when the
//! directory fails or returns nothing.

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::country::{fallback_dial_codes, order_for_phone, DialCodeEntry};
use crate::ports::CountryDirectory;

/// Where a dial code list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialCodeSource {
    Directory,
    Fallback,
}

/// An ordered dial code list.
#[derive(Debug, Clone, PartialEq)]
pub struct DialCodeList {
    pub entries: Vec<DialCodeEntry>,
    pub source: DialCodeSource,
}

/// Resolves the dial code list for a new session.
#[derive(Clone)]
pub struct CountryLookup {
    directory: Arc<dyn CountryDirectory>,
    popular_codes: Vec<String>,
}

impl CountryLookup {
    pub fn new(directory: Arc<dyn CountryDirectory>, popular_codes: Vec<String>) -> Self {
        Self {
            directory,
            popular_codes,
        }
    }

    /// Fetches and orders the dial codes; on any failure returns the
    /// fallback list as-is.
    pub async fn fetch_dial_codes(&self) -> DialCodeList {
        match self.directory.fetch_countries().await {
            Ok(entries) if !entries.is_empty() => {
                info!(count = entries.len(), "Loaded dial codes from directory");
                DialCodeList {
                    entries: order_for_phone(entries, &self.popular_codes),
                    source: DialCodeSource::Directory,
                }
            }
            Ok(_) => {
                warn!("Country directory returned no usable entries, using fallback");
                Self::fallback()
            }
            Err(e) => {
                warn!(error = %e, "Error fetching countries from directory, using fallback");
                Self::fallback()
            }
        }
    }

    fn fallback() -> DialCodeList {
        DialCodeList {
            entries: fallback_dial_codes(),
            source: DialCodeSource::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockCountryDirectory;
    use crate::domain::country::POPULAR_ISO_CODES;
    use crate::ports::CountryLookupError;

    fn popular() -> Vec<String> {
        POPULAR_ISO_CODES.iter().map(|c| c.to_string()).collect()
    }

    #[tokio::test]
    async fn orders_directory_entries_popular_first() {
        let directory = MockCountryDirectory::with_entries(vec![
            DialCodeEntry::new("AF", "+93", "Afghanistan", "🇦🇫"),
            DialCodeEntry::new("US", "+1", "United States", "🇺🇸"),
            DialCodeEntry::new("CO", "+57", "Colombia", "🇨🇴"),
        ]);
        let lookup = CountryLookup::new(Arc::new(directory), popular());

        let list = lookup.fetch_dial_codes().await;
        assert_eq!(list.source, DialCodeSource::Directory);
        let isos: Vec<&str> = list.entries.iter().map(|e| e.iso_code.as_str()).collect();
        assert_eq!(isos, vec!["CO", "US", "AF"]);
    }

    #[tokio::test]
    async fn failure_yields_thirteen_entry_fallback() {
        let directory = MockCountryDirectory::failing(CountryLookupError::Status(500));
        let lookup = CountryLookup::new(Arc::new(directory), popular());

        let list = lookup.fetch_dial_codes().await;
        assert_eq!(list.source, DialCodeSource::Fallback);
        assert_eq!(list.entries.len(), 13);
        assert_eq!(list.entries[0].dial_code, "+57");
    }

    #[tokio::test]
    async fn empty_directory_yields_fallback() {
        let lookup = CountryLookup::new(
            Arc::new(MockCountryDirectory::with_entries(vec![])),
            popular(),
        );
        assert_eq!(
            lookup.fetch_dial_codes().await.source,
            DialCodeSource::Fallback
        );
    }
}
