//! CountryDirectory port - source of phone dial codes.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::country::DialCodeEntry;

/// Errors from a country directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountryLookupError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The body could not be read as a country list.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Fetches the full list of countries with their dial codes.
///
/// Implementations return the entries unordered and without fallback;
/// ordering and fallback are the application's job.
#[async_trait]
pub trait CountryDirectory: Send + Sync {
    async fn fetch_countries(&self) -> Result<Vec<DialCodeEntry>, CountryLookupError>;
}
