//! RestCountries Directory - CountryDirectory backed by restcountries.com.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RestCountriesConfig::default()
//!     .with_timeout(Duration::from_secs(5));
//!
//! let directory = RestCountriesDirectory::new(config)?;
//! let entries = directory.fetch_countries().await?;
//! ```
//!
//! The service returns one object per country. Entries without a dial
//! root or without a suffix list are skipped; the dial code is the root
//! followed by the first suffix, if any.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::domain::country::{DialCodeEntry, WHITE_FLAG};
use crate::ports::{CountryDirectory, CountryLookupError};

/// Endpoint returning every country with only the fields we read.
pub const DEFAULT_API_URL: &str = "https://restcountries.com/v3.1/all?fields=name,cca2,flag,idd";

/// Configuration for the restcountries.com directory.
#[derive(Debug, Clone)]
pub struct RestCountriesConfig {
    /// Full URL of the country list endpoint.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl RestCountriesConfig {
    /// Sets the endpoint URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for RestCountriesConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Country directory that calls the restcountries.com API.
pub struct RestCountriesDirectory {
    config: RestCountriesConfig,
    client: Client,
}

impl RestCountriesDirectory {
    /// Creates a directory with its own HTTP client.
    pub fn new(config: RestCountriesConfig) -> Result<Self, CountryLookupError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CountryLookupError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl CountryDirectory for RestCountriesDirectory {
    async fn fetch_countries(&self) -> Result<Vec<DialCodeEntry>, CountryLookupError> {
        let response = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CountryLookupError::Transport(format!(
                        "Timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    CountryLookupError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CountryLookupError::Status(status.as_u16()));
        }

        let countries: Vec<RestCountry> = response
            .json()
            .await
            .map_err(|e| CountryLookupError::Malformed(e.to_string()))?;

        let total = countries.len();
        let entries: Vec<DialCodeEntry> =
            countries.into_iter().filter_map(RestCountry::into_entry).collect();

        debug!(
            total,
            usable = entries.len(),
            "Fetched countries from directory"
        );

        Ok(entries)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct RestCountry {
    cca2: Option<String>,
    name: RestCountryName,
    flag: Option<String>,
    idd: Option<RestIdd>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RestCountryName {
    Structured { common: String },
    Plain(String),
}

#[derive(Debug, Deserialize)]
struct RestIdd {
    root: Option<String>,
    suffixes: Option<Vec<String>>,
}

impl RestCountry {
    fn into_entry(self) -> Option<DialCodeEntry> {
        let idd = self.idd?;
        let root = idd.root.filter(|r| !r.is_empty())?;
        let suffixes = idd.suffixes?;
        let iso_code = self.cca2.filter(|c| !c.is_empty())?;

        let dial_code = format!("{}{}", root, suffixes.first().map(String::as_str).unwrap_or(""));
        let display_name = match self.name {
            RestCountryName::Structured { common } => common,
            RestCountryName::Plain(name) => name,
        };
        let flag = self
            .flag
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| WHITE_FLAG.to_string());

        Some(DialCodeEntry::new(iso_code, dial_code, display_name, flag))
    }
}
