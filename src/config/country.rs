//! Country lookup configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::country::{RestCountriesConfig, DEFAULT_API_URL};
use crate::domain::country::{DEFAULT_DIAL_CODE, POPULAR_ISO_CODES};

/// Country lookup configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CountryConfig {
    /// Endpoint returning the country list
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Lookup timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// ISO codes listed first in the phone picker (comma-separated, in order)
    #[serde(default = "default_popular_codes")]
    pub popular_codes: String,

    /// Dial code preselected in the phone picker
    #[serde(default = "default_dial_code")]
    pub default_dial_code: String,
}

impl CountryConfig {
    /// Popular ISO codes as a vector, upper-cased
    pub fn popular_codes_list(&self) -> Vec<String> {
        self.popular_codes
            .split(',')
            .map(|s| s.trim().to_ascii_uppercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Lookup timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Settings for the restcountries.com adapter
    pub fn rest_countries(&self) -> RestCountriesConfig {
        RestCountriesConfig::default()
            .with_url(self.api_url.clone())
            .with_timeout(self.timeout())
    }

    /// Validate country configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ValidationError::InvalidCountryApiUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        for code in self.popular_codes_list() {
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ValidationError::InvalidPopularCode(code));
            }
        }
        let digits = self.default_dial_code.strip_prefix('+').unwrap_or("");
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidDialCode);
        }
        Ok(())
    }
}

impl Default for CountryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
            popular_codes: default_popular_codes(),
            default_dial_code: default_dial_code(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_popular_codes() -> String {
    POPULAR_ISO_CODES.join(",")
}

fn default_dial_code() -> String {
    DEFAULT_DIAL_CODE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_config_defaults() {
        let config = CountryConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.default_dial_code, "+57");
        assert_eq!(config.popular_codes_list().len(), 13);
        assert_eq!(config.popular_codes_list()[0], "CO");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_popular_codes_list_trims_and_uppercases() {
        let config = CountryConfig {
            popular_codes: " es, mx ,,US".to_string(),
            ..Default::default()
        };
        assert_eq!(config.popular_codes_list(), vec!["ES", "MX", "US"]);
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = CountryConfig {
            api_url: "ftp://countries.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCountryApiUrl));
    }

    #[test]
    fn test_rejects_timeout_out_of_range() {
        for timeout_secs in [0, 121] {
            let config = CountryConfig {
                timeout_secs,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
        }
    }

    #[test]
    fn test_rejects_bad_popular_code() {
        let config = CountryConfig {
            popular_codes: "CO,USA".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidPopularCode("USA".to_string()))
        );
    }

    #[test]
    fn test_rejects_dial_code_without_plus() {
        for dial in ["57", "+", "+5a"] {
            let config = CountryConfig {
                default_dial_code: dial.to_string(),
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidDialCode));
        }
    }

    #[test]
    fn test_rest_countries_settings_follow_config() {
        let config = CountryConfig {
            api_url: "http://localhost:9000/all".to_string(),
            timeout_secs: 3,
            ..Default::default()
        };
        let rest = config.rest_countries();
        assert_eq!(rest.url, "http://localhost:9000/all");
        assert_eq!(rest.timeout, Duration::from_secs(3));
    }
}
