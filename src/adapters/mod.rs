//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `country` - Country directories (restcountries.com, mock)
//! - `storage` - Record stores (in-memory)

pub mod country;
pub mod storage;

pub use country::{MockCountryDirectory, RestCountriesConfig, RestCountriesDirectory};
pub use storage::InMemoryRecordStore;
