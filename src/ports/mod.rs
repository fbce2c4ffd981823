//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CountryDirectory` - Remote list of countries and dial codes
//! - `RecordStore` - Persistence of the aggregate intake record

mod country_directory;
mod record_store;

pub use country_directory::{CountryDirectory, CountryLookupError};
pub use record_store::{RecordStore, RecordStoreError, SaveAck};
