//! Country directory adapters.

mod mock;
mod rest_countries;

pub use mock::MockCountryDirectory;
pub use rest_countries::{RestCountriesConfig, RestCountriesDirectory, DEFAULT_API_URL};
