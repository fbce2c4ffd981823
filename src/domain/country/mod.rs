//! Country module - dial code entries, their ordering and the picker state.

mod dial_code;
mod ordering;
mod selection;

pub use dial_code::{
    fallback_dial_codes, DialCodeEntry, DEFAULT_DIAL_CODE, POPULAR_ISO_CODES, WHITE_FLAG,
};
pub use ordering::{compare_names, order_for_phone};
pub use selection::CountrySelection;
