//! Dial code entries and the built-in fallback list.

use serde::{Deserialize, Serialize};

/// Flag shown for countries the directory has no glyph for.
pub const WHITE_FLAG: &str = "🏳️";

/// ISO codes listed first in the phone prefix picker, in this order.
pub const POPULAR_ISO_CODES: [&str; 13] = [
    "CO", "US", "MX", "AR", "BR", "CL", "PE", "ES", "GB", "FR", "DE", "IT", "CA",
];

/// Dial code selected when nothing else was chosen.
pub const DEFAULT_DIAL_CODE: &str = "+57";

/// One entry of the phone prefix picker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialCodeEntry {
    /// ISO 3166-1 alpha-2 code, e.g. "CO".
    pub iso_code: String,
    /// International prefix including the plus sign, e.g. "+57".
    pub dial_code: String,
    pub display_name: String,
    pub flag: String,
}

impl DialCodeEntry {
    /// Creates an entry.
    pub fn new(
        iso_code: impl Into<String>,
        dial_code: impl Into<String>,
        display_name: impl Into<String>,
        flag: impl Into<String>,
    ) -> Self {
        Self {
            iso_code: iso_code.into(),
            dial_code: dial_code.into(),
            display_name: display_name.into(),
            flag: flag.into(),
        }
    }
}

/// The static list used whenever the country directory cannot be reached.
pub fn fallback_dial_codes() -> Vec<DialCodeEntry> {
    [
        ("CO", "+57", "Colombia", "🇨🇴"),
        ("US", "+1", "United States", "🇺🇸"),
        ("MX", "+52", "Mexico", "🇲🇽"),
        ("AR", "+54", "Argentina", "🇦🇷"),
        ("BR", "+55", "Brazil", "🇧🇷"),
        ("CL", "+56", "Chile", "🇨🇱"),
        ("PE", "+51", "Peru", "🇵🇪"),
        ("ES", "+34", "Spain", "🇪🇸"),
        ("GB", "+44", "United Kingdom", "🇬🇧"),
        ("FR", "+33", "France", "🇫🇷"),
        ("DE", "+49", "Germany", "🇩🇪"),
        ("IT", "+39", "Italy", "🇮🇹"),
        ("CA", "+1", "Canada", "🇨🇦"),
    ]
    .into_iter()
    .map(|(iso, dial, name, flag)| DialCodeEntry::new(iso, dial, name, flag))
    .collect()
}
