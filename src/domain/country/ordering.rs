//! Ordering of dial code entries for the phone prefix picker.

use std::cmp::Ordering;

use super::DialCodeEntry;

/// Popular countries first (in preference order), then the rest by name.
///
/// Entries sharing a popular ISO code keep their relative input order.
pub fn order_for_phone<S: AsRef<str>>(
    entries: Vec<DialCodeEntry>,
    popular: &[S],
) -> Vec<DialCodeEntry> {
    let rank = |entry: &DialCodeEntry| {
        popular
            .iter()
            .position(|code| code.as_ref().eq_ignore_ascii_case(&entry.iso_code))
    };

    let (mut preferred, mut rest): (Vec<_>, Vec<_>) =
        entries.into_iter().partition(|e| rank(e).is_some());

    preferred.sort_by_key(|e| rank(e));
    rest.sort_by(|a, b| compare_names(&a.display_name, &b.display_name));

    preferred.extend(rest);
    preferred
}

/// Case- and accent-insensitive name comparison, falling back to the raw
/// strings so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    name.chars().flat_map(char::to_lowercase).map(fold_accent).collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
