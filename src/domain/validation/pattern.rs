//! Precompiled pattern checks for free-text fields.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static FULL_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]{2,100}$").expect("valid full name regex"));

static IDENTITY_DOCUMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[A-Z0-9]{5,20}$").expect("valid identity document regex"));

// Up to three digit groups (1-4, 1-4, 1-9), each optionally parenthesized,
// separated by '-', whitespace or '.'.
static PHONE_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s.]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,9}$")
        .expect("valid phone number regex")
});

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid email regex")
});

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

/// The named text formats a field can be required to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Latin letters (with accented vowels and ñ) and spaces, 2 to 100 chars.
    FullName,
    /// Alphanumeric, case-insensitive, 5 to 20 chars.
    IdentityDocument,
    /// Optional `+`, grouped digits separated by `-`, space or `.`.
    PhoneNumber,
}

impl PatternKind {
    /// Returns true if `text` matches this pattern.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            PatternKind::FullName => FULL_NAME.is_match(text),
            PatternKind::IdentityDocument => IDENTITY_DOCUMENT.is_match(text),
            PatternKind::PhoneNumber => PHONE_NUMBER.is_match(text),
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PatternKind::FullName => "full name",
            PatternKind::IdentityDocument => "identity document",
            PatternKind::PhoneNumber => "phone number",
        };
        write!(f, "{}", s)
    }
}

/// Returns true if `text` looks like a deliverable `local@domain` address.
pub fn is_valid_email(text: &str) -> bool {
    if text.len() > EMAIL_MAX_LEN {
        return false;
    }
    match text.split_once('@') {
        Some((local, _)) if local.len() <= EMAIL_LOCAL_MAX_LEN => EMAIL.is_match(text),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_accepts_spanish_letters_and_spaces() {
        assert!(PatternKind::FullName.matches("María José Núñez"));
        assert!(PatternKind::FullName.matches("Al"));
    }

    #[test]
    fn full_name_rejects_digits_and_punctuation() {
        assert!(!PatternKind::FullName.matches("R2D2"));
        assert!(!PatternKind::FullName.matches("O'Brien"));
        assert!(!PatternKind::FullName.matches("A"));
    }

    #[test]
    fn full_name_caps_length_at_100() {
        assert!(PatternKind::FullName.matches(&"a".repeat(100)));
        assert!(!PatternKind::FullName.matches(&"a".repeat(101)));
    }

    #[test]
    fn identity_document_bounds_and_case() {
        assert!(PatternKind::IdentityDocument.matches("AB123"));
        assert!(PatternKind::IdentityDocument.matches("ab123"));
        assert!(!PatternKind::IdentityDocument.matches("AB12"));
        assert!(PatternKind::IdentityDocument.matches(&"9".repeat(20)));
        assert!(!PatternKind::IdentityDocument.matches(&"9".repeat(21)));
        assert!(!PatternKind::IdentityDocument.matches("AB-123"));
    }

    #[test]
    fn phone_number_accepts_common_groupings() {
        for phone in [
            "3001234567",
            "+57 300 1234567",
            "+1-555-1234",
            "300.123.4567",
            "(601) 1234567",
        ] {
            assert!(PatternKind::PhoneNumber.matches(phone), "{phone}");
        }
    }

    #[test]
    fn phone_number_rejects_letters_and_overlong_groups() {
        assert!(!PatternKind::PhoneNumber.matches("call me"));
        assert!(!PatternKind::PhoneNumber.matches("++57 300"));
        assert!(!PatternKind::PhoneNumber.matches("1234567890123456789"));
    }

    #[test]
    fn email_checks_shape() {
        assert!(is_valid_email("ana.perez@example.co"));
        assert!(is_valid_email("a+tag@mail.example.com"));
        assert!(!is_valid_email("ana.perez"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@@example.com"));
    }

    #[test]
    fn email_enforces_local_part_length() {
        let local = "a".repeat(65);
        assert!(!is_valid_email(&format!("{local}@example.com")));
    }
}
