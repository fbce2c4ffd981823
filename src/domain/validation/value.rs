//! FieldValue - the raw scalar a presentation layer hands to the model.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A single form input: text, a number, or nothing at all.
///
/// Deserializes untagged, so `null` → `Empty`, `42` → `Number`, `"42"` → `Text`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Returns true for unset values and the empty string.
    ///
    /// Whitespace is *not* empty; length rules deal with it.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Number(_) => false,
        }
    }

    /// Returns the value rendered as text. `Empty` renders as "".
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Empty => Cow::Borrowed(""),
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Parses the value as a finite number.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            FieldValue::Empty => return None,
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        n.is_finite().then_some(n)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_string_are_empty() {
        assert!(FieldValue::Empty.is_empty());
        assert!(FieldValue::text("").is_empty());
        assert!(!FieldValue::text(" ").is_empty());
        assert!(!FieldValue::Number(0.0).is_empty());
    }

    #[test]
    fn as_number_parses_trimmed_text() {
        assert_eq!(FieldValue::text(" 42 ").as_number(), Some(42.0));
        assert_eq!(FieldValue::text("12.5").as_number(), Some(12.5));
        assert_eq!(FieldValue::Number(7.0).as_number(), Some(7.0));
    }

    #[test]
    fn as_number_rejects_non_numeric_and_non_finite() {
        assert_eq!(FieldValue::text("abc").as_number(), None);
        assert_eq!(FieldValue::text("inf").as_number(), None);
        assert_eq!(FieldValue::Empty.as_number(), None);
    }

    #[test]
    fn numbers_render_without_trailing_fraction() {
        assert_eq!(FieldValue::Number(50.0).as_text(), "50");
        assert_eq!(FieldValue::Number(12.5).as_text(), "12.5");
    }

    #[test]
    fn deserializes_untagged() {
        let values: Vec<FieldValue> = serde_json::from_str(r#"[null, 25, "Ana"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::Empty,
                FieldValue::Number(25.0),
                FieldValue::text("Ana")
            ]
        );
    }
}
