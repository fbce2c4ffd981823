//! UserRecord - the aggregate of every completed step's values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::validation::FieldValue;

use super::Field;

/// Flat snapshot of the intake, keyed by field name.
///
/// Serializes as a plain object: `{"fullName": "...", "energyAspect1": 40, ...}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord {
    values: BTreeMap<Field, FieldValue>,
}

impl UserRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a step's values in. A repeated field name takes the newer value.
    pub fn merge<'a>(&mut self, values: impl IntoIterator<Item = (&'a Field, &'a FieldValue)>) {
        for (field, value) in values {
            self.values.insert(*field, value.clone());
        }
    }

    /// Value of a field, if the record has it.
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Fields present in the record, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.values.keys().copied()
    }

    /// All entries in form order.
    pub fn values(&self) -> &BTreeMap<Field, FieldValue> {
        &self.values
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing has been merged yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drops every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_accumulates_fields() {
        let mut record = UserRecord::new();
        let first: BTreeMap<_, _> = [(Field::FullName, FieldValue::text("Ana"))].into();
        let second: BTreeMap<_, _> = [(Field::School, FieldValue::text("Colegio"))].into();

        record.merge(&first);
        record.merge(&second);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get(Field::FullName), Some(&FieldValue::text("Ana")));
    }

    #[test]
    fn merge_later_value_wins_on_repeat() {
        let mut record = UserRecord::new();
        record.merge(&BTreeMap::from([(Field::City, FieldValue::text("Cali"))]));
        record.merge(&BTreeMap::from([(Field::City, FieldValue::text("Bogotá"))]));
        assert_eq!(record.get(Field::City), Some(&FieldValue::text("Bogotá")));
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut record = UserRecord::new();
        record.merge(&BTreeMap::from([
            (Field::FullName, FieldValue::text("Ana")),
            (Field::EnergyAspect1, FieldValue::Number(40.0)),
        ]));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["fullName"], "Ana");
        assert_eq!(json["energyAspect1"], 40.0);
    }

    #[test]
    fn clear_empties_record() {
        let mut record = UserRecord::new();
        record.merge(&BTreeMap::from([(Field::Email, FieldValue::text("a@b.co"))]));
        record.clear();
        assert!(record.is_empty());
    }
}
