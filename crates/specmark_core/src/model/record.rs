//! Free-form attribute record.
//!
//! Records carry whatever fields their producer supplied, so a leaf
//! specification may meet a record without the field it compares against.

use crate::spec::{FieldSource, FieldValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named field values, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record with `name` set to `value`, replacing any prior value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldSource for Record {
    fn field(&self, name: &str) -> Option<FieldValue> {
        self.fields.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::spec::{FieldSource, FieldValue};

    #[test]
    fn with_replaces_existing_values() {
        let record = Record::new().with("size", "small").with("size", "large");
        assert_eq!(record.len(), 1);
        assert_eq!(record.field("size"), Some(FieldValue::from("large")));
        assert_eq!(record.field("color"), None);
    }

    #[test]
    fn set_and_get_round_trip_through_field_source() {
        let mut record = Record::new();
        assert!(record.is_empty());
        record.set("stock", 4_i64);
        assert_eq!(record.get("stock"), Some(&FieldValue::Integer(4)));
        assert_eq!(record.field("stock"), Some(FieldValue::Integer(4)));
    }
}
