//! Opaque data rows.

use crate::value::CellValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One opaque data record, displayed as one table line.
///
/// A record maps field names to [`CellValue`]s. Tables never mutate records;
/// the shaping pipeline only re-orders, filters, and selects indexes into the
/// caller's record slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: HashMap<String, CellValue>,
}

impl Record {
    /// Create a new empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field value (builder style).
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Get a field value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.get(key)
    }

    /// Field value for sorting: missing fields read as [`CellValue::Empty`].
    #[must_use]
    pub fn get_or_empty(&self, key: &str) -> CellValue {
        self.fields.get(key).cloned().unwrap_or(CellValue::Empty)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over all field values.
    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.fields.values()
    }
}

impl FromIterator<(String, CellValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let r = Record::new()
            .field("name", "Alice")
            .field("age", 30)
            .field("active", true);

        assert_eq!(r.len(), 3);
        assert_eq!(r.get("name"), Some(&CellValue::Text("Alice".into())));
        assert_eq!(r.get("age"), Some(&CellValue::Number(30.0)));
        assert_eq!(r.get("active"), Some(&CellValue::Bool(true)));
    }

    #[test]
    fn test_get_missing() {
        let r = Record::new();
        assert!(r.get("nonexistent").is_none());
        assert_eq!(r.get_or_empty("nonexistent"), CellValue::Empty);
        assert!(r.is_empty());
    }

    #[test]
    fn test_from_iter() {
        let r: Record = vec![("x".to_string(), CellValue::Number(1.0))]
            .into_iter()
            .collect();
        assert_eq!(r.get("x"), Some(&CellValue::Number(1.0)));
    }

    #[test]
    fn test_serde_round_trip() {
        let r = Record::new().field("name", "Bob").field("score", 7);
        let json = serde_json::to_string(&r).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
