//! User record model and collection helpers.

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};

/// A single user entry.
///
/// Field order here is the on-disk field order: `id`, `name`, `city`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub city: String,
}

/// A validated record awaiting an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub city: String,
}

impl NewRecord {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
        }
    }

    /// Attach an id, producing the record to persist
    pub fn with_id(self, id: i64) -> Record {
        Record {
            id,
            name: self.name,
            city: self.city,
        }
    }
}

/// Next id to assign: one past the largest id in the collection, or 1 when empty.
///
/// Fails when the largest id is already `i64::MAX`.
pub fn next_id(records: &[Record]) -> StoreResult<i64> {
    match records.iter().map(|r| r.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted(max)),
    }
}

/// First record with the given id. `None` never matches.
pub fn find_by_id(records: &[Record], id: Option<i64>) -> Option<&Record> {
    let id = id?;
    records.iter().find(|r| r.id == id)
}

/// Records whose city equals `city` ignoring case, in collection order.
pub fn filter_by_city(records: &[Record], city: &str) -> Vec<Record> {
    let wanted = city.to_lowercase();
    records
        .iter()
        .filter(|r| r.city.to_lowercase() == wanted)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str, city: &str) -> Record {
        Record {
            id,
            name: name.to_string(),
            city: city.to_string(),
        }
    }

    #[test]
    fn test_next_id_empty() {
        assert_eq!(next_id(&[]).unwrap(), 1);
    }

    #[test]
    fn test_next_id_uses_max_not_len() {
        let records = vec![record(7, "a", "x"), record(3, "b", "y")];
        assert_eq!(next_id(&records).unwrap(), 8);
    }

    #[test]
    fn test_next_id_at_max_fails() {
        let records = vec![record(i64::MAX, "a", "x")];
        assert!(matches!(
            next_id(&records),
            Err(StoreError::IdsExhausted(i64::MAX))
        ));
    }

    #[test]
    fn test_find_by_id() {
        let records = vec![record(1, "Asha", "Pune"), record(2, "Ravi", "Delhi")];
        assert_eq!(find_by_id(&records, Some(2)).map(|r| r.name.as_str()), Some("Ravi"));
        assert!(find_by_id(&records, Some(3)).is_none());
        assert!(find_by_id(&records, None).is_none());
    }

    #[test]
    fn test_filter_by_city_is_case_insensitive_exact() {
        let records = vec![
            record(1, "Asha", "Delhi"),
            record(2, "Ravi", "New Delhi"),
            record(3, "Meera", "DELHI"),
        ];

        let found = filter_by_city(&records, "delhi");
        let ids: Vec<i64> = found.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_serialized_field_order() {
        let json = serde_json::to_string(&record(1, "Asha", "Pune")).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Asha","city":"Pune"}"#);
    }
}
