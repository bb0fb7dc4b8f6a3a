//! Row access for the table pipeline.
//!
//! The engine never reads struct fields directly. Rows expose their values
//! through [`FieldAccess`], an explicit lookup seam the caller controls,
//! instead of the stringly-typed dynamic access a display layer usually
//! grows. Missing fields are `None` and degrade gracefully: the global
//! filter skips them, column filters exclude the row, and sort orders the
//! row last.

use serde_json::{Map, Value};

/// Field lookup by name, plus enumeration of present values.
pub trait FieldAccess {
    /// The value stored under `name`, or `None` when the row has no such
    /// field.
    fn field(&self, name: &str) -> Option<&Value>;

    /// All values present in the row, in field order. Used by the global
    /// filter, which matches against every field.
    fn values(&self) -> Vec<&Value>;
}

impl FieldAccess for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    fn values(&self) -> Vec<&Value> {
        Map::values(self).collect()
    }
}

/// Object values behave like their underlying map. A non-object value is a
/// single-column row: it has no named fields, but its one value still
/// participates in the global filter.
impl FieldAccess for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(name))
    }

    fn values(&self) -> Vec<&Value> {
        match self.as_object() {
            Some(map) => map.values().collect(),
            None => vec![self],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_field_lookup() {
        let row = json!({"name": "Alice", "age": 30});
        assert_eq!(row.field("name"), Some(&json!("Alice")));
        assert_eq!(row.field("age"), Some(&json!(30)));
        assert_eq!(row.field("missing"), None);
    }

    #[test]
    fn object_values() {
        let row = json!({"name": "Alice", "age": 30});
        let values = FieldAccess::values(&row);
        assert_eq!(values.len(), 2);
        assert!(values.contains(&&json!("Alice")));
        assert!(values.contains(&&json!(30)));
    }

    #[test]
    fn null_field_is_present() {
        let row = json!({"amount": null});
        assert_eq!(row.field("amount"), Some(&json!(null)));
    }

    #[test]
    fn map_field_lookup() {
        let row: Map<String, Value> = json!({"id": 7})
            .as_object()
            .cloned()
            .unwrap();
        assert_eq!(row.field("id"), Some(&json!(7)));
        assert_eq!(row.field("nope"), None);
        assert_eq!(FieldAccess::values(&row), vec![&json!(7)]);
    }

    #[test]
    fn scalar_row_has_no_fields_but_one_value() {
        let row = json!("bare");
        assert_eq!(row.field("anything"), None);
        assert_eq!(FieldAccess::values(&row), vec![&json!("bare")]);
    }
}
