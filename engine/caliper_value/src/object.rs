//! Record values.

use crate::class::ClassValue;
use crate::value::Value;

/// How a record came to exist.
///
/// The distinction drives the plain-object oracle: only literal records are
/// plain. Records built by a constructor or inheriting another record carry
/// class/prototype identity and are rejected by shape patterns.
#[derive(Clone, Debug)]
pub enum ObjectOrigin {
    /// Built directly from record-literal syntax.
    Literal,
    /// Built by a constructor.
    Constructed(ClassValue),
    /// Built by extending another record (prototype inheritance).
    Inherited,
}

/// A record: named fields in insertion order, plus the record's origin.
///
/// Field order is preserved so first-mismatch reporting is deterministic.
/// Lookups scan linearly; boundary documents are small and the matcher
/// touches each field once.
#[derive(Clone, Debug)]
pub struct ObjectValue {
    origin: ObjectOrigin,
    entries: Vec<(String, Value)>,
}

impl ObjectValue {
    pub fn new(origin: ObjectOrigin, entries: Vec<(String, Value)>) -> Self {
        ObjectValue { origin, entries }
    }

    pub fn origin(&self) -> &ObjectOrigin {
        &self.origin
    }

    /// The constructor this record was built by, if any.
    pub fn constructor(&self) -> Option<&ClassValue> {
        match &self.origin {
            ObjectOrigin::Constructed(class) => Some(class),
            ObjectOrigin::Literal | ObjectOrigin::Inherited => None,
        }
    }

    /// Fields in insertion order.
    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_insertion_order() {
        let record = ObjectValue::new(
            ObjectOrigin::Literal,
            vec![
                ("z".to_string(), Value::int(1)),
                ("a".to_string(), Value::int(2)),
                ("m".to_string(), Value::int(3)),
            ],
        );
        let keys: Vec<&str> = record.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn get_finds_fields_by_name() {
        let record = ObjectValue::new(
            ObjectOrigin::Literal,
            vec![("answer".to_string(), Value::int(42))],
        );
        assert!(record.contains_key("answer"));
        assert!(!record.contains_key("question"));
        assert!(matches!(record.get("answer"), Some(Value::Int(42))));
    }

    #[test]
    fn constructor_is_exposed_for_constructed_records() {
        let class = ClassValue::new("Widget");
        let record = ObjectValue::new(ObjectOrigin::Constructed(class.clone()), Vec::new());
        assert!(record.constructor().is_some_and(|c| c.same_class(&class)));

        let literal = ObjectValue::new(ObjectOrigin::Literal, Vec::new());
        assert!(literal.constructor().is_none());
    }
}
