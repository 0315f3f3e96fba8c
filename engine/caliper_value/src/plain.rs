//! The plain-object oracle.

use crate::object::ObjectOrigin;
use crate::value::Value;

/// Whether `value` is a plain object: a record built from record-literal
/// syntax.
///
/// Everything else is non-plain: `null`, arrays and argument packs, dates,
/// regexps, boxed primitives, records built by a constructor, and records
/// that extend another record — even when the record they extend is itself
/// plain.
///
/// Shape patterns consult this oracle before looking at any field; the
/// generic object marker does not.
pub fn is_plain_object(value: &Value) -> bool {
    match value {
        Value::Object(record) => matches!(record.origin(), ObjectOrigin::Literal),
        _ => false,
    }
}
