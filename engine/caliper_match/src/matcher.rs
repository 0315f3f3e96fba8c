//! The recursive conformance algorithm.
//!
//! Dispatch is on the pattern variant alone, never on the value's shape.
//! The first mismatch is raised immediately and is final: no retry, no
//! accumulation of sibling failures. Composite variants derive a fresh
//! child path per element or field before recursing.

use caliper_value::{is_plain_object, Category, ClassValue, ObjectValue, Value};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{self, MatchError};
use crate::path;
use crate::pattern::{FieldSet, Pattern, Predicate, TypeTag};

pub(crate) fn match_value(value: &Value, pattern: &Pattern, path: &str) -> Result<(), MatchError> {
    match pattern {
        Pattern::Any => Ok(()),
        Pattern::Literal(expected) => match_literal(value, expected, path),
        Pattern::Type(tag) => match_type(value, *tag, path),
        Pattern::Integer => match_integer(value, path),
        Pattern::AnyObject => match_any_object(value, path),
        Pattern::Array => array_elements(value, path).map(|_| ()),
        Pattern::ArrayOf(element) => match_array_of(value, element, path),
        Pattern::Date => match value {
            Value::Date(_) => Ok(()),
            _ => Err(error::expected_instance(Some("Date"), path)),
        },
        Pattern::RegExp => match value {
            Value::RegExp(_) => Ok(()),
            _ => Err(error::expected_instance(Some("RegExp"), path)),
        },
        Pattern::ClassRef(class) => match_class(value, class, path),
        Pattern::Shape(fields) => match_fields(value, fields, true, path),
        Pattern::Including(fields) => match_fields(value, fields, false, path),
        Pattern::ValuesOf(element) => match_values_of(value, element, path),
        Pattern::Optional(inner) => match value {
            Value::Undefined => Ok(()),
            present => match_value(present, inner, path),
        },
        Pattern::Maybe(inner) => match value {
            Value::Undefined | Value::Null => Ok(()),
            present => match_value(present, inner, path),
        },
        Pattern::OneOf(alternatives) => match_one_of(value, alternatives, path),
        Pattern::Where(predicate) => match_where(value, predicate, path),
    }
}

fn match_literal(value: &Value, expected: &Value, path: &str) -> Result<(), MatchError> {
    if value.equals(expected) {
        return Ok(());
    }
    // The expected side renders raw (`Expected foo`), the actual side
    // renders like a value (`got "bar"`).
    let expected_text = match expected.as_str() {
        Some(s) => s.to_string(),
        None => expected.to_string(),
    };
    Err(error::expected_literal(
        expected_text,
        value.to_string(),
        path,
    ))
}

fn match_type(value: &Value, tag: TypeTag, path: &str) -> Result<(), MatchError> {
    let expected = match tag {
        TypeTag::String => Category::String,
        TypeTag::Number => Category::Number,
        TypeTag::Boolean => Category::Boolean,
        TypeTag::Function => Category::Function,
        TypeTag::Undefined => Category::Undefined,
        // The null tag reports the value it saw, not its category.
        TypeTag::Null => {
            return match value {
                Value::Null => Ok(()),
                other => Err(error::expected_type("null", other.to_string(), path)),
            };
        }
    };
    if value.category() == expected {
        Ok(())
    } else {
        Err(error::expected_type(
            tag.name(),
            value.category().name(),
            path,
        ))
    }
}

fn match_integer(value: &Value, path: &str) -> Result<(), MatchError> {
    match value {
        Value::Int(_) => Ok(()),
        Value::Float(x) if x.is_finite() && x.fract() == 0.0 => Ok(()),
        Value::Float(_) => Err(error::expected_integer(value.to_string(), path)),
        other => Err(error::expected_integer(
            other.category().name().to_string(),
            path,
        )),
    }
}

/// The generic object marker accepts plain and non-plain objects alike;
/// only shape patterns insist on plainness.
fn match_any_object(value: &Value, path: &str) -> Result<(), MatchError> {
    if value.category() == Category::Object {
        Ok(())
    } else {
        Err(error::expected_type(
            "object",
            value.category().name(),
            path,
        ))
    }
}

fn array_elements<'a>(value: &'a Value, path: &str) -> Result<&'a [Value], MatchError> {
    value
        .as_array_like()
        .ok_or_else(|| error::expected_array(value.to_string(), path))
}

fn match_array_of(value: &Value, element: &Pattern, path: &str) -> Result<(), MatchError> {
    let items = array_elements(value, path)?;
    for (index, item) in items.iter().enumerate() {
        match_value(item, element, &path::extend_index(path, index))?;
    }
    Ok(())
}

/// Shape preconditions: object category, non-null, and plain. Arrays,
/// dates, boxed primitives, constructed and inheriting records all fall
/// into the plainness failure, whatever fields they carry.
fn plain_record<'a>(value: &'a Value, path: &str) -> Result<&'a ObjectValue, MatchError> {
    match value {
        Value::Object(record) if is_plain_object(value) => Ok(record),
        Value::Null => Err(error::expected_type("object", "null", path)),
        other if other.category() == Category::Object => Err(error::expected_plain_object(path)),
        other => Err(error::expected_type(
            "object",
            other.category().name(),
            path,
        )),
    }
}

enum FieldRule<'a> {
    Required(&'a Pattern),
    /// An `Optional`/`Maybe` field: the key may be absent, and a present
    /// value is checked against the inner pattern directly.
    Optional(&'a Pattern),
}

fn match_fields(
    value: &Value,
    fields: &FieldSet,
    exact: bool,
    path: &str,
) -> Result<(), MatchError> {
    let record = plain_record(value, path)?;

    let mut rules: FxHashMap<&str, FieldRule<'_>> = FxHashMap::default();
    for (name, field_pattern) in fields.entries() {
        let rule = match field_pattern {
            Pattern::Optional(inner) | Pattern::Maybe(inner) => FieldRule::Optional(inner),
            required => FieldRule::Required(required),
        };
        rules.insert(name.as_str(), rule);
    }

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for (key, field_value) in record.entries() {
        match rules.get(key.as_str()) {
            Some(FieldRule::Required(field_pattern) | FieldRule::Optional(field_pattern)) => {
                seen.insert(key.as_str());
                match_value(field_value, field_pattern, &path::extend_key(path, key))?;
            }
            None if exact => return Err(error::unknown_key(&path::extend_key(path, key))),
            None => {}
        }
    }

    // Declaration order keeps the reported key deterministic.
    for (name, field_pattern) in fields.entries() {
        let absent = !seen.contains(name.as_str());
        if absent && !matches!(field_pattern, Pattern::Optional(_) | Pattern::Maybe(_)) {
            return Err(error::missing_key(name, path));
        }
    }
    Ok(())
}

fn match_values_of(value: &Value, element: &Pattern, path: &str) -> Result<(), MatchError> {
    let record = plain_record(value, path)?;
    for (key, field_value) in record.entries() {
        match_value(field_value, element, &path::extend_key(path, key))?;
    }
    Ok(())
}

fn match_class(value: &Value, class: &ClassValue, path: &str) -> Result<(), MatchError> {
    let conforms = value
        .as_object()
        .and_then(ObjectValue::constructor)
        .is_some_and(|constructor| constructor.derives_from(class));
    if conforms {
        Ok(())
    } else {
        Err(error::expected_instance(class.name(), path))
    }
}

/// Alternatives are tried in declaration order and any success wins; the
/// failure reported after exhaustion carries no per-alternative detail, so
/// alternative order can never change the verdict.
fn match_one_of(value: &Value, alternatives: &[Pattern], path: &str) -> Result<(), MatchError> {
    if alternatives
        .iter()
        .any(|alternative| match_value(value, alternative, path).is_ok())
    {
        Ok(())
    } else {
        Err(error::one_of_exhausted(path))
    }
}

fn match_where(value: &Value, predicate: &Predicate, path: &str) -> Result<(), MatchError> {
    match predicate.run(value) {
        Ok(true) => Ok(()),
        Ok(false) => Err(error::where_failed(path)),
        // A structured failure from the predicate keeps its message,
        // re-anchored at this pattern's position.
        Err(failure) => Err(error::where_mismatch(failure.message, path)),
    }
}
