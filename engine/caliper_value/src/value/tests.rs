use pretty_assertions::assert_eq;

use super::*;

fn empty_object() -> Value {
    Value::object(std::iter::empty::<(&str, Value)>())
}

#[test]
fn test_categories() {
    assert_eq!(Value::Undefined.category(), Category::Undefined);
    assert_eq!(Value::Null.category(), Category::Null);
    assert_eq!(Value::Bool(true).category(), Category::Boolean);
    assert_eq!(Value::int(1).category(), Category::Number);
    assert_eq!(Value::float(1.5).category(), Category::Number);
    assert_eq!(Value::string("s").category(), Category::String);
    assert_eq!(Value::function().category(), Category::Function);
    assert_eq!(Value::Class(ClassValue::new("C")).category(), Category::Function);
    assert_eq!(Value::array(vec![]).category(), Category::Object);
    assert_eq!(Value::arguments(vec![]).category(), Category::Object);
    assert_eq!(empty_object().category(), Category::Object);
    assert_eq!(Value::date(0).category(), Category::Object);
    assert_eq!(Value::regexp("a+").category(), Category::Object);
}

#[test]
fn test_boxed_primitives_have_object_category() {
    assert_eq!(Value::boxed_bool(true).category(), Category::Object);
    assert_eq!(Value::boxed_number(123.0).category(), Category::Object);
    assert_eq!(Value::boxed_string("foo").category(), Category::Object);
}

#[test]
fn test_scalar_equality() {
    assert!(Value::Undefined.equals(&Value::Undefined));
    assert!(Value::Null.equals(&Value::Null));
    assert!(!Value::Null.equals(&Value::Undefined));
    assert!(Value::Bool(true).equals(&Value::Bool(true)));
    assert!(!Value::Bool(true).equals(&Value::Bool(false)));
    assert!(Value::string("a").equals(&Value::string("a")));
    assert!(!Value::string("a").equals(&Value::string("b")));
    // strings never equal numbers, whatever they spell
    assert!(!Value::string("123").equals(&Value::int(123)));
}

#[test]
fn test_numbers_compare_numerically_across_variants() {
    assert!(Value::int(3).equals(&Value::float(3.0)));
    assert!(Value::float(3.0).equals(&Value::int(3)));
    assert!(!Value::int(3).equals(&Value::float(3.5)));
    // NaN equals nothing, itself included
    assert!(!Value::float(f64::NAN).equals(&Value::float(f64::NAN)));
}

#[test]
fn test_composites_compare_by_identity() {
    let a = Value::array(vec![Value::int(1)]);
    let b = Value::array(vec![Value::int(1)]);
    assert!(a.equals(&a.clone()));
    assert!(!a.equals(&b));

    let o = Value::object([("k", 1)]);
    assert!(o.equals(&o.clone()));
    assert!(!o.equals(&Value::object([("k", 1)])));

    let class = ClassValue::new("C");
    assert!(Value::Class(class.clone()).equals(&Value::Class(class.clone())));
    assert!(!Value::Class(class).equals(&Value::Class(ClassValue::new("C"))));
}

#[test]
fn test_display_scalars() {
    assert_eq!(Value::Undefined.to_string(), "undefined");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::int(42).to_string(), "42");
    assert_eq!(Value::float(3.14).to_string(), "3.14");
    assert_eq!(Value::float(3.0).to_string(), "3");
    assert_eq!(Value::string("hello").to_string(), "\"hello\"");
}

#[test]
fn test_display_non_finite_numbers() {
    assert_eq!(Value::float(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::float(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Value::float(f64::NEG_INFINITY).to_string(), "-Infinity");
}

#[test]
fn test_display_escapes_strings() {
    assert_eq!(
        Value::string("a\"b\\c\nd").to_string(),
        "\"a\\\"b\\\\c\\nd\""
    );
}

#[test]
fn test_display_composites() {
    let v = Value::object([
        ("a", Value::int(1)),
        ("b", Value::array(vec![Value::Bool(false), Value::Null])),
    ]);
    assert_eq!(v.to_string(), "{\"a\":1,\"b\":[false,null]}");
    assert_eq!(empty_object().to_string(), "{}");
    assert_eq!(Value::array(vec![]).to_string(), "[]");
}

#[test]
fn test_array_like_view() {
    let arr = Value::array(vec![Value::int(1), Value::int(2)]);
    assert_eq!(arr.as_array_like().map(<[Value]>::len), Some(2));

    let args = Value::arguments(vec![Value::int(1)]);
    assert_eq!(args.as_array_like().map(<[Value]>::len), Some(1));

    assert!(Value::string("no").as_array_like().is_none());
    assert!(Value::object([("0", 1)]).as_array_like().is_none());
}

#[test]
fn test_number_view_widens_ints() {
    assert_eq!(Value::int(7).as_number(), Some(7.0));
    assert_eq!(Value::float(7.5).as_number(), Some(7.5));
    assert_eq!(Value::string("7").as_number(), None);
    // boxed numbers are objects, not numbers
    assert_eq!(Value::boxed_number(7.0).as_number(), None);
}

#[test]
fn test_conversions() {
    assert!(Value::from(true).equals(&Value::Bool(true)));
    assert!(Value::from(3).equals(&Value::int(3)));
    assert!(Value::from(3i64).equals(&Value::int(3)));
    assert!(Value::from(3.5).equals(&Value::float(3.5)));
    assert!(Value::from("s").equals(&Value::string("s")));
    assert!(matches!(
        Value::from(vec![Value::int(1)]),
        Value::Array(items) if items.len() == 1
    ));
}
