//! The pattern model: a closed set of shape descriptors.

use std::fmt;
use std::sync::Arc;

use caliper_value::{ClassValue, Heap, Value};

use crate::error::MatchError;

/// A primitive category tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Function,
    Undefined,
    Null,
}

impl TypeTag {
    /// The category name used in mismatch messages.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Function => "function",
            TypeTag::Undefined => "undefined",
            TypeTag::Null => "null",
        }
    }
}

/// Declared fields of a [`Pattern::Shape`] or [`Pattern::Including`]
/// pattern, in declaration order.
#[derive(Clone, Debug)]
pub struct FieldSet {
    entries: Vec<(String, Pattern)>,
}

impl FieldSet {
    fn collect<K, P>(fields: impl IntoIterator<Item = (K, P)>) -> Self
    where
        K: Into<String>,
        P: Into<Pattern>,
    {
        FieldSet {
            entries: fields
                .into_iter()
                .map(|(k, p)| (k.into(), p.into()))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[(String, Pattern)] {
        &self.entries
    }
}

/// A caller-supplied conformance predicate.
///
/// Returning `Ok(false)` or a [`MatchError`] is a non-match, absorbed by
/// [`test`](crate::test); a panic inside the predicate is an unrelated hard
/// failure and unwinds through both entry points.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> Result<bool, MatchError> + Send + Sync>);

impl Predicate {
    pub fn new(f: impl Fn(&Value) -> Result<bool, MatchError> + Send + Sync + 'static) -> Self {
        Predicate(Arc::new(f))
    }

    pub(crate) fn run(&self, value: &Value) -> Result<bool, MatchError> {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<predicate>")
    }
}

/// A declarative descriptor of an expected value shape.
///
/// Patterns are immutable once built, acyclic by construction, and
/// `Send + Sync`; one pattern can serve unlimited concurrent match calls.
/// Build composites through the combinator constructors; the matcher
/// dispatches exhaustively on this enum, so new shapes are new variants,
/// never ambient inspection.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Matches every value.
    Any,
    /// Matches a value strictly equal to the given one.
    Literal(Value),
    /// Matches values of one primitive category. Boxed primitives do not
    /// qualify.
    Type(TypeTag),
    /// Matches finite numbers with zero fractional part.
    Integer,
    /// The generic object marker: any non-null value of object category,
    /// plain or not.
    AnyObject,
    /// The bare array marker: arrays and argument packs.
    Array,
    /// Arrays/argument packs whose every element matches. Empty matches.
    ArrayOf(Heap<Pattern>),
    Date,
    RegExp,
    /// Nominal match: objects constructed by this class or a subclass.
    ClassRef(ClassValue),
    /// Plain objects whose key set equals the declared fields exactly.
    Shape(Heap<FieldSet>),
    /// Plain objects carrying at least the declared fields.
    Including(Heap<FieldSet>),
    /// Plain objects whose every field value matches, whatever the keys.
    ValuesOf(Heap<Pattern>),
    /// `undefined`, or the inner pattern. At field position also tolerates
    /// the key being absent; a present value is checked against the inner
    /// pattern directly.
    Optional(Heap<Pattern>),
    /// `undefined`, `null`, or the inner pattern. Field-position semantics
    /// as for `Optional`.
    Maybe(Heap<Pattern>),
    /// First matching alternative wins; an empty list never matches.
    OneOf(Heap<Vec<Pattern>>),
    Where(Predicate),
}

impl Pattern {
    pub const STRING: Pattern = Pattern::Type(TypeTag::String);
    pub const NUMBER: Pattern = Pattern::Type(TypeTag::Number);
    pub const BOOLEAN: Pattern = Pattern::Type(TypeTag::Boolean);
    pub const FUNCTION: Pattern = Pattern::Type(TypeTag::Function);
    pub const UNDEFINED: Pattern = Pattern::Type(TypeTag::Undefined);
    pub const NULL: Pattern = Pattern::Type(TypeTag::Null);

    /// A literal-equality pattern.
    pub fn literal(value: impl Into<Value>) -> Self {
        Pattern::Literal(value.into())
    }

    /// Every element must match `element`.
    pub fn array_of(element: impl Into<Pattern>) -> Self {
        Pattern::ArrayOf(Heap::new(element.into()))
    }

    /// A plain object with exactly these fields.
    pub fn shape<K, P>(fields: impl IntoIterator<Item = (K, P)>) -> Self
    where
        K: Into<String>,
        P: Into<Pattern>,
    {
        Pattern::Shape(Heap::new(FieldSet::collect(fields)))
    }

    /// A plain object with at least these fields.
    pub fn object_including<K, P>(fields: impl IntoIterator<Item = (K, P)>) -> Self
    where
        K: Into<String>,
        P: Into<Pattern>,
    {
        Pattern::Including(Heap::new(FieldSet::collect(fields)))
    }

    /// A plain object whose every value matches `value`.
    pub fn object_with_values(value: impl Into<Pattern>) -> Self {
        Pattern::ValuesOf(Heap::new(value.into()))
    }

    /// `undefined` or `inner`; at field position, also an absent key.
    pub fn optional(inner: impl Into<Pattern>) -> Self {
        Pattern::Optional(Heap::new(inner.into()))
    }

    /// `undefined`, `null`, or `inner`.
    pub fn maybe(inner: impl Into<Pattern>) -> Self {
        Pattern::Maybe(Heap::new(inner.into()))
    }

    /// The first matching alternative wins.
    pub fn one_of(alternatives: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::OneOf(Heap::new(alternatives.into_iter().collect()))
    }

    /// Values constructed by `class` or one of its subclasses.
    pub fn instance_of(class: &ClassValue) -> Self {
        Pattern::ClassRef(class.clone())
    }

    /// A caller-supplied predicate; see [`Predicate`].
    pub fn predicate(
        f: impl Fn(&Value) -> Result<bool, MatchError> + Send + Sync + 'static,
    ) -> Self {
        Pattern::Where(Predicate::new(f))
    }
}

// Raw literals used directly as patterns.

impl From<bool> for Pattern {
    fn from(b: bool) -> Self {
        Pattern::Literal(Value::Bool(b))
    }
}

impl From<i32> for Pattern {
    fn from(n: i32) -> Self {
        Pattern::Literal(Value::Int(i64::from(n)))
    }
}

impl From<i64> for Pattern {
    fn from(n: i64) -> Self {
        Pattern::Literal(Value::Int(n))
    }
}

impl From<f64> for Pattern {
    fn from(x: f64) -> Self {
        Pattern::Literal(Value::Float(x))
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern::Literal(Value::string(s))
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Pattern::Literal(Value::string(s))
    }
}

impl From<Value> for Pattern {
    fn from(value: Value) -> Self {
        Pattern::Literal(value)
    }
}

impl From<TypeTag> for Pattern {
    fn from(tag: TypeTag) -> Self {
        Pattern::Type(tag)
    }
}
