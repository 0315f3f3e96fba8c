//! The structural-mismatch failure type.
//!
//! One failure kind exists: [`MatchError`]. It carries a typed
//! [`MatchErrorKind`] for programmatic matching, the rendered message
//! (message templates are part of the stable external format), and the
//! access path from the matched root to the point of divergence. Factory
//! functions populate kind, message, and path together; the message gains
//! an ` in field <path>` suffix whenever the path is non-root.

use std::error::Error;
use std::fmt;

/// Typed catalogue of every mismatch the matcher can report.
///
/// The `Display` impl produces the exact message template for each kind,
/// without the path suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchErrorKind {
    /// A category tag (or the object-category precondition of a shape
    /// pattern) was not met. `got` is a category name, except for the
    /// `null` tag, which reports the rendered value.
    ExpectedType {
        expected: &'static str,
        got: String,
    },
    ExpectedLiteral {
        expected: String,
        got: String,
    },
    /// `got` is the number verbatim when the value was numeric, otherwise
    /// its category name.
    ExpectedInteger {
        got: String,
    },
    ExpectedArray {
        got: String,
    },
    ExpectedPlainObject,
    MissingKey {
        key: String,
    },
    /// The offending key is named by the error's path, not the message.
    UnknownKey,
    /// Nominal mismatch against a constructor; anonymous constructors get
    /// the generic phrase.
    ExpectedInstance {
        name: Option<String>,
    },
    OneOfExhausted,
    WhereFailed,
    /// A structured failure raised inside a `Where` predicate, passed
    /// through with its message preserved.
    Custom {
        message: String,
    },
}

impl fmt::Display for MatchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedType { expected, got } => write!(f, "Expected {expected}, got {got}"),
            Self::ExpectedLiteral { expected, got } => {
                write!(f, "Expected {expected}, got {got}")
            }
            Self::ExpectedInteger { got } => write!(f, "Expected Integer, got {got}"),
            Self::ExpectedArray { got } => write!(f, "Expected array, got {got}"),
            Self::ExpectedPlainObject => f.write_str("Expected plain object"),
            Self::MissingKey { key } => write!(f, "Missing key '{key}'"),
            Self::UnknownKey => f.write_str("Unknown key"),
            Self::ExpectedInstance { name } => match name {
                Some(name) => write!(f, "Expected {name}"),
                None => f.write_str("Expected particular constructor"),
            },
            Self::OneOfExhausted => f.write_str("Failed OneOf validation"),
            Self::WhereFailed => f.write_str("Failed Where validation"),
            Self::Custom { message } => f.write_str(message),
        }
    }
}

/// A definitive conformance verdict: the value diverged from the pattern.
///
/// `message` is the kind's template plus the path suffix; `path` is the
/// accessor chain from the matched root (empty at the root). `Display`
/// prepends the `Match error: ` banner.
#[derive(Clone, Debug)]
pub struct MatchError {
    pub kind: MatchErrorKind,
    pub message: String,
    pub path: String,
}

impl MatchError {
    /// A failure with a caller-supplied message and root path. The way for
    /// `Where` predicates to raise a structured failure of their own.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        MatchError {
            kind: MatchErrorKind::Custom {
                message: message.clone(),
            },
            message,
            path: String::new(),
        }
    }

    fn from_kind(kind: MatchErrorKind, path: &str) -> Self {
        let mut message = kind.to_string();
        if !path.is_empty() {
            message.push_str(" in field ");
            message.push_str(path);
        }
        MatchError {
            kind,
            message,
            path: path.to_string(),
        }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Match error: {}", self.message)
    }
}

impl Error for MatchError {}

// Factory functions, one per mismatch. All paths through the matcher that
// build an error come through here.

#[cold]
pub(crate) fn expected_type(
    expected: &'static str,
    got: impl Into<String>,
    path: &str,
) -> MatchError {
    MatchError::from_kind(
        MatchErrorKind::ExpectedType {
            expected,
            got: got.into(),
        },
        path,
    )
}

#[cold]
pub(crate) fn expected_literal(expected: String, got: String, path: &str) -> MatchError {
    MatchError::from_kind(MatchErrorKind::ExpectedLiteral { expected, got }, path)
}

#[cold]
pub(crate) fn expected_integer(got: String, path: &str) -> MatchError {
    MatchError::from_kind(MatchErrorKind::ExpectedInteger { got }, path)
}

#[cold]
pub(crate) fn expected_array(got: String, path: &str) -> MatchError {
    MatchError::from_kind(MatchErrorKind::ExpectedArray { got }, path)
}

#[cold]
pub(crate) fn expected_plain_object(path: &str) -> MatchError {
    MatchError::from_kind(MatchErrorKind::ExpectedPlainObject, path)
}

#[cold]
pub(crate) fn missing_key(key: &str, path: &str) -> MatchError {
    MatchError::from_kind(
        MatchErrorKind::MissingKey {
            key: key.to_string(),
        },
        path,
    )
}

#[cold]
pub(crate) fn unknown_key(path: &str) -> MatchError {
    MatchError::from_kind(MatchErrorKind::UnknownKey, path)
}

#[cold]
pub(crate) fn expected_instance(name: Option<&str>, path: &str) -> MatchError {
    MatchError::from_kind(
        MatchErrorKind::ExpectedInstance {
            name: name.map(str::to_string),
        },
        path,
    )
}

#[cold]
pub(crate) fn one_of_exhausted(path: &str) -> MatchError {
    MatchError::from_kind(MatchErrorKind::OneOfExhausted, path)
}

#[cold]
pub(crate) fn where_failed(path: &str) -> MatchError {
    MatchError::from_kind(MatchErrorKind::WhereFailed, path)
}

/// A structured failure raised by a `Where` predicate: the message passes
/// through unchanged, re-anchored at the pattern's own path.
#[cold]
pub(crate) fn where_mismatch(message: String, path: &str) -> MatchError {
    MatchError::from_kind(MatchErrorKind::Custom { message }, path)
}
