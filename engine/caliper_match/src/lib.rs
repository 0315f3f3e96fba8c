//! Caliper Match - structural runtime type checking.
//!
//! This crate provides:
//! - The [`Pattern`] descriptor model and its combinator constructors
//! - The recursive matcher driving a value/pattern pair to a verdict
//! - [`MatchError`], the single structural-mismatch failure (typed kind,
//!   stable message, access path)
//! - The public surface: [`check`] (raising) and [`test`] (boolean)
//!
//! # Architecture
//!
//! The pattern set is closed: the matcher dispatches exhaustively on the
//! [`Pattern`] enum and never inspects a value's shape to decide what the
//! caller meant. New kinds of expectation are new variants with one new
//! matcher arm, not ambient duck-typing.
//!
//! Values come from [`caliper_value`]: boundary data such as user input,
//! remote-procedure arguments, or deserialized documents.
//!
//! # Example
//!
//! ```
//! use caliper_match::{check, test, Pattern, Value};
//!
//! let pattern = Pattern::shape([
//!     ("name", Pattern::STRING),
//!     ("port", Pattern::Integer),
//!     ("tags", Pattern::array_of(Pattern::STRING)),
//! ]);
//!
//! let config = Value::object([
//!     ("name", Value::string("proxy")),
//!     ("port", Value::int(8080)),
//!     ("tags", Value::array(vec![Value::string("edge")])),
//! ]);
//! assert!(test(&config, &pattern));
//!
//! let broken = Value::object([
//!     ("name", Value::string("proxy")),
//!     ("port", Value::float(80.5)),
//!     ("tags", Value::array(vec![])),
//! ]);
//! let failure = check(&broken, &pattern).unwrap_err();
//! assert_eq!(failure.path, "port");
//! assert_eq!(
//!     failure.to_string(),
//!     "Match error: Expected Integer, got 80.5 in field port"
//! );
//! ```

mod error;
mod matcher;
mod path;
mod pattern;

pub use error::{MatchError, MatchErrorKind};
pub use pattern::{FieldSet, Pattern, Predicate, TypeTag};

// Re-export the value model so callers need only one crate.
pub use caliper_value::{
    is_plain_object, Boxed, Category, ClassValue, FunctionValue, Heap, ObjectOrigin, ObjectValue,
    Value,
};

/// Assert that `value` conforms to `pattern`.
///
/// Returns `Ok(())` on conformance; otherwise the structural failure, with
/// its message and the path to the first divergence. The check is
/// side-effect-free and never retries.
pub fn check(value: &Value, pattern: &Pattern) -> Result<(), MatchError> {
    match matcher::match_value(value, pattern, "") {
        Ok(()) => Ok(()),
        Err(failure) => {
            tracing::trace!(path = %failure.path, message = %failure.message, "value failed check");
            Err(failure)
        }
    }
}

/// Whether `value` conforms to `pattern`.
///
/// Absorbs exactly the structural failures this engine raises. A panic
/// from a [`Where`](Pattern::Where) predicate is an unrelated condition
/// and unwinds through this function untouched.
pub fn test(value: &Value, pattern: &Pattern) -> bool {
    check(value, pattern).is_ok()
}
