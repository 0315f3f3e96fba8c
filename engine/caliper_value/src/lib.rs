//! Runtime value model for the Caliper shape checker.
//!
//! This crate provides:
//! - The dynamic [`Value`] enum — every kind of value that can cross a
//!   trust or serialization boundary (primitives, records, arrays,
//!   functions, constructors, dates, regexps, boxed primitives)
//! - [`Heap`], the shared-allocation wrapper all composite values live in
//! - [`ClassValue`], a nominal constructor with identity and a parent chain
//! - [`ObjectValue`], an insertion-ordered record that remembers how it was
//!   built ([`ObjectOrigin`])
//! - The plain-object oracle, [`is_plain_object`]
//! - JSON intake: `From<serde_json::Value> for Value`
//!
//! # Value Construction
//!
//! Heap values are built through `Value::` factory methods:
//!
//! ```
//! use caliper_value::Value;
//!
//! let v = Value::object([
//!     ("name", Value::string("ada")),
//!     ("scores", Value::array(vec![Value::int(1), Value::int(2)])),
//! ]);
//! assert!(caliper_value::is_plain_object(&v));
//! ```
//!
//! # Thread Safety
//!
//! Values are immutable once built and use `Arc` internally, so they are
//! `Send + Sync` and safe to share across concurrent match calls. Because
//! nothing offers interior mutability, reference cycles cannot be
//! constructed.

mod class;
mod heap;
mod json;
mod object;
mod plain;
mod value;

pub use class::ClassValue;
pub use heap::Heap;
pub use object::{ObjectOrigin, ObjectValue};
pub use plain::is_plain_object;
pub use value::{Boxed, Category, FunctionValue, Value};
