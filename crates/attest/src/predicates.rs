//! Type predicates over dynamic values.
//!
//! Pure, total, stateless. Consumed by the argument checks in
//! [`args`](crate::args); [`is_primitive`] is exported for callers only.

use crate::value::{PRIMITIVE_KINDS, Value};

/// Returns `true` if `input` is a composite value that exposes iteration.
///
/// Only arrays iterate in this model. Strings stay excluded: they are of
/// primitive kind even though many languages iterate them.
pub fn is_iterable(input: &Value) -> bool {
    matches!(input, Value::Array(_))
}

/// Returns `true` if `input` is an Object or Array.
pub fn is_container(input: &Value) -> bool {
    matches!(input, Value::Array(_) | Value::Object(_))
}

/// Returns `true` if `input` is an Object and not an Array.
pub fn is_object(input: &Value) -> bool {
    matches!(input, Value::Object(_))
}

/// Returns `true` if `input` is null or of a primitive kind
/// (see [`PRIMITIVE_KINDS`]).
pub fn is_primitive(input: &Value) -> bool {
    matches!(input, Value::Null) || PRIMITIVE_KINDS.contains(&input.kind())
}
