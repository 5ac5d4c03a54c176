//! Argument type checks.
//!
//! Thin wrappers over the assertion core with fixed message templates. Every
//! check fails with [`ErrorKind::InvalidArgumentType`], never the report
//! path, so a failed check always surfaces as an `Err` at the call site.

use crate::checks::ensure;
use crate::errors::{AssertError, ErrorKind};
use crate::predicates::{is_container, is_iterable, is_object};
use crate::value::{Kind, Value};

/// Ensure `input` has every property named in `props`, in sequence order.
///
/// The first missing property returns its error; later names go unchecked.
pub fn props(input: &Value, props: &[&str], arg_name: &str) -> Result<(), AssertError> {
    for prop in props {
        ensure(
            input.has_property(prop),
            || format!("Argument {arg_name} must have a \"{prop}\" property."),
            Some(ErrorKind::InvalidArgumentType),
        )?;
    }
    Ok(())
}

/// Generic argument type check with the shared message template.
pub fn arg_type(condition: bool, type_label: &str, arg_name: &str) -> Result<(), AssertError> {
    ensure(
        condition,
        || format!("Argument {arg_name} must be {type_label}"),
        Some(ErrorKind::InvalidArgumentType),
    )
}

/// Ensure `input` is a string.
pub fn string(input: &Value, arg_name: &str) -> Result<(), AssertError> {
    arg_type(input.kind() == Kind::String, "a String", arg_name)
}

/// Ensure `input` is a number.
pub fn number(input: &Value, arg_name: &str) -> Result<(), AssertError> {
    arg_type(input.kind() == Kind::Number, "a Number", arg_name)
}

/// Ensure `input` is a boolean.
pub fn boolean(input: &Value, arg_name: &str) -> Result<(), AssertError> {
    arg_type(input.kind() == Kind::Boolean, "a Boolean", arg_name)
}

/// Ensure `input` is a function handle.
pub fn function(input: &Value, arg_name: &str) -> Result<(), AssertError> {
    arg_type(input.kind() == Kind::Function, "a Function", arg_name)
}

/// Ensure `input` is an object (and not an array).
pub fn object(input: &Value, arg_name: &str) -> Result<(), AssertError> {
    arg_type(is_object(input), "an Object", arg_name)
}

/// Ensure `input` is an array.
pub fn array(input: &Value, arg_name: &str) -> Result<(), AssertError> {
    arg_type(input.kind() == Kind::Array, "an Array", arg_name)
}

/// Ensure `input` is an object or an array.
pub fn container(input: &Value, arg_name: &str) -> Result<(), AssertError> {
    arg_type(is_container(input), "an Object or Array", arg_name)
}

/// Ensure `input` is iterable.
pub fn iterable(input: &Value, arg_name: &str) -> Result<(), AssertError> {
    arg_type(is_iterable(input), "iterable", arg_name)
}
