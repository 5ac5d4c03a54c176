//! # attest
//!
//! Runtime assertion utility: check a boolean and either do nothing, report
//! the failure to a diagnostic sink, or return a typed error. Ships with
//! argument type checks and predicates over a dynamic [`Value`] model.
//!
//! The core is [`ensure`] (default tracing sink) and [`ensure_with`]
//! (injected [`FailureSink`]). Argument checks live in [`args`] and always
//! fail with a typed error; the bare core only reports when no
//! [`ErrorKind`] is supplied.
//!
//! ```
//! use attest::{ErrorKind, Value, args, ensure};
//!
//! fn connect(host: &Value, port: &Value) -> Result<(), attest::AssertError> {
//!     args::string(host, "host")?;
//!     args::number(port, "port")?;
//!     ensure(true, || "unreachable".to_string(), Some(ErrorKind::Generic))
//! }
//!
//! assert!(connect(&Value::from("localhost"), &Value::from(8080.0)).is_ok());
//! assert!(connect(&Value::from(1.0), &Value::from(8080.0)).is_err());
//! ```

pub mod args;
mod checks;
pub mod errors;
mod predicates;
mod sink;
pub mod value;

// Public API re-exports
pub use checks::{ensure, ensure_with};
pub use errors::{AssertError, ErrorKind};
pub use predicates::{is_container, is_iterable, is_object, is_primitive};
pub use sink::{FailureSink, RecordingSink, TracingSink};
pub use value::{Function, Kind, PRIMITIVE_KINDS, Symbol, Value};
