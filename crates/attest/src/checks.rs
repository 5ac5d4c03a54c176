//! The assertion core.

use crate::errors::{AssertError, ErrorKind};
use crate::sink::{FailureSink, TracingSink};

/// Check a condition, reporting failure to `sink` or returning a typed error.
///
/// - `condition` true: returns `Ok(())` without invoking `message`.
/// - `condition` false with `kind` set: returns `Err` of that kind carrying
///   the message, for the caller to propagate.
/// - `condition` false with no kind: reports the message to `sink` and
///   returns `Ok(())`, leaving the caller's control flow unaffected.
pub fn ensure_with<F>(
    sink: &dyn FailureSink,
    condition: bool,
    message: F,
    kind: Option<ErrorKind>,
) -> Result<(), AssertError>
where
    F: FnOnce() -> String,
{
    if condition {
        return Ok(());
    }
    match kind {
        Some(kind) => Err(kind.raise(message())),
        None => {
            sink.report(&message());
            Ok(())
        }
    }
}

/// [`ensure_with`] using the default [`TracingSink`].
pub fn ensure<F>(condition: bool, message: F, kind: Option<ErrorKind>) -> Result<(), AssertError>
where
    F: FnOnce() -> String,
{
    ensure_with(&TracingSink, condition, message, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;
    use std::cell::Cell;

    #[test]
    fn test_true_condition_has_no_effect() {
        let sink = RecordingSink::new();
        let result = ensure_with(&sink, true, || "x".to_string(), None);
        assert!(result.is_ok());
        assert!(sink.messages().is_empty());

        let result = ensure_with(&sink, true, || "x".to_string(), Some(ErrorKind::Generic));
        assert!(result.is_ok());
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_true_condition_never_builds_the_message() {
        let built = Cell::new(false);
        let sink = RecordingSink::new();
        let result = ensure_with(
            &sink,
            true,
            || {
                built.set(true);
                "x".to_string()
            },
            Some(ErrorKind::Generic),
        );
        assert!(result.is_ok());
        assert!(!built.get());
    }

    #[test]
    fn test_false_condition_without_kind_reports_and_continues() {
        let sink = RecordingSink::new();
        let result = ensure_with(&sink, false, || "m".to_string(), None);
        assert!(result.is_ok());
        assert_eq!(sink.messages(), vec!["m"]);
    }

    #[test]
    fn test_false_condition_with_generic_kind_raises() {
        let sink = RecordingSink::new();
        let err = ensure_with(&sink, false, || "m".to_string(), Some(ErrorKind::Generic))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.to_string(), "m");
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_false_condition_with_invalid_argument_kind_raises() {
        let sink = RecordingSink::new();
        let err = ensure_with(
            &sink,
            false,
            || "m".to_string(),
            Some(ErrorKind::InvalidArgumentType),
        )
        .unwrap_err();
        assert!(matches!(err, AssertError::InvalidArgumentType { .. }));
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_default_sink_path_returns_ok() {
        // The tracing sink is fire-and-forget; without a subscriber the
        // event is dropped and the call still returns normally.
        let result = ensure(false, || "m".to_string(), None);
        assert!(result.is_ok());
    }
}
