//! Failure reporting sinks.
//!
//! Non-fatal assertion failures go through [`FailureSink`] rather than a
//! hardwired console write, so the core is testable without capturing real
//! log output.

use std::sync::Mutex;

use tracing::error;

/// Destination for non-fatal assertion failures.
pub trait FailureSink {
    /// Report a failed check. Fire-and-forget; no return value.
    fn report(&self, message: &str);
}

/// Reports failures as error-level tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl FailureSink for TracingSink {
    fn report(&self, message: &str) {
        error!(event = "attest.check_failed", message = %message);
    }
}

/// Captures reported messages instead of logging them.
///
/// For tests and for callers that collect failures for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl FailureSink for RecordingSink {
    fn report(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut guard) => guard.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl CaptureWriter {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_recording_sink_captures_in_order() {
        let sink = RecordingSink::new();
        sink.report("first");
        sink.report("second");
        assert_eq!(sink.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_recording_sink_starts_empty() {
        let sink = RecordingSink::new();
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_tracing_sink_emits_error_event() {
        let writer = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::ERROR)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingSink.report("boom");
        });

        let output = writer.contents();
        assert!(output.contains("ERROR"));
        assert!(output.contains("attest.check_failed"));
        assert!(output.contains("boom"));
    }
}
