//! Policies for classifying and emitting errors.
//!
//! Library code returns errors and never logs them itself. Applications install an
//! [`ErrorPolicy`] at their boundaries to decide how errors are presented: tracing events,
//! a UI event bus, or nothing at all.
//!
//! ```rust,ignore
//! use analyze_error::{ErrorPolicy, Error, Severity};
//!
//! struct PrintPolicy;
//! impl ErrorPolicy for PrintPolicy {
//!     fn classify(&self, e: &Error) -> Severity { e.severity() }
//!     fn emit(&self, e: &Error) { eprintln!("[{:?}] {e}", self.classify(e)); }
//! }
//! ```

use crate::{Error, Severity};

pub trait ErrorPolicy: Send + Sync {
    fn classify(&self, error: &Error) -> Severity;

    fn emit(&self, error: &Error);
}

/// Classifies by the error's own severity and emits nothing.
#[derive(Debug, Clone, Default)]
pub struct NoopPolicy;

impl ErrorPolicy for NoopPolicy {
    fn classify(&self, error: &Error) -> Severity {
        error.severity()
    }

    fn emit(&self, _error: &Error) {}
}

/// Emits through `tracing`, at `WARN` for warnings and `ERROR` otherwise.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Default)]
pub struct TracingPolicy;

#[cfg(feature = "tracing")]
impl ErrorPolicy for TracingPolicy {
    fn classify(&self, error: &Error) -> Severity {
        error.severity()
    }

    fn emit(&self, error: &Error) {
        use tracing::{Level, event};

        match self.classify(error) {
            Severity::Warning => event!(Level::WARN, error = %error),
            Severity::Error | Severity::Fatal => event!(Level::ERROR, error = %error),
        }
    }
}

/// Delegates to several policies.
///
/// `classify` returns the highest severity any inner policy reports, falling back to the
/// error's own severity. `emit` calls every inner policy in insertion order.
#[derive(Default)]
pub struct CombinedPolicy {
    policies: Vec<Box<dyn ErrorPolicy>>,
}

impl CombinedPolicy {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    pub fn push<P: ErrorPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Box::new(policy));
        self
    }
}

impl ErrorPolicy for CombinedPolicy {
    fn classify(&self, error: &Error) -> Severity {
        self.policies
            .iter()
            .map(|p| p.classify(error))
            .fold(error.severity(), Severity::max)
    }

    fn emit(&self, error: &Error) {
        for p in &self.policies {
            p.emit(error);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::InvalidNodeError;

    /// Records every emitted error message.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingPolicy {
        pub(crate) seen: Arc<Mutex<Vec<String>>>,
        pub(crate) escalate: bool,
    }

    impl ErrorPolicy for RecordingPolicy {
        fn classify(&self, error: &Error) -> Severity {
            if self.escalate {
                Severity::Fatal
            } else {
                error.severity()
            }
        }

        fn emit(&self, error: &Error) {
            self.seen.lock().unwrap().push(error.to_string());
        }
    }

    fn inverted() -> Error {
        InvalidNodeError::InvertedRange { start: 3, end: 1 }.into()
    }

    #[test]
    fn combined_policy_takes_highest_severity() {
        let policy = CombinedPolicy::new()
            .push(NoopPolicy)
            .push(RecordingPolicy {
                escalate: true,
                ..Default::default()
            });
        assert_eq!(policy.classify(&inverted()), Severity::Fatal);
    }

    #[test]
    fn combined_policy_emits_to_all() {
        let first = RecordingPolicy::default();
        let second = RecordingPolicy::default();
        let policy = CombinedPolicy::new()
            .push(first.clone())
            .push(second.clone());
        policy.emit(&inverted());
        assert_eq!(first.seen.lock().unwrap().len(), 1);
        assert_eq!(second.seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn empty_combined_policy_uses_error_severity() {
        assert_eq!(CombinedPolicy::new().classify(&inverted()), Severity::Error);
    }
}
