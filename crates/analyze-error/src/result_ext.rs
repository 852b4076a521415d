use crate::{Error, ErrorPolicy, Severity};

/// Policy-driven emission for `Result`s at subsystem boundaries.
///
/// Each helper emits the error (if any) and hands the result back unchanged, so control flow
/// stays with the caller.
///
/// ```rust,ignore
/// let range = create_source_range(&ctx, &node).emit_error(&TracingPolicy)?;
/// ```
pub trait ResultExt<T> {
    /// Emit any error regardless of its classification.
    fn emit_event(self, policy: &impl ErrorPolicy) -> Self;

    /// Emit only if the policy classifies the error as a warning.
    fn emit_warning(self, policy: &impl ErrorPolicy) -> Self;

    /// Emit only if the policy classifies the error as an error.
    fn emit_error(self, policy: &impl ErrorPolicy) -> Self;

    /// Emit only if the policy classifies the error as fatal.
    fn emit_fatal(self, policy: &impl ErrorPolicy) -> Self;
}

fn emit_if<E>(err: &E, policy: &impl ErrorPolicy, wanted: Option<Severity>)
where
    E: Clone + Into<Error>,
{
    let err: Error = err.clone().into();
    match wanted {
        Some(severity) if policy.classify(&err) != severity => {}
        _ => policy.emit(&err),
    }
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Clone + Into<Error>,
{
    fn emit_event(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            emit_if(e, policy, None);
        }
        self
    }

    fn emit_warning(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            emit_if(e, policy, Some(Severity::Warning));
        }
        self
    }

    fn emit_error(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            emit_if(e, policy, Some(Severity::Error));
        }
        self
    }

    fn emit_fatal(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            emit_if(e, policy, Some(Severity::Fatal));
        }
        self
    }
}
