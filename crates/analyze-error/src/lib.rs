pub mod invalid_node;
pub mod policy;
pub mod result_ext;

pub use invalid_node::{InvalidNodeError, InvalidNodeKind, PositionField};
pub use policy::{CombinedPolicy, ErrorPolicy, NoopPolicy};
#[cfg(feature = "tracing")]
pub use policy::TracingPolicy;
pub use result_ext::ResultExt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Workspace-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidNode(#[from] InvalidNodeError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn severity(&self) -> Severity {
        match self {
            Error::InvalidNode(_) => Severity::Error,
            Error::Internal(_) => Severity::Fatal,
        }
    }
}

/// Coarse-grained classification for programmatic handling of errors.
///
/// - Warning: non-fatal, forward progress is possible
/// - Error: caller-contract violations that should be bubbled up
/// - Fatal: irrecoverable for the current operation
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
    Fatal,
}
