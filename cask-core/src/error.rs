use thiserror::Error as ThisError;

/// Failure taxonomy of the crate.
///
/// Construction problems (`Configuration`, `Validation`, `DuplicateParameter`)
/// always abort statement building before any SQL is sent. `Execution` wraps
/// whatever the handle collaborator surfaced. `Transaction` is raised at the
/// outermost span boundary when the unit of work had to be rolled back but the
/// original failure is no longer flowing through the caller's result chain,
/// or when commit/rollback themselves fail.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Malformed fragment construction, e.g. an empty column alias.
    #[error("configuration: {0}")]
    Configuration(String),
    /// Statement assembled without its required parts.
    #[error("validation: {0}")]
    Validation(String),
    /// The same column was bound twice in one statement.
    #[error("parameter `{0}` was already set")]
    DuplicateParameter(String),
    /// A failure surfaced by the handle collaborator.
    #[error("execution failed: {0}")]
    Execution(#[source] anyhow::Error),
    /// The unit of work was rolled back.
    #[error("transaction rolled back: {0}")]
    Transaction(String),
}

impl Error {
    /// Wrap a driver-level failure.
    pub fn execution(cause: impl Into<anyhow::Error>) -> Self {
        Error::Execution(cause.into())
    }
}
