use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    /// Denotes custom application invariant; generally informative.
    #[error("application invariant violated: {0}")]
    AppInvariantViolation(String),
    /// The backing policy or role store could not be reached.
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("unknown error")]
    Unknown,
}
