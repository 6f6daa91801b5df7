use thiserror::Error;
use authzcore::error::BackendError;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// No authorization metadata declared for the operation, or a
    /// collaborator required by the declared mode was never wired in.
    /// A configuration defect; always resolves to deny.
    #[error("authorization not configured for: {0}")]
    NotConfigured(String),
    /// The actor's policy scope excludes the target resource.
    #[error("resource not allowed: {0}")]
    ResourceNotAllowed(String),
    /// The path parameters do not derive a usable resource identifier.
    #[error("invalid resource parameters")]
    InvalidResourceParams,
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Rbac(#[from] authzrbac::error::Error),
}
