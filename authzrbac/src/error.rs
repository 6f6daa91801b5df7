#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The policy source could not supply its rows.
    #[error(transparent)]
    Backend(#[from] authzcore::error::BackendError),
    /// Malformed model text or a failure inside the policy engine.
    #[error(transparent)]
    Casbin(#[from] casbin::Error),
}
