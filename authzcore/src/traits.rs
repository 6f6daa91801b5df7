use async_trait::async_trait;
use crate::actor::Agent;
use crate::error::BackendError;
use crate::policy::{PolicyConfig, PolicyData};

/// Role-permission lookup backed by the role-management collaborator.
#[async_trait]
pub trait RoleSource<T>: Send + Sync {
    async fn role_permissions(
        &self,
        role: &str,
    ) -> Result<Vec<T>, BackendError>;
}

/// Resolves the policy configuration applicable to an (agent, resource)
/// pair.  Only consulted for operations evaluated in policy mode.
#[async_trait]
pub trait PolicyConfigSource: Send + Sync {
    async fn policy_config(
        &self,
        agent: &Agent,
        resource: &str,
    ) -> Result<PolicyConfig, BackendError>;
}

/// A live adapter to an external policy store.
///
/// The store may change without a process restart; built enforcers are
/// not refreshed automatically, so a change must be followed by an
/// explicit cache invalidation.
#[async_trait]
pub trait PolicyStore: Send + Sync {
    /// Logical identity of this store, used for cache keying in place
    /// of reference identity.
    fn key(&self) -> String;

    async fn load(&self) -> Result<PolicyData, BackendError>;
}
