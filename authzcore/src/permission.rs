use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fmt::Display,
    hash::Hash,
};

/// Contract for permission key types.  Keys are opaque to the decision
/// layer: compared by equality, hashable for set membership, and
/// rendered through `Display` when handed to the policy engine as the
/// action string.
pub trait PermissionKey: Clone + Eq + Hash + Display + Send + Sync {}

impl<T: Clone + Eq + Hash + Display + Send + Sync> PermissionKey for T {}

/// Explicit allow/deny of a single permission at the actor level,
/// overriding whatever the role provides.  Unique per (actor,
/// permission).
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct UserPermission<T> {
    pub permission: T,
    pub allowed: bool,
}

/// The permission set effective for one authorization check; produced
/// by merging and discarded afterwards, never persisted.
#[derive(Clone, Debug, Default)]
pub struct EffectivePermissionSet<T>(HashSet<T>);

mod impls;
