use serde::{Deserialize, Serialize};

/// The authorization requirements declared for one operation.
///
/// Declared once at setup time and immutable afterwards; read on every
/// invocation of the operation.  An empty permission list means the
/// operation requires no permissions at all, which is distinct from no
/// metadata having been declared (a configuration error that must fail
/// closed).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AuthorizationMetadata<T> {
    /// Permissions required at the operation level.  The actor needs at
    /// least one of these to pass the permission-key check.
    pub permissions: Vec<T>,
    /// The resource the operation targets, used as the evaluation
    /// target when no path parameters are supplied.
    pub resource: String,
    /// When set, the decision is delegated to the policy engine instead
    /// of the permission-key check.
    pub policy_mode: bool,
}

mod impls;
