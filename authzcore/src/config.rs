use serde::{Deserialize, Serialize};

/// Configuration for the authorization layer.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AuthorizationConfig {
    /// Paths exempted from every check; consulted before metadata
    /// resolution is even attempted.  An entry ending with `*` matches
    /// by prefix.
    pub allow_always_paths: Vec<String>,
}

mod impls;
